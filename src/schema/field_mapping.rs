//! Field mapping from raw record paths to normalized columns
//!
//! The mapping table is fixed. Which of its entries end up in a run's schema
//! depends on which source paths the extracted batch actually carries.

use arrow::datatypes::DataType;

/// Logical type of a normalized column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Finite named domain, dictionary-encoded in the table
    Categorical,
    /// Opaque text
    Text,
    /// Whole number
    Integer,
    /// Floating point number
    Float,
}

/// Columns of the normalized table, in maximal schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Gender,
    FirstName,
    LastName,
    Nationality,
    Age,
    Country,
    Latitude,
    Longitude,
    Registered,
    AgeRange,
}

impl Column {
    /// Every column in maximal schema order
    pub const ALL: [Self; 10] = [
        Self::Gender,
        Self::FirstName,
        Self::LastName,
        Self::Nationality,
        Self::Age,
        Self::Country,
        Self::Latitude,
        Self::Longitude,
        Self::Registered,
        Self::AgeRange,
    ];

    /// Name of the column in every sink
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gender => "Genero",
            Self::FirstName => "Nombre",
            Self::LastName => "Apellido",
            Self::Nationality => "Nacionalidad",
            Self::Age => "Edad",
            Self::Country => "Pais",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Registered => "Registered",
            Self::AgeRange => "RangoEdad",
        }
    }

    #[must_use]
    pub const fn field_type(self) -> FieldType {
        match self {
            Self::Gender | Self::Nationality | Self::Country | Self::AgeRange => {
                FieldType::Categorical
            }
            Self::FirstName | Self::LastName => FieldType::Text,
            Self::Age | Self::Registered => FieldType::Integer,
            Self::Latitude | Self::Longitude => FieldType::Float,
        }
    }

    /// Arrow type used in the in-memory table
    #[must_use]
    pub fn data_type(self) -> DataType {
        match self.field_type() {
            FieldType::Categorical => {
                DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::Utf8))
            }
            FieldType::Text => DataType::Utf8,
            FieldType::Integer => DataType::Int32,
            FieldType::Float => DataType::Float64,
        }
    }

    /// Age is the only column that can never be null: rows without it are dropped
    #[must_use]
    pub const fn nullable(self) -> bool {
        !matches!(self, Self::Age)
    }
}

/// A single raw path → column mapping
#[derive(Debug, Clone, Copy)]
pub struct FieldDefinition {
    /// Dotted path in the flattened raw record
    pub source_path: &'static str,
    /// Target column
    pub column: Column,
    /// Human readable description
    pub description: &'static str,
}

impl FieldDefinition {
    #[must_use]
    pub const fn new(source_path: &'static str, column: Column, description: &'static str) -> Self {
        Self {
            source_path,
            column,
            description,
        }
    }
}

/// The fixed selection map, in output order
pub static FIELD_MAPPINGS: [FieldDefinition; 9] = [
    FieldDefinition::new("gender", Column::Gender, "Gender"),
    FieldDefinition::new("name.first", Column::FirstName, "First name"),
    FieldDefinition::new("name.last", Column::LastName, "Last name"),
    FieldDefinition::new("nat", Column::Nationality, "Nationality code"),
    FieldDefinition::new("dob.age", Column::Age, "Age in years"),
    FieldDefinition::new("location.country", Column::Country, "Country of residence"),
    FieldDefinition::new(
        "location.coordinates.latitude",
        Column::Latitude,
        "Latitude in degrees",
    ),
    FieldDefinition::new(
        "location.coordinates.longitude",
        Column::Longitude,
        "Longitude in degrees",
    ),
    FieldDefinition::new("registered.age", Column::Registered, "Years since registration"),
];

/// Look up the mapping for a column
#[must_use]
pub fn mapping_for(column: Column) -> Option<&'static FieldDefinition> {
    FIELD_MAPPINGS.iter().find(|def| def.column == column)
}
