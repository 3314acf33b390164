use std::path::Path;

use serde_json::{Value, json};
use user_etl::config::EtlConfig;
use user_etl::error::{BoundaryError, ExtractionError};
use user_etl::extract::{ExtractRequest, RawBatch, RecordSource};
use user_etl::geo::{BoundaryDataset, BoundaryProvider};

/// Boundary features used across tests, ids are ISO alpha-3
pub const BOUNDARY_GEOJSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        { "type": "Feature", "id": "USA", "properties": { "name": "United States of America" },
          "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]] } },
        { "type": "Feature", "id": "ESP", "properties": { "name": "Spain" },
          "geometry": { "type": "Polygon", "coordinates": [[[2,2],[3,2],[3,3],[2,2]]] } },
        { "type": "Feature", "id": "FRA", "properties": { "name": "France" },
          "geometry": { "type": "Polygon", "coordinates": [[[4,4],[5,4],[5,5],[4,4]]] } },
        { "type": "Feature", "id": "SRB", "properties": { "name": "Republic of Serbia" },
          "geometry": { "type": "Polygon", "coordinates": [[[6,6],[7,6],[7,7],[6,6]]] } },
        { "type": "Feature", "id": "NOR", "properties": { "name": "Norway" },
          "geometry": { "type": "Polygon", "coordinates": [[[8,8],[9,8],[9,9],[8,8]]] } }
    ]
}"#;

/// In-memory record source returning a canned response
pub enum FakeSource {
    /// A decoded response body
    Body(Value),
    /// A non-success HTTP status
    Status(u16),
}

impl FakeSource {
    /// Source answering with `{"results": records}`
    #[must_use]
    pub fn with_records(records: Vec<Value>) -> Self {
        Self::Body(json!({ "results": records, "info": { "seed": "1234" } }))
    }
}

impl RecordSource for FakeSource {
    async fn fetch(&self, request: &ExtractRequest) -> Result<RawBatch, ExtractionError> {
        match self {
            Self::Body(body) => {
                let mut body = body.clone();
                if let Some(Value::Array(records)) = body.get_mut("results") {
                    records.truncate(request.results());
                }
                RawBatch::from_response(body)
            }
            Self::Status(status) => Err(ExtractionError::Status {
                endpoint: "fake://users".to_string(),
                status: *status,
            }),
        }
    }

    fn describe(&self) -> String {
        "fake://users".to_string()
    }
}

/// Boundary provider parsing a fixed document, or failing
pub struct StaticBoundary(pub Option<&'static str>);

impl StaticBoundary {
    #[must_use]
    pub fn available() -> Self {
        Self(Some(BOUNDARY_GEOJSON))
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl BoundaryProvider for StaticBoundary {
    async fn load(&self) -> Result<BoundaryDataset, BoundaryError> {
        match self.0 {
            Some(text) => BoundaryDataset::from_geojson_str(text),
            None => Err(BoundaryError::Status {
                url: "fake://boundaries".to_string(),
                status: 503,
            }),
        }
    }
}

/// A complete raw user as the record source nests it
#[must_use]
pub fn raw_user(gender: &str, age: u32, country: &str) -> Value {
    json!({
        "gender": gender,
        "name": { "title": "Mx", "first": format!("First{age}"), "last": "Tester" },
        "location": {
            "city": "Somewhere",
            "country": country,
            "coordinates": { "latitude": "-42.1750", "longitude": "171.2560" }
        },
        "nat": "US",
        "dob": { "date": "1980-01-01T00:00:00.000Z", "age": age },
        "email": "tester@example.com"
    })
}

/// The three-user scenario: ages 17, 18, 70 and genders male, female, male
#[must_use]
pub fn three_users() -> Vec<Value> {
    vec![
        raw_user("male", 17, "United States"),
        raw_user("female", 18, "Spain"),
        raw_user("male", 70, "Atlantis"),
    ]
}

/// Configuration writing every artifact below `dir`
#[must_use]
pub fn test_config(dir: &Path) -> EtlConfig {
    EtlConfig::default()
        .with_output_dir(dir.join("Resultados"))
        .with_sqlite(dir.join("usuarios.db"), "usuarios")
}
