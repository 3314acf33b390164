//! Known aliases between source country names and boundary feature names

/// Exact-match overrides, raw name → boundary feature name
pub const COUNTRY_NAME_OVERRIDES: [(&str, &str); 22] = [
    ("United States", "United States of America"),
    ("Russia", "Russian Federation"),
    ("Iran", "Iran (Islamic Republic of)"),
    ("Syria", "Syrian Arab Republic"),
    ("Moldova", "Republic of Moldova"),
    ("Tanzania", "United Republic of Tanzania"),
    ("Vietnam", "Viet Nam"),
    ("Laos", "Lao People's Democratic Republic"),
    ("South Korea", "Korea, Republic of"),
    ("North Korea", "Korea, Democratic People's Republic of"),
    ("Cape Verde", "Cabo Verde"),
    ("Ivory Coast", "Côte d'Ivoire"),
    ("Czechia", "Czech Republic"),
    ("Swaziland", "Eswatini"),
    ("The Bahamas", "Bahamas"),
    ("The Gambia", "Gambia"),
    ("Burma", "Myanmar"),
    ("North Macedonia", "Macedonia"),
    ("Venezuela", "Venezuela (Bolivarian Republic of)"),
    ("Bolivia", "Bolivia (Plurinational State of)"),
    ("Micronesia", "Micronesia (Federated States of)"),
    ("Brunei", "Brunei Darussalam"),
];
