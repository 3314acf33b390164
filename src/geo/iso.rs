//! ISO 3166-1 country codes used by the code-lookup fallback.
//!
//! The table carries every officially assigned alpha-2 code with its
//! alpha-3 code, short name and a few common spellings.

/// One ISO 3166-1 entry
#[derive(Debug, Clone, Copy)]
pub struct IsoCountry {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    /// Common alternative spellings
    pub aliases: &'static [&'static str],
}

const fn iso(
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
) -> IsoCountry {
    IsoCountry {
        alpha2,
        alpha3,
        name,
        aliases,
    }
}

/// All officially assigned ISO 3166-1 entries, ordered by alpha-2 code
pub const ISO_COUNTRIES: &[IsoCountry] = &[
    iso("AD", "AND", "Andorra", &[]),
    iso("AE", "ARE", "United Arab Emirates", &["UAE"]),
    iso("AF", "AFG", "Afghanistan", &[]),
    iso("AG", "ATG", "Antigua and Barbuda", &["Antigua"]),
    iso("AI", "AIA", "Anguilla", &[]),
    iso("AL", "ALB", "Albania", &[]),
    iso("AM", "ARM", "Armenia", &[]),
    iso("AO", "AGO", "Angola", &[]),
    iso("AQ", "ATA", "Antarctica", &[]),
    iso("AR", "ARG", "Argentina", &[]),
    iso("AS", "ASM", "American Samoa", &[]),
    iso("AT", "AUT", "Austria", &[]),
    iso("AU", "AUS", "Australia", &[]),
    iso("AW", "ABW", "Aruba", &[]),
    iso("AX", "ALA", "Åland Islands", &["Aland Islands"]),
    iso("AZ", "AZE", "Azerbaijan", &[]),
    iso("BA", "BIH", "Bosnia and Herzegovina", &["Bosnia"]),
    iso("BB", "BRB", "Barbados", &[]),
    iso("BD", "BGD", "Bangladesh", &[]),
    iso("BE", "BEL", "Belgium", &[]),
    iso("BF", "BFA", "Burkina Faso", &[]),
    iso("BG", "BGR", "Bulgaria", &[]),
    iso("BH", "BHR", "Bahrain", &[]),
    iso("BI", "BDI", "Burundi", &[]),
    iso("BJ", "BEN", "Benin", &[]),
    iso("BL", "BLM", "Saint Barthélemy", &[]),
    iso("BM", "BMU", "Bermuda", &[]),
    iso("BN", "BRN", "Brunei Darussalam", &["Brunei"]),
    iso("BO", "BOL", "Bolivia, Plurinational State of", &["Bolivia"]),
    iso("BQ", "BES", "Bonaire, Sint Eustatius and Saba", &[]),
    iso("BR", "BRA", "Brazil", &["Brasil"]),
    iso("BS", "BHS", "Bahamas", &["The Bahamas"]),
    iso("BT", "BTN", "Bhutan", &[]),
    iso("BV", "BVT", "Bouvet Island", &[]),
    iso("BW", "BWA", "Botswana", &[]),
    iso("BY", "BLR", "Belarus", &[]),
    iso("BZ", "BLZ", "Belize", &[]),
    iso("CA", "CAN", "Canada", &[]),
    iso("CC", "CCK", "Cocos (Keeling) Islands", &[]),
    iso(
        "CD",
        "COD",
        "Congo, The Democratic Republic of the",
        &["Democratic Republic of the Congo", "DR Congo"],
    ),
    iso("CF", "CAF", "Central African Republic", &[]),
    iso("CG", "COG", "Congo", &["Republic of the Congo"]),
    iso("CH", "CHE", "Switzerland", &["Schweiz", "Suisse"]),
    iso("CI", "CIV", "Côte d'Ivoire", &["Ivory Coast"]),
    iso("CK", "COK", "Cook Islands", &[]),
    iso("CL", "CHL", "Chile", &[]),
    iso("CM", "CMR", "Cameroon", &[]),
    iso("CN", "CHN", "China", &[]),
    iso("CO", "COL", "Colombia", &[]),
    iso("CR", "CRI", "Costa Rica", &[]),
    iso("CU", "CUB", "Cuba", &[]),
    iso("CV", "CPV", "Cabo Verde", &["Cape Verde"]),
    iso("CW", "CUW", "Curaçao", &[]),
    iso("CX", "CXR", "Christmas Island", &[]),
    iso("CY", "CYP", "Cyprus", &[]),
    iso("CZ", "CZE", "Czechia", &["Czech Republic"]),
    iso("DE", "DEU", "Germany", &["Deutschland"]),
    iso("DJ", "DJI", "Djibouti", &[]),
    iso("DK", "DNK", "Denmark", &["Danmark"]),
    iso("DM", "DMA", "Dominica", &[]),
    iso("DO", "DOM", "Dominican Republic", &[]),
    iso("DZ", "DZA", "Algeria", &[]),
    iso("EC", "ECU", "Ecuador", &[]),
    iso("EE", "EST", "Estonia", &[]),
    iso("EG", "EGY", "Egypt", &[]),
    iso("EH", "ESH", "Western Sahara", &[]),
    iso("ER", "ERI", "Eritrea", &[]),
    iso("ES", "ESP", "Spain", &["España"]),
    iso("ET", "ETH", "Ethiopia", &[]),
    iso("FI", "FIN", "Finland", &["Suomi"]),
    iso("FJ", "FJI", "Fiji", &[]),
    iso("FK", "FLK", "Falkland Islands (Malvinas)", &["Falkland Islands"]),
    iso("FM", "FSM", "Micronesia, Federated States of", &["Micronesia"]),
    iso("FO", "FRO", "Faroe Islands", &[]),
    iso("FR", "FRA", "France", &[]),
    iso("GA", "GAB", "Gabon", &[]),
    iso("GB", "GBR", "United Kingdom", &["UK", "Great Britain", "England"]),
    iso("GD", "GRD", "Grenada", &[]),
    iso("GE", "GEO", "Georgia", &[]),
    iso("GF", "GUF", "French Guiana", &[]),
    iso("GG", "GGY", "Guernsey", &[]),
    iso("GH", "GHA", "Ghana", &[]),
    iso("GI", "GIB", "Gibraltar", &[]),
    iso("GL", "GRL", "Greenland", &[]),
    iso("GM", "GMB", "Gambia", &["The Gambia"]),
    iso("GN", "GIN", "Guinea", &[]),
    iso("GP", "GLP", "Guadeloupe", &[]),
    iso("GQ", "GNQ", "Equatorial Guinea", &[]),
    iso("GR", "GRC", "Greece", &[]),
    iso("GS", "SGS", "South Georgia and the South Sandwich Islands", &[]),
    iso("GT", "GTM", "Guatemala", &[]),
    iso("GU", "GUM", "Guam", &[]),
    iso("GW", "GNB", "Guinea-Bissau", &["Guinea Bissau"]),
    iso("GY", "GUY", "Guyana", &[]),
    iso("HK", "HKG", "Hong Kong", &[]),
    iso("HM", "HMD", "Heard Island and McDonald Islands", &[]),
    iso("HN", "HND", "Honduras", &[]),
    iso("HR", "HRV", "Croatia", &[]),
    iso("HT", "HTI", "Haiti", &[]),
    iso("HU", "HUN", "Hungary", &[]),
    iso("ID", "IDN", "Indonesia", &[]),
    iso("IE", "IRL", "Ireland", &[]),
    iso("IL", "ISR", "Israel", &[]),
    iso("IM", "IMN", "Isle of Man", &[]),
    iso("IN", "IND", "India", &[]),
    iso("IO", "IOT", "British Indian Ocean Territory", &[]),
    iso("IQ", "IRQ", "Iraq", &[]),
    iso("IR", "IRN", "Iran, Islamic Republic of", &["Iran"]),
    iso("IS", "ISL", "Iceland", &[]),
    iso("IT", "ITA", "Italy", &["Italia"]),
    iso("JE", "JEY", "Jersey", &[]),
    iso("JM", "JAM", "Jamaica", &[]),
    iso("JO", "JOR", "Jordan", &[]),
    iso("JP", "JPN", "Japan", &[]),
    iso("KE", "KEN", "Kenya", &[]),
    iso("KG", "KGZ", "Kyrgyzstan", &[]),
    iso("KH", "KHM", "Cambodia", &[]),
    iso("KI", "KIR", "Kiribati", &[]),
    iso("KM", "COM", "Comoros", &[]),
    iso("KN", "KNA", "Saint Kitts and Nevis", &[]),
    iso("KP", "PRK", "Korea, Democratic People's Republic of", &["North Korea"]),
    iso("KR", "KOR", "Korea, Republic of", &["South Korea"]),
    iso("KW", "KWT", "Kuwait", &[]),
    iso("KY", "CYM", "Cayman Islands", &[]),
    iso("KZ", "KAZ", "Kazakhstan", &[]),
    iso("LA", "LAO", "Lao People's Democratic Republic", &["Laos"]),
    iso("LB", "LBN", "Lebanon", &[]),
    iso("LC", "LCA", "Saint Lucia", &[]),
    iso("LI", "LIE", "Liechtenstein", &[]),
    iso("LK", "LKA", "Sri Lanka", &[]),
    iso("LR", "LBR", "Liberia", &[]),
    iso("LS", "LSO", "Lesotho", &[]),
    iso("LT", "LTU", "Lithuania", &[]),
    iso("LU", "LUX", "Luxembourg", &[]),
    iso("LV", "LVA", "Latvia", &[]),
    iso("LY", "LBY", "Libya", &[]),
    iso("MA", "MAR", "Morocco", &[]),
    iso("MC", "MCO", "Monaco", &[]),
    iso("MD", "MDA", "Moldova, Republic of", &["Moldova"]),
    iso("ME", "MNE", "Montenegro", &[]),
    iso("MF", "MAF", "Saint Martin (French part)", &[]),
    iso("MG", "MDG", "Madagascar", &[]),
    iso("MH", "MHL", "Marshall Islands", &[]),
    iso("MK", "MKD", "North Macedonia", &["Macedonia"]),
    iso("ML", "MLI", "Mali", &[]),
    iso("MM", "MMR", "Myanmar", &["Burma"]),
    iso("MN", "MNG", "Mongolia", &[]),
    iso("MO", "MAC", "Macao", &["Macau"]),
    iso("MP", "MNP", "Northern Mariana Islands", &[]),
    iso("MQ", "MTQ", "Martinique", &[]),
    iso("MR", "MRT", "Mauritania", &[]),
    iso("MS", "MSR", "Montserrat", &[]),
    iso("MT", "MLT", "Malta", &[]),
    iso("MU", "MUS", "Mauritius", &[]),
    iso("MV", "MDV", "Maldives", &[]),
    iso("MW", "MWI", "Malawi", &[]),
    iso("MX", "MEX", "Mexico", &["México"]),
    iso("MY", "MYS", "Malaysia", &[]),
    iso("MZ", "MOZ", "Mozambique", &[]),
    iso("NA", "NAM", "Namibia", &[]),
    iso("NC", "NCL", "New Caledonia", &[]),
    iso("NE", "NER", "Niger", &[]),
    iso("NF", "NFK", "Norfolk Island", &[]),
    iso("NG", "NGA", "Nigeria", &[]),
    iso("NI", "NIC", "Nicaragua", &[]),
    iso("NL", "NLD", "Netherlands", &["Holland", "The Netherlands"]),
    iso("NO", "NOR", "Norway", &["Norge"]),
    iso("NP", "NPL", "Nepal", &[]),
    iso("NR", "NRU", "Nauru", &[]),
    iso("NU", "NIU", "Niue", &[]),
    iso("NZ", "NZL", "New Zealand", &[]),
    iso("OM", "OMN", "Oman", &[]),
    iso("PA", "PAN", "Panama", &[]),
    iso("PE", "PER", "Peru", &[]),
    iso("PF", "PYF", "French Polynesia", &[]),
    iso("PG", "PNG", "Papua New Guinea", &[]),
    iso("PH", "PHL", "Philippines", &[]),
    iso("PK", "PAK", "Pakistan", &[]),
    iso("PL", "POL", "Poland", &["Polska"]),
    iso("PM", "SPM", "Saint Pierre and Miquelon", &[]),
    iso("PN", "PCN", "Pitcairn", &[]),
    iso("PR", "PRI", "Puerto Rico", &[]),
    iso("PS", "PSE", "Palestine, State of", &["Palestine"]),
    iso("PT", "PRT", "Portugal", &[]),
    iso("PW", "PLW", "Palau", &[]),
    iso("PY", "PRY", "Paraguay", &[]),
    iso("QA", "QAT", "Qatar", &[]),
    iso("RE", "REU", "Réunion", &[]),
    iso("RO", "ROU", "Romania", &[]),
    iso("RS", "SRB", "Serbia", &["Republic of Serbia"]),
    iso("RU", "RUS", "Russian Federation", &["Russia"]),
    iso("RW", "RWA", "Rwanda", &[]),
    iso("SA", "SAU", "Saudi Arabia", &[]),
    iso("SB", "SLB", "Solomon Islands", &[]),
    iso("SC", "SYC", "Seychelles", &[]),
    iso("SD", "SDN", "Sudan", &[]),
    iso("SE", "SWE", "Sweden", &["Sverige"]),
    iso("SG", "SGP", "Singapore", &[]),
    iso("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha", &["Saint Helena"]),
    iso("SI", "SVN", "Slovenia", &[]),
    iso("SJ", "SJM", "Svalbard and Jan Mayen", &[]),
    iso("SK", "SVK", "Slovakia", &[]),
    iso("SL", "SLE", "Sierra Leone", &[]),
    iso("SM", "SMR", "San Marino", &[]),
    iso("SN", "SEN", "Senegal", &[]),
    iso("SO", "SOM", "Somalia", &[]),
    iso("SR", "SUR", "Suriname", &[]),
    iso("SS", "SSD", "South Sudan", &[]),
    iso("ST", "STP", "Sao Tome and Principe", &[]),
    iso("SV", "SLV", "El Salvador", &[]),
    iso("SX", "SXM", "Sint Maarten (Dutch part)", &[]),
    iso("SY", "SYR", "Syrian Arab Republic", &["Syria"]),
    iso("SZ", "SWZ", "Eswatini", &["Swaziland"]),
    iso("TC", "TCA", "Turks and Caicos Islands", &[]),
    iso("TD", "TCD", "Chad", &[]),
    iso("TF", "ATF", "French Southern Territories", &[]),
    iso("TG", "TGO", "Togo", &[]),
    iso("TH", "THA", "Thailand", &[]),
    iso("TJ", "TJK", "Tajikistan", &[]),
    iso("TK", "TKL", "Tokelau", &[]),
    iso("TL", "TLS", "Timor-Leste", &["East Timor"]),
    iso("TM", "TKM", "Turkmenistan", &[]),
    iso("TN", "TUN", "Tunisia", &[]),
    iso("TO", "TON", "Tonga", &[]),
    iso("TR", "TUR", "Türkiye", &["Turkey"]),
    iso("TT", "TTO", "Trinidad and Tobago", &[]),
    iso("TV", "TUV", "Tuvalu", &[]),
    iso("TW", "TWN", "Taiwan, Province of China", &["Taiwan"]),
    iso("TZ", "TZA", "Tanzania, United Republic of", &["Tanzania", "United Republic of Tanzania"]),
    iso("UA", "UKR", "Ukraine", &[]),
    iso("UG", "UGA", "Uganda", &[]),
    iso("UM", "UMI", "United States Minor Outlying Islands", &[]),
    iso("US", "USA", "United States", &["United States of America", "USA"]),
    iso("UY", "URY", "Uruguay", &[]),
    iso("UZ", "UZB", "Uzbekistan", &[]),
    iso("VA", "VAT", "Holy See (Vatican City State)", &["Vatican"]),
    iso("VC", "VCT", "Saint Vincent and the Grenadines", &[]),
    iso("VE", "VEN", "Venezuela, Bolivarian Republic of", &["Venezuela"]),
    iso("VG", "VGB", "Virgin Islands, British", &["British Virgin Islands"]),
    iso("VI", "VIR", "Virgin Islands, U.S.", &["United States Virgin Islands"]),
    iso("VN", "VNM", "Viet Nam", &["Vietnam"]),
    iso("VU", "VUT", "Vanuatu", &[]),
    iso("WF", "WLF", "Wallis and Futuna", &[]),
    iso("WS", "WSM", "Samoa", &[]),
    iso("YE", "YEM", "Yemen", &[]),
    iso("YT", "MYT", "Mayotte", &[]),
    iso("ZA", "ZAF", "South Africa", &[]),
    iso("ZM", "ZMB", "Zambia", &[]),
    iso("ZW", "ZWE", "Zimbabwe", &[]),
];

/// Look up a country by alpha-2 code, alpha-3 code, name or alias,
/// ignoring case and surrounding whitespace
#[must_use]
pub fn lookup(query: &str) -> Option<&'static IsoCountry> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    ISO_COUNTRIES.iter().find(|country| {
        country.alpha2.eq_ignore_ascii_case(query)
            || country.alpha3.eq_ignore_ascii_case(query)
            || country.name.to_lowercase() == query.to_lowercase()
            || country
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase() == query.to_lowercase())
    })
}
