use serde::{Deserialize, Serialize};

/// Flattened view of a single REST Countries record.
///
/// Field order is the order keys appear in the serialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    pub country_name: String,
    pub official_name: String,
    pub capital: String,
    pub flag_path: String,
    pub flag_description: String,
    pub coat_of_arms: String,
    pub cca2: String,
    pub cca3: String,
    pub tld: String,

    pub region: String,
    pub subregion: String,
    pub area: f64,
    pub landlocked: bool,
    pub borders: String,
    pub coordinates: String,
    pub google_maps: String,
    pub open_street_maps: String,

    pub population: i64,
    pub languages: String,
    pub demonyms: String,

    pub currencies: String,
    pub calling_code: String,

    pub timezone: String,
    pub continent: String,
    pub driving_side: String,
    pub un_member: bool,
    pub independent: bool,
    pub fifa: String,
}
