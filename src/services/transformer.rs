//! Turns a raw REST Countries `/v3.1/name` body into a [`CountryInfo`].
//!
//! Only the first record of the result array is used. Every field has a
//! fallback, so a record that is present but sparse still produces a complete
//! document; only a body that cannot be read as a list of country objects is
//! an error.

use crate::models::country::CountryInfo;
use crate::utils::json::{
    as_f64, as_text, bool_or, f64_or, first_text_or, i64_or, join_array_or, join_values_or,
    non_empty_array, non_empty_object, text_or,
};
use serde_json::Value;
use thiserror::Error;

const NOT_AVAILABLE: &str = "N/A";
const NO_LINK: &str = "#";
const SEPARATOR: &str = ", ";

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Invalid JSON from countries API: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Unexpected response from countries API: expected an array of countries")]
    NotAnArray,
    #[error("No country found")]
    NoMatch,
    #[error("Unexpected response from countries API: country record is not an object")]
    NotAnObject,
}

pub fn transform(body: &str) -> Result<CountryInfo, TransformError> {
    let parsed: Value = serde_json::from_str(body)?;
    let countries = parsed.as_array().ok_or(TransformError::NotAnArray)?;
    let country = countries.first().ok_or(TransformError::NoMatch)?;

    if !country.is_object() {
        return Err(TransformError::NotAnObject);
    }

    Ok(flatten(country))
}

pub fn flatten(c: &Value) -> CountryInfo {
    CountryInfo {
        country_name: text_or(c, &["name", "common"], NOT_AVAILABLE),
        official_name: text_or(c, &["name", "official"], NOT_AVAILABLE),
        capital: first_text_or(c, &["capital"], NOT_AVAILABLE),
        flag_path: text_or(c, &["flags", "png"], ""),
        flag_description: text_or(c, &["flags", "alt"], ""),
        coat_of_arms: text_or(c, &["coatOfArms", "png"], ""),
        cca2: text_or(c, &["cca2"], NOT_AVAILABLE),
        cca3: text_or(c, &["cca3"], NOT_AVAILABLE),
        tld: first_text_or(c, &["tld"], NOT_AVAILABLE),

        region: text_or(c, &["region"], NOT_AVAILABLE),
        subregion: text_or(c, &["subregion"], NOT_AVAILABLE),
        area: f64_or(c, &["area"], 0.0),
        landlocked: bool_or(c, &["landlocked"], false),
        borders: join_array_or(c, &["borders"], SEPARATOR, "None"),
        coordinates: format_coordinates(c),
        google_maps: text_or(c, &["maps", "googleMaps"], NO_LINK),
        open_street_maps: text_or(c, &["maps", "openStreetMaps"], NO_LINK),

        population: i64_or(c, &["population"], 0),
        languages: join_values_or(c, &["languages"], SEPARATOR, NOT_AVAILABLE),
        demonyms: text_or(c, &["demonyms", "eng", "m"], NOT_AVAILABLE),

        currencies: format_currencies(c),
        calling_code: format_calling_code(c),

        timezone: first_text_or(c, &["timezones"], NOT_AVAILABLE),
        continent: first_text_or(c, &["continents"], NOT_AVAILABLE),
        driving_side: text_or(c, &["car", "side"], NOT_AVAILABLE),
        un_member: bool_or(c, &["unMember"], false),
        independent: bool_or(c, &["independent"], false),
        fifa: text_or(c, &["fifa"], NOT_AVAILABLE),
    }
}

/// `latlng` as `"48.86°N, 2.35°E"`.
pub fn format_coordinates(country: &Value) -> String {
    let latlng = match non_empty_array(country, &["latlng"]) {
        Some(latlng) if latlng.len() >= 2 => latlng,
        _ => return NOT_AVAILABLE.to_string(),
    };

    let lat = as_f64(&latlng[0]).unwrap_or(0.0);
    let lng = as_f64(&latlng[1]).unwrap_or(0.0);
    let lat_dir = if lat >= 0.0 { 'N' } else { 'S' };
    let lng_dir = if lng >= 0.0 { 'E' } else { 'W' };

    format!(
        "{}°{}, {}°{}",
        two_decimals_half_up(lat.abs()),
        lat_dir,
        two_decimals_half_up(lng.abs()),
        lng_dir
    )
}

/// Two decimal places, rounding half up on the shortest decimal form of
/// `value`, so `0.125` becomes `0.13` and `2.675` becomes `2.68`.
fn two_decimals_half_up(value: f64) -> String {
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<char> = int_part
        .chars()
        .chain(frac_part.chars().chain(std::iter::repeat('0')).take(2))
        .collect();

    let round_up = frac_part.chars().nth(2).is_some_and(|d| d >= '5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == '9' {
                *digit = '0';
            } else {
                *digit = char::from(*digit as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, '1');
        }
    }

    let (whole, cents) = digits.split_at(digits.len() - 2);
    format!(
        "{}.{}",
        whole.iter().collect::<String>(),
        cents.iter().collect::<String>()
    )
}

/// Each currency as `"{name} ({symbol})"`, or just the name when there is no
/// symbol.
pub fn format_currencies(country: &Value) -> String {
    let Some(currencies) = non_empty_object(country, &["currencies"]) else {
        return NOT_AVAILABLE.to_string();
    };

    currencies
        .values()
        .map(|currency| {
            let name = text_or(currency, &["name"], "");
            let symbol = text_or(currency, &["symbol"], "");
            if symbol.is_empty() {
                name
            } else {
                format!("{} ({})", name, symbol)
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// `idd.root` followed by the first `idd.suffixes` entry.
pub fn format_calling_code(country: &Value) -> String {
    let root = text_or(country, &["idd", "root"], "");
    let first_suffix = non_empty_array(country, &["idd", "suffixes"])
        .map(|suffixes| as_text(&suffixes[0]).unwrap_or_default());

    match first_suffix {
        Some(suffix) if !root.is_empty() => format!("{}{}", root, suffix),
        _ => NOT_AVAILABLE.to_string(),
    }
}
