use dotenvy::dotenv;
use reqwest::Url;
use std::env;
use thiserror::Error;

pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid countries URL {url:?}: {reason}")]
    InvalidCountriesUrl { url: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub countries_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Missing entries take their
    /// defaults and an unparsable port falls back to 8080; an invalid
    /// `COUNTRIES_URL` is an error.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            server_host: get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: get("SERVER_PORT")
                .and_then(|port| port.trim().parse().ok())
                .unwrap_or(8080),
            countries_url: parse_countries_url(
                &get("COUNTRIES_URL").unwrap_or_else(|| DEFAULT_COUNTRIES_URL.to_string()),
            )?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

pub fn parse_countries_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidCountriesUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(format!("unsupported scheme {}", scheme))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.countries_url.as_str(), "https://restcountries.com/");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_values() {
        let config = config_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9090"),
            ("COUNTRIES_URL", "http://localhost:4000/"),
        ])
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.countries_url.as_str(), "http://localhost:4000/");
    }

    #[test]
    fn unparsable_port_falls_back() {
        let config = config_from(&[("SERVER_PORT", "eighty")]).unwrap();
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn rejects_bad_countries_url() {
        assert!(config_from(&[("COUNTRIES_URL", "not a url")]).is_err());
        assert!(matches!(
            parse_countries_url("ftp://restcountries.com"),
            Err(ConfigError::InvalidCountriesUrl { .. })
        ));
    }
}
