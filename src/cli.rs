use crate::config::{parse_countries_url, Config, ConfigError};
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "countryinfosrv",
    about = "HTTP server that flattens REST Countries lookups for front ends",
    version
)]
pub struct Args {
    /// Address to bind, overrides SERVER_HOST
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides SERVER_PORT
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Base URL of the countries API, overrides COUNTRIES_URL
    #[arg(long)]
    pub countries_url: Option<String>,
}

impl Args {
    pub fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(host) = &self.host {
            config.server_host = host.clone();
        }
        if let Some(port) = self.port {
            config.server_port = port;
        }
        if let Some(url) = &self.countries_url {
            config.countries_url = parse_countries_url(url)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config::from_lookup(|_| None).unwrap()
    }

    #[test]
    fn no_flags_keep_config() {
        let config = Args::parse_from(["countryinfosrv"]).apply(base_config()).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.countries_url.as_str(), "https://restcountries.com/");
    }

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "countryinfosrv",
            "--host",
            "127.0.0.1",
            "-p",
            "3000",
            "--countries-url",
            "http://localhost:4000",
        ]);
        let config = args.apply(base_config()).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.countries_url.as_str(), "http://localhost:4000/");
    }

    #[test]
    fn invalid_url_flag_is_an_error() {
        let args = Args {
            countries_url: Some("nope".to_string()),
            ..Args::default()
        };
        assert!(args.apply(base_config()).is_err());
    }
}
