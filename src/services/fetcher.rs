use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid countries URL: {0}")]
    InvalidUrl(String),
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Thin wrapper over a shared reqwest client that knows how to address the
/// REST Countries name endpoint.
#[derive(Debug, Clone)]
pub struct CountryFetcher {
    client: Client,
    base_url: Url,
}

impl CountryFetcher {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/v3.1/name/{country_name}` with the name escaped as one segment.
    pub fn country_url(&self, country_name: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["v3.1", "name", country_name]);
        Ok(url)
    }

    /// Single GET, body returned as text on 2xx.
    pub async fn fetch(&self, country_name: &str) -> Result<String, FetchError> {
        let url = self.country_url(country_name)?;
        debug!("Requesting {}", url);

        let response = self.client.get(url).send().await?;
        debug!("Upstream answered with {}", response.status());

        let body = response.error_for_status()?.text().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher(base: &str) -> CountryFetcher {
        CountryFetcher::new(Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn builds_name_endpoint_url() {
        let url = fetcher("https://restcountries.com")
            .country_url("France")
            .unwrap();
        assert_eq!(url.as_str(), "https://restcountries.com/v3.1/name/France");
    }

    #[test]
    fn ignores_trailing_slash_on_base() {
        let url = fetcher("http://localhost:9000/")
            .country_url("peru")
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/v3.1/name/peru");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let url = fetcher("http://localhost:9000/proxy/")
            .country_url("peru")
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/proxy/v3.1/name/peru");
    }

    #[test]
    fn escapes_name_into_a_single_segment() {
        let f = fetcher("https://restcountries.com");
        assert_eq!(
            f.country_url("United States").unwrap().as_str(),
            "https://restcountries.com/v3.1/name/United%20States"
        );
        assert_eq!(
            f.country_url("a/b?c#d").unwrap().as_str(),
            "https://restcountries.com/v3.1/name/a%2Fb%3Fc%23d"
        );
    }

    #[test]
    fn does_not_trim_the_name() {
        let url = fetcher("https://restcountries.com")
            .country_url(" chile ")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://restcountries.com/v3.1/name/%20chile%20"
        );
    }

    #[test]
    fn rejects_base_that_cannot_hold_a_path() {
        let err = fetcher("mailto:someone@example.com")
            .country_url("peru")
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
