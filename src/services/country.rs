use crate::models::country::CountryInfo;
use crate::models::response::GciResponse;
use crate::services::fetcher::{CountryFetcher, FetchError};
use crate::services::transformer::{self, TransformError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CountryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

pub struct CountryService {
    fetcher: CountryFetcher,
}

impl CountryService {
    pub fn new(fetcher: CountryFetcher) -> Self {
        Self { fetcher }
    }

    pub async fn get_country_info(&self, country_name: &str) -> Result<CountryInfo, CountryError> {
        let body = self.fetcher.fetch(country_name).await?;
        let info = transformer::transform(&body)?;
        Ok(info)
    }

    /// Looks a country up and folds any failure into the `failed` document.
    pub async fn lookup(&self, country_name: &str) -> GciResponse {
        info!("Country lookup for {:?}", country_name);

        match self.get_country_info(country_name).await {
            Ok(info) => {
                info!("Country lookup for {:?} resolved to {}", country_name, info.cca3);
                GciResponse::from(info)
            }
            Err(e) => {
                match &e {
                    CountryError::Fetch(err) => {
                        warn!("Fetching {:?} from countries API failed: {}", country_name, err)
                    }
                    CountryError::Transform(err) => {
                        warn!("Reading countries API response for {:?} failed: {}", country_name, err)
                    }
                }
                GciResponse::failed(e)
            }
        }
    }
}
