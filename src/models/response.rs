use crate::models::country::CountryInfo;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Body of every `/gci` response. The `status` tag is always the first key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum GciResponse {
    #[serde(rename = "success")]
    Success(CountryInfo),
    #[serde(rename = "failed")]
    Failed { errmsg: String },
}

impl GciResponse {
    pub fn failed(error: impl Display) -> Self {
        GciResponse::Failed {
            errmsg: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GciResponse::Success(_))
    }
}

impl From<CountryInfo> for GciResponse {
    fn from(info: CountryInfo) -> Self {
        GciResponse::Success(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_serializes_status_and_errmsg_only() {
        let json = serde_json::to_value(GciResponse::failed("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "failed", "errmsg": "boom"}));
    }

    #[test]
    fn status_is_first_key() {
        let body = serde_json::to_string(&GciResponse::failed("boom")).unwrap();
        assert!(body.starts_with(r#"{"status":"failed""#));
    }
}
