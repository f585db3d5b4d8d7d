//! Countryinfosrv - flattened country facts over HTTP
//!
//! This library provides the lookup, transformation and routing used by the
//! countryinfosrv binary, which answers `POST /gci` with a single-level JSON
//! document built from the REST Countries API.

use crate::services::country::CountryService;
use std::sync::Arc;

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub country_service: Arc<CountryService>,
}
