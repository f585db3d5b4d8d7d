pub mod country;
pub mod fetcher;
pub mod transformer;
