pub mod country;
pub mod request;
pub mod response;
