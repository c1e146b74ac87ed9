//! balldontlie statistics API: records, formatting and the HTTP client.

pub mod format;
pub mod http;
pub mod types;
