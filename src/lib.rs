pub mod error;
pub mod logging;
pub mod pexels;

pub use error::{Error, Result};

/// Env var holding the Pexels API key.
pub const TOKEN_ENV: &str = "PEXELS_TOKEN";

/// Env var overriding the API base URL.
pub const API_URL_ENV: &str = "PEXELS_API_URL";
