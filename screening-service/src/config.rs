use crate::error::{Result, ScreeningError};
use serde::Serialize;
use std::env;

const API_URL_VAR: &str = "SCREENING_API_URL";
const API_KEY_VAR: &str = "SCREENING_API_KEY";

/// Process-wide read-only configuration for the upstream sanctions API.
/// The key is a pre-shared secret: it goes into the request body and
/// nowhere else (never logged, never echoed back to the caller).
#[derive(Debug, Serialize, Clone)]
pub struct ScreeningConfig {
    pub api_url: String,
    #[serde(skip_serializing)]
    pub api_key: String,
}

impl ScreeningConfig {
    pub fn from_env() -> Result<Self> {
        let api_url = env::var(API_URL_VAR)
            .map_err(|_| ScreeningError::Config(format!("{} is not set", API_URL_VAR)))?;
        let api_key = env::var(API_KEY_VAR)
            .map_err(|_| ScreeningError::Config(format!("{} is not set", API_KEY_VAR)))?;

        Ok(ScreeningConfig { api_url, api_key })
    }

    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        ScreeningConfig {
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }
}
