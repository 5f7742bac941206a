use std::env;

use anyhow::{Context, Result};

use crate::gemini::DEFAULT_API_HOSTNAME;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub gemini_api_hostname: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub static_path: String,
}

impl AppConfig {
    /// Read configuration from the process environment. Only the API
    /// key is required.
    pub fn from_env() -> Result<Self> {
        let gemini_api_key =
            env::var("GEMINI_API_KEY").context("Missing env var GEMINI_API_KEY")?;
        let gemini_api_hostname =
            env::var("GEMINI_API_HOSTNAME").unwrap_or_else(|_| DEFAULT_API_HOSTNAME.to_string());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());
        let static_path =
            env::var("WATTSAVER_STATIC_PATH").unwrap_or_else(|_| "./web-ui/static".to_string());

        Ok(Self {
            gemini_api_hostname,
            gemini_api_key,
            gemini_model,
            static_path,
        })
    }
}
