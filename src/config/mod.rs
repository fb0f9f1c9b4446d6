//! Configuration handling for the application.
//!
//! All settings come from environment variables with development defaults,
//! except the generator API key which has no default: without it the service
//! still starts, but the generation endpoints report a configuration error.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Kept public so tests can refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_LLM_API_KEY: &str = "LLM_API_KEY";
pub const ENV_LLM_BASE_URL: &str = "LLM_BASE_URL";
pub const ENV_LLM_MODEL: &str = "LLM_MODEL";
pub const ENV_DEFAULT_LANGUAGE: &str = "DEFAULT_LANGUAGE";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LLM_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";
const DEFAULT_LLM_MODEL: &str = "glm-4-flash";
const DEFAULT_TARGET_LANGUAGE: &str = "English";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    llm_api_key: Option<String>,
    llm_base_url: String,
    llm_model: String,
    default_language: String,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let llm_api_key = env::var(ENV_LLM_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());
        let llm_base_url =
            env::var(ENV_LLM_BASE_URL).unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string());
        let llm_model = env::var(ENV_LLM_MODEL).unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string());
        let default_language =
            env::var(ENV_DEFAULT_LANGUAGE).unwrap_or_else(|_| DEFAULT_TARGET_LANGUAGE.to_string());
        Ok(Self {
            bind_addr,
            llm_api_key,
            llm_base_url,
            llm_model,
            default_language,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Bearer token for the completion endpoint; absent means unconfigured.
    pub fn llm_api_key(&self) -> Option<&str> {
        self.llm_api_key.as_deref()
    }
    /// Base URL of the OpenAI-compatible API.
    pub fn llm_base_url(&self) -> &str {
        &self.llm_base_url
    }
    /// Model identifier sent with every completion request.
    pub fn llm_model(&self) -> &str {
        &self.llm_model
    }
    /// Target language used when a request does not name one.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
