use std::sync::Arc;

use crate::config::Config;
use crate::llm::{ChatClient, Generator};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Absent when no API key is configured; generation endpoints then
    /// return a configuration error instead of calling out.
    pub generator: Option<Arc<dyn Generator>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator: Option<Arc<dyn Generator>> = config.llm_api_key().map(|key| {
            Arc::new(ChatClient::new(
                key.to_string(),
                config.llm_base_url().to_string(),
                config.llm_model().to_string(),
            )) as Arc<dyn Generator>
        });
        Self {
            config: Arc::new(config),
            generator,
        }
    }

    /// Build a state around an explicit generator (used by tests).
    pub fn with_generator(config: Config, generator: Arc<dyn Generator>) -> Self {
        Self {
            config: Arc::new(config),
            generator: Some(generator),
        }
    }
}
