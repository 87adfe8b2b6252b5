use std::sync::Arc;

use crate::core::AppConfig;
use crate::session::TokenCache;
use crate::suggest::{CannedSuggestions, SuggestTimes};

pub struct AppState {
    pub config: AppConfig,
    // Session-scoped Google token cache; the only mutable state held
    // by this service
    pub tokens: TokenCache,
    pub suggester: Arc<dyn SuggestTimes>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            tokens: TokenCache::new(),
            suggester: Arc::new(CannedSuggestions::default()),
        }
    }

    pub fn with_suggester(mut self, suggester: Arc<dyn SuggestTimes>) -> Self {
        self.suggester = suggester;
        self
    }
}
