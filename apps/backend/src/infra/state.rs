use std::sync::Arc;

use tracing::info;

use crate::config::app::StoreConfig;
use crate::domain::rules::GameRules;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::store::{GameStore, MemoryGameStore, SeaGameStore};

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    store: StoreConfig,
    default_rules: GameRules,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            store: StoreConfig::Memory,
            default_rules: GameRules::default(),
        }
    }

    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    pub fn with_default_rules(mut self, rules: GameRules) -> Self {
        self.default_rules = rules;
        self
    }

    /// Connect the configured store (running migrations for databases).
    pub async fn build(self) -> Result<AppState, AppError> {
        let store: Arc<dyn GameStore> = match self.store {
            StoreConfig::Memory => Arc::new(MemoryGameStore::new()),
            StoreConfig::Database { url } => Arc::new(SeaGameStore::connect(&url).await?),
        };
        info!(store = %store.kind(), "application state ready");
        Ok(AppState::new(store, self.default_rules))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
