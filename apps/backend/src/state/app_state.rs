use std::sync::Arc;

use crate::domain::rules::GameRules;
use crate::services::games::GameService;
use crate::store::{GameStore, MemoryGameStore};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Game persistence; constructed in `main` (or by tests) and closed on shutdown.
    pub store: Arc<dyn GameStore>,
    /// Rules for new games that don't specify their own.
    pub default_rules: GameRules,
    pub games: GameService,
}

impl AppState {
    pub fn new(store: Arc<dyn GameStore>, default_rules: GameRules) -> Self {
        Self {
            store,
            default_rules,
            games: GameService::new(),
        }
    }

    pub fn store(&self) -> &dyn GameStore {
        self.store.as_ref()
    }

    /// In-memory state with default rules.
    pub fn for_tests() -> Self {
        Self::new(Arc::new(MemoryGameStore::new()), GameRules::default())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store.kind())
            .field("default_rules", &self.default_rules)
            .finish()
    }
}
