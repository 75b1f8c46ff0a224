#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

pub use config::app::{AppConfig, StoreConfig};
pub use config::db::{db_url, DbProfile};
pub use domain::{apply_play, GameRules, GameState, PlayOutcome};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use errors::ErrorCode;
pub use extractors::game_id::GameId;
pub use infra::state::build_state;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use services::games::GameService;
pub use state::app_state::AppState;
pub use store::{GameStore, StoreKind, StoredGame};

// Prelude for test convenience
pub mod prelude {
    pub use super::error::*;
    pub use super::extractors::*;
    pub use super::middleware::*;
    pub use super::state::app_state::*;
    pub use super::store::*;
}

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
