//! SeaORM-backed store for Postgres or SQLite.

use async_trait::async_trait;
use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection};
use tracing::{debug, info};

use super::db_errors::map_db_err;
use super::{GameStore, StoreKind, StoredGame};
use crate::adapters::games_sea::{self as games_adapter, GameCreate, GameUpdate};
use crate::domain::state::GameState;
use crate::entities::games;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone)]
pub struct SeaGameStore {
    conn: DatabaseConnection,
}

fn to_stored(model: &games::Model) -> Result<StoredGame, DomainError> {
    let state = games_adapter::state_from_model(model).map_err(map_db_err)?;
    Ok(StoredGame {
        state,
        version: model.version,
    })
}

impl SeaGameStore {
    /// Open a connection to `url` and bring the schema up to date.
    pub async fn connect(url: &str) -> Result<Self, DomainError> {
        let mut opts = ConnectOptions::new(url.to_string());
        opts.sqlx_logging(false);
        // Each in-memory SQLite connection is its own database.
        if url.starts_with("sqlite::memory:") || url.contains("mode=memory") {
            opts.max_connections(1).min_connections(1);
        }

        let conn = Database::connect(opts).await.map_err(map_db_err)?;
        let store = Self::from_connection(conn);
        store.migrate().await?;
        info!(backend = %store.kind(), "game store connected");
        Ok(store)
    }

    /// Wrap an existing connection. The schema is assumed to be current.
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn migrate(&self) -> Result<(), DomainError> {
        migrate(&self.conn, MigrationCommand::Up)
            .await
            .map_err(map_db_err)
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}

#[async_trait]
impl GameStore for SeaGameStore {
    async fn create_game(&self, state: &GameState) -> Result<StoredGame, DomainError> {
        let dto = GameCreate::from_state(state).map_err(map_db_err)?;
        let model = games_adapter::create_game(&self.conn, dto)
            .await
            .map_err(map_db_err)?;
        debug!(game_id = %model.id, "game row inserted");
        to_stored(&model)
    }

    async fn get_game(&self, id: &str) -> Result<StoredGame, DomainError> {
        let model = games_adapter::require_game(&self.conn, id)
            .await
            .map_err(map_db_err)?;
        to_stored(&model)
    }

    async fn update_game(
        &self,
        id: &str,
        state: &GameState,
        expected_version: i32,
    ) -> Result<StoredGame, DomainError> {
        let dto = GameUpdate::from_state(id, state, expected_version).map_err(map_db_err)?;
        let model = games_adapter::update_game(&self.conn, dto)
            .await
            .map_err(map_db_err)?;
        to_stored(&model)
    }

    async fn delete_game(
        &self,
        id: &str,
        expected_version: Option<i32>,
    ) -> Result<(), DomainError> {
        let removed = games_adapter::delete_game(&self.conn, id, expected_version)
            .await
            .map_err(map_db_err)?;
        debug!(game_id = id, removed, "game row deleted");
        Ok(())
    }

    async fn close(&self) -> Result<(), DomainError> {
        // DatabaseConnection is a cheap handle; closing a clone closes the pool.
        self.conn.clone().close().await.map_err(map_db_err)
    }

    fn kind(&self) -> StoreKind {
        match self.conn.get_database_backend() {
            DatabaseBackend::Sqlite => StoreKind::Sqlite,
            _ => StoreKind::Postgres,
        }
    }
}
