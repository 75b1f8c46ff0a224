//! Process configuration read once from the environment at startup.

use std::env;
use std::str::FromStr;

use crate::config::db::{db_url, DbProfile};
use crate::domain::rules::GameRules;
use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

/// Where games are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// SeaORM against this URL (Postgres or SQLite).
    Database { url: String },
    /// Process memory; lost on restart.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    /// Applied to new games that don't carry their own rules.
    pub default_rules: GameRules,
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match var(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("{name} has an invalid value: '{raw}'"))
        }),
    }
}

fn parse_bool_var(name: &str, default: bool) -> Result<bool, AppError> {
    match var(name) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::config(format!(
                "{name} must be a boolean (true/false), got: '{raw}'"
            ))),
        },
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = var("SCOREBOOK_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var("SCOREBOOK_PORT", DEFAULT_PORT)?;

        let store = match var("SCOREBOOK_STORE")
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("database") | Some("db") => StoreConfig::Database {
                url: db_url(DbProfile::Prod)?,
            },
            Some("memory") => StoreConfig::Memory,
            Some(other) => {
                return Err(AppError::config(format!(
                    "SCOREBOOK_STORE must be 'database' or 'memory', got: '{other}'"
                )))
            }
        };

        let defaults = GameRules::default();
        let default_rules = GameRules {
            early_finish: parse_bool_var("SCOREBOOK_EARLY_FINISH", defaults.early_finish)?,
            extra_innings: parse_bool_var("SCOREBOOK_EXTRA_INNINGS", defaults.extra_innings)?,
        };

        Ok(Self {
            host,
            port,
            store,
            default_rules,
        })
    }
}
