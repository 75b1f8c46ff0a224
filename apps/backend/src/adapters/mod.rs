//! Adapters for external dependencies.

pub mod games_sea;
