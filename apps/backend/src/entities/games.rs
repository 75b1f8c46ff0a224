use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GameStatus {
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// One row per game. Lineups are stored as JSON text so the row stays flat.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "home_team_name", column_type = "Text")]
    pub home_team_name: String,
    #[sea_orm(column_name = "away_team_name", column_type = "Text")]
    pub away_team_name: String,
    #[sea_orm(column_name = "home_lineup", column_type = "Text")]
    pub home_lineup: String,
    #[sea_orm(column_name = "away_lineup", column_type = "Text")]
    pub away_lineup: String,
    pub innings: i32,
    pub status: GameStatus,
    #[sea_orm(column_name = "current_inning")]
    pub current_inning: i32,
    #[sea_orm(column_name = "is_top_inning")]
    pub is_top_inning: bool,
    #[sea_orm(column_name = "home_score")]
    pub home_score: i32,
    #[sea_orm(column_name = "away_score")]
    pub away_score: i32,
    #[sea_orm(column_type = "SmallInteger")]
    pub outs: i16,
    #[sea_orm(column_name = "on_first")]
    pub on_first: bool,
    #[sea_orm(column_name = "on_second")]
    pub on_second: bool,
    #[sea_orm(column_name = "on_third")]
    pub on_third: bool,
    #[sea_orm(column_name = "home_batter_index")]
    pub home_batter_index: i32,
    #[sea_orm(column_name = "away_batter_index")]
    pub away_batter_index: i32,
    #[sea_orm(column_name = "early_finish")]
    pub early_finish: bool,
    #[sea_orm(column_name = "extra_innings")]
    pub extra_innings: bool,
    pub version: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
