//! SeaORM adapter for the games table - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::games;

pub mod dto;

pub use dto::{state_from_model, GameCreate, GameRow, GameUpdate};

// Adapter functions return DbErr; the store maps to DomainError via map_db_err.

/// Apply a full-row update guarded by `expected_version`, then refetch.
///
/// - bumps `version` and `updated_at`
/// - zero rows affected means either a missing game (RecordNotFound) or a stale
///   version (`OPTIMISTIC_LOCK:{json}` custom error)
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: &str,
    expected_version: i32,
    configure_update: F,
) -> Result<games::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<games::Entity>) -> sea_orm::UpdateMany<games::Entity>,
{
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(games::Entity::update_many())
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(games::Column::Version, Expr::col(games::Column::Version).add(1))
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::Version.eq(expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match find_by_id(conn, id).await? {
            Some(game) => Err(stale_version(expected_version, game.version)),
            None => Err(not_found(id)),
        };
    }

    require_game(conn, id).await
}

fn stale_version(expected: i32, actual: i32) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!(
        "OPTIMISTIC_LOCK:{{\"expected\":{expected},\"actual\":{actual}}}"
    ))
}

fn not_found(id: &str) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{id}"))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id.to_string()).one(conn).await
}

/// Find game by id or fail with a structured `GAME_NOT_FOUND:{id}` error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| not_found(game_id))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let row = dto.row;
    let game_active = games::ActiveModel {
        id: Set(dto.id),
        home_team_name: Set(row.home_team_name),
        away_team_name: Set(row.away_team_name),
        home_lineup: Set(row.home_lineup),
        away_lineup: Set(row.away_lineup),
        innings: Set(row.innings),
        status: Set(row.status),
        current_inning: Set(row.current_inning),
        is_top_inning: Set(row.is_top_inning),
        home_score: Set(row.home_score),
        away_score: Set(row.away_score),
        outs: Set(row.outs),
        on_first: Set(row.on_first),
        on_second: Set(row.on_second),
        on_third: Set(row.on_third),
        home_batter_index: Set(row.home_batter_index),
        away_batter_index: Set(row.away_batter_index),
        early_finish: Set(row.early_finish),
        extra_innings: Set(row.extra_innings),
        version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    let row = dto.row;
    optimistic_update_then_fetch(conn, &dto.id, dto.expected_version, |update| {
        update
            .col_expr(games::Column::HomeTeamName, Expr::val(row.home_team_name).into())
            .col_expr(games::Column::AwayTeamName, Expr::val(row.away_team_name).into())
            .col_expr(games::Column::HomeLineup, Expr::val(row.home_lineup).into())
            .col_expr(games::Column::AwayLineup, Expr::val(row.away_lineup).into())
            .col_expr(games::Column::Innings, Expr::val(row.innings).into())
            .col_expr(games::Column::Status, Expr::val(row.status).into())
            .col_expr(games::Column::CurrentInning, Expr::val(row.current_inning).into())
            .col_expr(games::Column::IsTopInning, Expr::val(row.is_top_inning).into())
            .col_expr(games::Column::HomeScore, Expr::val(row.home_score).into())
            .col_expr(games::Column::AwayScore, Expr::val(row.away_score).into())
            .col_expr(games::Column::Outs, Expr::val(row.outs).into())
            .col_expr(games::Column::OnFirst, Expr::val(row.on_first).into())
            .col_expr(games::Column::OnSecond, Expr::val(row.on_second).into())
            .col_expr(games::Column::OnThird, Expr::val(row.on_third).into())
            .col_expr(
                games::Column::HomeBatterIndex,
                Expr::val(row.home_batter_index).into(),
            )
            .col_expr(
                games::Column::AwayBatterIndex,
                Expr::val(row.away_batter_index).into(),
            )
            .col_expr(games::Column::EarlyFinish, Expr::val(row.early_finish).into())
            .col_expr(games::Column::ExtraInnings, Expr::val(row.extra_innings).into())
    })
    .await
}

/// Returns the number of rows removed (0 or 1).
///
/// With `expected_version` the row only goes if its version still matches;
/// a surviving row at another version is an `OPTIMISTIC_LOCK` error, an
/// absent one is not.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    expected_version: Option<i32>,
) -> Result<u64, sea_orm::DbErr> {
    let mut delete = games::Entity::delete_many().filter(games::Column::Id.eq(game_id));
    if let Some(expected) = expected_version {
        delete = delete.filter(games::Column::Version.eq(expected));
    }
    let result = delete.exec(conn).await?;

    if let (0, Some(expected)) = (result.rows_affected, expected_version) {
        if let Some(game) = find_by_id(conn, game_id).await? {
            return Err(stale_version(expected, game.version));
        }
    }
    Ok(result.rows_affected)
}
