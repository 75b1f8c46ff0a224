use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Column types stay portable: the same migration runs on Postgres and SQLite.
#[derive(Iden)]
enum Games {
    Table,
    Id,
    HomeTeamName,
    AwayTeamName,
    HomeLineup,
    AwayLineup,
    Innings,
    Status,
    CurrentInning,
    IsTopInning,
    HomeScore,
    AwayScore,
    Outs,
    OnFirst,
    OnSecond,
    OnThird,
    HomeBatterIndex,
    AwayBatterIndex,
    EarlyFinish,
    ExtraInnings,
    Version,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::HomeTeamName).text().not_null())
                    .col(ColumnDef::new(Games::AwayTeamName).text().not_null())
                    .col(ColumnDef::new(Games::HomeLineup).text().not_null())
                    .col(ColumnDef::new(Games::AwayLineup).text().not_null())
                    .col(ColumnDef::new(Games::Innings).integer().not_null().default(9))
                    .col(
                        ColumnDef::new(Games::Status)
                            .string_len(16)
                            .not_null()
                            .default("in_progress"),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentInning)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Games::IsTopInning)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Games::HomeScore).integer().not_null().default(0))
                    .col(ColumnDef::new(Games::AwayScore).integer().not_null().default(0))
                    .col(ColumnDef::new(Games::Outs).small_integer().not_null().default(0))
                    .col(ColumnDef::new(Games::OnFirst).boolean().not_null().default(false))
                    .col(ColumnDef::new(Games::OnSecond).boolean().not_null().default(false))
                    .col(ColumnDef::new(Games::OnThird).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Games::HomeBatterIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::AwayBatterIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::EarlyFinish)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Games::ExtraInnings)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Games::Version).integer().not_null().default(1))
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_games_status")
                    .table(Games::Table)
                    .col(Games::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_games_status")
                    .table(Games::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await
    }
}
