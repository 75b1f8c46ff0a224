use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};
use scorebook::config::db::{db_url, DbProfile};
use sea_orm::{ConnectOptions, Database};
use tracing::{error, info};

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(c: Command) -> Self {
        match c {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Parser)]
#[command(name = "scorebook-migrate")]
#[command(about = "Scorebook database migration tool")]
struct Args {
    #[arg(value_enum)]
    command: Command,

    /// Which database profile to resolve when --url is not given
    #[arg(short, long, value_enum, default_value = "prod")]
    env: Env,

    /// Explicit database URL; in-memory SQLite is refused
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,scorebook_migrate=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let url = match args.url {
        Some(url) => url,
        None => {
            let profile = match args.env {
                Env::Prod => DbProfile::Prod,
                Env::Test => DbProfile::Test,
            };
            match db_url(profile) {
                Ok(url) => url,
                Err(e) => {
                    error!(error = %e, "could not resolve database URL");
                    std::process::exit(2);
                }
            }
        }
    };

    if url.starts_with("sqlite::memory:") || url.contains("mode=memory") {
        error!("in-memory SQLite is discarded when the command exits; use a file or Postgres");
        std::process::exit(2);
    }

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);
    let db = match Database::connect(opts).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "could not connect");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, args.command.into()).await {
        error!(error = %e, "migration failed");
        std::process::exit(1);
    }
    info!("done");
}
