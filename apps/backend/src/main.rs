use actix_web::{web, App, HttpServer};
use scorebook::config::app::AppConfig;
use scorebook::infra::state::build_state;
use scorebook::middleware::cors::cors_middleware;
use scorebook::middleware::request_trace::RequestTrace;
use scorebook::middleware::structured_logger::StructuredLogger;
use scorebook::middleware::trace_span::TraceSpan;
use scorebook::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: env_file in docker-compose
    // - Local dev: source an env file (set -a; . ./.env; set +a)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_store(config.store.clone())
        .with_default_rules(config.default_rules)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    let store = app_state.store.clone();
    let data = web::Data::new(app_state);

    info!(host = %config.host, port = config.port, store = %store.kind(), "starting scorebook");

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    if let Err(e) = store.close().await {
        error!(error = %e, "failed to close store");
    }
    info!("scorebook stopped");

    Ok(())
}
