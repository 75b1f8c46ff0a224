use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. `main.rs` and the test app builder share this so
/// both see the same paths; middleware is layered on by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games: /api/game/**
    cfg.service(web::scope("/api/game").configure(games::configure_routes));
}
