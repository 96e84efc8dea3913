use actix_web::web;

pub mod auth;
pub mod health;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires the same paths under the full middleware
/// stack (rate limiting, security headers, tracing). Tests register them
/// directly so endpoint behavior can be exercised without those wrappers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Service banner: /
    cfg.route("/", web::get().to(health::root));

    // Health check: /health
    cfg.route("/health", web::get().to(health::health));

    // Auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
}
