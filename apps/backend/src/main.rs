use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::{web, App, HttpServer};
use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::rate_limit;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::security_headers::SecurityHeaders;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::security_config::SecurityConfig;
use once_cell::sync::Lazy;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    backend::telemetry::init_tracing();
    Lazy::force(&routes::health::STARTED_AT);

    // Environment variables must be set by the runtime environment
    // (docker env_file, systemd unit, or a sourced .env).
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("PORT must be a valid port number");
            std::process::exit(1);
        });

    let jwt = match std::env::var("JWT_SECRET") {
        Ok(jwt) => jwt,
        Err(_) => {
            eprintln!("JWT_SECRET must be set");
            std::process::exit(1);
        }
    };
    let security_config = SecurityConfig::new(jwt.as_bytes());

    // Create application state using the unified builder
    let app_state = match build_state()
        .with_db(DbProfile::Prod)
        .with_security(security_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(host = %host, port = port, "starting auth gateway");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);
    let rate_limit_store = InMemoryBackend::builder().build();

    HttpServer::new(move || {
        let rate_limit_input = rate_limit::global_rate_limit_config().build();
        let limiter = RateLimiter::builder(rate_limit_store.clone(), rate_limit_input)
            .add_headers()
            .build();

        App::new()
            .wrap(cors_middleware())
            .wrap(limiter)
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
