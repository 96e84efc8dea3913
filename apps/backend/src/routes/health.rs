use std::time::Instant;

use actix_web::{web, HttpResponse};
use once_cell::sync::Lazy;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use serde_json::json;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Process start marker for the uptime field. Forced in `main` so the
/// baseline is boot time, not the first health probe.
pub static STARTED_AT: Lazy<Instant> = Lazy::new(Instant::now);

/// Service banner at the root path.
pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "message": "API do Sistema de Atividades Avaliativas Escolares",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "online",
    })))
}

#[derive(Debug, Serialize)]
struct DatabaseHealth {
    connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_time_ms: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
    uptime_secs: u64,
    database: DatabaseHealth,
    environment: String,
}

/// Health check: reports database reachability with a probe round-trip time.
/// 200 when the database answers, 503 when degraded.
pub async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let database = match require_db(&app_state) {
        Ok(db) => {
            let started = Instant::now();
            let probe = db
                .query_one(sea_orm::Statement::from_string(
                    db.get_database_backend(),
                    "SELECT 1 as health_check".to_string(),
                ))
                .await;
            match probe {
                Ok(_) => DatabaseHealth {
                    connected: true,
                    response_time_ms: Some(started.elapsed().as_millis()),
                    error: None,
                },
                Err(e) => DatabaseHealth {
                    connected: false,
                    response_time_ms: None,
                    error: Some(format!("DB query failed: {e}")),
                },
            }
        }
        Err(_) => DatabaseHealth {
            connected: false,
            response_time_ms: None,
            error: Some("DB unavailable".to_string()),
        },
    };

    let connected = database.connected;
    let response = HealthResponse {
        status: if connected { "UP" } else { "DEGRADED" }.to_string(),
        timestamp,
        uptime_secs: STARTED_AT.elapsed().as_secs(),
        database,
        environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
    };

    let mut builder = if connected {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    Ok(builder.json(response))
}
