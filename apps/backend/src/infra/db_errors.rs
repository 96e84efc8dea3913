//! SeaORM -> DomainError translation.
//!
//! Adapters convert `sea_orm::DbErr` into `DomainError` here; higher layers
//! then map `DomainError` to `AppError` via `From`. Raw driver messages are
//! logged (redacted) and never forwarded in the domain error detail.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    // Upstream pool/query timeouts surface through message text only.
    if error_msg.contains("timeout") || error_msg.contains("timed out") || error_msg.contains("pool")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
