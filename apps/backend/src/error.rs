use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// Single-message error body: `{"error": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Validation error body: `{"errors": ["...", ...]}`.
#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("UnauthorizedMissingBearer")]
    UnauthorizedMissingBearer,
    #[error("UnauthorizedInvalidJwt")]
    UnauthorizedInvalidJwt,
    #[error("UnauthorizedExpiredJwt")]
    UnauthorizedExpiredJwt,
    #[error("Forbidden: {detail}")]
    Forbidden { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable")]
    DbUnavailable,
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// The stable code for this error, used in logs and diagnostics.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::BadRequest { code, .. } => *code,
            AppError::Unauthorized => ErrorCode::Unauthorized,
            AppError::UnauthorizedMissingBearer => ErrorCode::UnauthorizedMissingBearer,
            AppError::UnauthorizedInvalidJwt => ErrorCode::UnauthorizedInvalidJwt,
            AppError::UnauthorizedExpiredJwt => ErrorCode::UnauthorizedExpiredJwt,
            AppError::Forbidden { .. } => ErrorCode::Forbidden,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::DbUnavailable => ErrorCode::DbUnavailable,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// The client-facing message. Credential failures collapse to one generic
    /// message, and token failures to another, so the response never reveals
    /// which check rejected the request. Infrastructure detail never crosses
    /// the boundary.
    fn client_message(&self) -> String {
        match self {
            AppError::Validation(errors) => errors.join("; "),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Unauthorized => "Credenciais inválidas".to_string(),
            AppError::UnauthorizedMissingBearer => "Token não fornecido".to_string(),
            AppError::UnauthorizedInvalidJwt | AppError::UnauthorizedExpiredJwt => {
                "Token inválido ou expirado".to_string()
            }
            AppError::Forbidden { detail } => detail.clone(),
            AppError::Db { .. }
            | AppError::DbUnavailable
            | AppError::Internal { .. }
            | AppError::Config { .. } => "Erro interno no servidor".to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized
            | AppError::UnauthorizedMissingBearer
            | AppError::UnauthorizedInvalidJwt
            | AppError::UnauthorizedExpiredJwt => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Db { .. }
            | AppError::DbUnavailable
            | AppError::Internal { .. }
            | AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation(errors)
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn unauthorized_missing_bearer() -> Self {
        Self::UnauthorizedMissingBearer
    }

    pub fn unauthorized_invalid_jwt() -> Self {
        Self::UnauthorizedInvalidJwt
    }

    pub fn unauthorized_expired_jwt() -> Self {
        Self::UnauthorizedExpiredJwt
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::Forbidden {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => {
                AppError::bad_request(ErrorCode::ValidationError, detail)
            }
            DomainError::Infra(InfraErrorKind::Timeout, detail) => AppError::Db { detail },
            DomainError::Infra(InfraErrorKind::DbUnavailable, _) => AppError::DbUnavailable,
            DomainError::Infra(_, detail) => AppError::Db { detail },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        // Full internal detail stays on the server side.
        if status.is_server_error() {
            error!(trace_id = %trace_id, code = %self.code(), detail = %self, "request failed");
        }

        let mut builder = HttpResponse::build(status);
        builder.insert_header(("x-trace-id", trace_id));

        match self {
            AppError::Validation(errors) => builder.json(ValidationBody {
                errors: errors.clone(),
            }),
            _ => builder.json(ErrorBody {
                error: self.client_message(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_failures_share_one_message() {
        // Unknown account, inactive account and wrong password all surface as
        // the same AppError::Unauthorized, so the message cannot differ.
        assert_eq!(
            AppError::unauthorized().client_message(),
            "Credenciais inválidas"
        );
    }

    #[test]
    fn token_failure_subtypes_share_one_message() {
        let invalid = AppError::unauthorized_invalid_jwt();
        let expired = AppError::unauthorized_expired_jwt();
        assert_eq!(invalid.client_message(), expired.client_message());
        // Internally they stay distinguishable for observability.
        assert_ne!(invalid.code(), expired.code());
    }

    #[test]
    fn infrastructure_detail_never_reaches_the_client() {
        let err = AppError::db("connect timeout to 10.0.0.5:5432");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Erro interno no servidor");
    }

    #[test]
    fn status_mapping_matches_taxonomy() {
        assert_eq!(
            AppError::validation(vec!["x".into()]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::unauthorized().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::forbidden("nope").status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::db_unavailable().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_errors_map_to_infrastructure_categories() {
        let err: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
        assert!(matches!(err, AppError::DbUnavailable));

        let err: AppError = DomainError::infra(InfraErrorKind::Timeout, "slow").into();
        assert!(matches!(err, AppError::Db { .. }));
    }
}
