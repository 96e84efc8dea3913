use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::claims::AccessClaims;
use crate::auth::jwt;
use crate::auth::role::Role;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::credentials::UserRecord;
use crate::services::auth::{login as login_service, validate_login};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    #[serde(rename = "senha")]
    pub password: Option<String>,
    #[serde(rename = "tipo")]
    pub user_type: Option<String>,
}

/// Sanitized public view of the authenticated user. Built from the record,
/// never from the raw row, so the password hash cannot leak into a response.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "tipo")]
    pub user_type: Role,
}

impl PublicUser {
    fn from_record(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            user_type: user.role(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AccessClaims>,
}

/// Unified login for all three user types.
/// POST /api/auth/login
async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let credential = validate_login(
        body.email.as_deref(),
        body.password.as_deref(),
        body.user_type.as_deref(),
    )?;

    let db = require_db(&app_state)?;
    let (token, user) = login_service(db, &app_state.security, &credential).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user: PublicUser::from_record(&user),
    }))
}

/// Report whether the presented token is valid.
/// GET /api/auth/verify
///
/// This endpoint has its own response shape: `{valid, user?}` with no error
/// body, matching what clients poll to keep sessions alive.
async fn verify(req: HttpRequest, app_state: web::Data<AppState>) -> HttpResponse {
    let raw_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match jwt::authenticate(raw_header, &app_state.security) {
        Ok(claims) => HttpResponse::Ok().json(VerifyResponse {
            valid: true,
            user: Some(claims),
        }),
        Err(_) => HttpResponse::Unauthorized().json(VerifyResponse {
            valid: false,
            user: None,
        }),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
    cfg.service(web::resource("/verify").route(web::get().to(verify)));
}
