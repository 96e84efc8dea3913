//! Login orchestration: validate, look up, check password, mint token.

use std::sync::LazyLock;
use std::time::SystemTime;

use regex::Regex;
use sea_orm::ConnectionTrait;
use tracing::{info, warn};

use crate::auth::role::Role;
use crate::auth::{jwt, password};
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::repos::credentials::{self, RoleCredential, UserRecord};
use crate::state::security_config::SecurityConfig;

/// Minimum senha length for admin/professor logins.
pub const MIN_SENHA_LEN: usize = 6;

fn email_format() -> &'static Regex {
    static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
    });
    &EMAIL_FORMAT
}

/// Ephemeral, validated login input. Never persisted, never logged whole.
#[derive(Debug, Clone)]
pub struct Credential {
    pub email: String,
    pub password: Option<String>,
    pub role: Role,
}

/// Validate the raw login fields before any I/O.
///
/// Collects every failure so the client sees the full list at once, exactly
/// as the platform always reported it. Cheap rejection: nothing here touches
/// the store.
pub fn validate_login(
    email: Option<&str>,
    senha: Option<&str>,
    tipo: Option<&str>,
) -> Result<Credential, AppError> {
    let mut errors = Vec::new();

    let email = email.map(str::trim).filter(|e| !e.is_empty());
    match email {
        None => errors.push("Email é obrigatório".to_string()),
        Some(e) if !email_format().is_match(e) => {
            errors.push("Formato de email inválido".to_string())
        }
        Some(_) => {}
    }

    let role = match tipo.map(str::trim).filter(|t| !t.is_empty()) {
        None => {
            errors.push("Tipo de usuário é obrigatório".to_string());
            None
        }
        Some(t) => match Role::parse(t) {
            Some(role) => Some(role),
            None => {
                errors.push("Tipo de usuário inválido. Use: admin, professor ou aluno".to_string());
                None
            }
        },
    };

    // Senha rules apply only to the roles that authenticate with one.
    if matches!(role, Some(r) if r.requires_password()) {
        match senha {
            None | Some("") => errors.push(
                "Senha é obrigatória para administradores e professores".to_string(),
            ),
            Some(s) if s.len() < MIN_SENHA_LEN => {
                errors.push("Senha deve ter pelo menos 6 caracteres".to_string())
            }
            Some(_) => {}
        }
    }

    if let (true, Some(email), Some(role)) = (errors.is_empty(), email, role) {
        return Ok(Credential {
            email: email.to_string(),
            password: senha.map(str::to_owned),
            role,
        });
    }

    Err(AppError::validation(errors))
}

/// Authenticate a validated credential and mint an access token.
///
/// All rejection paths — unknown email, inactive account, inactive
/// enrollment, wrong senha — return the same `AppError::Unauthorized`, so
/// the response cannot be used to enumerate accounts. Atomic: either every
/// step succeeds or the whole login fails; the only side effect is the read.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    security: &SecurityConfig,
    credential: &Credential,
) -> Result<(String, UserRecord), AppError> {
    let user = credentials::find_by_email_and_role(conn, &credential.email, credential.role)
        .await
        .map_err(AppError::from)?;

    let user = match user {
        Some(user) => user,
        None => {
            // Burn one bcrypt comparison so this path is not measurably
            // faster than a wrong-password rejection.
            if credential.role.requires_password() {
                if let Some(senha) = credential.password.as_deref() {
                    password::burn_verification(senha);
                }
            }
            warn!(
                email = %Redacted(&credential.email),
                tipo = %credential.role,
                "login rejected: unknown or inactive account"
            );
            return Err(AppError::unauthorized());
        }
    };

    match &user.credential {
        RoleCredential::Admin { password_hash }
        | RoleCredential::Professor { password_hash, .. } => {
            let senha = credential.password.as_deref().unwrap_or_default();
            if !password::verify_password(senha, password_hash) {
                warn!(
                    email = %Redacted(&credential.email),
                    tipo = %credential.role,
                    "login rejected: senha mismatch"
                );
                return Err(AppError::unauthorized());
            }
        }
        // Alunos authenticate by active enrollment alone; no password exists
        // for them in this model. Known trust boundary, kept as-is.
        RoleCredential::Aluno { .. } => {}
    }

    let token = jwt::mint_access_token(&user, SystemTime::now(), security)?;

    info!(user_id = user.id, tipo = %user.role(), "login ok");
    Ok((token, user))
}
