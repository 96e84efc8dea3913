use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::AccessClaims;
use crate::auth::role::Role;
use crate::error::AppError;
use crate::repos::credentials::UserRecord;
use crate::state::security_config::SecurityConfig;

/// Aluno sessions are short-lived: lower privilege, higher exposure
/// (shared or public terminals assumed).
pub const ALUNO_TOKEN_TTL_SECS: i64 = 4 * 60 * 60;
/// Admin and professor sessions last a working day.
pub const STAFF_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

pub fn token_ttl_secs(role: Role) -> i64 {
    match role {
        Role::Aluno => ALUNO_TOKEN_TTL_SECS,
        Role::Admin | Role::Professor => STAFF_TOKEN_TTL_SECS,
    }
}

/// Mint a HS256 access token for an authenticated user.
///
/// Claims embed the role and its attribute (`disciplina` or `matricula`) so
/// downstream handlers can authorize without a second store lookup.
pub fn mint_access_token(
    user: &UserRecord,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let role = user.role();
    let claims = AccessClaims {
        subject_id: user.id,
        role,
        discipline_id: user.discipline_id(),
        enrollment_number: user.enrollment_number().map(str::to_owned),
        iat,
        exp: iat + token_ttl_secs(role),
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a token and return its claims.
///
/// Expired and invalid-signature failures stay distinguishable internally
/// (for logs); both surface as the same 401 at the boundary. A tampered
/// payload invalidates the signature, so nothing of an unverified token is
/// ever trusted.
pub fn verify_access_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<AccessClaims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        _ => AppError::unauthorized_invalid_jwt(),
    })
}

/// Authenticate stage of the middleware chain as a pure function:
/// raw `Authorization` header in, verified claims out.
pub fn authenticate(
    raw_header: Option<&str>,
    security: &SecurityConfig,
) -> Result<AccessClaims, AppError> {
    let token = parse_bearer(raw_header)?;
    verify_access_token(token, security)
}

/// Parse a `Bearer <token>` header value. Absent header, wrong scheme and
/// empty token are all the same failure to the client.
pub fn parse_bearer(raw_header: Option<&str>) -> Result<&str, AppError> {
    let value = raw_header.ok_or_else(AppError::unauthorized_missing_bearer)?;

    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(AppError::unauthorized_missing_bearer());
    }

    let token = parts[1];
    if token.is_empty() {
        return Err(AppError::unauthorized_missing_bearer());
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::repos::credentials::RoleCredential;

    fn security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    fn professor_record() -> UserRecord {
        UserRecord {
            id: 11,
            name: "Marta Lima".to_string(),
            email: "marta@escola.test".to_string(),
            credential: RoleCredential::Professor {
                password_hash: "hash".to_string(),
                discipline_id: Some(3),
            },
        }
    }

    fn aluno_record() -> UserRecord {
        UserRecord {
            id: 42,
            name: "Pedro Souza".to_string(),
            email: "pedro@escola.test".to_string(),
            credential: RoleCredential::Aluno {
                enrollment_number: "2024010042".to_string(),
            },
        }
    }

    #[test]
    fn mint_and_verify_roundtrip() {
        let security = security();
        let now = SystemTime::now();

        let token = mint_access_token(&professor_record(), now, &security).unwrap();
        let claims = verify_access_token(&token, &security).unwrap();

        assert_eq!(claims.subject_id, 11);
        assert_eq!(claims.role, Role::Professor);
        assert_eq!(claims.discipline_id, Some(3));
        assert_eq!(claims.enrollment_number, None);
        assert_eq!(claims.exp, claims.iat + STAFF_TOKEN_TTL_SECS);
    }

    #[test]
    fn aluno_tokens_live_four_hours() {
        let security = security();
        let token = mint_access_token(&aluno_record(), SystemTime::now(), &security).unwrap();
        let claims = verify_access_token(&token, &security).unwrap();

        assert_eq!(claims.exp - claims.iat, 4 * 60 * 60);
        assert_eq!(claims.enrollment_number.as_deref(), Some("2024010042"));
        assert_eq!(claims.discipline_id, None);
    }

    #[test]
    fn staff_tokens_live_twenty_four_hours() {
        let security = security();
        let token = mint_access_token(&professor_record(), SystemTime::now(), &security).unwrap();
        let claims = verify_access_token(&token, &security).unwrap();
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn expired_token_is_rejected() {
        let security = security();
        // Minted 25 hours ago, so even a staff token is past exp (plus leeway).
        let past = SystemTime::now() - Duration::from_secs(25 * 60 * 60);
        let token = mint_access_token(&professor_record(), past, &security).unwrap();

        let err = verify_access_token(&token, &security).unwrap_err();
        assert!(matches!(err, AppError::UnauthorizedExpiredJwt));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token =
            mint_access_token(&professor_record(), SystemTime::now(), &security()).unwrap();
        let other = SecurityConfig::new("another_secret_entirely".as_bytes());

        let err = verify_access_token(&token, &other).unwrap_err();
        assert!(matches!(err, AppError::UnauthorizedInvalidJwt));
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let security = security();
        let token = mint_access_token(&professor_record(), SystemTime::now(), &security).unwrap();

        // Flip one character of the signature segment.
        let (head, signature) = token.rsplit_once('.').unwrap();
        let mut sig: Vec<char> = signature.chars().collect();
        sig[0] = if sig[0] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{head}.{}", sig.into_iter().collect::<String>());

        let err = verify_access_token(&tampered, &security).unwrap_err();
        assert!(matches!(err, AppError::UnauthorizedInvalidJwt));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let security = security();
        let token = mint_access_token(&aluno_record(), SystemTime::now(), &security).unwrap();

        // Swap the payload for another token's payload, keeping the signature.
        let other = mint_access_token(&professor_record(), SystemTime::now(), &security).unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let spliced = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        assert!(verify_access_token(&spliced, &security).is_err());
    }

    #[test]
    fn authenticate_parses_and_verifies_bearer_headers() {
        let security = security();
        let token = mint_access_token(&professor_record(), SystemTime::now(), &security).unwrap();

        let claims = authenticate(Some(&format!("Bearer {token}")), &security).unwrap();
        assert_eq!(claims.subject_id, 11);

        for bad in [
            None,
            Some("Token abc"),
            Some("Bearer"),
            Some("Bearer "),
            Some(""),
        ] {
            let err = authenticate(bad, &security).unwrap_err();
            assert!(matches!(err, AppError::UnauthorizedMissingBearer), "{bad:?}");
        }

        let err = authenticate(Some("Bearer not-a-real-token"), &security).unwrap_err();
        assert!(matches!(err, AppError::UnauthorizedInvalidJwt));
    }
}
