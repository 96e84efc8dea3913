//! JWT claims carried by backend-issued access tokens.

use serde::{Deserialize, Serialize};

use crate::auth::role::Role;

/// Verified token payload, attached to request extensions by the
/// authentication middleware for the duration of that request only.
///
/// Wire field names match the platform contract: `id`, `tipo`, and the
/// role-specific attribute (`disciplina` for professor, `matricula` for
/// aluno) so downstream handlers authorize without a second store lookup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AccessClaims {
    #[serde(rename = "id")]
    pub subject_id: i64,
    #[serde(rename = "tipo")]
    pub role: Role,
    #[serde(rename = "disciplina", default, skip_serializing_if = "Option::is_none")]
    pub discipline_id: Option<i64>,
    #[serde(rename = "matricula", default, skip_serializing_if = "Option::is_none")]
    pub enrollment_number: Option<String>,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
