//! User roles and the pure authorization predicate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The three user classes of the platform. Closed set: adding a role is a
/// compile-time-checked change, and dispatch is always an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "professor")]
    Professor,
    #[serde(rename = "aluno")]
    Aluno,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Professor => "professor",
            Role::Aluno => "aluno",
        }
    }

    /// Parse the wire name of a role. Unknown values return None; the caller
    /// decides the error shape.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "professor" => Some(Role::Professor),
            "aluno" => Some(Role::Aluno),
            _ => None,
        }
    }

    /// Admin and professor accounts carry a password hash; aluno accounts
    /// authenticate by active enrollment alone.
    pub fn requires_password(&self) -> bool {
        match self {
            Role::Admin | Role::Professor => true,
            Role::Aluno => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure authorization predicate: is `role` in the allowed set?
///
/// Never touches storage. The denial message names the required roles, which
/// is safe to expose once the caller is authenticated.
pub fn authorize(role: Role, allowed: &[Role]) -> Result<(), AppError> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(AppError::forbidden(gate_denied_message(allowed)))
    }
}

fn gate_denied_message(allowed: &[Role]) -> String {
    match allowed {
        [Role::Admin] => "Acesso negado. Somente administradores.".to_string(),
        [Role::Professor] => "Acesso negado. Somente professores.".to_string(),
        [Role::Aluno] => "Acesso negado. Somente alunos.".to_string(),
        [Role::Professor, Role::Admin] | [Role::Admin, Role::Professor] => {
            "Acesso negado. Somente professores ou administradores.".to_string()
        }
        _ => "Acesso negado.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for role in [Role::Admin, Role::Professor, Role::Aluno] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("gestor"), None);
        assert_eq!(Role::parse("Admin"), None); // wire names are lowercase
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Aluno).unwrap(), r#""aluno""#);
        let parsed: Role = serde_json::from_str(r#""professor""#).unwrap();
        assert_eq!(parsed, Role::Professor);
        assert!(serde_json::from_str::<Role>(r#""root""#).is_err());
    }

    #[test]
    fn password_requirement_follows_role() {
        assert!(Role::Admin.requires_password());
        assert!(Role::Professor.requires_password());
        assert!(!Role::Aluno.requires_password());
    }

    #[test]
    fn authorize_admits_exactly_the_allowed_set() {
        // The four gates used by the platform.
        assert!(authorize(Role::Admin, &[Role::Admin]).is_ok());
        assert!(authorize(Role::Professor, &[Role::Admin]).is_err());

        assert!(authorize(Role::Professor, &[Role::Professor]).is_ok());
        assert!(authorize(Role::Aluno, &[Role::Professor]).is_err());

        assert!(authorize(Role::Aluno, &[Role::Aluno]).is_ok());
        assert!(authorize(Role::Admin, &[Role::Aluno]).is_err());

        let gate = [Role::Professor, Role::Admin];
        assert!(authorize(Role::Professor, &gate).is_ok());
        assert!(authorize(Role::Admin, &gate).is_ok());
        assert!(authorize(Role::Aluno, &gate).is_err());
    }

    #[test]
    fn denial_names_the_required_roles() {
        let err = authorize(Role::Aluno, &[Role::Professor, Role::Admin]).unwrap_err();
        match err {
            AppError::Forbidden { detail } => {
                assert_eq!(detail, "Acesso negado. Somente professores ou administradores.")
            }
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }
}
