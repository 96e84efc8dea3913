//! Credential repository for the domain layer (generic over ConnectionTrait).
//!
//! Read-only. Returns `Ok(None)` for both missing and inactive accounts;
//! only storage faults become errors.

use sea_orm::ConnectionTrait;

use crate::adapters::credentials_sea as credentials_adapter;
use crate::auth::role::Role;
use crate::entities::{administrador, aluno, matricula, professor};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Identity projected from one of the three backing tables.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub credential: RoleCredential,
}

/// Role-specific part of a user record. The shape enforces the model:
/// password hashes exist exactly for the roles that authenticate with one,
/// and each record carries exactly one role.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleCredential {
    Admin {
        password_hash: String,
    },
    Professor {
        password_hash: String,
        discipline_id: Option<i64>,
    },
    Aluno {
        enrollment_number: String,
    },
}

impl UserRecord {
    pub fn role(&self) -> Role {
        match self.credential {
            RoleCredential::Admin { .. } => Role::Admin,
            RoleCredential::Professor { .. } => Role::Professor,
            RoleCredential::Aluno { .. } => Role::Aluno,
        }
    }

    pub fn discipline_id(&self) -> Option<i64> {
        match &self.credential {
            RoleCredential::Professor { discipline_id, .. } => *discipline_id,
            _ => None,
        }
    }

    pub fn enrollment_number(&self) -> Option<&str> {
        match &self.credential {
            RoleCredential::Aluno { enrollment_number } => Some(enrollment_number),
            _ => None,
        }
    }
}

/// Look up an active account by email for the given role.
///
/// The role is supplied by the caller (it selects the table); it is never
/// inferred from row shape. At most one row comes back from each query.
pub async fn find_by_email_and_role<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    role: Role,
) -> Result<Option<UserRecord>, DomainError> {
    let record = match role {
        Role::Admin => credentials_adapter::find_active_admin_by_email(conn, email)
            .await
            .map_err(map_db_err)?
            .map(UserRecord::from),
        Role::Professor => credentials_adapter::find_active_professor_by_email(conn, email)
            .await
            .map_err(map_db_err)?
            .map(UserRecord::from),
        Role::Aluno => credentials_adapter::find_enrolled_aluno_by_email(conn, email)
            .await
            .map_err(map_db_err)?
            .map(UserRecord::from),
    };

    Ok(record)
}

// Conversions between SeaORM models and the domain model

impl From<administrador::Model> for UserRecord {
    fn from(model: administrador::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            credential: RoleCredential::Admin {
                password_hash: model.password_hash,
            },
        }
    }
}

impl From<professor::Model> for UserRecord {
    fn from(model: professor::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            credential: RoleCredential::Professor {
                password_hash: model.password_hash,
                discipline_id: model.discipline_id,
            },
        }
    }
}

impl From<(aluno::Model, matricula::Model)> for UserRecord {
    fn from((student, enrollment): (aluno::Model, matricula::Model)) -> Self {
        Self {
            id: student.id,
            name: student.name,
            email: student.email,
            credential: RoleCredential::Aluno {
                enrollment_number: enrollment.number,
            },
        }
    }
}
