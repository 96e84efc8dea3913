//! SeaORM adapter for credential lookups.
//!
//! One read query per role, each keyed by email and filtered on the active
//! flag. Inactive rows are simply not returned, so callers cannot tell an
//! inactive account from a missing one.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entities::{administrador, aluno, matricula, professor};

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_active_admin_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<administrador::Model>, sea_orm::DbErr> {
    administrador::Entity::find()
        .filter(administrador::Column::Email.eq(email))
        .filter(administrador::Column::Active.eq(true))
        .one(conn)
        .await
}

pub async fn find_active_professor_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<professor::Model>, sea_orm::DbErr> {
    professor::Entity::find()
        .filter(professor::Column::Email.eq(email))
        .filter(professor::Column::Active.eq(true))
        .one(conn)
        .await
}

/// Aluno lookup requires both an active account and an active enrollment;
/// the WHERE clause on the joined matricula row makes the join effectively
/// inner.
pub async fn find_enrolled_aluno_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<(aluno::Model, matricula::Model)>, sea_orm::DbErr> {
    let found = aluno::Entity::find()
        .find_also_related(matricula::Entity)
        .filter(aluno::Column::Email.eq(email))
        .filter(aluno::Column::Active.eq(true))
        .filter(matricula::Column::Active.eq(true))
        .one(conn)
        .await?;

    Ok(found.and_then(|(student, enrollment)| enrollment.map(|e| (student, e))))
}
