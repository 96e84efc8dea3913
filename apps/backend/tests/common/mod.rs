#![allow(dead_code)]

// tests/common/mod.rs
use backend::auth::password::hash_password;
use backend::entities::{administrador, aluno, matricula, professor};
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use sea_orm::{ActiveModelTrait, DatabaseConnection, NotSet, Set};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fresh application state over a migrated in-memory SQLite database.
pub async fn test_state() -> AppState {
    build_state()
        .with_sqlite_memory()
        .with_security(SecurityConfig::new(TEST_JWT_SECRET.as_bytes()))
        .build()
        .await
        .expect("build test state")
}

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET.as_bytes())
}

pub async fn seed_admin(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    senha: &str,
    active: bool,
) -> i64 {
    let model = administrador::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(hash_password(senha).expect("hash senha")),
        active: Set(active),
    };
    model.insert(db).await.expect("seed admin").id
}

pub async fn seed_professor(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    senha: &str,
    discipline_id: Option<i64>,
    active: bool,
) -> i64 {
    let model = professor::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(hash_password(senha).expect("hash senha")),
        discipline_id: Set(discipline_id),
        active: Set(active),
    };
    model.insert(db).await.expect("seed professor").id
}

/// Seed an aluno together with one matricula row.
pub async fn seed_aluno(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    account_active: bool,
    enrollment_number: &str,
    enrollment_active: bool,
) -> i64 {
    let student = aluno::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        active: Set(account_active),
    };
    let student = student.insert(db).await.expect("seed aluno");

    let enrollment = matricula::ActiveModel {
        id: NotSet,
        student_id: Set(student.id),
        number: Set(enrollment_number.to_string()),
        active: Set(enrollment_active),
    };
    enrollment.insert(db).await.expect("seed matricula");

    student.id
}
