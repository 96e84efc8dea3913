use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Resolve the database URL for the given profile from the environment.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("DATABASE_URL"),
        DbProfile::Test => {
            let url = must_var("TEST_DATABASE_URL")?;
            // Enforce safety: the test database name must end with "_test"
            // so a misconfigured environment cannot point tests at prod.
            let db_name = url.rsplit('/').next().unwrap_or("");
            let db_name = db_name.split('?').next().unwrap_or(db_name);
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires a database name ending with '_test', got '{db_name}'"
                )));
            }
            Ok(url)
        }
    }
}

fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::config(format!("{name} must be set")))
}
