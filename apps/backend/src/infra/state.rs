use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::{bootstrap_db, bootstrap_sqlite_memory};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_profile: Option<DbProfile>,
    sqlite_memory: bool,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db_profile: None,
            sqlite_memory: false,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    /// Use an in-memory SQLite database (integration tests).
    pub fn with_sqlite_memory(mut self) -> Self {
        self.sqlite_memory = true;
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if self.sqlite_memory {
            let conn = bootstrap_sqlite_memory().await?;
            return Ok(AppState::new(conn, self.security_config));
        }
        if let Some(profile) = self.db_profile {
            // single entrypoint: build + migrate
            let conn = bootstrap_db(profile).await?;
            return Ok(AppState::new(conn, self.security_config));
        }
        Ok(AppState::new_without_db(self.security_config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn build_succeeds_without_db_option() {
        let state = build_state().build().await.unwrap();
        assert!(state.db().is_none());
    }

    #[tokio::test]
    async fn build_with_sqlite_memory_runs_migrations() {
        let state = build_state().with_sqlite_memory().build().await.unwrap();
        assert!(state.db().is_some());
    }
}
