use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Centralized helper to access the database connection from AppState.
///
/// Returns a borrowed `DatabaseConnection` if available, or
/// `AppError::db_unavailable()` if the state was built without one.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state.db().ok_or_else(AppError::db_unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::security_config::SecurityConfig;

    #[test]
    fn require_db_without_db_is_an_error() {
        let state = AppState::new_without_db(SecurityConfig::default());
        assert!(matches!(require_db(&state), Err(AppError::DbUnavailable)));
    }
}
