use sea_orm::DatabaseConnection;

use crate::config::db::{DbOwner, DbProfile};
use crate::error::AppError;
use crate::infra::db::{bootstrap_db, connect_db};
use crate::state::app_state::AppState;

enum DbSource {
    None,
    Profile { profile: DbProfile, migrate: bool },
    Existing(DatabaseConnection),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db: DbSource,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { db: DbSource::None }
    }

    /// Connect using `profile` and run pending migrations.
    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db = DbSource::Profile {
            profile,
            migrate: true,
        };
        self
    }

    /// Skip migrations for a profile connection (schema managed externally).
    pub fn assume_schema_ready(mut self) -> Self {
        if let DbSource::Profile { migrate, .. } = &mut self.db {
            *migrate = false;
        }
        self
    }

    /// Use an already-open connection (e.g. a `MockDatabase` in tests).
    pub fn with_existing_db(mut self, conn: DatabaseConnection) -> Self {
        self.db = DbSource::Existing(conn);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db {
            DbSource::None => Ok(AppState::new_without_db()),
            DbSource::Profile {
                profile,
                migrate: true,
            } => Ok(AppState::new(bootstrap_db(profile, DbOwner::App).await?)),
            DbSource::Profile {
                profile,
                migrate: false,
            } => Ok(AppState::new(connect_db(profile, DbOwner::App).await?)),
            DbSource::Existing(conn) => Ok(AppState::new(conn)),
        }
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
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;

    #[tokio::test]
    async fn test_build_succeeds_without_db_option() {
        let state = build_state().build().await.unwrap();
        assert!(state.db().is_none());
    }

    #[tokio::test]
    async fn test_build_with_existing_db() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let state = build_state().with_existing_db(conn).build().await.unwrap();
        assert!(state.db().is_some());
    }
}
