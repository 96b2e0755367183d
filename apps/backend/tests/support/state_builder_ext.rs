//! Test-only extensions to `StateBuilder` for mock database connections.

use library_backend::infra::state::StateBuilder;
use library_backend::state::app_state::AppState;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Statement};

pub trait StateBuilderTestExt {
    /// Postgres `MockDatabase` with nothing queued.
    fn with_mock_db(self) -> Self;

    /// Postgres `MockDatabase` prepared by `setup_fn`.
    fn with_mock_db_with_results<F>(self, setup_fn: F) -> Self
    where
        F: FnOnce(MockDatabase) -> MockDatabase;
}

impl StateBuilderTestExt for StateBuilder {
    fn with_mock_db(self) -> Self {
        self.with_existing_db(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
    }

    fn with_mock_db_with_results<F>(self, setup_fn: F) -> Self
    where
        F: FnOnce(MockDatabase) -> MockDatabase,
    {
        let conn = setup_fn(MockDatabase::new(DatabaseBackend::Postgres)).into_connection();
        self.with_existing_db(conn)
    }
}

/// Bare mock connection for exercising repos directly.
pub fn mock_conn<F>(setup_fn: F) -> DatabaseConnection
where
    F: FnOnce(MockDatabase) -> MockDatabase,
{
    setup_fn(MockDatabase::new(DatabaseBackend::Postgres)).into_connection()
}

/// Drain every statement the state's mock connection has recorded so far.
pub fn drain_statements(state: &AppState) -> Vec<Statement> {
    let mock = match state.db().expect("state has a database") {
        DatabaseConnection::MockDatabaseConnection(mock) => mock.clone(),
        _ => panic!("not a mock connection"),
    };
    DatabaseConnection::MockDatabaseConnection(mock)
        .into_transaction_log()
        .into_iter()
        .flat_map(|txn| txn.statements().to_vec())
        .collect()
}
