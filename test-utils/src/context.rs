use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test environment holding a database connection and, on demand, a
/// session backed by the same in-memory SQLite instance.
///
/// Both resources are created lazily on first access and persist for
/// the lifetime of the context, so every access within one test sees
/// the same state.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance, created lazily by
    /// `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session instance for auth-guard tests, created lazily by
    /// `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the connection
    /// - `Err(TestError::Database)` - Failed to connect
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE
    /// statements, in order. Typically called through
    /// `TestBuilder::build()` rather than directly.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session instance.
    ///
    /// On first call this initializes the database connection if
    /// needed, migrates the session store table, and creates a fresh
    /// session. Subsequent calls return the same session.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError)` - Failed to initialize database or store
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| TestError::SessionStore(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::hours(1))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Gets or creates both database and session references.
    ///
    /// Avoids borrow checker friction when a test needs both at once.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }
}
