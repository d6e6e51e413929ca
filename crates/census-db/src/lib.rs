//! # census-db
//!
//! libSQL entity store for the census income service.
//!
//! Holds the six census tables, the generic CRUD operation set over them,
//! and the read-only aggregate queries used by reports.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) against a local file
//! or an in-memory database. Every operation runs on a [`Session`] obtained
//! from [`CensusDb::session`].

pub mod conflict;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod session;
pub mod table;
pub mod updates;

mod test_support;

use std::sync::Arc;

use census_config::{DatabaseConfig, UpsertStrategy};
use libsql::Builder;
use tokio::sync::Mutex;
use tracing::debug;

use error::DatabaseError;
pub use session::Session;
pub use table::{Record, WriteMode};

/// The single connection an in-memory database lives in.
///
/// `:memory:` databases are private to the connection that opened them, so
/// every session reuses this one and holds `lock` for its lifetime.
struct SharedConnection {
    conn: libsql::Connection,
    lock: Arc<Mutex<()>>,
}

/// Session provider for the census store.
///
/// File-backed stores hand each session its own connection. In-memory stores
/// hand out the shared connection one session at a time.
pub struct CensusDb {
    db: libsql::Database,
    shared: Option<SharedConnection>,
    busy_timeout_ms: u64,
    upsert: UpsertStrategy,
}

impl CensusDb {
    /// Open the store described by `config`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(&config.path).build().await?;
        let conn = db.connect()?;
        configure_connection(&conn, config.busy_timeout_ms).await?;
        migrations::run_migrations(&conn).await?;
        debug!(path = %config.path, strategy = ?config.upsert_strategy, "opened census store");

        let shared = config.is_in_memory().then(|| SharedConnection {
            conn,
            lock: Arc::new(Mutex::new(())),
        });

        Ok(Self {
            db,
            shared,
            busy_timeout_ms: config.busy_timeout_ms,
            upsert: config.upsert_strategy,
        })
    }

    /// Open a local database at `path` (or `":memory:"`) with default settings.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open(&DatabaseConfig {
            path: path.to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Replace the upsert strategy used by sessions created from now on.
    #[must_use]
    pub const fn with_upsert_strategy(mut self, strategy: UpsertStrategy) -> Self {
        self.upsert = strategy;
        self
    }

    #[must_use]
    pub const fn upsert_strategy(&self) -> UpsertStrategy {
        self.upsert
    }

    /// Acquire a session. Released when dropped.
    ///
    /// For in-memory stores this waits until any other live session is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a new connection cannot be opened or configured.
    pub async fn session(&self) -> Result<Session, DatabaseError> {
        match &self.shared {
            Some(shared) => {
                let guard = Arc::clone(&shared.lock).lock_owned().await;
                Ok(Session::new(shared.conn.clone(), self.upsert, Some(guard)))
            }
            None => {
                let conn = self.db.connect()?;
                configure_connection(&conn, self.busy_timeout_ms).await?;
                Ok(Session::new(conn, self.upsert, None))
            }
        }
    }
}

/// Per-connection settings: SQLite does not persist either pragma.
async fn configure_connection(
    conn: &libsql::Connection,
    busy_timeout_ms: u64,
) -> Result<(), DatabaseError> {
    conn.execute("PRAGMA foreign_keys = ON", ())
        .await
        .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
    conn.execute_batch(&format!("PRAGMA busy_timeout = {busy_timeout_ms};"))
        .await
        .map_err(|e| DatabaseError::Migration(format!("PRAGMA busy_timeout: {e}")))?;
    Ok(())
}
