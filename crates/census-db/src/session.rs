//! Per-request sessions and the generic operation set.
//!
//! Each mutating call runs in exactly one transaction that commits on
//! success and rolls back on any error. Reads are single statements.

use census_config::UpsertStrategy;
use census_core::responses::MessageResponse;
use tokio::sync::OwnedMutexGuard;
use tracing::{debug, warn};

use crate::conflict::{classify_write_error, is_unique_violation};
use crate::error::DatabaseError;
use crate::helpers::check_page;
use crate::table::{
    Record, WriteMode, insert_sql, select_sql, unzip_values, update_sql, upsert_sql,
};

/// A unit of work against the store. Released when dropped.
pub struct Session {
    conn: libsql::Connection,
    upsert: UpsertStrategy,
    _guard: Option<OwnedMutexGuard<()>>,
}

impl Session {
    pub(crate) fn new(
        conn: libsql::Connection,
        upsert: UpsertStrategy,
        guard: Option<OwnedMutexGuard<()>>,
    ) -> Self {
        Self {
            conn,
            upsert,
            _guard: guard,
        }
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn upsert_strategy(&self) -> UpsertStrategy {
        self.upsert
    }

    /// Trivial round-trip used by health checks.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store does not answer.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let mut rows = self.conn.query("SELECT 1", ()).await?;
        rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(())
    }

    /// Create a row. Individuals and employments are inserted; the 1:1
    /// detail tables are upserted with the configured strategy.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::IntegrityConflict` if the referenced individual
    /// is missing or a fallback upsert finds no row to update.
    pub async fn create<R: Record>(&self, new: &R::New) -> Result<R, DatabaseError> {
        match (R::WRITE, self.upsert) {
            (WriteMode::Insert, _) => self.insert::<R>(new).await,
            (WriteMode::Upsert, UpsertStrategy::Native) => self.upsert_native::<R>(new).await,
            (WriteMode::Upsert, UpsertStrategy::Fallback) => self.upsert_fallback::<R>(new).await,
        }
    }

    async fn insert<R: Record>(&self, new: &R::New) -> Result<R, DatabaseError> {
        let (columns, values) = unzip_values(R::insert_values(new));
        let sql = insert_sql::<R>(&columns);
        debug!(entity = %R::KIND, table = R::table(), "insert");

        let tx = self.conn.transaction().await?;
        let result = async {
            tx.execute(&sql, libsql::params_from_iter(values))
                .await
                .map_err(classify_write_error)?;
            let key = tx.last_insert_rowid();
            fetch::<R>(&tx, key).await?.ok_or(DatabaseError::NoResult)
        }
        .await;
        finish(tx, result).await
    }

    async fn upsert_native<R: Record>(&self, new: &R::New) -> Result<R, DatabaseError> {
        let key = upsert_key::<R>(new)?;
        let (columns, values) = unzip_values(R::insert_values(new));
        let sql = upsert_sql::<R>(&columns);
        debug!(entity = %R::KIND, table = R::table(), key, "upsert");

        let tx = self.conn.transaction().await?;
        let result = async {
            tx.execute(&sql, libsql::params_from_iter(values))
                .await
                .map_err(classify_write_error)?;
            fetch::<R>(&tx, key).await?.ok_or(DatabaseError::NoResult)
        }
        .await;
        finish(tx, result).await
    }

    /// Insert; on a uniqueness conflict roll back and update the existing
    /// row in a second transaction. Not retried beyond that.
    async fn upsert_fallback<R: Record>(&self, new: &R::New) -> Result<R, DatabaseError> {
        let key = upsert_key::<R>(new)?;
        let pairs = R::insert_values(new);
        let (columns, values) = unzip_values(pairs.clone());

        let sql = insert_sql::<R>(&columns);
        let tx = self.conn.transaction().await?;
        let inserted = tx.execute(&sql, libsql::params_from_iter(values)).await;
        match inserted {
            Ok(_) => {
                let result = fetch::<R>(&tx, key)
                    .await
                    .and_then(|row| row.ok_or(DatabaseError::NoResult));
                finish(tx, result).await
            }
            Err(e) if is_unique_violation(&e) => {
                tx.rollback().await?;
                warn!(table = R::table(), key, "row exists, updating instead");

                let (columns, mut values) = unzip_values(
                    pairs.into_iter().filter(|(c, _)| *c != R::KEY).collect(),
                );
                values.push(key.into());
                let sql = update_sql::<R>(&columns);

                let tx = self.conn.transaction().await?;
                let result = async {
                    let changed = tx.execute(&sql, libsql::params_from_iter(values)).await?;
                    if changed == 0 {
                        return Err(DatabaseError::IntegrityConflict(format!(
                            "{} {key} vanished between insert and update",
                            R::label()
                        )));
                    }
                    fetch::<R>(&tx, key).await?.ok_or(DatabaseError::NoResult)
                }
                .await;
                finish(tx, result).await
            }
            Err(e) => finish(tx, Err(classify_write_error(e))).await,
        }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no row has key `id`.
    pub async fn get_one<R: Record>(&self, id: i64) -> Result<R, DatabaseError> {
        fetch::<R>(&self.conn, id)
            .await?
            .ok_or(DatabaseError::NotFound { entity: R::label() })
    }

    /// Rows ordered by key, skipping `offset` and returning at most `limit`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` when either bound is negative.
    pub async fn get_many<R: Record>(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<R>, DatabaseError> {
        check_page(offset, limit)?;
        let sql = select_sql::<R>(&format!("ORDER BY {} ASC LIMIT ?1 OFFSET ?2", R::KEY));
        let mut rows = self
            .conn
            .query(&sql, libsql::params![limit, offset])
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(R::from_row(&row)?);
        }
        Ok(results)
    }

    /// Apply the fields set in `patch`. An empty patch returns the current row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no row has key `id`; storage is
    /// left unchanged.
    pub async fn update<R: Record>(&self, id: i64, patch: &R::Patch) -> Result<R, DatabaseError> {
        let (columns, mut values) = unzip_values(R::patch_values(patch));
        if columns.is_empty() {
            return self.get_one::<R>(id).await;
        }
        values.push(id.into());
        let sql = update_sql::<R>(&columns);
        debug!(table = R::table(), id, fields = columns.len(), "update");

        let tx = self.conn.transaction().await?;
        let result = async {
            let changed = tx.execute(&sql, libsql::params_from_iter(values)).await?;
            if changed == 0 {
                return Err(DatabaseError::NotFound { entity: R::label() });
            }
            fetch::<R>(&tx, id).await?.ok_or(DatabaseError::NoResult)
        }
        .await;
        finish(tx, result).await
    }

    /// Delete a row. Deleting an individual cascades to its dependent rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no row has key `id`.
    pub async fn delete<R: Record>(&self, id: i64) -> Result<MessageResponse, DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE {} = ?1", R::table(), R::KEY);
        debug!(table = R::table(), id, "delete");

        let tx = self.conn.transaction().await?;
        let result = async {
            let changed = tx.execute(&sql, [id]).await?;
            if changed == 0 {
                return Err(DatabaseError::NotFound { entity: R::label() });
            }
            Ok(MessageResponse::new(format!(
                "{} deleted successfully",
                R::label()
            )))
        }
        .await;
        finish(tx, result).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn exists<R: Record>(&self, id: i64) -> Result<bool, DatabaseError> {
        let sql = format!("SELECT 1 FROM {} WHERE {} = ?1", R::table(), R::KEY);
        let mut rows = self.conn.query(&sql, [id]).await?;
        Ok(rows.next().await?.is_some())
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count<R: Record>(&self) -> Result<i64, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM {}", R::table());
        let mut rows = self.conn.query(&sql, ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}

fn upsert_key<R: Record>(new: &R::New) -> Result<i64, DatabaseError> {
    R::parent_id(new).ok_or_else(|| {
        DatabaseError::Query(format!("{} upsert payload has no key", R::label()))
    })
}

/// Select one row by key. The row cursor is dropped before returning so the
/// enclosing transaction can commit.
async fn fetch<R: Record>(
    conn: &libsql::Connection,
    key: i64,
) -> Result<Option<R>, DatabaseError> {
    let sql = select_sql::<R>(&format!("WHERE {} = ?1", R::KEY));
    let mut rows = conn.query(&sql, [key]).await?;
    match rows.next().await? {
        Some(row) => Ok(Some(R::from_row(&row)?)),
        None => Ok(None),
    }
}

/// Commit on success, roll back on failure.
async fn finish<T>(
    tx: libsql::Transaction,
    result: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback) = tx.rollback().await {
                warn!(error = %rollback, "rollback failed");
            }
            Err(e)
        }
    }
}
