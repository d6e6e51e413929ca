//! Table descriptors.
//!
//! [`Record`] describes one census table: where it lives, how its rows map
//! to an entity struct, and which values an insert payload or a partial
//! update contributes. The generic operations in [`crate::session`] build
//! their SQL from these descriptors.

use census_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::entity_table;

/// How `create` writes a new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Plain insert; the store generates the key.
    Insert,
    /// Keyed by `individual_id`; an existing row is overwritten.
    Upsert,
}

impl WriteMode {
    /// Tables keyed by `individual_id` are upserted; the rest get generated keys.
    #[must_use]
    pub const fn for_kind(kind: EntityKind) -> Self {
        if kind.is_one_to_one() {
            Self::Upsert
        } else {
            Self::Insert
        }
    }
}

/// A table in the census store and the entity its rows map to.
pub trait Record: Sized + Send + Sync {
    const KIND: EntityKind;
    /// Primary key column.
    const KEY: &'static str;
    /// Selected columns, in the order `from_row` reads them.
    const COLUMNS: &'static [&'static str];
    const WRITE: WriteMode = WriteMode::for_kind(Self::KIND);

    /// Insert payload.
    type New: Send + Sync;
    /// Partial update; unset fields are left alone.
    type Patch: Send + Sync;

    /// Map a row selected with [`Self::COLUMNS`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a column is missing or holds a bad value.
    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError>;

    fn key(&self) -> i64;

    /// Column/value pairs written by `create`, excluding generated keys.
    fn insert_values(new: &Self::New) -> Vec<(&'static str, libsql::Value)>;

    /// Column/value pairs for the fields set in `patch`.
    fn patch_values(patch: &Self::Patch) -> Vec<(&'static str, libsql::Value)>;

    /// The individual a new row belongs to; `None` for individuals themselves.
    ///
    /// For [`WriteMode::Upsert`] tables this is also the row's key.
    fn parent_id(new: &Self::New) -> Option<i64>;

    #[must_use]
    fn table() -> &'static str {
        entity_table(Self::KIND)
    }

    #[must_use]
    fn label() -> &'static str {
        Self::KIND.label()
    }
}

// ---------------------------------------------------------------------------
// SQL builders
// ---------------------------------------------------------------------------

pub(crate) fn select_sql<R: Record>(filter: &str) -> String {
    format!(
        "SELECT {} FROM {} {filter}",
        R::COLUMNS.join(", "),
        R::table()
    )
}

pub(crate) fn insert_sql<R: Record>(columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        R::table(),
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Single-statement upsert: every non-key column takes the incoming value.
pub(crate) fn upsert_sql<R: Record>(columns: &[&str]) -> String {
    let sets: Vec<String> = columns
        .iter()
        .filter(|c| **c != R::KEY)
        .map(|c| format!("{c} = excluded.{c}"))
        .collect();
    let action = if sets.is_empty() {
        "DO NOTHING".to_string()
    } else {
        format!("DO UPDATE SET {}", sets.join(", "))
    };
    format!("{} ON CONFLICT({}) {action}", insert_sql::<R>(columns), R::KEY)
}

/// `UPDATE .. SET c1 = ?1, .. WHERE key = ?n`, with the key bound last.
pub(crate) fn update_sql<R: Record>(columns: &[&str]) -> String {
    let sets: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{c} = ?{}", i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ?{}",
        R::table(),
        sets.join(", "),
        R::KEY,
        columns.len() + 1
    )
}

/// Split column/value pairs into parallel vectors.
pub(crate) fn unzip_values(
    pairs: Vec<(&'static str, libsql::Value)>,
) -> (Vec<&'static str>, Vec<libsql::Value>) {
    pairs.into_iter().unzip()
}
