//! Constraint violation detection.
//!
//! libSQL reports constraint failures as `SqliteFailure` with the SQLite
//! message text. The predicates match on that text and are kept narrow so
//! unrelated SQL errors are never mistaken for a conflict.

use crate::error::DatabaseError;

/// Detect a `UNIQUE` / `PRIMARY KEY` violation.
pub fn is_unique_violation(e: &libsql::Error) -> bool {
    let msg = e.to_string();
    msg.contains("UNIQUE constraint failed")
}

/// Detect a `FOREIGN KEY` violation (child row whose individual is absent).
pub fn is_foreign_key_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("FOREIGN KEY constraint failed")
}

/// Translate a write error, surfacing foreign-key violations as integrity
/// conflicts rather than raw libSQL errors.
pub(crate) fn classify_write_error(e: libsql::Error) -> DatabaseError {
    if is_foreign_key_violation(&e) {
        DatabaseError::IntegrityConflict(e.to_string())
    } else {
        DatabaseError::LibSql(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_matches_sqlite_message() {
        let e = libsql::Error::SqliteFailure(
            1555,
            "UNIQUE constraint failed: incomedetails.individual_id".to_string(),
        );
        assert!(is_unique_violation(&e));
        assert!(!is_foreign_key_violation(&e));
    }

    #[test]
    fn foreign_key_violation_is_classified_as_conflict() {
        let e = libsql::Error::SqliteFailure(787, "FOREIGN KEY constraint failed".to_string());
        assert!(is_foreign_key_violation(&e));
        assert!(matches!(
            classify_write_error(e),
            DatabaseError::IntegrityConflict(_)
        ));
    }

    #[test]
    fn other_errors_pass_through() {
        let e = libsql::Error::SqliteFailure(1, "no such table: nope".to_string());
        assert!(!is_unique_violation(&e));
        assert!(matches!(classify_write_error(e), DatabaseError::LibSql(_)));
    }
}
