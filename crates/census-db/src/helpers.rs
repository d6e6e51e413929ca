//! Row-to-entity parsing and parameter helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs and to turn optional Rust values into `libsql::Value` parameters.
//! These helpers isolate that logic.

use std::str::FromStr;

use census_core::enums::EntityKind;

use crate::error::DatabaseError;

/// Parse a TEXT column into an enumerated type via `FromStr`.
///
/// Works with the census-core enums, whose `FromStr` accepts exactly the
/// storage form.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored string is not a valid variant.
pub fn parse_enum<T>(s: &str) -> Result<T, DatabaseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    s.parse()
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Convert an optional string into a TEXT-or-NULL parameter.
#[must_use]
pub fn opt_text(value: Option<&str>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |s| libsql::Value::Text(s.to_string()))
}

/// Reject negative pagination bounds before touching storage.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidArgument` naming the offending bound.
pub fn check_page(offset: i64, limit: i64) -> Result<(), DatabaseError> {
    if offset < 0 || limit < 0 {
        return Err(DatabaseError::InvalidArgument(format!(
            "skip and limit must be non-negative integers (skip={offset}, limit={limit})"
        )));
    }
    Ok(())
}

/// Map `EntityKind` to the corresponding SQL table name.
///
/// Exhaustive match: adding a new `EntityKind` variant forces updating this.
#[must_use]
pub const fn entity_table(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Individual => "individuals",
        EntityKind::Employment => "employment",
        EntityKind::JobDetails => "jobdetails",
        EntityKind::EducationDetails => "educationdetails",
        EntityKind::RelationshipDetails => "relationshipdetails",
        EntityKind::IncomeDetails => "incomedetails",
    }
}

#[cfg(test)]
mod tests {
    use census_core::enums::{IncomeClass, Sex};

    use super::*;

    #[test]
    fn parse_enum_accepts_storage_form() {
        let sex: Sex = parse_enum("other").unwrap();
        assert_eq!(sex, Sex::Other);
        let income: IncomeClass = parse_enum(">50K").unwrap();
        assert_eq!(income, IncomeClass::Above50K);
    }

    #[test]
    fn parse_enum_rejects_corrupt_value() {
        let err = parse_enum::<Sex>("M").unwrap_err();
        assert!(matches!(err, DatabaseError::Query(_)));
    }

    #[test]
    fn check_page_rejects_negative_bounds() {
        assert!(check_page(0, 0).is_ok());
        assert!(check_page(10, 100).is_ok());
        assert!(matches!(
            check_page(-1, 10),
            Err(DatabaseError::InvalidArgument(_))
        ));
        assert!(matches!(
            check_page(0, -5),
            Err(DatabaseError::InvalidArgument(_))
        ));
    }

    #[test]
    fn opt_text_maps_none_to_null() {
        assert!(matches!(opt_text(None), libsql::Value::Null));
        assert!(matches!(opt_text(Some("x")), libsql::Value::Text(ref s) if s == "x"));
    }

    #[test]
    fn every_kind_has_a_table() {
        let tables: std::collections::HashSet<_> =
            EntityKind::ALL.into_iter().map(entity_table).collect();
        assert_eq!(tables.len(), EntityKind::ALL.len());
    }
}
