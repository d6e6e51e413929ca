//! Relationship details, one row per individual.
//!
//! Both upsert strategies write `relationship_status`.

use census_core::entities::{NewRelationshipDetails, RelationshipDetails};
use census_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::table::Record;
use crate::updates::RelationshipDetailsUpdate;

impl Record for RelationshipDetails {
    const KIND: EntityKind = EntityKind::RelationshipDetails;
    const KEY: &'static str = "individual_id";
    const COLUMNS: &'static [&'static str] =
        &["individual_id", "marital_status", "relationship_status"];

    type New = NewRelationshipDetails;
    type Patch = RelationshipDetailsUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            individual_id: row.get::<i64>(0)?,
            marital_status: row.get::<String>(1)?,
            relationship_status: row.get::<String>(2)?,
        })
    }

    fn key(&self) -> i64 {
        self.individual_id
    }

    fn insert_values(new: &NewRelationshipDetails) -> Vec<(&'static str, libsql::Value)> {
        vec![
            ("individual_id", new.individual_id.into()),
            ("marital_status", new.marital_status.as_str().into()),
            ("relationship_status", new.relationship_status.as_str().into()),
        ]
    }

    fn patch_values(patch: &RelationshipDetailsUpdate) -> Vec<(&'static str, libsql::Value)> {
        let mut values = Vec::new();
        if let Some(ref marital) = patch.marital_status {
            values.push(("marital_status", marital.as_str().into()));
        }
        if let Some(ref relationship) = patch.relationship_status {
            values.push(("relationship_status", relationship.as_str().into()));
        }
        values
    }

    fn parent_id(new: &NewRelationshipDetails) -> Option<i64> {
        Some(new.individual_id)
    }
}
