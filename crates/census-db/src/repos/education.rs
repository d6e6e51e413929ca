//! Education details, one row per individual.

use census_core::entities::{EducationDetails, NewEducationDetails};
use census_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::table::Record;
use crate::updates::EducationDetailsUpdate;

impl Record for EducationDetails {
    const KIND: EntityKind = EntityKind::EducationDetails;
    const KEY: &'static str = "individual_id";
    const COLUMNS: &'static [&'static str] =
        &["individual_id", "education_level", "education_num"];

    type New = NewEducationDetails;
    type Patch = EducationDetailsUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            individual_id: row.get::<i64>(0)?,
            education_level: row.get::<String>(1)?,
            education_num: row.get::<i64>(2)?,
        })
    }

    fn key(&self) -> i64 {
        self.individual_id
    }

    fn insert_values(new: &NewEducationDetails) -> Vec<(&'static str, libsql::Value)> {
        vec![
            ("individual_id", new.individual_id.into()),
            ("education_level", new.education_level.as_str().into()),
            ("education_num", new.education_num.into()),
        ]
    }

    fn patch_values(patch: &EducationDetailsUpdate) -> Vec<(&'static str, libsql::Value)> {
        let mut values = Vec::new();
        if let Some(ref level) = patch.education_level {
            values.push(("education_level", level.as_str().into()));
        }
        if let Some(num) = patch.education_num {
            values.push(("education_num", num.into()));
        }
        values
    }

    fn parent_id(new: &NewEducationDetails) -> Option<i64> {
        Some(new.individual_id)
    }
}
