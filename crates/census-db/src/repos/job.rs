//! Job details: workclass and occupation, one row per individual.

use census_core::entities::{JobDetails, NewJobDetails};
use census_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::table::Record;
use crate::updates::JobDetailsUpdate;

impl Record for JobDetails {
    const KIND: EntityKind = EntityKind::JobDetails;
    const KEY: &'static str = "individual_id";
    const COLUMNS: &'static [&'static str] = &["individual_id", "workclass", "occupation"];

    type New = NewJobDetails;
    type Patch = JobDetailsUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            individual_id: row.get::<i64>(0)?,
            workclass: row.get::<String>(1)?,
            occupation: row.get::<String>(2)?,
        })
    }

    fn key(&self) -> i64 {
        self.individual_id
    }

    fn insert_values(new: &NewJobDetails) -> Vec<(&'static str, libsql::Value)> {
        vec![
            ("individual_id", new.individual_id.into()),
            ("workclass", new.workclass.as_str().into()),
            ("occupation", new.occupation.as_str().into()),
        ]
    }

    fn patch_values(patch: &JobDetailsUpdate) -> Vec<(&'static str, libsql::Value)> {
        let mut values = Vec::new();
        if let Some(ref workclass) = patch.workclass {
            values.push(("workclass", workclass.as_str().into()));
        }
        if let Some(ref occupation) = patch.occupation {
            values.push(("occupation", occupation.as_str().into()));
        }
        values
    }

    fn parent_id(new: &NewJobDetails) -> Option<i64> {
        Some(new.individual_id)
    }
}
