//! Income details: one bracket per individual, upserted on create.

use census_core::entities::{IncomeDetails, NewIncomeDetails};
use census_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::table::Record;
use crate::updates::IncomeDetailsUpdate;

impl Record for IncomeDetails {
    const KIND: EntityKind = EntityKind::IncomeDetails;
    const KEY: &'static str = "individual_id";
    const COLUMNS: &'static [&'static str] = &["individual_id", "income_class"];

    type New = NewIncomeDetails;
    type Patch = IncomeDetailsUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            individual_id: row.get::<i64>(0)?,
            income_class: parse_enum(&row.get::<String>(1)?)?,
        })
    }

    fn key(&self) -> i64 {
        self.individual_id
    }

    fn insert_values(new: &NewIncomeDetails) -> Vec<(&'static str, libsql::Value)> {
        vec![
            ("individual_id", new.individual_id.into()),
            ("income_class", new.income_class.as_str().into()),
        ]
    }

    fn patch_values(patch: &IncomeDetailsUpdate) -> Vec<(&'static str, libsql::Value)> {
        patch
            .income_class
            .map(|class| vec![("income_class", class.as_str().into())])
            .unwrap_or_default()
    }

    fn parent_id(new: &NewIncomeDetails) -> Option<i64> {
        Some(new.individual_id)
    }
}
