//! Individuals: the root table. Keys are generated and never reused.

use census_core::entities::{Individual, NewIndividual};
use census_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::{opt_text, parse_enum};
use crate::table::Record;
use crate::updates::IndividualUpdate;

impl Record for Individual {
    const KIND: EntityKind = EntityKind::Individual;
    const KEY: &'static str = "individual_id";
    const COLUMNS: &'static [&'static str] = &[
        "individual_id",
        "age",
        "fnlwgt",
        "sex",
        "hours_per_week",
        "native_country",
    ];

    type New = NewIndividual;
    type Patch = IndividualUpdate;

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            individual_id: row.get::<i64>(0)?,
            age: row.get::<i64>(1)?,
            fnlwgt: row.get::<i64>(2)?,
            sex: parse_enum(&row.get::<String>(3)?)?,
            hours_per_week: row.get::<i64>(4)?,
            native_country: row.get::<Option<String>>(5)?,
        })
    }

    fn key(&self) -> i64 {
        self.individual_id
    }

    fn insert_values(new: &NewIndividual) -> Vec<(&'static str, libsql::Value)> {
        vec![
            ("age", new.age.into()),
            ("fnlwgt", new.fnlwgt.into()),
            ("sex", new.sex.as_str().into()),
            ("hours_per_week", new.hours_per_week.into()),
            ("native_country", opt_text(new.native_country.as_deref())),
        ]
    }

    fn patch_values(patch: &IndividualUpdate) -> Vec<(&'static str, libsql::Value)> {
        let mut values = Vec::new();
        if let Some(age) = patch.age {
            values.push(("age", age.into()));
        }
        if let Some(fnlwgt) = patch.fnlwgt {
            values.push(("fnlwgt", fnlwgt.into()));
        }
        if let Some(sex) = patch.sex {
            values.push(("sex", sex.as_str().into()));
        }
        if let Some(hours) = patch.hours_per_week {
            values.push(("hours_per_week", hours.into()));
        }
        if let Some(ref country) = patch.native_country {
            values.push(("native_country", opt_text(country.as_deref())));
        }
        values
    }

    fn parent_id(_new: &NewIndividual) -> Option<i64> {
        None
    }
}
