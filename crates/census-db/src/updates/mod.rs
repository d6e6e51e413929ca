//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some` fields
//! generate SET clauses in the dynamic UPDATE SQL. The same structs are the
//! JSON bodies of the API's `PUT` endpoints.

pub mod education;
pub mod employment;
pub mod income;
pub mod individual;
pub mod job;
pub mod relationship;

pub use education::{EducationDetailsUpdate, EducationDetailsUpdateBuilder};
pub use employment::{EmploymentUpdate, EmploymentUpdateBuilder};
pub use income::{IncomeDetailsUpdate, IncomeDetailsUpdateBuilder};
pub use individual::{IndividualUpdate, IndividualUpdateBuilder};
pub use job::{JobDetailsUpdate, JobDetailsUpdateBuilder};
pub use relationship::{RelationshipDetailsUpdate, RelationshipDetailsUpdateBuilder};

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field so that an explicit `null` becomes
/// `Some(None)` and an absent field stays `None` (via `#[serde(default)]`).
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
