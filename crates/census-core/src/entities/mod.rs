//! Entity structs for the census schema.
//!
//! Each entity maps to a table in the libSQL database. Stored rows derive
//! `Serialize`, `Deserialize`, and `JsonSchema`; the `New*` insert payloads
//! validate enumerated fields when built from raw values.

mod education;
mod employment;
mod income;
mod individual;
mod job;
mod relationship;

pub use education::{EducationDetails, NewEducationDetails};
pub use employment::{Employment, NewEmployment};
pub use income::{IncomeDetails, NewIncomeDetails};
pub use individual::{Individual, NewIndividual};
pub use job::{JobDetails, NewJobDetails};
pub use relationship::{NewRelationshipDetails, RelationshipDetails};
