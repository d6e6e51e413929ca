use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Highest education level reached, at most one row per individual.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EducationDetails {
    pub individual_id: i64,
    pub education_level: String,
    /// Years of education as coded by the census (`1`..=`16`).
    pub education_num: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewEducationDetails {
    pub individual_id: i64,
    pub education_level: String,
    pub education_num: i64,
}
