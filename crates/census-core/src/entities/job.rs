use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Workclass and occupation, at most one row per individual.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JobDetails {
    pub individual_id: i64,
    pub workclass: String,
    pub occupation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewJobDetails {
    pub individual_id: i64,
    pub workclass: String,
    pub occupation: String,
}
