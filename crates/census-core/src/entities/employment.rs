use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Capital gain/loss record. An individual may have many.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Employment {
    pub employment_id: i64,
    pub individual_id: i64,
    pub capital_gain: i64,
    pub capital_loss: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewEmployment {
    pub individual_id: i64,
    #[serde(default)]
    pub capital_gain: i64,
    #[serde(default)]
    pub capital_loss: i64,
}
