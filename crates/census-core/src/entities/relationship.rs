use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Marital status and household relationship, at most one row per individual.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RelationshipDetails {
    pub individual_id: i64,
    pub marital_status: String,
    pub relationship_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRelationshipDetails {
    pub individual_id: i64,
    pub marital_status: String,
    pub relationship_status: String,
}
