//! Relationship details update builder.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RelationshipDetailsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_status: Option<String>,
}

pub struct RelationshipDetailsUpdateBuilder(RelationshipDetailsUpdate);

impl RelationshipDetailsUpdateBuilder {
    pub fn new() -> Self {
        Self(RelationshipDetailsUpdate::default())
    }

    pub fn marital_status(mut self, val: impl Into<String>) -> Self {
        self.0.marital_status = Some(val.into());
        self
    }

    pub fn relationship_status(mut self, val: impl Into<String>) -> Self {
        self.0.relationship_status = Some(val.into());
        self
    }

    pub fn build(self) -> RelationshipDetailsUpdate {
        self.0
    }
}
