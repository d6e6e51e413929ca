//! Education details update builder.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EducationDetailsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_num: Option<i64>,
}

pub struct EducationDetailsUpdateBuilder(EducationDetailsUpdate);

impl EducationDetailsUpdateBuilder {
    pub fn new() -> Self {
        Self(EducationDetailsUpdate::default())
    }

    pub fn education_level(mut self, val: impl Into<String>) -> Self {
        self.0.education_level = Some(val.into());
        self
    }

    pub fn education_num(mut self, val: i64) -> Self {
        self.0.education_num = Some(val);
        self
    }

    pub fn build(self) -> EducationDetailsUpdate {
        self.0
    }
}
