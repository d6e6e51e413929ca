//! Job details update builder.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct JobDetailsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workclass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

pub struct JobDetailsUpdateBuilder(JobDetailsUpdate);

impl JobDetailsUpdateBuilder {
    pub fn new() -> Self {
        Self(JobDetailsUpdate::default())
    }

    pub fn workclass(mut self, val: impl Into<String>) -> Self {
        self.0.workclass = Some(val.into());
        self
    }

    pub fn occupation(mut self, val: impl Into<String>) -> Self {
        self.0.occupation = Some(val.into());
        self
    }

    pub fn build(self) -> JobDetailsUpdate {
        self.0
    }
}
