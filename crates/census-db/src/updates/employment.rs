//! Employment update builder.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EmploymentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital_gain: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital_loss: Option<i64>,
}

pub struct EmploymentUpdateBuilder(EmploymentUpdate);

impl EmploymentUpdateBuilder {
    pub fn new() -> Self {
        Self(EmploymentUpdate::default())
    }

    pub const fn capital_gain(mut self, val: i64) -> Self {
        self.0.capital_gain = Some(val);
        self
    }

    pub const fn capital_loss(mut self, val: i64) -> Self {
        self.0.capital_loss = Some(val);
        self
    }

    pub const fn build(self) -> EmploymentUpdate {
        self.0
    }
}
