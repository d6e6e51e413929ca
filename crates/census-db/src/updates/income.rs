//! Income details update builder.

use census_core::enums::IncomeClass;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IncomeDetailsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_class: Option<IncomeClass>,
}

pub struct IncomeDetailsUpdateBuilder(IncomeDetailsUpdate);

impl IncomeDetailsUpdateBuilder {
    pub fn new() -> Self {
        Self(IncomeDetailsUpdate::default())
    }

    pub const fn income_class(mut self, val: IncomeClass) -> Self {
        self.0.income_class = Some(val);
        self
    }

    pub const fn build(self) -> IncomeDetailsUpdate {
        self.0
    }
}
