//! Individual update builder.

use census_core::enums::Sex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IndividualUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fnlwgt: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_week: Option<i64>,
    /// `Some(None)` clears the country.
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub native_country: Option<Option<String>>,
}

pub struct IndividualUpdateBuilder(IndividualUpdate);

impl IndividualUpdateBuilder {
    pub fn new() -> Self {
        Self(IndividualUpdate::default())
    }

    pub fn age(mut self, val: i64) -> Self {
        self.0.age = Some(val);
        self
    }

    pub fn fnlwgt(mut self, val: i64) -> Self {
        self.0.fnlwgt = Some(val);
        self
    }

    pub fn sex(mut self, val: Sex) -> Self {
        self.0.sex = Some(val);
        self
    }

    pub fn hours_per_week(mut self, val: i64) -> Self {
        self.0.hours_per_week = Some(val);
        self
    }

    pub fn native_country(mut self, val: Option<String>) -> Self {
        self.0.native_country = Some(val);
        self
    }

    pub fn build(self) -> IndividualUpdate {
        self.0
    }
}
