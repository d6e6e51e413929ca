use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::IncomeClass;
use crate::errors::ValidationError;

/// Income bracket, at most one row per individual.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IncomeDetails {
    pub individual_id: i64,
    pub income_class: IncomeClass,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewIncomeDetails {
    pub individual_id: i64,
    pub income_class: IncomeClass,
}

impl NewIncomeDetails {
    /// Build an insert payload from a raw income bracket.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` unless `income_class` is `<=50K` or `>50K`.
    pub fn new(individual_id: i64, income_class: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            individual_id,
            income_class: income_class.parse()?,
        })
    }
}
