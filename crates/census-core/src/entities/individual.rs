use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Sex;
use crate::errors::ValidationError;

/// One census respondent. Parent of every other entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Individual {
    pub individual_id: i64,
    pub age: i64,
    /// Final sampling weight.
    pub fnlwgt: i64,
    pub sex: Sex,
    pub hours_per_week: i64,
    pub native_country: Option<String>,
}

/// Insert payload for an individual; the identifier is generated by the store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewIndividual {
    pub age: i64,
    pub fnlwgt: i64,
    pub sex: Sex,
    pub hours_per_week: i64,
    #[serde(default)]
    pub native_country: Option<String>,
}

impl NewIndividual {
    /// Build an insert payload from raw values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `sex` is not one of `Male`, `Female`, `other`.
    pub fn new(
        age: i64,
        fnlwgt: i64,
        sex: &str,
        hours_per_week: i64,
        native_country: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            age,
            fnlwgt,
            sex: sex.parse()?,
            hours_per_week,
            native_country: native_country.map(String::from),
        })
    }
}
