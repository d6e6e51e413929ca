//! Response types shared by the HTTP API and the `census` CLI.
//!
//! The report types are the rows of the read-only aggregate queries the
//! presentation layer runs directly against the store.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{
    EDUCATION_OPTIONS, IncomeClass, MARITAL_STATUS_OPTIONS, RELATIONSHIP_OPTIONS, Sex,
    WORKCLASS_OPTIONS,
};

/// Plain confirmation message, e.g. `"IncomeDetails deleted successfully"`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Vocabularies offered by data-entry forms for the free-text columns.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OptionsResponse {
    pub sex: Vec<String>,
    pub income_class: Vec<String>,
    pub workclass: Vec<String>,
    pub marital_status: Vec<String>,
    pub education_level: Vec<String>,
    pub relationship_status: Vec<String>,
}

impl Default for OptionsResponse {
    fn default() -> Self {
        let owned = |values: &[&str]| values.iter().map(|v| (*v).to_string()).collect();
        Self {
            sex: owned(Sex::ALLOWED),
            income_class: owned(IncomeClass::ALLOWED),
            workclass: owned(WORKCLASS_OPTIONS),
            marital_status: owned(MARITAL_STATUS_OPTIONS),
            education_level: owned(EDUCATION_OPTIONS),
            relationship_status: owned(RELATIONSHIP_OPTIONS),
        }
    }
}

/// Row count for one value of a categorical column.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Mean of a numeric column within one group.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GroupMean {
    pub group: String,
    pub mean: f64,
}

/// Row count for an (education level, income class) pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EducationIncomeCount {
    pub education_level: String,
    pub income_class: IncomeClass,
    pub count: i64,
}

/// One equal-width histogram bucket; `upper` is inclusive only for the last bin.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: i64,
}

/// An individual joined with their detail rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfileRow {
    pub individual_id: i64,
    pub age: i64,
    pub sex: Sex,
    pub fnlwgt: i64,
    pub hours_per_week: i64,
    pub native_country: Option<String>,
    pub workclass: Option<String>,
    pub occupation: Option<String>,
    pub education_level: Option<String>,
    pub education_num: Option<i64>,
    pub income_class: Option<IncomeClass>,
    pub marital_status: Option<String>,
}

/// A page of high-income profiles with headline metrics for that page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OverviewReport {
    pub offset: i64,
    pub limit: i64,
    /// Mean age over the page, `None` when the page is empty.
    pub average_age: Option<f64>,
    pub income_above_50k: i64,
    pub rows: Vec<ProfileRow>,
}
