//! Enumerated field types, entity kinds, and reference vocabularies.
//!
//! `Sex` and `IncomeClass` are the only constrained columns in the census
//! schema. Their `Deserialize` impls parse through `FromStr`, so an
//! out-of-set value is rejected with a [`ValidationError`] before any
//! persistence attempt.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

/// Recorded sex of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub enum Sex {
    #[serde(rename = "Male")]
    Male,
    #[serde(rename = "Female")]
    Female,
    #[serde(rename = "other")]
    Other,
}

impl Sex {
    /// Allowed raw values, in storage form.
    pub const ALLOWED: &'static [&'static str] = &["Male", "Female", "other"];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ValidationError::new("sex", s, Self::ALLOWED)),
        }
    }
}

impl TryFrom<&str> for Sex {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IncomeClass
// ---------------------------------------------------------------------------

/// Annual income bracket, split at 50K.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub enum IncomeClass {
    #[serde(rename = "<=50K")]
    AtMost50K,
    #[serde(rename = ">50K")]
    Above50K,
}

impl IncomeClass {
    pub const ALLOWED: &'static [&'static str] = &["<=50K", ">50K"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AtMost50K => "<=50K",
            Self::Above50K => ">50K",
        }
    }
}

impl FromStr for IncomeClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<=50K" => Ok(Self::AtMost50K),
            ">50K" => Ok(Self::Above50K),
            _ => Err(ValidationError::new("income_class", s, Self::ALLOWED)),
        }
    }
}

impl TryFrom<&str> for IncomeClass {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<'de> Deserialize<'de> for IncomeClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for IncomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The six tables of the census schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Individual,
    Employment,
    JobDetails,
    EducationDetails,
    RelationshipDetails,
    IncomeDetails,
}

impl EntityKind {
    pub const ALL: [Self; 6] = [
        Self::Individual,
        Self::Employment,
        Self::JobDetails,
        Self::EducationDetails,
        Self::RelationshipDetails,
        Self::IncomeDetails,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Employment => "employment",
            Self::JobDetails => "job_details",
            Self::EducationDetails => "education_details",
            Self::RelationshipDetails => "relationship_details",
            Self::IncomeDetails => "income_details",
        }
    }

    /// Human-facing label used in not-found and confirmation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Employment => "Employment",
            Self::JobDetails => "JobDetails",
            Self::EducationDetails => "EducationDetails",
            Self::RelationshipDetails => "RelationshipDetails",
            Self::IncomeDetails => "IncomeDetails",
        }
    }

    /// Whether the entity is keyed directly by `individual_id` (at most one
    /// row per individual).
    #[must_use]
    pub const fn is_one_to_one(self) -> bool {
        matches!(
            self,
            Self::JobDetails | Self::EducationDetails | Self::RelationshipDetails | Self::IncomeDetails
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Reference vocabularies
// ---------------------------------------------------------------------------

// Offered by data-entry forms; the store does not constrain these columns.

pub const WORKCLASS_OPTIONS: &[&str] = &[
    "Private",
    "Self-emp-not-inc",
    "Self-emp-inc",
    "Federal-gov",
    "Local-gov",
    "State-gov",
    "Without-pay",
    "Never-worked",
];

pub const MARITAL_STATUS_OPTIONS: &[&str] = &[
    "Married-civ-spouse",
    "Divorced",
    "Never-married",
    "Separated",
    "Widowed",
    "Married-spouse-absent",
    "Married-AF-spouse",
];

pub const EDUCATION_OPTIONS: &[&str] = &[
    "Bachelors",
    "Some-college",
    "11th",
    "HS-grad",
    "Prof-school",
    "Assoc-acdm",
    "Assoc-voc",
    "9th",
    "7th-8th",
    "12th",
    "Masters",
    "1st-4th",
    "10th",
    "Doctorate",
    "5th-6th",
    "Preschool",
];

pub const RELATIONSHIP_OPTIONS: &[&str] = &[
    "Wife",
    "Own-child",
    "Husband",
    "Not-in-family",
    "Other-relative",
    "Unmarried",
];
