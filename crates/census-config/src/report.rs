//! Report (presentation layer) configuration.

use serde::{Deserialize, Serialize};

const fn default_overview_limit() -> i64 {
    5000
}

const fn default_age_bins() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Page size of the high-income overview when `--limit` is not given.
    #[serde(default = "default_overview_limit")]
    pub overview_limit: i64,

    /// Number of equal-width bins in the age histogram.
    #[serde(default = "default_age_bins")]
    pub age_bins: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            overview_limit: default_overview_limit(),
            age_bins: default_age_bins(),
        }
    }
}
