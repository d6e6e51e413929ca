//! Shared handler state.

use std::sync::Arc;

use census_db::CensusDb;

/// Application state shared across handlers.
pub struct AppState {
    /// Session provider; every request takes one session.
    pub db: Arc<CensusDb>,
    /// `limit` used by list endpoints when the query string omits it.
    pub default_limit: i64,
}

impl AppState {
    #[must_use]
    pub const fn new(db: Arc<CensusDb>, default_limit: i64) -> Self {
        Self { db, default_limit }
    }
}
