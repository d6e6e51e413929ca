//! # census-api
//!
//! axum router exposing CRUD endpoints for the six census tables.
//!
//! Each request acquires one [`census_db::Session`] from the shared
//! [`census_db::CensusDb`] held in [`AppState`]. Store errors are translated
//! to HTTP status codes by [`error::ApiError`] and returned as
//! `{"detail": "<message>"}`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
