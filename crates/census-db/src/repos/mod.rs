//! Table descriptors for the six census tables, plus the read-only report
//! queries.
//!
//! Each submodule implements [`crate::Record`] for one entity; the CRUD
//! operations themselves live on [`crate::Session`].

pub mod analytics;
mod education;
mod employment;
mod income;
mod individual;
mod job;
mod relationship;
