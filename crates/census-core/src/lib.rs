//! # census-core
//!
//! Core types and validation errors for the census income service.
//!
//! This crate provides the foundational types shared across all census crates:
//! - Entity structs for the six census tables (individuals, employment,
//!   job, education, relationship, and income details)
//! - Insert payloads that validate enumerated fields on construction
//! - Enumerations for `sex` and `income_class`, plus the reference
//!   vocabularies used by data-entry front-ends
//! - Cross-cutting error types
//! - Response types for confirmations and read-only reports

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
