//! # CalTally Domain
//!
//! Domain types and models for CalTally.
//!
//! This crate contains:
//! - Appointment, category and match-record types
//! - Per-run tallies and aggregated statistics
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other CalTally crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
