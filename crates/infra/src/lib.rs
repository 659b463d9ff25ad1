//! # CalTally Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON and TOML files)
//! - Calendar sources (in-memory and JSON-file backed)
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `caltally-core`
//! - Depends on `caltally-domain` and `caltally-core`
//! - Contains all "impure" code (I/O, process environment, global state)

pub mod calendar;
pub mod config;
pub mod errors;
pub mod observability;

// Re-export commonly used items
pub use calendar::{InMemoryCalendarSource, JsonCalendarSource};
pub use errors::InfraError;
pub use observability::init_tracing;
