//! Shared test helpers for `caltally-core` integration tests.
//!
//! These helpers provide reusable fixtures and a lightweight calendar mock so
//! that engine tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod calendar;
pub mod fixtures;
