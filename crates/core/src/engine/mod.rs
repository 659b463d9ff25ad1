//! Run orchestration

pub mod legacy;
pub mod service;
pub mod validation;

pub use legacy::render_outcome;
pub use service::TallyEngine;
pub use validation::validate_request;
