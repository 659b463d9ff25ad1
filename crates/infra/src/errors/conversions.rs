//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use caltally_domain::CalTallyError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CalTallyError);

impl From<InfraError> for CalTallyError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CalTallyError> for InfraError {
    fn from(value: CalTallyError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCalTallyError {
    fn into_caltally(self) -> CalTallyError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → CalTallyError */
/* -------------------------------------------------------------------------- */

impl IntoCalTallyError for IoError {
    fn into_caltally(self) -> CalTallyError {
        match self.kind() {
            ErrorKind::NotFound => CalTallyError::Source(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                CalTallyError::Source(format!("permission denied: {self}"))
            }
            ErrorKind::InvalidData => {
                CalTallyError::Source(format!("file is not valid UTF-8: {self}"))
            }
            _ => CalTallyError::Source(format!("i/o failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        Self(value.into_caltally())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → CalTallyError */
/* -------------------------------------------------------------------------- */

impl IntoCalTallyError for JsonError {
    fn into_caltally(self) -> CalTallyError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => CalTallyError::Source(format!("i/o failure reading JSON: {self}")),
            Category::Syntax | Category::Eof => CalTallyError::Source(format!(
                "malformed JSON at line {} column {}: {self}",
                self.line(),
                self.column()
            )),
            Category::Data => CalTallyError::Source(format!("unexpected JSON content: {self}")),
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_caltally())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → CalTallyError */
/* -------------------------------------------------------------------------- */

impl IntoCalTallyError for TomlError {
    fn into_caltally(self) -> CalTallyError {
        CalTallyError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        Self(value.into_caltally())
    }
}
