//! Macro for implementing Display and FromStr for option enums
//!
//! Configuration enums are read from environment variables as plain strings
//! and written back into logs, so they need a matching pair of conversions.
//!
//! # Example
//!
//! ```rust
//! use caltally_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum OutputMode {
//!     Text,
//!     Json,
//! }
//!
//! impl_domain_enum_conversions!(OutputMode {
//!     Text => "text",
//!     Json => "json",
//! });
//!
//! assert_eq!("JSON".parse::<OutputMode>(), Ok(OutputMode::Json));
//! ```

/// Implements Display and FromStr traits for option enums
///
/// - Display writes the lowercase representation
/// - FromStr parses case-insensitively and trims surrounding whitespace
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
