//! Typed errors for the sieve crate
//!
//! Filters never fail: they return a [`Filtered`](crate::core::Filtered) value.
//! The types here exist for the two places where a `Result` is the natural
//! shape:
//!
//! - [`FilterError`]: produced when a caller turns an invalid outcome into an
//!   error with [`Filtered::into_result`](crate::core::Filtered::into_result)
//!   so it can be propagated with `?`
//! - [`ConfigError`]: produced when a params document cannot be read at all
//!
//! # Example
//!
//! ```rust
//! use sieve::prelude::*;
//!
//! fn parse_page(raw: &str) -> Result<i64, FilterError> {
//!     let options = IntOptions::default().with_min(1);
//!     filter_int(raw, &options).into_result("page", FilterKind::Int)
//! }
//!
//! assert_eq!(parse_page("3").unwrap(), 3);
//! assert!(matches!(
//!     parse_page("0"),
//!     Err(FilterError::Invalid { kind: FilterKind::Int, .. })
//! ));
//! ```

use serde::Serialize;
use std::fmt;

/// Which filter produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    String,
    Int,
    Float,
    Bool,
    #[serde(rename = "datetime")]
    DateTime,
}

impl FilterKind {
    /// Stable lowercase name, also used as the `filter` log field
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::String => "string",
            FilterKind::Int => "int",
            FilterKind::Float => "float",
            FilterKind::Bool => "bool",
            FilterKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value failed validation
///
/// There is exactly one failure kind. The field name is supplied by the caller,
/// since filters themselves know nothing about fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("Field '{field}' failed {kind} validation")]
    Invalid { field: String, kind: FilterKind },
}

impl FilterError {
    /// Create an invalid-value error for a field
    pub fn invalid(field: impl Into<String>, kind: FilterKind) -> Self {
        FilterError::Invalid {
            field: field.into(),
            kind,
        }
    }

    /// Name of the rejected field
    pub fn field(&self) -> &str {
        match self {
            FilterError::Invalid { field, .. } => field,
        }
    }

    /// Error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        "VALIDATION_FAILED"
    }
}

/// Errors raised while loading a params document
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid JSON params: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML params: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read params file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Params must be a map, got {found}")]
    NotAMap { found: &'static str },
}
