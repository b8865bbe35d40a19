//! # Sieve
//!
//! Stateless value filters for raw scalar input such as form fields and query
//! parameters. Each filter takes one raw value and a set of declarative
//! constraints, and returns either a normalized typed value or an explicit
//! invalid marker.
//!
//! ## Features
//!
//! - **Five filters**: string, integer, float, boolean and date-time
//! - **Explicit outcome**: [`Filtered::Invalid`](core::Filtered) is never confused with
//!   `false`, `0` or `""`
//! - **Typed options**: one options struct per filter, every field optional
//! - **Loose params**: options can be read from JSON or YAML maps; wrong-typed entries are ignored
//! - **Flexible dates**: absolute formats plus relative terms like `tomorrow` or `+2 weeks`
//! - **Pure**: no state, no I/O, safe to call from any thread
//!
//! ## Quick Start
//!
//! ```rust
//! use sieve::prelude::*;
//!
//! let age = filter_int("42", &IntOptions::default().with_range(0, 150));
//! assert_eq!(age, Filtered::Valid(42));
//!
//! let name = filter_string("", &StringOptions::default().with_default("anonymous"));
//! assert_eq!(name, Filtered::Valid("anonymous".to_string()));
//!
//! let subscribed = filter_bool("maybe", &BoolOptions::default());
//! assert_eq!(subscribed, Filtered::Invalid);
//!
//! let comma = FloatOptions::default().with_decimal(DecimalSeparator::Comma);
//! let price = filter_float("3,14", &comma);
//! assert_eq!(price, Filtered::Valid(3.14));
//! ```
//!
//! ## Options from a document
//!
//! ```rust
//! use sieve::prelude::*;
//!
//! let params = Params::from_yaml_str("min: 1\nmax: 100\ndefault: 10").unwrap();
//! assert_eq!(filter_int_with("500", &params), Filtered::Valid(10));
//! ```

pub mod config;
pub mod core;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Outcome and input ===
    pub use crate::core::{ConfigError, FilterError, FilterKind, Filtered, RawValue};

    // === Filters ===
    pub use crate::core::validation::{
        BoolOptions, DateTimeOptions, DecimalSeparator, FloatOptions, IntBase, IntOptions,
        StringOptions, filter_bool, filter_datetime, filter_datetime_at, filter_float, filter_int,
        filter_string,
    };

    // === Date parsing ===
    pub use crate::core::datetime::{parse_datetime, parse_datetime_at};

    // === Config ===
    pub use crate::config::{
        FromParams, Params, filter_bool_with, filter_datetime_with, filter_float_with,
        filter_int_with, filter_string_with,
    };

    // === External dependencies ===
    pub use chrono::{DateTime, FixedOffset, Utc};
}
