//! The five value filters
//!
//! Each filter takes one raw value plus its options struct and returns a
//! [`Filtered`](crate::core::Filtered) outcome. Filters are pure: no state, no
//! I/O, no panics, and they may be called from any number of threads.

pub mod boolean;
pub mod datetime;
pub mod float;
pub mod int;
pub mod string;

pub use boolean::{BoolOptions, filter_bool};
pub use datetime::{DateTimeOptions, filter_datetime, filter_datetime_at};
pub use float::{DecimalSeparator, FloatOptions, filter_float};
pub use int::{IntBase, IntOptions, filter_int};
pub use string::{StringOptions, filter_string};

/// Strip the whitespace set numeric and boolean parsing tolerates
pub(crate) fn trim_ascii_ws(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b'))
}
