//! Loose boolean filter

use super::trim_ascii_ws;
use crate::core::{Filtered, RawValue};

const TRUTHY: [&str; 4] = ["1", "true", "on", "yes"];
const FALSY: [&str; 5] = ["0", "false", "off", "no", ""];

/// Constraints for [`filter_bool`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolOptions {
    /// A null input is invalid instead of `false`
    pub strict_null: bool,

    /// Returned instead of the invalid marker for unrecognized input
    pub default: Option<bool>,
}

impl BoolOptions {
    /// Set whether a null input is rejected
    pub fn with_strict_null(mut self, strict_null: bool) -> Self {
        self.strict_null = strict_null;
        self
    }

    /// Set the fallback for unrecognized input
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }
}

/// Read a boolean from loose input
///
/// `"1"`, `"true"`, `"on"` and `"yes"` are true; `"0"`, `"false"`, `"off"`,
/// `"no"`, the empty string and null are false. Matching ignores ASCII case
/// and surrounding whitespace. Anything else is invalid, which is distinct
/// from `false`. With `strict_null` set a null input is invalid and `default`
/// is not consulted.
pub fn filter_bool(value: impl Into<RawValue>, options: &BoolOptions) -> Filtered<bool> {
    let value = value.into();
    if options.strict_null && value.is_null() {
        tracing::trace!(filter = "bool", reason = "strict_null", "Rejected null");
        return Filtered::Invalid;
    }

    let parsed = match value {
        RawValue::Boolean(b) => Some(b),
        RawValue::Null => Some(false),
        RawValue::String(s) => parse_bool_literal(&s),
        RawValue::Integer(1) => Some(true),
        RawValue::Integer(0) => Some(false),
        RawValue::Integer(_) => None,
        RawValue::Float(f) if f == 1.0 => Some(true),
        RawValue::Float(f) if f == 0.0 => Some(false),
        RawValue::Float(_) => None,
    };

    if parsed.is_none() {
        tracing::trace!(filter = "bool", reason = "parse", "Rejected value");
    }
    Filtered::from(parsed).or_value(options.default)
}

/// Recognize a truthy or falsy word
pub fn parse_bool_literal(text: &str) -> Option<bool> {
    let word = trim_ascii_ws(text);

    if TRUTHY.iter().any(|t| word.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSY.iter().any(|f| word.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}
