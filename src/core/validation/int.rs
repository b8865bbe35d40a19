//! Integer filter with optional octal and hexadecimal literals

use super::trim_ascii_ws;
use crate::core::{Filtered, RawValue};

/// Literal bases admitted in addition to decimal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntBase {
    pub octal: bool,
    pub hex: bool,
}

impl IntBase {
    /// Decimal literals only
    pub const DECIMAL: Self = Self {
        octal: false,
        hex: false,
    };
    pub const OCTAL: Self = Self {
        octal: true,
        hex: false,
    };
    pub const HEX: Self = Self {
        octal: false,
        hex: true,
    };
    pub const HEX_OCTAL: Self = Self {
        octal: true,
        hex: true,
    };

    /// Read an `allow` keyword: `oct`, `hex`, `hex|oct` or `oct|hex`
    pub fn from_allow(keyword: &str) -> Option<Self> {
        match keyword {
            "oct" => Some(Self::OCTAL),
            "hex" => Some(Self::HEX),
            "hex|oct" | "oct|hex" => Some(Self::HEX_OCTAL),
            _ => None,
        }
    }
}

/// Constraints for [`filter_int`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntOptions {
    /// Inclusive lower bound
    pub min: Option<i64>,

    /// Inclusive upper bound
    pub max: Option<i64>,

    pub allow: IntBase,

    /// Returned instead of the invalid marker on any failure
    pub default: Option<i64>,
}

impl IntOptions {
    /// Set the inclusive lower bound
    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound
    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set both bounds at once
    pub fn with_range(self, min: i64, max: i64) -> Self {
        self.with_min(min).with_max(max)
    }

    /// Admit octal and/or hexadecimal literals
    pub fn with_allow(mut self, allow: IntBase) -> Self {
        self.allow = allow;
        self
    }

    /// Set the fallback value
    pub fn with_default(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }
}

/// Parse and range-check an integer
///
/// Text may carry surrounding ASCII whitespace and, for decimals, a sign.
/// Decimal literals never have leading zeros; with octal admitted a leading
/// `0` (or `0o`) introduces an octal literal, with hex admitted `0x` introduces
/// a hexadecimal one. Octal and hexadecimal literals are unsigned.
pub fn filter_int(value: impl Into<RawValue>, options: &IntOptions) -> Filtered<i64> {
    let parsed = match value.into() {
        RawValue::Integer(i) => Some(i),
        RawValue::String(s) => parse_int_literal(&s, options.allow),
        RawValue::Float(f) => float_to_int(f),
        RawValue::Boolean(true) => Some(1),
        RawValue::Boolean(false) | RawValue::Null => None,
    };

    let checked = match parsed {
        None => {
            tracing::trace!(filter = "int", reason = "parse", "Rejected value");
            Filtered::Invalid
        }
        Some(n) if options.min.is_some_and(|min| n < min) => {
            tracing::trace!(filter = "int", reason = "min", value = n, "Rejected value");
            Filtered::Invalid
        }
        Some(n) if options.max.is_some_and(|max| n > max) => {
            tracing::trace!(filter = "int", reason = "max", value = n, "Rejected value");
            Filtered::Invalid
        }
        Some(n) => Filtered::Valid(n),
    };

    checked.or_value(options.default)
}

/// Parse an integer literal in one of the admitted bases
pub fn parse_int_literal(text: &str, allow: IntBase) -> Option<i64> {
    let text = trim_ascii_ws(text);

    if let Some(rest) = text.strip_prefix('0') {
        if rest.is_empty() {
            return Some(0);
        }
        if allow.hex
            && let Some(digits) = rest.strip_prefix(['x', 'X'])
        {
            return parse_radix(digits, 16);
        }
        if allow.octal {
            return parse_radix(rest.strip_prefix(['o', 'O']).unwrap_or(rest), 8);
        }
        return None;
    }

    parse_decimal(text)
}

fn parse_decimal(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits == "0" {
        return Some(0);
    }
    let mut chars = digits.chars();
    if !matches!(chars.next(), Some('1'..='9')) || !chars.all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<i64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

fn float_to_int(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
