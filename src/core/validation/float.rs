//! Floating-point filter with a configurable decimal separator

use super::trim_ascii_ws;
use crate::core::{Filtered, RawValue};

/// Character recognized between the integer and fractional digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecimalSeparator {
    #[default]
    Dot,
    Comma,
}

impl DecimalSeparator {
    /// The separator character itself
    pub fn as_char(self) -> char {
        match self {
            DecimalSeparator::Dot => '.',
            DecimalSeparator::Comma => ',',
        }
    }

    /// Accepts exactly `"."` or `","`
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "." => Some(DecimalSeparator::Dot),
            "," => Some(DecimalSeparator::Comma),
            _ => None,
        }
    }
}

/// Constraints for [`filter_float`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatOptions {
    pub decimal: DecimalSeparator,

    /// Returned instead of the invalid marker when parsing fails
    pub default: Option<f64>,
}

impl FloatOptions {
    /// Set the decimal separator
    pub fn with_decimal(mut self, decimal: DecimalSeparator) -> Self {
        self.decimal = decimal;
        self
    }

    /// Set the fallback value
    pub fn with_default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }
}

/// Parse a finite floating-point number
pub fn filter_float(value: impl Into<RawValue>, options: &FloatOptions) -> Filtered<f64> {
    let parsed = match value.into() {
        RawValue::Float(f) => Some(f).filter(|f| f.is_finite()),
        RawValue::Integer(i) => Some(i as f64),
        RawValue::String(s) => parse_float_literal(&s, options.decimal),
        RawValue::Boolean(true) => Some(1.0),
        RawValue::Boolean(false) | RawValue::Null => None,
    };

    if parsed.is_none() {
        tracing::trace!(filter = "float", reason = "parse", "Rejected value");
    }
    Filtered::from(parsed).or_value(options.default)
}

/// Parse `[sign] digits [sep digits] [e [sign] digits]`
///
/// Either side of the separator may be empty but not both. Only the chosen
/// separator is recognized; the other one is an error.
pub fn parse_float_literal(text: &str, decimal: DecimalSeparator) -> Option<f64> {
    let text = trim_ascii_ws(text);
    let mut chars = text.chars().peekable();
    let mut normalized = String::with_capacity(text.len());

    if let Some(sign) = chars.next_if(|c| matches!(c, '+' | '-')) {
        normalized.push(sign);
    }
    let mut mantissa_digits = 0;
    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        normalized.push(digit);
        mantissa_digits += 1;
    }
    if chars.next_if_eq(&decimal.as_char()).is_some() {
        normalized.push('.');
        while let Some(digit) = chars.next_if(char::is_ascii_digit) {
            normalized.push(digit);
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if let Some(marker) = chars.next_if(|c| matches!(c, 'e' | 'E')) {
        normalized.push(marker);
        if let Some(sign) = chars.next_if(|c| matches!(c, '+' | '-')) {
            normalized.push(sign);
        }
        let mut exponent_digits = 0;
        while let Some(digit) = chars.next_if(char::is_ascii_digit) {
            normalized.push(digit);
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return None;
        }
    }

    if chars.next().is_some() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|f| f.is_finite())
}
