//! The outcome of a single filter call

use super::error::{FilterError, FilterKind};

/// Either a normalized value or the invalid marker
///
/// `Invalid` is never conflated with the target type's own zero value: a
/// filtered `false`, `0` or `""` is `Valid`.
#[derive(Debug, Clone, PartialEq)]
pub enum Filtered<T> {
    Valid(T),
    Invalid,
}

impl<T> Filtered<T> {
    /// Check if the outcome carries a value
    pub fn is_valid(&self) -> bool {
        matches!(self, Filtered::Valid(_))
    }

    /// Check if the outcome is the invalid marker
    pub fn is_invalid(&self) -> bool {
        matches!(self, Filtered::Invalid)
    }

    /// Borrow the valid value, if any
    pub fn valid(&self) -> Option<&T> {
        match self {
            Filtered::Valid(v) => Some(v),
            Filtered::Invalid => None,
        }
    }

    /// Convert into an `Option`, dropping the marker
    pub fn into_option(self) -> Option<T> {
        match self {
            Filtered::Valid(v) => Some(v),
            Filtered::Invalid => None,
        }
    }

    /// Transform a valid value, leaving the marker untouched
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Filtered<U> {
        match self {
            Filtered::Valid(v) => Filtered::Valid(f(v)),
            Filtered::Invalid => Filtered::Invalid,
        }
    }

    /// Chain a further check onto a valid value
    pub fn and_then<U, F: FnOnce(T) -> Filtered<U>>(self, f: F) -> Filtered<U> {
        match self {
            Filtered::Valid(v) => f(v),
            Filtered::Invalid => Filtered::Invalid,
        }
    }

    /// Substitute `fallback` when invalid; `None` keeps the outcome invalid
    pub fn or_value(self, fallback: Option<T>) -> Filtered<T> {
        match self {
            Filtered::Valid(v) => Filtered::Valid(v),
            Filtered::Invalid => fallback.into(),
        }
    }

    /// Lazily compute a replacement outcome when invalid
    pub fn or_else_with<F: FnOnce() -> Filtered<T>>(self, f: F) -> Filtered<T> {
        match self {
            Filtered::Valid(v) => Filtered::Valid(v),
            Filtered::Invalid => f(),
        }
    }

    /// Take the valid value or `fallback`
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Filtered::Valid(v) => v,
            Filtered::Invalid => fallback,
        }
    }

    /// Turn the outcome into a `Result` for `?` propagation
    pub fn into_result(self, field: &str, kind: FilterKind) -> Result<T, FilterError> {
        match self {
            Filtered::Valid(v) => Ok(v),
            Filtered::Invalid => Err(FilterError::invalid(field, kind)),
        }
    }
}

impl<T> From<Option<T>> for Filtered<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Filtered::Valid(v),
            None => Filtered::Invalid,
        }
    }
}

impl<T> From<Filtered<T>> for Option<T> {
    fn from(value: Filtered<T>) -> Self {
        value.into_option()
    }
}
