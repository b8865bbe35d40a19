//! Text filter: requiredness, length bounds, pattern and default

use crate::core::{Filtered, RawValue};
use regex::Regex;

/// Constraints for [`filter_string`]
///
/// Every field left at its default means "no constraint".
#[derive(Debug, Clone, Default)]
pub struct StringOptions {
    /// An empty value is invalid and never falls back to `default`
    pub required: bool,

    /// Inclusive upper bound on the number of characters
    pub max: Option<usize>,

    /// Inclusive lower bound on the number of characters
    pub min: Option<usize>,

    /// Pattern the value must match somewhere
    pub regex: Option<Regex>,

    /// Substituted when the value is empty or invalid and the field is not required
    pub default: Option<String>,
}

impl StringOptions {
    /// Options with `required` set and nothing else
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// Set whether an empty value is rejected
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the inclusive character limit
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the inclusive character minimum
    pub fn with_min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the pattern from source text
    ///
    /// The pattern is plain `regex` syntax without `/.../` delimiters; use inline
    /// flags such as `(?i)` for case folding. A pattern that does not compile is
    /// ignored, like any other malformed option.
    pub fn with_regex(mut self, pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => self.regex = Some(regex),
            Err(e) => {
                tracing::warn!(
                    pattern,
                    error = %e,
                    "Ignoring string filter regex that does not compile"
                );
            }
        }
        self
    }

    /// Set the fallback text
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Normalize and validate a text value
///
/// A null input is read as the empty string. The empty string skips the length
/// and pattern checks: whether it is acceptable is decided by `required` and
/// `default` alone. Lengths are counted in Unicode scalar values.
pub fn filter_string(value: impl Into<RawValue>, options: &StringOptions) -> Filtered<String> {
    let text = match value.into() {
        RawValue::Null => Filtered::Valid(String::new()),
        RawValue::String(s) => Filtered::Valid(s),
        other => {
            tracing::trace!(
                filter = "string",
                found = other.type_name(),
                "Rejected non-string input"
            );
            Filtered::Invalid
        }
    };

    let checked = text.and_then(|s| {
        if s.is_empty() {
            if options.required {
                tracing::trace!(filter = "string", reason = "required", "Rejected empty value");
                return Filtered::Invalid;
            }
            return Filtered::Valid(s);
        }
        check_constraints(s, options)
    });

    match checked {
        Filtered::Valid(s) if !s.is_empty() => Filtered::Valid(s),
        _ if options.required => Filtered::Invalid,
        outcome => match &options.default {
            Some(default) => Filtered::Valid(default.clone()),
            None => outcome,
        },
    }
}

fn check_constraints(s: String, options: &StringOptions) -> Filtered<String> {
    let length = s.chars().count();

    if let Some(max) = options.max
        && length > max
    {
        tracing::trace!(filter = "string", reason = "max", length, max, "Rejected value");
        return Filtered::Invalid;
    }
    if let Some(min) = options.min
        && length < min
    {
        tracing::trace!(filter = "string", reason = "min", length, min, "Rejected value");
        return Filtered::Invalid;
    }
    if let Some(regex) = &options.regex
        && !regex.is_match(&s)
    {
        tracing::trace!(
            filter = "string",
            reason = "regex",
            pattern = regex.as_str(),
            "Rejected value"
        );
        return Filtered::Invalid;
    }

    Filtered::Valid(s)
}
