//! Date-time filter with an inclusive range

use crate::core::datetime::parse_datetime_at;
use crate::core::{Filtered, RawValue};
use chrono::{DateTime, FixedOffset, Utc};

/// Constraints for [`filter_datetime`]
///
/// Bounds and default are kept as text and resolved on every call, so relative
/// forms such as `"now"` or `"-1 year"` follow the clock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeOptions {
    /// The value may not be earlier than this
    pub min: Option<String>,

    /// The value may not be later than this
    pub max: Option<String>,

    /// Parsed and returned when the value is unparseable or out of range.
    /// It is not itself checked against `min` or `max`.
    pub default: Option<String>,
}

impl DateTimeOptions {
    /// Set the earliest accepted date-time
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the latest accepted date-time
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Set the fallback date-time text
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Parse a date-time and check it against the range, using the current clock
pub fn filter_datetime(
    value: impl Into<RawValue>,
    options: &DateTimeOptions,
) -> Filtered<DateTime<FixedOffset>> {
    filter_datetime_at(value, options, Utc::now().fixed_offset())
}

/// Same as [`filter_datetime`] with relative forms resolved against `now`
///
/// Null and empty input are invalid; they are not read as "now".
pub fn filter_datetime_at(
    value: impl Into<RawValue>,
    options: &DateTimeOptions,
    now: DateTime<FixedOffset>,
) -> Filtered<DateTime<FixedOffset>> {
    let parsed = match value.into() {
        RawValue::String(s) => parse_datetime_at(&s, now),
        RawValue::Null => None,
        other => {
            tracing::trace!(
                filter = "datetime",
                found = other.type_name(),
                "Rejected non-string input"
            );
            None
        }
    };

    let checked = match parsed {
        Some(dt) => check_range(dt, options, now),
        None => {
            tracing::trace!(filter = "datetime", reason = "parse", "Rejected value");
            Filtered::Invalid
        }
    };

    checked.or_else_with(|| match options.default.as_deref() {
        Some(default) => parse_datetime_at(default, now).into(),
        None => Filtered::Invalid,
    })
}

fn check_range(
    dt: DateTime<FixedOffset>,
    options: &DateTimeOptions,
    now: DateTime<FixedOffset>,
) -> Filtered<DateTime<FixedOffset>> {
    if let Some(min) = resolve_bound("min", options.min.as_deref(), now)
        && dt < min
    {
        tracing::trace!(filter = "datetime", reason = "min", value = %dt, "Rejected value");
        return Filtered::Invalid;
    }
    if let Some(max) = resolve_bound("max", options.max.as_deref(), now)
        && dt > max
    {
        tracing::trace!(filter = "datetime", reason = "max", value = %dt, "Rejected value");
        return Filtered::Invalid;
    }
    Filtered::Valid(dt)
}

fn resolve_bound(
    name: &'static str,
    bound: Option<&str>,
    now: DateTime<FixedOffset>,
) -> Option<DateTime<FixedOffset>> {
    let text = bound?;
    let resolved = parse_datetime_at(text, now);
    if resolved.is_none() {
        tracing::warn!(bound = name, text, "Ignoring date-time bound that does not parse");
    }
    resolved
}
