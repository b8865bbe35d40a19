//! Loosely typed filter params
//!
//! Options often come from a document rather than from code: a YAML file next
//! to a form definition, a JSON blob stored with a route. [`Params`] holds such
//! a map and [`FromParams`] turns it into a typed options struct. An entry with
//! the wrong type is treated as absent, so building options never fails; only
//! a document that cannot be read at all yields a [`ConfigError`].

use crate::core::{
    BoolOptions, ConfigError, DateTimeOptions, DecimalSeparator, FloatOptions, Filtered, IntBase,
    IntOptions, RawValue, StringOptions, filter_bool, filter_datetime, filter_float, filter_int,
    filter_string,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::path::Path;

/// A map from option name to a loosely typed value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value; `null` is an empty map, anything else but an object is an error
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(ConfigError::NotAMap {
                found: json_type_name(&other),
            }),
        }
    }

    /// Load params from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Load params from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Load params from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Add or replace an entry
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.typed(key, "bool", Value::as_bool)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.typed(key, "int", Value::as_i64)
    }

    /// Only numbers written as floats count; `1` is an int, not a float
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.typed(key, "float", |v| match v {
            Value::Number(n) if n.is_f64() => n.as_f64(),
            _ => None,
        })
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.typed(key, "string", Value::as_str)
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &'static str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Option<T> {
        let value = self.0.get(key)?;
        let extracted = extract(value);
        if extracted.is_none() {
            tracing::debug!(
                key,
                expected,
                found = json_type_name(value),
                "Ignoring param with unexpected type"
            );
        }
        extracted
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}

/// Build a typed options struct from loose params
pub trait FromParams: Sized {
    fn from_params(params: &Params) -> Self;
}

// Negative lengths can never be satisfied by a non-empty value, same as zero
fn to_length(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

impl FromParams for StringOptions {
    fn from_params(params: &Params) -> Self {
        let mut options = StringOptions {
            required: params.get_bool("required").unwrap_or(false),
            max: params.get_int("max").map(to_length),
            min: params.get_int("min").map(to_length),
            default: params.get_str("default").map(str::to_string),
            ..StringOptions::default()
        };
        if let Some(pattern) = params.get_str("regex") {
            options = options.with_regex(&undelimit_pattern(pattern));
        }
        options
    }
}

/// Turn a `/body/flags` pattern into `regex` syntax with inline flags
///
/// Documents often carry delimited patterns such as `/^\d+$/i`. Flags `i`, `m`,
/// `s`, `x` and `U` map to their inline form and `u` is dropped since matching
/// is always Unicode-aware. Anything else is taken as an undelimited pattern.
fn undelimit_pattern(pattern: &str) -> Cow<'_, str> {
    let Some(rest) = pattern.strip_prefix('/') else {
        return Cow::Borrowed(pattern);
    };
    let Some(end) = rest.rfind('/') else {
        return Cow::Borrowed(pattern);
    };
    let (body, flags) = (&rest[..end], &rest[end + 1..]);
    if !flags.chars().all(|c| "imsxuU".contains(c)) {
        tracing::debug!(pattern, flags, "Unknown regex flags, using pattern as written");
        return Cow::Borrowed(pattern);
    }

    let inline: String = flags.chars().filter(|&c| c != 'u').collect();
    if inline.is_empty() {
        Cow::Borrowed(body)
    } else {
        Cow::Owned(format!("(?{inline}){body}"))
    }
}

impl FromParams for IntOptions {
    fn from_params(params: &Params) -> Self {
        let allow = params.get_str("allow").and_then(|keyword| {
            let base = IntBase::from_allow(keyword);
            if base.is_none() {
                tracing::debug!(keyword, "Ignoring unknown int allow keyword");
            }
            base
        });
        IntOptions {
            min: params.get_int("min"),
            max: params.get_int("max"),
            allow: allow.unwrap_or_default(),
            default: params.get_int("default"),
        }
    }
}

impl FromParams for FloatOptions {
    fn from_params(params: &Params) -> Self {
        FloatOptions {
            decimal: params
                .get_str("decimal")
                .and_then(DecimalSeparator::from_symbol)
                .unwrap_or_default(),
            default: params.get_float("default"),
        }
    }
}

impl FromParams for BoolOptions {
    fn from_params(params: &Params) -> Self {
        BoolOptions {
            strict_null: params.get_bool("strict_null") == Some(true),
            default: params.get_bool("default"),
        }
    }
}

impl FromParams for DateTimeOptions {
    fn from_params(params: &Params) -> Self {
        DateTimeOptions {
            min: params.get_str("min").map(str::to_string),
            max: params.get_str("max").map(str::to_string),
            default: params.get_str("default").map(str::to_string),
        }
    }
}

/// [`filter_string`] with options read from params
pub fn filter_string_with(value: impl Into<RawValue>, params: &Params) -> Filtered<String> {
    filter_string(value, &StringOptions::from_params(params))
}

/// [`filter_int`] with options read from params
pub fn filter_int_with(value: impl Into<RawValue>, params: &Params) -> Filtered<i64> {
    filter_int(value, &IntOptions::from_params(params))
}

/// [`filter_float`] with options read from params
pub fn filter_float_with(value: impl Into<RawValue>, params: &Params) -> Filtered<f64> {
    filter_float(value, &FloatOptions::from_params(params))
}

/// [`filter_bool`] with options read from params
pub fn filter_bool_with(value: impl Into<RawValue>, params: &Params) -> Filtered<bool> {
    filter_bool(value, &BoolOptions::from_params(params))
}

/// [`filter_datetime`] with options read from params
pub fn filter_datetime_with(
    value: impl Into<RawValue>,
    params: &Params,
) -> Filtered<DateTime<FixedOffset>> {
    filter_datetime(value, &DateTimeOptions::from_params(params))
}
