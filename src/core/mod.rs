//! Core module containing the value types and the filters

pub mod datetime;
pub mod error;
pub mod field;
pub mod outcome;
pub mod validation;

pub use error::{ConfigError, FilterError, FilterKind};
pub use field::RawValue;
pub use outcome::Filtered;
pub use validation::{
    BoolOptions, DateTimeOptions, DecimalSeparator, FloatOptions, IntBase, IntOptions,
    StringOptions, filter_bool, filter_datetime, filter_datetime_at, filter_float, filter_int,
    filter_string,
};
