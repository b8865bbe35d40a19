//! Property-based tests for the filters using proptest.
//!
//! These tests generate random inputs to check the identity and
//! idempotence guarantees over a wide range of values, and that no input
//! or combination of options makes a filter panic.

use proptest::prelude::*;
use sieve::prelude::*;

// =============================================================================
// String Filter Properties
// =============================================================================

proptest! {
    /// A value inside the length bounds comes back unchanged
    #[test]
    fn string_within_bounds_is_identity(value in "\\PC{1,12}") {
        let options = StringOptions::default().with_min(1).with_max(12);
        prop_assert_eq!(filter_string(value.as_str(), &options), Filtered::Valid(value.clone()));
    }

    /// Exactly `max` characters pass, one more fails
    #[test]
    fn string_max_boundary(max in 1usize..20, ch in "\\PC") {
        let options = StringOptions::default().with_max(max);
        let at_limit = ch.repeat(max);
        let over_limit = ch.repeat(max + 1);
        prop_assert!(filter_string(at_limit, &options).is_valid());
        prop_assert!(filter_string(over_limit, &options).is_invalid());
    }

    /// Exactly `min` characters pass, one fewer fails
    #[test]
    fn string_min_boundary(min in 2usize..20, ch in "\\PC") {
        let options = StringOptions::default().with_min(min);
        prop_assert!(filter_string(ch.repeat(min), &options).is_valid());
        prop_assert!(filter_string(ch.repeat(min - 1), &options).is_invalid());
    }

    /// Re-filtering a normalized string yields the same string
    #[test]
    fn string_is_idempotent(value in "[a-z]{0,8}", default in "[a-z]{1,4}") {
        let options = StringOptions::default().with_max(6).with_default(default);
        if let Filtered::Valid(once) = filter_string(value.as_str(), &options) {
            prop_assert_eq!(filter_string(once.as_str(), &options), Filtered::Valid(once));
        }
    }
}

// =============================================================================
// Numeric Filter Properties
// =============================================================================

proptest! {
    /// Every i64 printed in decimal parses back to itself
    #[test]
    fn int_decimal_roundtrip(n in any::<i64>()) {
        prop_assert_eq!(filter_int(n.to_string(), &IntOptions::default()), Filtered::Valid(n));
    }

    /// Hex printing of a non-negative value is admitted with `hex`
    #[test]
    fn int_hex_admission(n in 0i64..=i64::MAX) {
        let options = IntOptions::default().with_allow(IntBase::HEX);
        prop_assert_eq!(filter_int(format!("0x{n:x}"), &options), Filtered::Valid(n));
    }

    /// Range checking never lets an out-of-range value through
    #[test]
    fn int_range_is_respected(n in -1000i64..1000, lo in -500i64..0, hi in 0i64..500) {
        let options = IntOptions::default().with_range(lo, hi);
        match filter_int(n, &options) {
            Filtered::Valid(v) => prop_assert!((lo..=hi).contains(&v)),
            Filtered::Invalid => prop_assert!(n < lo || n > hi),
        }
    }

    /// Finite floats survive their own display form
    #[test]
    fn float_display_roundtrip(f in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let options = FloatOptions::default();
        prop_assert_eq!(filter_float(f.to_string(), &options), Filtered::Valid(f));
    }
}

// =============================================================================
// Bool Filter Properties
// =============================================================================

proptest! {
    /// Without a default the bool filter is invalid exactly on unknown words
    #[test]
    fn bool_unknown_words_are_invalid(word in "[a-z]{2,6}") {
        let known = ["true", "false", "on", "off", "yes", "no"];
        let result = filter_bool(word.as_str(), &BoolOptions::default());
        prop_assert_eq!(result.is_valid(), known.contains(&word.as_str()));
    }
}

// =============================================================================
// Totality
// =============================================================================

/// Free text mixed with fragments the date grammar gives meaning to
fn loose_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,40}",
        ("\\PC{0,12}", -999_999_999_999i64..999_999_999_999, "[a-z]{0,9}")
            .prop_map(|(head, n, unit)| format!("{head} {n:+} {unit} ago")),
        any::<i64>().prop_map(|n| format!("@{n}")),
        ("[0-9]{1,5}-[0-9]{1,3}-[0-9]{1,3}", any::<i64>())
            .prop_map(|(date, n)| format!("{date} {n} years")),
        "(next|last|tomorrow|noon|now|[+-][0-9]{1,20}|[a-z]{1,6}| ){0,12}",
    ]
}

fn any_raw() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        Just(RawValue::Null),
        any::<bool>().prop_map(RawValue::Boolean),
        any::<i64>().prop_map(RawValue::Integer),
        any::<f64>().prop_map(RawValue::Float),
        loose_text().prop_map(RawValue::String),
    ]
}

fn fixed_now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-03-15T10:30:00+00:00").unwrap()
}

proptest! {
    /// The date parser returns an answer for any text
    #[test]
    fn datetime_parser_is_total(text in loose_text()) {
        let _ = parse_datetime_at(&text, fixed_now());
    }

    /// Every filter yields exactly one outcome for any input and options
    #[test]
    fn filters_are_total(
        value in any_raw(),
        pattern in "\\PC{0,16}",
        default in loose_text(),
        min in loose_text(),
        max in loose_text(),
        bounds in (any::<i64>(), any::<i64>()),
        lengths in (0usize..64, 0usize..64),
        flags in (any::<bool>(), any::<bool>(), any::<bool>()),
    ) {
        let (required, octal, hex) = flags;

        let string = StringOptions::default()
            .with_required(required)
            .with_min(lengths.0)
            .with_max(lengths.1)
            .with_regex(&pattern)
            .with_default(default.clone());
        let result = filter_string(value.clone(), &string);
        prop_assert!(result.is_valid() != result.is_invalid());

        let int = IntOptions::default()
            .with_range(bounds.0, bounds.1)
            .with_allow(IntBase { octal, hex })
            .with_default(bounds.0);
        let result = filter_int(value.clone(), &int);
        prop_assert!(result.is_valid() != result.is_invalid());

        let decimal = if hex { DecimalSeparator::Comma } else { DecimalSeparator::Dot };
        let result = filter_float(value.clone(), &FloatOptions::default().with_decimal(decimal));
        prop_assert!(result.is_valid() != result.is_invalid());

        let boolean = BoolOptions::default().with_strict_null(required);
        let result = filter_bool(value.clone(), &boolean);
        prop_assert!(result.is_valid() != result.is_invalid());

        let dates = DateTimeOptions::default()
            .with_min(min)
            .with_max(max)
            .with_default(default);
        let result = filter_datetime_at(value, &dates, fixed_now());
        prop_assert!(result.is_valid() != result.is_invalid());
    }
}
