//! Flexible date-time parsing
//!
//! Accepts the absolute formats people actually type into forms plus a small
//! relative grammar (`tomorrow`, `+1 week`, `3 days ago`, `2024-01-31 +1 month`).
//! Values without an explicit offset are read as UTC.

use chrono::{
    DateTime, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc,
};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

// RFC 2822 with a weekday (`Tue, 1 Jul 2003 10:52:37 +0200`) is the longest anchor
const MAX_ANCHOR_TOKENS: usize = 6;

/// Units accepted in relative terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Fortnight,
    Month,
    Year,
}

impl Unit {
    fn parse(word: &str) -> Option<Self> {
        let unit = match word {
            "s" | "sec" | "secs" | "second" | "seconds" => Unit::Second,
            "min" | "mins" | "minute" | "minutes" => Unit::Minute,
            "h" | "hour" | "hours" => Unit::Hour,
            "d" | "day" | "days" => Unit::Day,
            "w" | "week" | "weeks" => Unit::Week,
            "fortnight" | "fortnights" => Unit::Fortnight,
            "month" | "months" => Unit::Month,
            "y" | "year" | "years" => Unit::Year,
            _ => return None,
        };
        Some(unit)
    }
}

/// Parse a date-time relative to the current instant
pub fn parse_datetime(input: &str) -> Option<DateTime<FixedOffset>> {
    parse_datetime_at(input, Utc::now().fixed_offset())
}

/// Parse a date-time, resolving relative terms against `now`
///
/// Returns `None` for empty input or anything that is not fully understood.
pub fn parse_datetime_at(input: &str, now: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }
    if let Some(parsed) = parse_absolute(text) {
        return Some(parsed);
    }

    // An absolute prefix may anchor the relative terms that follow it
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let longest = tokens.len().saturating_sub(1).min(MAX_ANCHOR_TOKENS);
    for split in (1..=longest).rev() {
        if let Some(base) = parse_absolute(&tokens[..split].join(" ")) {
            return apply_relative(base, &tokens[split..]);
        }
    }
    apply_relative(now, &tokens)
}

fn parse_absolute(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Some(seconds) = text.strip_prefix('@') {
        let seconds = seconds.parse::<i64>().ok()?;
        return DateTime::from_timestamp(seconds, 0).map(|dt| dt.fixed_offset());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt);
    }

    let zulu = text
        .strip_suffix(['Z', 'z'])
        .map(|head| format!("{head}+00:00"));
    let with_offset = zulu.as_deref().unwrap_or(text);
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(with_offset, fmt).ok())
    {
        return Some(dt);
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(naive.and_utc().fixed_offset());
    }

    NAIVE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}

fn apply_relative(
    base: DateTime<FixedOffset>,
    tokens: &[&str],
) -> Option<DateTime<FixedOffset>> {
    let words: Vec<String> = tokens.iter().map(|t| t.to_ascii_lowercase()).collect();
    let mut current = base;
    let mut i = 0;

    while i < words.len() {
        let word = words[i].as_str();
        i += 1;
        match word {
            "now" => {}
            "today" | "midnight" => current = at_time(current, NaiveTime::MIN)?,
            "noon" => current = at_time(current, NaiveTime::from_hms_opt(12, 0, 0)?)?,
            "tomorrow" => current = at_time(shift(current, 1, Unit::Day)?, NaiveTime::MIN)?,
            "yesterday" => current = at_time(shift(current, -1, Unit::Day)?, NaiveTime::MIN)?,
            "next" | "last" | "previous" => {
                let unit = Unit::parse(words.get(i)?)?;
                i += 1;
                let amount = if word == "next" { 1 } else { -1 };
                current = shift(current, amount, unit)?;
            }
            _ => {
                let (mut amount, unit) = match split_amount(word)? {
                    (amount, Some(unit)) => (amount, unit),
                    (amount, None) => {
                        let unit = Unit::parse(words.get(i)?)?;
                        i += 1;
                        (amount, unit)
                    }
                };
                if words.get(i).map(String::as_str) == Some("ago") {
                    amount = amount.checked_neg()?;
                    i += 1;
                }
                current = shift(current, amount, unit)?;
            }
        }
    }
    Some(current)
}

/// Split `+3`, `-2days` or `10` into an amount and an optional glued unit
fn split_amount(word: &str) -> Option<(i64, Option<Unit>)> {
    let digits_start = usize::from(word.starts_with(['+', '-']));
    let digits_end = word[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(word.len(), |pos| pos + digits_start);
    if digits_end == digits_start {
        return None;
    }
    let amount = word[..digits_end].parse::<i64>().ok()?;
    let rest = &word[digits_end..];
    if rest.is_empty() {
        Some((amount, None))
    } else {
        Some((amount, Some(Unit::parse(rest)?)))
    }
}

fn at_time(dt: DateTime<FixedOffset>, time: NaiveTime) -> Option<DateTime<FixedOffset>> {
    dt.date_naive()
        .and_time(time)
        .and_local_timezone(*dt.offset())
        .single()
}

fn shift(dt: DateTime<FixedOffset>, amount: i64, unit: Unit) -> Option<DateTime<FixedOffset>> {
    let delta = match unit {
        Unit::Second => TimeDelta::try_seconds(amount)?,
        Unit::Minute => TimeDelta::try_minutes(amount)?,
        Unit::Hour => TimeDelta::try_hours(amount)?,
        Unit::Day => TimeDelta::try_days(amount)?,
        Unit::Week => TimeDelta::try_weeks(amount)?,
        Unit::Fortnight => TimeDelta::try_weeks(amount.checked_mul(2)?)?,
        Unit::Month => return shift_months(dt, amount),
        Unit::Year => return shift_months(dt, amount.checked_mul(12)?),
    };
    dt.checked_add_signed(delta)
}

// Lands on the last day of the target month when the day does not exist there
fn shift_months(dt: DateTime<FixedOffset>, amount: i64) -> Option<DateTime<FixedOffset>> {
    let months = Months::new(u32::try_from(amount.unsigned_abs()).ok()?);
    if amount >= 0 {
        dt.checked_add_months(months)
    } else {
        dt.checked_sub_months(months)
    }
}
