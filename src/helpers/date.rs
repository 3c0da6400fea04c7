//! Date helper functions

use std::borrow::Cow;
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone,
};
use chrono_tz::Tz;

/// Format applied when no usable override is given, e.g. "Jan 5, 2025"
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Pick the date format for a render pass
///
/// The override wins when it is present, not blank and parses as a valid
/// format. Anything else yields [`DEFAULT_DATE_FORMAT`].
pub fn resolve_date_format(format: Option<&str>) -> Cow<'_, str> {
    match format.filter(|f| !f.trim().is_empty()) {
        Some(format) => {
            let normalized = to_strftime(format);
            if is_valid_format(&normalized) {
                normalized
            } else {
                tracing::warn!(
                    "Ignoring invalid date format {:?}, using {:?}",
                    format,
                    DEFAULT_DATE_FORMAT
                );
                Cow::Borrowed(DEFAULT_DATE_FORMAT)
            }
        }
        None => Cow::Borrowed(DEFAULT_DATE_FORMAT),
    }
}

/// Check that a strftime string only contains specifiers chrono understands
pub fn is_valid_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Format a date with a strftime string
///
/// Month and weekday names always come out in English, whatever the
/// process locale is.
pub fn format_date<Z: TimeZone>(date: &DateTime<Z>, format: &str) -> String
where
    Z::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
    }
    out
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml<Z: TimeZone>(date: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Generate a <time> HTML element
pub fn time_tag<Z: TimeZone>(date: &DateTime<Z>, format: &str) -> String
where
    Z::Offset: std::fmt::Display,
{
    format!(
        r#"<time datetime="{}">{}</time>"#,
        date_xml(date),
        format_date(date, format)
    )
}

/// Move a date into the display timezone, if one is configured
pub fn localize(date: &DateTime<FixedOffset>, tz: Option<Tz>) -> DateTime<FixedOffset> {
    match tz {
        Some(tz) => date.with_timezone(&tz).fixed_offset(),
        None => *date,
    }
}

/// Parse a date string in the formats blog tooling commonly emits
///
/// Values without an offset are read as wall-clock time in `tz`, or UTC
/// when no zone is given.
pub fn parse_date(s: &str, tz: Option<Tz>) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    let with_offset = [
        "%Y-%m-%d %H:%M:%S %z",
        "%Y-%m-%d %H:%M:%S%.f %z",
        "%Y-%m-%d %H:%M %z",
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y/%m/%d %H:%M:%S %z",
    ];
    for fmt in with_offset {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let naive = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
    ];
    for fmt in naive {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return in_zone(dt, tz);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return in_zone(d.and_hms_opt(0, 0, 0)?, tz);
        }
    }

    None
}

fn in_zone(naive: NaiveDateTime, tz: Option<Tz>) -> Option<DateTime<FixedOffset>> {
    let Some(tz) = tz else {
        return Some(naive.and_utc().fixed_offset());
    };

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.fixed_offset()),
        // Skipped by a DST jump: read it with the offset in force before the gap
        LocalResult::None => {
            let before = tz
                .offset_from_utc_datetime(&(naive - Duration::days(1)))
                .fix();
            let utc = naive - Duration::seconds(i64::from(before.local_minus_utc()));
            Some(tz.from_utc_datetime(&utc).fixed_offset())
        }
    }
}

/// Turn a format string into strftime
///
/// Strings containing `%` are already strftime. Anything else is read as a
/// Moment.js pattern, the convention Hexo configs use.
pub fn to_strftime(format: &str) -> Cow<'_, str> {
    if format.contains('%') {
        Cow::Borrowed(format)
    } else {
        Cow::Owned(moment_to_strftime(format))
    }
}

/// Moment.js tokens, longest first so `MMMM` wins over `MM`
///
/// strftime has no ordinal suffix, so `Do` renders the bare day number.
const MOMENT_TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("DDDD", "%j"),
    ("dddd", "%A"),
    ("MMM", "%b"),
    ("DDD", "%-j"),
    ("ddd", "%a"),
    ("SSS", "%3f"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("ZZ", "%z"),
    ("LL", "%B %-d, %Y"),
    ("Do", "%-d"),
    ("M", "%-m"),
    ("D", "%-d"),
    ("H", "%-H"),
    ("h", "%-I"),
    ("m", "%-M"),
    ("s", "%-S"),
    ("A", "%p"),
    ("a", "%P"),
    ("Z", "%:z"),
    ("L", "%m/%d/%Y"),
];

fn moment_to_strftime(format: &str) -> String {
    let mut result = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'scan: while let Some(c) = rest.chars().next() {
        // [literal text] is copied through untouched
        if c == '[' {
            if let Some(end) = rest.find(']') {
                result.push_str(&rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        for &(token, strftime) in MOMENT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                result.push_str(strftime);
                rest = tail;
                continue 'scan;
            }
        }

        result.push(c);
        rest = &rest[c.len_utf8()..];
    }

    result
}
