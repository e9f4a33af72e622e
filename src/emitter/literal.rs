//! Rendering of scalar literals and identifiers.
//!
//! Strings and identifiers escape their quote character by doubling it;
//! there are no backslash escapes in SQL string syntax. Temporal values
//! are normalized to UTC before formatting so the emitted instant is
//! offset-independent.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::Buffer;

pub fn boolean(value: bool, out: &mut Buffer) {
    out.append(if value { "TRUE" } else { "FALSE" });
}

pub fn null(out: &mut Buffer) {
    out.append("NULL");
}

pub fn integer(value: i64, out: &mut Buffer) {
    out.append(&value.to_string());
}

/// Shortest round-trippable decimal text; whole numbers keep one
/// fractional digit (`1.0`, never `1`).
pub fn float(value: f64, out: &mut Buffer) {
    if value.is_finite() && value.fract() == 0.0 {
        out.append(&format!("{value:.1}"));
    } else {
        out.append(&value.to_string());
    }
}

/// Decimal text as stored; a scale-zero value still gains `.0` so the
/// output reads as a non-integer literal.
pub fn decimal(value: &Decimal, out: &mut Buffer) {
    let text = value.to_string();
    out.append(&text);
    if !text.contains('.') {
        out.append(".0");
    }
}

/// Single-quoted; embedded single quotes are doubled.
pub fn string(value: &str, out: &mut Buffer) {
    out.append("'");
    out.append(&value.replace('\'', "''"));
    out.append("'");
}

/// Each part double-quoted with embedded double quotes doubled;
/// qualified names join their parts with `.`.
pub fn identifier(parts: &[String], out: &mut Buffer) {
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            out.append(".");
        }
        out.append("\"");
        out.append(&part.replace('"', "\"\""));
        out.append("\"");
    }
}

pub fn date(value: &NaiveDate, out: &mut Buffer) {
    out.append(&format!("'{}'", value.format("%Y-%m-%d")));
}

/// UTC-normalized, nanosecond precision, explicit `+00:00` offset.
pub fn datetime(value: &DateTime<FixedOffset>, out: &mut Buffer) {
    let utc = value.with_timezone(&Utc);
    out.append(&format!("'{}'", utc.format("%Y-%m-%dT%H:%M:%S%.9f+00:00")));
}

/// UTC-normalized, nanosecond precision, `Z` marker.
pub fn time(value: &DateTime<FixedOffset>, out: &mut Buffer) {
    let utc = value.with_timezone(&Utc);
    out.append(&format!("'{}'", utc.format("%Y-%m-%dT%H:%M:%S%.9fZ")));
}
