//! Record classification
//!
//! Turns the normalized JSON array into typed records. Numbers are read from their
//! source text (serde_json keeps it verbatim with `arbitrary_precision`) straight into
//! `Decimal`, so no value ever passes through a binary float.

use crate::error::{Result, TrackError};
use crate::parser::normalize::{feed_line_at, normalize_feed};
use crate::types::Record;
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

const TOGGLE_KEY: &str = "control_switch_on";

/// Parse a raw telemetry feed into records, in stream order
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let array_text = normalize_feed(text)?;

    let values: Vec<Value> = serde_json::from_str(&array_text).map_err(|err| {
        let (line_number, line) = feed_line_at(text, err.column());
        TrackError::malformed(
            format!(
                "feed line {} does not parse as JSON ({:?} error)",
                line_number,
                err.classify()
            ),
            line,
        )
    })?;

    let records = values
        .iter()
        .enumerate()
        .map(|(index, value)| classify_record(index, value))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("parsed {} records from {} bytes of feed", records.len(), text.len());
    Ok(records)
}

/// Decide which record shape a parsed object has
///
/// A boolean `control_switch_on` makes it an autopilot toggle; otherwise it needs a
/// `geo` object holding numeric `lat` and `lon`, whatever else the flag holds.
/// Both shapes need a numeric `ts`.
pub fn classify_record(index: usize, value: &Value) -> Result<Record> {
    let object = value
        .as_object()
        .ok_or_else(|| malformed_record(index, "is not a JSON object", value))?;

    let timestamp = match object.get("ts") {
        Some(Value::Number(ts)) => parse_decimal(ts).ok_or_else(|| {
            malformed_record(index, "has a `ts` outside decimal range or precision", value)
        })?,
        _ => return Err(malformed_record(index, "has no numeric `ts`", value)),
    };

    if let Some(Value::Bool(enabled)) = object.get(TOGGLE_KEY) {
        return Ok(Record::toggle(timestamp, *enabled));
    }

    let geo = object
        .get("geo")
        .and_then(Value::as_object)
        .ok_or_else(|| malformed_record(index, "has neither a toggle flag nor a geo point", value))?;

    let lat = coordinate(geo, "lat").map_err(|reason| malformed_record(index, reason, value))?;
    let lon = coordinate(geo, "lon").map_err(|reason| malformed_record(index, reason, value))?;

    Ok(Record::geo_fix(timestamp, lat, lon))
}

fn coordinate(geo: &Map<String, Value>, key: &str) -> std::result::Result<Decimal, String> {
    match geo.get(key) {
        Some(Value::Number(number)) => parse_decimal(number)
            .ok_or_else(|| format!("has a `geo.{key}` outside decimal range or precision")),
        Some(_) => Err(format!("has a non-numeric `geo.{key}`")),
        None => Err(format!("has a geo point without `{key}`")),
    }
}

/// Exact decimal value of a JSON number, plain (`10.001`) or scientific (`1e-3`)
///
/// `None` when the value does not fit a 96-bit decimal mantissa, or when it is a
/// non-zero literal too small to survive the conversion (it would otherwise round
/// to an exact zero and pass for the no-fix sentinel).
pub fn parse_decimal(number: &Number) -> Option<Decimal> {
    let text = number.to_string();
    let value = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()?;

    if value.is_zero() && has_nonzero_digit(&text) {
        return None;
    }
    Some(value)
}

/// Whether the mantissa of a JSON number literal has any digit other than zero
fn has_nonzero_digit(text: &str) -> bool {
    text.split(['e', 'E'])
        .next()
        .unwrap_or(text)
        .bytes()
        .any(|b| matches!(b, b'1'..=b'9'))
}

fn malformed_record(index: usize, reason: impl std::fmt::Display, value: &Value) -> TrackError {
    TrackError::malformed(format!("record {} {}", index + 1, reason), &value.to_string())
}
