//! Multi-field derivations that cannot be expressed as single-field
//! transforms: price-per-liter, traits extraction, characteristic
//! percentages, and opening-hours parsing.
//!
//! Each derivation degrades rather than fails: malformed input yields the
//! documented absent value and a `tracing` warning where the omission is
//! worth surfacing. Nothing in this module returns `Result`.

use serde_json::Value;
use vinmono_core::{OpeningHours, TimeOfDay, Volume};

/// Extracts the unit token from a formatted volume string like `"50 cl"`:
/// split on whitespace, take the second token, lowercase. Strings that do
/// not split into exactly two tokens carry no recognizable unit.
#[must_use]
pub fn volume_unit(formatted_value: &str) -> Option<String> {
    let tokens: Vec<&str> = formatted_value.split_whitespace().collect();
    if let [_, unit] = tokens.as_slice() {
        Some(unit.to_lowercase())
    } else {
        if !formatted_value.is_empty() {
            tracing::warn!(formatted_value, "unable to find volume unit");
        }
        None
    }
}

/// Price divided by the liter-normalized volume.
///
/// Missing price, missing/empty volume, or a non-positive magnitude yield
/// `0.0`; an unrecognized unit warns and yields `0.0`. Callers always get a
/// number, never an error.
#[must_use]
pub fn price_per_liter(price: Option<f64>, volume: Option<&Volume>) -> f64 {
    let (Some(price), Some(volume)) = (price, volume) else {
        return 0.0;
    };
    if volume.value <= 0.0 {
        return 0.0;
    }
    match volume.unit.as_str() {
        "cl" => price / (volume.value / 100.0),
        "dl" => price / volume.value / 10.0,
        "l" => price / volume.value,
        unit => {
            tracing::warn!(unit, "unknown volume unit, unable to calculate price per liter");
            0.0
        }
    }
}

/// Finds a trait entry by case-insensitive name match.
fn find_trait<'a>(traits: Option<&'a Value>, label: &str) -> Option<&'a Value> {
    traits?.as_array()?.iter().find(|t| {
        t.get("name")
            .and_then(Value::as_str)
            .is_some_and(|name| name.eq_ignore_ascii_case(label))
    })
}

fn parse_float(token: &str) -> Option<f64> {
    token.trim().replace(',', ".").parse::<f64>().ok()
}

/// Alcohol by volume from the traits list: the `"Alkohol"` entry's
/// formatted value split on `%`. Absent or malformed entries warn and yield
/// `0.0` (the model default — gift articles legitimately have no alcohol
/// trait).
#[must_use]
pub fn abv_from_traits(traits: Option<&Value>) -> f64 {
    let Some(entry) = find_trait(traits, "Alkohol") else {
        tracing::warn!("no alcohol trait in response, defaulting abv to 0");
        return 0.0;
    };
    let formatted = entry
        .get("formattedValue")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let parts: Vec<&str> = formatted.split('%').collect();
    if parts.len() != 2 {
        tracing::warn!(formatted, "unable to parse abv from alcohol trait");
        return 0.0;
    }
    parse_float(parts[0]).unwrap_or_else(|| {
        tracing::warn!(formatted, "unable to parse abv from alcohol trait");
        0.0
    })
}

/// Sugar or acid (grams per liter) from the traits list: the labeled
/// entry's formatted value split on whitespace, first parseable token wins.
#[must_use]
pub fn grams_per_liter_from_traits(traits: Option<&Value>, label: &str) -> Option<f64> {
    let entry = find_trait(traits, label)?;
    let formatted = entry.get("formattedValue").and_then(Value::as_str)?;
    let mut tokens = formatted.split_whitespace();
    let first = tokens.next().and_then(parse_float);
    first.or_else(|| tokens.next().and_then(parse_float))
}

/// A 0-100 percentage from a characteristic's readable value, formatted
/// upstream as `"<label>, <current> av <max>"`. Any parse failure warns and
/// yields `None`; nothing escapes as an error.
#[must_use]
pub fn percentage_from_characteristics(characteristics: Option<&Value>, label: &str) -> Option<u8> {
    let entry = characteristics?.as_array()?.iter().find(|c| {
        c.get("name")
            .and_then(Value::as_str)
            .is_some_and(|name| name.eq_ignore_ascii_case(label))
    })?;
    let readable = entry.get("readableValue").and_then(Value::as_str)?;

    let parsed = readable.split(',').nth(1).and_then(|scale| {
        let (current, max) = scale.split_once("av")?;
        let current: f64 = current.trim().parse().ok()?;
        let max: f64 = max.trim().parse().ok()?;
        if max <= 0.0 {
            return None;
        }
        let pct = (current / max * 100.0).round().clamp(0.0, 100.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(pct as u8)
    });
    if parsed.is_none() {
        tracing::warn!(label, readable, "unable to parse characteristic");
    }
    parsed
}

/// Zip and city from a formatted address string, where the city is the
/// last comma-separated segment and the zip the one before it, e.g.
/// `"Briskebyveien 48, 0258, Oslo"`. Strings without both segments warn
/// and yield `None`.
#[must_use]
pub fn zip_and_city(formatted_address: &str) -> Option<(String, String)> {
    let mut segments = formatted_address.rsplit(',').map(str::trim);
    let city = segments.next().filter(|s| !s.is_empty());
    let zip = segments.next().filter(|s| !s.is_empty());
    match (zip, city) {
        (Some(zip), Some(city)) => Some((zip.to_owned(), city.to_owned())),
        _ => {
            tracing::warn!(formatted_address, "unable to get zip and city from address");
            None
        }
    }
}

/// Opening hours from the structured `openingTimes` list: one entry per
/// record, closed days keeping their weekday but no times.
#[must_use]
pub fn opening_hours_from_list(times: &Value) -> Vec<OpeningHours> {
    times
        .as_array()
        .map(|entries| entries.iter().filter_map(opening_hours_entry).collect())
        .unwrap_or_default()
}

/// The entry for one weekday from the structured list, matched
/// case-insensitively. Closed or missing days resolve to `None`.
#[must_use]
pub fn opening_hours_for_day(times: &Value, week_day: &str) -> Option<OpeningHours> {
    times
        .as_array()?
        .iter()
        .filter_map(opening_hours_entry)
        .find(|entry| entry.week_day.eq_ignore_ascii_case(week_day))
        .filter(|entry| !entry.is_closed())
}

fn opening_hours_entry(raw: &Value) -> Option<OpeningHours> {
    let week_day = raw.get("weekDay").and_then(Value::as_str)?.to_owned();
    let closed = raw.get("closed").and_then(Value::as_bool).unwrap_or(false);
    let (opens, closes) = if closed {
        (None, None)
    } else {
        (
            time_of_day(raw.get("openingTime")),
            time_of_day(raw.get("closingTime")),
        )
    };
    Some(OpeningHours {
        week_day,
        opens,
        closes,
    })
}

fn time_of_day(raw: Option<&Value>) -> Option<TimeOfDay> {
    let raw = raw?;
    let hour = raw.get("hour").and_then(Value::as_u64)?;
    let minute = raw.get("minute").and_then(Value::as_u64)?;
    Some(TimeOfDay {
        hour: u8::try_from(hour).ok()?,
        minute: u8::try_from(minute).ok()?,
    })
}

/// Parses the legacy per-weekday hour string: `"HH:MM-HH:MM"`, or the
/// literal `"Stengt"` for closed. The hour is the first two characters of
/// each side, the minute the remainder after the colon. Malformed strings
/// resolve to `None` — silent degradation, not a crash.
#[must_use]
pub fn parse_hours_string(raw: &str) -> Option<(TimeOfDay, TimeOfDay)> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("Stengt") {
        return None;
    }
    let (opens, closes) = raw.split_once('-')?;
    Some((parse_clock(opens)?, parse_clock(closes)?))
}

fn parse_clock(raw: &str) -> Option<TimeOfDay> {
    let raw = raw.trim();
    let hour: u8 = raw.get(..2)?.parse().ok()?;
    let minute: u8 = raw.get(3..)?.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(TimeOfDay { hour, minute })
}

#[cfg(test)]
#[path = "derive_test.rs"]
mod tests;
