//! Total scalar transforms applied by the mapping engine.
//!
//! Every filter is a total function over [`serde_json::Value`]: no input can
//! make one panic, and unparseable input maps to `Value::Null` (or `false`
//! for [`boolean`], which never yields null). The engine relies on this —
//! it carries no catch logic of its own.
//!
//! Filters that need more than a single field's value (sibling gathering,
//! token-based nullification) are declared through the tagged [`Filter`]
//! enum so the engine knows at table-authoring time what to pass.

use serde_json::{json, Map, Value};
use vinmono_core::{FoodPairing, ProductStatus};

/// A plain value-to-value transform.
pub type ValueFilter = fn(&Value) -> Value;

/// One step of a field-map transform chain.
#[derive(Debug, Clone, Copy)]
pub enum Filter {
    /// Apply a plain value transform.
    Apply(ValueFilter),
    /// Short-circuit to null when the raw value is a string matching one of
    /// `tokens` (case-sensitive), otherwise apply `inner`.
    Nullify {
        tokens: &'static [&'static str],
        inner: ValueFilter,
    },
    /// Row-aware: collect the values of the sibling fields named by `keys`,
    /// in order, skipping absent ones; each collected value optionally runs
    /// through `inner`. The incoming value itself is discarded.
    Join {
        keys: &'static [&'static str],
        inner: Option<ValueFilter>,
    },
}

impl Filter {
    /// Applies this step to `value`, with access to the whole raw `row` for
    /// the sibling-aware variants.
    #[must_use]
    pub fn apply(&self, value: &Value, row: &Map<String, Value>) -> Value {
        match self {
            Self::Apply(f) => f(value),
            Self::Nullify { tokens, inner } => match value.as_str() {
                Some(s) if tokens.contains(&s) => Value::Null,
                _ => inner(value),
            },
            Self::Join { keys, inner } => {
                let values: Vec<Value> = keys
                    .iter()
                    .filter_map(|key| row.get(*key))
                    .filter(|v| !v.is_null() && v.as_str() != Some(""))
                    .map(|v| inner.map_or_else(|| v.clone(), |f| f(v)))
                    .collect();
                Value::Array(values)
            }
        }
    }
}

/// Extracts a float from a string by byte scanning.
///
/// Non-greedy mode requires the number at the start of the (trimmed) string;
/// greedy mode scans past any leading non-digit characters (currency
/// symbols, stray text) to the first digit run. Both accept `,` and `.` as
/// the fractional separator and normalize to `.` before parsing.
fn scan_number(s: &str, greedy: bool) -> Option<f64> {
    let s = s.trim();
    let bytes = s.as_bytes();
    let start = if greedy {
        bytes.iter().position(u8::is_ascii_digit)?
    } else {
        if !bytes.first().is_some_and(u8::is_ascii_digit) {
            return None;
        }
        0
    };

    let mut end = start;
    let mut has_sep = false;
    while end < bytes.len() {
        let b = bytes[end];
        if b.is_ascii_digit() {
            end += 1;
        } else if (b == b'.' || b == b',')
            && !has_sep
            && end + 1 < bytes.len()
            && bytes[end + 1].is_ascii_digit()
        {
            has_sep = true;
            end += 1;
        } else {
            break;
        }
    }

    s[start..end].replace(',', ".").parse::<f64>().ok()
}

/// Whole non-negative values become integer numbers so integer accessors
/// downstream see them; everything else stays a float.
fn to_number(value: f64) -> Value {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Value::Number((value as u64).into())
    } else {
        serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

/// Numeric passthrough, or the leading number parsed from a string.
#[must_use]
pub fn number(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::String(s) => scan_number(s, false).map_or(Value::Null, to_number),
        _ => Value::Null,
    }
}

/// Like [`number`], but scans past leading non-digit characters.
#[must_use]
pub fn number_greedy(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::String(s) => scan_number(s, true).map_or(Value::Null, to_number),
        _ => Value::Null,
    }
}

/// Parses a price: numeric passthrough, `{ "value": n }` sub-documents, or
/// a currency-formatted string.
#[must_use]
pub fn price(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::Object(obj) => obj.get("value").map_or(Value::Null, price),
        Value::String(s) => scan_number(s, true).map_or(Value::Null, to_number),
        _ => Value::Null,
    }
}

/// Truthy tokens (case-insensitive `true`/`yes`/`ja`/`1`) map to `true`,
/// everything else to `false`. Never null.
#[must_use]
pub fn boolean(value: &Value) -> Value {
    let truthy = match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => {
            matches!(s.to_lowercase().as_str(), "true" | "yes" | "ja" | "1")
        }
        _ => false,
    };
    Value::Bool(truthy)
}

/// Converts a 0-8 clock rating (half steps allowed) to a 0-100 percentage,
/// rounded and clamped. Absent or unparseable input stays null.
#[must_use]
pub fn clock_to_percentage(value: &Value) -> Value {
    let Some(clock) = number(value).as_f64() else {
        return Value::Null;
    };
    let pct = (clock / 8.0 * 100.0).round().clamp(0.0, 100.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Value::Number((pct as u64).into())
}

/// Range variant of [`clock_to_percentage`] for facet value names of the
/// form `"lo-hi"`: both endpoints converted, rejoined with `-`. Anything
/// else passes through unchanged.
#[must_use]
pub fn clock_range(value: &Value) -> Value {
    let Some(s) = value.as_str() else {
        return value.clone();
    };
    if let Some((lo, hi)) = s.split_once('-') {
        let lo_pct = clock_to_percentage(&Value::String(lo.trim().to_owned()));
        let hi_pct = clock_to_percentage(&Value::String(hi.trim().to_owned()));
        if let (Some(lo_pct), Some(hi_pct)) = (lo_pct.as_u64(), hi_pct.as_u64()) {
            return Value::String(format!("{lo_pct}-{hi_pct}"));
        }
    }
    value.clone()
}

/// Liter-normalization factors for recognized unit tokens. Checked in order
/// so `ml`/`cl`/`dl` win before the bare `l`.
const VOLUME_UNITS: &[(&str, f64)] = &[
    ("ml", 1000.0),
    ("cl", 100.0),
    ("dl", 10.0),
    ("liter", 1.0),
    ("l", 1.0),
];

/// Parses a volume. Raw numbers pass through unchanged (already in the
/// export's base unit); strings have their magnitude greedily parsed and
/// divided by the unit factor. Unknown units default to factor 1.
#[must_use]
pub fn volume(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::String(s) if !s.is_empty() => {
            let factor = VOLUME_UNITS
                .iter()
                .find(|&&(unit, _)| s.contains(unit))
                .map_or(1.0, |&(_, factor)| factor);
            match scan_number(s, true) {
                // Zero magnitude is treated as absent, like the upstream
                // exports' "0" placeholder rows.
                Some(amount) if amount != 0.0 => to_number(amount / factor),
                _ => Value::Null,
            }
        }
        _ => Value::Null,
    }
}

/// Maps the fixed status vocabulary to its canonical form. Unknown tokens
/// map to null; see the status tests for why that gap is preserved.
#[must_use]
pub fn status(value: &Value) -> Value {
    value
        .as_str()
        .and_then(ProductStatus::from_code)
        .map_or(Value::Null, |s| Value::String(s.as_str().to_owned()))
}

/// String passthrough; empty strings and non-strings become null.
#[must_use]
pub fn text(value: &Value) -> Value {
    match value.as_str() {
        Some(s) if !s.is_empty() => value.clone(),
        _ => Value::Null,
    }
}

/// Trimmed string; empty results and non-strings become null.
#[must_use]
pub fn trim(value: &Value) -> Value {
    match value.as_str().map(str::trim) {
        Some(s) if !s.is_empty() => Value::String(s.to_owned()),
        _ => Value::Null,
    }
}

/// Parses a vintage year: a plausible four-digit integer, else null.
#[must_use]
pub fn year(value: &Value) -> Value {
    match number_greedy(value).as_f64() {
        Some(y) if (1000.0..=9999.0).contains(&y) && y.fract() == 0.0 => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Value::Number((y as u64).into())
        }
        _ => Value::Null,
    }
}

/// Resolves an array of pairing codes, `{ "code": .. }` objects, or
/// localized names into [`FoodPairing`] entries. Unresolvable entries are
/// silently dropped, so the output may be shorter than the input.
#[must_use]
pub fn food_pairing(value: &Value) -> Value {
    let Some(entries) = value.as_array() else {
        return Value::Array(Vec::new());
    };
    let resolved: Vec<Value> = entries
        .iter()
        .filter_map(resolve_pairing)
        .map(|p| {
            json!({
                "code": p.code,
                "identifier": p.identifier,
                "name": p.name,
            })
        })
        .collect();
    Value::Array(resolved)
}

fn resolve_pairing(entry: &Value) -> Option<&'static FoodPairing> {
    match entry {
        Value::Object(obj) => obj
            .get("code")
            .and_then(Value::as_str)
            .and_then(FoodPairing::by_code),
        Value::String(s) => FoodPairing::by_name(s).or_else(|| FoodPairing::by_code(s)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
