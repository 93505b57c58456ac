//! The generic field-mapping engine.
//!
//! `map` walks a raw JSON object in key insertion order and, for each key,
//! either applies the matching table row's transform chain or camel-cases
//! the key into the record's `extra` side list. The engine itself never
//! guards transforms: every filter is total by contract (see
//! [`crate::filters`]), so there is nothing to catch here.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::filters::Filter;

/// One row of a field-map table: upstream key, target field name, and the
/// transform chain applied in order. An empty chain passes the value through
/// unchanged.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub source: &'static str,
    pub target: &'static str,
    pub filters: &'static [Filter],
}

/// The engine's output: mapped fields keyed by target name, plus unmapped
/// keys preserved under their camel-cased names.
#[derive(Debug, Clone, Default)]
pub struct MappedRecord {
    fields: BTreeMap<&'static str, Value>,
    /// Raw keys with no table row, camel-cased, in source order. Kept
    /// separate so unknown upstream fields are visible without being merged
    /// into the typed model.
    pub extra: Vec<(String, Value)>,
}

/// Maps a raw object through a field-map table.
#[must_use]
pub fn map(raw: &Map<String, Value>, table: &'static [FieldMapping]) -> MappedRecord {
    let mut record = MappedRecord::default();
    for (key, value) in raw {
        match table.iter().find(|row| row.source == key) {
            Some(row) => {
                let mut mapped = value.clone();
                for filter in row.filters {
                    mapped = filter.apply(&mapped, raw);
                }
                record.fields.insert(row.target, mapped);
            }
            None => record.extra.push((camel_case(key), value.clone())),
        }
    }
    record
}

impl MappedRecord {
    #[must_use]
    pub fn get(&self, target: &str) -> Option<&Value> {
        self.fields.get(target)
    }

    /// Non-empty string value, if present.
    #[must_use]
    pub fn string(&self, target: &str) -> Option<String> {
        self.get(target)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }

    /// String value with the model default for absent fields.
    #[must_use]
    pub fn string_or_default(&self, target: &str) -> String {
        self.string(target).unwrap_or_default()
    }

    #[must_use]
    pub fn f64(&self, target: &str) -> Option<f64> {
        self.get(target).and_then(Value::as_f64)
    }

    #[must_use]
    pub fn f64_or(&self, target: &str, default: f64) -> f64 {
        self.f64(target).unwrap_or(default)
    }

    /// Boolean with an explicit model default; non-boolean values (including
    /// null propagated by a filter) fall back to the default.
    #[must_use]
    pub fn bool_or(&self, target: &str, default: bool) -> bool {
        self.get(target).and_then(Value::as_bool).unwrap_or(default)
    }

    #[must_use]
    pub fn u8(&self, target: &str) -> Option<u8> {
        self.get(target)
            .and_then(Value::as_u64)
            .and_then(|v| u8::try_from(v).ok())
    }

    #[must_use]
    pub fn u16(&self, target: &str) -> Option<u16> {
        self.get(target)
            .and_then(Value::as_u64)
            .and_then(|v| u16::try_from(v).ok())
    }
}

/// Camel-cases a raw key: runs of `-`, `_`, and whitespace are removed and
/// the following character uppercased; the first character is lowercased.
#[must_use]
pub fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => out,
    }
}
