//! Tolerant readers over a submitted `data` object.
//!
//! Gating logic reads sibling answers through these helpers so a missing or
//! mistyped gating value behaves like "nothing selected" instead of failing.

use serde_json::Value;

use crate::country::Country;

/// Returns the trimmed string stored under `key`, if any.
pub fn text<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    data.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Returns the selected values of a multi-choice answer.
///
/// A lone string counts as a single selection; numbers are stringified.
pub fn values(data: &Value, key: &str) -> Vec<String> {
    selections(data.get(key))
}

/// Multi-choice reading of an optional raw value. Repeated selections count
/// once, first occurrence kept.
pub fn selections(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => {
            let mut selected: Vec<String> = Vec::new();
            for item in items.iter().filter_map(scalar_string) {
                if !selected.contains(&item) {
                    selected.push(item);
                }
            }
            selected
        }
        Some(value) => scalar_string(value).into_iter().collect(),
        None => Vec::new(),
    }
}

/// Stringifies scalar answers so choice comparisons ignore the JSON type.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Whether the applicant has entered anything for `key`.
pub fn has_value(data: &Value, key: &str) -> bool {
    data.get(key).is_some_and(is_filled)
}

pub(crate) fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        Value::Array(items) => items.iter().any(is_filled),
        Value::Object(map) => map.values().any(is_filled),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Countries selected in `projectCountries`, in canonical order, unknown
/// values dropped.
pub fn countries(data: &Value) -> Vec<Country> {
    let selected = values(data, "projectCountries");
    Country::ALL
        .into_iter()
        .filter(|country| selected.iter().any(|value| value == country.as_str()))
        .collect()
}

/// The selected country when exactly one was chosen.
pub fn single_country(data: &Value) -> Option<Country> {
    match countries(data).as_slice() {
        [country] => Some(*country),
        _ => None,
    }
}
