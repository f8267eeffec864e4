use std::collections::BTreeSet;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::check::{CheckContext, check};
use crate::field::Field;
use crate::rule::{ErrorType, Issue};

/// One failed check on one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub field: String,
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl FieldError {
    /// Dotted path of the failing member, e.g. `contactAddress.postcode`.
    pub fn path(&self) -> String {
        match &self.key {
            Some(key) => format!("{}.{}", self.field, key),
            None => self.field.clone(),
        }
    }
}

/// A failure resolved to localised copy through the field's message table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationMessage {
    pub param: String,
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub msg: String,
}

/// Outcome of validating a data snapshot against a set of fields.
///
/// `value` holds only fields whose schema was not stripped: normalised values
/// for passing fields and the submitted value for failing ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<ValidationMessage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_fields: Vec<String>,
}

impl ValidationResult {
    /// The collected failures, or `None` when everything passed.
    pub fn error(&self) -> Option<&[FieldError]> {
        (!self.errors.is_empty()).then_some(self.errors.as_slice())
    }

    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|message| message.param == field)
            .map(|message| message.msg.as_str())
            .collect()
    }

    pub fn value_map(&self) -> Map<String, Value> {
        self.value.as_object().cloned().unwrap_or_default()
    }
}

/// Validates every included field against `data`, collecting all failures.
///
/// Keys in `data` that no field claims are listed in `unknown_fields` and
/// otherwise ignored.
pub fn validate<'a>(
    fields: impl IntoIterator<Item = &'a Field>,
    data: &Value,
    today: NaiveDate,
) -> ValidationResult {
    let ctx = CheckContext { data, today };
    let mut value = Map::new();
    let mut errors = Vec::new();
    let mut messages = Vec::new();
    let mut claimed = BTreeSet::new();

    for field in fields {
        claimed.insert(field.name.as_str());
        let Some(rule) = field.resolve(data) else {
            continue;
        };
        let raw = data.get(&field.name);

        match check(rule, raw, &ctx) {
            Ok(Some(normalised)) => {
                value.insert(field.name.clone(), normalised);
            }
            Ok(None) => {}
            Err(issues) => {
                if let Some(raw) = raw {
                    value.insert(field.name.clone(), raw.clone());
                }
                for issue in issues {
                    messages.push(message_for(field, &issue));
                    errors.push(FieldError {
                        field: field.name.clone(),
                        error_type: issue.error_type,
                        key: issue.key,
                    });
                }
            }
        }
    }

    let unknown_fields = data
        .as_object()
        .map(|map| {
            map.keys()
                .filter(|key| !claimed.contains(key.as_str()))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    ValidationResult {
        is_valid: errors.is_empty(),
        value: Value::Object(value),
        errors,
        messages,
        unknown_fields,
    }
}

fn message_for(field: &Field, issue: &Issue) -> ValidationMessage {
    ValidationMessage {
        param: field.name.clone(),
        error_type: issue.error_type,
        key: issue.key.clone(),
        msg: field.message_for(issue),
    }
}
