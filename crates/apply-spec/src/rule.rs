use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data;

/// Failure tags attached to validation issues.
///
/// `Base` is never produced by a check; in a message table it matches any
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ErrorType {
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "any.required")]
    AnyRequired,
    #[serde(rename = "any.empty")]
    AnyEmpty,
    #[serde(rename = "any.invalid")]
    AnyInvalid,
    #[serde(rename = "any.allowOnly")]
    AnyOnly,
    #[serde(rename = "string.base")]
    StringBase,
    #[serde(rename = "string.max")]
    StringMax,
    #[serde(rename = "string.email")]
    StringEmail,
    #[serde(rename = "string.phonenumber")]
    StringPhone,
    #[serde(rename = "string.postcode")]
    StringPostcode,
    #[serde(rename = "string.uri")]
    StringUri,
    #[serde(rename = "string.minWords")]
    StringMinWords,
    #[serde(rename = "string.maxWords")]
    StringMaxWords,
    #[serde(rename = "number.base")]
    NumberBase,
    #[serde(rename = "number.integer")]
    NumberInteger,
    #[serde(rename = "number.min")]
    NumberMin,
    #[serde(rename = "number.max")]
    NumberMax,
    #[serde(rename = "array.base")]
    ArrayBase,
    #[serde(rename = "array.includes")]
    ArrayIncludes,
    #[serde(rename = "object.base")]
    ObjectBase,
    #[serde(rename = "date.base")]
    DateBase,
    #[serde(rename = "dateParts.dob")]
    DateOfBirth,
    #[serde(rename = "dayMonth.base")]
    DayMonthBase,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Base => "base",
            ErrorType::AnyRequired => "any.required",
            ErrorType::AnyEmpty => "any.empty",
            ErrorType::AnyInvalid => "any.invalid",
            ErrorType::AnyOnly => "any.allowOnly",
            ErrorType::StringBase => "string.base",
            ErrorType::StringMax => "string.max",
            ErrorType::StringEmail => "string.email",
            ErrorType::StringPhone => "string.phonenumber",
            ErrorType::StringPostcode => "string.postcode",
            ErrorType::StringUri => "string.uri",
            ErrorType::StringMinWords => "string.minWords",
            ErrorType::StringMaxWords => "string.maxWords",
            ErrorType::NumberBase => "number.base",
            ErrorType::NumberInteger => "number.integer",
            ErrorType::NumberMin => "number.min",
            ErrorType::NumberMax => "number.max",
            ErrorType::ArrayBase => "array.base",
            ErrorType::ArrayIncludes => "array.includes",
            ErrorType::ObjectBase => "object.base",
            ErrorType::DateBase => "date.base",
            ErrorType::DateOfBirth => "dateParts.dob",
            ErrorType::DayMonthBase => "dayMonth.base",
        }
    }

    /// Whether a message registered for `self` applies to an `actual` failure.
    pub fn matches(&self, actual: ErrorType) -> bool {
        *self == ErrorType::Base || *self == actual
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed check, optionally scoped to a member of a structured value
/// (`firstName`, `postcode`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Issue {
    pub fn new(error_type: ErrorType) -> Self {
        Self {
            error_type,
            key: None,
        }
    }

    pub fn at(error_type: ErrorType, key: &str) -> Self {
        Self {
            error_type,
            key: Some(key.to_string()),
        }
    }
}

/// Predicate over the current value of one gating field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    Equals { value: String },
    OneOf { values: Vec<String> },
    Contains { value: String },
    CountEq { count: usize },
    CountAtLeast { count: usize },
    Present,
    Not { condition: Box<Condition> },
    All { conditions: Vec<Condition> },
    Any { conditions: Vec<Condition> },
}

impl Condition {
    pub fn equals(value: impl Into<String>) -> Self {
        Condition::Equals {
            value: value.into(),
        }
    }

    pub fn one_of(values: &[&str]) -> Self {
        Condition::OneOf {
            values: values.iter().map(|value| value.to_string()).collect(),
        }
    }

    pub fn contains(value: impl Into<String>) -> Self {
        Condition::Contains {
            value: value.into(),
        }
    }

    /// Evaluates the predicate. A missing value is treated as nothing
    /// selected.
    pub fn evaluate(&self, value: Option<&Value>) -> bool {
        match self {
            Condition::Equals { value: expected } => {
                value.and_then(data::scalar_string).as_deref() == Some(expected.as_str())
            }
            Condition::OneOf { values } => value
                .and_then(data::scalar_string)
                .is_some_and(|actual| values.contains(&actual)),
            Condition::Contains { value: expected } => {
                data::selections(value).iter().any(|item| item == expected)
            }
            Condition::CountEq { count } => data::selections(value).len() == *count,
            Condition::CountAtLeast { count } => data::selections(value).len() >= *count,
            Condition::Present => value.is_some_and(data::is_filled),
            Condition::Not { condition } => !condition.evaluate(value),
            Condition::All { conditions } => conditions.iter().all(|c| c.evaluate(value)),
            Condition::Any { conditions } => conditions.iter().any(|c| c.evaluate(value)),
        }
    }
}

/// Comparison against a sibling field's current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// Fails with `any.invalid` when both values are the same.
    NotEqualTo { field: String },
    /// Fails with `number.max` when this amount exceeds the sibling amount.
    AtMost { field: String },
}

/// The concrete check a rule performs on a present value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Check {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_words: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_words: Option<usize>,
    },
    Email,
    Phone,
    Url {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    Currency {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Integer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Choice {
        allowed: Vec<String>,
        multiple: bool,
    },
    Name,
    Address,
    Date {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_age: Option<u32>,
    },
    DayMonth,
}

/// A resolved validation rule for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rule {
    pub check: Check,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

impl Rule {
    pub fn new(check: Check) -> Self {
        Self {
            check,
            required: true,
            constraints: Vec::new(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn optional(self) -> Self {
        self.required(false)
    }

    pub fn not_equal_to(mut self, field: &str) -> Self {
        self.constraints.push(Constraint::NotEqualTo {
            field: field.to_string(),
        });
        self
    }

    pub fn at_most(mut self, field: &str) -> Self {
        self.constraints.push(Constraint::AtMost {
            field: field.to_string(),
        });
        self
    }
}

/// Validation schema of a field: a rule, a strip, or a branch on a gating
/// field that is resolved against the submitted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Schema {
    /// Excluded: always passes and is removed from the validated value.
    Strip,
    Rule(Rule),
    When {
        field: String,
        condition: Condition,
        then: Box<Schema>,
        otherwise: Box<Schema>,
    },
}

impl Schema {
    pub fn when(field: &str, condition: Condition, then: Schema, otherwise: Schema) -> Self {
        Schema::When {
            field: field.to_string(),
            condition,
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    /// Applies `then` when the condition holds, strips the field otherwise.
    pub fn only_if(field: &str, condition: Condition, then: Schema) -> Self {
        Schema::when(field, condition, then, Schema::Strip)
    }

    /// Walks `When` branches against `data`; `None` means the field is
    /// stripped.
    pub fn resolve(&self, data: &Value) -> Option<&Rule> {
        match self {
            Schema::Strip => None,
            Schema::Rule(rule) => Some(rule),
            Schema::When {
                field,
                condition,
                then,
                otherwise,
            } => {
                if condition.evaluate(data.get(field)) {
                    then.resolve(data)
                } else {
                    otherwise.resolve(data)
                }
            }
        }
    }

    /// Gating fields this schema reads, in first-seen order.
    pub fn dependencies(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_dependencies(&mut names);
        names
    }

    fn collect_dependencies<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let Schema::When {
            field,
            then,
            otherwise,
            ..
        } = self
        {
            if !names.contains(&field.as_str()) {
                names.push(field);
            }
            then.collect_dependencies(names);
            otherwise.collect_dependencies(names);
        }
    }
}

impl From<Rule> for Schema {
    fn from(rule: Rule) -> Self {
        Schema::Rule(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text() -> Rule {
        Rule::new(Check::Text {
            max_length: None,
            min_words: None,
            max_words: None,
        })
    }

    #[test]
    fn nested_when_requires_both_gates() {
        let schema = Schema::only_if(
            "beneficiariesGroupsCheck",
            Condition::equals("yes"),
            Schema::only_if(
                "beneficiariesGroups",
                Condition::contains("religion"),
                text().into(),
            ),
        );

        assert!(schema.resolve(&json!({})).is_none());
        assert!(
            schema
                .resolve(&json!({ "beneficiariesGroupsCheck": "yes" }))
                .is_none()
        );
        assert!(
            schema
                .resolve(&json!({
                    "beneficiariesGroupsCheck": "yes",
                    "beneficiariesGroups": ["religion"]
                }))
                .is_some()
        );
        assert_eq!(
            schema.dependencies(),
            vec!["beneficiariesGroupsCheck", "beneficiariesGroups"]
        );
    }

    #[test]
    fn count_conditions_tolerate_wrong_types() {
        let single = Condition::CountEq { count: 1 };
        assert!(single.evaluate(Some(&json!("england"))));
        assert!(single.evaluate(Some(&json!(["wales"]))));
        assert!(!single.evaluate(Some(&json!({ "nested": true }))));
        assert!(!single.evaluate(None));
    }

    #[test]
    fn count_conditions_ignore_repeated_selections() {
        let repeated = json!(["england", "england"]);
        assert!(Condition::CountEq { count: 1 }.evaluate(Some(&repeated)));
        assert!(!Condition::CountAtLeast { count: 2 }.evaluate(Some(&repeated)));
        assert!(Condition::CountAtLeast { count: 2 }.evaluate(Some(&json!(["england", "wales"]))));
    }

    #[test]
    fn base_matches_every_failure() {
        assert!(ErrorType::Base.matches(ErrorType::NumberMax));
        assert!(ErrorType::NumberMax.matches(ErrorType::NumberMax));
        assert!(!ErrorType::NumberMin.matches(ErrorType::NumberMax));
    }
}
