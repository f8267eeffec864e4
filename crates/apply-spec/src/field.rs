use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale::{Localise, Locale, Localised};
use crate::rule::{Check, ErrorType, Issue, Rule, Schema};

/// Input types a field can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Phone,
    Currency,
    Radio,
    Checkbox,
    Select,
    Address,
    Name,
    Date,
    Url,
    Percentage,
    DayMonth,
}

impl FieldType {
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Radio | FieldType::Checkbox | FieldType::Select)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

/// Named group of options, rendered as an `<optgroup>` or sub-heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<FieldOption>,
}

/// Maps a failure tag (and optionally a member key) to user-facing copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldMessage {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub message: String,
}

impl FieldMessage {
    fn applies_to(&self, issue: &Issue) -> bool {
        self.error_type.matches(issue.error_type)
            && (self.key.is_none() || self.key == issue.key)
    }
}

/// A localised, validated input definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optgroups: Vec<OptionGroup>,
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_words: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_words: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<FieldMessage>,
    pub schema: Schema,
    #[serde(default)]
    pub is_conditional: bool,
    fallback_message: String,
}

impl Field {
    pub fn builder(name: &str, kind: FieldType, locale: Locale) -> FieldBuilder {
        FieldBuilder::new(name, kind, locale)
    }

    /// Flat and grouped options, in display order.
    pub fn all_options(&self) -> impl Iterator<Item = &FieldOption> {
        self.options
            .iter()
            .chain(self.optgroups.iter().flat_map(|group| group.options.iter()))
    }

    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.all_options()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }

    /// Option values that appear more than once.
    pub fn duplicate_option_values(&self) -> Vec<String> {
        let mut seen: Vec<&str> = Vec::new();
        let mut duplicates = Vec::new();
        for option in self.all_options() {
            if seen.contains(&option.value.as_str()) {
                if !duplicates.contains(&option.value) {
                    duplicates.push(option.value.clone());
                }
            } else {
                seen.push(&option.value);
            }
        }
        duplicates
    }

    /// The rule in force for `data`, or `None` when the field is stripped.
    pub fn resolve(&self, data: &Value) -> Option<&Rule> {
        self.schema.resolve(data)
    }

    pub fn is_included(&self, data: &Value) -> bool {
        self.resolve(data).is_some()
    }

    /// First message whose tag (and key, when set) matches; messages are
    /// ordered specific-before-generic by their authors.
    pub fn message_for(&self, issue: &Issue) -> String {
        self.messages
            .iter()
            .find(|message| message.applies_to(issue))
            .map(|message| message.message.clone())
            .unwrap_or_else(|| self.fallback_message.clone())
    }
}

type SchemaOverride = Box<dyn FnOnce(Rule) -> Schema>;

/// Builds a [`Field`] in two phases: display data first, then the schema
/// inferred from it, optionally rewritten by an override.
pub struct FieldBuilder {
    name: String,
    kind: FieldType,
    locale: Locale,
    label: String,
    explanation: Option<String>,
    options: Vec<FieldOption>,
    optgroups: Vec<OptionGroup>,
    is_required: bool,
    max_length: Option<usize>,
    min_words: Option<usize>,
    max_words: Option<usize>,
    min: Option<i64>,
    max: Option<i64>,
    min_age: Option<u32>,
    messages: Vec<FieldMessage>,
    schema: Option<SchemaOverride>,
}

impl FieldBuilder {
    pub fn new(name: &str, kind: FieldType, locale: Locale) -> Self {
        Self {
            name: name.to_string(),
            kind,
            locale,
            label: String::new(),
            explanation: None,
            options: Vec::new(),
            optgroups: Vec::new(),
            is_required: true,
            max_length: None,
            min_words: None,
            max_words: None,
            min: None,
            max: None,
            min_age: None,
            messages: Vec::new(),
            schema: None,
        }
    }

    pub fn label(mut self, en: &str, cy: &str) -> Self {
        self.label = self.locale.pick(en, cy);
        self
    }

    pub fn explanation(mut self, en: &str, cy: &str) -> Self {
        self.explanation = Some(self.locale.pick(en, cy));
        self
    }

    pub fn options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn optgroups(mut self, optgroups: Vec<OptionGroup>) -> Self {
        self.optgroups = optgroups;
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    pub fn required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn words(mut self, min_words: usize, max_words: usize) -> Self {
        self.min_words = Some(min_words);
        self.max_words = Some(max_words);
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn min_age(mut self, min_age: u32) -> Self {
        self.min_age = Some(min_age);
        self
    }

    pub fn message(mut self, error_type: ErrorType, en: &str, cy: &str) -> Self {
        self.messages.push(FieldMessage {
            error_type,
            key: None,
            message: self.locale.pick(en, cy),
        });
        self
    }

    pub fn message_at(mut self, error_type: ErrorType, key: &str, en: &str, cy: &str) -> Self {
        self.messages.push(FieldMessage {
            error_type,
            key: Some(key.to_string()),
            message: self.locale.pick(en, cy),
        });
        self
    }

    /// Rewrites the inferred rule, e.g. to strip the field unless a gating
    /// answer is present.
    pub fn schema_with(mut self, rewrite: impl FnOnce(Rule) -> Schema + 'static) -> Self {
        self.schema = Some(Box::new(rewrite));
        self
    }

    fn allowed_values(&self) -> Vec<String> {
        let mut allowed: Vec<String> = Vec::new();
        let grouped = self.optgroups.iter().flat_map(|group| group.options.iter());
        for option in self.options.iter().chain(grouped) {
            if !allowed.contains(&option.value) {
                allowed.push(option.value.clone());
            }
        }
        allowed
    }

    fn inferred_rule(&self) -> Rule {
        let check = match self.kind {
            FieldType::Text => Check::Text {
                max_length: self.max_length,
                min_words: None,
                max_words: None,
            },
            FieldType::Textarea => Check::Text {
                max_length: self.max_length,
                min_words: self.min_words,
                max_words: self.max_words,
            },
            FieldType::Email => Check::Email,
            FieldType::Phone => Check::Phone,
            FieldType::Currency => Check::Currency {
                min: self.min,
                max: self.max,
            },
            FieldType::Radio | FieldType::Select => Check::Choice {
                allowed: self.allowed_values(),
                multiple: false,
            },
            FieldType::Checkbox => Check::Choice {
                allowed: self.allowed_values(),
                multiple: true,
            },
            FieldType::Address => Check::Address,
            FieldType::Name => Check::Name,
            FieldType::Date => Check::Date {
                min_age: self.min_age,
            },
            FieldType::Url => Check::Url {
                max_length: self.max_length,
            },
            FieldType::Percentage => Check::Integer {
                min: Some(self.min.unwrap_or(0)),
                max: Some(self.max.unwrap_or(100)),
            },
            FieldType::DayMonth => Check::DayMonth,
        };
        Rule::new(check).required(self.is_required)
    }

    pub fn build(mut self) -> Field {
        let rule = self.inferred_rule();
        let schema = match self.schema.take() {
            Some(rewrite) => rewrite(rule),
            None => Schema::Rule(rule),
        };
        let fallback_message = self.locale.localise(&Localised::new(
            "There is a problem with this answer",
            "Mae problem gyda'r ateb hwn",
        ));

        Field {
            name: self.name,
            kind: self.kind,
            label: self.label,
            explanation: self.explanation,
            options: self.options,
            optgroups: self.optgroups,
            is_required: self.is_required,
            max_length: self.max_length,
            min_words: self.min_words,
            max_words: self.max_words,
            messages: self.messages,
            schema,
            is_conditional: false,
            fallback_message,
        }
    }
}
