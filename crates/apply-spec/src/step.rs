use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::Field;
use crate::visibility::{VisibilityMode, conditional_fields, visible_under};

/// A group of fields on one page, with optional surrounding copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Fieldset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    pub fields: Vec<Field>,
}

impl Fieldset {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            legend: None,
            introduction: None,
            footer: None,
            fields,
        }
    }

    /// Keeps the candidates whose schema survives `data`; the rest are
    /// dropped or flagged depending on `mode`.
    pub fn gated(candidates: Vec<Field>, data: &Value, mode: VisibilityMode) -> Self {
        let visible = visible_under(&candidates, data)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let visible = visible.iter().map(String::as_str).collect::<Vec<_>>();
        Self::new(conditional_fields(candidates, &visible, mode))
    }

    pub fn legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = Some(introduction.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// One page of the application wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub title: String,
    pub fieldsets: Vec<Fieldset>,
    /// Rendering hint: the page's form opts out of browser-side validation.
    #[serde(default)]
    pub no_validate: bool,
}

impl Step {
    pub fn new(title: impl Into<String>, fieldsets: Vec<Fieldset>) -> Self {
        Self {
            title: title.into(),
            fieldsets,
            no_validate: false,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fieldsets.iter().flat_map(|fieldset| fieldset.fields.iter())
    }

    /// Fields that take part in validation: conditional ones are excluded.
    pub fn active_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields().filter(|field| !field.is_conditional)
    }

    pub fn is_empty(&self) -> bool {
        self.active_fields().next().is_none()
    }
}
