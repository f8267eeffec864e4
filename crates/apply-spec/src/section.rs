use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::Field;
use crate::rule::Condition;
use crate::step::Step;

/// Decides from the submitted data whether a whole section is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SectionGate {
    pub field: String,
    pub condition: Condition,
}

impl SectionGate {
    pub fn new(field: &str, condition: Condition) -> Self {
        Self {
            field: field.to_string(),
            condition,
        }
    }

    pub fn allows(&self, data: &Value) -> bool {
        self.condition.evaluate(data.get(&self.field))
    }
}

/// Ordered steps shown as one entry of the application's progress list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Section {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<SectionGate>,
}

impl Section {
    pub fn new(slug: &str, title: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.into(),
            summary: None,
            steps,
            gate: None,
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn gated_by(mut self, gate: SectionGate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn is_visible(&self, data: &Value) -> bool {
        self.gate.as_ref().is_none_or(|gate| gate.allows(data))
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.steps.iter().flat_map(Step::fields)
    }

    pub fn active_fields(&self) -> impl Iterator<Item = &Field> {
        self.steps.iter().flat_map(Step::active_fields)
    }
}
