use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data;
use crate::field::Field;
use crate::section::Section;
use crate::step::Step;
use crate::validate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ProgressStatus {
    NotStarted,
    Incomplete,
    Complete,
}

impl ProgressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStatus::NotStarted => "notStarted",
            ProgressStatus::Incomplete => "incomplete",
            ProgressStatus::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StepProgress {
    pub title: String,
    pub status: ProgressStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SectionProgress {
    pub slug: String,
    pub label: String,
    pub status: ProgressStatus,
    pub steps: Vec<StepProgress>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormProgress {
    pub is_complete: bool,
    pub is_pristine: bool,
    pub completed_count: usize,
    pub sections: Vec<SectionProgress>,
}

impl FormProgress {
    pub fn section(&self, slug: &str) -> Option<&SectionProgress> {
        self.sections.iter().find(|section| section.slug == slug)
    }

    pub fn status_of(&self, slug: &str) -> Option<ProgressStatus> {
        self.section(slug).map(|section| section.status)
    }
}

/// Status of a group of visible fields: untouched, passing, or neither.
pub fn status_of(fields: &[&Field], data: &Value, today: NaiveDate) -> ProgressStatus {
    let started = fields
        .iter()
        .any(|field| data::has_value(data, &field.name));
    if !started {
        return ProgressStatus::NotStarted;
    }
    if validate(fields.iter().copied(), data, today).is_valid {
        ProgressStatus::Complete
    } else {
        ProgressStatus::Incomplete
    }
}

fn step_progress(step: &Step, data: &Value, today: NaiveDate) -> StepProgress {
    StepProgress {
        title: step.title.clone(),
        status: status_of(&step.active_fields().collect::<Vec<_>>(), data, today),
    }
}

pub fn section_progress(section: &Section, data: &Value, today: NaiveDate) -> SectionProgress {
    SectionProgress {
        slug: section.slug.clone(),
        label: section.title.clone(),
        status: status_of(&section.active_fields().collect::<Vec<_>>(), data, today),
        steps: section
            .steps
            .iter()
            .map(|step| step_progress(step, data, today))
            .collect(),
    }
}

/// Re-validates each section against only its own visible fields.
pub fn form_progress(sections: &[Section], data: &Value, today: NaiveDate) -> FormProgress {
    let sections = sections
        .iter()
        .map(|section| section_progress(section, data, today))
        .collect::<Vec<_>>();
    let completed_count = sections
        .iter()
        .filter(|section| section.status == ProgressStatus::Complete)
        .count();

    FormProgress {
        is_complete: !sections.is_empty() && completed_count == sections.len(),
        is_pristine: sections
            .iter()
            .all(|section| section.status == ProgressStatus::NotStarted),
        completed_count,
        sections,
    }
}
