use std::collections::BTreeSet;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::FieldCatalog;
use crate::error::DefinitionError;
use crate::field::Field;
use crate::locale::Locale;
use crate::progress::{FormProgress, form_progress};
use crate::section::Section;
use crate::settings::EngineSettings;
use crate::step::Step;
use crate::validate::{ValidationResult, validate};
use crate::visibility::VisibilityMode;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Programme {
    pub title: String,
}

/// Context the host attaches to an application, such as the funding
/// programme it was started from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programme: Option<Programme>,
}

/// Immutable input for building a form model.
#[derive(Debug, Clone, PartialEq)]
pub struct FormContext {
    pub locale: Locale,
    pub data: Value,
    pub metadata: Metadata,
    pub mode: VisibilityMode,
    pub settings: EngineSettings,
    pub today: NaiveDate,
}

impl FormContext {
    /// Non-object `data` is treated as an empty submission.
    pub fn new(locale: Locale, data: Value) -> Self {
        let settings = EngineSettings::default();
        Self {
            locale,
            data: if data.is_object() {
                data
            } else {
                Value::Object(Map::new())
            },
            metadata: Metadata::default(),
            mode: VisibilityMode::VisibleOnly,
            today: settings.today(),
            settings,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn show_all_fields(mut self, show_all: bool) -> Self {
        self.mode = VisibilityMode::from_show_all(show_all);
        self
    }

    /// Applies host settings, including the reference date and the default
    /// visibility mode.
    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.today = settings.today();
        if settings.show_all_fields {
            self.mode = VisibilityMode::ShowAll;
        }
        self.settings = settings;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryItem {
    pub label: String,
    pub value: String,
}

/// Overview shown in application listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormSummary {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub overview: Vec<SummaryItem>,
}

/// A concrete application flow.
pub trait FormDefinition {
    fn id(&self) -> &'static str;

    fn title(&self, locale: Locale) -> String;

    fn schema_version(&self) -> &'static str;

    /// Builds every field for the snapshot in `ctx`.
    fn fields_for(&self, ctx: &FormContext) -> Result<FieldCatalog, DefinitionError>;

    /// Lays the catalog out as sections and steps. Sections may carry a gate;
    /// the model drops those whose gate is closed.
    fn sections(
        &self,
        ctx: &FormContext,
        catalog: &FieldCatalog,
    ) -> Result<Vec<Section>, DefinitionError>;

    fn summary(&self, ctx: &FormContext, catalog: &FieldCatalog) -> FormSummary;

    /// Flow-specific finishing of the validated value before it is stored.
    fn finalise_submission(&self, _ctx: &FormContext, value: Map<String, Value>) -> Map<String, Value> {
        value
    }
}

/// One data snapshot of an application flow: its fields, layout,
/// validation and progress.
pub struct FormModel<'d> {
    definition: &'d dyn FormDefinition,
    ctx: FormContext,
    pub title: String,
    pub schema_version: String,
    pub all_fields: FieldCatalog,
    pub sections: Vec<Section>,
    pub validation: ValidationResult,
    pub progress: FormProgress,
}

impl<'d> FormModel<'d> {
    pub fn build(definition: &'d dyn FormDefinition, ctx: FormContext) -> Result<Self, DefinitionError> {
        let all_fields = definition.fields_for(&ctx)?;
        let sections = definition
            .sections(&ctx, &all_fields)?
            .into_iter()
            .filter(|section| section.is_visible(&ctx.data))
            .map(|mut section| {
                if ctx.mode == VisibilityMode::VisibleOnly {
                    section.steps.retain(|step| !step.is_empty());
                }
                section
            })
            .collect::<Vec<_>>();

        let mut slugs = BTreeSet::new();
        for section in &sections {
            if !slugs.insert(section.slug.as_str()) {
                return Err(DefinitionError::DuplicateSection(section.slug.clone()));
            }
        }

        let validation = validate(all_fields.iter(), &ctx.data, ctx.today);
        let progress = form_progress(&sections, &ctx.data, ctx.today);
        tracing::debug!(
            form = definition.id(),
            fields = all_fields.len(),
            sections = sections.len(),
            errors = validation.errors.len(),
            complete = progress.is_complete,
            "built form model"
        );

        Ok(Self {
            definition,
            title: definition.title(ctx.locale),
            schema_version: definition.schema_version().to_string(),
            all_fields,
            sections,
            validation,
            progress,
            ctx,
        })
    }

    pub fn id(&self) -> &'static str {
        self.definition.id()
    }

    pub fn locale(&self) -> Locale {
        self.ctx.locale
    }

    pub fn data(&self) -> &Value {
        &self.ctx.data
    }

    pub fn context(&self) -> &FormContext {
        &self.ctx
    }

    /// Validates `candidate` against this model's fields.
    pub fn validate(&self, candidate: &Value) -> ValidationResult {
        validate(self.all_fields.iter(), candidate, self.ctx.today)
    }

    pub fn field(&self, name: &str) -> Result<&Field, DefinitionError> {
        self.all_fields.get(name)
    }

    pub fn section(&self, slug: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.slug == slug)
    }

    pub fn step(&self, slug: &str, index: usize) -> Option<&Step> {
        self.section(slug).and_then(|section| section.steps.get(index))
    }

    pub fn summary(&self) -> FormSummary {
        self.definition.summary(&self.ctx, &self.all_fields)
    }

    /// Finalised copy of the validated data for the persistence layer.
    ///
    /// Prefixes the project name with the programme title when the
    /// application belongs to one, then applies the flow's own finishing.
    pub fn for_submission(&self) -> Value {
        let mut value = self.validation.value_map();

        if let Some(programme) = &self.ctx.metadata.programme
            && let Some(Value::String(name)) = value.get("projectName")
        {
            let prefixed = format!("{}: {}", programme.title, name);
            value.insert("projectName".into(), Value::String(prefixed));
        }

        Value::Object(self.definition.finalise_submission(&self.ctx, value))
    }
}
