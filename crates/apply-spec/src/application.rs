use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::country::Country;
use crate::data;
use crate::error::DefinitionError;
use crate::form::{FormContext, FormModel, FormSummary, Metadata};
use crate::forms::{FormId, form_definition};
use crate::locale::Locale;
use crate::progress::FormProgress;
use crate::settings::EngineSettings;

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// An in-progress application as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub form_id: FormId,
    #[serde(default = "empty_object")]
    pub application_data: Value,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub is_expired: bool,
}

impl Application {
    /// Merges one step's answers into the stored data and bumps `updated_at`.
    pub fn save_step(&mut self, step_data: &Value, now: DateTime<Utc>) {
        self.application_data = merge_step_data(&self.application_data, step_data);
        self.updated_at = now;
    }
}

/// A finalised submission; `application_data` is the `for_submission` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
    pub id: String,
    pub form_id: FormId,
    #[serde(default = "empty_object")]
    pub application_data: Value,
    pub submitted_at: DateTime<Utc>,
}

/// Listing view of a pending or submitted application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub id: String,
    pub form_id: FormId,
    pub form_title: String,
    pub summary: FormSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<FormProgress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_expired: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Shallow merge of a step's answers over stored data; the step wins on
/// every key it carries. Non-object inputs count as empty.
pub fn merge_step_data(stored: &Value, step: &Value) -> Value {
    let mut merged = stored.as_object().cloned().unwrap_or_default();
    if let Some(step) = step.as_object() {
        for (key, value) in step {
            merged.insert(key.clone(), value.clone());
        }
    }
    Value::Object(merged)
}

/// Expiry after applying the England cutover: England-only standard
/// proposals created before the cutover expire on it at the latest.
pub fn effective_expiry(application: &Application, settings: &EngineSettings) -> DateTime<Utc> {
    let Some(cutover) = settings.england_cutover_date else {
        return application.expires_at;
    };
    let is_england_proposal = application.form_id == FormId::StandardProposal
        && data::single_country(&application.application_data) == Some(Country::England);

    if is_england_proposal && application.created_at.date_naive() < cutover {
        application.expires_at.min(start_of(cutover))
    } else {
        application.expires_at
    }
}

fn start_of(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Builds the listing view for a pending application from its stored data.
pub fn enrich_pending(
    application: &Application,
    locale: Locale,
    settings: &EngineSettings,
) -> Result<ApplicationSummary, DefinitionError> {
    let ctx = FormContext::new(locale, application.application_data.clone())
        .with_metadata(application.metadata.clone())
        .with_settings(settings.clone());
    let today = ctx.today;
    let model = FormModel::build(form_definition(application.form_id), ctx)?;

    let expires_at = effective_expiry(application, settings);
    let days_remaining = (expires_at.date_naive() - today).num_days().max(0);
    let is_expired = application.is_expired || expires_at.date_naive() <= today;
    tracing::debug!(
        application = %application.id,
        form = %application.form_id,
        %expires_at,
        is_expired,
        "enriched pending application"
    );

    Ok(ApplicationSummary {
        id: application.id.clone(),
        form_id: application.form_id,
        form_title: model.title.clone(),
        summary: model.summary(),
        progress: Some(model.progress),
        expires_at: Some(expires_at),
        is_expired,
        days_remaining: Some(days_remaining),
        submitted_at: None,
    })
}

pub fn enrich_submitted(
    application: &SubmittedApplication,
    locale: Locale,
    settings: &EngineSettings,
) -> Result<ApplicationSummary, DefinitionError> {
    let ctx = FormContext::new(locale, application.application_data.clone())
        .with_settings(settings.clone());
    let definition = form_definition(application.form_id);
    let catalog = definition.fields_for(&ctx)?;

    Ok(ApplicationSummary {
        id: application.id.clone(),
        form_id: application.form_id,
        form_title: definition.title(locale),
        summary: definition.summary(&ctx, &catalog),
        progress: None,
        expires_at: None,
        is_expired: false,
        days_remaining: None,
        submitted_at: Some(application.submitted_at),
    })
}
