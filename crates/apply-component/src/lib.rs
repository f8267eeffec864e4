use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use thiserror::Error;

use apply_spec::{
    Application, ApplicationSummary, DefinitionError, EngineSettings, FormContext, FormModel,
    FormProgress, FormSummary, Locale, Metadata, Section, SubmittedApplication, ValidationResult,
    enrich_pending, enrich_submitted, find_form, merge_step_data,
};

#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("failed to parse {0}: {1}")]
    Parse(&'static str, #[source] serde_json::Error),
    #[error("form '{0}' is not available")]
    FormUnavailable(String),
    #[error("json encode error: {0}")]
    JsonEncode(#[source] serde_json::Error),
    #[error("form definition error: {0}")]
    Definition(#[from] DefinitionError),
}

/// Input shared by every form operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormRequest {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub metadata: Metadata,
    /// Overrides `settings.showAllFields` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_all_fields: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<EngineSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichRequest {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub settings: EngineSettings,
}

/// Layout of a form for one data snapshot.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormDescription {
    pub id: String,
    pub title: String,
    pub schema_version: String,
    pub sections: Vec<Section>,
    pub progress: FormProgress,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub is_valid: bool,
    pub validation: ValidationResult,
    pub submission: Value,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveStepResponse {
    pub application_data: Value,
    pub validation: ValidationResult,
    pub progress: FormProgress,
}

fn parse<T>(label: &'static str, json: &str) -> Result<T, ComponentError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    if json.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(json).map_err(|error| ComponentError::Parse(label, error))
}

fn parse_value(label: &'static str, json: &str) -> Result<Value, ComponentError> {
    if json.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(json).map_err(|error| ComponentError::Parse(label, error))
}

fn build_model(form_id: &str, request: FormRequest) -> Result<FormModel<'static>, ComponentError> {
    let definition =
        find_form(form_id).map_err(|_| ComponentError::FormUnavailable(form_id.to_string()))?;

    let mut ctx = FormContext::new(request.locale, request.data).with_metadata(request.metadata);
    if let Some(settings) = request.settings {
        ctx = ctx.with_settings(settings);
    }
    if let Some(show_all) = request.show_all_fields {
        ctx = ctx.show_all_fields(show_all);
    }
    Ok(FormModel::build(definition, ctx)?)
}

fn model_for(form_id: &str, request_json: &str) -> Result<FormModel<'static>, ComponentError> {
    build_model(form_id, parse("request", request_json)?)
}

fn encode<T: Serialize>(value: T) -> Result<Value, ComponentError> {
    serde_json::to_value(value).map_err(ComponentError::JsonEncode)
}

fn respond(result: Result<Value, ComponentError>) -> String {
    match result {
        Ok(value) => serde_json::to_string(&value).unwrap_or_else(|error| {
            json!({"error": format!("json encode: {}", error)}).to_string()
        }),
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            json!({ "error": err.to_string() }).to_string()
        }
    }
}

/// Sections, steps and fields visible for the request data.
pub fn describe(form_id: &str, request_json: &str) -> String {
    respond(model_for(form_id, request_json).and_then(|model| {
        encode(FormDescription {
            id: model.id().to_string(),
            title: model.title,
            schema_version: model.schema_version,
            sections: model.sections,
            progress: model.progress,
        })
    }))
}

pub fn validate(form_id: &str, request_json: &str) -> String {
    respond(model_for(form_id, request_json).and_then(|model| encode(model.validation)))
}

pub fn progress(form_id: &str, request_json: &str) -> String {
    respond(model_for(form_id, request_json).and_then(|model| encode(model.progress)))
}

pub fn for_submission(form_id: &str, request_json: &str) -> String {
    respond(model_for(form_id, request_json).and_then(|model| {
        let submission = model.for_submission();
        encode(SubmissionResponse {
            is_valid: model.validation.is_valid,
            validation: model.validation,
            submission,
        })
    }))
}

pub fn summary(form_id: &str, request_json: &str) -> String {
    respond(model_for(form_id, request_json).and_then(|model| encode(model.summary())))
}

/// Merges a step's answers into the stored data (last write wins) and
/// reports validation for the keys the step carried.
pub fn save_step(form_id: &str, request_json: &str, step_json: &str) -> String {
    respond((|| -> Result<Value, ComponentError> {
        let mut request: FormRequest = parse("request", request_json)?;
        let step = parse_value("step", step_json)?;
        request.data = merge_step_data(&request.data, &step);
        let application_data = request.data.clone();
        let model = build_model(form_id, request)?;

        let touched = step
            .as_object()
            .map(|map| map.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        let fields = model
            .all_fields
            .iter()
            .filter(|field| touched.contains(&field.name));
        let mut validation =
            apply_spec::validate(fields, &application_data, model.context().today);
        // Only the step's fields were checked; unknown keys are judged against the whole form.
        validation.unknown_fields = model.validation.unknown_fields.clone();
        tracing::debug!(
            form = form_id,
            keys = touched.len(),
            valid = validation.is_valid,
            "saved step"
        );

        encode(SaveStepResponse {
            application_data,
            validation,
            progress: model.progress,
        })
    })())
}

/// Listing view of a stored application. Submitted applications are
/// recognised by their `submittedAt` timestamp.
pub fn enrich(application_json: &str, options_json: &str) -> String {
    respond((|| -> Result<Value, ComponentError> {
        let options: EnrichRequest = parse("options", options_json)?;
        let application = parse_value("application", application_json)?;

        let summary: ApplicationSummary = if application.get("submittedAt").is_some() {
            let submitted: SubmittedApplication = serde_json::from_value(application)
                .map_err(|error| ComponentError::Parse("application", error))?;
            enrich_submitted(&submitted, options.locale, &options.settings)?
        } else {
            let pending: Application = serde_json::from_value(application)
                .map_err(|error| ComponentError::Parse("application", error))?;
            enrich_pending(&pending, options.locale, &options.settings)?
        };
        encode(summary)
    })())
}

/// JSON schemas of the request and response payloads.
pub fn payload_schema() -> String {
    respond(Ok(json!({
        "request": schema_for!(FormRequest),
        "enrichRequest": schema_for!(EnrichRequest),
        "description": schema_for!(FormDescription),
        "validation": schema_for!(ValidationResult),
        "progress": schema_for!(FormProgress),
        "summary": schema_for!(FormSummary),
        "submission": schema_for!(SubmissionResponse),
        "saveStep": schema_for!(SaveStepResponse),
        "application": schema_for!(Application),
        "applicationSummary": schema_for!(ApplicationSummary),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(data: Value) -> String {
        json!({
            "locale": "en",
            "data": data,
            "settings": { "referenceDate": "2020-06-15" },
        })
        .to_string()
    }

    fn parsed(response: String) -> Value {
        serde_json::from_str(&response).expect("json")
    }

    #[test]
    fn describe_lists_visible_sections() {
        let value = parsed(describe(
            "standard-proposal",
            &request(json!({ "projectCountries": ["wales"] })),
        ));
        assert_eq!(value["id"], "standard-proposal");
        assert_eq!(value["schemaVersion"], "v1.2");
        let slugs = value["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|section| section["slug"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            slugs,
            vec!["your-project", "organisation", "senior-contact", "main-contact"]
        );
    }

    #[test]
    fn unknown_form_answers_with_error() {
        let value = parsed(validate("standard-enquiry", "{}"));
        assert_eq!(value["error"], "form 'standard-enquiry' is not available");
    }

    #[test]
    fn malformed_request_answers_with_error() {
        let value = parsed(validate("get-advice", "{not json"));
        assert!(
            value["error"]
                .as_str()
                .unwrap()
                .starts_with("failed to parse request")
        );
    }

    #[test]
    fn validate_reports_localised_messages() {
        let body = json!({
            "locale": "cy",
            "data": { "projectCountries": ["wales"] },
        });
        let value = parsed(validate("get-advice", &body.to_string()));
        assert_eq!(value["isValid"], false);
        let messages = value["messages"].as_array().unwrap();
        assert!(messages.iter().any(|message| {
            message["param"] == "contactLanguagePreference" && message["msg"] == "Dewiswch iaith"
        }));
    }

    #[test]
    fn empty_request_uses_defaults() {
        let value = parsed(progress("get-advice", ""));
        assert_eq!(value["isPristine"], true);
        assert_eq!(value["isComplete"], false);
    }

    #[test]
    fn submission_applies_programme_prefix() {
        let body = json!({
            "data": { "projectName": "Repair cafe" },
            "metadata": { "programme": { "title": "Awards for All" } },
        });
        let value = parsed(for_submission("standard-proposal", &body.to_string()));
        assert_eq!(value["isValid"], false);
        assert_eq!(value["submission"]["projectName"], "Awards for All: Repair cafe");
    }

    #[test]
    fn show_all_fields_flag_overrides_settings() {
        let body = json!({
            "data": {},
            "showAllFields": true,
            "settings": { "showAllFields": false },
        });
        let value = parsed(describe("get-advice", &body.to_string()));
        let fields = value["sections"][0]["steps"][0]["fieldsets"][0]["fields"]
            .as_array()
            .unwrap();
        let regions = fields
            .iter()
            .find(|field| field["name"] == "projectRegions")
            .unwrap();
        assert_eq!(regions["isConditional"], true);
    }

    #[test]
    fn save_step_merges_and_validates_step_keys() {
        let stored = request(json!({
            "projectName": "Old name",
            "projectCountries": ["england"],
        }));
        let value = parsed(save_step(
            "standard-proposal",
            &stored,
            &json!({ "projectName": "New name", "projectCosts": "5,000" }).to_string(),
        ));
        assert_eq!(value["applicationData"]["projectName"], "New name");
        assert_eq!(value["applicationData"]["projectCountries"], json!(["england"]));
        let errors = value["validation"]["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["field"], "projectCosts");
        assert_eq!(errors[0]["type"], "number.min");
        assert_eq!(value["progress"]["sections"][0]["status"], "incomplete");
    }

    #[test]
    fn save_step_reports_only_undefined_keys_as_unknown() {
        let stored = request(json!({
            "projectName": "Repair cafe",
            "projectCountries": ["england"],
        }));
        let step = json!({ "projectCosts": "20,000" }).to_string();
        let value = parsed(save_step("standard-proposal", &stored, &step));
        assert!(value["validation"].get("unknownFields").is_none());

        let stale = request(json!({
            "projectName": "Repair cafe",
            "legacyReference": "ABC-123",
        }));
        let value = parsed(save_step("standard-proposal", &stale, &step));
        assert_eq!(value["validation"]["unknownFields"], json!(["legacyReference"]));
    }

    #[test]
    fn enrich_handles_pending_and_submitted() {
        let options = json!({
            "locale": "en",
            "settings": {
                "referenceDate": "2020-06-15",
                "englandCutoverDate": "2020-07-01",
            },
        })
        .to_string();

        let pending = json!({
            "id": "app-1",
            "formId": "standard-proposal",
            "applicationData": { "projectCountries": ["england"] },
            "createdAt": "2020-01-10T09:30:00Z",
            "updatedAt": "2020-01-10T09:30:00Z",
            "expiresAt": "2020-09-30T00:00:00Z",
        });
        let value = parsed(enrich(&pending.to_string(), &options));
        assert_eq!(value["expiresAt"], "2020-07-01T00:00:00Z");
        assert_eq!(value["daysRemaining"], 16);
        assert_eq!(value["summary"]["title"], "Untitled proposal");

        let submitted = json!({
            "id": "app-2",
            "formId": "get-advice",
            "applicationData": { "projectName": "Repair cafe" },
            "submittedAt": "2020-05-01T10:00:00Z",
        });
        let value = parsed(enrich(&submitted.to_string(), &options));
        assert_eq!(value["formTitle"], "Get advice on your idea");
        assert_eq!(value["summary"]["title"], "Repair cafe");
        assert!(value.get("progress").is_none());
    }

    #[test]
    fn payload_schema_covers_requests() {
        let value = parsed(payload_schema());
        assert!(value["request"]["properties"]["showAllFields"].is_object());
        assert!(value["validation"]["properties"]["isValid"].is_object());
    }
}
