use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{Value, json};

use apply_spec::{
    Application, EngineSettings, FormId, Locale, ProgressStatus, SubmittedApplication,
    effective_expiry, enrich_pending, enrich_submitted, merge_step_data,
};

fn application(form_id: FormId, data: Value) -> Application {
    Application {
        id: "app-1".into(),
        form_id,
        application_data: data,
        metadata: Default::default(),
        created_at: Utc.with_ymd_and_hms(2020, 1, 10, 9, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2020, 2, 1, 12, 0, 0).unwrap(),
        expires_at: Utc.with_ymd_and_hms(2020, 9, 30, 0, 0, 0).unwrap(),
        is_expired: false,
    }
}

fn settings() -> EngineSettings {
    EngineSettings {
        reference_date: NaiveDate::from_ymd_opt(2020, 6, 15),
        england_cutover_date: NaiveDate::from_ymd_opt(2020, 7, 1),
        ..Default::default()
    }
}

#[test]
fn step_data_overwrites_stored_keys() {
    let stored = json!({ "projectName": "Old", "projectCountries": ["wales"] });
    let step = json!({ "projectName": "New", "projectCosts": "20,000" });
    assert_eq!(
        merge_step_data(&stored, &step),
        json!({
            "projectName": "New",
            "projectCountries": ["wales"],
            "projectCosts": "20,000",
        })
    );
    assert_eq!(merge_step_data(&json!(null), &step), step);
    assert_eq!(merge_step_data(&stored, &json!("oops")), stored);
}

#[test]
fn saving_a_step_bumps_updated_at() {
    let mut app = application(FormId::GetAdvice, json!({}));
    let now = Utc.with_ymd_and_hms(2020, 6, 15, 8, 0, 0).unwrap();
    app.save_step(&json!({ "projectCountries": ["scotland"] }), now);
    assert_eq!(app.updated_at, now);
    assert_eq!(app.application_data["projectCountries"], json!(["scotland"]));
}

#[test]
fn england_proposals_expire_at_the_cutover() {
    let england = application(
        FormId::StandardProposal,
        json!({ "projectCountries": ["england"] }),
    );
    let cutover = Utc.with_ymd_and_hms(2020, 7, 1, 0, 0, 0).unwrap();
    assert_eq!(effective_expiry(&england, &settings()), cutover);

    let wales = application(
        FormId::StandardProposal,
        json!({ "projectCountries": ["wales"] }),
    );
    assert_eq!(effective_expiry(&wales, &settings()), wales.expires_at);

    let advice = application(FormId::GetAdvice, json!({ "projectCountries": ["england"] }));
    assert_eq!(effective_expiry(&advice, &settings()), advice.expires_at);

    let without_cutover = EngineSettings {
        england_cutover_date: None,
        ..settings()
    };
    assert_eq!(effective_expiry(&england, &without_cutover), england.expires_at);
}

#[test]
fn pending_summary_reports_expiry_and_progress() {
    let app = application(
        FormId::StandardProposal,
        json!({ "projectName": "Community hub", "projectCountries": ["england"] }),
    );
    let summary = enrich_pending(&app, Locale::En, &settings()).unwrap();

    assert_eq!(summary.form_title, "Your funding proposal");
    assert_eq!(summary.summary.title, "Community hub");
    assert_eq!(summary.days_remaining, Some(16));
    assert!(!summary.is_expired);
    let progress = summary.progress.unwrap();
    assert_eq!(
        progress.status_of("your-project"),
        Some(ProgressStatus::Incomplete)
    );

    let late = EngineSettings {
        reference_date: NaiveDate::from_ymd_opt(2020, 7, 2),
        ..settings()
    };
    let expired = enrich_pending(&app, Locale::En, &late).unwrap();
    assert!(expired.is_expired);
    assert_eq!(expired.days_remaining, Some(0));
}

#[test]
fn stored_expired_flag_is_trusted() {
    let mut app = application(FormId::GetAdvice, json!({}));
    app.is_expired = true;
    let summary = enrich_pending(&app, Locale::Cy, &settings()).unwrap();
    assert!(summary.is_expired);
    assert_eq!(summary.summary.title, "Syniad heb deitl");
}

#[test]
fn submitted_summary_uses_submitted_values() {
    let submitted = SubmittedApplication {
        id: "app-2".into(),
        form_id: FormId::GetAdvice,
        application_data: json!({
            "projectCountries": ["scotland"],
            "projectCosts": 5000,
            "projectDurationYears": 4,
        }),
        submitted_at: Utc.with_ymd_and_hms(2020, 5, 1, 10, 0, 0).unwrap(),
    };
    let summary = enrich_submitted(&submitted, Locale::En, &settings()).unwrap();
    assert_eq!(summary.form_title, "Get advice on your idea");
    assert_eq!(summary.summary.country.as_deref(), Some("Scotland"));
    assert_eq!(summary.summary.overview[0].value, "£5,000");
    assert_eq!(summary.summary.overview[1].value, "4 years");
    assert!(summary.progress.is_none());
    assert_eq!(summary.submitted_at, Some(submitted.submitted_at));
}

#[test]
fn applications_deserialise_from_camel_case() {
    let app: Application = serde_json::from_value(json!({
        "id": "app-3",
        "formId": "standard-proposal",
        "createdAt": "2020-01-10T09:30:00Z",
        "updatedAt": "2020-01-10T09:30:00Z",
        "expiresAt": "2020-09-30T00:00:00Z",
    }))
    .unwrap();
    assert_eq!(app.form_id, FormId::StandardProposal);
    assert_eq!(app.application_data, json!({}));
    assert!(!app.is_expired);
}
