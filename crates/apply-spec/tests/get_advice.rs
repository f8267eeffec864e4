use chrono::NaiveDate;
use serde_json::{Value, json};

use apply_spec::{
    EngineSettings, FormContext, FormDefinition, FormId, FormModel, Locale, form_definition,
};

const IDEA: &str = "We want to run a weekly repair cafe in the church hall where volunteers fix \
    bikes, clothes and small electricals for free. Neighbours will learn to mend things \
    themselves, waste less and meet people they would not otherwise talk to. The hall is \
    free on Saturday mornings and local businesses have offered tools and spare parts for us.";

fn advice() -> Value {
    json!({
        "projectCountries": ["england"],
        "projectRegions": ["midlands"],
        "projectLocation": "derbyshire",
        "projectCosts": 500,
        "projectDurationYears": 2,
        "yourIdeaProject": IDEA,
        "yourIdeaCommunity": IDEA,
        "yourIdeaActivities": IDEA,
        "organisationLegalName": "Derby Repair Cafe",
        "organisationType": "unregistered-vco",
        "contactName": { "firstName": "Sam", "lastName": "Jones" },
        "contactEmail": "sam@example.org",
    })
}

fn build(data: Value) -> FormModel<'static> {
    let settings = EngineSettings {
        reference_date: NaiveDate::from_ymd_opt(2020, 6, 15),
        ..Default::default()
    };
    let ctx = FormContext::new(Locale::En, data).with_settings(settings);
    FormModel::build(form_definition(FormId::GetAdvice), ctx).unwrap()
}

#[test]
fn small_requests_are_accepted() {
    let model = build(advice());
    assert!(model.validation.is_valid, "{:?}", model.validation.messages);
    assert_eq!(model.validation.value["projectRegions"], json!(["midlands"]));
    assert_eq!(model.progress.completed_count, 3);
}

#[test]
fn regions_are_only_asked_for_england() {
    let mut data = advice();
    data["projectCountries"] = json!(["scotland"]);
    data["projectLocation"] = json!("glasgow");
    data["projectDurationYears"] = json!(3);
    let model = build(data);
    assert!(model.validation.value.get("projectRegions").is_none());
    assert!(model.validation.is_valid, "{:?}", model.validation.messages);
}

#[test]
fn duplicated_organisation_type_is_flagged_not_fixed() {
    let ctx = FormContext::new(Locale::En, json!({}));
    let catalog = form_definition(FormId::GetAdvice).fields_for(&ctx).unwrap();
    assert_eq!(
        catalog.duplicate_option_values(),
        vec![(
            "organisationType".to_string(),
            vec!["unregistered-vco".to_string()]
        )]
    );
    let field = catalog.get("organisationType").unwrap();
    assert_eq!(
        field
            .all_options()
            .filter(|option| option.value == "unregistered-vco")
            .count(),
        2
    );
}

#[test]
fn single_contact_has_no_senior_comparison() {
    let model = build(advice());
    assert!(model.field("seniorContactName").is_err());
    assert!(model.section("your-details").is_some());
    assert!(!model.validation.has_error_for("contactPhone"));
}

#[test]
fn unknown_form_ids_are_rejected() {
    assert_eq!(
        "standard-enquiry".parse::<FormId>().unwrap_err(),
        apply_spec::DefinitionError::UnknownForm("standard-enquiry".into())
    );
    assert_eq!("get-advice".parse::<FormId>().unwrap(), FormId::GetAdvice);
}
