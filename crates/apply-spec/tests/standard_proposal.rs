use chrono::NaiveDate;
use serde_json::{Value, json};

use apply_spec::{
    EngineSettings, FormContext, FormDefinition, FormId, FormModel, Locale, Metadata,
    ProgressStatus, Programme, form_definition,
};

fn fixture() -> Value {
    serde_json::from_str(include_str!("fixtures/standard_proposal_england.json")).unwrap()
}

fn settings() -> EngineSettings {
    EngineSettings {
        reference_date: NaiveDate::from_ymd_opt(2020, 6, 15),
        ..Default::default()
    }
}

fn context(data: Value) -> FormContext {
    FormContext::new(Locale::En, data).with_settings(settings())
}

fn build(data: Value) -> FormModel<'static> {
    FormModel::build(form_definition(FormId::StandardProposal), context(data)).unwrap()
}

fn with(mut data: Value, changes: Value) -> Value {
    let (Some(target), Some(changes)) = (data.as_object_mut(), changes.as_object()) else {
        panic!("fixtures are objects");
    };
    for (key, value) in changes {
        if value.is_null() {
            target.remove(key);
        } else {
            target.insert(key.clone(), value.clone());
        }
    }
    data
}

#[test]
fn single_country_submission_is_valid() {
    let model = build(fixture());
    assert_eq!(model.validation.error(), None, "{:?}", model.validation.messages);
    assert!(model.validation.is_valid);
    assert!(model.validation.unknown_fields.is_empty());

    let value = &model.validation.value;
    assert_eq!(value["projectCosts"], json!(250000));
    assert_eq!(value["projectDurationYears"], json!(3));
    assert_eq!(value["organisationAddress"]["postcode"], json!("DE1 1AA"));
    assert!(value.get("contactLanguagePreference").is_none());
    assert!(value.get("contactCommunicationNeeds").is_none());
}

#[test]
fn fields_for_is_idempotent() {
    let definition = form_definition(FormId::StandardProposal);
    let ctx = context(fixture());
    let first = definition.fields_for(&ctx).unwrap();
    let second = definition.fields_for(&ctx).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.names().collect::<Vec<_>>(),
        second.names().collect::<Vec<_>>()
    );
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn stripped_children_ignore_garbage() {
    let data = with(
        fixture(),
        json!({
            "beneficiariesGroups": 17,
            "beneficiariesGroupsGender": { "not": "valid" },
            "beneficiariesGroupsReligion": ["not-a-religion"],
        }),
    );
    let model = build(data);
    assert!(model.validation.is_valid, "{:?}", model.validation.messages);
    for key in [
        "beneficiariesGroups",
        "beneficiariesGroupsGender",
        "beneficiariesGroupsReligion",
    ] {
        assert!(model.validation.value.get(key).is_none(), "{key} kept");
    }
}

#[test]
fn chained_beneficiary_groups_require_both_gates() {
    let data = with(
        fixture(),
        json!({
            "beneficiariesGroupsCheck": "yes",
            "beneficiariesGroups": ["gender", "religion"],
        }),
    );
    let model = build(data.clone());
    assert!(model.validation.has_error_for("beneficiariesGroupsGender"));
    assert!(model.validation.has_error_for("beneficiariesGroupsReligion"));
    assert!(!model.validation.has_error_for("beneficiariesGroupsAge"));
    assert!(!model.validation.has_error_for("beneficiariesGroupsReligionOther"));

    let answered = with(
        data,
        json!({
            "beneficiariesGroupsGender": ["female"],
            "beneficiariesGroupsReligion": "sikh",
        }),
    );
    let model = build(answered);
    assert!(model.validation.is_valid, "{:?}", model.validation.messages);
    assert_eq!(
        model.validation.value["beneficiariesGroupsReligion"],
        json!(["sikh"])
    );
}

#[test]
fn trading_name_must_differ_from_legal_name() {
    let data = with(
        fixture(),
        json!({
            "organisationLegalName": "Acme",
            "organisationTradingName": "Acme",
        }),
    );
    let model = build(data.clone());
    assert!(!model.validation.is_valid);
    assert_eq!(
        model.validation.messages_for("organisationTradingName"),
        vec!["Trading name must not be the same as legal name"]
    );

    let model = build(with(data, json!({ "organisationTradingName": "Acme Services" })));
    assert!(model.validation.is_valid, "{:?}", model.validation.messages);
}

#[test]
fn main_contact_must_differ_from_senior_contact() {
    let data = with(
        fixture(),
        json!({
            "contactName": { "firstName": "ada", "lastName": "LOVELACE" },
            "contactPhone": "(01332) 123-456",
        }),
    );
    let model = build(data);
    assert!(model.validation.has_error_for("contactName"));
    assert!(model.validation.has_error_for("contactPhone"));
    assert!(!model.validation.has_error_for("contactEmail"));
    assert_eq!(
        model.validation.messages_for("contactName"),
        vec!["Main contact name must be different from the senior contact's name"]
    );
}

#[test]
fn main_contact_address_and_email_must_differ_from_senior_contact() {
    let data = with(
        fixture(),
        json!({
            "contactAddress": {
                "line1": "2  SENIOR road",
                "townCity": "derby",
                "postcode": "DE22 2BB",
            },
            "contactEmail": "Ada@Example.org",
        }),
    );
    let model = build(data);
    assert!(!model.validation.is_valid);
    assert_eq!(
        model.validation.messages_for("contactAddress"),
        vec!["Address must be different from the other contact's address"]
    );
    assert_eq!(
        model.validation.messages_for("contactEmail"),
        vec!["Main contact email address must be different from the senior contact's email address"]
    );
    assert!(!model.validation.has_error_for("seniorContactAddress"));
    assert!(!model.validation.has_error_for("seniorContactEmail"));
}

#[test]
fn repeated_country_counts_once() {
    let data = with(fixture(), json!({ "projectCountries": ["england", "england"] }));
    let model = build(data);

    assert!(model.validation.is_valid, "{:?}", model.validation.messages);
    let value = &model.validation.value;
    assert_eq!(value["projectCountries"], json!(["england"]));
    assert_eq!(value["projectLocation"], json!("derbyshire"));
    assert_eq!(value["projectDurationYears"], json!(3));
    assert!(model.section("beneficiaries").is_some());
    assert_eq!(model.summary().country.as_deref(), Some("England"));
}

#[test]
fn fieldsets_carry_legends_and_copy() {
    let model = build(fixture());

    let check = model.step("beneficiaries", 0).unwrap();
    assert_eq!(
        check.fieldsets[0].legend.as_deref(),
        Some("Specific groups of people")
    );
    assert!(check.fieldsets[0].introduction.is_some());
    let options = &check.fieldsets[0].fields[0].options;
    assert_eq!(options.len(), 2);
    assert!(options.iter().all(|option| option.explanation.is_some()));

    let finances = model
        .section("organisation")
        .unwrap()
        .steps
        .iter()
        .find(|step| step.title == "Organisation finances")
        .unwrap();
    assert_eq!(
        finances.fieldsets[0].footer.as_deref(),
        Some("Use the figures from your most recent annual accounts.")
    );

    let main = model.step("main-contact", 0).unwrap();
    assert_eq!(main.fieldsets[0].legend.as_deref(), Some("Main contact"));
    assert!(!main.no_validate);
}

#[test]
fn duration_is_stripped_for_several_countries() {
    let data = with(
        fixture(),
        json!({
            "projectCountries": ["england", "wales"],
            "projectDurationYears": 5,
            "projectLocationDescription": "Derby and Cardiff",
            "contactLanguagePreference": "english",
        }),
    );
    let model = build(data);
    assert!(model.validation.value.get("projectDurationYears").is_none());
    assert!(model.validation.value.get("projectLocation").is_none());
    assert!(model.validation.is_valid, "{:?}", model.validation.messages);
}

#[test]
fn location_description_required_without_a_single_country() {
    let data = with(
        fixture(),
        json!({ "projectCountries": ["england", "scotland"] }),
    );
    let model = build(data);
    assert_eq!(
        model.validation.messages_for("projectLocationDescription"),
        vec!["Tell us all of the locations that you'll be running your project in"]
    );
}

#[test]
fn requested_amount_messages_are_distinct() {
    let cases = [
        ("10,000", "Amount must be more than £10,000"),
        ("lots", "Enter an amount as a number, for example 250,000"),
        (
            "400,000",
            "Amount requested must be the same as or less than the total cost of your project",
        ),
    ];
    for (amount, expected) in cases {
        let model = build(with(fixture(), json!({ "projectCosts": amount })));
        assert_eq!(model.validation.messages_for("projectCosts"), vec![expected]);
    }
}

#[test]
fn statutory_body_requires_sub_type() {
    let data = with(
        fixture(),
        json!({
            "organisationType": "statutory-body",
            "seniorContactRole": "chief-executive",
        }),
    );
    let model = build(data.clone());
    assert_eq!(
        model.validation.messages_for("organisationSubType"),
        vec!["Tell us what type of statutory body you are"]
    );
    // Statutory bodies are not asked for personal details.
    assert!(model.validation.value.get("contactDateOfBirth").is_none());
    assert!(model.validation.value.get("seniorContactAddress").is_none());
    assert!(model.validation.value.get("companyNumber").is_none());

    let model = build(with(data, json!({ "organisationSubType": "fire-service" })));
    assert!(model.validation.messages_for("organisationSubType").is_empty());
    assert!(model.validation.is_valid, "{:?}", model.validation.messages);
}

#[test]
fn welsh_projects_ask_for_language_preference() {
    let data = with(
        fixture(),
        json!({
            "projectCountries": ["wales"],
            "projectLocation": "cardiff",
        }),
    );
    let model = build(data.clone());
    assert_eq!(
        model.validation.messages_for("contactLanguagePreference"),
        vec!["Select a language"]
    );
    assert!(model.section("beneficiaries").is_none());

    let model = build(with(data, json!({ "contactLanguagePreference": "welsh" })));
    assert!(model.validation.is_valid, "{:?}", model.validation.messages);
    assert_eq!(
        model.validation.value["contactLanguagePreference"],
        json!("welsh")
    );

    let english = build(with(
        fixture(),
        json!({ "contactLanguagePreference": "klingon" }),
    ));
    assert!(english.validation.is_valid);
    assert!(
        english
            .validation
            .value
            .get("contactLanguagePreference")
            .is_none()
    );
}

#[test]
fn under_age_contacts_are_rejected() {
    let data = with(
        fixture(),
        json!({
            "contactDateOfBirth": { "day": 16, "month": 6, "year": 2004 },
            "seniorContactDateOfBirth": { "day": 16, "month": 6, "year": 2002 },
        }),
    );
    let model = build(data);
    assert_eq!(
        model.validation.messages_for("contactDateOfBirth"),
        vec!["Must be at least 16 years old"]
    );
    assert_eq!(
        model.validation.messages_for("seniorContactDateOfBirth"),
        vec!["Must be at least 18 years old"]
    );
}

#[test]
fn progress_tracks_each_section() {
    let empty = build(json!({}));
    assert!(empty.progress.is_pristine);
    assert!(!empty.progress.is_complete);
    assert!(empty.progress.section("beneficiaries").is_none());

    let started = build(json!({ "projectName": "My project" }));
    assert_eq!(
        started.progress.status_of("your-project"),
        Some(ProgressStatus::Incomplete)
    );
    assert_eq!(
        started.progress.status_of("organisation"),
        Some(ProgressStatus::NotStarted)
    );
    assert!(!started.progress.is_pristine);

    let complete = build(fixture());
    assert!(complete.progress.is_complete);
    assert_eq!(complete.progress.completed_count, 5);
    let your_project = complete.progress.section("your-project").unwrap();
    assert!(
        your_project
            .steps
            .iter()
            .all(|step| step.status == ProgressStatus::Complete)
    );
}

#[test]
fn visible_only_mode_drops_empty_steps() {
    let model = build(fixture());
    let beneficiaries = model.section("beneficiaries").unwrap();
    assert_eq!(beneficiaries.steps.len(), 1);
    assert!(model.step("beneficiaries", 1).is_none());
}

#[test]
fn show_all_flags_conditional_fields() {
    let ctx = context(fixture()).show_all_fields(true);
    let model = FormModel::build(form_definition(FormId::StandardProposal), ctx).unwrap();
    let gender = model.step("beneficiaries", 3).unwrap();
    let field = gender.fields().next().unwrap();
    assert_eq!(field.name, "beneficiariesGroupsGender");
    assert!(field.is_conditional);
    assert!(gender.is_empty());

    let location = model.step("your-project", 2).unwrap();
    let flags = location
        .fields()
        .map(|field| (field.name.as_str(), field.is_conditional))
        .collect::<Vec<_>>();
    assert_eq!(
        flags,
        vec![
            ("projectLocation", false),
            ("projectLocationDescription", false)
        ]
    );
    assert_eq!(model.progress.status_of("beneficiaries"), Some(ProgressStatus::Complete));
}

#[test]
fn submission_prefixes_programme_title() {
    let ctx = context(fixture()).with_metadata(Metadata {
        programme: Some(Programme {
            title: "Awards for All".into(),
        }),
    });
    let model = FormModel::build(form_definition(FormId::StandardProposal), ctx).unwrap();
    let submission = model.for_submission();
    assert_eq!(submission["projectName"], json!("Awards for All: My project"));
    assert_eq!(submission["projectCosts"], json!(250000));
}

#[test]
fn auto_duration_countries_skip_the_question() {
    let settings = EngineSettings {
        auto_duration_countries: vec![apply_spec::Country::England],
        ..settings()
    };
    let data = with(fixture(), json!({ "projectDurationYears": null }));
    let ctx = FormContext::new(Locale::En, data).with_settings(settings);
    let model = FormModel::build(form_definition(FormId::StandardProposal), ctx).unwrap();

    assert!(model.validation.is_valid, "{:?}", model.validation.messages);
    assert!(model.section("your-project").unwrap().steps.len() < 6);
    assert_eq!(model.for_submission()["projectDurationYears"], json!(1));
}

#[test]
fn summary_describes_the_proposal() {
    let summary = build(fixture()).summary();
    assert_eq!(summary.title, "My project");
    assert_eq!(summary.country.as_deref(), Some("England"));
    let overview = summary
        .overview
        .iter()
        .map(|item| (item.label.as_str(), item.value.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        overview,
        vec![
            ("Location", "Derbyshire"),
            ("Requested amount", "£250,000"),
            ("Project length", "3 years"),
        ]
    );

    let untitled = build(json!({ "projectCountries": ["wales", "scotland"] })).summary();
    assert_eq!(untitled.title, "Untitled proposal");
    assert_eq!(untitled.country.as_deref(), Some("Multiple countries"));
    assert!(untitled.overview.is_empty());
}

#[test]
fn welsh_locale_localises_copy() {
    let ctx = FormContext::new(Locale::Cy, json!({ "projectCountries": ["wales"] }))
        .with_settings(settings());
    let model = FormModel::build(form_definition(FormId::StandardProposal), ctx).unwrap();
    assert_eq!(model.title, "Eich cynnig am arian");
    let countries = model.field("projectCountries").unwrap();
    assert_eq!(countries.option_label("wales"), Some("Cymru"));
    assert_eq!(
        model.validation.messages_for("contactLanguagePreference"),
        vec!["Dewiswch iaith"]
    );
    let duration = model.field("projectDurationYears").unwrap();
    assert_eq!(
        duration
            .options
            .iter()
            .map(|option| option.value.as_str())
            .collect::<Vec<_>>(),
        vec!["3", "4", "5"]
    );
}

#[test]
fn unknown_keys_do_not_block_validation() {
    let model = build(with(fixture(), json!({ "legacyField": "from v1.0" })));
    assert!(model.validation.is_valid);
    assert_eq!(model.validation.unknown_fields, vec!["legacyField"]);
    assert!(model.validation.value.get("legacyField").is_none());
}
