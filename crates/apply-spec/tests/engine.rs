use chrono::NaiveDate;
use serde_json::json;

use apply_spec::{
    Condition, DefinitionError, ErrorType, Field, FieldCatalog, FieldType, Fieldset, FormContext,
    FormDefinition, FormModel, FormSummary, Issue, Locale, Schema, Section, Step, VisibilityMode,
    conditional_fields, validate,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()
}

fn amount_field() -> Field {
    Field::builder("projectCosts", FieldType::Currency, Locale::En)
        .label("How much?", "Faint?")
        .max(5_000)
        .message(ErrorType::NumberMax, "Too much", "Gormod")
        .message(ErrorType::Base, "Enter an amount", "Rhowch swm")
        .build()
}

#[test]
fn specific_message_wins_over_base() {
    let field = amount_field();
    assert_eq!(field.message_for(&Issue::new(ErrorType::NumberMax)), "Too much");
    assert_eq!(
        field.message_for(&Issue::new(ErrorType::NumberBase)),
        "Enter an amount"
    );

    let result = validate([&field], &json!({ "projectCosts": "6,000" }), today());
    assert_eq!(result.messages_for("projectCosts"), vec!["Too much"]);
    assert_eq!(result.errors[0].error_type, ErrorType::NumberMax);
}

#[test]
fn unmatched_failures_fall_back_to_generic_copy() {
    let field = Field::builder("website", FieldType::Url, Locale::Cy)
        .label("Gwefan", "Gwefan")
        .build();
    let result = validate([&field], &json!({ "website": "not a url" }), today());
    assert_eq!(result.messages_for("website"), vec!["Mae problem gyda'r ateb hwn"]);
}

#[test]
fn keyed_messages_match_member_issues() {
    let field = Field::builder("contactAddress", FieldType::Address, Locale::En)
        .message_at(ErrorType::AnyEmpty, "townCity", "Enter a town", "Rhowch dref")
        .message_at(ErrorType::Base, "postcode", "Enter a postcode", "Rhowch god post")
        .message(ErrorType::Base, "Enter an address", "Rhowch gyfeiriad")
        .build();
    let result = validate(
        [&field],
        &json!({ "contactAddress": { "line1": "1 High Street", "postcode": "??" } }),
        today(),
    );
    assert_eq!(
        result.messages_for("contactAddress"),
        vec!["Enter a town", "Enter a postcode"]
    );
    assert_eq!(result.errors[1].path(), "contactAddress.postcode");
}

#[test]
fn conditional_fields_marks_hidden_candidates() {
    let candidates = vec![
        Field::builder("first", FieldType::Text, Locale::En).build(),
        Field::builder("second", FieldType::Text, Locale::En).build(),
        Field::builder("third", FieldType::Text, Locale::En).build(),
    ];

    let visible = conditional_fields(candidates.clone(), &["third", "first"], VisibilityMode::VisibleOnly);
    assert_eq!(
        visible.iter().map(|field| field.name.as_str()).collect::<Vec<_>>(),
        vec!["first", "third"]
    );
    assert!(visible.iter().all(|field| !field.is_conditional));

    let all = conditional_fields(candidates, &["first"], VisibilityMode::ShowAll);
    assert_eq!(
        all.iter()
            .map(|field| (field.name.as_str(), field.is_conditional))
            .collect::<Vec<_>>(),
        vec![("first", false), ("second", true), ("third", true)]
    );
}

#[test]
fn gating_on_missing_or_mistyped_values_strips() {
    let field = Field::builder("organisationSubType", FieldType::Radio, Locale::En)
        .schema_with(|rule| {
            Schema::only_if(
                "organisationType",
                Condition::equals("statutory-body"),
                rule.into(),
            )
        })
        .build();
    for data in [
        json!({}),
        json!({ "organisationType": null }),
        json!({ "organisationType": { "nested": "statutory-body" } }),
        json!({ "organisationType": ["statutory-body", "school"] }),
    ] {
        assert!(!field.is_included(&data), "{data}");
        assert!(validate([&field], &data, today()).is_valid);
    }
}

#[test]
fn catalog_rejects_duplicate_names() {
    let fields = vec![
        Field::builder("projectName", FieldType::Text, Locale::En).build(),
        Field::builder("projectName", FieldType::Text, Locale::En).build(),
    ];
    assert_eq!(
        FieldCatalog::new(fields).unwrap_err(),
        DefinitionError::DuplicateField("projectName".into())
    );
}

struct Misconfigured;

impl FormDefinition for Misconfigured {
    fn id(&self) -> &'static str {
        "misconfigured"
    }

    fn title(&self, _locale: Locale) -> String {
        "Misconfigured".into()
    }

    fn schema_version(&self) -> &'static str {
        "v0"
    }

    fn fields_for(&self, ctx: &FormContext) -> Result<FieldCatalog, DefinitionError> {
        FieldCatalog::new(vec![
            Field::builder("projectName", FieldType::Text, ctx.locale).build(),
        ])
    }

    fn sections(
        &self,
        _ctx: &FormContext,
        catalog: &FieldCatalog,
    ) -> Result<Vec<Section>, DefinitionError> {
        let fields = catalog.pick(&["projectName", "projectNmae"])?;
        Ok(vec![Section::new(
            "project",
            "Project",
            vec![Step::new("Project", vec![Fieldset::new(fields)])],
        )])
    }

    fn summary(&self, _ctx: &FormContext, _catalog: &FieldCatalog) -> FormSummary {
        FormSummary {
            title: "Misconfigured".into(),
            country: None,
            overview: Vec::new(),
        }
    }
}

#[test]
fn unknown_step_field_fails_the_build() {
    let ctx = FormContext::new(Locale::En, json!({}));
    let error = FormModel::build(&Misconfigured, ctx).err();
    assert_eq!(
        error,
        Some(DefinitionError::UnknownField("projectNmae".into()))
    );
}

#[test]
fn non_object_data_is_treated_as_empty() {
    let ctx = FormContext::new(Locale::En, json!(["not", "an", "object"]));
    assert_eq!(ctx.data, json!({}));
}
