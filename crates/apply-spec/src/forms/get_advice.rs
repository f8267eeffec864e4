//! Shorter flow for groups asking for advice before a full proposal.

use serde_json::{Map, Value};

use crate::catalog::FieldCatalog;
use crate::error::DefinitionError;
use crate::field::{Field, FieldType};
use crate::form::{FormContext, FormDefinition, FormSummary};
use crate::locale::{Locale, Localise};
use crate::rule::{ErrorType, Schema};
use crate::section::Section;
use crate::step::{Fieldset, Step};

use super::locations;
use super::shared::{self, ContactRole};

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAdvice;

/// Organisation types offered in this flow.
// TODO: confirm the value for constituted groups with the grants team; it
// currently repeats `unregistered-vco`.
const ORGANISATION_TYPES: &[(&str, &str, &str)] = &[
    (
        "unregistered-vco",
        "Unregistered voluntary or community organisation",
        "Sefydliad gwirfoddol neu gymunedol anghofrestredig",
    ),
    (
        "unregistered-vco",
        "Constituted voluntary or community group",
        "Grŵp gwirfoddol neu gymunedol cyfansoddiadol",
    ),
    (
        "unincorporated-registered-charity",
        "Registered charity (unincorporated)",
        "Elusen gofrestredig (anghorfforedig)",
    ),
    (
        "charitable-incorporated-organisation",
        "Charitable incorporated organisation (CIO)",
        "Sefydliad corfforedig elusennol (SCE)",
    ),
    (
        "not-for-profit-company",
        "Not-for-profit company",
        "Cwmni nid-er-elw",
    ),
    ("school", "School", "Ysgol"),
    (
        "college-or-university",
        "College or University",
        "Coleg neu brifysgol",
    ),
    ("statutory-body", "Statutory body", "Corff statudol"),
    ("faith-group", "Faith-based group", "Grŵp yn seiliedig ar ffydd"),
];

impl FormDefinition for GetAdvice {
    fn id(&self) -> &'static str {
        "get-advice"
    }

    fn title(&self, locale: Locale) -> String {
        locale.pick("Get advice on your idea", "Cael cyngor ar eich syniad")
    }

    fn schema_version(&self) -> &'static str {
        "v0.3"
    }

    fn fields_for(&self, ctx: &FormContext) -> Result<FieldCatalog, DefinitionError> {
        FieldCatalog::new(vec![
            shared::project_countries(ctx),
            project_regions(ctx),
            shared::project_location(ctx),
            shared::project_location_description(ctx),
            shared::project_costs(ctx, None, None),
            shared::project_duration_years(ctx),
            shared::your_idea_project(ctx),
            shared::your_idea_community(ctx),
            shared::your_idea_activities(ctx),
            shared::organisation_legal_name(ctx),
            shared::organisation_trading_name(ctx),
            shared::organisation_type(ctx, ORGANISATION_TYPES),
            shared::organisation_sub_type(ctx),
            shared::contact_name(ctx, ContactRole::Main, false),
            shared::contact_email(ctx, ContactRole::Main, false),
            shared::contact_phone(ctx, ContactRole::Main, false, false),
            shared::contact_language_preference(ctx),
            shared::contact_communication_needs(ctx),
        ])
    }

    fn sections(
        &self,
        ctx: &FormContext,
        catalog: &FieldCatalog,
    ) -> Result<Vec<Section>, DefinitionError> {
        let locale = ctx.locale;
        let step = |en: &str, cy: &str, names: &[&str]| -> Result<Step, DefinitionError> {
            Ok(Step::new(
                locale.pick(en, cy),
                vec![Fieldset::gated(catalog.pick(names)?, &ctx.data, ctx.mode)],
            ))
        };

        Ok(vec![
            Section::new(
                "your-project",
                locale.pick("Your project", "Eich prosiect"),
                vec![
                    step(
                        "Project country",
                        "Gwlad y prosiect",
                        &["projectCountries", "projectRegions"],
                    )?,
                    step(
                        "Project location",
                        "Lleoliad y prosiect",
                        &["projectLocation", "projectLocationDescription"],
                    )?,
                    step(
                        "Project costs",
                        "Costau'r prosiect",
                        &["projectCosts", "projectDurationYears"],
                    )?,
                    step(
                        "Your idea",
                        "Eich syniad",
                        &["yourIdeaProject", "yourIdeaCommunity", "yourIdeaActivities"],
                    )?,
                ],
            ),
            Section::new(
                "your-organisation",
                locale.pick("Your organisation", "Eich sefydliad"),
                vec![step(
                    "Organisation details",
                    "Manylion y sefydliad",
                    &[
                        "organisationLegalName",
                        "organisationTradingName",
                        "organisationType",
                        "organisationSubType",
                    ],
                )?],
            ),
            Section::new(
                "your-details",
                locale.pick("Your details", "Eich manylion"),
                vec![step(
                    "Contact details",
                    "Manylion cyswllt",
                    &[
                        "contactName",
                        "contactEmail",
                        "contactPhone",
                        "contactLanguagePreference",
                        "contactCommunicationNeeds",
                    ],
                )?],
            ),
        ])
    }

    fn summary(&self, ctx: &FormContext, catalog: &FieldCatalog) -> FormSummary {
        shared::summarise(ctx, catalog, ("Untitled idea", "Syniad heb deitl"))
    }

    fn finalise_submission(&self, ctx: &FormContext, value: Map<String, Value>) -> Map<String, Value> {
        shared::backfill_duration(ctx, value)
    }
}

/// English regions the idea covers; only asked when England is the single
/// country.
fn project_regions(ctx: &FormContext) -> Field {
    Field::builder("projectRegions", FieldType::Checkbox, ctx.locale)
        .label(
            "What areas of England will your project take place in?",
            "Ym mha ardaloedd o Loegr fydd eich prosiect yn cael ei gynnal?",
        )
        .options(locations::england_regions(ctx.locale))
        .message(
            ErrorType::ArrayIncludes,
            "Select a valid region",
            "Dewiswch ranbarth dilys",
        )
        .message(ErrorType::Base, "Select one or more regions", "Dewiswch un neu fwy o ranbarthau")
        .schema_with(|rule| {
            Schema::only_if(
                "projectCountries",
                shared::england_only(),
                rule.into(),
            )
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::Country;
    use serde_json::json;

    #[test]
    fn regions_only_for_england() {
        let ctx = FormContext::new(Locale::En, json!({"projectCountries": ["england"]}));
        let field = project_regions(&ctx);
        assert!(field.is_included(&ctx.data));
        assert!(!field.is_included(&json!({"projectCountries": [Country::Wales.as_str()]})));
    }
}
