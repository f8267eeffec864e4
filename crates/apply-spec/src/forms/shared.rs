//! Field builders shared by the proposal and advice flows.
//!
//! Every builder takes the form context explicitly; options and schemas are
//! derived from `ctx.data` at build time, conditional schemas are resolved
//! against whatever data is validated later.

use serde_json::{Map, Value, json};

use crate::catalog::FieldCatalog;
use crate::check::parse_amount;
use crate::country::Country;
use crate::data;
use crate::field::{Field, FieldOption, FieldType};
use crate::form::{FormContext, FormSummary, SummaryItem};
use crate::locale::{Locale, Localise, Localised};
use crate::rule::{Condition, ErrorType, Rule, Schema};

use super::locations;

pub const PROJECT_NAME_MAX_LENGTH: usize = 80;
pub const LOCATION_DESCRIPTION_MAX_LENGTH: usize = 255;
pub const ORGANISATION_NAME_MAX_LENGTH: usize = 255;
pub const COMMUNICATION_NEEDS_MAX_LENGTH: usize = 255;

pub const MAIN_CONTACT_MIN_AGE: u32 = 16;
pub const SENIOR_CONTACT_MIN_AGE: u32 = 18;

/// Organisation types whose contacts are not asked for a date of birth or
/// home address.
pub const NO_PERSONAL_DETAILS_TYPES: &[&str] =
    &["school", "college-or-university", "statutory-body"];

/// Condition on `projectCountries` that holds for England-only projects.
pub fn england_only() -> Condition {
    Condition::All {
        conditions: vec![
            Condition::CountEq { count: 1 },
            Condition::contains(Country::England.as_str()),
        ],
    }
}

pub fn project_name(ctx: &FormContext) -> Field {
    Field::builder("projectName", FieldType::Text, ctx.locale)
        .label(
            "What is the name of your project?",
            "Beth yw enw eich prosiect?",
        )
        .explanation(
            "The project name should be simple and to the point",
            "Dylai enw'r prosiect fod yn syml ac yn gryno",
        )
        .max_length(PROJECT_NAME_MAX_LENGTH)
        .message(
            ErrorType::AnyEmpty,
            "Enter a project name",
            "Rhowch enw prosiect",
        )
        .message(
            ErrorType::StringMax,
            "Project name must be 80 characters or less",
            "Rhaid i enw'r prosiect fod yn llai na 80 nod",
        )
        .message(
            ErrorType::Base,
            "Enter a project name",
            "Rhowch enw prosiect",
        )
        .build()
}

pub fn project_countries(ctx: &FormContext) -> Field {
    let options = Country::ALL
        .into_iter()
        .map(|country| FieldOption::new(country.as_str(), country.localised_label(&ctx.locale)))
        .collect();

    Field::builder("projectCountries", FieldType::Checkbox, ctx.locale)
        .label(
            "What country (or countries) will your project take place in?",
            "Ym mha wlad (neu wledydd) fydd eich prosiect yn cael ei gynnal?",
        )
        .explanation(
            "We fund projects in England, Scotland, Wales and Northern Ireland",
            "Rydym yn ariannu prosiectau yng Nghymru, Lloegr, yr Alban a Gogledd Iwerddon",
        )
        .options(options)
        .message(
            ErrorType::ArrayIncludes,
            "Select a valid country",
            "Dewiswch wlad ddilys",
        )
        .message(ErrorType::Base, "Select a country", "Dewiswch wlad")
        .build()
}

/// Dropdown of locations for the single selected country. With zero or
/// several countries there is nothing to choose from and the field is
/// stripped; the free-text description takes over.
pub fn project_location(ctx: &FormContext) -> Field {
    let country = data::single_country(&ctx.data);
    let optgroups = country
        .map(|country| locations::location_groups(country, ctx.locale))
        .unwrap_or_default();

    Field::builder("projectLocation", FieldType::Select, ctx.locale)
        .label(
            "Where will most of your project take place?",
            "Lle bydd y rhan fwyaf o'ch prosiect yn cael ei gynnal?",
        )
        .optgroups(optgroups)
        .message(ErrorType::Base, "Select a location", "Dewiswch leoliad")
        .schema_with(move |rule| match country {
            Some(_) => Schema::when(
                "projectCountries",
                Condition::CountEq { count: 1 },
                rule.into(),
                Schema::Strip,
            ),
            None => Schema::Strip,
        })
        .build()
}

pub fn project_location_description(ctx: &FormContext) -> Field {
    Field::builder("projectLocationDescription", FieldType::Text, ctx.locale)
        .label(
            "Tell us all of the locations that you'll be running your project in",
            "Dywedwch wrthym am yr holl leoliadau y byddwch yn cynnal eich prosiect ynddynt",
        )
        .explanation(
            "For example, 'Yorkshire' or 'Cardiff and Swansea'",
            "Er enghraifft, 'Swydd Efrog' neu 'Caerdydd ac Abertawe'",
        )
        .max_length(LOCATION_DESCRIPTION_MAX_LENGTH)
        .message(
            ErrorType::StringMax,
            "Description must be 255 characters or less",
            "Rhaid i'r disgrifiad fod yn llai na 255 nod",
        )
        .message(
            ErrorType::Base,
            "Tell us all of the locations that you'll be running your project in",
            "Dywedwch wrthym am yr holl leoliadau y byddwch yn cynnal eich prosiect ynddynt",
        )
        .schema_with(|rule| {
            Schema::when(
                "projectCountries",
                Condition::CountEq { count: 1 },
                rule.clone().optional().into(),
                rule.into(),
            )
        })
        .build()
}

/// Amount requested. `min` is a hard lower bound; `ceiling_field` caps the
/// request at another amount the applicant entered.
pub fn project_costs(ctx: &FormContext, min: Option<i64>, ceiling_field: Option<&str>) -> Field {
    let mut builder = Field::builder("projectCosts", FieldType::Currency, ctx.locale)
        .label(
            "How much money do you want from us?",
            "Faint o arian ydych chi ei eisiau gennym ni?",
        )
        .explanation(
            "Enter a whole number of pounds, for example 250,000",
            "Rhowch swm cyfan o bunnoedd, er enghraifft 250,000",
        )
        .message(ErrorType::AnyRequired, "Enter an amount", "Rhowch swm")
        .message(ErrorType::AnyEmpty, "Enter an amount", "Rhowch swm")
        .message(
            ErrorType::NumberBase,
            "Enter an amount as a number, for example 250,000",
            "Rhowch swm fel rhif, er enghraifft 250,000",
        )
        .message(
            ErrorType::NumberInteger,
            "Use whole numbers only, eg. 12000",
            "Defnyddiwch rifau cyfan yn unig, e.e. 12000",
        );

    if let Some(min) = min {
        let en = format!("Amount must be more than {}", format_currency(min - 1));
        let cy = format!("Rhaid i'r swm fod yn fwy na {}", format_currency(min - 1));
        builder = builder.min(min).message(ErrorType::NumberMin, &en, &cy);
    }
    if ceiling_field.is_some() {
        builder = builder.message(
            ErrorType::NumberMax,
            "Amount requested must be the same as or less than the total cost of your project",
            "Rhaid i'r swm y gofynnir amdano fod yr un faint neu'n llai na chyfanswm cost eich prosiect",
        );
    }

    let ceiling = ceiling_field.map(str::to_string);
    builder
        .message(ErrorType::Base, "Enter an amount", "Rhowch swm")
        .schema_with(move |rule| match ceiling {
            Some(field) => rule.at_most(&field).into(),
            None => rule.into(),
        })
        .build()
}

/// Duration choices: England runs one to five years, other countries three
/// to five. Stripped for multi-country projects and for countries configured
/// to skip the question.
pub fn project_duration_years(ctx: &FormContext) -> Field {
    let country = data::single_country(&ctx.data);
    let shortest = match country {
        Some(Country::England) | None => 1,
        Some(_) => 3,
    };
    let options = (shortest..=5u32)
        .map(|years| FieldOption::new(years.to_string(), years_label(ctx.locale, years)))
        .collect();
    let auto_filled = country.is_some_and(|country| ctx.settings.auto_fills_duration(country));

    Field::builder("projectDurationYears", FieldType::Radio, ctx.locale)
        .label(
            "How long do you need the money for?",
            "Am ba hyd fydd arnoch angen yr arian?",
        )
        .options(options)
        .message(
            ErrorType::AnyOnly,
            "Select a valid project length",
            "Dewiswch hyd prosiect dilys",
        )
        .message(
            ErrorType::Base,
            "Select how long you need the money for",
            "Dewiswch am ba hyd fydd arnoch angen yr arian",
        )
        .schema_with(move |rule| {
            if auto_filled {
                Schema::Strip
            } else {
                Schema::when(
                    "projectCountries",
                    Condition::CountAtLeast { count: 2 },
                    Schema::Strip,
                    rule.into(),
                )
            }
        })
        .build()
}

pub fn years_label(locale: Locale, years: u32) -> String {
    if years == 1 {
        locale.pick("1 year", "1 flwyddyn")
    } else {
        locale.localise(&Localised::new(
            format!("{years} years"),
            format!("{years} blynedd"),
        ))
    }
}

fn idea_field(
    ctx: &FormContext,
    name: &str,
    label: (&str, &str),
    explanation: (&str, &str),
    words: (usize, usize),
) -> Field {
    let (min_words, max_words) = words;
    let too_few = (
        format!("Answer must be at least {min_words} words"),
        format!("Rhaid i'r ateb fod yn o leiaf {min_words} gair"),
    );
    let too_many = (
        format!("Answer must be no more than {max_words} words"),
        format!("Rhaid i'r ateb fod yn llai na {max_words} gair"),
    );

    Field::builder(name, FieldType::Textarea, ctx.locale)
        .label(label.0, label.1)
        .explanation(explanation.0, explanation.1)
        .words(min_words, max_words)
        .message(ErrorType::StringMinWords, &too_few.0, &too_few.1)
        .message(ErrorType::StringMaxWords, &too_many.0, &too_many.1)
        .message(
            ErrorType::Base,
            "Tell us about your idea",
            "Dywedwch wrthym am eich syniad",
        )
        .build()
}

pub fn your_idea_project(ctx: &FormContext) -> Field {
    idea_field(
        ctx,
        "yourIdeaProject",
        (
            "What would you like to do?",
            "Beth hoffech chi ei wneud?",
        ),
        (
            "Tell us what you want to do, who it will help and why it is needed",
            "Dywedwch wrthym beth rydych eisiau ei wneud, pwy fydd yn elwa a pham fod ei angen",
        ),
        (50, 500),
    )
}

pub fn your_idea_community(ctx: &FormContext) -> Field {
    idea_field(
        ctx,
        "yourIdeaCommunity",
        (
            "How does your project involve your community?",
            "Sut mae eich prosiect yn cynnwys eich cymuned?",
        ),
        (
            "Tell us how people have helped shape the project",
            "Dywedwch wrthym sut mae pobl wedi helpu i siapio'r prosiect",
        ),
        (50, 500),
    )
}

pub fn your_idea_activities(ctx: &FormContext) -> Field {
    idea_field(
        ctx,
        "yourIdeaActivities",
        (
            "How does your idea fit in with other local activities?",
            "Sut mae eich syniad yn cyd-fynd â gweithgareddau lleol eraill?",
        ),
        (
            "Tell us about other organisations doing similar work nearby",
            "Dywedwch wrthym am sefydliadau eraill sy'n gwneud gwaith tebyg gerllaw",
        ),
        (50, 350),
    )
}

pub fn organisation_legal_name(ctx: &FormContext) -> Field {
    Field::builder("organisationLegalName", FieldType::Text, ctx.locale)
        .label(
            "What is the full legal name of your organisation?",
            "Beth yw enw cyfreithiol llawn eich sefydliad?",
        )
        .explanation(
            "This must be as shown on your governing document",
            "Rhaid i hwn fod fel y dangosir ar eich dogfen lywodraethol",
        )
        .max_length(ORGANISATION_NAME_MAX_LENGTH)
        .message(
            ErrorType::StringMax,
            "Full legal name of organisation must be 255 characters or less",
            "Rhaid i enw cyfreithiol llawn y sefydliad fod yn llai na 255 nod",
        )
        .message(
            ErrorType::Base,
            "Enter the full legal name of the organisation",
            "Rhowch enw cyfreithiol llawn y sefydliad",
        )
        .build()
}

pub fn organisation_trading_name(ctx: &FormContext) -> Field {
    Field::builder("organisationTradingName", FieldType::Text, ctx.locale)
        .label(
            "Does your organisation use a different name in your day-to-day work?",
            "A yw eich sefydliad yn defnyddio enw gwahanol yn eich gwaith o ddydd i ddydd?",
        )
        .max_length(ORGANISATION_NAME_MAX_LENGTH)
        .optional()
        .message(
            ErrorType::AnyInvalid,
            "Trading name must not be the same as legal name",
            "Rhaid i'r enw masnachu beidio â bod yr un fath â'r enw cyfreithiol",
        )
        .message(
            ErrorType::StringMax,
            "Organisation's day-to-day name must be 255 characters or less",
            "Rhaid i enw o ddydd i ddydd y sefydliad fod yn llai na 255 nod",
        )
        .schema_with(|rule| rule.not_equal_to("organisationLegalName").into())
        .build()
}

pub fn address_field(
    ctx: &FormContext,
    name: &str,
    label: (&str, &str),
    rewrite: impl FnOnce(Rule) -> Schema + 'static,
) -> Field {
    Field::builder(name, FieldType::Address, ctx.locale)
        .label(label.0, label.1)
        .message_at(
            ErrorType::AnyEmpty,
            "line1",
            "Enter a building and street",
            "Rhowch adeilad a stryd",
        )
        .message_at(
            ErrorType::StringMax,
            "line1",
            "Building and street must be 255 characters or less",
            "Rhaid i'r adeilad a'r stryd fod yn llai na 255 nod",
        )
        .message_at(
            ErrorType::AnyEmpty,
            "townCity",
            "Enter a town or city",
            "Rhowch dref neu ddinas",
        )
        .message_at(
            ErrorType::StringMax,
            "townCity",
            "Town or city must be 40 characters or less",
            "Rhaid i'r dref neu ddinas fod yn llai na 40 nod",
        )
        .message_at(
            ErrorType::Base,
            "postcode",
            "Enter a real postcode",
            "Rhowch god post go iawn",
        )
        .message(
            ErrorType::AnyInvalid,
            "Address must be different from the other contact's address",
            "Rhaid i'r cyfeiriad fod yn wahanol i gyfeiriad y cyswllt arall",
        )
        .message(ErrorType::Base, "Enter a full UK address", "Rhowch gyfeiriad llawn yn y DU")
        .schema_with(rewrite)
        .build()
}

pub fn organisation_address(ctx: &FormContext) -> Field {
    address_field(
        ctx,
        "organisationAddress",
        (
            "What is the main or registered address of your organisation?",
            "Beth yw prif gyfeiriad neu gyfeiriad cofrestredig eich sefydliad?",
        ),
        Schema::from,
    )
}

/// `(value, English, Welsh)`
type OptionCopy = (&'static str, &'static str, &'static str);

fn localised_options(ctx: &FormContext, copy: &[OptionCopy]) -> Vec<FieldOption> {
    copy.iter()
        .map(|(value, en, cy)| FieldOption::new(*value, ctx.locale.pick(en, cy)))
        .collect()
}

pub const ORGANISATION_TYPES: &[OptionCopy] = &[
    (
        "unregistered-vco",
        "Unregistered voluntary or community organisation",
        "Sefydliad gwirfoddol neu gymunedol anghofrestredig",
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

pub fn organisation_type(ctx: &FormContext, copy: &[OptionCopy]) -> Field {
    Field::builder("organisationType", FieldType::Radio, ctx.locale)
        .label(
            "What type of organisation are you?",
            "Pa fath o sefydliad ydych chi?",
        )
        .options(localised_options(ctx, copy))
        .message(
            ErrorType::Base,
            "Select a type of organisation",
            "Dewiswch fath o sefydliad",
        )
        .build()
}

const STATUTORY_BODY_TYPES: &[OptionCopy] = &[
    ("parish-council", "Parish Council", "Cyngor plwyf"),
    ("town-council", "Town Council", "Cyngor tref"),
    ("local-authority", "Local Authority", "Awdurdod lleol"),
    (
        "nhs-trust-health-authority",
        "NHS Trust/Health Authority",
        "Ymddiriedolaeth GIG/Awdurdod Iechyd",
    ),
    ("prison-service", "Prison Service", "Gwasanaeth carchardai"),
    ("fire-service", "Fire Service", "Gwasanaeth tân"),
    ("police-authority", "Police Authority", "Awdurdod heddlu"),
];

/// Only asked of statutory bodies.
pub fn organisation_sub_type(ctx: &FormContext) -> Field {
    Field::builder("organisationSubType", FieldType::Radio, ctx.locale)
        .label(
            "Tell us what type of statutory body you are",
            "Dywedwch wrthym pa fath o gorff statudol ydych chi",
        )
        .options(localised_options(ctx, STATUTORY_BODY_TYPES))
        .message(
            ErrorType::Base,
            "Tell us what type of statutory body you are",
            "Dywedwch wrthym pa fath o gorff statudol ydych chi",
        )
        .schema_with(|rule| {
            Schema::only_if(
                "organisationType",
                Condition::equals("statutory-body"),
                rule.into(),
            )
        })
        .build()
}

/// Which contact a field belongs to. Senior contact fields are prefixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRole {
    Main,
    Senior,
}

impl ContactRole {
    pub fn field_name(&self, suffix: &str) -> String {
        match self {
            ContactRole::Main => format!("contact{suffix}"),
            ContactRole::Senior => format!("seniorContact{suffix}"),
        }
    }

    fn other(&self) -> ContactRole {
        match self {
            ContactRole::Main => ContactRole::Senior,
            ContactRole::Senior => ContactRole::Main,
        }
    }

    fn min_age(&self) -> u32 {
        match self {
            ContactRole::Main => MAIN_CONTACT_MIN_AGE,
            ContactRole::Senior => SENIOR_CONTACT_MIN_AGE,
        }
    }
}

/// Adds a "must differ from the other contact" constraint when the flow has
/// both contacts and this is the main one.
fn distinct_from_other(distinct: bool, role: ContactRole, suffix: &str) -> Option<String> {
    (distinct && role == ContactRole::Main).then(|| role.other().field_name(suffix))
}

pub fn contact_name(ctx: &FormContext, role: ContactRole, distinct: bool) -> Field {
    let (en, cy) = match role {
        ContactRole::Main => ("Main contact's full name", "Enw llawn y prif gyswllt"),
        ContactRole::Senior => ("Senior contact's full name", "Enw llawn yr uwch gyswllt"),
    };
    let other = distinct_from_other(distinct, role, "Name");

    Field::builder(&role.field_name("Name"), FieldType::Name, ctx.locale)
        .label(en, cy)
        .message_at(
            ErrorType::AnyEmpty,
            "firstName",
            "Enter first name",
            "Rhowch enw cyntaf",
        )
        .message_at(
            ErrorType::StringMax,
            "firstName",
            "First name must be 40 characters or less",
            "Rhaid i'r enw cyntaf fod yn llai na 40 nod",
        )
        .message_at(
            ErrorType::AnyEmpty,
            "lastName",
            "Enter last name",
            "Rhowch gyfenw",
        )
        .message_at(
            ErrorType::StringMax,
            "lastName",
            "Last name must be 40 characters or less",
            "Rhaid i'r cyfenw fod yn llai na 40 nod",
        )
        .message(
            ErrorType::AnyInvalid,
            "Main contact name must be different from the senior contact's name",
            "Rhaid i enw'r prif gyswllt fod yn wahanol i enw'r uwch gyswllt",
        )
        .message(ErrorType::Base, "Enter full name", "Rhowch enw llawn")
        .schema_with(move |rule| match other {
            Some(other) => rule.not_equal_to(&other).into(),
            None => rule.into(),
        })
        .build()
}

/// Stripped for organisation types that do not collect personal details.
pub fn contact_date_of_birth(ctx: &FormContext, role: ContactRole) -> Field {
    let min_age = role.min_age();
    let (en, cy) = (
        format!("Must be at least {min_age} years old"),
        format!("Rhaid bod yn o leiaf {min_age} oed"),
    );

    Field::builder(&role.field_name("DateOfBirth"), FieldType::Date, ctx.locale)
        .label("Date of birth", "Dyddiad geni")
        .min_age(min_age)
        .message(ErrorType::DateOfBirth, &en, &cy)
        .message(
            ErrorType::DateBase,
            "Enter a real date of birth",
            "Rhowch ddyddiad geni go iawn",
        )
        .message(ErrorType::Base, "Enter a date of birth", "Rhowch ddyddiad geni")
        .schema_with(personal_details_only)
        .build()
}

fn personal_details_only(rule: Rule) -> Schema {
    Schema::when(
        "organisationType",
        Condition::one_of(NO_PERSONAL_DETAILS_TYPES),
        Schema::Strip,
        rule.into(),
    )
}

pub fn contact_address(ctx: &FormContext, role: ContactRole, distinct: bool) -> Field {
    let label = match role {
        ContactRole::Main => ("Main contact's home address", "Cyfeiriad cartref y prif gyswllt"),
        ContactRole::Senior => ("Senior contact's home address", "Cyfeiriad cartref yr uwch gyswllt"),
    };
    let other = distinct_from_other(distinct, role, "Address");
    address_field(ctx, &role.field_name("Address"), label, move |rule| {
        personal_details_only(match other {
            Some(other) => rule.not_equal_to(&other),
            None => rule,
        })
    })
}

pub fn contact_email(ctx: &FormContext, role: ContactRole, distinct: bool) -> Field {
    let other = distinct_from_other(distinct, role, "Email");

    Field::builder(&role.field_name("Email"), FieldType::Email, ctx.locale)
        .label("Email", "E-bost")
        .message(
            ErrorType::StringEmail,
            "Email address must be in the correct format, like name@example.com",
            "Rhaid i'r cyfeiriad e-bost fod yn y fformat cywir, e.e. enw@example.com",
        )
        .message(
            ErrorType::AnyInvalid,
            "Main contact email address must be different from the senior contact's email address",
            "Rhaid i gyfeiriad e-bost y prif gyswllt fod yn wahanol i gyfeiriad e-bost yr uwch gyswllt",
        )
        .message(ErrorType::Base, "Enter an email address", "Rhowch gyfeiriad e-bost")
        .schema_with(move |rule| match other {
            Some(other) => rule.not_equal_to(&other).into(),
            None => rule.into(),
        })
        .build()
}

pub fn contact_phone(ctx: &FormContext, role: ContactRole, distinct: bool, required: bool) -> Field {
    let other = distinct_from_other(distinct, role, "Phone");

    Field::builder(&role.field_name("Phone"), FieldType::Phone, ctx.locale)
        .label("Telephone number", "Rhif ffôn")
        .required(required)
        .message(
            ErrorType::StringPhone,
            "Enter a real UK telephone number",
            "Rhowch rif ffôn go iawn yn y DU",
        )
        .message(
            ErrorType::AnyInvalid,
            "Main contact phone number must be different from the senior contact's phone number",
            "Rhaid i rif ffôn y prif gyswllt fod yn wahanol i rif ffôn yr uwch gyswllt",
        )
        .message(ErrorType::Base, "Enter a UK telephone number", "Rhowch rif ffôn yn y DU")
        .schema_with(move |rule| match other {
            Some(other) => rule.not_equal_to(&other).into(),
            None => rule.into(),
        })
        .build()
}

/// Only asked when the project runs in Wales.
pub fn contact_language_preference(ctx: &FormContext) -> Field {
    Field::builder("contactLanguagePreference", FieldType::Radio, ctx.locale)
        .label(
            "What language should we use to contact this person?",
            "Pa iaith y dylem ei defnyddio i gysylltu â'r person hwn?",
        )
        .options(vec![
            FieldOption::new("english", ctx.locale.pick("English", "Saesneg")),
            FieldOption::new("welsh", ctx.locale.pick("Welsh", "Cymraeg")),
        ])
        .message(ErrorType::Base, "Select a language", "Dewiswch iaith")
        .schema_with(|rule| {
            Schema::only_if(
                "projectCountries",
                Condition::contains(Country::Wales.as_str()),
                rule.into(),
            )
        })
        .build()
}

pub fn contact_communication_needs(ctx: &FormContext) -> Field {
    Field::builder("contactCommunicationNeeds", FieldType::Text, ctx.locale)
        .label(
            "Does this contact have any communication needs?",
            "A oes gan y cyswllt hwn unrhyw anghenion cyfathrebu?",
        )
        .explanation(
            "For example, large print or British Sign Language",
            "Er enghraifft, print bras neu Iaith Arwyddion Prydain",
        )
        .max_length(COMMUNICATION_NEEDS_MAX_LENGTH)
        .optional()
        .message(
            ErrorType::StringMax,
            "Communication needs must be 255 characters or less",
            "Rhaid i'r anghenion cyfathrebu fod yn llai na 255 nod",
        )
        .build()
}

/// `£250,000` style formatting for whole pounds.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if amount < 0 {
        format!("-£{grouped}")
    } else {
        format!("£{grouped}")
    }
}

/// Listing overview: project name, country and requested amount/length.
pub fn summarise(ctx: &FormContext, catalog: &FieldCatalog, untitled: (&str, &str)) -> FormSummary {
    let title = data::text(&ctx.data, "projectName")
        .map(str::to_string)
        .unwrap_or_else(|| ctx.locale.pick(untitled.0, untitled.1));

    let selected = data::countries(&ctx.data);
    let country = match selected.as_slice() {
        [] => None,
        [country] => Some(country.localised_label(&ctx.locale)),
        _ => Some(ctx.locale.pick("Multiple countries", "Sawl gwlad")),
    };

    let mut overview = Vec::new();
    let location = data::text(&ctx.data, "projectLocation")
        .filter(|location| {
            locations::country_of(location).is_some_and(|country| selected == [country])
        })
        .and_then(|location| catalog.get("projectLocation").ok()?.option_label(location));
    if let Some(location) = location {
        overview.push(SummaryItem {
            label: ctx.locale.pick("Location", "Lleoliad"),
            value: location.to_string(),
        });
    }
    if let Some(amount) = ctx
        .data
        .get("projectCosts")
        .and_then(|value| parse_amount(value, true).ok())
    {
        overview.push(SummaryItem {
            label: ctx.locale.pick("Requested amount", "Swm y gofynnwyd amdano"),
            value: format_currency(amount),
        });
    }

    let duration = catalog
        .get("projectDurationYears")
        .ok()
        .filter(|field| field.is_included(&ctx.data))
        .and_then(|_| ctx.data.get("projectDurationYears"))
        .and_then(data::scalar_string)
        .or_else(|| auto_filled_duration(ctx).map(|years| years.to_string()));
    if let Some(years) = duration.and_then(|years| years.parse::<u32>().ok()) {
        overview.push(SummaryItem {
            label: ctx.locale.pick("Project length", "Hyd y prosiect"),
            value: years_label(ctx.locale, years),
        });
    }

    FormSummary {
        title,
        country,
        overview,
    }
}

/// The duration submitted on behalf of applicants who never see the
/// question.
pub fn auto_filled_duration(ctx: &FormContext) -> Option<u32> {
    data::single_country(&ctx.data)
        .filter(|country| ctx.settings.auto_fills_duration(*country))
        .map(|_| 1)
}

pub fn backfill_duration(ctx: &FormContext, mut value: Map<String, Value>) -> Map<String, Value> {
    if let Some(years) = auto_filled_duration(ctx) {
        value.insert("projectDurationYears".into(), json!(years));
    }
    value
}
