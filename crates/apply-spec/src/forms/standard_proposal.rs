//! Full proposal for funding above £10,000.

use serde_json::{Map, Value};

use crate::catalog::FieldCatalog;
use crate::error::DefinitionError;
use crate::field::{Field, FieldOption, FieldType, OptionGroup};
use crate::form::{FormContext, FormDefinition, FormSummary};
use crate::locale::{Locale, Localise};
use crate::rule::{Condition, ErrorType, Rule, Schema};
use crate::section::{Section, SectionGate};
use crate::step::{Fieldset, Step};

use super::shared::{self, ContactRole};

pub const MIN_REQUESTED_AMOUNT: i64 = 10_001;

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardProposal;

impl FormDefinition for StandardProposal {
    fn id(&self) -> &'static str {
        "standard-proposal"
    }

    fn title(&self, locale: Locale) -> String {
        locale.pick("Your funding proposal", "Eich cynnig am arian")
    }

    fn schema_version(&self) -> &'static str {
        "v1.2"
    }

    fn fields_for(&self, ctx: &FormContext) -> Result<FieldCatalog, DefinitionError> {
        FieldCatalog::new(vec![
            shared::project_name(ctx),
            shared::project_countries(ctx),
            shared::project_location(ctx),
            shared::project_location_description(ctx),
            shared::project_costs(ctx, Some(MIN_REQUESTED_AMOUNT), Some("projectTotalCost")),
            project_total_cost(ctx),
            shared::project_duration_years(ctx),
            shared::your_idea_project(ctx),
            shared::your_idea_community(ctx),
            shared::your_idea_activities(ctx),
            beneficiaries_groups_check(ctx),
            beneficiaries_groups(ctx),
            beneficiaries_groups_other(ctx),
            beneficiaries_ethnic_background(ctx),
            beneficiaries_gender(ctx),
            beneficiaries_age(ctx),
            beneficiaries_disabled_people(ctx),
            beneficiaries_religion(ctx),
            beneficiaries_religion_other(ctx),
            shared::organisation_legal_name(ctx),
            shared::organisation_trading_name(ctx),
            shared::organisation_address(ctx),
            shared::organisation_type(ctx, shared::ORGANISATION_TYPES),
            shared::organisation_sub_type(ctx),
            company_number(ctx),
            charity_number(ctx),
            education_number(ctx),
            accounting_year_date(ctx),
            total_income_year(ctx),
            senior_contact_role(ctx),
            shared::contact_name(ctx, ContactRole::Senior, true),
            shared::contact_date_of_birth(ctx, ContactRole::Senior),
            shared::contact_address(ctx, ContactRole::Senior, true),
            shared::contact_email(ctx, ContactRole::Senior, true),
            shared::contact_phone(ctx, ContactRole::Senior, true, true),
            shared::contact_name(ctx, ContactRole::Main, true),
            shared::contact_date_of_birth(ctx, ContactRole::Main),
            shared::contact_address(ctx, ContactRole::Main, true),
            shared::contact_email(ctx, ContactRole::Main, true),
            shared::contact_phone(ctx, ContactRole::Main, true, true),
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
        let fieldset = |names: &[&str]| -> Result<Fieldset, DefinitionError> {
            Ok(Fieldset::gated(catalog.pick(names)?, &ctx.data, ctx.mode))
        };
        let step = |en: &str, cy: &str, names: &[&str]| -> Result<Step, DefinitionError> {
            Ok(Step::new(locale.pick(en, cy), vec![fieldset(names)?]))
        };

        let your_project = Section::new(
            "your-project",
            locale.pick("Your project", "Eich prosiect"),
            vec![
                step("Project details", "Manylion y prosiect", &["projectName"])?,
                step("Project country", "Gwlad y prosiect", &["projectCountries"])?,
                step(
                    "Project location",
                    "Lleoliad y prosiect",
                    &["projectLocation", "projectLocationDescription"],
                )?,
                step(
                    "Project costs",
                    "Costau'r prosiect",
                    &["projectCosts", "projectTotalCost"],
                )?,
                step(
                    "Project duration",
                    "Hyd y prosiect",
                    &["projectDurationYears"],
                )?,
                step(
                    "Your idea",
                    "Eich syniad",
                    &["yourIdeaProject", "yourIdeaCommunity", "yourIdeaActivities"],
                )?,
            ],
        )
        .summary(locale.pick(
            "Tell us about your project",
            "Dywedwch wrthym am eich prosiect",
        ));

        let beneficiaries = Section::new(
            "beneficiaries",
            locale.pick("Who will benefit from your project", "Pwy fydd yn elwa o'ch prosiect"),
            vec![
                Step::new(
                    locale.pick("Specific groups of people", "Grwpiau penodol o bobl"),
                    vec![
                        fieldset(&["beneficiariesGroupsCheck"])?
                            .legend(locale.pick("Specific groups of people", "Grwpiau penodol o bobl"))
                            .introduction(locale.pick(
                                "We want to hear more about the people who will benefit from your project.",
                                "Rydym eisiau clywed mwy am y bobl a fydd yn elwa o'ch prosiect.",
                            )),
                    ],
                ),
                step(
                    "Groups of people",
                    "Grwpiau o bobl",
                    &["beneficiariesGroups", "beneficiariesGroupsOther"],
                )?,
                step(
                    "Ethnic background",
                    "Cefndir ethnig",
                    &["beneficiariesGroupsEthnicBackground"],
                )?,
                step("Gender", "Rhyw", &["beneficiariesGroupsGender"])?,
                step("Age", "Oed", &["beneficiariesGroupsAge"])?,
                step(
                    "Disabled people",
                    "Pobl anabl",
                    &["beneficiariesGroupsDisabledPeople"],
                )?,
                step(
                    "Religion or belief",
                    "Crefydd neu gred",
                    &["beneficiariesGroupsReligion", "beneficiariesGroupsReligionOther"],
                )?,
            ],
        )
        .gated_by(SectionGate::new("projectCountries", shared::england_only()));

        let organisation = Section::new(
            "organisation",
            locale.pick("Your organisation", "Eich sefydliad"),
            vec![
                step(
                    "Organisation details",
                    "Manylion y sefydliad",
                    &[
                        "organisationLegalName",
                        "organisationTradingName",
                        "organisationAddress",
                    ],
                )?,
                step(
                    "Organisation type",
                    "Math o sefydliad",
                    &["organisationType", "organisationSubType"],
                )?,
                step(
                    "Registration numbers",
                    "Rhifau cofrestru",
                    &["companyNumber", "charityNumber", "educationNumber"],
                )?,
                Step::new(
                    locale.pick("Organisation finances", "Cyllid y sefydliad"),
                    vec![
                        fieldset(&["accountingYearDate", "totalIncomeYear"])?.footer(locale.pick(
                            "Use the figures from your most recent annual accounts.",
                            "Defnyddiwch y ffigurau o'ch cyfrifon blynyddol diweddaraf.",
                        )),
                    ],
                ),
            ],
        );

        let senior_contact = Section::new(
            "senior-contact",
            locale.pick("Senior contact", "Uwch gyswllt"),
            vec![step(
                "Senior contact",
                "Uwch gyswllt",
                &[
                    "seniorContactRole",
                    "seniorContactName",
                    "seniorContactDateOfBirth",
                    "seniorContactAddress",
                    "seniorContactEmail",
                    "seniorContactPhone",
                ],
            )?],
        );

        let main_contact = Section::new(
            "main-contact",
            locale.pick("Main contact", "Prif gyswllt"),
            vec![Step::new(
                locale.pick("Main contact", "Prif gyswllt"),
                vec![
                    fieldset(&[
                        "contactName",
                        "contactDateOfBirth",
                        "contactAddress",
                        "contactEmail",
                        "contactPhone",
                        "contactLanguagePreference",
                        "contactCommunicationNeeds",
                    ])?
                    .legend(locale.pick("Main contact", "Prif gyswllt"))
                    .introduction(locale.pick(
                        "This person has to live in the UK and must be a different person from the senior contact.",
                        "Mae'n rhaid i'r person hwn fyw yn y DU a bod yn berson gwahanol i'r uwch gyswllt.",
                    )),
                ],
            )],
        );

        Ok(vec![
            your_project,
            beneficiaries,
            organisation,
            senior_contact,
            main_contact,
        ])
    }

    fn summary(&self, ctx: &FormContext, catalog: &FieldCatalog) -> FormSummary {
        shared::summarise(ctx, catalog, ("Untitled proposal", "Cynnig heb deitl"))
    }

    fn finalise_submission(&self, ctx: &FormContext, value: Map<String, Value>) -> Map<String, Value> {
        shared::backfill_duration(ctx, value)
    }
}

fn project_total_cost(ctx: &FormContext) -> Field {
    Field::builder("projectTotalCost", FieldType::Currency, ctx.locale)
        .label(
            "What is the total cost of your project?",
            "Beth yw cyfanswm cost eich prosiect?",
        )
        .explanation(
            "This is the cost of everything related to your project, even things you are not asking us to fund",
            "Dyma gost popeth sy'n gysylltiedig â'ch prosiect, hyd yn oed pethau nad ydych yn gofyn i ni eu hariannu",
        )
        .min(0)
        .message(
            ErrorType::NumberBase,
            "Total cost must be a real number",
            "Rhaid i'r cyfanswm cost fod yn rif go iawn",
        )
        .message(
            ErrorType::NumberInteger,
            "Use whole numbers only, eg. 12000",
            "Defnyddiwch rifau cyfan yn unig, e.e. 12000",
        )
        .message(
            ErrorType::Base,
            "Enter a total cost for your project",
            "Rhowch gyfanswm cost ar gyfer eich prosiect",
        )
        .build()
}

/// Beneficiary questions are only asked of England-only projects.
fn for_england(schema: Schema) -> Schema {
    Schema::only_if("projectCountries", shared::england_only(), schema)
}

/// Gated on the applicant saying yes to specific groups and picking `group`.
fn for_group(group: &'static str) -> impl FnOnce(Rule) -> Schema + 'static {
    move |rule| {
        for_england(Schema::only_if(
            "beneficiariesGroupsCheck",
            Condition::equals("yes"),
            Schema::only_if(
                "beneficiariesGroups",
                Condition::contains(group),
                rule.into(),
            ),
        ))
    }
}

fn for_groups_check(rule: Rule) -> Schema {
    for_england(Schema::only_if(
        "beneficiariesGroupsCheck",
        Condition::equals("yes"),
        rule.into(),
    ))
}

fn options(locale: Locale, copy: &[(&str, &str, &str)]) -> Vec<FieldOption> {
    copy.iter()
        .map(|(value, en, cy)| FieldOption::new(*value, locale.pick(en, cy)))
        .collect()
}

fn beneficiaries_groups_check(ctx: &FormContext) -> Field {
    Field::builder("beneficiariesGroupsCheck", FieldType::Radio, ctx.locale)
        .label(
            "Is your project aimed at a specific group of people?",
            "A yw eich prosiect wedi'i anelu at grŵp penodol o bobl?",
        )
        .options(vec![
            FieldOption::new("yes", ctx.locale.pick("Yes", "Ydy")).with_explanation(ctx.locale.pick(
                "For example, people of a particular ethnic background, gender, age or religious belief",
                "Er enghraifft, pobl o gefndir ethnig, rhyw, oedran neu gred grefyddol benodol",
            )),
            FieldOption::new("no", ctx.locale.pick("No", "Nac ydy")).with_explanation(ctx.locale.pick(
                "The project is open to everyone in the community",
                "Mae'r prosiect yn agored i bawb yn y gymuned",
            )),
        ])
        .message(
            ErrorType::Base,
            "Answer yes or no",
            "Atebwch ydw neu nac ydw",
        )
        .schema_with(|rule| for_england(rule.into()))
        .build()
}

fn beneficiaries_groups(ctx: &FormContext) -> Field {
    Field::builder("beneficiariesGroups", FieldType::Checkbox, ctx.locale)
        .label(
            "What specific groups is your project aimed at?",
            "At ba grwpiau penodol mae eich prosiect wedi'i anelu?",
        )
        .options(options(
            ctx.locale,
            &[
                (
                    "ethnic-background",
                    "People from a particular ethnic background",
                    "Pobl o gefndir ethnig penodol",
                ),
                ("gender", "People of a particular gender", "Pobl o ryw penodol"),
                ("age", "People of a particular age", "Pobl o oedran penodol"),
                ("disabled-people", "Disabled people", "Pobl anabl"),
                (
                    "religion",
                    "People with a particular religious belief",
                    "Pobl â chred grefyddol benodol",
                ),
                (
                    "lgbt",
                    "Lesbian, gay, or bisexual people",
                    "Pobl lesbiaidd, hoyw neu ddeurywiol",
                ),
                (
                    "caring-responsibilities",
                    "People with caring responsibilities",
                    "Pobl â chyfrifoldebau gofalu",
                ),
            ],
        ))
        .message(
            ErrorType::Base,
            "Select the specific group(s) of people your project is aimed at",
            "Dewiswch y grŵp(iau) penodol o bobl y mae eich prosiect wedi'i anelu atynt",
        )
        .schema_with(for_groups_check)
        .build()
}

fn beneficiaries_groups_other(ctx: &FormContext) -> Field {
    Field::builder("beneficiariesGroupsOther", FieldType::Text, ctx.locale)
        .label("Other", "Arall")
        .max_length(255)
        .optional()
        .message(
            ErrorType::StringMax,
            "Other specific groups must be 255 characters or less",
            "Rhaid i grwpiau penodol eraill fod yn llai na 255 nod",
        )
        .schema_with(for_groups_check)
        .build()
}

fn beneficiaries_ethnic_background(ctx: &FormContext) -> Field {
    let locale = ctx.locale;
    let group = |en: &str, cy: &str, copy: &[(&str, &str, &str)]| OptionGroup {
        label: locale.pick(en, cy),
        options: options(locale, copy),
    };

    Field::builder(
        "beneficiariesGroupsEthnicBackground",
        FieldType::Checkbox,
        ctx.locale,
    )
    .label("Ethnic background", "Cefndir ethnig")
    .explanation(
        "You told us that your project mostly benefits people from a particular ethnic background. Please tell us which one(s).",
        "Fe ddywedoch wrthym fod eich prosiect o fudd yn bennaf i bobl o gefndir ethnig penodol. Dywedwch wrthym pa un/rai.",
    )
    .optgroups(vec![
        group(
            "White",
            "Gwyn",
            &[
                (
                    "white-british",
                    "English / Welsh / Scottish / Northern Irish / British",
                    "Saesneg / Cymraeg / Albanaidd / Gwyddelig Gogleddol / Prydeinig",
                ),
                ("irish", "Irish", "Gwyddelig"),
                (
                    "gypsy-or-irish-traveller",
                    "Gypsy or Irish Traveller",
                    "Sipsi neu Deithiwr Gwyddelig",
                ),
                (
                    "white-other",
                    "Any other White background",
                    "Unrhyw gefndir Gwyn arall",
                ),
            ],
        ),
        group(
            "Mixed / Multiple ethnic groups",
            "Grwpiau ethnig cymysg / lluosog",
            &[(
                "mixed-background",
                "Mixed / Multiple ethnic background",
                "Cefndir ethnig cymysg / lluosog",
            )],
        ),
        group(
            "Asian / Asian British",
            "Asiaidd / Asiaidd Prydeinig",
            &[
                ("indian", "Indian", "Indiaidd"),
                ("pakistani", "Pakistani", "Pacistanaidd"),
                ("bangladeshi", "Bangladeshi", "Bangladeshaidd"),
                ("chinese", "Chinese", "Tsieineaidd"),
                (
                    "asian-other",
                    "Any other Asian background",
                    "Unrhyw gefndir Asiaidd arall",
                ),
            ],
        ),
        group(
            "Black / African / Caribbean / Black British",
            "Du / Affricanaidd / Caribiaidd / Du Prydeinig",
            &[
                ("african", "African", "Affricanaidd"),
                ("caribbean", "Caribbean", "Caribïaidd"),
                (
                    "black-other",
                    "Any other Black / African / Caribbean background",
                    "Unrhyw gefndir Du / Affricanaidd / Caribïaidd arall",
                ),
            ],
        ),
        group(
            "Other ethnic group",
            "Grŵp ethnig arall",
            &[
                ("arab", "Arab", "Arabaidd"),
                (
                    "other",
                    "Any other ethnic group",
                    "Unrhyw grŵp ethnig arall",
                ),
            ],
        ),
    ])
    .message(
        ErrorType::Base,
        "Select the ethnic background(s) of the people that will benefit from your project",
        "Dewiswch gefndir(oedd) ethnig y bobl a fydd yn elwa o'ch prosiect",
    )
    .schema_with(for_group("ethnic-background"))
    .build()
}

fn beneficiaries_gender(ctx: &FormContext) -> Field {
    Field::builder("beneficiariesGroupsGender", FieldType::Checkbox, ctx.locale)
        .label("Gender", "Rhyw")
        .options(options(
            ctx.locale,
            &[
                ("male", "Male", "Gwryw"),
                ("female", "Female", "Benyw"),
                ("trans", "Trans", "Traws"),
                ("non-binary", "Non-binary", "Anneuaidd"),
                ("intersex", "Intersex", "Rhyngrywiol"),
            ],
        ))
        .message(
            ErrorType::Base,
            "Select the gender(s) of the people that will benefit from your project",
            "Dewiswch ryw y bobl a fydd yn elwa o'ch prosiect",
        )
        .schema_with(for_group("gender"))
        .build()
}

fn beneficiaries_age(ctx: &FormContext) -> Field {
    Field::builder("beneficiariesGroupsAge", FieldType::Checkbox, ctx.locale)
        .label("Age", "Oed")
        .options(options(
            ctx.locale,
            &[
                ("0-12", "0-12", "0-12"),
                ("13-24", "13-24", "13-24"),
                ("25-64", "25-64", "25-64"),
                ("65+", "65+", "65+"),
            ],
        ))
        .message(
            ErrorType::Base,
            "Select the age group(s) of the people that will benefit from your project",
            "Dewiswch grŵp(iau) oedran y bobl a fydd yn elwa o'ch prosiect",
        )
        .schema_with(for_group("age"))
        .build()
}

fn beneficiaries_disabled_people(ctx: &FormContext) -> Field {
    Field::builder(
        "beneficiariesGroupsDisabledPeople",
        FieldType::Checkbox,
        ctx.locale,
    )
    .label("Disabled people", "Pobl anabl")
    .options(options(
        ctx.locale,
        &[
            (
                "sensory",
                "Disabled people with sensory impairments",
                "Pobl anabl â nam ar y synhwyrau",
            ),
            (
                "physical",
                "Disabled people with physical impairments",
                "Pobl anabl â namau corfforol",
            ),
            (
                "learning",
                "Disabled people with learning or mental difficulties",
                "Pobl anabl ag anawsterau dysgu neu feddyliol",
            ),
        ],
    ))
    .message(
        ErrorType::Base,
        "Select the disabled people that will benefit from your project",
        "Dewiswch y bobl anabl a fydd yn elwa o'ch prosiect",
    )
    .schema_with(for_group("disabled-people"))
    .build()
}

fn beneficiaries_religion(ctx: &FormContext) -> Field {
    Field::builder("beneficiariesGroupsReligion", FieldType::Checkbox, ctx.locale)
        .label("Religion or belief", "Crefydd neu gred")
        .options(options(
            ctx.locale,
            &[
                ("buddhist", "Buddhist", "Bwdhydd"),
                ("christian", "Christian", "Cristion"),
                ("jewish", "Jewish", "Iddew"),
                ("muslim", "Muslim", "Mwslim"),
                ("sikh", "Sikh", "Sikh"),
                ("no-religion", "No religion", "Dim crefydd"),
            ],
        ))
        .message(
            ErrorType::Base,
            "Select the religion(s) or belief(s) of the people that will benefit from your project",
            "Dewiswch grefydd(au) neu gred(oau) y bobl a fydd yn elwa o'ch prosiect",
        )
        .schema_with(for_group("religion"))
        .build()
}

fn beneficiaries_religion_other(ctx: &FormContext) -> Field {
    Field::builder(
        "beneficiariesGroupsReligionOther",
        FieldType::Text,
        ctx.locale,
    )
    .label("Other", "Arall")
    .max_length(255)
    .optional()
    .message(
        ErrorType::StringMax,
        "Other religions or beliefs must be 255 characters or less",
        "Rhaid i grefyddau neu gredoau eraill fod yn llai na 255 nod",
    )
    .schema_with(for_group("religion"))
    .build()
}

const CHARITY_TYPES: &[&str] = &[
    "unincorporated-registered-charity",
    "charitable-incorporated-organisation",
];

const EDUCATION_TYPES: &[&str] = &["school", "college-or-university"];

fn company_number(ctx: &FormContext) -> Field {
    Field::builder("companyNumber", FieldType::Text, ctx.locale)
        .label("Companies House number", "Rhif Tŷ'r Cwmnïau")
        .max_length(255)
        .message(
            ErrorType::Base,
            "Enter your organisation's Companies House number",
            "Rhowch rif Tŷ'r Cwmnïau eich sefydliad",
        )
        .schema_with(|rule| {
            Schema::only_if(
                "organisationType",
                Condition::equals("not-for-profit-company"),
                rule.into(),
            )
        })
        .build()
}

/// Required for charities, optional for companies that are also charities.
fn charity_number(ctx: &FormContext) -> Field {
    Field::builder("charityNumber", FieldType::Text, ctx.locale)
        .label("Charity registration number", "Rhif cofrestru elusen")
        .max_length(255)
        .message(
            ErrorType::Base,
            "Enter your organisation's charity number",
            "Rhowch rif elusen eich sefydliad",
        )
        .schema_with(|rule| {
            Schema::when(
                "organisationType",
                Condition::one_of(CHARITY_TYPES),
                rule.clone().into(),
                Schema::only_if(
                    "organisationType",
                    Condition::equals("not-for-profit-company"),
                    rule.optional().into(),
                ),
            )
        })
        .build()
}

fn education_number(ctx: &FormContext) -> Field {
    Field::builder("educationNumber", FieldType::Text, ctx.locale)
        .label("Department for Education number", "Rhif yr Adran Addysg")
        .max_length(255)
        .message(
            ErrorType::Base,
            "Enter your Department for Education number",
            "Rhowch eich rhif yr Adran Addysg",
        )
        .schema_with(|rule| {
            Schema::only_if(
                "organisationType",
                Condition::one_of(EDUCATION_TYPES),
                rule.into(),
            )
        })
        .build()
}

fn accounting_year_date(ctx: &FormContext) -> Field {
    Field::builder("accountingYearDate", FieldType::DayMonth, ctx.locale)
        .label(
            "What is your accounting year end date?",
            "Beth yw dyddiad diwedd eich blwyddyn ariannol?",
        )
        .explanation("For example: 31 03", "Er enghraifft: 31 03")
        .message(
            ErrorType::DayMonthBase,
            "Enter a real day and month",
            "Rhowch ddiwrnod a mis go iawn",
        )
        .message(
            ErrorType::Base,
            "Enter a day and month",
            "Rhowch ddiwrnod a mis",
        )
        .build()
}

fn total_income_year(ctx: &FormContext) -> Field {
    Field::builder("totalIncomeYear", FieldType::Currency, ctx.locale)
        .label(
            "What is your total income for the year?",
            "Beth yw cyfanswm eich incwm am y flwyddyn?",
        )
        .min(0)
        .message(
            ErrorType::NumberBase,
            "Total income must be a real number",
            "Rhaid i gyfanswm yr incwm fod yn rhif go iawn",
        )
        .message(
            ErrorType::NumberInteger,
            "Use whole numbers only, eg. 12000",
            "Defnyddiwch rifau cyfan yn unig, e.e. 12000",
        )
        .message(
            ErrorType::Base,
            "Enter a total income for the year",
            "Rhowch gyfanswm incwm am y flwyddyn",
        )
        .build()
}

/// `(value, English, Welsh)`
type RoleCopy = (&'static str, &'static str, &'static str);

const CHAIR: RoleCopy = ("chair", "Chair", "Cadeirydd");
const VICE_CHAIR: RoleCopy = ("vice-chair", "Vice-chair", "Is-gadeirydd");
const SECRETARY: RoleCopy = ("secretary", "Secretary", "Ysgrifennydd");
const TREASURER: RoleCopy = ("treasurer", "Treasurer", "Trysorydd");
const TRUSTEE: RoleCopy = ("trustee", "Trustee", "Ymddiriedolwr");
const COMPANY_DIRECTOR: RoleCopy = ("company-director", "Company Director", "Cyfarwyddwr cwmni");
const COMPANY_SECRETARY: RoleCopy = (
    "company-secretary",
    "Company Secretary",
    "Ysgrifennydd cwmni",
);
const HEAD_TEACHER: RoleCopy = ("head-teacher", "Head Teacher", "Pennaeth");
const CHANCELLOR: RoleCopy = ("chancellor", "Chancellor", "Canghellor");
const VICE_CHANCELLOR: RoleCopy = ("vice-chancellor", "Vice-chancellor", "Is-ganghellor");
const PARISH_CLERK: RoleCopy = ("parish-clerk", "Parish Clerk", "Clerc y plwyf");
const CHIEF_EXECUTIVE: RoleCopy = ("chief-executive", "Chief Executive", "Prif Weithredwr");
const DIRECTOR: RoleCopy = ("director", "Director", "Cyfarwyddwr");
const RELIGIOUS_LEADER: RoleCopy = ("religious-leader", "Religious leader", "Arweinydd crefyddol");

/// Roles a senior contact can hold, narrowed by the organisation type when
/// one has been chosen.
pub fn senior_roles(organisation_type: Option<&str>) -> Vec<RoleCopy> {
    match organisation_type {
        Some("unregistered-vco") => vec![CHAIR, VICE_CHAIR, SECRETARY, TREASURER],
        Some("unincorporated-registered-charity" | "charitable-incorporated-organisation") => {
            vec![TRUSTEE, CHAIR, VICE_CHAIR, TREASURER]
        }
        Some("not-for-profit-company") => vec![COMPANY_DIRECTOR, COMPANY_SECRETARY],
        Some("school" | "college-or-university") => {
            vec![HEAD_TEACHER, CHANCELLOR, VICE_CHANCELLOR]
        }
        Some("statutory-body") => vec![PARISH_CLERK, CHIEF_EXECUTIVE, DIRECTOR],
        Some("faith-group") => vec![RELIGIOUS_LEADER, CHAIR, TRUSTEE],
        _ => vec![
            CHAIR,
            VICE_CHAIR,
            SECRETARY,
            TREASURER,
            TRUSTEE,
            COMPANY_DIRECTOR,
            COMPANY_SECRETARY,
            HEAD_TEACHER,
            CHANCELLOR,
            VICE_CHANCELLOR,
            PARISH_CLERK,
            CHIEF_EXECUTIVE,
            DIRECTOR,
            RELIGIOUS_LEADER,
        ],
    }
}

fn senior_contact_role(ctx: &FormContext) -> Field {
    let roles = senior_roles(crate::data::text(&ctx.data, "organisationType"));

    Field::builder("seniorContactRole", FieldType::Radio, ctx.locale)
        .label("What is their role?", "Beth yw eu rôl?")
        .explanation(
            "The senior contact must hold a senior position in your organisation",
            "Rhaid i'r uwch gyswllt ddal swydd uwch yn eich sefydliad",
        )
        .options(options(ctx.locale, &roles))
        .message(
            ErrorType::AnyOnly,
            "Senior contact role is not valid for your type of organisation",
            "Nid yw rôl yr uwch gyswllt yn ddilys ar gyfer eich math o sefydliad",
        )
        .message(
            ErrorType::Base,
            "Choose a role for the senior contact",
            "Dewiswch rôl ar gyfer yr uwch gyswllt",
        )
        .build()
}
