#![allow(missing_docs)]

pub mod application;
pub mod catalog;
pub mod check;
pub mod country;
pub mod data;
pub mod error;
pub mod field;
pub mod form;
pub mod forms;
pub mod locale;
pub mod progress;
pub mod rule;
pub mod section;
pub mod settings;
pub mod step;
pub mod validate;
pub mod visibility;

pub use application::{
    Application, ApplicationSummary, SubmittedApplication, effective_expiry, enrich_pending,
    enrich_submitted, merge_step_data,
};
pub use catalog::FieldCatalog;
pub use check::{CheckContext, check};
pub use country::Country;
pub use error::DefinitionError;
pub use field::{Field, FieldBuilder, FieldMessage, FieldOption, FieldType, OptionGroup};
pub use form::{FormContext, FormDefinition, FormModel, FormSummary, Metadata, Programme, SummaryItem};
pub use forms::{FormId, find_form, form_definition};
pub use locale::{Locale, Localise, Localised};
pub use progress::{FormProgress, ProgressStatus, SectionProgress, StepProgress};
pub use rule::{Check, Condition, Constraint, ErrorType, Issue, Rule, Schema};
pub use section::{Section, SectionGate};
pub use settings::EngineSettings;
pub use step::{Fieldset, Step};
pub use validate::{FieldError, ValidationMessage, ValidationResult, validate};
pub use visibility::{VisibilityMode, conditional_fields, visible_under};
