use thiserror::Error;

/// Defects in a form definition. These are programming errors surfaced when a
/// form model is built, never user-facing validation failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("field '{0}' is not defined in the field catalog")]
    UnknownField(String),
    #[error("field '{0}' is defined more than once")]
    DuplicateField(String),
    #[error("section slug '{0}' is used more than once")]
    DuplicateSection(String),
    #[error("form '{0}' is not available")]
    UnknownForm(String),
}
