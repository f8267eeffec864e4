//! Concrete application flows and the registry that looks them up by id.

pub mod get_advice;
pub mod locations;
pub mod shared;
pub mod standard_proposal;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;
use crate::form::FormDefinition;

pub use get_advice::GetAdvice;
pub use standard_proposal::StandardProposal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FormId {
    #[default]
    StandardProposal,
    GetAdvice,
}

impl FormId {
    pub const ALL: [FormId; 2] = [FormId::StandardProposal, FormId::GetAdvice];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormId::StandardProposal => "standard-proposal",
            FormId::GetAdvice => "get-advice",
        }
    }
}

impl std::str::FromStr for FormId {
    type Err = DefinitionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FormId::ALL
            .into_iter()
            .find(|id| id.as_str() == value)
            .ok_or_else(|| DefinitionError::UnknownForm(value.to_string()))
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static STANDARD_PROPOSAL: StandardProposal = StandardProposal;
static GET_ADVICE: GetAdvice = GetAdvice;

pub fn form_definition(id: FormId) -> &'static dyn FormDefinition {
    match id {
        FormId::StandardProposal => &STANDARD_PROPOSAL,
        FormId::GetAdvice => &GET_ADVICE,
    }
}

/// Looks a flow up by its string id.
pub fn find_form(id: &str) -> Result<&'static dyn FormDefinition, DefinitionError> {
    id.parse().map(form_definition)
}
