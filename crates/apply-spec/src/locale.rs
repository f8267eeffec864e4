use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Locales the application forms are published in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Cy,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Cy => "cy",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "en" => Ok(Locale::En),
            "cy" => Ok(Locale::Cy),
            other => Err(format!("unsupported locale '{other}'")),
        }
    }
}

/// A piece of copy in every supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Localised {
    pub en: String,
    pub cy: String,
}

impl Localised {
    pub fn new(en: impl Into<String>, cy: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            cy: cy.into(),
        }
    }
}

/// Resolves localised copy for the locale of the current request.
pub trait Localise {
    fn localise(&self, text: &Localised) -> String;

    /// Shorthand for one-off pairs that are never stored.
    fn pick(&self, en: &str, cy: &str) -> String {
        self.localise(&Localised::new(en, cy))
    }
}

impl Localise for Locale {
    fn localise(&self, text: &Localised) -> String {
        match self {
            Locale::En => text.en.clone(),
            Locale::Cy => text.cy.clone(),
        }
    }
}
