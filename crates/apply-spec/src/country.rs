use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::locale::{Localise, Localised};

/// UK nations an applicant can run a project in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Country {
    England,
    Scotland,
    Wales,
    NorthernIreland,
}

impl Country {
    pub const ALL: [Country; 4] = [
        Country::England,
        Country::Scotland,
        Country::Wales,
        Country::NorthernIreland,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::England => "england",
            Country::Scotland => "scotland",
            Country::Wales => "wales",
            Country::NorthernIreland => "northern-ireland",
        }
    }

    pub fn label(&self) -> Localised {
        match self {
            Country::England => Localised::new("England", "Lloegr"),
            Country::Scotland => Localised::new("Scotland", "Yr Alban"),
            Country::Wales => Localised::new("Wales", "Cymru"),
            Country::NorthernIreland => Localised::new("Northern Ireland", "Gogledd Iwerddon"),
        }
    }

    pub fn localised_label(&self, locale: &impl Localise) -> String {
        locale.localise(&self.label())
    }
}

impl std::str::FromStr for Country {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|country| country.as_str() == value)
            .ok_or_else(|| format!("unknown country '{value}'"))
    }
}
