use chrono::{NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::country::Country;

/// Engine configuration supplied by the host.
///
/// Wall-clock dependent rules (minimum ages, expiry) read "today" from here so
/// hosts and tests can pin it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// Date treated as today; `None` uses the system clock.
    pub reference_date: Option<NaiveDate>,
    /// Pending England applications created before this date expire on it at
    /// the latest.
    pub england_cutover_date: Option<NaiveDate>,
    /// Countries whose single-country applicants skip the project duration
    /// question; submissions get a duration of one year.
    pub auto_duration_countries: Vec<Country>,
    /// Default for requests that do not say whether to show gated fields.
    pub show_all_fields: bool,
}

impl EngineSettings {
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    pub fn auto_fills_duration(&self, country: Country) -> bool {
        self.auto_duration_countries.contains(&country)
    }
}
