//! Company profile record definition.
//!
//! Every field is optional at the serialization boundary: a half-filled
//! profile file is valid input, and absent data simply counts as missing
//! during evaluation. Unknown keys are ignored for the same reason.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A company's stored profile, as entered through the employer dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CompanyProfile {
    /// Registered company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Free-text company description shown on the public profile page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Industry sector (e.g. "Software", "Hospitality").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// Headcount bracket (e.g. "1-10", "11-50", "500+").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,

    /// Primary office location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Year the company was founded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,

    /// Company website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Uploaded logo file reference. Tracked as an upload signal for the
    /// dashboard, never part of the completeness percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl CompanyProfile {
    /// Whether a logo has been uploaded (a non-blank file reference).
    pub fn has_logo(&self) -> bool {
        self.logo
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }
}
