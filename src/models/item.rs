//! Onboarding item configuration
//!
//! Items are authored as JSON by the host application, for example:
//!
//! ```json
//! {
//!   "headline": "Save your work",
//!   "details": "Click here to save.",
//!   "position": "right",
//!   "textAlign": "left",
//!   "descriptions": [
//!     { "language": "de", "headline": "Speichern", "details": "Hier klicken." }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::placement::Placement;

/// One translation of an item's text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LocalizedText {
    /// Language tag, compared by exact string equality
    pub language: String,
    pub headline: String,
    pub details: String,
}

impl LocalizedText {
    pub fn new(
        language: impl Into<String>,
        headline: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            headline: headline.into(),
            details: details.into(),
        }
    }
}

/// A single onboarding tip as configured by the host
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingItem {
    /// Default headline, used when no description matches the locale
    #[serde(default)]
    pub headline: String,

    /// Default detail text, used when no description matches the locale
    #[serde(default)]
    pub details: String,

    #[serde(default)]
    pub position: Placement,

    #[serde(default)]
    pub descriptions: Vec<LocalizedText>,

    /// Free-form alignment name; `None`, empty and `center` all mean centered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

impl OnboardingItem {
    pub fn new(headline: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            details: details.into(),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: Placement) -> Self {
        self.position = position;
        self
    }

    pub fn with_description(mut self, description: LocalizedText) -> Self {
        self.descriptions.push(description);
        self
    }

    pub fn with_text_align(mut self, text_align: impl Into<String>) -> Self {
        self.text_align = Some(text_align.into());
        self
    }

    /// Parse a single item from its JSON configuration
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse an ordered list of items from a JSON array
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
