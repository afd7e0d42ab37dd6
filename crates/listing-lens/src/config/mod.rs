//! Layered settings.
//!
//! One file per category. Every category has a public settings struct with
//! defaults and `normalize()`, and a private `*Patch` struct that accepts a
//! partial document. [`LensSettings`] reads TOML, either at the document root
//! or under a `[listing-lens]` table; both are applied when present.

pub(crate) mod analysis;
pub(crate) mod highlight;
pub(crate) mod interaction;
pub(crate) mod logging;

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::path::Path;

use analysis::AnalysisSettingsPatch;
pub use analysis::{AnalysisSettings, DEFAULT_FILE_NAME, MAX_TAB_WIDTH, MIN_TAB_WIDTH};
use highlight::HighlightSettingsPatch;
pub use highlight::HighlightSettings;
use interaction::InteractionSettingsPatch;
pub use interaction::InteractionSettings;
use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

pub const SETTINGS_SECTION_KEY: &str = "listing-lens";

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(String),
}

impl Display for SettingsError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read settings: {err}"),
            Self::Parse(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LensSettings {
    pub highlight: HighlightSettings,
    pub analysis: AnalysisSettings,
    pub interaction: InteractionSettings,
    pub logging: LoggingSettings,
}

impl LensSettings {
    pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
        let document: toml::Table = toml::from_str(source).map_err(|err| SettingsError::Parse(err.to_string()))?;
        let payload = serde_json::to_value(document).map_err(|err| SettingsError::Parse(err.to_string()))?;
        Ok(Self::default().merged_with_payload(&payload))
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Apply a partial settings document. A candidate table that fails to
    /// deserialize is skipped as a whole.
    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            match serde_json::from_value::<LensSettingsPatch>(candidate.clone()) {
                Ok(patch) => merged.apply_patch(patch),
                Err(err) => warn!("ignoring malformed settings: {err}"),
            }
        }

        merged.normalize();
        merged
    }

    fn apply_patch(
        &mut self,
        patch: LensSettingsPatch,
    ) {
        if let Some(p) = patch.highlight {
            self.highlight.apply_patch(p);
        }
        if let Some(p) = patch.analysis {
            self.analysis.apply_patch(p);
        }
        if let Some(p) = patch.interaction {
            self.interaction.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.highlight.normalize();
        self.analysis.normalize();
        self.interaction.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct LensSettingsPatch {
    highlight: Option<HighlightSettingsPatch>,
    analysis: Option<AnalysisSettingsPatch>,
    interaction: Option<InteractionSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = Vec::new();
    candidates.push(payload.clone());
    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }
    candidates
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
