use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::text_pos::DEFAULT_TAB_WIDTH;

pub const MIN_TAB_WIDTH: usize = 1;
pub const MAX_TAB_WIDTH: usize = 16;
pub const DEFAULT_FILE_NAME: &str = "listing.ts";

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub tab_width: usize,
    /// Synthetic name the listing is analysed under.
    pub file_name: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl AnalysisSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: AnalysisSettingsPatch,
    ) {
        if let Some(v) = patch.tab_width {
            self.tab_width = v;
        }
        if let Some(v) = patch.file_name {
            self.file_name = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.tab_width = self.tab_width.clamp(MIN_TAB_WIDTH, MAX_TAB_WIDTH);
        self.file_name = self.file_name.trim().to_string();
        if self.file_name.is_empty() {
            self.file_name = DEFAULT_FILE_NAME.to_string();
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct AnalysisSettingsPatch {
    pub(crate) tab_width: Option<usize>,
    pub(crate) file_name: Option<String>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
