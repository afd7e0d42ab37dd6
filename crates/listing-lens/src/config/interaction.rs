use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSettings {
    /// Jump to the definition line on a modifier click.
    pub navigate_on_modifier: bool,
    /// Line anchors are `#{anchor_prefix}{line}`.
    pub anchor_prefix: String,
    /// Ignore clicks that end a text selection.
    pub ignore_selection_clicks: bool,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            navigate_on_modifier: true,
            anchor_prefix: "L".to_string(),
            ignore_selection_clicks: false,
        }
    }
}

impl InteractionSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: InteractionSettingsPatch,
    ) {
        if let Some(v) = patch.navigate_on_modifier {
            self.navigate_on_modifier = v;
        }
        if let Some(v) = patch.anchor_prefix {
            self.anchor_prefix = v;
        }
        if let Some(v) = patch.ignore_selection_clicks {
            self.ignore_selection_clicks = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.anchor_prefix = self.anchor_prefix.trim().trim_start_matches('#').to_string();
    }

    /// Anchor for a 0-based line.
    pub fn anchor_for_line(
        &self,
        line: u32,
    ) -> String {
        format!("#{}{}", self.anchor_prefix, u64::from(line) + 1)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct InteractionSettingsPatch {
    pub(crate) navigate_on_modifier: Option<bool>,
    pub(crate) anchor_prefix: Option<String>,
    pub(crate) ignore_selection_clicks: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
