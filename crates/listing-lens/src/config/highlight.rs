use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

const DEFAULT_CONTAINER_CLASS: &str = "intelli-listing";
const DEFAULT_ITEM_CLASS: &str = "intelli-listing-item";
const DEFAULT_USAGE_CLASS: &str = "intelli-listing-usage";
const DEFAULT_DEFINITION_CLASS: &str = "intelli-listing-definition";

#[derive(Debug, Clone, PartialEq)]
pub struct HighlightSettings {
    pub container_class: String,
    pub item_class: String,
    pub usage_class: String,
    pub definition_class: String,
    /// Draw the defining occurrence with the definition class.
    pub mark_definition: bool,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            item_class: DEFAULT_ITEM_CLASS.to_string(),
            usage_class: DEFAULT_USAGE_CLASS.to_string(),
            definition_class: DEFAULT_DEFINITION_CLASS.to_string(),
            mark_definition: false,
        }
    }
}

impl HighlightSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: HighlightSettingsPatch,
    ) {
        if let Some(v) = patch.container_class {
            self.container_class = v;
        }
        if let Some(v) = patch.item_class {
            self.item_class = v;
        }
        if let Some(v) = patch.usage_class {
            self.usage_class = v;
        }
        if let Some(v) = patch.definition_class {
            self.definition_class = v;
        }
        if let Some(v) = patch.mark_definition {
            self.mark_definition = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        normalize_class(&mut self.container_class, DEFAULT_CONTAINER_CLASS);
        normalize_class(&mut self.item_class, DEFAULT_ITEM_CLASS);
        normalize_class(&mut self.usage_class, DEFAULT_USAGE_CLASS);
        normalize_class(&mut self.definition_class, DEFAULT_DEFINITION_CLASS);
        if self.usage_class == self.definition_class {
            self.usage_class = DEFAULT_USAGE_CLASS.to_string();
            self.definition_class = DEFAULT_DEFINITION_CLASS.to_string();
        }
    }
}

fn normalize_class(
    class: &mut String,
    default: &str,
) {
    *class = class.trim().to_string();
    if class.is_empty() || class.contains(char::is_whitespace) {
        *class = default.to_string();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct HighlightSettingsPatch {
    pub(crate) container_class: Option<String>,
    pub(crate) item_class: Option<String>,
    pub(crate) usage_class: Option<String>,
    pub(crate) definition_class: Option<String>,
    pub(crate) mark_definition: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
