use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Verbosity of the `listing_lens` target.
///
/// The binary turns the configured level into one `EnvFilter` directive,
/// `listing_lens=<level>`, and installs it on both its stderr and log file
/// layers. Both the library and the binary log under that target, and
/// `--verbose` replaces the directive with `listing_lens=debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directive enabling this level and everything more severe.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "listing_lens=error",
            LogLevel::Warn => "listing_lens=warn",
            LogLevel::Info => "listing_lens=info",
            LogLevel::Debug => "listing_lens=debug",
            LogLevel::Trace => "listing_lens=trace",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    pub level: LogLevel,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
        }
    }
}

impl LoggingSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: LoggingSettingsPatch,
    ) {
        if let Some(v) = patch.level {
            self.level = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct LoggingSettingsPatch {
    pub(crate) level: Option<LogLevel>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
