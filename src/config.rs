//! Editor settings.
//!
//! Settings toggle whether completion items carry their short detail and
//! long-form info text. Missing keys fall back to their defaults, so a
//! settings file only needs the keys it changes.

use serde::{Deserialize, Serialize};

/// Editor-facing toggles for the completion and tooltip adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorSettings {
    /// Attach the short detail label to completion items.
    pub auto_detail: bool,
    /// Attach the long-form info text to completion items.
    pub auto_info: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            auto_detail: true,
            auto_info: true,
        }
    }
}

impl EditorSettings {
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file.
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Write settings to a JSON file.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}
