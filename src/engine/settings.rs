use serde::{Deserialize, Serialize};

/// Per-invocation fill options, as sent by the popup collaborator. Settings
/// persistence is out of scope here; the engine only receives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillSettings {
    /// Skip fields that already contain a non-blank value.
    pub fill_empty_only: bool,
    /// Leave password fields (by type or by classification) untouched.
    pub skip_passwords: bool,
    /// Apply a transient highlight to each filled field.
    pub visual_feedback: bool,
    /// Whether select elements are eligible at all.
    pub fill_dropdowns: bool,
}

impl Default for FillSettings {
    fn default() -> Self {
        Self {
            fill_empty_only: false,
            skip_passwords: false,
            visual_feedback: true,
            fill_dropdowns: true,
        }
    }
}
