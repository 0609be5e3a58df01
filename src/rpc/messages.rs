use serde::{Deserialize, Serialize};

use crate::engine::engine::FillOutcome;
use crate::engine::settings::FillSettings;

/// Inbound command from the popup collaborator. One-shot request/response;
/// the popup only ever sends these three actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action")]
pub enum Request {
    #[serde(rename = "detectForms")]
    DetectForms,
    #[serde(rename = "fillForms")]
    FillForms {
        #[serde(default)]
        settings: FillSettings,
    },
    #[serde(rename = "clearForms")]
    ClearForms,
}

/// Response to one request. Every request gets exactly one response, even
/// when zero fields were found (all counts 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Count { count: usize },
    Fill { total: usize, filled: usize, skipped: usize },
    Cleared { cleared: usize },
    Error { error: String },
}

impl Response {
    pub fn from_outcome(outcome: FillOutcome) -> Self {
        Response::Fill {
            total: outcome.total,
            filled: outcome.filled,
            skipped: outcome.skipped,
        }
    }
}
