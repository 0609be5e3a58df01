use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::classify::classifier::Category;
use crate::page::page_model::FieldId;

/// One JSONL trace record: a per-field decision during a fill or clear pass,
/// or a pass summary.
#[derive(Debug, Serialize)]
pub struct FillTraceEvent {
    pub timestamp_ms: u128,
    pub action: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleared: Option<usize>,
}

impl FillTraceEvent {
    pub fn now(action: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            action: action.to_string(),
            field: None,
            category: None,
            outcome: None,
            total: None,
            filled: None,
            skipped: None,
            cleared: None,
        }
    }

    pub fn with_field(mut self, field: FieldId) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(format!("{:?}", category));
        self
    }

    pub fn with_outcome(mut self, outcome: impl ToString) -> Self {
        self.outcome = Some(outcome.to_string());
        self
    }

    pub fn with_fill_counts(mut self, total: usize, filled: usize, skipped: usize) -> Self {
        self.total = Some(total);
        self.filled = Some(filled);
        self.skipped = Some(skipped);
        self
    }

    pub fn with_cleared(mut self, cleared: usize) -> Self {
        self.cleared = Some(cleared);
        self
    }
}
