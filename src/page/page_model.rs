use serde::{Deserialize, Serialize};

use crate::error::AutofillError;

/// Opaque handle to one form control, assigned by the DOM bridge at
/// extraction time. Stable for the lifetime of the snapshot.
pub type FieldId = u32;

/// One `<option>` of a `<select>` element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub disabled: bool,
}

/// One form control as extracted by the DOM bridge.
///
/// Textual attributes are kept exactly as extracted; lower-casing happens in
/// the descriptor, not here. Layout box info (`offsetWidth` / `offsetHeight`
/// / `clientRects` count) drives the visibility predicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldElement {
    pub handle: FieldId,
    pub tag: String,
    #[serde(rename = "type", default)]
    pub input_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub aria_label: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    /// Text of the nearest enclosing `<label>`, if any (`closest('label')`).
    #[serde(default)]
    pub parent_label: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub offset_width: f64,
    #[serde(default)]
    pub offset_height: f64,
    /// Number of client bounding rects the element reported.
    #[serde(default)]
    pub client_rects: u32,
    /// Set when the bridge could no longer resolve the node; writes fail.
    #[serde(default)]
    pub detached: bool,
}

impl FieldElement {
    pub fn is_select(&self) -> bool {
        self.tag.eq_ignore_ascii_case("select")
    }

    pub fn is_textarea(&self) -> bool {
        self.tag.eq_ignore_ascii_case("textarea")
    }

    /// Declared input type, lower-cased, defaulting to "text".
    pub fn type_or_text(&self) -> String {
        self.input_type
            .as_deref()
            .unwrap_or("text")
            .to_lowercase()
    }

    pub fn is_checkbox(&self) -> bool {
        self.type_or_text() == "checkbox"
    }

    pub fn is_radio(&self) -> bool {
        self.type_or_text() == "radio"
    }

    /// Checkboxes and radios carry boolean state; everything else a string.
    pub fn has_checked_state(&self) -> bool {
        self.is_checkbox() || self.is_radio()
    }
}

/// A `<label>` element, used for `for`-attribute lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelElement {
    #[serde(rename = "for", default)]
    pub for_id: Option<String>,
    #[serde(default)]
    pub text: String,
}

/// Synthetic framework-compatibility events dispatched after a value write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Input,
    Change,
    Blur,
}

/// Record of one dispatched event, in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedEvent {
    pub field: FieldId,
    pub kind: EventKind,
}

/// Transient highlight queued for the bridge; reverted after `duration_ms`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightCommand {
    pub field: FieldId,
    pub duration_ms: u64,
}

/// In-memory snapshot of one page's form controls, deserialized from the
/// bridge's extract output. Mutations accumulate in the event log and the
/// highlight queue; the session layer flushes them back to the browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldElement>,
    #[serde(default)]
    pub labels: Vec<LabelElement>,
    #[serde(skip)]
    pub events: Vec<DispatchedEvent>,
    #[serde(skip)]
    pub highlights: Vec<HighlightCommand>,
}

impl PageSnapshot {
    pub fn field(&self, handle: FieldId) -> Option<&FieldElement> {
        self.fields.iter().find(|f| f.handle == handle)
    }

    pub fn field_mut(&mut self, handle: FieldId) -> Option<&mut FieldElement> {
        self.fields.iter_mut().find(|f| f.handle == handle)
    }

    /// Write a string value to a field. Fails for unknown or detached nodes.
    pub fn set_value(&mut self, handle: FieldId, value: &str) -> Result<(), AutofillError> {
        let field = self
            .field_mut(handle)
            .ok_or(AutofillError::FieldNotFound { handle })?;
        if field.detached {
            return Err(AutofillError::DetachedNode { handle });
        }
        field.value = value.to_string();
        Ok(())
    }

    /// Write checked state to a checkbox or radio.
    pub fn set_checked(&mut self, handle: FieldId, checked: bool) -> Result<(), AutofillError> {
        let field = self
            .field_mut(handle)
            .ok_or(AutofillError::FieldNotFound { handle })?;
        if field.detached {
            return Err(AutofillError::DetachedNode { handle });
        }
        field.checked = checked;
        Ok(())
    }

    pub fn dispatch(&mut self, field: FieldId, kind: EventKind) {
        self.events.push(DispatchedEvent { field, kind });
    }

    /// Remove a field entirely, as if the page dropped the node.
    pub fn remove_field(&mut self, handle: FieldId) {
        self.fields.retain(|f| f.handle != handle);
    }

    /// Handles that received a change event this pass, in first-change order.
    /// These are the fields whose state the session must write back.
    pub fn changed_fields(&self) -> Vec<FieldId> {
        let mut seen = Vec::new();
        for ev in &self.events {
            if ev.kind == EventKind::Change && !seen.contains(&ev.field) {
                seen.push(ev.field);
            }
        }
        seen
    }

    pub fn drain_highlights(&mut self) -> Vec<HighlightCommand> {
        std::mem::take(&mut self.highlights)
    }
}
