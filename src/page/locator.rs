use crate::page::page_model::{FieldElement, FieldId, PageSnapshot};

/// Return the handles of all visible, eligible form controls, in document
/// order. Equivalent to the selector
/// `input:not([type=hidden]):not([type=submit]):not([type=button]):not([disabled]):not([readonly]),
///  textarea:not([disabled]):not([readonly]), select:not([disabled])`
/// filtered by the layout-box visibility predicate.
pub fn locate(page: &PageSnapshot) -> Vec<FieldId> {
    page.fields
        .iter()
        .filter(|f| is_eligible(f) && is_visible(f))
        .map(|f| f.handle)
        .collect()
}

/// Count of fillable fields. Read-only, no side effects.
pub fn detect(page: &PageSnapshot) -> usize {
    locate(page).len()
}

pub fn is_eligible(field: &FieldElement) -> bool {
    match field.tag.to_lowercase().as_str() {
        "input" => {
            !matches!(field.type_or_text().as_str(), "hidden" | "submit" | "button")
                && !field.disabled
                && !field.read_only
        }
        "textarea" => !field.disabled && !field.read_only,
        "select" => !field.disabled,
        _ => false,
    }
}

/// Visibility is inferred from layout box presence, not computed style:
/// nonzero rendered width or height, or at least one client rect.
pub fn is_visible(field: &FieldElement) -> bool {
    field.offset_width != 0.0 || field.offset_height != 0.0 || field.client_rects > 0
}
