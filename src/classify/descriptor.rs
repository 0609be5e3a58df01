use crate::page::page_model::{FieldElement, PageSnapshot};

/// The bundle of lower-cased textual hints extracted from a field, used for
/// keyword classification. Built fresh per classification call; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub id: String,
    pub placeholder: String,
    pub aria_label: String,
    pub class_name: String,
    pub label: String,
}

impl FieldDescriptor {
    /// Extract the descriptor for one field. Label text is resolved via
    /// `label[for=<id>]` lookup first, then the nearest enclosing label.
    pub fn extract(page: &PageSnapshot, field: &FieldElement) -> Self {
        let mut label = String::new();

        if let Some(id) = field.id.as_deref()
            && !id.is_empty()
            && let Some(l) = page
                .labels
                .iter()
                .find(|l| l.for_id.as_deref() == Some(id))
        {
            label = l.text.to_lowercase();
        }

        if label.is_empty()
            && let Some(parent) = field.parent_label.as_deref()
        {
            label = parent.to_lowercase();
        }

        FieldDescriptor {
            name: lower(&field.name),
            id: lower(&field.id),
            placeholder: lower(&field.placeholder),
            aria_label: lower(&field.aria_label),
            class_name: lower(&field.class_name),
            label,
        }
    }

    /// All descriptor strings joined into one search haystack. Order matters
    /// for nothing here (matching is substring containment), but it is kept
    /// fixed anyway: name, id, placeholder, aria-label, class, label.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.name, self.id, self.placeholder, self.aria_label, self.class_name, self.label
        )
    }

    /// True if any of the keywords occurs anywhere in the haystack.
    /// Plain substring containment, not word-boundary aware: "name" matches
    /// inside "username".
    pub fn matches_any(&self, keywords: &[&str]) -> bool {
        let haystack = self.haystack();
        keywords.iter().any(|k| haystack.contains(k))
    }
}

fn lower(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").to_lowercase()
}
