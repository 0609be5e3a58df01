#![allow(dead_code)] // not every test binary uses every helper

use form_autofill::page::page_model::{
    FieldElement, FieldId, LabelElement, PageSnapshot, SelectOption,
};

/// Builder for visible, eligible fields. Tests override what they need.
pub struct FieldBuilder {
    field: FieldElement,
}

impl FieldBuilder {
    pub fn input(handle: FieldId) -> Self {
        Self {
            field: FieldElement {
                handle,
                tag: "input".into(),
                input_type: Some("text".into()),
                name: None,
                id: None,
                placeholder: None,
                aria_label: None,
                class_name: None,
                parent_label: None,
                value: String::new(),
                checked: false,
                disabled: false,
                read_only: false,
                min: None,
                max: None,
                options: vec![],
                offset_width: 120.0,
                offset_height: 24.0,
                client_rects: 1,
                detached: false,
            },
        }
    }

    pub fn textarea(handle: FieldId) -> Self {
        let mut b = Self::input(handle);
        b.field.tag = "textarea".into();
        b.field.input_type = None;
        b
    }

    pub fn select(handle: FieldId, option_values: &[&str]) -> Self {
        let mut b = Self::input(handle);
        b.field.tag = "select".into();
        b.field.input_type = None;
        b.field.options = option_values
            .iter()
            .map(|v| SelectOption {
                value: v.to_string(),
                text: v.to_string(),
                disabled: false,
            })
            .collect();
        b
    }

    pub fn with_type(mut self, t: &str) -> Self {
        self.field.input_type = Some(t.into());
        self
    }

    pub fn named(mut self, name: &str) -> Self {
        self.field.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.field.id = Some(id.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.field.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.field.class_name = Some(class.into());
        self
    }

    pub fn with_parent_label(mut self, text: &str) -> Self {
        self.field.parent_label = Some(text.into());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.field.value = value.into();
        self
    }

    pub fn checked(mut self) -> Self {
        self.field.checked = true;
        self
    }

    pub fn with_min_max(mut self, min: &str, max: &str) -> Self {
        self.field.min = Some(min.into());
        self.field.max = Some(max.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.field.disabled = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.field.read_only = true;
        self
    }

    pub fn detached(mut self) -> Self {
        self.field.detached = true;
        self
    }

    /// Zero layout box, no client rects: invisible per the predicate.
    pub fn invisible(mut self) -> Self {
        self.field.offset_width = 0.0;
        self.field.offset_height = 0.0;
        self.field.client_rects = 0;
        self
    }

    pub fn build(self) -> FieldElement {
        self.field
    }
}

pub fn page_with(fields: Vec<FieldElement>) -> PageSnapshot {
    PageSnapshot {
        url: Some("https://example.com/form".into()),
        title: "Test Page".into(),
        fields,
        labels: vec![],
        events: vec![],
        highlights: vec![],
    }
}

pub fn label(for_id: &str, text: &str) -> LabelElement {
    LabelElement {
        for_id: Some(for_id.into()),
        text: text.into(),
    }
}

pub fn fixture(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    let path = base.join("tests").join("fixtures").join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}
