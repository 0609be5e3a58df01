use serde::Serialize;

use crate::classify::classifier::{Category, classify};
use crate::classify::descriptor::FieldDescriptor;
use crate::engine::notify::{ChangeNotifier, DomNotifier};
use crate::engine::settings::FillSettings;
use crate::engine::snapshot::{FieldValue, OriginalValues};
use crate::error::AutofillError;
use crate::generate::generator::{GeneratedValue, ValueGenerator};
use crate::page::locator::{is_visible, locate};
use crate::page::page_model::{FieldElement, FieldId, PageSnapshot};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::FillTraceEvent;

/// Result counts of one fill pass. `filled + skipped == total` always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FillOutcome {
    pub total: usize,
    pub filled: usize,
    pub skipped: usize,
}

/// The fill/restore engine. Owns the Original-Value Snapshot for its page
/// (one engine per tab/frame) and a seedable value generator; change
/// notification goes through the injected `ChangeNotifier`.
pub struct FillEngine {
    generator: ValueGenerator,
    snapshot: OriginalValues,
    notifier: Box<dyn ChangeNotifier>,
}

impl FillEngine {
    pub fn new() -> Self {
        Self {
            generator: ValueGenerator::new(),
            snapshot: OriginalValues::new(),
            notifier: Box::new(DomNotifier),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: ValueGenerator::with_seed(seed),
            snapshot: OriginalValues::new(),
            notifier: Box::new(DomNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Box<dyn ChangeNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn snapshot(&self) -> &OriginalValues {
        &self.snapshot
    }

    /// Run one fill pass over every visible eligible field, in locator order.
    ///
    /// Each field's pre-fill state is snapshotted before any skip decision,
    /// so a later `clear` restores it no matter what this pass did to it.
    /// A single field's failure never aborts the rest of the pass.
    pub fn fill(
        &mut self,
        page: &mut PageSnapshot,
        settings: &FillSettings,
        tracer: &TraceLogger,
    ) -> FillOutcome {
        let handles = locate(page);
        let total = handles.len();
        let mut filled = 0;
        let mut skipped = 0;

        self.snapshot.begin_fill_pass();

        for handle in handles {
            let Some(field) = page.field(handle).cloned() else {
                continue;
            };

            self.snapshot.record(handle, prior_value(&field));

            let descriptor = FieldDescriptor::extract(page, &field);
            let category = classify(&field, &descriptor);

            if settings.fill_empty_only && !field.value.trim().is_empty() {
                skipped += 1;
                tracer.log(&skip_event(handle, category, "has-value"));
                continue;
            }

            if settings.skip_passwords
                && (field.type_or_text() == "password" || category == Category::Password)
            {
                skipped += 1;
                tracer.log(&skip_event(handle, category, "password"));
                continue;
            }

            if field.is_select() && !settings.fill_dropdowns {
                skipped += 1;
                tracer.log(&skip_event(handle, category, "dropdowns-disabled"));
                continue;
            }

            match self.generator.generate(category, &field) {
                None => {
                    skipped += 1;
                    tracer.log(&skip_event(handle, category, "not-applicable"));
                }
                Some(value) => match apply(page, handle, &value) {
                    Ok(()) => {
                        self.notifier.notify(page, handle);
                        if settings.visual_feedback {
                            self.notifier.highlight(page, handle);
                        }
                        filled += 1;
                        tracer.log(
                            &FillTraceEvent::now("fill")
                                .with_field(handle)
                                .with_category(category)
                                .with_outcome("filled"),
                        );
                    }
                    Err(e) => {
                        eprintln!("Warning: failed to fill field {}: {}", handle, e);
                        skipped += 1;
                        tracer.log(&skip_event(handle, category, "apply-failed"));
                    }
                },
            }
        }

        let outcome = FillOutcome { total, filled, skipped };
        tracer.log(
            &FillTraceEvent::now("fill-summary").with_fill_counts(total, filled, skipped),
        );
        outcome
    }

    /// Restore every snapshotted field that is still present and visible,
    /// then discard the snapshot. Fields removed from the DOM since the fill
    /// are silently skipped; restoration is best-effort.
    pub fn clear(&mut self, page: &mut PageSnapshot, tracer: &TraceLogger) -> usize {
        let mut cleared = 0;

        for (handle, prior) in self.snapshot.consume_for_clear() {
            let Some(field) = page.field(handle) else {
                continue;
            };
            if !is_visible(field) {
                continue;
            }

            let result = match &prior {
                FieldValue::Text(v) => page.set_value(handle, v),
                FieldValue::Checked(c) => page.set_checked(handle, *c),
            };

            match result {
                Ok(()) => {
                    self.notifier.notify(page, handle);
                    cleared += 1;
                    tracer.log(
                        &FillTraceEvent::now("clear")
                            .with_field(handle)
                            .with_outcome("restored"),
                    );
                }
                Err(e) => {
                    eprintln!("Warning: failed to restore field {}: {}", handle, e);
                }
            }
        }

        tracer.log(&FillTraceEvent::now("clear-summary").with_cleared(cleared));
        cleared
    }
}

impl Default for FillEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn prior_value(field: &FieldElement) -> FieldValue {
    if field.has_checked_state() {
        FieldValue::Checked(field.checked)
    } else {
        FieldValue::Text(field.value.clone())
    }
}

fn apply(
    page: &mut PageSnapshot,
    handle: FieldId,
    value: &GeneratedValue,
) -> Result<(), AutofillError> {
    match value {
        GeneratedValue::Text(v) => page.set_value(handle, v),
        GeneratedValue::Checked(c) => page.set_checked(handle, *c),
    }
}

fn skip_event(handle: FieldId, category: Category, reason: &str) -> FillTraceEvent {
    FillTraceEvent::now("fill")
        .with_field(handle)
        .with_category(category)
        .with_outcome(format!("skipped:{}", reason))
}
