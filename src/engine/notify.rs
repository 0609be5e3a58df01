use crate::page::page_model::{EventKind, FieldId, HighlightCommand, PageSnapshot};

/// Highlight revert delay, matching the bridge's transient style fade.
pub const HIGHLIGHT_REVERT_MS: u64 = 800;

/// Capability seam for framework-compatible change notification and visual
/// feedback. Core fill/restore logic only calls this trait; it never touches
/// platform event APIs directly.
pub trait ChangeNotifier {
    /// Announce a value mutation to anything observing the field.
    fn notify(&self, page: &mut PageSnapshot, field: FieldId);

    /// Queue a transient, fire-and-forget highlight. Never blocks the pass.
    fn highlight(&self, page: &mut PageSnapshot, field: FieldId);
}

/// Default adapter: dispatches input, change and blur in that order, then
/// re-writes the value through the native property setter and redispatches
/// input. The double write defeats frameworks that intercept the native
/// value setter and would otherwise ignore the mutation.
pub struct DomNotifier;

impl ChangeNotifier for DomNotifier {
    fn notify(&self, page: &mut PageSnapshot, field: FieldId) {
        page.dispatch(field, EventKind::Input);
        page.dispatch(field, EventKind::Change);
        page.dispatch(field, EventKind::Blur);

        // Native-setter rewrite. Failure here (detached node) is ignored,
        // as the browser would ignore it.
        if let Some(value) = page.field(field).map(|f| f.value.clone()) {
            if page.set_value(field, &value).is_ok() {
                page.dispatch(field, EventKind::Input);
            }
        }
    }

    fn highlight(&self, page: &mut PageSnapshot, field: FieldId) {
        page.highlights.push(HighlightCommand {
            field,
            duration_ms: HIGHLIGHT_REVERT_MS,
        });
    }
}
