use form_autofill::engine::engine::FillEngine;
use form_autofill::engine::notify::HIGHLIGHT_REVERT_MS;
use form_autofill::engine::settings::FillSettings;
use form_autofill::engine::snapshot::{FieldValue, OriginalValues};
use form_autofill::page::page_model::EventKind;
use form_autofill::trace::logger::TraceLogger;

mod common;
use common::{FieldBuilder, page_with};

fn quiet() -> TraceLogger {
    TraceLogger::disabled()
}

// =========================================================================
// Count identity
// =========================================================================

#[test]
fn filled_plus_skipped_equals_total() {
    let settings_variants = [
        FillSettings::default(),
        FillSettings { fill_empty_only: true, ..Default::default() },
        FillSettings { skip_passwords: true, ..Default::default() },
        FillSettings { fill_dropdowns: false, ..Default::default() },
    ];

    for settings in settings_variants {
        let mut page = page_with(vec![
            FieldBuilder::input(1).named("email").build(),
            FieldBuilder::input(2).with_type("password").build(),
            FieldBuilder::input(3).with_value("prefilled").build(),
            FieldBuilder::select(4, &["", "a", "b"]).build(),
            FieldBuilder::input(5).with_type("radio").build(),
            FieldBuilder::textarea(6).build(),
        ]);
        let mut engine = FillEngine::with_seed(1);
        let outcome = engine.fill(&mut page, &settings, &quiet());

        assert_eq!(outcome.total, 6, "settings {:?}", settings);
        assert_eq!(
            outcome.filled + outcome.skipped,
            outcome.total,
            "identity broken for {:?}",
            settings
        );
    }
}

#[test]
fn invisible_fields_are_excluded_from_total() {
    let mut page = page_with(vec![
        FieldBuilder::input(1).build(),
        FieldBuilder::input(2).invisible().build(),
        FieldBuilder::input(3).with_type("hidden").build(),
    ]);
    let mut engine = FillEngine::with_seed(1);
    let outcome = engine.fill(&mut page, &FillSettings::default(), &quiet());

    assert_eq!(outcome.total, 1);
    assert_eq!(page.fields[1].value, "", "invisible field untouched");
    assert_eq!(page.fields[2].value, "", "hidden field untouched");
}

// =========================================================================
// Skip settings
// =========================================================================

#[test]
fn skip_passwords_leaves_password_fields_unchanged() {
    let mut page = page_with(vec![
        // By declared type
        FieldBuilder::input(1).with_type("password").with_value("hunter2").build(),
        // By keyword classification only
        FieldBuilder::input(2).named("pwd_confirm").with_value("hunter2").build(),
    ]);
    let settings = FillSettings { skip_passwords: true, ..Default::default() };
    let mut engine = FillEngine::with_seed(1);
    let outcome = engine.fill(&mut page, &settings, &quiet());

    assert_eq!(outcome.filled, 0);
    assert_eq!(outcome.skipped, 2);
    assert_eq!(page.fields[0].value, "hunter2");
    assert_eq!(page.fields[1].value, "hunter2");
}

#[test]
fn without_skip_passwords_they_are_filled() {
    let mut page = page_with(vec![
        FieldBuilder::input(1).with_type("password").build(),
    ]);
    let mut engine = FillEngine::with_seed(1);
    let outcome = engine.fill(&mut page, &FillSettings::default(), &quiet());

    assert_eq!(outcome.filled, 1);
    assert!(page.fields[0].value.starts_with("SecurePass"));
}

#[test]
fn fill_empty_only_skips_prefilled_fields() {
    let mut page = page_with(vec![
        FieldBuilder::input(1).with_value("keep me").build(),
        FieldBuilder::input(2).with_value("   ").build(), // blank counts as empty
        FieldBuilder::input(3).build(),
    ]);
    let settings = FillSettings { fill_empty_only: true, ..Default::default() };
    let mut engine = FillEngine::with_seed(1);
    let outcome = engine.fill(&mut page, &settings, &quiet());

    assert_eq!(outcome.filled, 2);
    assert_eq!(outcome.skipped, 1);
    assert_eq!(page.fields[0].value, "keep me");
    assert_ne!(page.fields[1].value, "   ");
}

#[test]
fn dropdowns_are_skipped_when_disabled_in_settings() {
    let mut page = page_with(vec![
        FieldBuilder::select(1, &["", "a", "b"]).build(),
    ]);
    let settings = FillSettings { fill_dropdowns: false, ..Default::default() };
    let mut engine = FillEngine::with_seed(1);
    let outcome = engine.fill(&mut page, &settings, &quiet());

    assert_eq!(outcome.skipped, 1);
    assert_eq!(page.fields[0].value, "");
}

#[test]
fn select_with_no_eligible_option_counts_as_skipped() {
    let mut page = page_with(vec![
        FieldBuilder::select(1, &[""]).build(),
    ]);
    let mut engine = FillEngine::with_seed(1);
    let outcome = engine.fill(&mut page, &FillSettings::default(), &quiet());

    assert_eq!(outcome.total, 1);
    assert_eq!(outcome.filled, 0);
    assert_eq!(outcome.skipped, 1);
}

// =========================================================================
// Failure isolation
// =========================================================================

#[test]
fn detached_field_failure_does_not_abort_the_pass() {
    let mut page = page_with(vec![
        FieldBuilder::input(1).build(),
        FieldBuilder::input(2).detached().build(),
        FieldBuilder::input(3).build(),
    ]);
    let mut engine = FillEngine::with_seed(1);
    let outcome = engine.fill(&mut page, &FillSettings::default(), &quiet());

    assert_eq!(outcome.total, 3);
    assert_eq!(outcome.filled, 2);
    assert_eq!(outcome.skipped, 1);
    assert_ne!(page.fields[0].value, "");
    assert_eq!(page.fields[1].value, "", "detached field untouched");
    assert_ne!(page.fields[2].value, "");
}

// =========================================================================
// Round-trip restore
// =========================================================================

#[test]
fn fill_then_clear_restores_prior_state_exactly() {
    let mut page = page_with(vec![
        FieldBuilder::input(1).named("email").with_value("old@host").build(),
        FieldBuilder::input(2).with_type("checkbox").checked().build(),
        FieldBuilder::select(3, &["", "x", "y"]).with_value("x").build(),
        FieldBuilder::textarea(4).build(),
    ]);
    let mut engine = FillEngine::with_seed(2);
    let outcome = engine.fill(&mut page, &FillSettings::default(), &quiet());
    assert!(outcome.filled > 0);

    let cleared = engine.clear(&mut page, &quiet());
    assert_eq!(cleared, 4);
    assert_eq!(page.fields[0].value, "old@host");
    assert!(page.fields[1].checked);
    assert_eq!(page.fields[2].value, "x");
    assert_eq!(page.fields[3].value, "");
}

#[test]
fn skipped_fields_are_still_snapshotted_and_restored() {
    // skip_passwords leaves the field alone during fill, but the snapshot
    // still covers it, so a clear after a manual edit reverts it.
    let mut page = page_with(vec![
        FieldBuilder::input(1).with_type("password").with_value("hunter2").build(),
    ]);
    let settings = FillSettings { skip_passwords: true, ..Default::default() };
    let mut engine = FillEngine::with_seed(2);
    engine.fill(&mut page, &settings, &quiet());

    page.set_value(1, "manually typed").unwrap();

    let cleared = engine.clear(&mut page, &quiet());
    assert_eq!(cleared, 1);
    assert_eq!(page.fields[0].value, "hunter2");
}

#[test]
fn clear_consumes_the_snapshot() {
    let mut page = page_with(vec![FieldBuilder::input(1).build()]);
    let mut engine = FillEngine::with_seed(2);
    engine.fill(&mut page, &FillSettings::default(), &quiet());

    assert_eq!(engine.clear(&mut page, &quiet()), 1);
    assert_eq!(engine.clear(&mut page, &quiet()), 0, "second clear is a no-op");
}

#[test]
fn clear_without_fill_restores_nothing() {
    let mut page = page_with(vec![FieldBuilder::input(1).build()]);
    let mut engine = FillEngine::new();
    assert_eq!(engine.clear(&mut page, &quiet()), 0);
}

#[test]
fn fields_removed_since_fill_are_silently_skipped_on_clear() {
    let mut page = page_with(vec![
        FieldBuilder::input(1).build(),
        FieldBuilder::input(2).build(),
    ]);
    let mut engine = FillEngine::with_seed(2);
    engine.fill(&mut page, &FillSettings::default(), &quiet());

    page.remove_field(1);

    assert_eq!(engine.clear(&mut page, &quiet()), 1);
    assert_eq!(page.fields[0].value, "", "remaining field restored");
}

#[test]
fn each_fill_pass_starts_a_fresh_snapshot_generation() {
    let mut page = page_with(vec![FieldBuilder::input(1).with_value("first").build()]);
    let mut engine = FillEngine::with_seed(2);
    engine.fill(&mut page, &FillSettings::default(), &quiet());

    // Second pass snapshots the value written by the first one
    let after_first = page.fields[0].value.clone();
    engine.fill(&mut page, &FillSettings::default(), &quiet());
    engine.clear(&mut page, &quiet());

    assert_eq!(page.fields[0].value, after_first, "restores to second-pass prior, not the original");
}

// =========================================================================
// Notifications and highlight
// =========================================================================

#[test]
fn filled_field_gets_the_double_write_event_sequence() {
    let mut page = page_with(vec![FieldBuilder::input(1).build()]);
    let mut engine = FillEngine::with_seed(2);
    engine.fill(&mut page, &FillSettings::default(), &quiet());

    let kinds: Vec<EventKind> = page.events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![EventKind::Input, EventKind::Change, EventKind::Blur, EventKind::Input],
        "input/change/blur then native-setter input redispatch"
    );
}

#[test]
fn highlight_follows_visual_feedback_setting() {
    let mut page = page_with(vec![FieldBuilder::input(1).build()]);
    let mut engine = FillEngine::with_seed(2);
    engine.fill(&mut page, &FillSettings::default(), &quiet());
    assert_eq!(page.highlights.len(), 1);
    assert_eq!(page.highlights[0].duration_ms, HIGHLIGHT_REVERT_MS);

    let mut page = page_with(vec![FieldBuilder::input(1).build()]);
    let settings = FillSettings { visual_feedback: false, ..Default::default() };
    engine.fill(&mut page, &settings, &quiet());
    assert!(page.highlights.is_empty());
}

#[test]
fn clear_refires_change_notifications() {
    let mut page = page_with(vec![FieldBuilder::input(1).build()]);
    let mut engine = FillEngine::with_seed(2);
    engine.fill(&mut page, &FillSettings::default(), &quiet());
    page.events.clear();

    engine.clear(&mut page, &quiet());
    assert!(
        page.events.iter().any(|e| e.kind == EventKind::Change),
        "restore must notify observers"
    );
}

// =========================================================================
// Radio statistics (engine-level)
// =========================================================================

#[test]
fn radios_end_up_checked_about_thirty_percent_of_the_time() {
    let mut acted = 0;
    let runs = 500;

    for seed in 0..runs {
        let mut page = page_with(vec![
            FieldBuilder::input(1).with_type("radio").named("color").build(),
            FieldBuilder::input(2).with_type("radio").named("color").build(),
        ]);
        let mut engine = FillEngine::with_seed(seed);
        engine.fill(&mut page, &FillSettings::default(), &quiet());
        acted += page.fields.iter().filter(|f| f.checked).count();
    }

    // 1000 independent 30% rolls; the engine does not enforce group
    // exclusivity itself, so both siblings can end up checked.
    let expected = (runs * 2) as f64 * 0.3;
    let actual = acted as f64;
    assert!(
        (actual - expected).abs() < 60.0,
        "acted {} times, expected about {}",
        acted,
        expected
    );
}

// =========================================================================
// Snapshot store lifecycle
// =========================================================================

#[test]
fn snapshot_store_lifecycle() {
    let mut store = OriginalValues::new();
    assert!(store.is_empty());

    store.record(1, FieldValue::Text("a".into()));
    store.record(2, FieldValue::Checked(true));
    store.record(1, FieldValue::Text("b".into()));
    assert_eq!(store.len(), 2, "repeated handle overwrites");
    assert_eq!(store.get(1), Some(&FieldValue::Text("b".into())));

    store.begin_fill_pass();
    assert!(store.is_empty(), "new generation discards the old one");

    store.record(3, FieldValue::Text("c".into()));
    let drained = store.consume_for_clear();
    assert_eq!(drained.len(), 1);
    assert!(store.is_empty(), "consume empties the store");
}
