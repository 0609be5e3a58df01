pub mod browser;
pub mod classify;
pub mod cli;
pub mod engine;
pub mod error;
pub mod generate;
pub mod page;
pub mod rpc;
pub mod trace;

use crate::engine::engine::{FillEngine, FillOutcome};
use crate::engine::settings::FillSettings;
use crate::page::page_model::PageSnapshot;
use crate::trace::logger::TraceLogger;

/// Run one fill pass over a page with a fresh engine. Convenience entry
/// point for embedders that don't need a clear pass afterwards; keep the
/// engine around (see `FillEngine`) when restoration matters.
pub fn fill_page(
    page: &mut PageSnapshot,
    settings: &FillSettings,
    seed: Option<u64>,
) -> FillOutcome {
    let mut engine = match seed {
        Some(s) => FillEngine::with_seed(s),
        None => FillEngine::new(),
    };
    engine.fill(page, settings, &TraceLogger::disabled())
}

/// Fill then immediately restore, returning both counts. Mostly useful for
/// dry-running a page snapshot: the page ends up in its original state.
pub fn fill_and_restore(
    page: &mut PageSnapshot,
    settings: &FillSettings,
    seed: Option<u64>,
) -> (FillOutcome, usize) {
    let tracer = TraceLogger::disabled();
    let mut engine = match seed {
        Some(s) => FillEngine::with_seed(s),
        None => FillEngine::new(),
    };
    let outcome = engine.fill(page, settings, &tracer);
    let cleared = engine.clear(page, &tracer);
    (outcome, cleared)
}
