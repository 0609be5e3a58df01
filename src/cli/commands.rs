use std::io::BufRead;

use crate::browser::session::BridgeSession;
use crate::engine::engine::FillEngine;
use crate::engine::settings::FillSettings;
use crate::error::AutofillError;
use crate::page::locator::detect;
use crate::page::page_model::PageSnapshot;
use crate::rpc::handler::MessageHandler;
use crate::trace::logger::TraceLogger;

/// Where a page comes from: a snapshot file or a live URL via the bridge.
#[derive(Debug, Clone)]
pub enum PageSource {
    File(String),
    Url(String),
}

impl PageSource {
    pub fn from_args(page: Option<String>, url: Option<String>) -> Result<Self, String> {
        match (page, url) {
            (Some(p), None) => Ok(PageSource::File(p)),
            (None, Some(u)) => Ok(PageSource::Url(u)),
            _ => Err("Provide exactly one of --page or --url".into()),
        }
    }
}

/// Load a page snapshot from a JSON file.
pub fn load_page(path: &str) -> Result<PageSnapshot, AutofillError> {
    let content = std::fs::read_to_string(path).map_err(|e| AutofillError::PageLoad {
        path: path.to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| AutofillError::JsonParse {
        context: format!("page snapshot '{}'", path),
        source: e,
    })
}

// ============================================================================
// detect subcommand
// ============================================================================

pub fn cmd_detect(source: &PageSource, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let count = match source {
        PageSource::File(path) => {
            let page = load_page(path)?;
            detect(&page)
        }
        PageSource::Url(url) => {
            let mut session = BridgeSession::launch()?;
            session.navigate(url)?;
            let page = session.extract()?;
            session.quit()?;
            detect(&page)
        }
    };

    if verbose > 0 {
        eprintln!("Detected fillable fields: {}", count);
    }
    println!("{}", count);
    Ok(())
}

// ============================================================================
// fill subcommand
// ============================================================================

pub fn cmd_fill(
    source: &PageSource,
    settings: &FillSettings,
    seed: Option<u64>,
    out: Option<&str>,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = match seed {
        Some(s) => FillEngine::with_seed(s),
        None => FillEngine::new(),
    };

    let (mut page, session) = match source {
        PageSource::File(path) => (load_page(path)?, None),
        PageSource::Url(url) => {
            let mut session = BridgeSession::launch()?;
            session.navigate(url)?;
            let page = session.extract()?;
            (page, Some(session))
        }
    };

    if verbose > 0 {
        eprintln!("Filling {} candidate fields...", detect(&page));
    }

    let outcome = engine.fill(&mut page, settings, tracer);

    if let Some(mut session) = session {
        session.apply(&mut page)?;
        session.quit()?;
    } else if let Some(out_path) = out {
        std::fs::write(out_path, serde_json::to_string_pretty(&page)?)?;
        if verbose > 0 {
            eprintln!("Wrote filled snapshot to {}", out_path);
        }
    }

    println!(
        "Filled {}/{} fields ({} skipped)",
        outcome.filled, outcome.total, outcome.skipped
    );
    Ok(())
}

// ============================================================================
// serve subcommand
// ============================================================================

/// Answer popup requests line-by-line on stdin, one JSON response per line
/// on stdout. Every request gets a response; malformed lines get an error
/// response rather than silence.
pub fn cmd_serve(
    page_path: &str,
    seed: Option<u64>,
    tracer: TraceLogger,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut page = load_page(page_path)?;
    let engine = match seed {
        Some(s) => FillEngine::with_seed(s),
        None => FillEngine::new(),
    };
    let mut handler = MessageHandler::new(engine, tracer);

    if verbose > 0 {
        eprintln!("Serving requests against {} ({} fields)", page_path, page.fields.len());
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handler.handle_line(&line, &mut page);
        println!("{}", serde_json::to_string(&response)?);
    }

    Ok(())
}
