use crate::engine::engine::FillEngine;
use crate::page::locator::detect;
use crate::page::page_model::PageSnapshot;
use crate::rpc::messages::{Request, Response};
use crate::trace::logger::TraceLogger;

/// Message dispatcher for the popup protocol. Answers every request; nothing
/// in here may propagate an error past the dispatch boundary, because a
/// throwing handler would leave the popup hanging.
pub struct MessageHandler {
    engine: FillEngine,
    tracer: TraceLogger,
}

impl MessageHandler {
    pub fn new(engine: FillEngine, tracer: TraceLogger) -> Self {
        Self { engine, tracer }
    }

    pub fn handle(&mut self, request: Request, page: &mut PageSnapshot) -> Response {
        match request {
            Request::DetectForms => Response::Count { count: detect(page) },
            Request::FillForms { settings } => {
                let outcome = self.engine.fill(page, &settings, &self.tracer);
                Response::from_outcome(outcome)
            }
            Request::ClearForms => Response::Cleared {
                cleared: self.engine.clear(page, &self.tracer),
            },
        }
    }

    /// Handle one raw JSON line. Malformed input yields an error response
    /// rather than a dropped request.
    pub fn handle_line(&mut self, line: &str, page: &mut PageSnapshot) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request, page),
            Err(e) => Response::Error {
                error: format!("Unrecognized request: {}", e),
            },
        }
    }
}
