use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::error::AutofillError;
use crate::page::page_model::{FieldId, HighlightCommand, PageSnapshot};

const BRIDGE_SCRIPT: &str = "node/dom-bridge/bridge_server.js";

/// One value write to flush back to the live page. Text-like controls and
/// selects carry `value`, checkboxes and radios carry `checked`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldWrite {
    pub handle: FieldId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// Request sent to bridge_server.js over stdin (one JSON line).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BridgeRequest {
    Navigate {
        cmd: &'static str,
        url: String,
    },
    Extract {
        cmd: &'static str,
    },
    Apply {
        cmd: &'static str,
        writes: Vec<FieldWrite>,
        highlights: Vec<HighlightCommand>,
    },
    Quit {
        cmd: &'static str,
    },
}

impl BridgeRequest {
    pub fn navigate(url: &str) -> Self {
        BridgeRequest::Navigate {
            cmd: "navigate",
            url: url.to_string(),
        }
    }

    pub fn extract() -> Self {
        BridgeRequest::Extract { cmd: "extract" }
    }

    pub fn apply(writes: Vec<FieldWrite>, highlights: Vec<HighlightCommand>) -> Self {
        BridgeRequest::Apply {
            cmd: "apply",
            writes,
            highlights,
        }
    }

    pub fn quit() -> Self {
        BridgeRequest::Quit { cmd: "quit" }
    }
}

/// Response received from bridge_server.js over stdout (one JSON line).
#[derive(Debug, Deserialize)]
pub struct BridgeResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub page: Option<PageSnapshot>,
    #[serde(default)]
    pub ready: Option<bool>,
}

/// A persistent browser bridge session.
///
/// Spawns a long-lived Node.js process that keeps a Chromium page open.
/// Commands are sent as NDJSON over stdin, responses read from stdout. The
/// bridge extracts page snapshots, applies field writes, dispatches the
/// framework-compatibility events natively and runs the timed highlight
/// fades on its side.
pub struct BridgeSession {
    child: Child,
    stdin: std::process::ChildStdin,
    reader: BufReader<std::process::ChildStdout>,
}

impl BridgeSession {
    /// Launch the bridge by spawning bridge_server.js. The script path can
    /// be overridden with FORM_AUTOFILL_BRIDGE.
    pub fn launch() -> Result<Self, AutofillError> {
        let script =
            std::env::var("FORM_AUTOFILL_BRIDGE").unwrap_or_else(|_| BRIDGE_SCRIPT.to_string());

        let mut child = Command::new("node")
            .arg(&script)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AutofillError::SubprocessSpawn {
                script: script.clone(),
                source: e,
            })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            AutofillError::SessionIO("Failed to capture stdin of bridge_server.js".into())
        })?;

        let stdout = child.stdout.take().ok_or_else(|| {
            AutofillError::SessionIO("Failed to capture stdout of bridge_server.js".into())
        })?;

        let mut reader = BufReader::new(stdout);

        // Wait for the ready signal
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|e| AutofillError::SessionIO(format!("Failed to read ready signal: {}", e)))?;

        let response: BridgeResponse =
            serde_json::from_str(line.trim()).map_err(|e| AutofillError::JsonParse {
                context: "bridge_server.js ready signal".into(),
                source: e,
            })?;

        if !response.ok || response.ready != Some(true) {
            return Err(AutofillError::SessionProtocol {
                command: "launch".into(),
                error: "Did not receive ready signal from bridge_server.js".into(),
            });
        }

        Ok(BridgeSession { child, stdin, reader })
    }

    /// Send a request and read the response.
    fn send(&mut self, request: &BridgeRequest) -> Result<BridgeResponse, AutofillError> {
        let json = serde_json::to_string(request).map_err(|e| AutofillError::JsonSerialize {
            context: "BridgeRequest".into(),
            source: e,
        })?;

        writeln!(self.stdin, "{}", json)
            .map_err(|e| AutofillError::SessionIO(format!("Failed to write to bridge stdin: {}", e)))?;
        self.stdin
            .flush()
            .map_err(|e| AutofillError::SessionIO(format!("Failed to flush bridge stdin: {}", e)))?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .map_err(|e| AutofillError::SessionIO(format!("Failed to read from bridge stdout: {}", e)))?;

        if line.trim().is_empty() {
            return Err(AutofillError::SessionIO(
                "Empty response from bridge (process may have died)".into(),
            ));
        }

        serde_json::from_str(line.trim()).map_err(|e| AutofillError::JsonParse {
            context: "bridge_server.js response".into(),
            source: e,
        })
    }

    /// Send a request and verify it succeeded.
    fn send_ok(
        &mut self,
        request: &BridgeRequest,
        command_name: &str,
    ) -> Result<BridgeResponse, AutofillError> {
        let response = self.send(request)?;
        if !response.ok {
            return Err(AutofillError::SessionProtocol {
                command: command_name.into(),
                error: response.error.unwrap_or_else(|| "Unknown error".into()),
            });
        }
        Ok(response)
    }

    pub fn navigate(&mut self, url: &str) -> Result<(), AutofillError> {
        self.send_ok(&BridgeRequest::navigate(url), "navigate")?;
        Ok(())
    }

    /// Extract the current page's form controls as a snapshot.
    pub fn extract(&mut self) -> Result<PageSnapshot, AutofillError> {
        let response = self.send_ok(&BridgeRequest::extract(), "extract")?;
        response.page.ok_or_else(|| AutofillError::SessionProtocol {
            command: "extract".into(),
            error: "No page in extract response".into(),
        })
    }

    /// Flush a fill pass back to the live page: every changed field's final
    /// state plus the queued highlight commands.
    pub fn apply(&mut self, page: &mut PageSnapshot) -> Result<(), AutofillError> {
        let writes = collect_writes(page);
        let highlights = page.drain_highlights();
        if writes.is_empty() && highlights.is_empty() {
            return Ok(());
        }
        self.send_ok(&BridgeRequest::apply(writes, highlights), "apply")?;
        Ok(())
    }

    /// Quit the bridge. Best-effort; never fails hard if the process is gone.
    pub fn quit(&mut self) -> Result<(), AutofillError> {
        let _ = self.send(&BridgeRequest::quit());
        let _ = self.child.wait();
        Ok(())
    }
}

impl Drop for BridgeSession {
    fn drop(&mut self) {
        let _ = self.quit();
    }
}

/// Turn the snapshot's change log into bridge writes: one write per field
/// that received a change event, carrying its final value or checked state.
pub fn collect_writes(page: &PageSnapshot) -> Vec<FieldWrite> {
    page.changed_fields()
        .into_iter()
        .filter_map(|handle| {
            let field = page.field(handle)?;
            Some(if field.has_checked_state() {
                FieldWrite {
                    handle,
                    value: None,
                    checked: Some(field.checked),
                }
            } else {
                FieldWrite {
                    handle,
                    value: Some(field.value.clone()),
                    checked: None,
                }
            })
        })
        .collect()
}
