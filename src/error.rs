use std::fmt;
use std::process::ExitStatus;

#[derive(Debug)]
pub enum AutofillError {
    /// Field handle not present in the current page snapshot
    FieldNotFound { handle: u32 },

    /// Write against a node the bridge reported as detached
    DetachedNode { handle: u32 },

    /// Page snapshot file could not be read
    PageLoad { path: String, source: std::io::Error },

    /// Node.js bridge subprocess failed to spawn
    SubprocessSpawn { script: String, source: std::io::Error },

    /// Node.js bridge subprocess exited with non-zero status
    SubprocessFailed { script: String, status: ExitStatus, stderr: String },

    /// JSON parsing failed (bridge output, page file, or request)
    JsonParse { context: String, source: serde_json::Error },

    /// JSON serialization failed (command to the bridge)
    JsonSerialize { context: String, source: serde_json::Error },

    /// I/O with the bridge process failed (pipe closed, process died)
    SessionIO(String),

    /// Bridge answered but reported a failed command (ok=false)
    SessionProtocol { command: String, error: String },
}

impl fmt::Display for AutofillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutofillError::FieldNotFound { handle } => {
                write!(f, "Field {} not found in page snapshot", handle)
            }
            AutofillError::DetachedNode { handle } => {
                write!(f, "Field {} is detached from the document", handle)
            }
            AutofillError::PageLoad { path, source } => {
                write!(f, "Failed to read page snapshot '{}': {}", path, source)
            }
            AutofillError::SubprocessSpawn { script, source } => {
                write!(f, "Failed to spawn {} (is Node.js installed?): {}", script, source)
            }
            AutofillError::SubprocessFailed { script, status, stderr } => {
                write!(f, "{} exited with {}: {}", script, status, stderr)
            }
            AutofillError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            AutofillError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            AutofillError::SessionIO(msg) => {
                write!(f, "Bridge session I/O error: {}", msg)
            }
            AutofillError::SessionProtocol { command, error } => {
                write!(f, "Bridge command '{}' failed: {}", command, error)
            }
        }
    }
}

impl std::error::Error for AutofillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AutofillError::PageLoad { source, .. } => Some(source),
            AutofillError::SubprocessSpawn { source, .. } => Some(source),
            AutofillError::JsonParse { source, .. } => Some(source),
            AutofillError::JsonSerialize { source, .. } => Some(source),
            _ => None,
        }
    }
}
