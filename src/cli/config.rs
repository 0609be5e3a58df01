use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::engine::settings::FillSettings;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-autofill",
    version,
    about = "Heuristic form autofill: detect, classify and fill page form fields"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Seed for the value generator (deterministic output)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Path to the JSONL trace file (overrides config)
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Path to config file (default: form-autofill.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count the fillable fields of a page
    Detect {
        /// Page snapshot JSON file
        #[arg(long, conflicts_with = "url")]
        page: Option<String>,

        /// Live URL, extracted through the Node bridge
        #[arg(long)]
        url: Option<String>,
    },

    /// Run one fill pass over a page
    Fill {
        /// Page snapshot JSON file
        #[arg(long, conflicts_with = "url")]
        page: Option<String>,

        /// Live URL, filled through the Node bridge
        #[arg(long)]
        url: Option<String>,

        /// Write the filled page snapshot to this file (file mode only)
        #[arg(short, long)]
        out: Option<String>,

        /// Skip fields that already have a value
        #[arg(long, action = clap::ArgAction::Set)]
        fill_empty_only: Option<bool>,

        /// Leave password fields untouched
        #[arg(long, action = clap::ArgAction::Set)]
        skip_passwords: Option<bool>,

        /// Highlight filled fields briefly
        #[arg(long, action = clap::ArgAction::Set)]
        visual_feedback: Option<bool>,

        /// Fill select dropdowns
        #[arg(long, action = clap::ArgAction::Set)]
        fill_dropdowns: Option<bool>,
    },

    /// Answer detect/fill/clear requests line-by-line on stdin
    Serve {
        /// Page snapshot JSON file the requests operate on
        #[arg(long)]
        page: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-autofill.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fill: FillSettings,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-autofill.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Merge CLI flags over config-file settings. Resolution: CLI > config >
/// built-in defaults.
#[allow(clippy::too_many_arguments)]
pub fn resolve_settings(
    config: &AppConfig,
    fill_empty_only: Option<bool>,
    skip_passwords: Option<bool>,
    visual_feedback: Option<bool>,
    fill_dropdowns: Option<bool>,
) -> FillSettings {
    FillSettings {
        fill_empty_only: fill_empty_only.unwrap_or(config.fill.fill_empty_only),
        skip_passwords: skip_passwords.unwrap_or(config.fill.skip_passwords),
        visual_feedback: visual_feedback.unwrap_or(config.fill.visual_feedback),
        fill_dropdowns: fill_dropdowns.unwrap_or(config.fill.fill_dropdowns),
    }
}

/// Pick the trace path: CLI flag first, then config file. `None` disables
/// tracing.
pub fn resolve_trace_path<'a>(config: &'a AppConfig, cli_trace: Option<&'a str>) -> Option<&'a str> {
    cli_trace.or(config.trace.path.as_deref())
}
