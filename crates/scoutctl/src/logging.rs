//! Logging for scoutctl.
//!
//! Diagnostics go through tracing (SCOUT_LOG env filter, stderr).
//! Each finished screening also appends one JSONL record to an
//! XDG-compliant session log with a fallback chain.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Initialize tracing. Quiet by default; SCOUT_LOG=debug for detail.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("SCOUT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One line per finished screening session.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionLogEntry {
    /// ISO 8601 timestamp
    pub ts: String,

    /// Session ID
    pub session_id: Uuid,

    /// Final conversation step
    pub step: String,

    /// Whether all questions were answered
    pub completed: bool,

    /// Questions answered
    pub answered: usize,

    /// Whether the LLM was reachable for this session
    pub llm_available: bool,

    /// Duration in seconds
    pub duration_secs: u64,

    /// Export path if one was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<String>,
}

impl SessionLogEntry {
    /// Discover log file path with fallback chain.
    ///
    /// Priority:
    /// 1. $SCOUTCTL_LOG_FILE environment variable (explicit override)
    /// 2. $XDG_STATE_HOME/scout/sessions.jsonl
    /// 3. ~/.local/state/scout/sessions.jsonl
    fn discover_log_path() -> Option<String> {
        if let Ok(path) = std::env::var("SCOUTCTL_LOG_FILE") {
            return Some(path);
        }

        if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
            return Some(format!("{}/scout/sessions.jsonl", xdg_state));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(format!("{}/.local/state/scout/sessions.jsonl", home));
        }

        None
    }

    /// Append the entry to the session log, falling back to stdout when the
    /// file can't be written.
    pub fn write(&self) -> Result<(), std::io::Error> {
        let json = serde_json::to_string(self)?;

        if let Some(path) = Self::discover_log_path() {
            match Self::write_to_file(&json, &path) {
                Ok(()) => return Ok(()),
                Err(_) => {
                    println!("{}", json);
                    return Ok(());
                }
            }
        }

        println!("{}", json);
        Ok(())
    }

    fn write_to_file(json: &str, path: &str) -> Result<(), std::io::Error> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", json)?;
        Ok(())
    }

    /// Current timestamp in ISO 8601 format.
    pub fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }
}
