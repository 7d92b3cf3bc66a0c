//! REPL - the interactive screening conversation.
//!
//! Line-oriented loop over stdin: one user turn in, one engine reply out,
//! spinner while the model thinks, JSON export once the conversation ends.

use crate::engine::InterviewEngine;
use crate::llm_client::LlmClient;
use crate::logging::SessionLogEntry;
use crate::spinner::Spinner;
use crate::ui::Ui;
use anyhow::Result;
use scout_common::{ScoutConfig, ScreeningExport};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Run a full screening conversation.
///
/// `output_dir` overrides the configured export directory; `offline`
/// skips the Ollama probe and forces the rule-based fallback.
pub async fn run(config: &ScoutConfig, output_dir: Option<PathBuf>, offline: bool) -> Result<()> {
    let ui = Ui::auto();
    let started = Instant::now();

    let llm = if offline {
        None
    } else {
        connect_llm(&ui, config).await
    };
    let llm_available = llm.is_some();

    let mut engine = InterviewEngine::new(llm);
    ui.bot(&engine.greeting());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        ui.prompt();

        let input = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            Some(Err(e)) => {
                ui.error(&format!("Error reading input: {}", e));
                continue;
            }
            None => break, // EOF
        };

        if input.is_empty() {
            continue;
        }

        // REPL-level command, not a conversation turn.
        if input.eq_ignore_ascii_case("new") {
            engine.reset();
            ui.info("Starting a fresh screening.");
            ui.bot(&engine.greeting());
            continue;
        }

        let reply = if engine.llm_available() {
            let spinner = Spinner::new("thinking...");
            let reply = engine.process_message(&input).await;
            spinner.stop();
            reply
        } else {
            engine.process_message(&input).await
        };

        ui.bot(&reply.text);

        // Completion keeps the loop alive: the candidate can still ask
        // follow-ups or type 'new'. Only an exit word or EOF ends it.
        if reply.done {
            break;
        }
    }

    finish(&ui, &engine, config, output_dir, llm_available, started)
}

/// Probe Ollama; a warning (not an error) when unreachable.
async fn connect_llm(ui: &Ui, config: &ScoutConfig) -> Option<LlmClient> {
    let client = match LlmClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            ui.warning(&format!("Could not set up LLM client: {}", e));
            return None;
        }
    };

    if client.is_available().await {
        info!(model = config.model, "Ollama reachable");
        Some(client)
    } else {
        ui.warning("Ollama is not reachable - using the built-in question set.");
        ui.info("Run 'scoutctl doctor' for setup help.");
        None
    }
}

/// Export the session, print the summary, and append the session log.
fn finish(
    ui: &Ui,
    engine: &InterviewEngine,
    config: &ScoutConfig,
    output_dir: Option<PathBuf>,
    llm_available: bool,
    started: Instant,
) -> Result<()> {
    let session = engine.session();

    // Nothing worth exporting if the candidate left immediately.
    let export_path = if session.profile.collected_fields().is_empty() {
        None
    } else {
        // Summary first: it must reach the screen even if the export fails.
        ui.summary(session);
        println!();

        let dir = output_dir
            .or_else(|| config.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        let export = ScreeningExport::from_session(session);
        match export.write_to(&dir) {
            Ok(path) => {
                ui.success(&format!("Transcript exported to {}", path.display()));
                Some(path)
            }
            Err(e) => {
                ui.error(&format!("Failed to export transcript: {:#}", e));
                None
            }
        }
    };

    let entry = SessionLogEntry {
        ts: SessionLogEntry::now(),
        session_id: session.id,
        step: session.step.label().to_string(),
        completed: session.is_complete(),
        answered: session.transcript.len(),
        llm_available,
        duration_secs: started.elapsed().as_secs(),
        export_path: export_path.map(|p| p.display().to_string()),
    };
    if let Err(e) = entry.write() {
        tracing::warn!(error = %e, "failed to write session log");
    }

    Ok(())
}
