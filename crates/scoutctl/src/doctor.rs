//! Doctor - diagnose the local Ollama setup.

use crate::llm_client::LlmClient;
use crate::ui::Ui;
use anyhow::Result;
use scout_common::ScoutConfig;
use serde::{Deserialize, Serialize};
use std::process::Command;

/// Snapshot of the Ollama setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaStatus {
    pub installed: bool,
    pub running: bool,
    pub model: String,
    pub model_present: bool,
}

/// Check if the ollama binary is on PATH.
fn is_installed() -> bool {
    Command::new("which")
        .arg("ollama")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Probe the full Ollama status.
pub async fn get_status(config: &ScoutConfig) -> Result<OllamaStatus> {
    let client = LlmClient::new(config)?;
    let running = client.is_available().await;
    let model_present = if running { client.has_model().await } else { false };

    Ok(OllamaStatus {
        installed: is_installed(),
        running,
        model: config.model.clone(),
        model_present,
    })
}

/// Run diagnostics and print a styled report.
pub async fn run(config: &ScoutConfig) -> Result<()> {
    let ui = Ui::auto();
    let status = get_status(config).await?;

    ui.section("Scout Doctor");

    if status.installed {
        ui.success("ollama binary found");
    } else {
        ui.warning("ollama binary not found on PATH");
        ui.info("  Install it from https://ollama.com");
    }

    if status.running {
        ui.success(&format!("Ollama is responding at {}", config.host));
    } else {
        ui.warning(&format!("Ollama is not responding at {}", config.host));
        ui.info("  Start it with: ollama serve");
    }

    if status.model_present {
        ui.success(&format!("model '{}' is available", status.model));
    } else if status.running {
        ui.warning(&format!("model '{}' is not installed", status.model));
        ui.info(&format!("  Pull it with: ollama pull {}", status.model));
    }

    println!();
    if status.running && status.model_present {
        ui.info("Screenings will use LLM-generated questions.");
    } else {
        ui.info("Screenings will fall back to the built-in question set.");
    }
    println!();

    Ok(())
}
