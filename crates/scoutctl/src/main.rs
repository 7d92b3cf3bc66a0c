//! Scout Control - CLI for the screening assistant.

use anyhow::Result;
use clap::{Parser, Subcommand};
use scout_common::ScoutConfig;
use scoutctl::{doctor, logging, repl, ui::Ui};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scoutctl")]
#[command(about = "Scout - conversational technical screening assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive screening (the default)
    Screen {
        /// Directory for the exported JSON transcript
        #[arg(long)]
        output: Option<PathBuf>,

        /// Skip Ollama and use the built-in question set
        #[arg(long)]
        offline: bool,
    },

    /// Diagnose the local Ollama setup
    Doctor,

    /// Show or change configuration
    Config {
        /// Set a configuration value (key=value)
        #[arg(long)]
        set: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    let config = ScoutConfig::load()?;

    match cli.command {
        None => repl::run(&config, None, false).await,
        Some(Commands::Screen { output, offline }) => repl::run(&config, output, offline).await,
        Some(Commands::Doctor) => doctor::run(&config).await,
        Some(Commands::Config { set }) => config_command(config, set),
    }
}

fn config_command(mut config: ScoutConfig, set: Option<String>) -> Result<()> {
    let ui = Ui::auto();

    if let Some(assignment) = set {
        config.set_value(&assignment)?;
        config.save()?;
        ui.success(&format!("Set {}", assignment));
        return Ok(());
    }

    ui.section("Scout Configuration");
    println!("  model        {}", config.model);
    println!("  host         {}", config.host);
    println!("  timeout_secs {}", config.timeout_secs);
    println!(
        "  export_dir   {}",
        config
            .export_dir
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(current directory)".to_string())
    );
    println!();
    Ok(())
}
