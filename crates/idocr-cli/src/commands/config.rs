//! Config command - inspect or create configuration files.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use idocr_core::models::config::IdocrConfig;

use super::load_config;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration as JSON
    Show,

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "idocr.json")]
        path: PathBuf,
    },
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Show => {
            let config = load_config(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { path } => {
            IdocrConfig::default().save(&path)?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}
