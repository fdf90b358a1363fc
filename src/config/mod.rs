pub mod cli;
pub mod settings;

use crate::utils::error::Result;
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use settings::Settings;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ice-planner")]
#[command(about = "Hockey season cost planner")]
pub struct CliConfig {
    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    /// Directory holding the saved plan (overrides the settings file)
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Base URL for generated share links (overrides the settings file)
    #[arg(long)]
    pub share_base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the current cost breakdown
    Show,
    /// Set a field by wire key (teamName, logoUrl, iceHours, ...)
    Set { field: String, value: String },
    /// Increase a field by one step
    Inc { field: String },
    /// Decrease a field by one step
    Dec { field: String },
    /// Print a shareable link for the current plan
    Share,
    /// Load a pasted share link into the plan
    Import { url: String },
    /// Restore defaults and clear the saved plan
    Reset,
}

/// Effective configuration: CLI flags win over the settings file, which
/// wins over built-in defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: String,
    pub share_base_url: String,
}

impl AppConfig {
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let settings = match &cli.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        Ok(Self {
            data_dir: cli
                .data_dir
                .clone()
                .unwrap_or_else(|| settings.data_dir().to_string()),
            share_base_url: cli
                .share_base_url
                .clone()
                .unwrap_or_else(|| settings.share_base_url().to_string()),
        })
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_path("data_dir", &self.data_dir)?;
        crate::utils::validation::validate_url("share_base_url", &self.share_base_url)?;
        Ok(())
    }
}
