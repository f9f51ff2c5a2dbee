use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use forecast_core::{Config, ConditionRecorder, OutputFormat, Verbosity, init_logging};
use serde::Serialize;
use tracing::{debug, info};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Record a weather condition for a location")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use this config file instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a condition for a location and print the summary.
    Record {
        /// Location name, used verbatim.
        location: String,

        /// Weather condition description, used verbatim.
        condition: String,

        /// Output format; defaults to the configured one.
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Set the default output format.
    Configure {
        /// Skip the prompt and use this format.
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Print the effective configuration.
    ShowConfig,
}

#[derive(Debug, Serialize)]
struct RecordOutput<'a> {
    location: &'a str,
    condition: &'a str,
    summary: &'a str,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let (config, config_path) = match &self.config {
            Some(path) => (Config::load_from(path)?, path.clone()),
            None => (Config::load()?, Config::config_file_path()?),
        };

        init_logging(
            Verbosity::from_flags(self.quiet, self.verbose),
            config.log_level.as_deref(),
        );
        debug!(path = %config_path.display(), ?config, "loaded configuration");

        match self.command {
            Command::Record { location, condition, format } => {
                let mut recorder = ConditionRecorder::new();
                let summary = recorder.record_forecast(location, condition);

                match format.unwrap_or(config.output) {
                    OutputFormat::Text => println!("{summary}"),
                    OutputFormat::Json => {
                        let out = RecordOutput {
                            location: recorder.current_location(),
                            condition: recorder.current_condition(),
                            summary: &summary,
                        };
                        let json = serde_json::to_string_pretty(&out)
                            .context("Failed to serialize forecast to JSON")?;
                        println!("{json}");
                    }
                }
            }
            Command::Configure { format } => {
                let format = match format {
                    Some(format) => format,
                    None => {
                        inquire::Select::new("Default output format:", OutputFormat::all().to_vec())
                            .with_starting_cursor(starting_cursor(config.output))
                            .prompt()
                            .context("Output format selection aborted")?
                    }
                };

                let updated = Config { output: format, ..config };
                match &self.config {
                    Some(path) => updated.save_to(path)?,
                    None => updated.save()?,
                }
                info!(path = %config_path.display(), %format, "saved configuration");
                println!("Saved output format '{format}' to {}", config_path.display());
            }
            Command::ShowConfig => {
                println!("# {}", config_path.display());
                print!("{}", config.to_toml()?);
            }
        }

        Ok(())
    }
}

/// Index of `current` in the prompt's choice list.
fn starting_cursor(current: OutputFormat) -> usize {
    OutputFormat::all().iter().position(|f| *f == current).unwrap_or(0)
}
