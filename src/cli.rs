use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rental-quote", version, about = "Car rental quote server")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the quote server (default)
    Start,

    /// Price a trip without starting the server
    Quote(QuoteArgs),

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Pickup date (YYYY-MM-DD)
    #[arg(long)]
    pub pickup: NaiveDate,

    /// Dropoff date (YYYY-MM-DD)
    #[arg(long)]
    pub dropoff: NaiveDate,

    /// Driver age in years
    #[arg(long)]
    pub age: u32,

    /// Years the driver has held a license
    #[arg(long)]
    pub license_age: Option<u32>,

    /// Quote only this car class; all classes when omitted
    #[arg(long)]
    pub car_type: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
