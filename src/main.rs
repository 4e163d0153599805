use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use rental_quote::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // `start` initializes tracing itself once the configured level and format are known
    let needs_early_tracing = !matches!(args.get_command(), cli::Commands::Start);

    if needs_early_tracing {
        init_tracing("warn", "text");
    }

    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Quote(quote_args) => {
            commands::quote::execute(&args.config, &quote_args)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("Rental Quote v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
