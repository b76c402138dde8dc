//! Certfolio CLI - certifications from the terminal
//!
//! Lists the same records the certifications page shows and extracts their
//! documents.

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::common::{open_store, site_config_from_cli};
use crate::commands::completions::run_completions;
use crate::commands::document::run_document;
use crate::commands::list::run_list;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let directive: tracing_subscriber::filter::Directive = "certfolio=info"
        .parse()
        .map_err(|error| CliError::Config(format!("invalid log directive: {error}")))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .init();

    let cli = Cli::parse();
    let config = site_config_from_cli(cli.supabase_url, cli.supabase_anon_key);

    match cli.command {
        Some(Commands::List { json }) => {
            let store = open_store(&config)?;
            run_list(&store, json).await?;
        }
        Some(Commands::Document { id, output }) => {
            let store = open_store(&config)?;
            run_document(&store, &id, output.as_deref()).await?;
        }
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            Cli::command().print_help().map_err(CliError::Io)?;
            println!();
        }
    }

    Ok(())
}
