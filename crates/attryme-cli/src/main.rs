mod commands;
mod terminal;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "attryme")]
#[command(version, about = "attryme - validate form descriptions from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one validation pass over a form file (.json or .toml)
    Check {
        /// Form file
        form: PathBuf,

        /// Report errors as an HTML list
        #[arg(long)]
        rich: bool,

        /// Answer every confirmation with OK
        #[arg(short, long, conflicts_with = "no")]
        yes: bool,

        /// Answer every confirmation with CANCEL
        #[arg(short, long)]
        no: bool,

        /// Print the result as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Configuration file
        #[arg(short, long, default_value = attryme::config::CONFIG_FILE)]
        config: PathBuf,
    },

    /// List the registered rule tags
    Rules,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            form,
            rich,
            yes,
            no,
            json,
            config,
        } => {
            let assume = match (yes, no) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let options = commands::check::CheckOptions {
                rich,
                assume,
                json,
            };
            let valid = commands::check::execute(&form, &config, options)?;
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Rules => {
            commands::rules::execute();
        }
    }

    Ok(())
}
