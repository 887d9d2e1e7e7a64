//! autolog CLI - Kotlin code generator for auto-logged inputs
//!
//! Commands:
//! - `autolog generate` - Generate `<Name>AutoLogged.kt` classes
//! - `autolog check` - Run the generator without writing files

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod codegen;
mod config;
mod generate;
mod logging;
mod writer;

use generate::{ReportFormat, RunOptions};

#[derive(Parser)]
#[command(name = "autolog")]
#[command(author, version, about = "Code generator for auto-logged input classes", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Kotlin auto-logged classes
    Generate {
        /// Rust sources (.rs) or descriptor batches (.json)
        #[arg(short, long = "input", required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Output directory for generated code (overrides [output] dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package for classes read from Rust sources (overrides [output] package)
        #[arg(short, long)]
        package: Option<String>,

        /// Path to autolog.toml (default: ./autolog.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write a Make-style dependency file (overrides [output] depfile)
        #[arg(long)]
        depfile: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Run the generator and report diagnostics without writing files
    Check {
        /// Rust sources (.rs) or descriptor batches (.json)
        #[arg(short, long = "input", required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Package for classes read from Rust sources
        #[arg(short, long)]
        package: Option<String>,

        /// Path to autolog.toml (default: ./autolog.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Generate {
            inputs,
            output,
            package,
            config,
            depfile,
            format,
        } => {
            let options = RunOptions {
                inputs,
                package,
                config,
                format,
            };
            generate::run(&options, output, depfile)?;
        }
        Commands::Check {
            inputs,
            package,
            config,
            format,
        } => {
            let options = RunOptions {
                inputs,
                package,
                config,
                format,
            };
            generate::check(&options)?;
        }
    }

    Ok(())
}
