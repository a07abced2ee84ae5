//! gridgen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use gridgen::assemble::DEFAULT_IMPORT_PATH;
use gridgen_cli_lib::commands::{CheckCommand, GenerateCommand};
use gridgen_cli_lib::config::GeneratorConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridgen")]
#[command(version)]
#[command(about = "Generate typed datatable artifacts from entity schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one module per schema plus the aggregate index
    Generate {
        /// Directory containing schema documents
        #[arg(long, env = "GRIDGEN_SCHEMA_DIR", default_value = "schemas")]
        schema_dir: PathBuf,

        /// Directory receiving generated modules
        #[arg(long, env = "GRIDGEN_OUTPUT_DIR", default_value = "generated")]
        output_dir: PathBuf,

        /// Path of the aggregate index file (default: <output-dir>/index.ts)
        #[arg(long, env = "GRIDGEN_INDEX_FILE")]
        index_file: Option<PathBuf>,

        /// Import path for the widget's type declarations
        #[arg(long, env = "GRIDGEN_IMPORT_PATH", default_value = DEFAULT_IMPORT_PATH)]
        import_path: String,
    },
    /// Validate schemas without writing any output
    Check {
        /// Directory containing schema documents
        #[arg(long, env = "GRIDGEN_SCHEMA_DIR", default_value = "schemas")]
        schema_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema_dir,
            output_dir,
            index_file,
            import_path,
        } => {
            let index_file = index_file.unwrap_or_else(|| output_dir.join("index.ts"));
            let config = GeneratorConfig {
                schema_dir,
                output_dir,
                index_file,
                import_path,
            };
            GenerateCommand::new(config).execute()?;
        }
        Commands::Check { schema_dir } => {
            let config = GeneratorConfig {
                schema_dir,
                ..GeneratorConfig::default()
            };
            CheckCommand::new(config).execute()?;
        }
    }

    Ok(())
}
