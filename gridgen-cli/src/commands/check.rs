//! Schema validation command
//!
//! Runs the full load-and-assemble pipeline over every schema without
//! writing anything, so schema errors surface in CI or before a commit.

use anyhow::{bail, Context, Result};
use console::{style, Emoji};
use gridgen::{Assembler, Schema};
use std::fs;

use super::generate::{module_stem, schema_files};
use crate::config::GeneratorConfig;

static SUCCESS: Emoji = Emoji("✓", "√");
static FAILURE: Emoji = Emoji("✗", "x");

/// Validate every schema in the input directory without writing output
pub struct CheckCommand {
    config: GeneratorConfig,
}

impl CheckCommand {
    /// Create a check command with resolved configuration
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Execute the validation pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema directory is unreadable, a schema
    /// file cannot be read, or any schema fails to parse or assemble.
    pub fn execute(&self) -> Result<()> {
        println!(
            "\n{} {}",
            style("Checking schemas in").cyan().bold(),
            style(self.config.schema_dir.display()).green().bold()
        );

        let assembler = Assembler::new(&self.config.import_path);
        let mut checked = 0_usize;
        let mut failures = 0_usize;

        for path in schema_files(&self.config.schema_dir)? {
            let module = module_stem(&path)?;
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read schema file: {}", path.display()))?;

            match Schema::from_json(&module, &raw).and_then(|schema| assembler.assemble(&schema)) {
                Ok(_) => {
                    checked += 1;
                    println!("  {SUCCESS} {}", style(path.display()).dim());
                }
                Err(err) => {
                    failures += 1;
                    println!("  {FAILURE} {}", style(err).red());
                }
            }
        }

        println!(
            "\n{} {} valid, {} failed",
            style("Done:").bold(),
            style(checked).green(),
            style(failures).red()
        );

        if failures > 0 {
            bail!("{failures} schema(s) failed validation");
        }

        Ok(())
    }
}
