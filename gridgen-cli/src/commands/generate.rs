//! Artifact generation command
//!
//! The orchestrator is deliberately thin: enumerate schema inputs, load
//! and assemble each one to completion, write the per-schema documents,
//! then render the aggregate index once from the list of modules written
//! during this run. Data flows strictly one way; no output is read back.

use anyhow::{bail, Context, Result};
use console::{style, Emoji};
use gridgen::{render_index, Assembler, Schema};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::GeneratorConfig;

static SUCCESS: Emoji = Emoji("✓", "√");
static FAILURE: Emoji = Emoji("✗", "x");

/// Generate datatable artifacts for every schema in the input directory
pub struct GenerateCommand {
    config: GeneratorConfig,
}

impl GenerateCommand {
    /// Create a generate command with resolved configuration
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Execute the generation run.
    ///
    /// Parse and shape errors are scoped to the offending schema: they are
    /// reported, the schema produces no output file, and the run continues
    /// with the next input. I/O failures abort the whole run. The index
    /// covers exactly the modules written during this run.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema directory is unreadable, any output
    /// path is unwritable, or one or more schemas failed to generate —
    /// the process must signal non-zero completion in all three cases.
    pub fn execute(&self) -> Result<()> {
        println!(
            "\n{} {}",
            style("Generating datatable artifacts from").cyan().bold(),
            style(self.config.schema_dir.display()).green().bold()
        );

        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.config.output_dir.display()
            )
        })?;

        let assembler = Assembler::new(&self.config.import_path);
        let mut generated: Vec<String> = Vec::new();
        let mut failures = 0_usize;

        for path in schema_files(&self.config.schema_dir)? {
            let module = module_stem(&path)?;
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read schema file: {}", path.display()))?;

            let out_path = self.config.output_dir.join(format!("{module}.ts"));
            if out_path == self.config.index_file {
                failures += 1;
                println!(
                    "  {FAILURE} {}",
                    style(format!(
                        "{}: output would collide with the index file",
                        path.display()
                    ))
                    .red()
                );
                continue;
            }

            match Schema::from_json(&module, &raw).and_then(|schema| assembler.assemble(&schema)) {
                Ok(document) => {
                    fs::write(&out_path, document).with_context(|| {
                        format!("Failed to write file: {}", out_path.display())
                    })?;

                    println!("  {SUCCESS} {}", style(out_path.display()).dim());
                    generated.push(module);
                }
                Err(err) => {
                    failures += 1;
                    println!("  {FAILURE} {}", style(err).red());
                }
            }
        }

        if let Some(index) = render_index(&generated) {
            if let Some(parent) = self.config.index_file.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            fs::write(&self.config.index_file, index).with_context(|| {
                format!(
                    "Failed to write index file: {}",
                    self.config.index_file.display()
                )
            })?;

            println!(
                "  {SUCCESS} {}",
                style(self.config.index_file.display()).dim()
            );
        }

        println!(
            "\n{} {} generated, {} failed",
            style("Done:").bold(),
            style(generated.len()).green(),
            style(failures).red()
        );

        if failures > 0 {
            bail!("{failures} schema(s) failed to generate");
        }

        Ok(())
    }
}

/// Enumerate schema inputs: top-level `*.json` files, sorted by file name.
///
/// Files with any other extension are ignored.
pub(crate) fn schema_files(schema_dir: &Path) -> Result<Vec<PathBuf>> {
    if !schema_dir.is_dir() {
        bail!("Schema directory does not exist: {}", schema_dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(schema_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| {
            format!("Failed to read schema directory: {}", schema_dir.display())
        })?;
        let path = entry.into_path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }

    tracing::debug!(count = files.len(), dir = %schema_dir.display(), "enumerated schema files");
    Ok(files)
}

/// Module name for a schema file: its base name without the extension
pub(crate) fn module_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(OsStr::to_str)
        .map(ToString::to_string)
        .with_context(|| format!("Schema file has no usable name: {}", path.display()))
}
