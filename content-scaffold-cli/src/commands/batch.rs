//! Manifest-driven batch generation
//!
//! The manifest lists content types in generation order:
//!
//! ```json
//! {
//!   "contentTypes": [
//!     { "name": "author", "attributes": { "name": { "type": "string" } } },
//!     { "name": "store", "mode": "extended" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use content_scaffold::{Batch, ScaffoldConfig, ScaffoldGenerator};
use std::fs;
use std::path::PathBuf;

use super::{print_plan, run_batch, summarize};

/// Generate every content type listed in a JSON manifest
#[derive(Debug, Args)]
pub struct BatchCommand {
    /// Manifest file (`{"contentTypes": [...]}`)
    #[arg(value_name = "MANIFEST.json")]
    pub manifest: PathBuf,

    /// Print the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Attempt every entry even after a failure
    #[arg(long)]
    pub keep_going: bool,
}

impl BatchCommand {
    /// Read and parse the manifest
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid manifest.
    pub fn load(&self) -> Result<Batch> {
        let json = fs::read_to_string(&self.manifest)
            .with_context(|| format!("Failed to read manifest: {}", self.manifest.display()))?;
        Batch::from_json(&json)
            .with_context(|| format!("Invalid manifest: {}", self.manifest.display()))
    }

    /// Execute the batch command
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is invalid or any content type fails.
    pub fn execute(&self, config: &ScaffoldConfig) -> Result<()> {
        let batch = self.load()?;
        let generator =
            ScaffoldGenerator::from_config(config).context("Failed to create scaffold generator")?;

        if self.dry_run {
            return print_plan(&generator, &batch);
        }

        println!(
            "\n{} {} content types from {}",
            style("Generating").cyan().bold(),
            batch.len(),
            style(self.manifest.display()).green()
        );

        let outcome = run_batch(&generator, &batch, config.fail_fast && !self.keep_going)?;
        summarize(&outcome)
    }
}
