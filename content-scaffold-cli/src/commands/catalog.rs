//! Built-in storefront catalog generation

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use content_scaffold::catalog;
use content_scaffold::{GenerationMode, ScaffoldConfig, ScaffoldGenerator};

use super::{print_plan, run_batch, summarize};

/// Generate the built-in storefront catalog
#[derive(Debug, Args)]
pub struct CatalogCommand {
    /// Generate every entry in extended mode
    #[arg(long)]
    pub extended: bool,

    /// Print the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Attempt every entry even after a failure
    #[arg(long)]
    pub keep_going: bool,
}

impl CatalogCommand {
    /// Execute the catalog command
    ///
    /// # Errors
    ///
    /// Returns an error if any content type fails.
    pub fn execute(&self, config: &ScaffoldConfig) -> Result<()> {
        let mode = if self.extended {
            GenerationMode::Extended
        } else {
            config.mode
        };
        let batch = catalog::storefront(mode).context("Failed to build catalog")?;
        let generator =
            ScaffoldGenerator::from_config(config).context("Failed to create scaffold generator")?;

        if self.dry_run {
            return print_plan(&generator, &batch);
        }

        println!(
            "\n{} {} catalog content types into {}",
            style("Generating").cyan().bold(),
            batch.len(),
            style(config.api_root.display()).green()
        );

        let outcome = run_batch(&generator, &batch, config.fail_fast && !self.keep_going)?;
        summarize(&outcome)
    }
}
