//! CLI command implementations

pub mod batch;
pub mod catalog;
pub mod generate;

pub use batch::BatchCommand;
pub use catalog::CatalogCommand;
pub use generate::GenerateCommand;

use anyhow::{bail, Context, Result};
use console::style;
use content_scaffold::{Batch, BatchOutcome, ScaffoldGenerator};
use indicatif::{ProgressBar, ProgressStyle};

/// Print every file `batch` would write, writing nothing
pub(crate) fn print_plan(generator: &ScaffoldGenerator, batch: &Batch) -> Result<()> {
    for spec in &batch.content_types {
        let files = generator
            .plan(spec)
            .with_context(|| format!("Failed to plan content type '{}'", spec.name))?;

        println!(
            "\n{} {} {}",
            style("Would generate").cyan().bold(),
            style(&spec.name).green().bold(),
            style(format!("({} files)", files.len())).dim()
        );
        for file in &files {
            println!(
                "  {} {} ({})",
                style("·").dim(),
                generator.api_root().join(&file.path).display(),
                style(&file.description).dim()
            );
        }
    }

    println!("\n{}", style("Dry run: nothing was written.").yellow());
    Ok(())
}

/// Run `batch` with a progress bar, one line per finished entry
pub(crate) fn run_batch(
    generator: &ScaffoldGenerator,
    batch: &Batch,
    fail_fast: bool,
) -> Result<BatchOutcome> {
    let progress = ProgressBar::new(u64::try_from(batch.len()).unwrap_or(u64::MAX));
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .context("Failed to set progress style")?
            .progress_chars("=> "),
    );

    let outcome = batch.run_with(generator, fail_fast, |spec, result| {
        match result {
            Ok(report) => progress.println(format!(
                "  {} {} ({} files)",
                style("✓").green(),
                style(&spec.name).bold(),
                report.files.len()
            )),
            Err(err) => progress.println(format!(
                "  {} {}: {err}",
                style("✗").red(),
                style(&spec.name).bold()
            )),
        }
        progress.inc(1);
        progress.set_message(spec.name.to_string());
    });

    progress.finish_and_clear();
    Ok(outcome)
}

/// Print the batch summary; an error if anything failed or was skipped
pub(crate) fn summarize(outcome: &BatchOutcome) -> Result<()> {
    println!(
        "\n{} {} generated, {} failed, {} skipped",
        style("Done:").cyan().bold(),
        outcome.succeeded.len(),
        outcome.failed.len(),
        outcome.skipped.len()
    );

    for name in &outcome.skipped {
        println!("  {} {} (skipped)", style("-").yellow(), name);
    }

    if let Some((name, err)) = outcome.failed.first() {
        bail!(
            "{} content type(s) failed; first failure in '{name}': {err}",
            outcome.failed.len()
        );
    }

    Ok(())
}
