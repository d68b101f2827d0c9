//! Single content type generation
//!
//! ```bash
//! content-scaffold generate article \
//!   title:string \
//!   slug:uid:title \
//!   cover:media:images \
//!   author:relation:manyToOne:author \
//!   blocks:dynamiczone:shared.media,shared.quote \
//!   --extended
//! ```

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use content_scaffold::{
    Batch, ContentTypeSpec, FieldSpec, GenerationMode, GenerationReport, ScaffoldConfig,
    ScaffoldGenerator, StubLanguage,
};

use super::print_plan;

/// Generate one content type from field definitions
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Content type name (e.g. `author`, `orderdetails`)
    pub name: String,

    /// Attribute definitions in format name:type[:param]...[:modifier]...
    /// (e.g. `title:string:required`, `author:relation:manyToOne:author`)
    #[arg(value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Also write model settings and the routes table
    #[arg(long)]
    pub extended: bool,

    /// Print the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Build the content type from the arguments
    ///
    /// `--extended` wins over the configured default mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or any field definition is invalid.
    pub fn spec(&self, default_mode: GenerationMode) -> Result<ContentTypeSpec> {
        let attributes =
            FieldSpec::collect(self.fields.as_slice()).context("Invalid field definition")?;
        let mode = if self.extended {
            GenerationMode::Extended
        } else {
            default_mode
        };

        Ok(ContentTypeSpec::new(&self.name, attributes)
            .context("Invalid content type name")?
            .with_mode(mode))
    }

    /// Execute the generate command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name or a field definition is invalid
    /// - A directory or file cannot be written
    pub fn execute(&self, config: &ScaffoldConfig) -> Result<()> {
        let spec = self.spec(config.mode)?;
        let generator =
            ScaffoldGenerator::from_config(config).context("Failed to create scaffold generator")?;

        if self.dry_run {
            return print_plan(&generator, &Batch::new().with(spec));
        }

        println!(
            "\n{} {} {}",
            style("Generating content type").cyan().bold(),
            style(&spec.name).green().bold(),
            style("...").cyan().bold()
        );

        let report = generator
            .generate(&spec)
            .with_context(|| format!("Failed to generate content type '{}'", spec.name))?;

        for path in &report.files {
            let shown = path.strip_prefix(&report.root).unwrap_or(path);
            println!("  {} {}", style("✓").green(), style(shown.display()).dim());
        }

        println!(
            "\n{} Content Type '{}' created successfully!",
            style("✨").green().bold(),
            style(&spec.name).green().bold()
        );
        println!(
            "  {}",
            style(completion_summary(&report, generator.language())).dim()
        );

        Ok(())
    }
}

/// Where the files went and which stub language they use
#[must_use]
pub fn completion_summary(report: &GenerationReport, language: StubLanguage) -> String {
    format!(
        "{} files ({language} stubs) in {}",
        report.files.len(),
        report.root.display()
    )
}
