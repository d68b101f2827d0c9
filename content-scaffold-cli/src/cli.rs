//! Command-line definitions and configuration resolution

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use content_scaffold::observability::ObservabilityConfig;
use content_scaffold::{ScaffoldConfig, StubLanguage};
use std::path::PathBuf;

use crate::commands::{BatchCommand, CatalogCommand, GenerateCommand};

/// content-scaffold command line
#[derive(Debug, Parser)]
#[command(name = "content-scaffold")]
#[command(version)]
#[command(about = "Generate Strapi-style content type modules", long_about = None)]
pub struct Cli {
    /// Flags shared by every subcommand
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Directory holding one subdirectory per content type (default: src/api)
    #[arg(long, global = true, value_name = "DIR")]
    pub api_root: Option<PathBuf>,

    /// Stub source language
    #[arg(long, global = true, value_enum)]
    pub language: Option<LanguageArg>,

    /// Configuration file (default: ./scaffold.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Stub language as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    /// TypeScript ES module stubs (`.ts`)
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    /// CommonJS stubs (`.js`)
    #[value(name = "javascript", alias = "js")]
    JavaScript,
}

impl From<LanguageArg> for StubLanguage {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::TypeScript => Self::TypeScript,
            LanguageArg::JavaScript => Self::JavaScript,
        }
    }
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate one content type
    ///
    /// Examples:
    ///   content-scaffold generate author name:string email:string
    ///   content-scaffold generate article title:string slug:uid:title \
    ///     author:relation:manyToOne:author --extended
    Generate(GenerateCommand),

    /// Generate every content type listed in a JSON manifest
    Batch(BatchCommand),

    /// Generate the built-in storefront catalog
    Catalog(CatalogCommand),
}

impl GlobalArgs {
    /// Load configuration, then apply command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `--config` file is missing, or if any
    /// configuration source is malformed.
    pub fn resolve_config(&self) -> Result<ScaffoldConfig> {
        let mut config = match &self.config {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                ScaffoldConfig::load_from(path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?
            }
            None => ScaffoldConfig::load().context("Failed to load configuration")?,
        };

        if let Some(api_root) = &self.api_root {
            config.api_root.clone_from(api_root);
        }
        if let Some(language) = self.language {
            config.language = language.into();
        }

        Ok(config)
    }

    /// Logging configuration selected by `--verbose` and `--log-json`
    #[must_use]
    pub fn observability(&self) -> ObservabilityConfig {
        let mut config = ObservabilityConfig::default();
        if self.verbose {
            config = config.verbose();
        }
        if self.log_json {
            config = config.with_json();
        }
        config
    }
}

impl Cli {
    /// Resolve configuration and run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or the subcommand fails.
    pub fn run(self) -> Result<()> {
        let config = self.global.resolve_config()?;
        tracing::debug!(?config, "configuration resolved");

        match self.command {
            Commands::Generate(cmd) => cmd.execute(&config),
            Commands::Batch(cmd) => cmd.execute(&config),
            Commands::Catalog(cmd) => cmd.execute(&config),
        }
    }
}
