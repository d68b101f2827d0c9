//! Configuration management for content-scaffold
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `SCAFFOLD_` prefix)
//! 2. `./scaffold.toml`, or the file passed to [`ScaffoldConfig::load_from`]
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # scaffold.toml
//! api_root = "src/api"
//! language = "typescript"
//! mode = "extended"
//! fail_fast = true
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use content_scaffold::config::ScaffoldConfig;
//!
//! # fn example() -> Result<(), content_scaffold::ScaffoldError> {
//! let config = ScaffoldConfig::load()?;
//! println!("writing to {}", config.api_root.display());
//! # Ok(())
//! # }
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::scaffold::{GenerationMode, StubLanguage};

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "scaffold.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SCAFFOLD_";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Directory holding one subdirectory per content type
    pub api_root: PathBuf,

    /// Stub source language
    pub language: StubLanguage,

    /// Default mode for content types generated from the CLI
    pub mode: GenerationMode,

    /// Stop a batch at the first failing content type
    pub fail_fast: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            api_root: PathBuf::from("src/api"),
            language: StubLanguage::TypeScript,
            mode: GenerationMode::Minimal,
            fail_fast: true,
        }
    }
}

impl ScaffoldConfig {
    /// Load defaults, then `./scaffold.toml` if present, then `SCAFFOLD_*`
    pub fn load() -> Result<Self, ScaffoldError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load defaults, then `path` if present, then `SCAFFOLD_*`
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ScaffoldError> {
        Ok(Self::figment(path.as_ref()).extract()?)
    }

    /// Provider chain backing [`ScaffoldConfig::load_from`]
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.api_root, PathBuf::from("src/api"));
        assert_eq!(config.language, StubLanguage::TypeScript);
        assert_eq!(config.mode, GenerationMode::Minimal);
        assert!(config.fail_fast);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = ScaffoldConfig::load_from("does-not-exist.toml").unwrap();
            assert_eq!(config, ScaffoldConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_precedence() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "scaffold.toml",
                r#"
                    api_root = "backend/src/api"
                    language = "javascript"
                    mode = "extended"
                "#,
            )?;
            jail.set_env("SCAFFOLD_FAIL_FAST", "false");
            jail.set_env("SCAFFOLD_MODE", "minimal");

            let config = ScaffoldConfig::load().unwrap();
            assert_eq!(config.api_root, PathBuf::from("backend/src/api"));
            assert_eq!(config.language, StubLanguage::JavaScript);
            assert_eq!(config.mode, GenerationMode::Minimal);
            assert!(!config.fail_fast);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("scaffold.toml", "language = \"cobol\"")?;
            assert!(ScaffoldConfig::load().is_err());
            Ok(())
        });
    }
}
