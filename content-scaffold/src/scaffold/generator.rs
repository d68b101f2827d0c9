//! Content type scaffold generator
//!
//! This module coordinates the generation of every file for one content type:
//! - Controller, service and router stubs
//! - `schema.json`
//! - `<name>.settings.json` and `config/routes.json` (extended mode)
//!
//! Generation is split in two. [`ScaffoldGenerator::plan`] renders all files
//! in memory; [`ScaffoldGenerator::generate`] creates the directory set and
//! then writes the planned files in order. A failure stops the run for that
//! content type and leaves already-written files in place.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::attribute::AttributeMap;
use super::documents::{self, ModelSettingsDocument, RoutesDocument, SchemaDocument};
use super::naming::{ContentTypeName, NamingVariants};
use super::templates::{StubKind, StubLanguage, TemplateRegistry};
use crate::config::ScaffoldConfig;
use crate::error::{IoOperation, ScaffoldError};

/// Which artifact set to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Stubs plus `schema.json`
    #[default]
    Minimal,
    /// Minimal plus model settings and the routes table
    Extended,
}

/// One content type to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeSpec {
    /// Content type name
    pub name: ContentTypeName,
    /// Attributes, passed through to the documents unchanged
    #[serde(default)]
    pub attributes: AttributeMap,
    /// Artifact set
    #[serde(default)]
    pub mode: GenerationMode,
}

impl ContentTypeSpec {
    /// Minimal-mode spec for `name`
    pub fn new(name: &str, attributes: AttributeMap) -> Result<Self, ScaffoldError> {
        Ok(Self {
            name: ContentTypeName::new(name)?,
            attributes,
            mode: GenerationMode::Minimal,
        })
    }

    /// Switch to `mode`
    #[must_use]
    pub const fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Switch to extended mode
    #[must_use]
    pub const fn extended(self) -> Self {
        self.with_mode(GenerationMode::Extended)
    }
}

/// Artifact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Controller stub
    Controller,
    /// Service stub
    Service,
    /// Router stub
    Router,
    /// `schema.json`
    Schema,
    /// `<name>.settings.json`
    ModelSettings,
    /// `config/routes.json`
    RoutesConfig,
}

impl From<StubKind> for ArtifactKind {
    fn from(kind: StubKind) -> Self {
        match kind {
            StubKind::Controller => Self::Controller,
            StubKind::Service => Self::Service,
            StubKind::Router => Self::Router,
        }
    }
}

/// Represents a generated file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path relative to the api root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// What the file is
    pub kind: ArtifactKind,
    /// File description for user feedback
    pub description: String,
}

/// Files written for one content type
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Content type name
    pub name: ContentTypeName,
    /// Content type root directory
    pub root: PathBuf,
    /// Absolute paths of the files written, in write order
    pub files: Vec<PathBuf>,
}

/// Content type scaffold generator
pub struct ScaffoldGenerator {
    /// Directory holding one subdirectory per content type
    api_root: PathBuf,
    /// Stub source language
    language: StubLanguage,
    /// Template registry
    templates: TemplateRegistry,
}

impl ScaffoldGenerator {
    /// Create a generator writing under `api_root`
    pub fn new(api_root: impl Into<PathBuf>, language: StubLanguage) -> Result<Self, ScaffoldError> {
        Ok(Self {
            api_root: api_root.into(),
            language,
            templates: TemplateRegistry::new()?,
        })
    }

    /// Create a generator from loaded configuration
    pub fn from_config(config: &ScaffoldConfig) -> Result<Self, ScaffoldError> {
        Self::new(config.api_root.clone(), config.language)
    }

    /// Directory holding one subdirectory per content type
    #[must_use]
    pub fn api_root(&self) -> &Path {
        &self.api_root
    }

    /// Stub source language
    #[must_use]
    pub const fn language(&self) -> StubLanguage {
        self.language
    }

    /// Subdirectories created under `<api-root>/<name>`, in creation order
    #[must_use]
    pub fn directories(name: &ContentTypeName) -> Vec<PathBuf> {
        let name = name.as_str();
        vec![
            PathBuf::from(name).join("controllers"),
            PathBuf::from(name).join("services"),
            PathBuf::from(name).join("routes"),
            PathBuf::from(name).join("config"),
            PathBuf::from(name).join("models"),
            PathBuf::from(name).join("content-types").join(name),
        ]
    }

    /// Render every file for `spec` without touching the filesystem
    ///
    /// Paths are relative to the api root. Stubs come first, then the schema,
    /// then (extended mode) the model settings and routes table.
    pub fn plan(&self, spec: &ContentTypeSpec) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        let naming = spec.name.variants();
        let name = naming.name.as_str();
        let mut files = Vec::with_capacity(6);

        for kind in StubKind::ALL {
            files.push(self.stub_file(kind, &naming)?);
        }

        files.push(GeneratedFile {
            path: PathBuf::from(name)
                .join("content-types")
                .join(name)
                .join("schema.json"),
            content: documents::to_json(&SchemaDocument::new(&naming, &spec.attributes))?,
            kind: ArtifactKind::Schema,
            description: format!("Content type schema for {name}"),
        });

        if spec.mode == GenerationMode::Extended {
            files.push(GeneratedFile {
                path: PathBuf::from(name)
                    .join("models")
                    .join(format!("{name}.settings.json")),
                content: documents::to_json(&ModelSettingsDocument::new(&naming, &spec.attributes))?,
                kind: ArtifactKind::ModelSettings,
                description: format!("Model settings for {name}"),
            });
            files.push(GeneratedFile {
                path: PathBuf::from(name).join("config").join("routes.json"),
                content: documents::to_json(&RoutesDocument::new(&naming))?,
                kind: ArtifactKind::RoutesConfig,
                description: format!("REST routes for {}", naming.route_base),
            });
        }

        Ok(files)
    }

    /// Generate all files for `spec`
    ///
    /// Creates the directory set (existing directories and their contents are
    /// left alone), then overwrites each planned file.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Io`] naming the path and operation of the
    /// first filesystem failure. Files written before the failure remain.
    pub fn generate(&self, spec: &ContentTypeSpec) -> Result<GenerationReport, ScaffoldError> {
        // Everything is rendered before the first write
        let planned = self.plan(spec)?;
        let root = self.api_root.join(spec.name.as_str());

        for dir in Self::directories(&spec.name) {
            let path = self.api_root.join(dir);
            fs::create_dir_all(&path)
                .map_err(|e| ScaffoldError::io(IoOperation::CreateDir, &path, e))?;
            tracing::debug!(path = %path.display(), "directory ready");
        }

        let mut files = Vec::with_capacity(planned.len());
        for file in planned {
            let path = self.api_root.join(&file.path);
            fs::write(&path, &file.content)
                .map_err(|e| ScaffoldError::io(IoOperation::WriteFile, &path, e))?;
            tracing::debug!(path = %path.display(), description = %file.description, "wrote file");
            files.push(path);
        }

        tracing::info!(
            content_type = %spec.name,
            mode = ?spec.mode,
            files = files.len(),
            "Content Type '{}' created successfully!",
            spec.name
        );

        Ok(GenerationReport {
            name: spec.name.clone(),
            root,
            files,
        })
    }

    fn stub_file(&self, kind: StubKind, naming: &NamingVariants) -> Result<GeneratedFile, ScaffoldError> {
        let name = naming.name.as_str();
        let content = self.templates.render_stub(kind, self.language, naming)?;
        let path = PathBuf::from(name)
            .join(kind.directory())
            .join(format!("{name}.{}", self.language.extension()));

        Ok(GeneratedFile {
            path,
            content,
            kind: kind.into(),
            description: format!("Core {} for {}", kind.label(), naming.uid),
        })
    }
}
