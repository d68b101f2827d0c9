//! content-scaffold: content type module generator for Strapi-style backends
//!
//! Takes a content type name plus a declarative attribute map and writes the
//! resource layer a Strapi-style runtime expects to find on disk:
//!
//! - controller, service and router stubs bound to `api::<name>.<name>`
//! - the `schema.json` content type definition
//! - in extended mode, the legacy `<name>.settings.json` model document and a
//!   `config/routes.json` REST route table
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use content_scaffold::{
//!     AttributeDefinition, AttributeKind, AttributeMap, ContentTypeSpec, ScaffoldConfig,
//!     ScaffoldGenerator,
//! };
//!
//! # fn main() -> Result<(), content_scaffold::ScaffoldError> {
//! let mut attributes = AttributeMap::new();
//! attributes.insert("name".into(), AttributeDefinition::new(AttributeKind::String));
//! attributes.insert("email".into(), AttributeDefinition::new(AttributeKind::String));
//!
//! let generator = ScaffoldGenerator::from_config(&ScaffoldConfig::default())?;
//! let spec = ContentTypeSpec::new("author", attributes)?;
//! generator.generate(&spec)?;
//! # Ok(())
//! # }
//! ```
//!
//! Nothing generated is read back; the output belongs to the runtime that
//! loads it.

// Lint configuration is handled at the workspace level in Cargo.toml
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;

pub use config::ScaffoldConfig;
pub use error::ScaffoldError;
pub use scaffold::{
    AttributeDefinition, AttributeKind, AttributeMap, Batch, BatchOutcome, ContentTypeName,
    ContentTypeSpec, FieldSpec, GeneratedFile, GenerationMode, GenerationReport, NamingVariants,
    RelationKind, ResourceUid, ScaffoldGenerator, StubLanguage,
};

/// Result alias used throughout the library
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
