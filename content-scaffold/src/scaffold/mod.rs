//! Content type scaffold generator implementation
//!
//! This module turns a content type name and attribute map into the stubs and
//! JSON documents the runtime loads.

pub mod attribute;
pub mod batch;
pub mod documents;
pub mod generator;
pub mod naming;
pub mod templates;

pub use attribute::{
    AttributeDefinition, AttributeKind, AttributeMap, FieldSpec, RelationKind, ResourceUid,
};
pub use batch::{Batch, BatchOutcome};
pub use generator::{
    ArtifactKind, ContentTypeSpec, GeneratedFile, GenerationMode, GenerationReport,
    ScaffoldGenerator,
};
pub use naming::{ContentTypeName, NamingVariants};
pub use templates::{
    render_controller_stub, render_router_stub, render_service_stub, StubKind, StubLanguage,
    TemplateRegistry,
};
