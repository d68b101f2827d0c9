//! Ordered batches of content types
//!
//! A [`Batch`] is the explicit list of what gets generated. Entries run one
//! after another; each entry is complete (or failed) before the next starts,
//! so a failure in one content type never touches another's output.

use serde::{Deserialize, Serialize};

use super::generator::{ContentTypeSpec, GenerationReport, ScaffoldGenerator};
use super::naming::ContentTypeName;
use crate::error::ScaffoldError;

/// Ordered list of content types to generate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// Entries in generation order
    pub content_types: Vec<ContentTypeSpec>,
}

/// Result of running a batch
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Content types generated successfully, in order
    pub succeeded: Vec<GenerationReport>,
    /// Content types that failed, with their errors
    pub failed: Vec<(ContentTypeName, ScaffoldError)>,
    /// Entries not attempted because an earlier entry failed in fail-fast mode
    pub skipped: Vec<ContentTypeName>,
}

impl BatchOutcome {
    /// Whether every entry was generated
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

impl Batch {
    /// Empty batch
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content_types: Vec::new(),
        }
    }

    /// Append an entry
    #[must_use]
    pub fn with(mut self, spec: ContentTypeSpec) -> Self {
        self.content_types.push(spec);
        self
    }

    /// Append an entry in place
    pub fn push(&mut self, spec: ContentTypeSpec) {
        self.content_types.push(spec);
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.content_types.len()
    }

    /// Whether the batch has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content_types.is_empty()
    }

    /// Parse a JSON manifest (`{"contentTypes": [...]}`)
    pub fn from_json(json: &str) -> Result<Self, ScaffoldError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run every entry in order
    ///
    /// With `fail_fast`, the first failure stops the batch and the remaining
    /// entries are reported as skipped. Otherwise every entry is attempted.
    pub fn run(&self, generator: &ScaffoldGenerator, fail_fast: bool) -> BatchOutcome {
        self.run_with(generator, fail_fast, |_, _| {})
    }

    /// Like [`Batch::run`], calling `on_entry` after each attempted entry
    pub fn run_with<F>(&self, generator: &ScaffoldGenerator, fail_fast: bool, mut on_entry: F) -> BatchOutcome
    where
        F: FnMut(&ContentTypeSpec, Result<&GenerationReport, &ScaffoldError>),
    {
        let mut outcome = BatchOutcome::default();
        let mut entries = self.content_types.iter();

        for spec in entries.by_ref() {
            match generator.generate(spec) {
                Ok(report) => {
                    on_entry(spec, Ok(&report));
                    outcome.succeeded.push(report);
                }
                Err(err) => {
                    tracing::warn!(content_type = %spec.name, error = %err, "generation failed");
                    on_entry(spec, Err(&err));
                    outcome.failed.push((spec.name.clone(), err));
                    if fail_fast {
                        break;
                    }
                }
            }
        }

        outcome.skipped = entries.map(|spec| spec.name.clone()).collect();
        outcome
    }
}

impl FromIterator<ContentTypeSpec> for Batch {
    fn from_iter<I: IntoIterator<Item = ContentTypeSpec>>(iter: I) -> Self {
        Self {
            content_types: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::attribute::{AttributeDefinition, AttributeKind, AttributeMap};
    use crate::scaffold::generator::GenerationMode;
    use crate::scaffold::templates::StubLanguage;
    use std::fs;
    use tempfile::tempdir;

    fn spec(name: &str) -> ContentTypeSpec {
        let mut attributes = AttributeMap::new();
        attributes.insert("title".into(), AttributeDefinition::new(AttributeKind::String));
        ContentTypeSpec::new(name, attributes).unwrap()
    }

    #[test]
    fn test_manifest_parsing() {
        let batch = Batch::from_json(
            r#"{
                "contentTypes": [
                    {"name": "author", "attributes": {"name": {"type": "string"}}},
                    {"name": "store", "mode": "extended"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.content_types[0].mode, GenerationMode::Minimal);
        assert_eq!(batch.content_types[1].mode, GenerationMode::Extended);
        assert!(batch.content_types[1].attributes.is_empty());
    }

    #[test]
    fn test_manifest_rejects_bad_entries() {
        assert!(Batch::from_json(r#"{"contentTypes": [{"name": "bad name"}]}"#).is_err());
        assert!(Batch::from_json(
            r#"{"contentTypes": [{"name": "a", "attributes": {"x": {"type": "relation"}}}]}"#
        )
        .is_err());
    }

    #[test]
    fn test_run_in_order() {
        let temp_dir = tempdir().unwrap();
        let generator = ScaffoldGenerator::new(temp_dir.path(), StubLanguage::TypeScript).unwrap();
        let batch: Batch = ["article", "author", "category"].into_iter().map(spec).collect();

        let mut seen = Vec::new();
        let outcome = batch.run_with(&generator, true, |spec, result| {
            assert!(result.is_ok());
            seen.push(spec.name.to_string());
        });

        assert!(outcome.is_success());
        assert_eq!(seen, vec!["article", "author", "category"]);
        assert_eq!(outcome.succeeded.len(), 3);
    }

    #[test]
    fn test_failure_does_not_touch_earlier_entries() {
        let temp_dir = tempdir().unwrap();
        // Block the second entry's root with a regular file
        fs::write(temp_dir.path().join("broken"), "blocker").unwrap();

        let generator = ScaffoldGenerator::new(temp_dir.path(), StubLanguage::TypeScript).unwrap();
        let batch = Batch::new().with(spec("author")).with(spec("broken")).with(spec("store"));

        let schema_path = temp_dir.path().join("author/content-types/author/schema.json");

        let outcome = batch.run(&generator, true);
        assert_eq!(outcome.succeeded.len(), 1);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].0.as_str(), "broken");
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].as_str(), "store");
        assert!(!outcome.is_success());

        let schema: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&schema_path).unwrap()).unwrap();
        assert_eq!(schema["collectionName"], "authors");
        assert!(!temp_dir.path().join("store").exists());
    }

    #[test]
    fn test_keep_going_after_failure() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("broken"), "blocker").unwrap();

        let generator = ScaffoldGenerator::new(temp_dir.path(), StubLanguage::TypeScript).unwrap();
        let batch = Batch::new().with(spec("broken")).with(spec("store"));

        let outcome = batch.run(&generator, false);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.succeeded.len(), 1);
        assert!(outcome.skipped.is_empty());
        assert!(temp_dir.path().join("store/content-types/store/schema.json").is_file());
    }
}
