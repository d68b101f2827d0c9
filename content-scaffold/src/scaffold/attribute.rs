//! Attribute definitions for content types
//!
//! An attribute is one field of a content type. Attributes are a closed
//! tagged union keyed by the `type` tag the runtime understands, so the
//! sub-fields a type needs (a relation's `target`, an enumeration's `enum`
//! values, a uid's `targetField`) cannot be left out.
//!
//! # Supported Types
//!
//! - `string`, `text`, `richtext`, `json`, `boolean`, `decimal`, `float`,
//!   `integer`, `datetime` - no extra fields
//! - `uid` - `targetField`
//! - `media` - `multiple`, `allowedTypes`
//! - `relation` - `relation` (cardinality), `target` (`api::<name>.<name>`)
//! - `component` - `repeatable`, `component`
//! - `dynamiczone` - `components`
//! - `enumeration` - `enum`
//!
//! Any type may also carry `required`. Keys outside this list (`unique`,
//! `maxLength`, `default`, `private`, `pluginOptions`, ...) are kept in
//! [`AttributeDefinition::extra`] and written back unchanged.
//!
//! # Field Specs
//!
//! The CLI builds attributes from `name:type[:param]...[:modifier]...` strings:
//!
//! ```text
//! title:string:required          → {"type":"string","required":true}
//! slug:uid:title                 → {"type":"uid","targetField":"title"}
//! cover:media                    → {"type":"media","multiple":false,"allowedTypes":["images"]}
//! gallery:media:images,videos:multiple
//! author:relation:manyToOne:author → target api::author.author
//! links:component:links.video-link:repeatable
//! blocks:dynamiczone:media,quote
//! status:enumeration:draft,live
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::naming::resource_uid;
use crate::error::ScaffoldError;

/// Attribute name to definition, in declaration order
pub type AttributeMap = IndexMap<String, AttributeDefinition>;

/// One field of a content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AttributeRecord")]
pub struct AttributeDefinition {
    /// Type tag and type-specific fields
    #[serde(flatten)]
    pub kind: AttributeKind,
    /// Whether the runtime should reject entries without a value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Runtime keys not modelled by `kind`, in input order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire shape of an attribute before the typed keys are split off
#[derive(Deserialize)]
struct AttributeRecord {
    #[serde(flatten)]
    kind: AttributeKind,
    #[serde(default)]
    required: Option<bool>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<AttributeRecord> for AttributeDefinition {
    fn from(record: AttributeRecord) -> Self {
        // Every flattened field sees every buffered key, so `extra` also
        // holds the keys `kind` consumed.
        let owned = record.kind.wire_keys();
        let extra = record
            .extra
            .into_iter()
            .filter(|(key, _)| key != "type" && !owned.contains(&key.as_str()))
            .collect();

        Self {
            kind: record.kind,
            required: record.required,
            extra,
        }
    }
}

/// Attribute type with its type-specific fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AttributeKind {
    /// Short text
    String,
    /// Long text
    Text,
    /// Markdown text
    RichText,
    /// Unique slug derived from another field
    Uid {
        /// Attribute the slug is generated from
        #[serde(rename = "targetField")]
        target_field: String,
    },
    /// Uploaded file(s)
    Media {
        /// Whether several files may be attached
        #[serde(default, skip_serializing_if = "Option::is_none")]
        multiple: Option<bool>,
        /// Accepted media categories (`images`, `videos`, `files`, `audios`)
        #[serde(rename = "allowedTypes")]
        allowed_types: Vec<String>,
    },
    /// Link to another content type
    Relation {
        /// Cardinality
        relation: RelationKind,
        /// Symbolic identifier of the target content type
        target: ResourceUid,
    },
    /// Embedded reusable component
    Component {
        /// Whether the component is a list
        #[serde(default, skip_serializing_if = "Option::is_none")]
        repeatable: Option<bool>,
        /// Component identifier, `<category>.<name>`
        component: String,
    },
    /// Ordered mix of components
    DynamicZone {
        /// Components allowed in the zone
        components: Vec<String>,
    },
    /// Arbitrary JSON
    Json,
    /// Boolean
    Boolean,
    /// Decimal number
    Decimal,
    /// Floating point number
    Float,
    /// Integer
    Integer,
    /// Date and time
    DateTime,
    /// One of a fixed set of values
    Enumeration {
        /// Allowed values
        #[serde(rename = "enum")]
        values: Vec<String>,
    },
}

/// Relation cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    /// `oneToOne`
    OneToOne,
    /// `oneToMany`
    OneToMany,
    /// `manyToOne`
    ManyToOne,
    /// `manyToMany`
    ManyToMany,
}

impl RelationKind {
    /// Parse the runtime spelling (`oneToMany`), case-insensitively
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "onetoone" => Some(Self::OneToOne),
            "onetomany" => Some(Self::OneToMany),
            "manytoone" => Some(Self::ManyToOne),
            "manytomany" => Some(Self::ManyToMany),
            _ => None,
        }
    }
}

/// Symbolic resource identifier such as `api::author.author`
///
/// Not checked against the set of generated content types; the runtime
/// reports dangling targets when it loads the schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceUid(String);

impl ResourceUid {
    /// Identifier of the API content type `name`
    #[must_use]
    pub fn api(name: &str) -> Self {
        Self(resource_uid(name))
    }

    /// Use `raw` as the identifier when it is already qualified (`api::x.y`),
    /// otherwise treat it as a content type name
    #[must_use]
    pub fn from_target(raw: &str) -> Self {
        if raw.contains("::") {
            Self(raw.to_string())
        } else {
            Self::api(raw)
        }
    }

    /// The identifier string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AttributeKind {
    /// The `type` tag written to the schema
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::RichText => "richtext",
            Self::Uid { .. } => "uid",
            Self::Media { .. } => "media",
            Self::Relation { .. } => "relation",
            Self::Component { .. } => "component",
            Self::DynamicZone { .. } => "dynamiczone",
            Self::Json => "json",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::DateTime => "datetime",
            Self::Enumeration { .. } => "enumeration",
        }
    }

    /// Keys this variant reads besides `type`
    #[must_use]
    pub const fn wire_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Uid { .. } => &["targetField"],
            Self::Media { .. } => &["multiple", "allowedTypes"],
            Self::Relation { .. } => &["relation", "target"],
            Self::Component { .. } => &["repeatable", "component"],
            Self::DynamicZone { .. } => &["components"],
            Self::Enumeration { .. } => &["enum"],
            _ => &[],
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

impl AttributeDefinition {
    /// Attribute of `kind` with no `required` flag and no extra keys
    #[must_use]
    pub fn new(kind: AttributeKind) -> Self {
        Self {
            kind,
            required: None,
            extra: Map::new(),
        }
    }

    /// Mark the attribute as required
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// `uid` slug generated from `target_field`
    #[must_use]
    pub fn uid(target_field: &str) -> Self {
        Self::new(AttributeKind::Uid {
            target_field: target_field.to_string(),
        })
    }

    /// Attach a runtime key the generator does not interpret
    #[must_use]
    pub fn with_extra(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    /// `media` attribute accepting `allowed_types`
    #[must_use]
    pub fn media(multiple: bool, allowed_types: &[&str]) -> Self {
        Self::new(AttributeKind::Media {
            multiple: Some(multiple),
            allowed_types: allowed_types.iter().map(ToString::to_string).collect(),
        })
    }

    /// `relation` to the content type `target` (`api::<target>.<target>`)
    #[must_use]
    pub fn relation(relation: RelationKind, target: &str) -> Self {
        Self::new(AttributeKind::Relation {
            relation,
            target: ResourceUid::from_target(target),
        })
    }

    /// `component` attribute
    #[must_use]
    pub fn component(component: &str, repeatable: bool) -> Self {
        Self::new(AttributeKind::Component {
            repeatable: Some(repeatable),
            component: component.to_string(),
        })
    }

    /// `dynamiczone` attribute
    #[must_use]
    pub fn dynamic_zone(components: &[&str]) -> Self {
        Self::new(AttributeKind::DynamicZone {
            components: components.iter().map(ToString::to_string).collect(),
        })
    }

    /// `enumeration` attribute
    #[must_use]
    pub fn enumeration(values: &[&str]) -> Self {
        Self::new(AttributeKind::Enumeration {
            values: values.iter().map(ToString::to_string).collect(),
        })
    }
}

impl From<AttributeKind> for AttributeDefinition {
    fn from(kind: AttributeKind) -> Self {
        Self::new(kind)
    }
}

/// Attribute parsed from a field spec string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Attribute name
    pub name: String,
    /// Attribute definition
    pub definition: AttributeDefinition,
}

const MODIFIERS: [&str; 3] = ["required", "multiple", "repeatable"];
const DEFAULT_MEDIA_TYPES: [&str; 1] = ["images"];

impl FieldSpec {
    /// Parse a field spec
    ///
    /// Format: `name:type[:param]...[:modifier]...`
    ///
    /// # Examples
    ///
    /// ```
    /// # use content_scaffold::scaffold::FieldSpec;
    /// # use content_scaffold::{AttributeKind, RelationKind, ResourceUid};
    /// let field = FieldSpec::parse("title:string:required").unwrap();
    /// assert_eq!(field.name, "title");
    /// assert_eq!(field.definition.required, Some(true));
    ///
    /// let field = FieldSpec::parse("author:relation:manyToOne:author").unwrap();
    /// assert_eq!(
    ///     field.definition.kind,
    ///     AttributeKind::Relation {
    ///         relation: RelationKind::ManyToOne,
    ///         target: ResourceUid::api("author"),
    ///     }
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidFieldSpec`] if:
    /// - the field spec has no type
    /// - the name is not an identifier
    /// - the type is unknown or its parameters are missing or malformed
    /// - a modifier does not apply to the type
    pub fn parse(input: &str) -> Result<Self, ScaffoldError> {
        let mut parts: Vec<&str> = input.split(':').map(str::trim).collect();

        if parts.len() < 2 || parts[1].is_empty() {
            return Err(ScaffoldError::field_spec(
                input,
                "expected format name:type[:params][:modifiers]",
            ));
        }

        let name = parts[0];
        if !name.chars().next().is_some_and(char::is_alphabetic)
            || !name.chars().all(|c| c.is_alphanumeric() || c == '_')
        {
            return Err(ScaffoldError::field_spec(
                input,
                format!("'{name}' is not a valid attribute name"),
            ));
        }

        // Modifiers are trailing keywords; everything between the type and the
        // first of them is the type's parameter string (which may itself
        // contain ':' as in `api::x.y`).
        let mut required = false;
        let mut multiple = false;
        let mut repeatable = false;
        while parts.len() > 2 {
            let last = parts[parts.len() - 1].to_ascii_lowercase();
            if !MODIFIERS.contains(&last.as_str()) {
                break;
            }
            match last.as_str() {
                "required" => required = true,
                "multiple" => multiple = true,
                _ => repeatable = true,
            }
            parts.pop();
        }

        let params = parts[2..].join(":");
        let kind = Self::parse_kind(input, parts[1], &params, multiple, repeatable)?;

        if multiple && !matches!(kind, AttributeKind::Media { .. }) {
            return Err(ScaffoldError::field_spec(
                input,
                "'multiple' only applies to media",
            ));
        }
        if repeatable && !matches!(kind, AttributeKind::Component { .. }) {
            return Err(ScaffoldError::field_spec(
                input,
                "'repeatable' only applies to component",
            ));
        }

        let mut definition = AttributeDefinition::new(kind);
        if required {
            definition = definition.required();
        }

        Ok(Self {
            name: name.to_string(),
            definition,
        })
    }

    /// Parse several specs into an attribute map, rejecting duplicate names
    pub fn collect<S: AsRef<str>>(specs: &[S]) -> Result<AttributeMap, ScaffoldError> {
        let mut attributes = AttributeMap::new();
        for spec in specs {
            let spec = spec.as_ref();
            let field = Self::parse(spec)?;
            if attributes.contains_key(&field.name) {
                return Err(ScaffoldError::field_spec(
                    spec,
                    format!("attribute '{}' is declared twice", field.name),
                ));
            }
            attributes.insert(field.name, field.definition);
        }
        Ok(attributes)
    }

    fn parse_kind(
        input: &str,
        type_str: &str,
        params: &str,
        multiple: bool,
        repeatable: bool,
    ) -> Result<AttributeKind, ScaffoldError> {
        let require_params = |what: &str| -> Result<(), ScaffoldError> {
            if params.is_empty() {
                Err(ScaffoldError::field_spec(input, format!("missing {what}")))
            } else {
                Ok(())
            }
        };

        let kind = match type_str.to_ascii_lowercase().as_str() {
            "string" => AttributeKind::String,
            "text" => AttributeKind::Text,
            "richtext" => AttributeKind::RichText,
            "json" => AttributeKind::Json,
            "boolean" | "bool" => AttributeKind::Boolean,
            "decimal" => AttributeKind::Decimal,
            "float" => AttributeKind::Float,
            "integer" | "int" => AttributeKind::Integer,
            "datetime" => AttributeKind::DateTime,
            "uid" => {
                require_params("uid target field")?;
                return Ok(AttributeKind::Uid {
                    target_field: params.to_string(),
                });
            }
            "media" => {
                let allowed_types = if params.is_empty() {
                    DEFAULT_MEDIA_TYPES.iter().map(ToString::to_string).collect()
                } else {
                    split_list(params)
                };
                return Ok(AttributeKind::Media {
                    multiple: Some(multiple),
                    allowed_types,
                });
            }
            "relation" => {
                require_params("relation kind and target")?;
                let (relation, target) = params.split_once(':').ok_or_else(|| {
                    ScaffoldError::field_spec(input, "expected relation:<kind>:<target>")
                })?;
                let relation = RelationKind::parse(relation).ok_or_else(|| {
                    ScaffoldError::field_spec(
                        input,
                        format!(
                            "unknown relation '{relation}'. Supported: oneToOne, oneToMany, manyToOne, manyToMany"
                        ),
                    )
                })?;
                if target.is_empty() {
                    return Err(ScaffoldError::field_spec(input, "missing relation target"));
                }
                return Ok(AttributeKind::Relation {
                    relation,
                    target: ResourceUid::from_target(target),
                });
            }
            "component" => {
                require_params("component identifier")?;
                return Ok(AttributeKind::Component {
                    repeatable: Some(repeatable),
                    component: params.to_string(),
                });
            }
            "dynamiczone" => {
                require_params("dynamic zone components")?;
                return Ok(AttributeKind::DynamicZone {
                    components: split_list(params),
                });
            }
            "enumeration" | "enum" => {
                require_params("enumeration values")?;
                return Ok(AttributeKind::Enumeration {
                    values: split_list(params),
                });
            }
            unknown => {
                return Err(ScaffoldError::field_spec(
                    input,
                    format!(
                        "unknown type '{unknown}'. Supported types: string, text, richtext, uid, media, relation, component, dynamiczone, json, boolean, decimal, float, integer, datetime, enumeration"
                    ),
                ));
            }
        };

        if params.is_empty() {
            Ok(kind)
        } else {
            Err(ScaffoldError::field_spec(
                input,
                format!("type '{kind}' takes no parameters"),
            ))
        }
    }
}

fn split_list(params: &str) -> Vec<String> {
    params
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_matches_runtime_shape() {
        let cases = vec![
            (AttributeDefinition::new(AttributeKind::String), json!({"type": "string"})),
            (AttributeDefinition::new(AttributeKind::RichText), json!({"type": "richtext"})),
            (AttributeDefinition::new(AttributeKind::DateTime), json!({"type": "datetime"})),
            (AttributeDefinition::uid("title"), json!({"type": "uid", "targetField": "title"})),
            (
                AttributeDefinition::media(false, &["images"]),
                json!({"type": "media", "multiple": false, "allowedTypes": ["images"]}),
            ),
            (
                AttributeDefinition::relation(RelationKind::ManyToOne, "author"),
                json!({"type": "relation", "relation": "manyToOne", "target": "api::author.author"}),
            ),
            (
                AttributeDefinition::component("links.video-link", true),
                json!({"type": "component", "repeatable": true, "component": "links.video-link"}),
            ),
            (
                AttributeDefinition::dynamic_zone(&["media", "quote"]),
                json!({"type": "dynamiczone", "components": ["media", "quote"]}),
            ),
            (
                AttributeDefinition::enumeration(&["draft", "live"]),
                json!({"type": "enumeration", "enum": ["draft", "live"]}),
            ),
            (
                AttributeDefinition::new(AttributeKind::Integer).required(),
                json!({"type": "integer", "required": true}),
            ),
        ];

        for (definition, expected) in cases {
            assert_eq!(serde_json::to_value(&definition).unwrap(), expected);
        }
    }

    #[test]
    fn test_type_tag_is_first_key() {
        let text = serde_json::to_string(&AttributeDefinition::uid("name")).unwrap();
        assert_eq!(text, r#"{"type":"uid","targetField":"name"}"#);
    }

    #[test]
    fn test_deserialize_typed_attribute() {
        let definition: AttributeDefinition = serde_json::from_value(json!({
            "type": "relation",
            "relation": "manyToMany",
            "target": "api::store.store",
            "required": false,
        }))
        .unwrap();

        assert_eq!(
            definition.kind,
            AttributeKind::Relation {
                relation: RelationKind::ManyToMany,
                target: ResourceUid::api("store"),
            }
        );
        assert_eq!(definition.required, Some(false));
    }

    #[test]
    fn test_deserialize_rejects_missing_required_subfield() {
        assert!(serde_json::from_value::<AttributeDefinition>(json!({"type": "relation", "relation": "oneToMany"})).is_err());
        assert!(serde_json::from_value::<AttributeDefinition>(json!({"type": "enumeration"})).is_err());
        assert!(serde_json::from_value::<AttributeDefinition>(json!({"type": "uid"})).is_err());
        assert!(serde_json::from_value::<AttributeDefinition>(json!({"type": "color"})).is_err());
    }

    #[test]
    fn test_unmodelled_keys_survive_round_trip() {
        let input = json!({
            "cover": {"type": "media", "allowedTypes": ["images"]},
            "title": {"type": "string", "unique": true, "maxLength": 80},
            "links": {"type": "component", "component": "links.video-link"},
            "status": {
                "type": "enumeration",
                "enum": ["draft", "live"],
                "default": "draft",
                "required": true,
                "pluginOptions": {"i18n": {"localized": true}},
            },
        });

        let map: AttributeMap = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(map["title"].kind, AttributeKind::String);
        assert_eq!(map["title"].extra["maxLength"], json!(80));
        assert_eq!(map["status"].required, Some(true));
        assert!(!map["status"].extra.contains_key("enum"));
        assert!(!map["status"].extra.contains_key("type"));
        assert_eq!(
            map["cover"].kind,
            AttributeKind::Media {
                multiple: None,
                allowed_types: vec!["images".to_string()],
            }
        );

        assert_eq!(serde_json::to_value(&map).unwrap(), input);
    }

    #[test]
    fn test_extra_keys_follow_typed_keys() {
        let definition = AttributeDefinition::new(AttributeKind::String)
            .required()
            .with_extra("unique", json!(true))
            .with_extra("maxLength", json!(80));
        assert_eq!(
            serde_json::to_string(&definition).unwrap(),
            r#"{"type":"string","required":true,"unique":true,"maxLength":80}"#
        );
    }

    #[test]
    fn test_attribute_map_keeps_declaration_order() {
        let map: AttributeMap = serde_json::from_str(
            r#"{"zeta":{"type":"string"},"alpha":{"type":"text"},"mid":{"type":"json"}}"#,
        )
        .unwrap();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_resource_uid_from_target() {
        assert_eq!(ResourceUid::from_target("author").as_str(), "api::author.author");
        assert_eq!(
            ResourceUid::from_target("plugin::users-permissions.user").as_str(),
            "plugin::users-permissions.user"
        );
    }

    #[test]
    fn test_parse_simple_types() {
        let cases = vec![
            ("title:string", AttributeKind::String),
            ("body:text", AttributeKind::Text),
            ("content:richtext", AttributeKind::RichText),
            ("details:json", AttributeKind::Json),
            ("available:boolean", AttributeKind::Boolean),
            ("price:decimal", AttributeKind::Decimal),
            ("ratio:float", AttributeKind::Float),
            ("visits:integer", AttributeKind::Integer),
            ("date:datetime", AttributeKind::DateTime),
        ];

        for (input, expected) in cases {
            let field = FieldSpec::parse(input).unwrap();
            assert_eq!(field.definition.kind, expected, "{input}");
            assert_eq!(field.definition.required, None);
        }
    }

    #[test]
    fn test_parse_required_modifier() {
        let field = FieldSpec::parse("email:string:required").unwrap();
        assert_eq!(field.name, "email");
        assert_eq!(field.definition.required, Some(true));
    }

    #[test]
    fn test_parse_uid() {
        let field = FieldSpec::parse("slug:uid:title").unwrap();
        assert_eq!(
            field.definition.kind,
            AttributeKind::Uid {
                target_field: "title".to_string()
            }
        );
    }

    #[test]
    fn test_parse_media() {
        let field = FieldSpec::parse("cover:media").unwrap();
        assert_eq!(
            field.definition.kind,
            AttributeKind::Media {
                multiple: Some(false),
                allowed_types: vec!["images".to_string()],
            }
        );

        let field = FieldSpec::parse("gallery:media:images,videos:multiple:required").unwrap();
        assert_eq!(
            field.definition.kind,
            AttributeKind::Media {
                multiple: Some(true),
                allowed_types: vec!["images".to_string(), "videos".to_string()],
            }
        );
        assert_eq!(field.definition.required, Some(true));
    }

    #[test]
    fn test_parse_relation() {
        let field = FieldSpec::parse("stores:relation:manyToMany:store").unwrap();
        assert_eq!(
            field.definition.kind,
            AttributeKind::Relation {
                relation: RelationKind::ManyToMany,
                target: ResourceUid::api("store"),
            }
        );

        let field = FieldSpec::parse("owner:relation:manyToOne:api::author.author").unwrap();
        assert_eq!(
            field.definition.kind,
            AttributeKind::Relation {
                relation: RelationKind::ManyToOne,
                target: ResourceUid::api("author"),
            }
        );
    }

    #[test]
    fn test_parse_component_and_zones() {
        let field = FieldSpec::parse("links:component:links.video-link:repeatable").unwrap();
        assert_eq!(
            field.definition.kind,
            AttributeKind::Component {
                repeatable: Some(true),
                component: "links.video-link".to_string(),
            }
        );

        let field = FieldSpec::parse("blocks:dynamiczone:media,quote,rich-text").unwrap();
        assert_eq!(
            field.definition.kind,
            AttributeKind::DynamicZone {
                components: vec!["media".into(), "quote".into(), "rich-text".into()],
            }
        );

        let field = FieldSpec::parse("status:enumeration:draft,live").unwrap();
        assert_eq!(
            field.definition.kind,
            AttributeKind::Enumeration {
                values: vec!["draft".into(), "live".into()],
            }
        );
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(FieldSpec::parse("invalid").is_err());
        assert!(FieldSpec::parse(":string").is_err());
        assert!(FieldSpec::parse("title:").is_err());
        assert!(FieldSpec::parse("1title:string").is_err());
        assert!(FieldSpec::parse("my-title:string").is_err());
    }

    #[test]
    fn test_parse_invalid_type_and_params() {
        assert!(FieldSpec::parse("field:color").is_err());
        assert!(FieldSpec::parse("title:string:extra").is_err());
        assert!(FieldSpec::parse("slug:uid").is_err());
        assert!(FieldSpec::parse("author:relation").is_err());
        assert!(FieldSpec::parse("author:relation:manyToOne").is_err());
        assert!(FieldSpec::parse("author:relation:sideways:author").is_err());
        assert!(FieldSpec::parse("status:enumeration").is_err());
        assert!(FieldSpec::parse("links:component").is_err());
    }

    #[test]
    fn test_parse_misplaced_modifier() {
        assert!(FieldSpec::parse("title:string:multiple").is_err());
        assert!(FieldSpec::parse("cover:media:repeatable").is_err());
    }

    #[test]
    fn test_collect_rejects_duplicates() {
        let map = FieldSpec::collect(&["name:string", "email:string"]).unwrap();
        assert_eq!(map.len(), 2);
        assert!(FieldSpec::collect(&["name:string", "name:text"]).is_err());
    }
}
