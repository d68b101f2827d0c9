//! JSON documents consumed by the runtime
//!
//! Field names, nesting and constant values here are a compatibility contract:
//! the runtime parses these files at load time.

use serde::Serialize;

use super::attribute::AttributeMap;
use super::naming::NamingVariants;

/// `content-types/<name>/schema.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument<'a> {
    /// Always `collectionType`
    pub kind: &'static str,
    /// `<name>s`, original casing
    pub collection_name: String,
    /// Naming block
    pub info: SchemaInfo,
    /// Content options
    pub options: SchemaOptions,
    /// Attributes, verbatim
    pub attributes: &'a AttributeMap,
}

/// `info` block of [`SchemaDocument`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaInfo {
    /// `lower`
    pub singular_name: String,
    /// `<lower>s`
    pub plural_name: String,
    /// First character upper-cased
    pub display_name: String,
    /// `A collection for <name>`
    pub description: String,
}

/// `options` block of [`SchemaDocument`]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaOptions {
    /// Always `true`
    pub draft_and_publish: bool,
}

impl<'a> SchemaDocument<'a> {
    /// Build the schema for a content type
    #[must_use]
    pub fn new(naming: &NamingVariants, attributes: &'a AttributeMap) -> Self {
        Self {
            kind: "collectionType",
            collection_name: naming.collection_name.clone(),
            info: SchemaInfo {
                singular_name: naming.lower.clone(),
                plural_name: naming.plural_lower.clone(),
                display_name: naming.display_name.clone(),
                description: format!("A collection for {}", naming.name),
            },
            options: SchemaOptions {
                draft_and_publish: true,
            },
            attributes,
        }
    }
}

/// `models/<name>.settings.json`, the legacy model shape
///
/// Carries the same attributes as the schema under different option defaults.
/// Both come from one in-memory map, so they cannot drift within a run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettingsDocument<'a> {
    /// Original-casing name, not pluralized
    pub collection_name: String,
    /// Naming block
    pub info: ModelSettingsInfo,
    /// Persistence options
    pub options: ModelSettingsOptions,
    /// Attributes, verbatim
    pub attributes: &'a AttributeMap,
}

/// `info` block of [`ModelSettingsDocument`]
#[derive(Debug, Clone, Serialize)]
pub struct ModelSettingsInfo {
    /// Original-casing name
    pub name: String,
    /// Always empty
    pub description: String,
}

/// `options` block of [`ModelSettingsDocument`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettingsOptions {
    /// Always `false`
    pub draft_and_publish: bool,
    /// Always `true`
    pub increments: bool,
    /// Always `true`
    pub timestamps: bool,
    /// Always empty
    pub comment: String,
}

impl<'a> ModelSettingsDocument<'a> {
    /// Build the settings document for a content type
    #[must_use]
    pub fn new(naming: &NamingVariants, attributes: &'a AttributeMap) -> Self {
        Self {
            collection_name: naming.name.clone(),
            info: ModelSettingsInfo {
                name: naming.name.clone(),
                description: String::new(),
            },
            options: ModelSettingsOptions {
                draft_and_publish: false,
                increments: true,
                timestamps: true,
                comment: String::new(),
            },
            attributes,
        }
    }
}

/// `config/routes.json`
#[derive(Debug, Clone, Serialize)]
pub struct RoutesDocument {
    /// CRUD routes, in registration order
    pub routes: Vec<RouteDescriptor>,
}

/// One REST route
#[derive(Debug, Clone, Serialize)]
pub struct RouteDescriptor {
    /// HTTP method
    pub method: HttpMethod,
    /// `/<plural_lower>[suffix]`
    pub path: String,
    /// `<name>.<action>`
    pub handler: String,
    /// Policies block
    pub config: RouteConfig,
}

/// Per-route configuration
#[derive(Debug, Clone, Default, Serialize)]
pub struct RouteConfig {
    /// Always empty when generated
    pub policies: Vec<String>,
}

/// HTTP method of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

/// The fixed CRUD route table: (method, path suffix, action)
const CRUD_ROUTES: [(HttpMethod, &str, &str); 6] = [
    (HttpMethod::Get, "", "find"),
    (HttpMethod::Get, "/count", "count"),
    (HttpMethod::Get, "/:id", "findOne"),
    (HttpMethod::Post, "", "create"),
    (HttpMethod::Put, "/:id", "update"),
    (HttpMethod::Delete, "/:id", "delete"),
];

impl RoutesDocument {
    /// Build the CRUD route table for a content type
    #[must_use]
    pub fn new(naming: &NamingVariants) -> Self {
        let routes = CRUD_ROUTES
            .iter()
            .map(|&(method, suffix, action)| RouteDescriptor {
                method,
                path: format!("{}{suffix}", naming.route_base),
                handler: format!("{}.{action}", naming.name),
                config: RouteConfig::default(),
            })
            .collect();

        Self { routes }
    }
}

/// Pretty-print a document the way the runtime's own tooling does
pub fn to_json<T: Serialize>(document: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(document)
}
