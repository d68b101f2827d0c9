//! Stub templates
//!
//! Controller, service and router stubs are one template shape each, rendered
//! with handlebars. The stub only binds the runtime's generic CRUD factory to
//! the content type's symbolic identifier.

use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

use super::naming::NamingVariants;
use crate::error::ScaffoldError;

/// Source language of generated stubs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StubLanguage {
    /// ES module stubs (`.ts`)
    #[default]
    TypeScript,
    /// CommonJS stubs (`.js`)
    JavaScript,
}

impl StubLanguage {
    /// File extension for stubs in this language
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::TypeScript => "ts",
            Self::JavaScript => "js",
        }
    }

    const fn template(self) -> &'static str {
        match self {
            Self::TypeScript => TYPESCRIPT_STUB,
            Self::JavaScript => JAVASCRIPT_STUB,
        }
    }
}

impl fmt::Display for StubLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeScript => write!(f, "typescript"),
            Self::JavaScript => write!(f, "javascript"),
        }
    }
}

/// Kind of stub and the runtime factory it calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubKind {
    /// `createCoreController`
    Controller,
    /// `createCoreService`
    Service,
    /// `createCoreRouter`
    Router,
}

impl StubKind {
    /// All stub kinds, in generation order
    pub const ALL: [Self; 3] = [Self::Controller, Self::Service, Self::Router];

    /// Word used in the stub's doc comment
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Service => "service",
            Self::Router => "router",
        }
    }

    /// Runtime factory function
    #[must_use]
    pub const fn factory(self) -> &'static str {
        match self {
            Self::Controller => "createCoreController",
            Self::Service => "createCoreService",
            Self::Router => "createCoreRouter",
        }
    }

    /// Directory the stub lives in, relative to the content type root
    #[must_use]
    pub const fn directory(self) -> &'static str {
        match self {
            Self::Controller => "controllers",
            Self::Service => "services",
            Self::Router => "routes",
        }
    }
}

/// TypeScript stub, matching the runtime's own generator output
pub const TYPESCRIPT_STUB: &str = r"
/**
 * {{name}} {{label}}
 */

import { factories } from '@strapi/strapi';

export default factories.{{factory}}('{{uid}}');
";

/// JavaScript stub
pub const JAVASCRIPT_STUB: &str = r"'use strict';

/**
 * {{name}} {{label}}
 */

const { {{factory}} } = require('@strapi/strapi').factories;

module.exports = {{factory}}('{{uid}}');
";

/// Handlebars registry holding the stub templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Register the stub templates for every language
    pub fn new() -> Result<Self, ScaffoldError> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        for language in [StubLanguage::TypeScript, StubLanguage::JavaScript] {
            handlebars.register_template_string(&language.to_string(), language.template())?;
        }

        Ok(Self { handlebars })
    }

    /// Render one stub
    pub fn render_stub(
        &self,
        kind: StubKind,
        language: StubLanguage,
        naming: &NamingVariants,
    ) -> Result<String, ScaffoldError> {
        let context = json!({
            "name": naming.name,
            "uid": naming.uid,
            "label": kind.label(),
            "factory": kind.factory(),
        });

        Ok(self.handlebars.render(&language.to_string(), &context)?)
    }
}

/// Render the controller stub for `naming`
pub fn render_controller_stub(
    naming: &NamingVariants,
    language: StubLanguage,
) -> Result<String, ScaffoldError> {
    TemplateRegistry::new()?.render_stub(StubKind::Controller, language, naming)
}

/// Render the service stub for `naming`
pub fn render_service_stub(
    naming: &NamingVariants,
    language: StubLanguage,
) -> Result<String, ScaffoldError> {
    TemplateRegistry::new()?.render_stub(StubKind::Service, language, naming)
}

/// Render the router stub for `naming`
pub fn render_router_stub(
    naming: &NamingVariants,
    language: StubLanguage,
) -> Result<String, ScaffoldError> {
    TemplateRegistry::new()?.render_stub(StubKind::Router, language, naming)
}
