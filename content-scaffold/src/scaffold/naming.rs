//! Naming conventions for content types
//!
//! Every path, identifier and display string the generator writes is derived
//! from the content type name through [`NamingVariants`]. Pluralization is
//! deliberately naive: a trailing `s` is appended no matter how the name ends,
//! so `services` becomes `servicess`. The downstream runtime expects exactly
//! this shape.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::ScaffoldError;

/// Validated content type name
///
/// Must be usable both as a single path segment and inside the symbolic
/// resource identifier `api::<name>.<name>`: first character ASCII alphabetic,
/// the rest ASCII alphanumeric, `-` or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentTypeName(String);

impl ContentTypeName {
    /// Validate and wrap a content type name
    ///
    /// # Examples
    ///
    /// ```
    /// # use content_scaffold::ContentTypeName;
    /// assert!(ContentTypeName::new("orderdetails").is_ok());
    /// assert!(ContentTypeName::new("").is_err());
    /// assert!(ContentTypeName::new("../etc").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, ScaffoldError> {
        let name = name.into();
        let reason = match name.chars().next() {
            None => Some("name cannot be empty"),
            Some(first) if !first.is_ascii_alphabetic() => {
                Some("name must start with an ASCII letter")
            }
            Some(_)
                if !name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') =>
            {
                Some("name may only contain ASCII letters, digits, '-' and '_'")
            }
            Some(_) => None,
        };

        match reason {
            Some(reason) => Err(ScaffoldError::InvalidName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    /// The name exactly as supplied
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive every naming variant for this name
    #[must_use]
    pub fn variants(&self) -> NamingVariants {
        NamingVariants::derive(self)
    }
}

impl fmt::Display for ContentTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentTypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ContentTypeName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Naming variants derived from a content type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingVariants {
    /// Original name
    pub name: String,
    /// Name lower-cased
    pub lower: String,
    /// `lower` plus a trailing `s`
    pub plural_lower: String,
    /// First character upper-cased, remainder unchanged
    pub display_name: String,
    /// Original casing plus a trailing `s`
    pub collection_name: String,
    /// Symbolic resource identifier, `api::<name>.<name>`
    pub uid: String,
    /// REST collection path, `/<plural_lower>`
    pub route_base: String,
}

impl NamingVariants {
    /// Derive all variants from `name`
    ///
    /// # Examples
    ///
    /// ```
    /// # use content_scaffold::ContentTypeName;
    /// let naming = ContentTypeName::new("product").unwrap().variants();
    /// assert_eq!(naming.plural_lower, "products");
    /// assert_eq!(naming.display_name, "Product");
    /// assert_eq!(naming.uid, "api::product.product");
    /// ```
    #[must_use]
    pub fn derive(name: &ContentTypeName) -> Self {
        let name = name.as_str();
        let lower = name.to_lowercase();
        let plural_lower = pluralize(&lower);

        Self {
            name: name.to_string(),
            display_name: capitalize_first(name),
            collection_name: pluralize(name),
            uid: resource_uid(name),
            route_base: format!("/{plural_lower}"),
            lower,
            plural_lower,
        }
    }
}

/// Naive English pluralization: always appends `s`
#[must_use]
pub fn pluralize(input: &str) -> String {
    format!("{input}s")
}

/// Upper-case the first character, leave the rest untouched
#[must_use]
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Symbolic resource identifier for a content type
#[must_use]
pub fn resource_uid(name: &str) -> String {
    format!("api::{name}.{name}")
}
