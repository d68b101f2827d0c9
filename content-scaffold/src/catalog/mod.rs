//! Built-in storefront catalog
//!
//! The content types of a small makeup storefront: blog articles with authors
//! and categories, and stores selling products, parts and services. Relations
//! reference each other by symbolic identifier only.

use crate::error::ScaffoldError;
use crate::scaffold::{
    AttributeDefinition as Attr, AttributeKind, AttributeMap, Batch, ContentTypeSpec,
    GenerationMode, RelationKind,
};

fn attributes<const N: usize>(entries: [(&str, Attr); N]) -> AttributeMap {
    entries
        .into_iter()
        .map(|(name, definition)| (name.to_string(), definition))
        .collect()
}

fn plain(kind: AttributeKind) -> Attr {
    Attr::new(kind)
}

fn image() -> Attr {
    Attr::media(false, &["images"])
}

/// `article`: blog post with cover, author, categories and content blocks
#[must_use]
pub fn article() -> AttributeMap {
    attributes([
        ("title", plain(AttributeKind::String)),
        ("description", plain(AttributeKind::Text)),
        ("slug", Attr::uid("title")),
        ("cover", image()),
        ("author", Attr::relation(RelationKind::ManyToOne, "author")),
        ("categories", Attr::relation(RelationKind::ManyToMany, "category")),
        ("blocks", Attr::dynamic_zone(&["media", "quote", "rich-text", "slider"])),
        ("content", plain(AttributeKind::RichText)),
        ("conver", image()),
        ("vedioLinks", Attr::component("links.video-link", true)),
    ])
}

/// `author`
#[must_use]
pub fn author() -> AttributeMap {
    attributes([
        ("name", plain(AttributeKind::String)),
        ("avatar", image()),
        ("email", plain(AttributeKind::String)),
        ("articles", Attr::relation(RelationKind::OneToMany, "article")),
    ])
}

/// `category`
#[must_use]
pub fn category() -> AttributeMap {
    attributes([
        ("name", plain(AttributeKind::String)),
        ("slug", Attr::uid("name")),
        ("description", plain(AttributeKind::Text)),
        ("articles", Attr::relation(RelationKind::ManyToMany, "article")),
    ])
}

/// `parts`: spare parts sold by stores
#[must_use]
pub fn parts() -> AttributeMap {
    attributes([
        ("slug", Attr::uid("title")),
        ("title", plain(AttributeKind::String)),
        ("description", plain(AttributeKind::Text)),
        ("date", plain(AttributeKind::DateTime)),
        ("images", Attr::media(true, &["images"])),
        ("stores", Attr::relation(RelationKind::ManyToMany, "store")),
        ("available", plain(AttributeKind::Boolean)),
        ("details", plain(AttributeKind::Json)),
        ("price", plain(AttributeKind::Decimal)),
        ("categories", plain(AttributeKind::String)),
    ])
}

/// `product`
#[must_use]
pub fn product() -> AttributeMap {
    attributes([
        ("image", image()),
        ("categories", plain(AttributeKind::String)),
        ("quantity", plain(AttributeKind::Integer)),
        ("name", plain(AttributeKind::String)),
        ("slug", Attr::uid("name")),
        ("price", plain(AttributeKind::Decimal)),
        ("details", plain(AttributeKind::Json)),
        ("store", Attr::relation(RelationKind::ManyToOne, "store")),
        ("services", Attr::relation(RelationKind::ManyToMany, "services")),
    ])
}

/// `services`: bookable services offered by stores
#[must_use]
pub fn services() -> AttributeMap {
    attributes([
        ("title", plain(AttributeKind::String)),
        ("description", plain(AttributeKind::Text)),
        ("price", plain(AttributeKind::Decimal)),
        ("stores", Attr::relation(RelationKind::ManyToMany, "store")),
        ("image", image()),
        ("date", plain(AttributeKind::DateTime)),
        ("details", plain(AttributeKind::Json)),
        ("slug", Attr::uid("title")),
        ("products", Attr::relation(RelationKind::ManyToMany, "product")),
    ])
}

/// `store`
#[must_use]
pub fn store() -> AttributeMap {
    attributes([
        ("name", plain(AttributeKind::String)),
        ("phone", plain(AttributeKind::String)),
        ("address", plain(AttributeKind::String)),
        ("details", plain(AttributeKind::RichText)),
        ("hostname", plain(AttributeKind::String)),
        ("visits", plain(AttributeKind::Integer)),
        ("orderdetails", Attr::relation(RelationKind::OneToMany, "orderdetails")),
        ("tags", plain(AttributeKind::String)),
        ("provider", plain(AttributeKind::String)),
        ("slug", Attr::uid("name")),
        ("products", Attr::relation(RelationKind::OneToMany, "product")),
        ("logo", image()),
        ("socialMedia", plain(AttributeKind::Json)),
        ("parts", Attr::relation(RelationKind::ManyToMany, "parts")),
        ("services", Attr::relation(RelationKind::ManyToMany, "services")),
        ("apiToken", plain(AttributeKind::String)),
    ])
}

/// The whole catalog, in generation order, every entry in `mode`
pub fn storefront(mode: GenerationMode) -> Result<Batch, ScaffoldError> {
    let entries: [(&str, fn() -> AttributeMap); 7] = [
        ("article", article),
        ("author", author),
        ("category", category),
        ("parts", parts),
        ("product", product),
        ("services", services),
        ("store", store),
    ];

    entries
        .into_iter()
        .map(|(name, build)| -> Result<ContentTypeSpec, ScaffoldError> {
            Ok(ContentTypeSpec::new(name, build())?.with_mode(mode))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|content_types| Batch { content_types })
}
