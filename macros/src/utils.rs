//! Utility functions for procedural macros
//!
//! This module contains the attribute and field helpers used by the Reflect
//! derive.

use syn::ext::IdentExt;
use syn::{Attribute, Ident, Index, LitStr, Member, Visibility};

/// Name of the field attribute carrying tags
pub const TAG_ATTRIBUTE: &str = "tag";

/// Whether a field is visible outside its own module
///
/// `pub(self)` and `pub(in self)` are spelled-out private visibility.
pub fn is_exported(vis: &Visibility) -> bool {
    match vis {
        Visibility::Public(_) => true,
        Visibility::Restricted(restricted) => !restricted.path.is_ident("self"),
        Visibility::Inherited => false,
    }
}

/// Declared name of a field, or its position for tuple fields
pub fn field_name(ident: Option<&Ident>, index: usize) -> String {
    ident.map_or_else(|| index.to_string(), |ident| ident.unraw().to_string())
}

/// Member expression used to read a field from `self`
pub fn field_member(ident: Option<&Ident>, index: usize) -> Member {
    match ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(index)),
    }
}

/// Collect `(namespace, value)` pairs from `#[tag(ns = "value", ...)]` attributes
///
/// Pairs keep their declaration order. A namespace may appear only once per
/// field, across all of its `tag` attributes.
pub fn parse_tags(attrs: &[Attribute]) -> syn::Result<Vec<(String, String)>> {
    let mut tags: Vec<(String, String)> = Vec::new();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(TAG_ATTRIBUTE)) {
        attr.parse_nested_meta(|meta| {
            let namespace = meta
                .path
                .get_ident()
                .map(|ident| ident.unraw().to_string())
                .ok_or_else(|| meta.error("tag namespace must be a single identifier"))?;
            let value: LitStr = meta.value()?.parse()?;

            if tags.iter().any(|(existing, _)| *existing == namespace) {
                return Err(meta.error(format!("duplicate tag namespace `{namespace}`")));
            }
            tags.push((namespace, value.value()));
            Ok(())
        })?;
    }

    Ok(tags)
}
