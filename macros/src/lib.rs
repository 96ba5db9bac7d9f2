//! Procedural macros for the struct-record crate
//!
//! This crate provides the `Reflect` derive, which generates the field
//! descriptors and field accessors `StructRecord` reads at runtime.

use proc_macro::TokenStream;

// Import modules
mod reflect_impl;
mod utils;

// Tests
#[cfg(test)]
mod tests;

/// Reflect derive macro
///
/// This macro describes a struct's fields (name, visibility and tags) and
/// generates by-index access to the values of its `pub` fields. Enums can
/// derive it too; they report `Kind::Enum` and are rejected by
/// `StructRecord`. Unions are rejected with a compile error.
///
/// Only named `pub` fields are readable. Tuple struct positions count as
/// anonymous, so a tuple struct such as `pub struct Point(pub f64, pub f64)`
/// derives fine but always produces an empty record. `pub(self)` is treated
/// as private.
///
/// Tags are given per field as `namespace = "value"` pairs:
///
/// ```ignore
/// #[derive(Reflect)]
/// pub struct User {
///     #[tag(db = "id", json = "id")]
///     pub id: i64,
///
///     #[tag(db = "name,omitempty")]
///     pub name: String,
///
///     secret: String,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(tag))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect_impl::process_derive_reflect(input)
}
