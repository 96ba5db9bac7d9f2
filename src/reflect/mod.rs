//! Lightweight reflection for record adapters
//!
//! This module describes values the way the adapter needs to see them: a
//! coarse [`Kind`], and for structs an ordered list of [`FieldDef`]
//! descriptors plus index-based access to the live field values. Struct
//! descriptions are generated by `#[derive(Reflect)]`; scalars, strings,
//! sequences, options and single-level pointers are covered by the impls in
//! [`impls`].

use std::any::Any;
use std::fmt;

mod impls;

/// Coarse classification of a reflected value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `bool`
    Bool,
    /// Signed integers
    Int,
    /// Unsigned integers
    Uint,
    /// Floating point numbers
    Float,
    /// `char`
    Char,
    /// `String` and `&str`
    String,
    /// `()`
    Unit,
    /// `Option<T>`
    Option,
    /// `Vec<T>` and slices
    Sequence,
    /// Enums deriving `Reflect`
    Enum,
    /// Structs deriving `Reflect`
    Struct,
    /// References and smart pointers
    Pointer,
}

impl Kind {
    /// Lowercase name of the kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Char => "char",
            Self::String => "string",
            Self::Unit => "unit",
            Self::Option => "option",
            Self::Sequence => "sequence",
            Self::Enum => "enum",
            Self::Struct => "struct",
            Self::Pointer => "pointer",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time description of a single struct field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Declared field name; the position (`"0"`, `"1"`, ...) for tuple fields
    pub name: &'static str,
    /// `(namespace, value)` pairs from the field's `#[tag(...)]` attributes
    pub tags: &'static [(&'static str, &'static str)],
    /// Whether the field is `pub` in a form other than `pub(self)`
    pub exported: bool,
    /// Whether the field has no name of its own (tuple struct positions)
    pub anonymous: bool,
}

impl FieldDef {
    /// Raw tag value for `namespace`, if the field declares one
    ///
    /// When a namespace is declared more than once the first value wins.
    #[must_use]
    pub fn tag(&self, namespace: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(ns, _)| *ns == namespace)
            .map(|(_, value)| *value)
    }

    /// Exported and not anonymous
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.exported && !self.anonymous
    }
}

/// Type-erased view of a field value
///
/// Implemented for every `Any + Debug` type, so a value handed out by the
/// adapter can be printed directly or downcast back to its concrete type.
pub trait FieldValue: Any + fmt::Debug + 'static {
    /// Upcast to `Any`
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug> FieldValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn FieldValue {
    /// Attempt to view the value as a `T`
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Whether the value is a `T`
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Runtime description of a value's shape
///
/// Structs get this through `#[derive(Reflect)]`. The trait is object safe;
/// the adapter only ever talks to `&dyn Reflect`.
pub trait Reflect {
    /// Kind of this value
    fn kind(&self) -> Kind;

    /// Name of the concrete type, for diagnostics
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Field descriptors in declaration order; empty unless this is a struct
    fn fields(&self) -> &'static [FieldDef] {
        &[]
    }

    /// Current value of the field at `index`
    ///
    /// Returns `None` for out-of-range indices and for fields that are not
    /// visible (unexported or anonymous).
    fn field(&self, _index: usize) -> Option<&dyn FieldValue> {
        None
    }

    /// The pointee, when this value is a pointer
    fn elem(&self) -> Option<&dyn Reflect> {
        None
    }
}

/// Follow one level of pointer indirection
///
/// Non-pointer values are returned unchanged. Only a single level is
/// followed, so a pointer to a pointer comes back as a pointer.
#[must_use]
pub fn indirect(value: &dyn Reflect) -> &dyn Reflect {
    if value.kind() == Kind::Pointer {
        value.elem().unwrap_or(value)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: FieldDef = FieldDef {
        name: "id",
        tags: &[("db", "id"), ("json", "identifier"), ("db", "ignored")],
        exported: true,
        anonymous: false,
    };

    #[test]
    fn test_tag_lookup_first_namespace_wins() {
        assert_eq!(ID.tag("db"), Some("id"));
        assert_eq!(ID.tag("json"), Some("identifier"));
        assert_eq!(ID.tag("yaml"), None);
    }

    #[test]
    fn test_field_visibility() {
        assert!(ID.is_visible());

        let private = FieldDef { exported: false, ..ID };
        assert!(!private.is_visible());

        let positional = FieldDef {
            name: "0",
            anonymous: true,
            ..ID
        };
        assert!(!positional.is_visible());
    }

    #[test]
    fn test_downcast_field_value() {
        let value: &dyn FieldValue = &42_i64;
        assert!(value.is::<i64>());
        assert_eq!(value.downcast_ref::<i64>(), Some(&42));
        assert!(value.downcast_ref::<i32>().is_none());
        assert_eq!(format!("{value:?}"), "42");
    }

    #[test]
    fn test_indirect_follows_one_level() {
        let n = 7_u8;
        let r = &n;
        let rr = &r;

        assert_eq!(indirect(&n).kind(), Kind::Uint);
        assert_eq!(indirect(&r).kind(), Kind::Uint);
        assert_eq!(indirect(&rr).kind(), Kind::Pointer);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Struct.to_string(), "struct");
        assert_eq!(Kind::Pointer.to_string(), "pointer");
    }
}
