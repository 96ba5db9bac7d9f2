//! The `Record` abstraction
//!
//! A record is anything that can list its keys, look a value up by key, and
//! list all of its values in key order. [`StructRecord`] adapts a plain
//! struct to this interface.

pub mod struct_record;
pub mod tag;

pub use struct_record::StructRecord;

use crate::reflect::FieldValue;

/// Uniform key/value view over a data source
pub trait Record {
    /// Keys in their stable order
    fn keys(&self) -> &[String];

    /// Current value for `key`, or `None` if the key is unknown
    fn get(&self, key: &str) -> Option<&dyn FieldValue>;

    /// All values in the order of [`Record::keys`]
    ///
    /// `None` signals that a listed key could not be resolved, which is a
    /// bug in the implementation rather than an empty record.
    fn values(&self) -> Option<Vec<&dyn FieldValue>>;

    /// Number of keys
    fn len(&self) -> usize {
        self.keys().len()
    }

    /// Whether the record has no keys
    fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }
}

/// Access to the value a record wraps
pub trait Inner {
    /// The wrapped type
    type Inner;

    /// The wrapped value, as originally supplied
    fn inner(&self) -> &Self::Inner;
}
