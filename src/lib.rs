//! Expose plain Rust structs through a uniform key/value `Record` interface.
//!
//! Keys are derived from per-field tags rather than field names directly:
//!
//! ```
//! use struct_record::{Reflect, StructRecord};
//!
//! #[derive(Debug, Reflect)]
//! pub struct User {
//!     #[tag(db = "id")]
//!     pub id: i64,
//!     #[tag(db = "name,omitempty")]
//!     pub name: String,
//!     secret: String,
//! }
//!
//! let user = User { id: 7, name: "Ada".into(), secret: "hunter2".into() };
//! let record = StructRecord::with_tag(&user, "db")?;
//!
//! assert_eq!(record.keys(), ["id", "name"]);
//! assert_eq!(record.get("id").and_then(|v| v.downcast_ref::<i64>()), Some(&7));
//! assert!(record.get("secret").is_none());
//! # Ok::<(), struct_record::StructRecordError>(())
//! ```

extern crate self as struct_record;

pub mod config;
pub mod error;
pub mod record;
pub mod reflect;

// Re-export the most common types for easier use
pub use config::{DuplicateKeyPolicy, StructRecordConfig};
pub use error::{Result, StructRecordError};
pub use record::{Inner, Record, StructRecord};
pub use reflect::{FieldDef, FieldValue, Kind, Reflect};

// Derive macro
pub use struct_record_macros::Reflect;
