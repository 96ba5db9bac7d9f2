//! Struct-backed records
//!
//! [`StructRecord`] wraps a struct (or a pointer to one) and exposes it as a
//! [`Record`]. Keys come from the field names or, when a tag namespace is
//! configured, from the fields' tag values in that namespace. Many database
//! mappers use a `db` tag to name columns; with `"db"` as the namespace the
//! record's keys are exactly those column names.
//!
//! The key to field mapping is computed once at construction. Lookups always
//! read the wrapped value, so mutations made through
//! [`StructRecord::inner_mut`] are visible to later calls.

use log::{debug, error, trace, warn};
use rustc_hash::FxHashMap;

use crate::config::{DuplicateKeyPolicy, StructRecordConfig};
use crate::error::{Result, StructRecordError};
use crate::record::tag;
use crate::record::{Inner, Record};
use crate::reflect::{FieldDef, FieldValue, Kind, Reflect, indirect};

/// A struct exposed through the [`Record`] interface
#[derive(Debug, Clone)]
pub struct StructRecord<S> {
    tag_name: Option<String>,
    record: S,
    keys: Vec<String>,
    key_to_field: FxHashMap<String, usize>,
}

impl<S: Reflect> StructRecord<S> {
    /// Wrap `record`, keying fields by their declared names
    ///
    /// # Errors
    ///
    /// `StructRecordError::NotAStruct` if `record` is neither a struct nor a
    /// pointer to one.
    pub fn new(record: S) -> Result<Self> {
        Self::with_config(record, &StructRecordConfig::default())
    }

    /// Wrap `record`, keying fields by their tag values in `tag_name`
    ///
    /// Fields without a value in that namespace, or whose value is blank or
    /// `"-"`, are left out. An empty `tag_name` behaves like [`StructRecord::new`].
    pub fn with_tag(record: S, tag_name: &str) -> Result<Self> {
        Self::with_config(record, &StructRecordConfig::new().with_tag_name(tag_name))
    }

    /// Wrap `record` using an explicit configuration
    pub fn with_config(record: S, config: &StructRecordConfig) -> Result<Self> {
        let tag_name = config.tag();
        let target = indirect(&record);
        if target.kind() != Kind::Struct {
            return Err(StructRecordError::NotAStruct {
                kind: target.kind(),
                type_name: target.type_name(),
            });
        }

        let type_name = target.type_name();
        let fields = target.fields();
        let mut keys = Vec::with_capacity(fields.len());
        let mut key_to_field: FxHashMap<String, usize> = FxHashMap::default();

        for (index, field) in fields.iter().enumerate() {
            if !field.is_visible() {
                trace!("{type_name}: skipping field {} (not visible)", field.name);
                continue;
            }
            let Some(key) = extract_key(field, tag_name) else {
                trace!(
                    "{type_name}: skipping field {} (no usable {:?} tag)",
                    field.name,
                    tag_name.unwrap_or_default()
                );
                continue;
            };

            if let Some(&previous) = key_to_field.get(key) {
                let first = fields[previous].name;
                match config.duplicate_keys {
                    DuplicateKeyPolicy::Reject => {
                        return Err(StructRecordError::DuplicateKey {
                            key: key.to_string(),
                            first,
                            second: field.name,
                        });
                    }
                    DuplicateKeyPolicy::LastWins => {
                        warn!(
                            "{type_name}: key {key:?} of field {first} is taken over by field {}",
                            field.name
                        );
                    }
                }
            }

            key_to_field.insert(key.to_string(), index);
            keys.push(key.to_string());
        }

        debug!(
            "Built struct record for {type_name} with {} keys (tag: {:?})",
            keys.len(),
            tag_name
        );

        Ok(Self {
            tag_name: tag_name.map(str::to_string),
            record,
            keys,
            key_to_field,
        })
    }

    /// Current value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&dyn FieldValue> {
        let index = *self.key_to_field.get(key)?;
        indirect(&self.record).field(index)
    }

    /// Keys in field declaration order
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Values in the order of [`StructRecord::keys`]
    ///
    /// Returns `None` if any key fails to resolve. That can only happen when
    /// a `Reflect` implementation disagrees with its own field list.
    #[must_use]
    pub fn values(&self) -> Option<Vec<&dyn FieldValue>> {
        self.keys
            .iter()
            .map(|key| {
                let value = self.get(key);
                if value.is_none() {
                    error!("Key {key:?} is listed but has no readable field");
                }
                value
            })
            .collect()
    }

    /// `(key, value)` pairs in key order
    ///
    /// A key that fails to resolve is logged and skipped; use
    /// [`StructRecord::values`] to detect that case.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn FieldValue)> {
        self.keys.iter().filter_map(move |key| {
            let value = self.get(key);
            if value.is_none() {
                error!("Key {key:?} is listed but has no readable field, skipping");
            }
            value.map(|value| (key.as_str(), value))
        })
    }

    /// Whether `key` is one of the record's keys
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.key_to_field.contains_key(key)
    }

    /// Name of the field backing `key`
    #[must_use]
    pub fn field_name(&self, key: &str) -> Option<&'static str> {
        let index = *self.key_to_field.get(key)?;
        indirect(&self.record)
            .fields()
            .get(index)
            .map(|field| field.name)
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether there are no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S> StructRecord<S> {
    /// Tag namespace used for the keys, if any
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    /// The wrapped value, as originally supplied
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.record
    }

    /// Mutable access to the wrapped value
    ///
    /// The key set stays fixed; only field values can change.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.record
    }

    /// Give back the wrapped value
    pub fn into_inner(self) -> S {
        self.record
    }
}

/// Key for `field`, or `None` if the field is left out
fn extract_key(field: &FieldDef, tag_name: Option<&str>) -> Option<&'static str> {
    let Some(tag_name) = tag_name else {
        return Some(field.name);
    };
    let value = tag::parse(field.tag(tag_name)?);
    if value.is_skipped() {
        return None;
    }
    Some(value.name)
}

impl<S: Reflect> Record for StructRecord<S> {
    fn keys(&self) -> &[String] {
        Self::keys(self)
    }

    fn get(&self, key: &str) -> Option<&dyn FieldValue> {
        Self::get(self, key)
    }

    fn values(&self) -> Option<Vec<&dyn FieldValue>> {
        Self::values(self)
    }
}

impl<S> Inner for StructRecord<S> {
    type Inner = S;

    fn inner(&self) -> &S {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reflect;

    #[derive(Debug, Clone, Reflect)]
    pub struct Account {
        #[tag(db = "id")]
        pub id: u32,
        #[tag(db = "email,omitempty")]
        pub email: String,
        #[tag(db = "-")]
        pub password_hash: String,
        pub notes: Option<String>,
        balance: i64,
    }

    fn account() -> Account {
        Account {
            id: 1,
            email: "a@example.com".to_string(),
            password_hash: "x".to_string(),
            notes: None,
            balance: 10,
        }
    }

    #[test]
    fn test_extract_key() {
        let fields = account().fields();
        assert_eq!(extract_key(&fields[0], None), Some("id"));
        assert_eq!(extract_key(&fields[1], Some("db")), Some("email"));
        assert_eq!(extract_key(&fields[2], Some("db")), None);
        assert_eq!(extract_key(&fields[3], Some("db")), None);
        assert_eq!(extract_key(&fields[3], Some("json")), None);
    }

    #[test]
    fn test_private_fields_are_never_keys() {
        let record = StructRecord::new(account()).unwrap();
        assert_eq!(record.keys(), ["id", "email", "password_hash", "notes"]);
        assert!(!record.contains_key("balance"));
        assert_eq!(record.inner().balance, 10);
    }

    #[test]
    fn test_field_name_for_tagged_key() {
        let record = StructRecord::with_tag(account(), "db").unwrap();
        assert_eq!(record.tag_name(), Some("db"));
        assert_eq!(record.field_name("email"), Some("email"));
        assert_eq!(record.field_name("password_hash"), None);
    }

    #[test]
    fn test_empty_tag_uses_field_names() {
        let record = StructRecord::with_tag(account(), "").unwrap();
        assert_eq!(record.tag_name(), None);
        assert_eq!(record.len(), 4);
    }

    #[derive(Debug, Reflect)]
    pub struct Aliased {
        #[tag(db = "id")]
        pub id: u32,
        #[tag(db = "id,omitempty")]
        pub legacy_id: u32,
    }

    #[test]
    fn test_duplicate_keys() {
        let aliased = Aliased { id: 1, legacy_id: 2 };

        let record = StructRecord::with_tag(&aliased, "db").unwrap();
        assert_eq!(record.keys(), ["id", "id"]);
        assert_eq!(record.field_name("id"), Some("legacy_id"));

        let config = StructRecordConfig::new()
            .with_tag_name("db")
            .with_duplicate_keys(DuplicateKeyPolicy::Reject);
        let err = StructRecord::with_config(&aliased, &config).unwrap_err();
        assert!(matches!(
            err,
            StructRecordError::DuplicateKey {
                first: "id",
                second: "legacy_id",
                ..
            }
        ));
    }

    /// Lists a visible field but never hands out its value
    struct Inconsistent;

    impl Reflect for Inconsistent {
        fn kind(&self) -> Kind {
            Kind::Struct
        }

        fn fields(&self) -> &'static [FieldDef] {
            const FIELDS: &[FieldDef] = &[FieldDef {
                name: "ghost",
                tags: &[],
                exported: true,
                anonymous: false,
            }];
            FIELDS
        }
    }

    #[test]
    fn test_unreadable_field_is_not_silently_dropped() {
        let record = StructRecord::new(Inconsistent).unwrap();
        assert_eq!(record.keys(), ["ghost"]);
        assert!(record.get("ghost").is_none());
        assert!(record.values().is_none());
        assert_eq!(record.iter().count(), 0);
    }

    #[test]
    fn test_iter_pairs() {
        let record = StructRecord::with_tag(account(), "db").unwrap();
        let pairs: Vec<_> = record
            .iter()
            .map(|(key, value)| format!("{key}={value:?}"))
            .collect();
        assert_eq!(pairs, ["id=1", "email=\"a@example.com\""]);
    }
}
