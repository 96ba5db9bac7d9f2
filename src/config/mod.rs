//! Configuration for `StructRecord`.

/// Tag value that excludes a field from the record
pub const SKIP_TAG: &str = "-";

/// Separates the key from trailing options in a tag value (`"id,omitempty"`)
pub const TAG_OPTION_SEPARATOR: char = ',';

/// What to do when two fields resolve to the same key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateKeyPolicy {
    /// The later field takes over the key; the key is still listed once per field
    #[default]
    LastWins,
    /// Fail construction with `StructRecordError::DuplicateKey`
    Reject,
}

/// Configuration for building a `StructRecord`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructRecordConfig {
    /// Tag namespace used to name keys; `None` or empty uses field names
    pub tag_name: Option<String>,
    /// Handling of fields that resolve to the same key
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl StructRecordConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name keys after the values of the `tag_name` namespace
    #[must_use]
    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    /// Set the duplicate key policy
    #[must_use]
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// The configured namespace, treating an empty string as unset
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag_name.as_deref().filter(|tag| !tag.is_empty())
    }
}
