//! Parsing of field tag values
//!
//! A tag value is a primary name optionally followed by comma separated
//! options, e.g. `"name,omitempty"`. Only the name is used to build keys.

use crate::config::{SKIP_TAG, TAG_OPTION_SEPARATOR};

/// A parsed tag value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagValue<'a> {
    /// Text before the first separator
    pub name: &'a str,
    /// Everything after the first separator, unparsed
    pub rest: &'a str,
}

impl<'a> TagValue<'a> {
    /// Whether the tag excludes its field (blank or `"-"`)
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.name.is_empty() || self.name == SKIP_TAG
    }

    /// Iterate over the non-empty options
    pub fn options(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        let rest = self.rest;
        rest.split(TAG_OPTION_SEPARATOR)
            .filter(|option| !option.is_empty())
    }

    /// Whether `option` is present in the option list
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options().any(|candidate| candidate == option)
    }
}

/// Split a raw tag value into its name and options
#[must_use]
pub fn parse(raw: &str) -> TagValue<'_> {
    match raw.split_once(TAG_OPTION_SEPARATOR) {
        Some((name, rest)) => TagValue { name, rest },
        None => TagValue {
            name: raw,
            rest: "",
        },
    }
}
