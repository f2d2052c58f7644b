//! Document-type filter values.
//!
//! The search backend tags every document with a `doc_type`. The dashboard
//! lets users scope a search to one of them, or to `all`. Values coming from
//! outside the process are checked against a [`DocTypeAllowList`] before they
//! are handed to the filter state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NavigatorError, Result};

/// Built-in document types, in display order.
pub const BUILTIN_DOC_TYPES: &[&str] = &["all", "protocol", "paper", "thesis"];

/// A document-type filter value as forwarded to the search component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocType(String);

impl DocType {
    pub const ALL: &'static str = "all";

    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Wraps a value without checking it. Used by the filter state, which
    /// forwards whatever it is given.
    pub fn unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    /// Human label shown on the filter chip.
    pub fn label(&self) -> String {
        match self.0.as_str() {
            "all" => "All".to_string(),
            "protocol" => "Protocols".to_string(),
            "paper" => "Papers".to_string(),
            "thesis" => "Theses".to_string(),
            other => {
                let mut chars = other.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

impl Default for DocType {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The set of document types accepted at the process boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTypeAllowList {
    values: Vec<DocType>,
}

impl Default for DocTypeAllowList {
    fn default() -> Self {
        Self {
            values: BUILTIN_DOC_TYPES.iter().map(|v| DocType::unchecked(*v)).collect(),
        }
    }
}

impl DocTypeAllowList {
    /// Built-in types followed by `extra`, skipping blanks and duplicates.
    /// Values must be made of ASCII letters, digits, `-` or `_`.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for raw in extra {
            let value = normalise(raw.as_ref());
            if value.is_empty() || list.contains(&value) {
                continue;
            }
            if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
                tracing::warn!(doc_type = %value, "Ignoring document type with unsupported characters");
                continue;
            }
            list.values.push(DocType::unchecked(value));
        }
        list
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.as_str() == value)
    }

    /// Normalises `raw` (trimmed, lowercased) and accepts it only if listed.
    pub fn parse(&self, raw: &str) -> Result<DocType> {
        let value = normalise(raw);
        if self.contains(&value) {
            Ok(DocType::unchecked(value))
        } else {
            Err(NavigatorError::InvalidDocType(raw.to_string()))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocType> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn normalise(raw: &str) -> String {
    raw.trim().to_lowercase()
}
