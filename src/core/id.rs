use std::fmt;

use uuid::Uuid;

/// A document-local identifier.
///
/// Identifiers read from a document are kept verbatim so that later elements
/// can refer to them. Entities declared without an `id` attribute receive a
/// generated one of the form `<prefix>-<uuid>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Id(String);

impl Id {
    pub fn new(value: impl Into<String>) -> Self {
        Id(value.into())
    }

    /// Generate a fresh identifier for an entity kind.
    pub fn generate(prefix: &str) -> Self {
        Id(format!("{}-{}", prefix, Uuid::new_v4()))
    }

    /// Use the declared identifier when present, otherwise generate one.
    pub fn declared_or_generated(declared: Option<&str>, prefix: &str) -> Self {
        match declared {
            Some(value) => Id::new(value),
            None => Id::generate(prefix),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::new(value)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
