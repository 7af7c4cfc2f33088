//! Content handles and the collaborators that resolve them.
//!
//! A [`Content`] is a shared handle on an image, icon or 3D model used by the
//! home. Handles are cheap to clone and every entity pointing at the same
//! resource shares the same underlying allocation.

pub mod catalog;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

pub use catalog::{Catalog, CatalogPiece, CatalogTexture, InMemoryCatalog};

/// URL schemes accepted as directly resolvable locations.
const URL_SCHEMES: &[&str] = &["http", "https", "file", "jar", "ftp", "data"];

/// Where the bytes of a content live.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentSource {
    /// An absolute URL.
    Url(String),
    /// Bytes carried alongside the document (archive entry, unpacked file, memory).
    Embedded { name: String, data: Vec<u8> },
}

/// A shared handle on a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Content(Arc<ContentSource>);

impl Content {
    pub fn url(location: impl Into<String>) -> Self {
        Content(Arc::new(ContentSource::Url(location.into())))
    }

    pub fn embedded(name: impl Into<String>, data: Vec<u8>) -> Self {
        Content(Arc::new(ContentSource::Embedded {
            name: name.into(),
            data,
        }))
    }

    /// Parse `reference` as an absolute URL with a known scheme.
    pub fn from_absolute_url(reference: &str) -> Option<Self> {
        is_absolute_url(reference).then(|| Content::url(reference))
    }

    pub fn source(&self) -> &ContentSource {
        &self.0
    }

    /// The full location or entry name of this content.
    pub fn location(&self) -> &str {
        match self.source() {
            ContentSource::Url(url) => url,
            ContentSource::Embedded { name, .. } => name,
        }
    }

    /// The last path segment of the location, used to cross-check catalog matches.
    pub fn file_name(&self) -> &str {
        file_name(self.location())
    }

    /// Whether two handles share the same allocation.
    pub fn ptr_eq(&self, other: &Content) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.location())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Content {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.location())
    }
}

/// Return the part of a location after its last `/`.
pub fn file_name(location: &str) -> &str {
    location.rsplit('/').next().unwrap_or(location)
}

/// Check whether a reference is an absolute URL with a scheme this crate accepts.
pub fn is_absolute_url(reference: &str) -> bool {
    let Some((scheme, rest)) = reference.split_once(':') else {
        return false;
    };
    !rest.is_empty()
        && scheme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
        && URL_SCHEMES.iter().any(|known| scheme.eq_ignore_ascii_case(known))
}

/// Errors reported by a [`ContentContext`].
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no content named '{0}'")]
    NotFound(String),
    #[error("failed to read content '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Caller-supplied lookup of reference tokens that are not absolute URLs.
pub trait ContentContext {
    fn lookup_content(&self, token: &str) -> Result<Content, ContentError>;
}

/// A content context backed by an in-memory table.
#[derive(Debug, Clone, Default)]
pub struct MapContentContext {
    entries: HashMap<String, Content>,
}

impl MapContentContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: impl Into<String>, content: Content) -> &mut Self {
        self.entries.insert(token.into(), content);
        self
    }

    pub fn with(mut self, token: impl Into<String>, content: Content) -> Self {
        self.insert(token, content);
        self
    }
}

impl ContentContext for MapContentContext {
    fn lookup_content(&self, token: &str) -> Result<Content, ContentError> {
        self.entries
            .get(token)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(token.to_string()))
    }
}

/// A content context reading tokens as paths relative to a directory,
/// typically the unpacked entries of a saved home.
#[derive(Debug, Clone)]
pub struct DirectoryContentContext {
    base: PathBuf,
}

impl DirectoryContentContext {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl ContentContext for DirectoryContentContext {
    fn lookup_content(&self, token: &str) -> Result<Content, ContentError> {
        let relative = Path::new(token);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(ContentError::NotFound(token.to_string()));
        }
        let path = self.base.join(relative);
        match std::fs::read(&path) {
            Ok(data) => Ok(Content::embedded(token, data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ContentError::NotFound(token.to_string()))
            }
            Err(source) => Err(ContentError::Io {
                name: token.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls() {
        assert!(is_absolute_url("http://example.org/model.obj"));
        assert!(is_absolute_url("jar:file:/tmp/x.zip!/model.obj"));
        assert!(is_absolute_url("FILE:/tmp/a.png"));
        assert!(!is_absolute_url("0"));
        assert!(!is_absolute_url("12/model.obj"));
        assert!(!is_absolute_url("unknown:thing"));
        assert!(!is_absolute_url("http:"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("jar:file:/c.zip!/textures/wood.jpg"), "wood.jpg");
        assert_eq!(file_name("wood.jpg"), "wood.jpg");
    }

    #[test]
    fn test_map_context_shares_handles() {
        let content = Content::embedded("0", vec![1, 2, 3]);
        let context = MapContentContext::new().with("0", content.clone());
        let found = context.lookup_content("0").unwrap();
        assert!(found.ptr_eq(&content));
        assert!(matches!(
            context.lookup_content("1"),
            Err(ContentError::NotFound(_))
        ));
    }

    #[test]
    fn test_directory_context_rejects_escaping_paths() {
        let context = DirectoryContentContext::new("/tmp");
        assert!(context.lookup_content("../etc/passwd").is_err());
    }
}
