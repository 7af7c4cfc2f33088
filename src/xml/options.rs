//! Caller configuration of a parse.

use std::fmt;
use std::sync::Arc;

use crate::content::{Catalog, ContentContext};
use crate::xml::deserialize::substitution::EntityHook;

/// Root element name written by the home document writer.
pub const DEFAULT_ROOT_ELEMENT: &str = "home";

/// Collaborators and settings used while reading a document.
#[derive(Clone)]
pub struct HomeXmlOptions {
    /// Lookup of references that are not absolute URLs.
    pub content_context: Option<Arc<dyn ContentContext>>,
    /// Catalog consulted when no content context is given.
    pub catalog: Option<Arc<dyn Catalog>>,
    /// Hook applied to every entity once built.
    pub hook: Option<Arc<dyn EntityHook>>,
    pub root_element: String,
}

impl Default for HomeXmlOptions {
    fn default() -> Self {
        Self {
            content_context: None,
            catalog: None,
            hook: None,
            root_element: DEFAULT_ROOT_ELEMENT.to_string(),
        }
    }
}

impl HomeXmlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content_context(mut self, context: impl ContentContext + 'static) -> Self {
        self.content_context = Some(Arc::new(context));
        self
    }

    pub fn with_catalog(mut self, catalog: impl Catalog + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    pub fn with_hook(mut self, hook: impl EntityHook + 'static) -> Self {
        self.hook = Some(Arc::new(hook));
        self
    }

    pub fn with_root_element(mut self, name: impl Into<String>) -> Self {
        self.root_element = name.into();
        self
    }
}

impl fmt::Debug for HomeXmlOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HomeXmlOptions")
            .field("content_context", &self.content_context.is_some())
            .field("catalog", &self.catalog.is_some())
            .field("hook", &self.hook.is_some())
            .field("root_element", &self.root_element)
            .finish()
    }
}
