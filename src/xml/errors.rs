//! Error types for home document deserialization.

use std::fmt;

use thiserror::Error;

use crate::content::ContentError;

/// An error aborting the deserialization of a home document.
///
/// Every variant raised by a builder names the element and, where relevant,
/// the attribute that caused it. The event source wraps these in
/// [`HomeXmlError::At`] to add the position and open element path.
#[derive(Debug, Error)]
pub enum HomeXmlError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required attribute is absent.
    #[error("missing attribute {element}@{attribute}")]
    MissingAttribute { element: String, attribute: String },

    /// An attribute value could not be parsed.
    #[error("invalid value for {element}@{attribute}: {message} (got '{value}')")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
        message: String,
    },

    /// A required child element is absent.
    #[error("missing element {child} in {element}")]
    MissingElement { element: String, child: String },

    /// A present reference could not be turned into content.
    #[error("can't resolve {element}@{attribute} '{reference}': {reason}")]
    UnresolvedContent {
        element: String,
        attribute: String,
        reference: String,
        reason: String,
        #[source]
        source: Option<ContentError>,
    },

    #[error("unexpected element: expected {expected}, found {found}")]
    UnexpectedElement { expected: String, found: String },

    #[error("unexpected end of document")]
    UnexpectedEof,

    /// The handler received an event its current state does not accept.
    #[error("invalid handler state: {0}")]
    InvalidState(String),

    /// The substitution hook returned an incompatible entity.
    #[error("invalid substitution for {element}: {message}")]
    Substitution { element: String, message: String },

    #[error("{source}{context}")]
    At {
        context: ErrorContext,
        #[source]
        source: Box<HomeXmlError>,
    },
}

impl HomeXmlError {
    pub(crate) fn invalid(
        element: &str,
        attribute: &str,
        value: &str,
        message: impl fmt::Display,
    ) -> Self {
        HomeXmlError::InvalidAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        }
    }

    /// Attach position and element path, unless the error already carries them.
    pub fn with_context(self, context: ErrorContext) -> Self {
        match self {
            HomeXmlError::At { .. } => self,
            other => HomeXmlError::At {
                context,
                source: Box::new(other),
            },
        }
    }

    /// The error without its positional wrapper.
    pub fn innermost(&self) -> &HomeXmlError {
        match self {
            HomeXmlError::At { source, .. } => source.innermost(),
            other => other,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            HomeXmlError::At { context, .. } => Some(context),
            _ => None,
        }
    }
}

/// Where in the document an error occurred.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorContext {
    /// Byte offset in the document (if available).
    pub position: Option<u64>,
    /// Open elements from the root, e.g. `home/furnitureGroup/pieceOfFurniture`.
    pub path: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: u64) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_path<S: Into<String>>(mut self, path: S) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(position) = self.position {
            parts.push(format!(" at byte {}", position));
        }

        if let Some(ref path) = self.path {
            parts.push(format!(" in {}", path));
        }

        if parts.is_empty() {
            return Ok(());
        }

        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let context = ErrorContext::new()
            .with_position(42)
            .with_path("home/wall");
        assert_eq!(context.to_string(), " at byte 42, in home/wall");
        assert_eq!(ErrorContext::new().to_string(), "");
    }

    #[test]
    fn test_with_context_wraps_once() {
        let error = HomeXmlError::MissingAttribute {
            element: "wall".to_string(),
            attribute: "thickness".to_string(),
        }
        .with_context(ErrorContext::new().with_position(10))
        .with_context(ErrorContext::new().with_position(99));

        assert_eq!(error.context().unwrap().position, Some(10));
        assert!(matches!(
            error.innermost(),
            HomeXmlError::MissingAttribute { attribute, .. } if attribute == "thickness"
        ));
        assert_eq!(
            error.to_string(),
            "missing attribute wall@thickness at byte 10"
        );
    }
}
