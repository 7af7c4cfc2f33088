//! Quick-xml helper utilities for home document deserialization.
//!
//! This module provides ergonomic wrappers around quick-xml's low-level APIs
//! so the handler only deals with element names, typed attributes and text.

pub mod de;

pub use de::{Attributes, ContentHandler, XmlCursor};
