//! Reader for home design documents.
//!
//! [`xml::from_str`] and its siblings turn a home document into a fully
//! linked [`Home`]: levels, walls, furniture, rooms, decorations, cameras and
//! settings, with every resource reference resolved to shared [`Content`].

pub mod content;
pub mod core;
pub mod home;
pub mod xml;

pub mod types;

#[cfg(test)]
mod test_utils;

pub use crate::content::Content;
pub use crate::core::Id;
pub use crate::home::Home;
pub use crate::types::WithWarnings;
pub use crate::xml::{HomeXmlError, HomeXmlOptions};
