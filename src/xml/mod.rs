//! Reading home documents.
//!
//! The entry points drive quick-xml through an [`XmlCursor`] into a
//! [`HomeXmlHandler`]:
//!
//! ```no_run
//! use homexml::xml::{self, HomeXmlOptions};
//!
//! let home = xml::from_str(r#"<home version="7200" name="Flat"/>"#, &HomeXmlOptions::default())?;
//! assert_eq!(home.name.as_deref(), Some("Flat"));
//! # Ok::<(), homexml::xml::HomeXmlError>(())
//! ```

pub mod deserialize;
pub mod errors;
pub mod options;
pub mod quick;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::Reader;

use crate::home::Home;
use crate::types::WithWarnings;

pub use deserialize::{HandlerState, HomeXmlHandler};
pub use deserialize::substitution::{EntityHook, HomeEntity, Substitution};
pub use errors::{ErrorContext, HomeXmlError};
pub use options::HomeXmlOptions;
pub use quick::{Attributes, ContentHandler, XmlCursor};

/// Read a home from a document held in memory.
pub fn from_str(document: &str, options: &HomeXmlOptions) -> Result<Home, HomeXmlError> {
    from_str_with_warnings(document, options).map(WithWarnings::unwrap)
}

/// Read a home, also returning the defects tolerated along the way.
pub fn from_str_with_warnings(
    document: &str,
    options: &HomeXmlOptions,
) -> Result<WithWarnings<Home, String>, HomeXmlError> {
    from_reader_with_warnings(document.as_bytes(), options)
}

pub fn from_reader<R: BufRead>(reader: R, options: &HomeXmlOptions) -> Result<Home, HomeXmlError> {
    from_reader_with_warnings(reader, options).map(WithWarnings::unwrap)
}

pub fn from_reader_with_warnings<R: BufRead>(
    reader: R,
    options: &HomeXmlOptions,
) -> Result<WithWarnings<Home, String>, HomeXmlError> {
    let mut reader = Reader::from_reader(reader);
    let mut buf = Vec::new();
    let mut handler = HomeXmlHandler::new(options);
    XmlCursor::new(&mut reader, &mut buf).drive(&mut handler)?;
    handler.finish()
}

pub fn from_path(path: impl AsRef<Path>, options: &HomeXmlOptions) -> Result<Home, HomeXmlError> {
    from_path_with_warnings(path, options).map(WithWarnings::unwrap)
}

pub fn from_path_with_warnings(
    path: impl AsRef<Path>,
    options: &HomeXmlOptions,
) -> Result<WithWarnings<Home, String>, HomeXmlError> {
    let file = File::open(path)?;
    from_reader_with_warnings(BufReader::new(file), options)
}
