//! Deserialization helpers for quick-xml.
//!
//! Provides:
//! - `Attributes`: the attribute codec, turning attribute text into typed values
//! - `ContentHandler`: the callbacks a streaming handler implements
//! - `XmlCursor`: pumps quick-xml events into a `ContentHandler` with path tracking

use std::cell::RefCell;
use std::io::BufRead;
use std::str::FromStr;

use itertools::Itertools;
use log::warn;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use rust_decimal::Decimal;

use crate::xml::errors::{ErrorContext, HomeXmlError};

/// The attributes of one element, in document order, with typed getters.
///
/// Getters follow two failure policies. Numeric, color and decimal values are
/// strict: a missing required value or any malformed value is an error naming
/// the element and attribute. Enumerated and boolean values are lenient: text
/// outside the known set is ignored and the caller's default applies. Each
/// such recovery is recorded and can be collected with [`Attributes::take_recovered`].
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<(String, String)>,
    /// The element name for error messages
    element_name: String,
    recovered: RefCell<Vec<String>>,
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.element_name == other.element_name
    }
}

impl Attributes {
    /// Create an empty attribute map for `element_name`.
    pub fn empty(element_name: &str) -> Self {
        Self {
            entries: Vec::new(),
            element_name: element_name.to_string(),
            recovered: RefCell::new(Vec::new()),
        }
    }

    /// Build an attribute map from owned pairs.
    pub fn from_pairs<K, V, I>(element_name: &str, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            element_name: element_name.to_string(),
            recovered: RefCell::new(Vec::new()),
        }
    }

    /// Parse attributes from a `BytesStart` event.
    ///
    /// This decodes and unescapes all attribute values once.
    pub fn from_start<R: BufRead>(
        start: &BytesStart<'_>,
        reader: &Reader<R>,
    ) -> Result<Self, HomeXmlError> {
        let element_name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let mut entries = Vec::new();

        for attr_result in start.attributes() {
            let attr = attr_result?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.decode_and_unescape_value(reader)?.to_string();
            entries.push((key, value));
        }

        Ok(Self {
            entries,
            element_name,
            recovered: RefCell::new(Vec::new()),
        })
    }

    /// Get the element name this map was parsed from.
    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    /// Iterate over attributes in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an attribute is present (regardless of value).
    pub fn has(&self, key: &str) -> bool {
        self.get_opt(key).is_some()
    }

    /// Get an optional string attribute.
    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get a required string attribute, returning an error if missing.
    pub fn get_req(&self, key: &str) -> Result<&str, HomeXmlError> {
        self.get_opt(key)
            .ok_or_else(|| HomeXmlError::MissingAttribute {
                element: self.element_name.clone(),
                attribute: key.to_string(),
            })
    }

    /// Get an optional string attribute as an owned String.
    pub fn get_opt_string(&self, key: &str) -> Option<String> {
        self.get_opt(key).map(str::to_string)
    }

    /// Get a required string attribute as an owned String.
    pub fn get_req_string(&self, key: &str) -> Result<String, HomeXmlError> {
        self.get_req(key).map(str::to_string)
    }

    /// Get an optional attribute parsed as a type implementing FromStr.
    pub fn get_opt_parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, HomeXmlError>
    where
        T::Err: std::fmt::Display,
    {
        match self.get_opt(key) {
            Some(s) => s
                .parse::<T>()
                .map(Some)
                .map_err(|e| HomeXmlError::invalid(&self.element_name, key, s, e)),
            None => Ok(None),
        }
    }

    /// Get a required attribute parsed as a type implementing FromStr.
    pub fn get_req_parsed<T: FromStr>(&self, key: &str) -> Result<T, HomeXmlError>
    where
        T::Err: std::fmt::Display,
    {
        let s = self.get_req(key)?;
        s.parse::<T>()
            .map_err(|e| HomeXmlError::invalid(&self.element_name, key, s, e))
    }

    pub fn get_req_f32(&self, key: &str) -> Result<f32, HomeXmlError> {
        self.get_req_parsed(key)
    }

    pub fn get_opt_f32(&self, key: &str) -> Result<Option<f32>, HomeXmlError> {
        self.get_opt_parsed(key)
    }

    /// Get an optional f32 attribute, or `default` when absent.
    pub fn get_f32_or(&self, key: &str, default: f32) -> Result<f32, HomeXmlError> {
        Ok(self.get_opt_f32(key)?.unwrap_or(default))
    }

    pub fn get_req_i64(&self, key: &str) -> Result<i64, HomeXmlError> {
        self.get_req_parsed(key)
    }

    pub fn get_opt_i64(&self, key: &str) -> Result<Option<i64>, HomeXmlError> {
        self.get_opt_parsed(key)
    }

    pub fn get_opt_i32(&self, key: &str) -> Result<Option<i32>, HomeXmlError> {
        self.get_opt_parsed(key)
    }

    pub fn get_i32_or(&self, key: &str, default: i32) -> Result<i32, HomeXmlError> {
        Ok(self.get_opt_i32(key)?.unwrap_or(default))
    }

    /// Get an optional decimal attribute with exact decimal semantics.
    pub fn get_opt_decimal(&self, key: &str) -> Result<Option<Decimal>, HomeXmlError> {
        self.get_opt_parsed(key)
    }

    /// Get an optional color written as hexadecimal ARGB, e.g. `FF00FF00`.
    pub fn get_opt_color(&self, key: &str) -> Result<Option<u32>, HomeXmlError> {
        match self.get_opt(key) {
            Some(s) => u32::from_str_radix(s, 16)
                .map(Some)
                .map_err(|e| HomeXmlError::invalid(&self.element_name, key, s, e)),
            None => Ok(None),
        }
    }

    pub fn get_req_color(&self, key: &str) -> Result<u32, HomeXmlError> {
        let s = self.get_req(key)?;
        u32::from_str_radix(s, 16).map_err(|e| HomeXmlError::invalid(&self.element_name, key, s, e))
    }

    /// Get a boolean attribute written `true` or `false`.
    ///
    /// Absence, or any other text, yields `default`.
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        match self.get_opt(key) {
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                self.recover(key, other, "expected true/false");
                default
            }
            None => default,
        }
    }

    /// Get an enumerated attribute.
    ///
    /// Unknown text is not an error: it is recorded and `None` is returned so
    /// the caller keeps its default.
    pub fn get_opt_enum<T>(&self, key: &str, from_name: impl Fn(&str) -> Option<T>) -> Option<T> {
        let text = self.get_opt(key)?;
        let value = from_name(text);
        if value.is_none() {
            self.recover(key, text, "unknown value");
        }
        value
    }

    /// Get a space separated list of floats.
    pub fn get_opt_f32_list(&self, key: &str) -> Result<Option<Vec<f32>>, HomeXmlError> {
        match self.get_opt(key) {
            Some(s) => s
                .split_whitespace()
                .map(|item| {
                    item.parse::<f32>()
                        .map_err(|e| HomeXmlError::invalid(&self.element_name, key, s, e))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            None => Ok(None),
        }
    }

    /// Get a list of exactly `N` floats.
    pub fn get_opt_f32_array<const N: usize>(
        &self,
        key: &str,
    ) -> Result<Option<[f32; N]>, HomeXmlError> {
        let Some(values) = self.get_opt_f32_list(key)? else {
            return Ok(None);
        };
        let count = values.len();
        <[f32; N]>::try_from(values).map(Some).map_err(|_| {
            HomeXmlError::invalid(
                &self.element_name,
                key,
                self.get_opt(key).unwrap_or_default(),
                format!("expected {} values, found {}", N, count),
            )
        })
    }

    fn recover(&self, key: &str, value: &str, reason: &str) {
        let message = format!(
            "ignored {}@{}='{}': {}",
            self.element_name, key, value, reason
        );
        warn!("{}", message);
        self.recovered.borrow_mut().push(message);
    }

    /// Drain the descriptions of values ignored by lenient getters.
    pub fn take_recovered(&self) -> Vec<String> {
        std::mem::take(&mut *self.recovered.borrow_mut())
    }
}

/// Receiver of the element events of a document.
///
/// `Empty` elements are reported as a start immediately followed by an end.
pub trait ContentHandler {
    fn start_element(&mut self, name: &str, attributes: Attributes) -> Result<(), HomeXmlError>;
    fn characters(&mut self, text: &str) -> Result<(), HomeXmlError>;
    fn end_element(&mut self, name: &str) -> Result<(), HomeXmlError>;
}

/// A wrapper around quick-xml's Reader that provides:
/// - Path tracking for better error messages
/// - Dispatch of element events to a [`ContentHandler`]
pub struct XmlCursor<'a, R: BufRead> {
    reader: &'a mut Reader<R>,
    buf: &'a mut Vec<u8>,
    /// Path stack for error context (e.g., ["home", "furnitureGroup", "pieceOfFurniture"])
    path: Vec<String>,
}

impl<'a, R: BufRead> XmlCursor<'a, R> {
    /// Create a new cursor wrapping a reader and buffer.
    pub fn new(reader: &'a mut Reader<R>, buf: &'a mut Vec<u8>) -> Self {
        Self {
            reader,
            buf,
            path: Vec::new(),
        }
    }

    /// Push an element onto the path stack (for error context).
    pub fn push_path(&mut self, element: &str) {
        self.path.push(element.to_string());
    }

    /// Pop the most recent element from the path stack.
    pub fn pop_path(&mut self) {
        self.path.pop();
    }

    /// Get the current path as a string (for error messages).
    pub fn path_str(&self) -> String {
        self.path.iter().join("/")
    }

    /// Build the error context for the current position.
    pub fn context(&self) -> ErrorContext {
        let context = ErrorContext::new().with_position(self.reader.buffer_position() as u64);
        if self.path.is_empty() {
            context
        } else {
            context.with_path(self.path_str())
        }
    }

    /// Read every event up to the end of the input, dispatching elements to `handler`.
    ///
    /// Errors are decorated with the position and open element path.
    pub fn drive<H: ContentHandler>(&mut self, handler: &mut H) -> Result<(), HomeXmlError> {
        self.drive_events(handler)
            .map_err(|e| e.with_context(self.context()))
    }

    fn drive_events<H: ContentHandler>(&mut self, handler: &mut H) -> Result<(), HomeXmlError> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(self.buf)? {
                Event::Start(e) => Owned::Start(Attributes::from_start(&e, self.reader)?),
                Event::Empty(e) => Owned::Empty(Attributes::from_start(&e, self.reader)?),
                Event::End(e) => Owned::End(String::from_utf8_lossy(e.name().as_ref()).to_string()),
                Event::Text(e) => Owned::Text(e.unescape()?.into_owned()),
                // CData content doesn't need unescaping, just convert to string
                Event::CData(e) => Owned::Text(String::from_utf8_lossy(e.as_ref()).to_string()),
                Event::Eof => break,
                // Decl, Comment, PI, DocType
                _ => continue,
            };

            match event {
                Owned::Start(attributes) => {
                    let name = attributes.element_name().to_string();
                    self.push_path(&name);
                    handler.start_element(&name, attributes)?;
                }
                Owned::Empty(attributes) => {
                    let name = attributes.element_name().to_string();
                    self.push_path(&name);
                    handler.start_element(&name, attributes)?;
                    handler.end_element(&name)?;
                    self.pop_path();
                }
                Owned::End(name) => {
                    handler.end_element(&name)?;
                    self.pop_path();
                }
                Owned::Text(text) => handler.characters(&text)?,
            }
        }

        if !self.path.is_empty() {
            return Err(HomeXmlError::UnexpectedEof);
        }
        Ok(())
    }
}

/// An event detached from the read buffer.
enum Owned {
    Start(Attributes),
    Empty(Attributes),
    End(String),
    Text(String),
}
