//! Scoped state shared between element handlers.
//!
//! Every open element has an entry on the element stack. All elements except
//! the leaf writers (`property`, `furnitureVisibleProperty`, `textStyle`) also
//! own a [`Frame`] collecting what their children produce. Furniture groups
//! additionally own a list of pending children.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use log::warn;

use crate::core::Id;
use crate::home::camera::Camera;
use crate::home::furniture::{HomePiece, LightSource, Sash, ShelfBox};
use crate::home::{
    BackgroundImage, Baseboard, HomeMaterial, HomeTexture, Properties, SortableProperty,
    TextStyle, Transformation,
};
use crate::xml::deserialize::compat::Compatibility;
use crate::xml::deserialize::resolver::ContentResolver;
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

/// Elements writing straight into their parent's frame.
pub const LEAF_ELEMENTS: &[&str] = &["property", "furnitureVisibleProperty", "textStyle"];

pub fn is_leaf(element: &str) -> bool {
    LEAF_ELEMENTS.contains(&element)
}

/// What the children of one open element have produced so far.
#[derive(Debug, Default)]
pub struct Frame {
    pub properties: Properties,
    pub text_styles: HashMap<String, TextStyle>,
    pub textures: HashMap<String, HomeTexture>,
    pub baseboards: HashMap<String, Baseboard>,
    pub points: Vec<(f32, f32)>,
    pub materials: Vec<HomeMaterial>,
    pub transformations: Vec<Transformation>,
    pub sashes: Vec<Sash>,
    pub light_sources: Vec<LightSource>,
    pub light_source_material_names: Vec<String>,
    pub shelf_boxes: Vec<ShelfBox>,
    pub printed_level_ids: Vec<String>,
    pub camera_path: Vec<Camera>,
    pub background_image: Option<BackgroundImage>,
    pub visible_properties: Option<Vec<SortableProperty>>,
    pub text: Option<String>,
}

/// The stacks of one in-flight parse.
#[derive(Debug, Default)]
pub struct BuildContext {
    elements: Vec<(String, Attributes)>,
    frames: Vec<Frame>,
    groups: Vec<Vec<HomePiece>>,
    characters: String,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open elements.
    pub fn depth(&self) -> usize {
        self.elements.len()
    }

    /// Enter an element: push its entry, its frame unless it is a leaf, and a
    /// pending children list for groups.
    pub fn open(&mut self, name: &str, attributes: Attributes) {
        if !is_leaf(name) {
            self.frames.push(Frame::default());
        }
        if name == "furnitureGroup" {
            self.groups.push(Vec::new());
        }
        self.elements.push((name.to_string(), attributes));
        self.characters.clear();
    }

    /// Leave the innermost element, returning its name, attributes and frame.
    ///
    /// Leaves have no frame; their output goes to [`BuildContext::frame_mut`],
    /// which after this call is the parent's frame.
    pub fn close(
        &mut self,
        name: &str,
    ) -> Result<(String, Attributes, Option<Frame>), HomeXmlError> {
        let (open, attributes) = self
            .elements
            .pop()
            .ok_or_else(|| HomeXmlError::InvalidState(format!("unbalanced </{}>", name)))?;
        if open != name {
            return Err(HomeXmlError::UnexpectedElement {
                expected: format!("</{}>", open),
                found: format!("</{}>", name),
            });
        }
        let frame = if is_leaf(&open) {
            None
        } else {
            Some(self.frames.pop().ok_or_else(|| {
                HomeXmlError::InvalidState(format!("no frame for <{}>", open))
            })?)
        };
        Ok((open, attributes, frame))
    }

    /// The frame of the innermost element that owns one.
    pub fn frame_mut(&mut self) -> Result<&mut Frame, HomeXmlError> {
        self.frames
            .last_mut()
            .ok_or_else(|| HomeXmlError::InvalidState("no open element".to_string()))
    }

    /// Name of the innermost open element.
    pub fn current_element(&self) -> Option<&str> {
        self.elements.last().map(|(name, _)| name.as_str())
    }

    pub fn push_characters(&mut self, text: &str) {
        self.characters.push_str(text);
    }

    /// Characters received since the innermost element was opened.
    pub fn take_characters(&mut self) -> String {
        std::mem::take(&mut self.characters)
    }

    /// Give a closed piece to the innermost open group.
    ///
    /// Returns the piece back when no group is open.
    pub fn add_to_group(&mut self, piece: HomePiece) -> Option<HomePiece> {
        match self.groups.last_mut() {
            Some(children) => {
                children.push(piece);
                None
            }
            None => Some(piece),
        }
    }

    /// Remove the pending children of the group being closed.
    pub fn pop_group(&mut self) -> Result<Vec<HomePiece>, HomeXmlError> {
        self.groups
            .pop()
            .ok_or_else(|| HomeXmlError::InvalidState("no open furniture group".to_string()))
    }
}

/// Non-fatal issues met while reading a document.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: RefCell<Vec<String>>,
}

impl Diagnostics {
    pub fn warn(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.warnings.borrow_mut().push(message);
    }

    /// Record what a lenient attribute getter ignored.
    pub fn absorb(&self, attributes: &Attributes) {
        // Already logged by the getters
        self.warnings
            .borrow_mut()
            .extend(attributes.take_recovered());
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings.into_inner()
    }
}

/// Read-only services available to entity builders.
pub struct BuildEnv<'a> {
    pub compat: Compatibility,
    pub resolver: &'a ContentResolver,
    pub levels: &'a HashSet<Id>,
    pub diagnostics: &'a Diagnostics,
}

impl BuildEnv<'_> {
    /// Resolve the `level` attribute against the levels read so far.
    ///
    /// An unknown id leaves the entity without level.
    pub fn level(&self, attributes: &Attributes) -> Option<Id> {
        let id = attributes.get_opt("level")?;
        let id = Id::new(id);
        if self.levels.contains(&id) {
            Some(id)
        } else {
            self.diagnostics.warn(format!(
                "{} refers to unknown level '{}'",
                attributes.element_name(),
                id
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::piece_at;

    #[test]
    fn test_leaves_share_parent_frame() {
        let mut context = BuildContext::new();
        context.open("home", Attributes::empty("home"));
        context.open("wall", Attributes::empty("wall"));
        context.open("property", Attributes::empty("property"));

        let (name, _, frame) = context.close("property").unwrap();
        assert_eq!(name, "property");
        assert!(frame.is_none());
        context
            .frame_mut()
            .unwrap()
            .properties
            .insert("k".into(), crate::home::PropertyValue::Text("v".into()));

        let (_, _, frame) = context.close("wall").unwrap();
        assert_eq!(frame.unwrap().properties.len(), 1);
        let (_, _, frame) = context.close("home").unwrap();
        assert!(frame.unwrap().properties.is_empty());
    }

    #[test]
    fn test_mismatched_close_is_rejected() {
        let mut context = BuildContext::new();
        context.open("home", Attributes::empty("home"));
        assert!(matches!(
            context.close("wall"),
            Err(HomeXmlError::UnexpectedElement { .. })
        ));
    }

    #[test]
    fn test_nested_groups_collect_separately() {
        let mut context = BuildContext::new();
        context.open("furnitureGroup", Attributes::empty("furnitureGroup"));
        assert!(context.add_to_group(piece_at(0.0, 0.0, 1.0, 1.0)).is_none());
        context.open("furnitureGroup", Attributes::empty("furnitureGroup"));
        assert!(context.add_to_group(piece_at(5.0, 5.0, 1.0, 1.0)).is_none());

        assert_eq!(context.pop_group().unwrap().len(), 1);
        assert_eq!(context.pop_group().unwrap().len(), 1);
        assert!(context.add_to_group(piece_at(0.0, 0.0, 1.0, 1.0)).is_some());
    }

    #[test]
    fn test_characters_reset_on_open() {
        let mut context = BuildContext::new();
        context.open("label", Attributes::empty("label"));
        context.push_characters("\n  ");
        context.open("text", Attributes::empty("text"));
        context.push_characters("Kitchen");
        assert_eq!(context.take_characters(), "Kitchen");
    }
}
