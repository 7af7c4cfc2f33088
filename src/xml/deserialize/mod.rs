//! Streaming reconstruction of a [`Home`] from element events.
//!
//! [`HomeXmlHandler`] receives start, characters and end events. Opening an
//! element pushes scoped state; closing it runs the matching builder and
//! attaches the result to its parent or to the home. When the root element
//! closes, the [`DeferredLinker`] completes references by id.
//!
//! Any error aborts the parse and no home is returned.

pub mod cameras;
pub mod compat;
pub mod context;
pub mod decorations;
pub mod furniture;
pub mod helpers;
pub mod levels;
pub mod linker;
pub mod materials;
pub mod resolver;
pub mod rooms;
pub mod settings;
pub mod substitution;
pub mod walls;

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use crate::core::Id;
use crate::home::{CameraKind, Home, SortableProperty};
use crate::types::WithWarnings;
use crate::xml::errors::HomeXmlError;
use crate::xml::options::HomeXmlOptions;
use crate::xml::quick::de::{Attributes, ContentHandler};

pub use compat::{Compatibility, MODEL_CENTERED_AT_ORIGIN_VERSION};
pub use context::{BuildContext, BuildEnv, Diagnostics, Frame};
pub use linker::DeferredLinker;
pub use resolver::{ContentKind, ContentResolver};
pub use substitution::{EntityHook, HomeEntity, Substitution};

use cameras::{CameraSlot, build_camera};
use decorations::{build_dimension_line, build_label, build_polyline};
use furniture::{build_light_source, build_piece, build_sash, build_shelf, is_furniture};
use levels::{build_background_image, build_level};
use materials::{
    build_baseboard, build_material, build_property, build_text_style, build_texture,
    build_transformation, texture_key,
};
use rooms::build_room;
use settings::{build_compass, build_environment, build_print};
use substitution::substitute;
use walls::{build_wall, declared_joins};

/// Elements read below the root. Others are reported and skipped.
const KNOWN_ELEMENTS: &[&str] = &[
    "property",
    "furnitureVisibleProperty",
    "textStyle",
    "texture",
    "material",
    "transformation",
    "baseboard",
    "point",
    "sash",
    "lightSource",
    "lightSourceMaterial",
    "shelf",
    "printedLevel",
    "text",
    "backgroundImage",
    "environment",
    "print",
    "compass",
    "camera",
    "observerCamera",
    "level",
    "pieceOfFurniture",
    "doorOrWindow",
    "light",
    "shelfUnit",
    "furnitureGroup",
    "wall",
    "room",
    "polyline",
    "dimensionLine",
    "label",
];

/// Progress of a document through the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerState {
    /// Waiting for the root element.
    Idle,
    /// Between the root element's start and end.
    InDocument,
    /// Root element closed, references being linked.
    Linking,
    /// The home is complete.
    Done,
}

/// Builds one home from the events of one document.
pub struct HomeXmlHandler {
    root_element: String,
    hook: Option<Arc<dyn EntityHook>>,
    state: HandlerState,
    home: Option<Home>,
    compat: Compatibility,
    context: BuildContext,
    resolver: ContentResolver,
    /// Ids of the levels read so far.
    levels: HashSet<Id>,
    linker: DeferredLinker,
    diagnostics: Diagnostics,
}

impl HomeXmlHandler {
    pub fn new(options: &HomeXmlOptions) -> Self {
        Self {
            root_element: options.root_element.clone(),
            hook: options.hook.clone(),
            state: HandlerState::Idle,
            home: None,
            compat: Compatibility::new(0),
            context: BuildContext::new(),
            resolver: ContentResolver::new(
                options.content_context.clone(),
                options.catalog.clone(),
            ),
            levels: HashSet::new(),
            linker: DeferredLinker::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn state(&self) -> HandlerState {
        self.state
    }

    /// Return the home once the whole document was read, with the issues
    /// recovered along the way.
    pub fn finish(self) -> Result<WithWarnings<Home, String>, HomeXmlError> {
        let HomeXmlHandler {
            state,
            home,
            diagnostics,
            root_element,
            ..
        } = self;
        match (state, home) {
            (HandlerState::Done, Some(home)) => {
                Ok(WithWarnings::from_parts(home, diagnostics.into_warnings()))
            }
            (HandlerState::Idle, _) => Err(HomeXmlError::MissingElement {
                element: "document".to_string(),
                child: root_element,
            }),
            _ => Err(HomeXmlError::UnexpectedEof),
        }
    }

    fn start_document(&mut self, attributes: &Attributes) -> Result<(), HomeXmlError> {
        let version = attributes.get_opt_i64("version")?.unwrap_or(0);
        let mut home = Home::new(version);
        home.name = attributes.get_opt_string("name");
        home.active_camera = attributes
            .get_opt_enum("camera", |name| match name {
                "topCamera" => Some(CameraKind::Top),
                "observerCamera" => Some(CameraKind::Observer),
                _ => None,
            })
            .unwrap_or(CameraKind::Top);
        home.wall_height = attributes.get_opt_f32("wallHeight")?;
        home.base_plan_locked = attributes.get_bool_or("basePlanLocked", false);
        home.furniture_sorted_property =
            attributes.get_opt_enum("furnitureSortedProperty", SortableProperty::from_name);
        home.furniture_descending_sorted =
            attributes.get_bool_or("furnitureDescendingSorted", false);
        if let Some(level) = attributes.get_opt("selectedLevel") {
            self.linker.record_selected_level(level);
        }

        debug!("reading home document version {}", version);
        self.compat = Compatibility::new(version);
        self.home = Some(home);
        Ok(())
    }

    fn end_document(&mut self, frame: Option<Frame>) -> Result<(), HomeXmlError> {
        let mut frame = frame.ok_or_else(|| {
            HomeXmlError::InvalidState("root element closed without its frame".to_string())
        })?;
        let home = self
            .home
            .as_mut()
            .ok_or_else(|| HomeXmlError::InvalidState("no home under construction".to_string()))?;
        home.properties = std::mem::take(&mut frame.properties);
        home.background_image = frame.background_image.take();
        if let Some(properties) = frame.visible_properties.take() {
            home.furniture_visible_properties = properties;
        }

        self.state = HandlerState::Linking;
        self.linker.link(home, &self.diagnostics);
        self.state = HandlerState::Done;
        debug!(
            "read {} levels, {} pieces, {} walls, {} rooms",
            home.levels.len(),
            home.furniture.len(),
            home.walls.len(),
            home.rooms.len()
        );
        Ok(())
    }

    /// Build the entity closed by `element` and attach it.
    fn end_child(
        &mut self,
        element: &str,
        attributes: &Attributes,
        frame: Option<Frame>,
    ) -> Result<(), HomeXmlError> {
        let env = BuildEnv {
            compat: self.compat,
            resolver: &self.resolver,
            levels: &self.levels,
            diagnostics: &self.diagnostics,
        };
        let hook = self.hook.as_deref();
        let home = self
            .home
            .as_mut()
            .ok_or_else(|| HomeXmlError::InvalidState("no home under construction".to_string()))?;
        let context = &mut self.context;
        let mut frame = frame.unwrap_or_default();

        match element {
            // Leaves writing into the enclosing frame
            "property" => {
                let (name, value) = build_property(attributes, &env)?;
                context.frame_mut()?.properties.insert(name, value);
            }
            "furnitureVisibleProperty" => {
                let name = attributes.get_req("name")?;
                match SortableProperty::from_name(name) {
                    Some(property) => context
                        .frame_mut()?
                        .visible_properties
                        .get_or_insert_with(Vec::new)
                        .push(property),
                    None => env
                        .diagnostics
                        .warn(format!("ignored unknown furniture property '{}'", name)),
                }
            }
            "textStyle" => {
                let key = attributes.get_req_string("attribute")?;
                let (style, _) = substitute(hook, build_text_style(attributes)?, attributes)?;
                context.frame_mut()?.text_styles.insert(key, style);
            }

            // Parts of the enclosing entity
            "texture" => {
                let (texture, _) = substitute(hook, build_texture(attributes, &env)?, attributes)?;
                context
                    .frame_mut()?
                    .textures
                    .insert(texture_key(attributes), texture);
            }
            "material" => {
                let (material, _) = substitute(hook, build_material(attributes, frame)?, attributes)?;
                context.frame_mut()?.materials.push(material);
            }
            "transformation" => {
                let (transformation, _) =
                    substitute(hook, build_transformation(attributes)?, attributes)?;
                context.frame_mut()?.transformations.push(transformation);
            }
            "baseboard" => {
                let key = attributes.get_req_string("attribute")?;
                let (baseboard, _) =
                    substitute(hook, build_baseboard(attributes, frame)?, attributes)?;
                context.frame_mut()?.baseboards.insert(key, baseboard);
            }
            "point" => {
                let point = (attributes.get_req_f32("x")?, attributes.get_req_f32("y")?);
                context.frame_mut()?.points.push(point);
            }
            "sash" => context.frame_mut()?.sashes.push(build_sash(attributes)?),
            "lightSource" => context
                .frame_mut()?
                .light_sources
                .push(build_light_source(attributes)?),
            "lightSourceMaterial" => {
                let name = attributes.get_req_string("name")?;
                context.frame_mut()?.light_source_material_names.push(name);
            }
            "shelf" => context.frame_mut()?.shelf_boxes.push(build_shelf(attributes)?),
            "printedLevel" => {
                let level = attributes.get_req_string("level")?;
                context.frame_mut()?.printed_level_ids.push(level);
            }
            "text" => {
                let text = context.take_characters();
                context.frame_mut()?.text = Some(text);
            }
            "backgroundImage" => {
                let (image, _) =
                    substitute(hook, build_background_image(attributes, &env)?, attributes)?;
                context.frame_mut()?.background_image = Some(image);
            }

            // Entities of the home
            "camera" | "observerCamera" => {
                let Some(slot) = CameraSlot::of(element, attributes) else {
                    return Ok(());
                };
                let (camera, _) =
                    substitute(hook, build_camera(element, attributes, frame)?, attributes)?;
                match slot {
                    CameraSlot::Top => home.top_camera = camera,
                    CameraSlot::Observer => home.observer_camera = camera,
                    CameraSlot::Stored => home.stored_cameras.push(camera),
                    CameraSlot::Path if context.current_element() == Some("environment") => {
                        context.frame_mut()?.camera_path.push(camera)
                    }
                    CameraSlot::Path => env.diagnostics.warn(format!(
                        "ignored camera '{}' of a camera path outside environment",
                        camera.id
                    )),
                }
            }
            "level" => {
                let (level, _) = substitute(hook, build_level(attributes, frame)?, attributes)?;
                self.levels.insert(level.id.clone());
                home.levels.push(level);
            }
            name if is_furniture(name) => {
                let children = if name == "furnitureGroup" {
                    context.pop_group()?
                } else {
                    Vec::new()
                };
                let piece = build_piece(name, attributes, frame, children, &env)?;
                let (piece, _) = substitute(hook, piece, attributes)?;
                if let Some(piece) = context.add_to_group(piece) {
                    home.furniture.push(piece);
                }
            }
            "wall" => {
                let (wall, _) = substitute(hook, build_wall(attributes, frame, &env)?, attributes)?;
                let (at_start, at_end) = declared_joins(attributes);
                self.linker
                    .record_wall_joins(home.walls.len(), at_start, at_end);
                home.walls.push(wall);
            }
            "room" => {
                let (room, _) = substitute(hook, build_room(attributes, frame, &env)?, attributes)?;
                home.rooms.push(room);
            }
            "polyline" => {
                let (polyline, _) =
                    substitute(hook, build_polyline(attributes, frame, &env)?, attributes)?;
                home.polylines.push(polyline);
            }
            "dimensionLine" => {
                let (line, _) =
                    substitute(hook, build_dimension_line(attributes, frame, &env)?, attributes)?;
                home.dimension_lines.push(line);
            }
            "label" => {
                let (label, _) = substitute(hook, build_label(attributes, frame, &env)?, attributes)?;
                home.labels.push(label);
            }
            "environment" => {
                let (environment, _) =
                    substitute(hook, build_environment(attributes, frame)?, attributes)?;
                home.environment = environment;
            }
            "print" => {
                let printed_levels = std::mem::take(&mut frame.printed_level_ids);
                let (print, replaced) = substitute(hook, build_print(attributes)?, attributes)?;
                if !printed_levels.is_empty() {
                    self.linker.record_printed_levels(printed_levels, replaced);
                }
                home.print = Some(print);
            }
            "compass" => {
                let (compass, _) = substitute(hook, build_compass(attributes, frame)?, attributes)?;
                home.compass = compass;
            }
            // Reported when opened
            _ => {}
        }
        Ok(())
    }
}

impl ContentHandler for HomeXmlHandler {
    fn start_element(&mut self, name: &str, attributes: Attributes) -> Result<(), HomeXmlError> {
        match self.state {
            HandlerState::Idle => {
                if name != self.root_element {
                    return Err(HomeXmlError::UnexpectedElement {
                        expected: format!("<{}>", self.root_element),
                        found: format!("<{}>", name),
                    });
                }
                self.start_document(&attributes)?;
                self.diagnostics.absorb(&attributes);
                self.state = HandlerState::InDocument;
            }
            HandlerState::InDocument => {
                if !KNOWN_ELEMENTS.contains(&name) {
                    self.diagnostics
                        .warn(format!("ignored unknown element <{}>", name));
                }
            }
            state => {
                return Err(HomeXmlError::InvalidState(format!(
                    "<{}> received in state {:?}",
                    name, state
                )));
            }
        }
        self.context.open(name, attributes);
        Ok(())
    }

    fn characters(&mut self, text: &str) -> Result<(), HomeXmlError> {
        if self.state == HandlerState::InDocument {
            self.context.push_characters(text);
        }
        Ok(())
    }

    fn end_element(&mut self, name: &str) -> Result<(), HomeXmlError> {
        if self.state != HandlerState::InDocument {
            return Err(HomeXmlError::InvalidState(format!(
                "</{}> received in state {:?}",
                name, self.state
            )));
        }
        let (name, attributes, frame) = self.context.close(name)?;
        if self.context.depth() == 0 {
            self.end_document(frame)?;
        } else {
            self.end_child(&name, &attributes, frame)?;
        }
        self.diagnostics.absorb(&attributes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(handler: &mut HomeXmlHandler, name: &str, pairs: &[(&str, &str)]) {
        handler
            .start_element(name, Attributes::from_pairs(name, pairs.iter().copied()))
            .unwrap();
    }

    #[test]
    fn test_state_transitions() {
        let options = HomeXmlOptions::default();
        let mut handler = HomeXmlHandler::new(&options);
        assert_eq!(handler.state(), HandlerState::Idle);

        open(&mut handler, "home", &[("version", "7000")]);
        assert_eq!(handler.state(), HandlerState::InDocument);
        open(&mut handler, "level", &[("id", "l0"), ("elevation", "0"), ("floorThickness", "12"), ("height", "250")]);
        handler.end_element("level").unwrap();
        assert_eq!(handler.state(), HandlerState::InDocument);
        handler.end_element("home").unwrap();
        assert_eq!(handler.state(), HandlerState::Done);

        assert!(handler.start_element("home", Attributes::empty("home")).is_err());
        let home = handler.finish().unwrap().unwrap();
        assert_eq!(home.version, 7000);
        assert_eq!(home.levels.len(), 1);
    }

    #[test]
    fn test_wrong_root_is_rejected() {
        let options = HomeXmlOptions::default();
        let mut handler = HomeXmlHandler::new(&options);
        let err = handler
            .start_element("project", Attributes::empty("project"))
            .unwrap_err();
        assert!(matches!(err, HomeXmlError::UnexpectedElement { .. }));
    }

    #[test]
    fn test_unfinished_document_yields_nothing() {
        let options = HomeXmlOptions::default();
        let mut handler = HomeXmlHandler::new(&options);
        open(&mut handler, "home", &[]);
        assert!(matches!(handler.finish(), Err(HomeXmlError::UnexpectedEof)));
    }

    #[test]
    fn test_unknown_elements_are_reported() {
        let options = HomeXmlOptions::default();
        let mut handler = HomeXmlHandler::new(&options);
        open(&mut handler, "home", &[("camera", "observerCamera")]);
        open(&mut handler, "hologram", &[]);
        handler.end_element("hologram").unwrap();
        handler.end_element("home").unwrap();
        let (home, warnings): (Home, Vec<String>) = handler.finish().unwrap().into();
        assert_eq!(home.active_camera, CameraKind::Observer);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("hologram"));
    }
}
