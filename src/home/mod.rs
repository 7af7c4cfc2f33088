//! The home design model produced by the deserializer.
//!
//! A [`Home`] owns every entity it holds. Cross references between entities
//! (an entity's level, the walls joined to a wall, printed levels, the
//! selected level) are expressed with [`Id`]s resolved through the home.

/// Declare an enum written in documents with fixed upper-case names.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Parse the document name of a value.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($text => Option::Some(Self::$variant),)+
                    _ => Option::None,
                }
            }

            /// The name of this value in documents.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub mod camera;
pub mod compass;
pub mod decoration;
pub mod environment;
pub mod furniture;
pub mod level;
pub mod material;
pub mod print;
pub mod room;
pub mod wall;

use std::collections::HashMap;

use crate::content::Content;
use crate::core::Id;

pub use camera::{Camera, CameraKind, Lens};
pub use compass::Compass;
pub use decoration::{DimensionLine, Label, Polyline, TextAlignment, TextStyle};
pub use environment::Environment;
pub use furniture::{HomePiece, PieceKind};
pub use level::{BackgroundImage, Level};
pub use material::{HomeMaterial, HomeTexture, Paint, Transformation};
pub use print::{HomePrint, PaperOrientation};
pub use room::Room;
pub use wall::{Baseboard, Wall};

/// Value of a free-form property.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PropertyValue {
    Text(String),
    Content(Content),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            PropertyValue::Content(_) => None,
        }
    }

    pub fn as_content(&self) -> Option<&Content> {
        match self {
            PropertyValue::Content(content) => Some(content),
            PropertyValue::Text(_) => None,
        }
    }
}

/// Free-form properties attached to an entity.
pub type Properties = HashMap<String, PropertyValue>;

named_enum! {
    /// Furniture columns that can be displayed or sorted.
    pub enum SortableProperty {
        CatalogId => "CATALOG_ID",
        Name => "NAME",
        Description => "DESCRIPTION",
        Creator => "CREATOR",
        License => "LICENSE",
        Width => "WIDTH",
        Depth => "DEPTH",
        Height => "HEIGHT",
        Movable => "MOVABLE",
        DoorOrWindow => "DOOR_OR_WINDOW",
        Color => "COLOR",
        Texture => "TEXTURE",
        Visible => "VISIBLE",
        X => "X",
        Y => "Y",
        Elevation => "ELEVATION",
        Angle => "ANGLE",
        ModelSize => "MODEL_SIZE",
        Price => "PRICE",
        ValueAddedTaxPercentage => "VALUE_ADDED_TAX_PERCENTAGE",
        ValueAddedTax => "VALUE_ADDED_TAX",
        PriceValueAddedTaxIncluded => "PRICE_VALUE_ADDED_TAX_INCLUDED",
        Level => "LEVEL",
    }
}

/// The complete design.
///
/// The top and observer cameras always exist; they keep their default
/// placement when a document does not declare them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Home {
    /// Version of the writer that produced the document, `0` when unknown.
    pub version: i64,
    pub name: Option<String>,
    pub wall_height: Option<f32>,
    pub base_plan_locked: bool,
    pub furniture_sorted_property: Option<SortableProperty>,
    pub furniture_descending_sorted: bool,
    pub furniture_visible_properties: Vec<SortableProperty>,
    pub furniture: Vec<HomePiece>,
    pub levels: Vec<Level>,
    pub selected_level: Option<Id>,
    pub walls: Vec<Wall>,
    pub rooms: Vec<Room>,
    pub polylines: Vec<Polyline>,
    pub dimension_lines: Vec<DimensionLine>,
    pub labels: Vec<Label>,
    pub environment: Environment,
    pub background_image: Option<BackgroundImage>,
    pub print: Option<HomePrint>,
    pub compass: Compass,
    pub top_camera: Camera,
    pub observer_camera: Camera,
    /// Which of the two cameras is in use.
    pub active_camera: CameraKind,
    pub stored_cameras: Vec<Camera>,
    pub properties: Properties,
}

impl Home {
    pub fn new(version: i64) -> Self {
        Home {
            version,
            name: None,
            wall_height: None,
            base_plan_locked: false,
            furniture_sorted_property: None,
            furniture_descending_sorted: false,
            furniture_visible_properties: vec![
                SortableProperty::Name,
                SortableProperty::Width,
                SortableProperty::Depth,
                SortableProperty::Height,
                SortableProperty::Visible,
            ],
            furniture: Vec::new(),
            levels: Vec::new(),
            selected_level: None,
            walls: Vec::new(),
            rooms: Vec::new(),
            polylines: Vec::new(),
            dimension_lines: Vec::new(),
            labels: Vec::new(),
            environment: Environment::default(),
            background_image: None,
            print: None,
            compass: Compass::default(),
            top_camera: Camera::default_top(),
            observer_camera: Camera::default_observer(),
            active_camera: CameraKind::Top,
            stored_cameras: Vec::new(),
            properties: Properties::new(),
        }
    }

    pub fn level(&self, id: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.id == id)
    }

    pub fn wall(&self, id: &str) -> Option<&Wall> {
        self.walls.iter().find(|wall| wall.id == id)
    }

    /// Find a piece by id, searching inside groups.
    pub fn piece(&self, id: &str) -> Option<&HomePiece> {
        self.furniture
            .iter()
            .flat_map(|piece| piece.all_pieces())
            .find(|piece| piece.id == id)
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn camera(&self) -> &Camera {
        match self.active_camera {
            CameraKind::Top => &self.top_camera,
            CameraKind::Observer => &self.observer_camera,
        }
    }

    /// Walls joined at the start and end of `wall`.
    pub fn joined_walls(&self, wall: &Wall) -> (Option<&Wall>, Option<&Wall>) {
        (
            wall.wall_at_start.as_ref().and_then(|id| self.wall(id.as_str())),
            wall.wall_at_end.as_ref().and_then(|id| self.wall(id.as_str())),
        )
    }

    /// Whether any entity is declared on `level`.
    pub fn is_level_used(&self, level: &str) -> bool {
        let on = |l: &Option<Id>| l.as_ref().is_some_and(|id| id == level);
        self.furniture.iter().any(|p| on(&p.level))
            || self.walls.iter().any(|w| on(&w.level))
            || self.rooms.iter().any(|r| on(&r.level))
            || self.polylines.iter().any(|p| on(&p.level))
            || self.dimension_lines.iter().any(|d| on(&d.level))
            || self.labels.iter().any(|l| on(&l.level))
    }
}
