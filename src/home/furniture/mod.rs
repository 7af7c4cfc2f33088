//! Furniture placed in the home.
//!
//! Every variant shares the geometry and flags of [`HomePiece`]; the
//! variant-specific payload lives in [`PieceKind`].

pub mod door_or_window;
pub mod group;
pub mod light;
pub mod shelf;

use nalgebra::Matrix3;
use rust_decimal::Decimal;

use crate::content::Content;
use crate::core::Id;
use crate::home::Properties;
use crate::home::decoration::TextStyle;
use crate::home::material::{HomeMaterial, Paint, Transformation};

pub use door_or_window::{DEFAULT_CUT_OUT_SHAPE, DoorOrWindow, Sash};
pub use group::FurnitureGroup;
pub use light::{Light, LightSource};
pub use shelf::{ShelfBox, ShelfUnit};

/// A piece of furniture of any variant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HomePiece {
    pub id: Id,
    pub level: Option<Id>,
    pub catalog_id: Option<String>,
    pub name: Option<String>,
    pub name_visible: bool,
    pub name_x_offset: f32,
    pub name_y_offset: f32,
    pub name_angle: f32,
    pub name_style: Option<TextStyle>,
    pub description: Option<String>,
    pub information: Option<String>,
    pub creator: Option<String>,
    pub license: Option<String>,
    pub price: Option<Decimal>,
    pub value_added_tax_percentage: Option<Decimal>,
    pub currency: Option<String>,

    pub icon: Option<Content>,
    pub plan_icon: Option<Content>,
    pub model: Option<Content>,
    pub model_size: Option<i64>,
    pub model_rotation: Option<Matrix3<f32>>,
    pub model_centered_at_origin: bool,
    pub model_mirrored: bool,
    pub back_face_shown: bool,
    pub model_materials: Option<Vec<HomeMaterial>>,
    pub model_transformations: Option<Vec<Transformation>>,
    pub staircase_cut_out_shape: Option<String>,

    pub x: f32,
    pub y: f32,
    pub elevation: f32,
    pub angle: f32,
    pub pitch: f32,
    pub roll: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub drop_on_top_elevation: f32,

    pub paint: Option<Paint>,
    pub shininess: Option<f32>,

    pub movable: bool,
    pub visible: bool,
    pub resizable: bool,
    pub deformable: bool,
    pub texturable: bool,

    pub properties: Properties,
    pub kind: PieceKind,
}

/// Variant-specific data of a piece.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PieceKind {
    Piece,
    DoorOrWindow(DoorOrWindow),
    Light(Light),
    ShelfUnit(ShelfUnit),
    Group(FurnitureGroup),
}

impl HomePiece {
    pub fn is_door_or_window(&self) -> bool {
        matches!(self.kind, PieceKind::DoorOrWindow(_))
    }

    pub fn as_group(&self) -> Option<&FurnitureGroup> {
        match &self.kind {
            PieceKind::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_door_or_window(&self) -> Option<&DoorOrWindow> {
        match &self.kind {
            PieceKind::DoorOrWindow(door) => Some(door),
            _ => None,
        }
    }

    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            PieceKind::Light(light) => Some(light),
            _ => None,
        }
    }

    pub fn as_shelf_unit(&self) -> Option<&ShelfUnit> {
        match &self.kind {
            PieceKind::ShelfUnit(shelf) => Some(shelf),
            _ => None,
        }
    }

    /// The four corners of the piece footprint, rotated by its angle.
    pub fn points(&self) -> [(f32, f32); 4] {
        let (sin, cos) = self.angle.sin_cos();
        let (dx, dy) = (self.width / 2.0, self.depth / 2.0);
        [(-dx, -dy), (dx, -dy), (dx, dy), (-dx, dy)].map(|(px, py)| {
            (
                self.x + px * cos - py * sin,
                self.y + px * sin + py * cos,
            )
        })
    }

    /// Elevation of the top of the piece.
    pub fn top_elevation(&self) -> f32 {
        self.elevation + self.height
    }

    /// Iterate over this piece and, for groups, every nested piece depth-first.
    pub fn all_pieces(&self) -> Vec<&HomePiece> {
        let mut pieces = vec![self];
        if let PieceKind::Group(group) = &self.kind {
            for child in &group.children {
                pieces.extend(child.all_pieces());
            }
        }
        pieces
    }
}
