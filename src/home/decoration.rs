//! Plan decorations: polylines, dimension lines, labels and their text styles.

use crate::core::Id;
use crate::home::Properties;

named_enum! {
    /// Horizontal alignment of a text around its anchor.
    pub enum TextAlignment {
        Left => "LEFT",
        Center => "CENTER",
        Right => "RIGHT",
    }
}

impl Default for TextAlignment {
    fn default() -> Self {
        TextAlignment::Center
    }
}

/// Font attributes of a text drawn in the plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextStyle {
    pub font_name: Option<String>,
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    pub alignment: TextAlignment,
}

named_enum! {
    pub enum CapStyle {
        Butt => "BUTT",
        Square => "SQUARE",
        Round => "ROUND",
    }
}

named_enum! {
    pub enum JoinStyle {
        Bevel => "BEVEL",
        Miter => "MITER",
        Round => "ROUND",
        Curved => "CURVED",
    }
}

named_enum! {
    pub enum DashStyle {
        Solid => "SOLID",
        Dot => "DOT",
        Dash => "DASH",
        DashDot => "DASH_DOT",
        DashDotDot => "DASH_DOT_DOT",
        Custom => "CUSTOMIZED",
    }
}

named_enum! {
    pub enum ArrowStyle {
        None => "NONE",
        Delta => "DELTA",
        Open => "OPEN",
        Disc => "DISC",
    }
}

/// An open or closed line drawn in the plan.
///
/// Point order is significant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Polyline {
    pub id: Id,
    pub level: Option<Id>,
    pub points: Vec<(f32, f32)>,
    pub thickness: f32,
    pub cap_style: CapStyle,
    pub join_style: JoinStyle,
    pub dash_style: DashStyle,
    pub dash_pattern: Option<Vec<f32>>,
    pub dash_offset: f32,
    pub start_arrow_style: ArrowStyle,
    pub end_arrow_style: ArrowStyle,
    pub closed_path: bool,
    pub color: u32,
    /// Set when the polyline is also displayed in 3D.
    pub elevation: Option<f32>,
    pub properties: Properties,
}

/// A measurement line between two points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DimensionLine {
    pub id: Id,
    pub level: Option<Id>,
    pub x_start: f32,
    pub y_start: f32,
    pub elevation_start: f32,
    pub x_end: f32,
    pub y_end: f32,
    pub elevation_end: f32,
    pub offset: f32,
    pub pitch: f32,
    pub color: Option<u32>,
    pub visible_in_3d: bool,
    pub length_style: Option<TextStyle>,
    pub properties: Properties,
}

impl DimensionLine {
    pub fn length(&self) -> f32 {
        let dx = self.x_end - self.x_start;
        let dy = self.y_end - self.y_start;
        let dz = self.elevation_end - self.elevation_start;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A free text anchored in the plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Label {
    pub id: Id,
    pub level: Option<Id>,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub elevation: f32,
    /// Set when the label is also displayed in 3D.
    pub pitch: Option<f32>,
    pub color: Option<u32>,
    pub outline_color: Option<u32>,
    pub style: Option<TextStyle>,
    pub properties: Properties,
}
