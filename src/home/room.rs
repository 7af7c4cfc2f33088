use crate::core::Id;
use crate::home::Properties;
use crate::home::decoration::TextStyle;
use crate::home::material::Paint;

/// A room delimited by an ordered list of points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Room {
    pub id: Id,
    pub level: Option<Id>,
    pub name: Option<String>,
    pub name_angle: f32,
    pub name_x_offset: f32,
    pub name_y_offset: f32,
    pub name_style: Option<TextStyle>,
    pub points: Vec<(f32, f32)>,
    pub area_visible: bool,
    pub area_angle: f32,
    pub area_x_offset: f32,
    pub area_y_offset: f32,
    pub area_style: Option<TextStyle>,
    pub floor_visible: bool,
    pub floor: Option<Paint>,
    pub floor_shininess: f32,
    pub ceiling_visible: bool,
    pub ceiling: Option<Paint>,
    pub ceiling_shininess: f32,
    pub ceiling_flat: bool,
    pub properties: Properties,
}

impl Room {
    /// Signed area of the room outline, positive for clockwise points in
    /// plan coordinates (y axis pointing down).
    pub fn signed_area(&self) -> f32 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let n = self.points.len();
        let twice_area: f32 = (0..n)
            .map(|i| {
                let (x1, y1) = self.points[i];
                let (x2, y2) = self.points[(i + 1) % n];
                x1 * y2 - x2 * y1
            })
            .sum();
        twice_area / 2.0
    }

    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }
}
