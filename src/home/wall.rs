use crate::core::Id;
use crate::home::Properties;
use crate::home::material::Paint;

/// A wall of the plan.
///
/// `wall_at_start` and `wall_at_end` are non-owning references to the walls
/// joined at each end. They are only set once the whole document has been
/// read, and a wall never refers to itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Wall {
    pub id: Id,
    pub level: Option<Id>,
    pub x_start: f32,
    pub y_start: f32,
    pub x_end: f32,
    pub y_end: f32,
    pub thickness: f32,
    pub height: Option<f32>,
    pub height_at_end: Option<f32>,
    pub arc_extent: Option<f32>,
    pub pattern: Option<String>,
    pub top_color: Option<u32>,
    pub left_side: Option<Paint>,
    pub left_side_shininess: f32,
    pub left_side_baseboard: Option<Baseboard>,
    pub right_side: Option<Paint>,
    pub right_side_shininess: f32,
    pub right_side_baseboard: Option<Baseboard>,
    pub wall_at_start: Option<Id>,
    pub wall_at_end: Option<Id>,
    pub properties: Properties,
}

impl Wall {
    pub fn length(&self) -> f32 {
        (self.x_end - self.x_start).hypot(self.y_end - self.y_start)
    }

    pub fn is_trapezoidal(&self) -> bool {
        matches!((self.height, self.height_at_end), (Some(h), Some(e)) if h != e)
    }
}

/// A baseboard running along one side of a wall.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Baseboard {
    pub thickness: f32,
    pub height: f32,
    pub paint: Option<Paint>,
}
