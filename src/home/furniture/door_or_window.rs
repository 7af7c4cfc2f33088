/// Cut-out shape used for doors and windows read from documents that
/// predate explicit shapes: the whole bounding rectangle.
pub const DEFAULT_CUT_OUT_SHAPE: &str = "M0,0 v1 h1 v-1 z";

/// Door or window data, positions expressed as ratios of the piece size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DoorOrWindow {
    pub wall_thickness: f32,
    pub wall_distance: f32,
    pub wall_width: f32,
    pub wall_left: f32,
    pub wall_height: f32,
    pub wall_top: f32,
    pub wall_cut_out_on_both_sides: bool,
    pub width_depth_deformable: bool,
    pub bound_to_wall: bool,
    /// SVG path data of the hole cut in walls.
    pub cut_out_shape: Option<String>,
    pub sashes: Vec<Sash>,
}

/// An opening part of a door or window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sash {
    pub x_axis: f32,
    pub y_axis: f32,
    pub width: f32,
    pub start_angle: f32,
    pub end_angle: f32,
}
