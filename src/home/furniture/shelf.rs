/// Shelves of a bookcase or cupboard.
///
/// Flat shelves are described by their relative elevations, other shelves by
/// boxes in relative coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShelfUnit {
    pub shelf_elevations: Vec<f32>,
    pub shelf_boxes: Vec<ShelfBox>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShelfBox {
    pub x_lower: f32,
    pub y_lower: f32,
    pub z_lower: f32,
    pub x_upper: f32,
    pub y_upper: f32,
    pub z_upper: f32,
}
