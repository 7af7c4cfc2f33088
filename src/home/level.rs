use crate::content::Content;
use crate::core::Id;

/// A floor of the home.
///
/// Levels are owned by the [`Home`](crate::home::Home); other entities refer
/// to them by [`Id`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Level {
    pub id: Id,
    pub name: Option<String>,
    pub elevation: f32,
    pub floor_thickness: f32,
    pub height: f32,
    /// Order among levels sharing the same elevation, `-1` when unspecified.
    pub elevation_index: i32,
    pub viewable: bool,
    pub visible: bool,
    pub background_image: Option<BackgroundImage>,
    pub properties: crate::home::Properties,
}

/// An image displayed under the plan, scaled with a reference distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BackgroundImage {
    pub image: Content,
    pub scale_distance: f32,
    pub scale_distance_x_start: f32,
    pub scale_distance_y_start: f32,
    pub scale_distance_x_end: f32,
    pub scale_distance_y_end: f32,
    pub x_origin: f32,
    pub y_origin: f32,
    pub visible: bool,
}
