use crate::home::Properties;
use crate::home::camera::Camera;
use crate::home::material::Paint;

named_enum! {
    pub enum DrawingMode {
        Fill => "FILL",
        Outline => "OUTLINE",
        FillAndOutline => "FILL_AND_OUTLINE",
    }
}

named_enum! {
    pub enum AspectRatio {
        FreeRatio => "FREE_RATIO",
        View3dRatio => "VIEW_3D_RATIO",
        Ratio4x3 => "RATIO_4_3",
        Ratio3x2 => "RATIO_3_2",
        Ratio16x9 => "RATIO_16_9",
        Ratio2x1 => "RATIO_2_1",
        Ratio24x10 => "RATIO_24_10",
        SquareRatio => "SQUARE_RATIO",
    }
}

/// Ground, sky, light and rendering settings of the home.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Environment {
    pub ground: Option<Paint>,
    pub background_image_visible_on_ground_3d: bool,
    pub sky: Option<Paint>,
    pub light_color: u32,
    pub ceiling_light_color: u32,
    pub walls_alpha: f32,
    pub all_levels_visible: bool,
    pub observer_camera_elevation_adjusted: bool,
    pub drawing_mode: DrawingMode,
    pub subpart_size_under_light: f32,
    pub photo_width: i32,
    pub photo_height: i32,
    pub photo_aspect_ratio: AspectRatio,
    pub photo_quality: i32,
    pub video_width: i32,
    pub video_aspect_ratio: AspectRatio,
    pub video_quality: i32,
    pub video_speed: f32,
    pub video_frame_rate: i32,
    /// Cameras the video walks through, in order.
    pub video_camera_path: Vec<Camera>,
    pub properties: Properties,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            ground: Some(Paint::Color(0xA8553F)),
            background_image_visible_on_ground_3d: false,
            sky: Some(Paint::Color(0xCCE4FC)),
            light_color: 0xD0D0D0,
            ceiling_light_color: 0xD0D0D0,
            walls_alpha: 0.0,
            all_levels_visible: false,
            observer_camera_elevation_adjusted: true,
            drawing_mode: DrawingMode::Fill,
            subpart_size_under_light: 0.0,
            photo_width: 400,
            photo_height: 300,
            photo_aspect_ratio: AspectRatio::View3dRatio,
            photo_quality: 0,
            video_width: 320,
            video_aspect_ratio: AspectRatio::Ratio4x3,
            video_quality: 0,
            video_speed: 2400.0 / 3600.0,
            video_frame_rate: 25,
            video_camera_path: Vec::new(),
            properties: Properties::new(),
        }
    }
}
