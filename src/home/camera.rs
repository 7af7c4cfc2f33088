use crate::core::Id;
use crate::home::Properties;

named_enum! {
    pub enum Lens {
        Pinhole => "PINHOLE",
        Normal => "NORMAL",
        Fisheye => "FISHEYE",
        Spherical => "SPHERICAL",
    }
}

impl Default for Lens {
    fn default() -> Self {
        Lens::Pinhole
    }
}

/// Whether a camera looks at the home from above or walks through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CameraKind {
    Top,
    Observer,
}

/// A point of view on the home.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Camera {
    pub id: Id,
    pub kind: CameraKind,
    pub name: Option<String>,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub field_of_view: f32,
    /// Milliseconds since the epoch, UTC.
    pub time: i64,
    pub lens: Lens,
    pub renderer: Option<String>,
    /// Only meaningful for observer cameras.
    pub fixed_size: bool,
    pub properties: Properties,
}

/// Noon, June 21st 2010 UTC.
pub const DEFAULT_CAMERA_TIME: i64 = 1_277_121_600_000;

impl Camera {
    /// The camera looking at an empty home from above.
    pub fn default_top() -> Self {
        Camera {
            id: Id::generate("camera"),
            kind: CameraKind::Top,
            name: None,
            x: 50.0,
            y: 1050.0,
            z: 1010.0,
            yaw: 0.0,
            pitch: std::f32::consts::PI / 4.0,
            field_of_view: std::f32::consts::PI * 63.0 / 180.0,
            time: DEFAULT_CAMERA_TIME,
            lens: Lens::default(),
            renderer: None,
            fixed_size: false,
            properties: Properties::new(),
        }
    }

    /// The virtual visitor standing in an empty home.
    pub fn default_observer() -> Self {
        Camera {
            id: Id::generate("observerCamera"),
            kind: CameraKind::Observer,
            name: None,
            x: 50.0,
            y: 50.0,
            z: 170.0,
            yaw: 7.0 * std::f32::consts::PI / 4.0,
            pitch: std::f32::consts::PI / 16.0,
            field_of_view: std::f32::consts::PI * 63.0 / 180.0,
            time: DEFAULT_CAMERA_TIME,
            lens: Lens::default(),
            renderer: None,
            fixed_size: false,
            properties: Properties::new(),
        }
    }
}
