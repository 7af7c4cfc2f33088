use crate::home::Properties;

/// The compass rose drawn in the plan, also giving the home's geographic location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Compass {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    /// Degrees.
    pub north_direction: f32,
    /// Radians.
    pub longitude: Option<f32>,
    /// Radians.
    pub latitude: Option<f32>,
    pub time_zone: Option<String>,
    pub visible: bool,
    pub properties: Properties,
}

impl Default for Compass {
    fn default() -> Self {
        Compass {
            x: -100.0,
            y: 50.0,
            diameter: 100.0,
            north_direction: 0.0,
            longitude: None,
            latitude: None,
            time_zone: None,
            visible: true,
            properties: Properties::new(),
        }
    }
}
