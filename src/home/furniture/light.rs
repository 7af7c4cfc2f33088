#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Light {
    /// Power in the range [0, 1].
    pub power: f32,
    pub sources: Vec<LightSource>,
    /// Names of the model materials that emit light.
    pub source_material_names: Vec<String>,
}

/// A point light, coordinates expressed as ratios of the piece size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LightSource {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub color: u32,
    pub diameter: Option<f32>,
}
