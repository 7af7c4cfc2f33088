//! Surface appearance: colors, textures, materials and model transformations.

use nalgebra::Matrix3x4;

use crate::content::Content;

/// How a surface is painted.
///
/// A surface left untouched keeps the appearance of its model and is
/// represented by `None` at the use site.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Paint {
    /// ARGB color.
    Color(u32),
    Texture(HomeTexture),
}

impl Paint {
    pub fn color(&self) -> Option<u32> {
        match self {
            Paint::Color(color) => Some(*color),
            Paint::Texture(_) => None,
        }
    }

    pub fn texture(&self) -> Option<&HomeTexture> {
        match self {
            Paint::Texture(texture) => Some(texture),
            Paint::Color(_) => None,
        }
    }
}

/// A texture image applied to a surface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HomeTexture {
    pub catalog_id: Option<String>,
    pub name: Option<String>,
    pub creator: Option<String>,
    pub image: Content,
    pub width: f32,
    pub height: f32,
    pub x_offset: f32,
    pub y_offset: f32,
    pub angle: f32,
    pub scale: f32,
    pub fitting_area: bool,
    pub left_to_right_oriented: bool,
}

/// A named material of a 3D model, optionally overridden with a color or texture.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HomeMaterial {
    pub name: String,
    pub key: Option<String>,
    pub color: Option<u32>,
    pub texture: Option<HomeTexture>,
    pub shininess: Option<f32>,
}

/// A named transformation applied to a part of a model (3 rows, 4 columns).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Transformation {
    pub name: String,
    pub matrix: Matrix3x4<f32>,
}
