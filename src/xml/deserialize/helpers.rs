//! Attribute families shared by several builders.

use nalgebra::{Matrix3, Matrix3x4};

use crate::core::Id;
use crate::home::Paint;
use crate::xml::deserialize::context::Frame;
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

/// Read how a surface is painted.
///
/// A texture stored under `texture_key` by a child element wins over the
/// `color_attribute`. Neither present means the surface is left untouched.
pub fn paint(
    frame: &mut Frame,
    texture_key: &str,
    attributes: &Attributes,
    color_attribute: &str,
) -> Result<Option<Paint>, HomeXmlError> {
    if let Some(texture) = frame.textures.remove(texture_key) {
        return Ok(Some(Paint::Texture(texture)));
    }
    Ok(attributes.get_opt_color(color_attribute)?.map(Paint::Color))
}

/// Read the `id` attribute, or generate one for entities declared without.
pub fn id(attributes: &Attributes, prefix: &str) -> Id {
    Id::declared_or_generated(attributes.get_opt("id"), prefix)
}

/// Read a 3x3 rotation written as 9 row-major floats.
pub fn rotation(attributes: &Attributes, key: &str) -> Result<Option<Matrix3<f32>>, HomeXmlError> {
    Ok(attributes
        .get_opt_f32_array::<9>(key)?
        .map(|values| Matrix3::from_row_slice(&values)))
}

/// Read a 3x4 transformation written as 12 row-major floats.
pub fn transformation_matrix(
    attributes: &Attributes,
    key: &str,
) -> Result<Matrix3x4<f32>, HomeXmlError> {
    attributes
        .get_opt_f32_array::<12>(key)?
        .map(|values| Matrix3x4::from_row_slice(&values))
        .ok_or_else(|| HomeXmlError::MissingAttribute {
            element: attributes.element_name().to_string(),
            attribute: key.to_string(),
        })
}

/// `Some(items)` unless no child produced any.
pub fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
