//! Builders for surface descriptions and free-form properties.

use crate::home::{
    Baseboard, HomeMaterial, HomeTexture, PropertyValue, TextAlignment, TextStyle, Transformation,
};
use crate::xml::deserialize::context::{BuildEnv, Frame};
use crate::xml::deserialize::helpers::{paint, transformation_matrix};
use crate::xml::deserialize::resolver::ContentKind;
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

/// Key under which a child texture is stored when it has no `attribute`.
pub const DEFAULT_TEXTURE_KEY: &str = "texture";

/// The parent attribute a `texture` element fills.
pub fn texture_key(attributes: &Attributes) -> String {
    attributes
        .get_opt_string("attribute")
        .unwrap_or_else(|| DEFAULT_TEXTURE_KEY.to_string())
}

pub fn build_texture(attributes: &Attributes, env: &BuildEnv) -> Result<HomeTexture, HomeXmlError> {
    Ok(HomeTexture {
        catalog_id: attributes.get_opt_string("catalogId"),
        name: attributes.get_opt_string("name"),
        creator: attributes.get_opt_string("creator"),
        image: env
            .resolver
            .resolve_required(attributes, "image", ContentKind::TextureImage)?,
        width: attributes.get_req_f32("width")?,
        height: attributes.get_req_f32("height")?,
        x_offset: attributes.get_f32_or("xOffset", 0.0)?,
        y_offset: attributes.get_f32_or("yOffset", 0.0)?,
        angle: attributes.get_f32_or("angle", 0.0)?,
        scale: attributes.get_f32_or("scale", 1.0)?,
        fitting_area: attributes.get_bool_or("fittingArea", false),
        left_to_right_oriented: attributes.get_bool_or("leftToRightOriented", true),
    })
}

pub fn build_material(attributes: &Attributes, mut frame: Frame) -> Result<HomeMaterial, HomeXmlError> {
    Ok(HomeMaterial {
        name: attributes.get_req_string("name")?,
        key: attributes.get_opt_string("key"),
        color: attributes.get_opt_color("color")?,
        texture: frame.textures.remove(DEFAULT_TEXTURE_KEY),
        shininess: attributes.get_opt_f32("shininess")?,
    })
}

pub fn build_transformation(attributes: &Attributes) -> Result<Transformation, HomeXmlError> {
    Ok(Transformation {
        name: attributes.get_req_string("name")?,
        matrix: transformation_matrix(attributes, "matrix")?,
    })
}

pub fn build_baseboard(attributes: &Attributes, mut frame: Frame) -> Result<Baseboard, HomeXmlError> {
    Ok(Baseboard {
        thickness: attributes.get_req_f32("thickness")?,
        height: attributes.get_req_f32("height")?,
        paint: paint(&mut frame, DEFAULT_TEXTURE_KEY, attributes, "color")?,
    })
}

pub fn build_text_style(attributes: &Attributes) -> Result<TextStyle, HomeXmlError> {
    Ok(TextStyle {
        font_name: attributes.get_opt_string("fontName"),
        font_size: attributes.get_req_f32("fontSize")?,
        bold: attributes.get_bool_or("bold", false),
        italic: attributes.get_bool_or("italic", false),
        alignment: attributes
            .get_opt_enum("alignment", TextAlignment::from_name)
            .unwrap_or_default(),
    })
}

/// Read a `property` element as a name and a text or content value.
pub fn build_property(
    attributes: &Attributes,
    env: &BuildEnv,
) -> Result<(String, PropertyValue), HomeXmlError> {
    let name = attributes.get_req_string("name")?;
    let value = attributes.get_req("value")?;
    let value = match attributes.get_opt("type") {
        Some("CONTENT") => PropertyValue::Content(env.resolver.resolve_reference(
            attributes,
            "value",
            value,
            ContentKind::Other,
        )?),
        _ => PropertyValue::Text(value.to_string()),
    };
    Ok((name, value))
}
