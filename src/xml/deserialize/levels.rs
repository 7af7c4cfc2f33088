//! Builders for levels and plan background images.

use crate::home::{BackgroundImage, Level};
use crate::xml::deserialize::context::{BuildEnv, Frame};
use crate::xml::deserialize::helpers::id;
use crate::xml::deserialize::resolver::ContentKind;
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

pub fn build_level(attributes: &Attributes, frame: Frame) -> Result<Level, HomeXmlError> {
    Ok(Level {
        id: id(attributes, "level"),
        name: attributes.get_opt_string("name"),
        elevation: attributes.get_req_f32("elevation")?,
        floor_thickness: attributes.get_req_f32("floorThickness")?,
        height: attributes.get_req_f32("height")?,
        elevation_index: attributes.get_i32_or("elevationIndex", -1)?,
        viewable: attributes.get_bool_or("viewable", true),
        visible: attributes.get_bool_or("visible", true),
        background_image: frame.background_image,
        properties: frame.properties,
    })
}

pub fn build_background_image(
    attributes: &Attributes,
    env: &BuildEnv,
) -> Result<BackgroundImage, HomeXmlError> {
    Ok(BackgroundImage {
        image: env
            .resolver
            .resolve_required(attributes, "image", ContentKind::Other)?,
        scale_distance: attributes.get_req_f32("scaleDistance")?,
        scale_distance_x_start: attributes.get_req_f32("scaleDistanceXStart")?,
        scale_distance_y_start: attributes.get_req_f32("scaleDistanceYStart")?,
        scale_distance_x_end: attributes.get_req_f32("scaleDistanceXEnd")?,
        scale_distance_y_end: attributes.get_req_f32("scaleDistanceYEnd")?,
        x_origin: attributes.get_f32_or("xOrigin", 0.0)?,
        y_origin: attributes.get_f32_or("yOrigin", 0.0)?,
        visible: attributes.get_bool_or("visible", true),
    })
}
