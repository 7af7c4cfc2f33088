//! Wall builder.

use crate::home::Wall;
use crate::xml::deserialize::context::{BuildEnv, Frame};
use crate::xml::deserialize::helpers::{id, paint};
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

/// Build a wall. Its joins are left unset until linking.
pub fn build_wall(
    attributes: &Attributes,
    mut frame: Frame,
    env: &BuildEnv,
) -> Result<Wall, HomeXmlError> {
    Ok(Wall {
        id: id(attributes, "wall"),
        level: env.level(attributes),
        x_start: attributes.get_req_f32("xStart")?,
        y_start: attributes.get_req_f32("yStart")?,
        x_end: attributes.get_req_f32("xEnd")?,
        y_end: attributes.get_req_f32("yEnd")?,
        thickness: attributes.get_req_f32("thickness")?,
        height: attributes.get_opt_f32("height")?,
        height_at_end: attributes.get_opt_f32("heightAtEnd")?,
        arc_extent: attributes.get_opt_f32("arcExtent")?,
        pattern: attributes.get_opt_string("pattern"),
        top_color: attributes.get_opt_color("topColor")?,
        left_side: paint(&mut frame, "leftSideTexture", attributes, "leftSideColor")?,
        left_side_shininess: attributes.get_f32_or("leftSideShininess", 0.0)?,
        left_side_baseboard: frame.baseboards.remove("leftSideBaseboard"),
        right_side: paint(&mut frame, "rightSideTexture", attributes, "rightSideColor")?,
        right_side_shininess: attributes.get_f32_or("rightSideShininess", 0.0)?,
        right_side_baseboard: frame.baseboards.remove("rightSideBaseboard"),
        wall_at_start: None,
        wall_at_end: None,
        properties: frame.properties,
    })
}

/// The raw neighbor ids a wall declares, resolved by the linker.
pub fn declared_joins(attributes: &Attributes) -> (Option<String>, Option<String>) {
    (
        attributes.get_opt_string("wallAtStart"),
        attributes.get_opt_string("wallAtEnd"),
    )
}
