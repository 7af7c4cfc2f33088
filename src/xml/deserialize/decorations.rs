//! Builders for polylines, dimension lines and labels.

use crate::home::decoration::{ArrowStyle, CapStyle, DashStyle, JoinStyle};
use crate::home::{DimensionLine, Label, Polyline};
use crate::xml::deserialize::context::{BuildEnv, Frame};
use crate::xml::deserialize::helpers::id;
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

/// Opaque black.
const DEFAULT_POLYLINE_COLOR: u32 = 0xFF000000;

pub fn build_polyline(
    attributes: &Attributes,
    mut frame: Frame,
    env: &BuildEnv,
) -> Result<Polyline, HomeXmlError> {
    Ok(Polyline {
        id: id(attributes, "polyline"),
        level: env.level(attributes),
        points: std::mem::take(&mut frame.points),
        thickness: attributes.get_f32_or("thickness", 1.0)?,
        cap_style: attributes
            .get_opt_enum("capStyle", CapStyle::from_name)
            .unwrap_or(CapStyle::Butt),
        join_style: attributes
            .get_opt_enum("joinStyle", JoinStyle::from_name)
            .unwrap_or(JoinStyle::Miter),
        dash_style: attributes
            .get_opt_enum("dashStyle", DashStyle::from_name)
            .unwrap_or(DashStyle::Solid),
        dash_pattern: attributes.get_opt_f32_list("dashPattern")?,
        dash_offset: attributes.get_f32_or("dashOffset", 0.0)?,
        start_arrow_style: attributes
            .get_opt_enum("startArrowStyle", ArrowStyle::from_name)
            .unwrap_or(ArrowStyle::None),
        end_arrow_style: attributes
            .get_opt_enum("endArrowStyle", ArrowStyle::from_name)
            .unwrap_or(ArrowStyle::None),
        closed_path: attributes.get_bool_or("closedPath", false),
        color: attributes
            .get_opt_color("color")?
            .unwrap_or(DEFAULT_POLYLINE_COLOR),
        elevation: attributes.get_opt_f32("elevation")?,
        properties: frame.properties,
    })
}

pub fn build_dimension_line(
    attributes: &Attributes,
    mut frame: Frame,
    env: &BuildEnv,
) -> Result<DimensionLine, HomeXmlError> {
    let elevation_start = attributes.get_f32_or("elevationStart", 0.0)?;
    Ok(DimensionLine {
        id: id(attributes, "dimensionLine"),
        level: env.level(attributes),
        x_start: attributes.get_req_f32("xStart")?,
        y_start: attributes.get_req_f32("yStart")?,
        elevation_start,
        x_end: attributes.get_req_f32("xEnd")?,
        y_end: attributes.get_req_f32("yEnd")?,
        elevation_end: attributes.get_f32_or("elevationEnd", elevation_start)?,
        offset: attributes.get_req_f32("offset")?,
        pitch: attributes.get_f32_or("pitch", 0.0)?,
        color: attributes.get_opt_color("color")?,
        visible_in_3d: attributes.get_bool_or("visibleIn3D", false),
        length_style: frame.text_styles.remove("lengthStyle"),
        properties: frame.properties,
    })
}

/// Build a label. Its text comes from a mandatory `text` child.
pub fn build_label(
    attributes: &Attributes,
    mut frame: Frame,
    env: &BuildEnv,
) -> Result<Label, HomeXmlError> {
    let text = frame.text.take().ok_or_else(|| HomeXmlError::MissingElement {
        element: attributes.element_name().to_string(),
        child: "text".to_string(),
    })?;
    Ok(Label {
        id: id(attributes, "label"),
        level: env.level(attributes),
        text,
        x: attributes.get_req_f32("x")?,
        y: attributes.get_req_f32("y")?,
        angle: attributes.get_f32_or("angle", 0.0)?,
        elevation: attributes.get_f32_or("elevation", 0.0)?,
        pitch: attributes.get_opt_f32("pitch")?,
        color: attributes.get_opt_color("color")?,
        outline_color: attributes.get_opt_color("outlineColor")?,
        style: frame.text_styles.remove("style"),
        properties: frame.properties,
    })
}
