//! Builders for the single-instance blocks: environment, print and compass.

use crate::home::environment::{AspectRatio, DrawingMode};
use crate::home::{Compass, Environment, HomePrint, PaperOrientation};
use crate::xml::deserialize::context::Frame;
use crate::xml::deserialize::helpers::paint;
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

pub fn build_environment(
    attributes: &Attributes,
    mut frame: Frame,
) -> Result<Environment, HomeXmlError> {
    let defaults = Environment::default();
    let ground = paint(&mut frame, "groundTexture", attributes, "groundColor")?;
    let sky = paint(&mut frame, "skyTexture", attributes, "skyColor")?;
    Ok(Environment {
        ground: ground.or(defaults.ground),
        background_image_visible_on_ground_3d: attributes
            .get_bool_or("backgroundImageVisibleOnGround3D", false),
        sky: sky.or(defaults.sky),
        light_color: attributes
            .get_opt_color("lightColor")?
            .unwrap_or(defaults.light_color),
        ceiling_light_color: attributes
            .get_opt_color("ceilingLightColor")?
            .unwrap_or(defaults.ceiling_light_color),
        walls_alpha: attributes.get_f32_or("wallsAlpha", defaults.walls_alpha)?,
        all_levels_visible: attributes.get_bool_or("allLevelsVisible", false),
        observer_camera_elevation_adjusted: attributes
            .get_bool_or("observerCameraElevationAdjusted", true),
        drawing_mode: attributes
            .get_opt_enum("drawingMode", DrawingMode::from_name)
            .unwrap_or(defaults.drawing_mode),
        subpart_size_under_light: attributes
            .get_f32_or("subpartSizeUnderLight", defaults.subpart_size_under_light)?,
        photo_width: attributes.get_i32_or("photoWidth", defaults.photo_width)?,
        photo_height: attributes.get_i32_or("photoHeight", defaults.photo_height)?,
        photo_aspect_ratio: attributes
            .get_opt_enum("photoAspectRatio", AspectRatio::from_name)
            .unwrap_or(defaults.photo_aspect_ratio),
        photo_quality: attributes.get_i32_or("photoQuality", defaults.photo_quality)?,
        video_width: attributes.get_i32_or("videoWidth", defaults.video_width)?,
        video_aspect_ratio: attributes
            .get_opt_enum("videoAspectRatio", AspectRatio::from_name)
            .unwrap_or(defaults.video_aspect_ratio),
        video_quality: attributes.get_i32_or("videoQuality", defaults.video_quality)?,
        video_speed: attributes.get_f32_or("videoSpeed", defaults.video_speed)?,
        video_frame_rate: attributes.get_i32_or("videoFrameRate", defaults.video_frame_rate)?,
        video_camera_path: std::mem::take(&mut frame.camera_path),
        properties: frame.properties,
    })
}

/// Build print settings. Printed levels are attached by the linker.
pub fn build_print(attributes: &Attributes) -> Result<HomePrint, HomeXmlError> {
    Ok(HomePrint {
        header_format: attributes.get_opt_string("headerFormat"),
        footer_format: attributes.get_opt_string("footerFormat"),
        furniture_printed: attributes.get_bool_or("furniturePrinted", true),
        plan_printed: attributes.get_bool_or("planPrinted", true),
        view_3d_printed: attributes.get_bool_or("view3DPrinted", true),
        plan_scale: attributes.get_opt_f32("planScale")?,
        paper_width: attributes.get_opt_f32("paperWidth")?,
        paper_height: attributes.get_opt_f32("paperHeight")?,
        paper_top_margin: attributes.get_opt_f32("paperTopMargin")?,
        paper_left_margin: attributes.get_opt_f32("paperLeftMargin")?,
        paper_bottom_margin: attributes.get_opt_f32("paperBottomMargin")?,
        paper_right_margin: attributes.get_opt_f32("paperRightMargin")?,
        paper_orientation: attributes
            .get_opt_enum("paperOrientation", PaperOrientation::from_name)
            .unwrap_or_default(),
        printed_levels: None,
    })
}

pub fn build_compass(attributes: &Attributes, frame: Frame) -> Result<Compass, HomeXmlError> {
    Ok(Compass {
        x: attributes.get_req_f32("x")?,
        y: attributes.get_req_f32("y")?,
        diameter: attributes.get_req_f32("diameter")?,
        north_direction: attributes.get_f32_or("northDirection", 0.0)?,
        longitude: attributes.get_opt_f32("longitude")?,
        latitude: attributes.get_opt_f32("latitude")?,
        time_zone: attributes.get_opt_string("timeZone"),
        visible: attributes.get_bool_or("visible", true),
        properties: frame.properties,
    })
}
