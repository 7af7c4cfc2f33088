//! Builders for pieces of furniture and their variant payloads.
//!
//! The element name selects the variant. A plain `pieceOfFurniture` flagged
//! `doorOrWindow="true"` by older writers is read as a door or window.

use crate::home::furniture::group::GroupGeometry;
use crate::home::furniture::{
    DEFAULT_CUT_OUT_SHAPE, DoorOrWindow, FurnitureGroup, HomePiece, Light, LightSource, PieceKind,
    Sash, ShelfBox, ShelfUnit,
};
use crate::xml::deserialize::context::{BuildEnv, Frame};
use crate::xml::deserialize::helpers::{id, non_empty, paint, rotation};
use crate::xml::deserialize::materials::DEFAULT_TEXTURE_KEY;
use crate::xml::deserialize::resolver::ContentKind;
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

/// Elements producing a [`HomePiece`].
pub const FURNITURE_ELEMENTS: &[&str] = &[
    "pieceOfFurniture",
    "doorOrWindow",
    "light",
    "shelfUnit",
    "furnitureGroup",
];

pub fn is_furniture(element: &str) -> bool {
    FURNITURE_ELEMENTS.contains(&element)
}

/// Size and placement of a piece before attribute overrides.
struct Placement {
    x: f32,
    y: f32,
    elevation: f32,
    angle: f32,
    width: f32,
    depth: f32,
    height: f32,
}

impl Placement {
    fn read(attributes: &Attributes) -> Result<Self, HomeXmlError> {
        Ok(Placement {
            x: attributes.get_req_f32("x")?,
            y: attributes.get_req_f32("y")?,
            elevation: attributes.get_f32_or("elevation", 0.0)?,
            angle: attributes.get_f32_or("angle", 0.0)?,
            width: attributes.get_req_f32("width")?,
            depth: attributes.get_req_f32("depth")?,
            height: attributes.get_req_f32("height")?,
        })
    }

    /// Derive a group placement from its children; attributes present in the
    /// document override the computed values.
    fn of_group(attributes: &Attributes, children: &[HomePiece]) -> Result<Self, HomeXmlError> {
        let angle = match attributes.get_opt_f32("angle")? {
            Some(angle) => angle,
            None => children.first().map_or(0.0, |child| child.angle),
        };
        let geometry = GroupGeometry::enclosing(children, angle).unwrap_or(GroupGeometry {
            x: 0.0,
            y: 0.0,
            elevation: 0.0,
            width: 0.0,
            depth: 0.0,
            height: 0.0,
        });
        Ok(Placement {
            x: attributes.get_f32_or("x", geometry.x)?,
            y: attributes.get_f32_or("y", geometry.y)?,
            elevation: attributes.get_f32_or("elevation", geometry.elevation)?,
            angle,
            width: attributes.get_f32_or("width", geometry.width)?,
            depth: attributes.get_f32_or("depth", geometry.depth)?,
            height: attributes.get_f32_or("height", geometry.height)?,
        })
    }
}

/// Build the piece closed by `element`.
///
/// `children` holds the pending pieces of a `furnitureGroup` and is ignored
/// for other elements.
pub fn build_piece(
    element: &str,
    attributes: &Attributes,
    mut frame: Frame,
    children: Vec<HomePiece>,
    env: &BuildEnv,
) -> Result<HomePiece, HomeXmlError> {
    let promoted = env.compat.promotes_to_door_or_window(element, attributes);
    let (placement, kind) = match element {
        "furnitureGroup" => (
            Placement::of_group(attributes, &children)?,
            PieceKind::Group(FurnitureGroup { children }),
        ),
        "doorOrWindow" => (
            Placement::read(attributes)?,
            PieceKind::DoorOrWindow(door_or_window(attributes, &mut frame, false)?),
        ),
        "pieceOfFurniture" if promoted => (
            Placement::read(attributes)?,
            PieceKind::DoorOrWindow(door_or_window(attributes, &mut frame, true)?),
        ),
        "light" => (
            Placement::read(attributes)?,
            PieceKind::Light(light(attributes, &mut frame)?),
        ),
        "shelfUnit" => (
            Placement::read(attributes)?,
            PieceKind::ShelfUnit(shelf_unit(attributes, &mut frame)?),
        ),
        _ => (Placement::read(attributes)?, PieceKind::Piece),
    };

    let resolver = env.resolver;
    Ok(HomePiece {
        id: id(attributes, element),
        level: env.level(attributes),
        catalog_id: attributes.get_opt_string("catalogId"),
        name: attributes.get_opt_string("name"),
        name_visible: attributes.get_bool_or("nameVisible", false),
        name_x_offset: attributes.get_f32_or("nameXOffset", 0.0)?,
        name_y_offset: attributes.get_f32_or("nameYOffset", 0.0)?,
        name_angle: attributes.get_f32_or("nameAngle", 0.0)?,
        name_style: frame.text_styles.remove("nameStyle"),
        description: attributes.get_opt_string("description"),
        information: attributes.get_opt_string("information"),
        creator: attributes.get_opt_string("creator"),
        license: attributes.get_opt_string("license"),
        price: attributes.get_opt_decimal("price")?,
        value_added_tax_percentage: attributes.get_opt_decimal("valueAddedTaxPercentage")?,
        currency: attributes.get_opt_string("currency"),

        icon: resolver.resolve(attributes, "icon", ContentKind::Icon)?,
        plan_icon: resolver.resolve(attributes, "planIcon", ContentKind::PlanIcon)?,
        model: resolver.resolve(attributes, "model", ContentKind::Model)?,
        model_size: attributes.get_opt_i64("modelSize")?,
        model_rotation: rotation(attributes, "modelRotation")?,
        model_centered_at_origin: env.compat.model_centered_at_origin(attributes),
        model_mirrored: attributes.get_bool_or("modelMirrored", false),
        back_face_shown: attributes.get_bool_or("backFaceShown", false),
        model_materials: non_empty(std::mem::take(&mut frame.materials)),
        model_transformations: non_empty(std::mem::take(&mut frame.transformations)),
        staircase_cut_out_shape: attributes.get_opt_string("staircaseCutOutShape"),

        x: placement.x,
        y: placement.y,
        elevation: placement.elevation,
        angle: placement.angle,
        pitch: attributes.get_f32_or("pitch", 0.0)?,
        roll: attributes.get_f32_or("roll", 0.0)?,
        width: placement.width,
        depth: placement.depth,
        height: placement.height,
        drop_on_top_elevation: attributes.get_f32_or("dropOnTopElevation", 1.0)?,

        paint: paint(&mut frame, DEFAULT_TEXTURE_KEY, attributes, "color")?,
        shininess: attributes.get_opt_f32("shininess")?,

        movable: attributes.get_bool_or("movable", true),
        visible: attributes.get_bool_or("visible", true),
        resizable: attributes.get_bool_or("resizable", true),
        deformable: attributes.get_bool_or("deformable", true),
        texturable: attributes.get_bool_or("texturable", true),

        properties: frame.properties,
        kind,
    })
}

fn door_or_window(
    attributes: &Attributes,
    frame: &mut Frame,
    promoted: bool,
) -> Result<DoorOrWindow, HomeXmlError> {
    let mut cut_out_shape = attributes.get_opt_string("cutOutShape");
    if promoted && cut_out_shape.is_none() {
        cut_out_shape = Some(DEFAULT_CUT_OUT_SHAPE.to_string());
    }
    Ok(DoorOrWindow {
        wall_thickness: attributes.get_f32_or("wallThickness", 1.0)?,
        wall_distance: attributes.get_f32_or("wallDistance", 0.0)?,
        wall_width: attributes.get_f32_or("wallWidth", 1.0)?,
        wall_left: attributes.get_f32_or("wallLeft", 0.0)?,
        wall_height: attributes.get_f32_or("wallHeight", 1.0)?,
        wall_top: attributes.get_f32_or("wallTop", 0.0)?,
        wall_cut_out_on_both_sides: attributes.get_bool_or("wallCutOutOnBothSides", false),
        width_depth_deformable: attributes.get_bool_or("widthDepthDeformable", true),
        bound_to_wall: attributes.get_bool_or("boundToWall", false),
        cut_out_shape,
        sashes: std::mem::take(&mut frame.sashes),
    })
}

fn light(attributes: &Attributes, frame: &mut Frame) -> Result<Light, HomeXmlError> {
    Ok(Light {
        power: attributes.get_f32_or("power", 0.5)?,
        sources: std::mem::take(&mut frame.light_sources),
        source_material_names: std::mem::take(&mut frame.light_source_material_names),
    })
}

fn shelf_unit(attributes: &Attributes, frame: &mut Frame) -> Result<ShelfUnit, HomeXmlError> {
    Ok(ShelfUnit {
        shelf_elevations: attributes
            .get_opt_f32_list("shelfElevations")?
            .unwrap_or_default(),
        shelf_boxes: std::mem::take(&mut frame.shelf_boxes),
    })
}

pub fn build_sash(attributes: &Attributes) -> Result<Sash, HomeXmlError> {
    Ok(Sash {
        x_axis: attributes.get_req_f32("xAxis")?,
        y_axis: attributes.get_req_f32("yAxis")?,
        width: attributes.get_req_f32("width")?,
        start_angle: attributes.get_req_f32("startAngle")?,
        end_angle: attributes.get_req_f32("endAngle")?,
    })
}

pub fn build_light_source(attributes: &Attributes) -> Result<LightSource, HomeXmlError> {
    Ok(LightSource {
        x: attributes.get_req_f32("x")?,
        y: attributes.get_req_f32("y")?,
        z: attributes.get_req_f32("z")?,
        color: attributes.get_req_color("color")?,
        diameter: attributes.get_opt_f32("diameter")?,
    })
}

pub fn build_shelf(attributes: &Attributes) -> Result<ShelfBox, HomeXmlError> {
    Ok(ShelfBox {
        x_lower: attributes.get_req_f32("xLower")?,
        y_lower: attributes.get_req_f32("yLower")?,
        z_lower: attributes.get_req_f32("zLower")?,
        x_upper: attributes.get_req_f32("xUpper")?,
        y_upper: attributes.get_req_f32("yUpper")?,
        z_upper: attributes.get_req_f32("zUpper")?,
    })
}
