//! Room builder.

use crate::home::Room;
use crate::xml::deserialize::context::{BuildEnv, Frame};
use crate::xml::deserialize::helpers::{id, paint};
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

pub fn build_room(
    attributes: &Attributes,
    mut frame: Frame,
    env: &BuildEnv,
) -> Result<Room, HomeXmlError> {
    Ok(Room {
        id: id(attributes, "room"),
        level: env.level(attributes),
        name: attributes.get_opt_string("name"),
        name_angle: attributes.get_f32_or("nameAngle", 0.0)?,
        name_x_offset: attributes.get_f32_or("nameXOffset", 0.0)?,
        name_y_offset: attributes.get_f32_or("nameYOffset", 0.0)?,
        name_style: frame.text_styles.remove("nameStyle"),
        points: std::mem::take(&mut frame.points),
        area_visible: attributes.get_bool_or("areaVisible", false),
        area_angle: attributes.get_f32_or("areaAngle", 0.0)?,
        area_x_offset: attributes.get_f32_or("areaXOffset", 0.0)?,
        area_y_offset: attributes.get_f32_or("areaYOffset", 0.0)?,
        area_style: frame.text_styles.remove("areaStyle"),
        floor_visible: attributes.get_bool_or("floorVisible", true),
        floor: paint(&mut frame, "floorTexture", attributes, "floorColor")?,
        floor_shininess: attributes.get_f32_or("floorShininess", 0.0)?,
        ceiling_visible: attributes.get_bool_or("ceilingVisible", true),
        ceiling: paint(&mut frame, "ceilingTexture", attributes, "ceilingColor")?,
        ceiling_shininess: attributes.get_f32_or("ceilingShininess", 0.0)?,
        ceiling_flat: attributes.get_bool_or("ceilingFlat", false),
        properties: frame.properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::TextStyle;
    use crate::test_utils::TestEnv;

    #[test]
    fn test_points_keep_order_and_styles_are_picked() {
        let env = TestEnv::new();
        let mut frame = Frame::default();
        frame.points = vec![(0.0, 0.0), (0.0, 100.0), (100.0, 100.0)];
        frame.text_styles.insert(
            "areaStyle".to_string(),
            TextStyle {
                font_name: None,
                font_size: 24.0,
                bold: false,
                italic: true,
                alignment: Default::default(),
            },
        );
        let attrs = Attributes::from_pairs("room", [("name", "Kitchen"), ("areaVisible", "true")]);
        let room = build_room(&attrs, frame, &env.env()).unwrap();
        assert_eq!(room.points[1], (0.0, 100.0));
        assert!(room.area_style.unwrap().italic);
        assert!(room.name_style.is_none());
        assert!(room.floor_visible && room.ceiling_visible && room.area_visible);
        assert!(room.id.as_str().starts_with("room-"));
    }
}
