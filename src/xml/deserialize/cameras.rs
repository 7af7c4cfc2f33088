//! Camera builder and routing of cameras to their slot.

use crate::home::camera::DEFAULT_CAMERA_TIME;
use crate::home::{Camera, CameraKind, Lens};
use crate::xml::deserialize::context::Frame;
use crate::xml::deserialize::helpers::id;
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

/// Where a closed camera element goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraSlot {
    Top,
    Observer,
    Stored,
    /// Appended to the video path of the enclosing environment.
    Path,
}

impl CameraSlot {
    /// Read the `attribute` of a camera element.
    ///
    /// Without it, the element name decides between the two main cameras.
    /// An unknown value is recorded on `attributes` and yields no slot.
    pub fn of(element: &str, attributes: &Attributes) -> Option<Self> {
        if attributes.get_opt("attribute").is_none() {
            return Some(if element == "observerCamera" {
                CameraSlot::Observer
            } else {
                CameraSlot::Top
            });
        }
        attributes.get_opt_enum("attribute", |name| match name {
            "topCamera" => Some(CameraSlot::Top),
            "observerCamera" => Some(CameraSlot::Observer),
            "storedCameras" => Some(CameraSlot::Stored),
            "cameraPath" => Some(CameraSlot::Path),
            _ => None,
        })
    }
}

pub fn build_camera(
    element: &str,
    attributes: &Attributes,
    frame: Frame,
) -> Result<Camera, HomeXmlError> {
    let kind = if element == "observerCamera" {
        CameraKind::Observer
    } else {
        CameraKind::Top
    };
    Ok(Camera {
        id: id(attributes, element),
        kind,
        name: attributes.get_opt_string("name"),
        x: attributes.get_req_f32("x")?,
        y: attributes.get_req_f32("y")?,
        z: attributes.get_req_f32("z")?,
        yaw: attributes.get_req_f32("yaw")?,
        pitch: attributes.get_req_f32("pitch")?,
        field_of_view: attributes.get_req_f32("fieldOfView")?,
        time: attributes
            .get_opt_i64("time")?
            .unwrap_or(DEFAULT_CAMERA_TIME),
        lens: attributes
            .get_opt_enum("lens", Lens::from_name)
            .unwrap_or_default(),
        renderer: attributes.get_opt_string("renderer"),
        fixed_size: kind == CameraKind::Observer && attributes.get_bool_or("fixedSize", false),
        properties: frame.properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(element: &str, extra: &[(&str, &str)]) -> Attributes {
        let mut pairs = vec![
            ("x", "100"),
            ("y", "200"),
            ("z", "170"),
            ("yaw", "0.5"),
            ("pitch", "0.1"),
            ("fieldOfView", "1.0"),
        ];
        pairs.extend_from_slice(extra);
        Attributes::from_pairs(element, pairs)
    }

    #[test]
    fn test_observer_camera() {
        let a = attrs("observerCamera", &[("fixedSize", "true"), ("lens", "FISHEYE")]);
        let camera = build_camera("observerCamera", &a, Frame::default()).unwrap();
        assert_eq!(camera.kind, CameraKind::Observer);
        assert!(camera.fixed_size);
        assert_eq!(camera.lens, Lens::Fisheye);
        assert_eq!(camera.time, DEFAULT_CAMERA_TIME);
        assert_eq!(CameraSlot::of("observerCamera", &a), Some(CameraSlot::Observer));
    }

    #[test]
    fn test_camera_time_is_long() {
        let a = attrs("camera", &[("time", "1700000000000"), ("attribute", "storedCameras")]);
        let camera = build_camera("camera", &a, Frame::default()).unwrap();
        assert_eq!(camera.time, 1_700_000_000_000);
        assert_eq!(camera.kind, CameraKind::Top);
        assert_eq!(CameraSlot::of("camera", &a), Some(CameraSlot::Stored));
    }

    #[test]
    fn test_unknown_slot_is_recovered() {
        let a = attrs("camera", &[("attribute", "sideCamera")]);
        assert_eq!(CameraSlot::of("camera", &a), None);
        assert_eq!(
            a.take_recovered(),
            vec!["ignored camera@attribute='sideCamera': unknown value".to_string()]
        );
    }

    #[test]
    fn test_missing_slot_follows_element() {
        let a = attrs("camera", &[]);
        assert_eq!(CameraSlot::of("camera", &a), Some(CameraSlot::Top));
        assert!(a.take_recovered().is_empty());
    }
}
