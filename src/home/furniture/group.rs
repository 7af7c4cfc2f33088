use crate::home::furniture::HomePiece;

/// Children of a furniture group, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FurnitureGroup {
    pub children: Vec<HomePiece>,
}

/// Geometry of a group derived from its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupGeometry {
    pub x: f32,
    pub y: f32,
    pub elevation: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

impl GroupGeometry {
    /// Compute the box enclosing `children` in a frame rotated by `angle`.
    ///
    /// Returns `None` for an empty group.
    pub fn enclosing(children: &[HomePiece], angle: f32) -> Option<Self> {
        if children.is_empty() {
            return None;
        }
        let (sin, cos) = angle.sin_cos();

        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        let mut elevation = f32::MAX;
        let mut top = f32::MIN;
        for child in children {
            for (px, py) in child.points() {
                // Express each corner in the group's own frame
                let rx = px * cos + py * sin;
                let ry = -px * sin + py * cos;
                min_x = min_x.min(rx);
                min_y = min_y.min(ry);
                max_x = max_x.max(rx);
                max_y = max_y.max(ry);
            }
            elevation = elevation.min(child.elevation);
            top = top.max(child.top_elevation());
        }

        let (cx, cy) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
        Some(GroupGeometry {
            x: cx * cos - cy * sin,
            y: cx * sin + cy * cos,
            elevation,
            width: max_x - min_x,
            depth: max_y - min_y,
            height: top - elevation,
        })
    }
}
