#![cfg(test)]

use std::collections::HashSet;

use crate::core::Id;
use crate::home::{HomePiece, Level, PieceKind, Properties, Wall};
use crate::xml::deserialize::compat::Compatibility;
use crate::xml::deserialize::context::{BuildEnv, Diagnostics};
use crate::xml::deserialize::resolver::ContentResolver;

// Helper function to assert floating point equality with tolerance
pub fn assert_float_eq(a: f32, b: f32, tolerance: f32) {
    assert!(
        (a - b).abs() < tolerance,
        "Expected {} to be approximately equal to {} (tolerance: {})",
        a,
        b,
        tolerance
    );
}

/// Wrap an element snippet in a `home` root for parsing.
pub fn wrap_home_xml(content: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<home version="7200" name="Test">
    {}
</home>"#,
        content
    )
}

/// An unrotated plain piece centered at (`x`, `y`).
pub fn piece_at(x: f32, y: f32, width: f32, depth: f32) -> HomePiece {
    HomePiece {
        id: Id::generate("pieceOfFurniture"),
        level: None,
        catalog_id: None,
        name: None,
        name_visible: false,
        name_x_offset: 0.0,
        name_y_offset: 0.0,
        name_angle: 0.0,
        name_style: None,
        description: None,
        information: None,
        creator: None,
        license: None,
        price: None,
        value_added_tax_percentage: None,
        currency: None,
        icon: None,
        plan_icon: None,
        model: None,
        model_size: None,
        model_rotation: None,
        model_centered_at_origin: true,
        model_mirrored: false,
        back_face_shown: false,
        model_materials: None,
        model_transformations: None,
        staircase_cut_out_shape: None,
        x,
        y,
        elevation: 0.0,
        angle: 0.0,
        pitch: 0.0,
        roll: 0.0,
        width,
        depth,
        height: 10.0,
        drop_on_top_elevation: 1.0,
        paint: None,
        shininess: None,
        movable: true,
        visible: true,
        resizable: true,
        deformable: true,
        texturable: true,
        properties: Properties::new(),
        kind: PieceKind::Piece,
    }
}

pub fn level(id: &str, elevation: f32) -> Level {
    Level {
        id: Id::new(id),
        name: None,
        elevation,
        floor_thickness: 12.0,
        height: 250.0,
        elevation_index: -1,
        viewable: true,
        visible: true,
        background_image: None,
        properties: Properties::new(),
    }
}

/// A 100 cm long wall along the x axis.
pub fn wall(id: &str) -> Wall {
    Wall {
        id: Id::new(id),
        level: None,
        x_start: 0.0,
        y_start: 0.0,
        x_end: 100.0,
        y_end: 0.0,
        thickness: 10.0,
        height: None,
        height_at_end: None,
        arc_extent: None,
        pattern: None,
        top_color: None,
        left_side: None,
        left_side_shininess: 0.0,
        left_side_baseboard: None,
        right_side: None,
        right_side_shininess: 0.0,
        right_side_baseboard: None,
        wall_at_start: None,
        wall_at_end: None,
        properties: Properties::new(),
    }
}

/// Owner of the services a builder borrows, without content collaborators.
pub struct TestEnv {
    compat: Compatibility,
    resolver: ContentResolver,
    levels: HashSet<Id>,
    diagnostics: Diagnostics,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_version(7200)
    }

    pub fn with_version(version: i64) -> Self {
        Self {
            compat: Compatibility::new(version),
            resolver: ContentResolver::new(None, None),
            levels: HashSet::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Declare levels as already read.
    pub fn levels(mut self, ids: &[&str]) -> Self {
        self.levels.extend(ids.iter().map(|id| Id::new(*id)));
        self
    }

    pub fn env(&self) -> BuildEnv<'_> {
        BuildEnv {
            compat: self.compat,
            resolver: &self.resolver,
            levels: &self.levels,
            diagnostics: &self.diagnostics,
        }
    }
}
