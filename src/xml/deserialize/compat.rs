//! Version-gated interpretation of legacy documents.

use crate::xml::quick::de::Attributes;

/// First writer version where models are assumed centered at their origin.
pub const MODEL_CENTERED_AT_ORIGIN_VERSION: i64 = 5500;

/// Behavior switches derived from the document version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compatibility {
    /// Version read from the root element, `0` when absent.
    pub version: i64,
}

impl Compatibility {
    pub fn new(version: i64) -> Self {
        Self { version }
    }

    /// Whether a piece model is centered at its origin.
    ///
    /// Older writers didn't store the flag: a model was centered only when it
    /// came with an explicit rotation matrix.
    pub fn model_centered_at_origin(&self, attributes: &Attributes) -> bool {
        if self.version < MODEL_CENTERED_AT_ORIGIN_VERSION {
            attributes.has("modelRotation")
        } else {
            attributes.get_bool_or("modelCenteredAtOrigin", true)
        }
    }

    /// Whether a plain piece element stands for a door or window.
    pub fn promotes_to_door_or_window(&self, element: &str, attributes: &Attributes) -> bool {
        element == "pieceOfFurniture" && attributes.get_bool_or("doorOrWindow", false)
    }
}
