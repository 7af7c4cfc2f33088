use crate::core::Id;

named_enum! {
    pub enum PaperOrientation {
        Portrait => "PORTRAIT",
        Landscape => "LANDSCAPE",
        ReverseLandscape => "REVERSE_LANDSCAPE",
    }
}

impl Default for PaperOrientation {
    fn default() -> Self {
        PaperOrientation::Portrait
    }
}

/// Print layout of the home.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HomePrint {
    pub header_format: Option<String>,
    pub footer_format: Option<String>,
    pub furniture_printed: bool,
    pub plan_printed: bool,
    pub view_3d_printed: bool,
    pub plan_scale: Option<f32>,
    pub paper_width: Option<f32>,
    pub paper_height: Option<f32>,
    pub paper_top_margin: Option<f32>,
    pub paper_left_margin: Option<f32>,
    pub paper_bottom_margin: Option<f32>,
    pub paper_right_margin: Option<f32>,
    pub paper_orientation: PaperOrientation,
    /// Levels printed in the plan, `None` meaning all levels.
    pub printed_levels: Option<Vec<Id>>,
}
