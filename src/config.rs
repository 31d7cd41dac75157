// ---------------------------------------------------------------------------
// Fixed chart configuration
// ---------------------------------------------------------------------------

pub const DATASET_URL: &str = "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Space reserved around the plotting area, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Every constant the layout, renderer and tooltip read.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub dataset_url: String,
    pub margins: Margins,
    /// Fraction of the viewport height given to the canvas.
    pub height_factor: f32,
    /// Only years divisible by this get an x-axis label.
    pub year_tick_interval: i32,
    pub tooltip_width: f32,
    pub tooltip_height: f32,
    pub tooltip_offset: f32,
    pub legend_max_width: f32,
    pub legend_height: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dataset_url: DATASET_URL.to_string(),
            margins: Margins {
                top: 100.0,
                right: 50.0,
                bottom: 80.0,
                left: 100.0,
            },
            height_factor: 0.97,
            year_tick_interval: 20,
            tooltip_width: 100.0,
            tooltip_height: 50.0,
            tooltip_offset: 20.0,
            legend_max_width: 400.0,
            legend_height: 10.0,
        }
    }
}
