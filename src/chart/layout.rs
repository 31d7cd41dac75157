use crate::color::ColorScale;
use crate::config::{ChartConfig, Margins};
use crate::data::model::Dataset;

use super::scale::BandScale;

// ---------------------------------------------------------------------------
// Layout: viewport → canvas and chart area
// ---------------------------------------------------------------------------

/// Pixel geometry derived once from the viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub chart_width: f32,
    pub chart_height: f32,
    pub margins: Margins,
}

impl Layout {
    pub fn new(viewport_width: f32, viewport_height: f32, config: &ChartConfig) -> Self {
        let m = config.margins;
        let canvas_width = viewport_width.max(0.0);
        let canvas_height = (viewport_height * config.height_factor).max(0.0);
        Layout {
            canvas_width,
            canvas_height,
            chart_width: (canvas_width - m.left - m.right).max(0.0),
            chart_height: (canvas_height - m.top - m.bottom).max(0.0),
            margins: m,
        }
    }
}

// ---------------------------------------------------------------------------
// Scales derived from the dataset extrema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    /// Year → x offset inside the chart area.
    pub years: BandScale<i32>,
    /// Month index (0 = January) → y offset, January at the bottom.
    pub months: BandScale<usize>,
    pub color: ColorScale,
}

impl ChartScales {
    pub fn new(dataset: &Dataset, layout: &Layout) -> Self {
        let (first_year, last_year) = dataset.year_extent();
        let (min_var, max_var) = dataset.variance_extent();
        ChartScales {
            years: BandScale::inclusive(first_year, last_year, (0.0, layout.chart_width)),
            months: BandScale::new((0..12).collect(), (layout.chart_height, 0.0)),
            color: ColorScale::new(min_var, max_var),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::VarianceRecord;

    #[test]
    fn test_chart_area_subtracts_margins() {
        let layout = Layout::new(1200.0, 800.0, &ChartConfig::default());
        assert_eq!(layout.canvas_width, 1200.0);
        assert!((layout.canvas_height - 776.0).abs() < 1e-3);
        assert_eq!(layout.chart_width, 1050.0);
        assert!((layout.chart_height - 596.0).abs() < 1e-3);
    }

    #[test]
    fn test_tiny_viewport_clamps_to_zero() {
        let layout = Layout::new(100.0, 100.0, &ChartConfig::default());
        assert_eq!(layout.chart_width, 0.0);
        assert_eq!(layout.chart_height, 0.0);
    }

    #[test]
    fn test_scales_cover_dataset_extent() {
        let ds = Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                VarianceRecord { year: 1760, month: 5, variance: -2.0 },
                VarianceRecord { year: 1769, month: 6, variance: 3.0 },
            ],
        };
        let layout = Layout::new(1200.0, 800.0, &ChartConfig::default());
        let scales = ChartScales::new(&ds, &layout);
        assert_eq!(scales.years.domain().len(), 10);
        assert_eq!(scales.years.bandwidth(), 105.0);
        assert_eq!(scales.months.domain().len(), 12);
        assert_eq!(scales.color.domain(), (-2.0, 3.0));
    }
}
