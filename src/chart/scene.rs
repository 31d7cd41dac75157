use eframe::egui::{Pos2, Rect, pos2, vec2};
use palette::Srgb;

use crate::config::ChartConfig;
use crate::data::model::{Dataset, VarianceRecord};

use super::layout::{ChartScales, Layout};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const TITLE: &str = "Global Surface Temperature";

// ---------------------------------------------------------------------------
// Scene elements
// ---------------------------------------------------------------------------

/// Centred text with an element id.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub id: &'static str,
    pub pos: Pos2,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal line, labels underneath.
    Bottom,
    /// Vertical line, labels to the left.
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Distance along the axis from its origin.
    pub offset: f32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: Option<&'static str>,
    pub orient: AxisOrient,
    /// Origin relative to the enclosing group.
    pub origin: Pos2,
    pub length: f32,
    pub ticks: Vec<Tick>,
    pub domain_line: bool,
}

impl Axis {
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }
}

/// One heat-map rectangle, in chart-group coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub rect: Rect,
    pub fill: Srgb<u8>,
    pub record: VarianceRecord,
    pub temperature: f64,
}

impl Cell {
    /// Zero-based, matching the month axis.
    pub fn data_month(&self) -> usize {
        self.record.month_index()
    }

    pub fn data_year(&self) -> i32 {
        self.record.year
    }

    pub fn data_temp(&self) -> f64 {
        self.temperature
    }

    /// Inspection tags in element-attribute form.
    pub fn attributes(&self) -> [(&'static str, String); 3] {
        [
            ("data-month", self.data_month().to_string()),
            ("data-year", self.data_year().to_string()),
            ("data-temp", self.data_temp().to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub value: f64,
    /// Legend-group coordinates.
    pub rect: Rect,
    pub fill: Srgb<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub id: &'static str,
    /// Canvas coordinates of the legend group.
    pub origin: Pos2,
    pub swatches: Vec<Swatch>,
    pub axis: Axis,
}

// ---------------------------------------------------------------------------
// Scene – everything drawn on the canvas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub layout: Layout,
    pub base_temperature: f64,
    pub title: TextLabel,
    pub description: TextLabel,
    /// Canvas coordinates of the chart group.
    pub chart_origin: Pos2,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub cells: Vec<Cell>,
    pub legend: Legend,
}

impl Scene {
    /// The cell under `pos` (canvas coordinates), if any.
    pub fn cell_at(&self, pos: Pos2) -> Option<&Cell> {
        let local = pos - self.chart_origin.to_vec2();
        self.cells.iter().find(|c| c.rect.contains(local))
    }
}

// ---------------------------------------------------------------------------
// Renderer: dataset + layout → scene
// ---------------------------------------------------------------------------

pub fn build_scene(dataset: &Dataset, layout: Layout, config: &ChartConfig) -> Scene {
    let scales = ChartScales::new(dataset, &layout);
    let m = layout.margins;

    let title = TextLabel {
        id: "title",
        pos: pos2(layout.canvas_width * 0.5, m.top * 0.5),
        text: TITLE.to_string(),
    };
    let description = TextLabel {
        id: "description",
        pos: pos2(layout.canvas_width * 0.5, m.top * 0.75),
        text: format!("Monthly Variance from {}°C", dataset.base_temperature),
    };

    let scene = Scene {
        layout,
        base_temperature: dataset.base_temperature,
        title,
        description,
        chart_origin: pos2(m.left, m.top),
        x_axis: year_axis(&scales, &layout, config.year_tick_interval),
        y_axis: month_axis(&scales, &layout),
        cells: cells(dataset, &scales),
        legend: legend(dataset, &scales, &layout, config),
    };
    log::debug!(
        "Built scene: {} cells, {} legend swatches, chart {}x{}",
        scene.cells.len(),
        scene.legend.swatches.len(),
        layout.chart_width,
        layout.chart_height
    );
    scene
}

fn year_axis(scales: &ChartScales, layout: &Layout, interval: i32) -> Axis {
    let ticks = scales
        .years
        .domain()
        .iter()
        .filter(|y| y.rem_euclid(interval) == 0)
        .filter_map(|&y| {
            scales.years.center(y).map(|offset| Tick {
                offset,
                label: y.to_string(),
            })
        })
        .collect();
    Axis {
        id: Some("x-axis"),
        orient: AxisOrient::Bottom,
        origin: pos2(0.0, layout.chart_height),
        length: layout.chart_width,
        ticks,
        domain_line: true,
    }
}

fn month_axis(scales: &ChartScales, layout: &Layout) -> Axis {
    let ticks = scales
        .months
        .domain()
        .iter()
        .filter_map(|&m| {
            scales.months.center(m).map(|offset| Tick {
                offset,
                label: MONTH_NAMES[m].to_string(),
            })
        })
        .collect();
    Axis {
        id: Some("y-axis"),
        orient: AxisOrient::Left,
        origin: pos2(0.0, 0.0),
        length: layout.chart_height,
        ticks,
        domain_line: true,
    }
}

fn cells(dataset: &Dataset, scales: &ChartScales) -> Vec<Cell> {
    let size = vec2(scales.years.bandwidth(), scales.months.bandwidth());
    dataset
        .monthly_variance
        .iter()
        .filter_map(|rec| {
            let x = scales.years.position(rec.year);
            let y = scales.months.position(rec.month_index());
            let (Some(x), Some(y)) = (x, y) else {
                log::warn!("Skipping record outside the chart domain: {rec:?}");
                return None;
            };
            Some(Cell {
                rect: Rect::from_min_size(pos2(x, y), size),
                fill: scales.color.color(rec.variance),
                record: *rec,
                temperature: dataset.temperature_of(rec),
            })
        })
        .collect()
}

fn legend(dataset: &Dataset, scales: &ChartScales, layout: &Layout, config: &ChartConfig) -> Legend {
    let (min_var, max_var) = dataset.variance_extent();
    let first = min_var.floor() as i64;
    let last = max_var.ceil() as i64;
    let steps: Vec<i64> = (first..=last).collect();

    let strip_width = layout.chart_width.min(config.legend_max_width);
    let swatch_width = strip_width / steps.len() as f32;
    let height = config.legend_height;

    let swatches = steps
        .iter()
        .enumerate()
        .map(|(i, &v)| Swatch {
            value: v as f64,
            rect: Rect::from_min_size(pos2(i as f32 * swatch_width, 0.0), vec2(swatch_width, height)),
            fill: scales.color.color(v as f64),
        })
        .collect();
    let ticks = steps
        .iter()
        .enumerate()
        .map(|(i, v)| Tick {
            offset: (i as f32 + 0.5) * swatch_width,
            label: format!("{v}°"),
        })
        .collect();

    Legend {
        id: "legend",
        origin: pos2(layout.margins.left, layout.canvas_height - layout.margins.bottom * 0.5),
        swatches,
        axis: Axis {
            id: None,
            orient: AxisOrient::Bottom,
            origin: pos2(0.0, height),
            length: strip_width,
            ticks,
            domain_line: false,
        },
    }
}
