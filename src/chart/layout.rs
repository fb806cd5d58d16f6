//! Bar Chart Layout
//!
//! Pure geometry for a vertical bar chart: plot area, value axis ticks and
//! one rectangle per bar. Pixel coordinates grow right and down.

use serde::Serialize;

use crate::series::ChartSeries;

/// Fraction of each category band a bar occupies (0.8 category * 0.9 bar)
const BAR_FILL: f64 = 0.72;

/// Target number of value-axis intervals
const TARGET_TICKS: usize = 5;

/// Upper bound on value-axis intervals
const MAX_TICKS: usize = TARGET_TICKS * 4;

const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 36.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// RGBA color with alpha in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Kinds of chart the renderer can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

/// Presentation options for the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub kind: ChartKind,
    /// Legend text for the single dataset
    pub dataset_label: String,
    pub background: Rgba,
    pub border: Rgba,
    pub border_width: f64,
    /// Redraw at the surface's size when it changes
    pub responsive: bool,
    /// Force the value axis to include zero
    pub begin_at_zero: bool,
    /// Axis, grid and label color
    pub axis_color: Rgba,
    pub grid_color: Rgba,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            kind: ChartKind::Bar,
            dataset_label: "Data from CSV".to_string(),
            background: Rgba::new(75, 192, 192, 0.2),
            border: Rgba::new(75, 192, 192, 1.0),
            border_width: 1.0,
            responsive: true,
            begin_at_zero: true,
            axis_color: Rgba::new(102, 102, 102, 1.0),
            grid_color: Rgba::new(0, 0, 0, 0.1),
        }
    }
}

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// One drawn bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub rect: Rect,
}

/// One value-axis tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
    pub text: String,
}

/// Computed layout for a series at a given size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot: Rect,
    pub y_min: f64,
    pub y_max: f64,
    pub ticks: Vec<Tick>,
    pub bars: Vec<BarGeometry>,
}

impl ChartLayout {
    /// Pixel row for a value
    pub fn value_to_y(&self, value: f64) -> f64 {
        scale(value, self.y_min, self.y_max, &self.plot)
    }
}

// Differences are taken on halved values so they stay finite up to f64::MAX
fn scale(value: f64, y_min: f64, y_max: f64, plot: &Rect) -> f64 {
    plot.y + plot.height * (y_max / 2.0 - value / 2.0) / (y_max / 2.0 - y_min / 2.0)
}

/// Round a raw step up to 1, 2 or 5 times a power of ten
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    // Avoid "-0"
    let value = if value.abs() < step / 2.0 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

/// Value axis bounds and step for a series
fn value_axis(series: &ChartSeries, begin_at_zero: bool) -> (f64, f64, f64) {
    let (mut lo, mut hi) = series.value_range().unwrap_or((0.0, 1.0));
    if begin_at_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    if hi == lo {
        hi = lo + 1.0;
    }

    // Split the span so opposite-sign extremes cannot overflow
    let step = nice_step(hi / TARGET_TICKS as f64 - lo / TARGET_TICKS as f64);
    let y_min = ((lo / step).floor() * step).max(f64::MIN);
    let y_max = ((hi / step).ceil() * step).min(f64::MAX);
    (y_min, y_max, step)
}

/// Lay out a bar chart for `series` on a `width` x `height` surface
pub fn layout(series: &ChartSeries, options: &ChartOptions, width: f64, height: f64) -> ChartLayout {
    let plot = Rect::new(
        MARGIN_LEFT,
        MARGIN_TOP,
        (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
        (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
    );

    let (y_min, y_max, step) = value_axis(series, options.begin_at_zero);

    let tick_count = ((y_max / step - y_min / step).round() as usize).min(MAX_TICKS);
    let ticks = (0..=tick_count)
        .map(|i| {
            let value = (y_min + step * i as f64).min(y_max);
            Tick {
                value,
                y: scale(value, y_min, y_max, &plot),
                text: format_tick(value, step),
            }
        })
        .collect();

    let baseline = scale(0.0_f64.clamp(y_min, y_max), y_min, y_max, &plot);
    let band = if series.is_empty() {
        0.0
    } else {
        plot.width / series.len() as f64
    };
    let bar_width = band * BAR_FILL;

    let bars = series
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let top = scale(value, y_min, y_max, &plot);
            let x = plot.x + band * i as f64 + (band - bar_width) / 2.0;
            BarGeometry {
                label: label.to_string(),
                value,
                rect: Rect::new(x, top.min(baseline), bar_width, (baseline - top).abs()),
            }
        })
        .collect();

    ChartLayout {
        width,
        height,
        plot,
        y_min,
        y_max,
        ticks,
        bars,
    }
}
