//! Bar Chart
//!
//! Layout and drawing of the chart series. The browser UI supplies a canvas
//! backed [`DrawingSurface`]; everything else here is target independent.

mod layout;
mod renderer;

pub use layout::{layout, BarGeometry, ChartKind, ChartLayout, ChartOptions, Rect, Rgba, Tick};
pub use renderer::{
    BarChart, ChartRenderer, DrawingSurface, RenderOutcome, TextAlign, CHART_ELEMENT_ID,
};
