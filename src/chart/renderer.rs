//! Chart Renderer
//!
//! Owns the single drawing surface and the chart instance bound to it.
//! Every render tears the previous instance down before a new one is drawn,
//! so bars from an older series never overlap the current one.

use super::layout::{layout, BarGeometry, ChartLayout, ChartOptions, Rect, Rgba};
use crate::series::ChartSeries;

/// Element id of the canvas the chart is bound to
pub const CHART_ELEMENT_ID: &str = "dataChart";

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Something a chart can be drawn on
pub trait DrawingSurface {
    /// Identifier of the underlying element
    fn element_id(&self) -> &str;

    /// Current drawable size in pixels (width, height)
    fn size(&self) -> (f64, f64);

    /// Erase everything
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: &Rect, color: &Rgba);

    fn stroke_rect(&mut self, rect: &Rect, color: &Rgba, line_width: f64);

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &Rgba, line_width: f64);

    fn text(&mut self, text: &str, x: f64, y: f64, align: TextAlign, color: &Rgba);
}

/// A live bar chart instance
#[derive(Debug, Clone)]
pub struct BarChart {
    series: ChartSeries,
    options: ChartOptions,
    layout: ChartLayout,
}

impl BarChart {
    pub fn new(series: ChartSeries, options: ChartOptions, size: (f64, f64)) -> Self {
        let layout = layout(&series, &options, size.0, size.1);
        Self {
            series,
            options,
            layout,
        }
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Recompute geometry for a new surface size
    pub fn relayout(&mut self, size: (f64, f64)) {
        self.layout = layout(&self.series, &self.options, size.0, size.1);
    }

    /// Draw onto a surface. The surface is expected to be clear.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let l = &self.layout;
        let o = &self.options;

        // Grid lines and value labels
        for tick in &l.ticks {
            surface.line((l.plot.x, tick.y), (l.plot.right(), tick.y), &o.grid_color, 1.0);
            surface.text(&tick.text, l.plot.x - 8.0, tick.y + 4.0, TextAlign::Right, &o.axis_color);
        }

        // Axes
        surface.line((l.plot.x, l.plot.y), (l.plot.x, l.plot.bottom()), &o.axis_color, 1.0);
        let baseline = l.value_to_y(0.0_f64.clamp(l.y_min, l.y_max));
        surface.line((l.plot.x, baseline), (l.plot.right(), baseline), &o.axis_color, 1.0);

        for bar in &l.bars {
            self.draw_bar(surface, bar);
        }

        // Legend: swatch plus dataset label, centered above the plot
        let legend_y = l.plot.y / 2.0;
        let swatch = Rect::new(l.width / 2.0 - 60.0, legend_y - 6.0, 30.0, 12.0);
        surface.fill_rect(&swatch, &o.background);
        surface.stroke_rect(&swatch, &o.border, o.border_width);
        surface.text(
            &o.dataset_label,
            swatch.right() + 6.0,
            legend_y + 4.0,
            TextAlign::Left,
            &o.axis_color,
        );
    }

    fn draw_bar<S: DrawingSurface + ?Sized>(&self, surface: &mut S, bar: &BarGeometry) {
        let o = &self.options;
        surface.fill_rect(&bar.rect, &o.background);
        surface.stroke_rect(&bar.rect, &o.border, o.border_width);
        surface.text(
            &bar.label,
            bar.rect.center_x(),
            self.layout.plot.bottom() + 18.0,
            TextAlign::Center,
            &o.axis_color,
        );
    }
}

/// What a render call did to the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A new chart was drawn
    Drawn,
    /// The series was empty; the surface was left blank
    Cleared,
}

/// Binds chart instances to one drawing surface
pub struct ChartRenderer<S: DrawingSurface> {
    surface: S,
    options: ChartOptions,
    active: Option<BarChart>,
}

impl<S: DrawingSurface> ChartRenderer<S> {
    pub fn new(surface: S, options: ChartOptions) -> Self {
        Self {
            surface,
            options,
            active: None,
        }
    }

    /// Replace whatever is on the surface with a chart of `series`
    pub fn render(&mut self, series: &ChartSeries) -> RenderOutcome {
        self.destroy();

        if series.is_empty() {
            return RenderOutcome::Cleared;
        }

        let chart = BarChart::new(series.clone(), self.options.clone(), self.surface.size());
        chart.draw(&mut self.surface);
        tracing::debug!(
            surface = %self.surface.element_id(),
            bars = series.len(),
            "Chart drawn"
        );
        self.active = Some(chart);
        RenderOutcome::Drawn
    }

    /// Tear down the active chart, if any. Returns whether one existed.
    pub fn destroy(&mut self) -> bool {
        match self.active.take() {
            Some(_) => {
                self.surface.clear();
                tracing::debug!(surface = %self.surface.element_id(), "Previous chart destroyed");
                true
            }
            None => false,
        }
    }

    /// Redraw the active chart at the surface's current size
    pub fn resize(&mut self) -> bool {
        if !self.options.responsive {
            return false;
        }
        let size = self.surface.size();
        match self.active.as_mut() {
            Some(chart) => {
                chart.relayout(size);
                self.surface.clear();
                chart.draw(&mut self.surface);
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> Option<&BarChart> {
        self.active.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }
}
