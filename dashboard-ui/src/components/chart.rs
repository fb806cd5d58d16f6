//! Chart Component
//!
//! Bar chart drawn with HTML5 Canvas through the core [`ChartRenderer`].

use csv_dashboard::chart::{Rect, Rgba, TextAlign};
use csv_dashboard::{ChartOptions, ChartRenderer, DrawingSurface, CHART_ELEMENT_ID};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::GlobalState;

const LABEL_FONT: &str = "12px sans-serif";

/// Canvas-backed drawing surface
pub struct CanvasSurface {
    id: String,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas, or `None` if it has no 2D context
    pub fn attach(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
            _ => return None,
        };

        Some(Self {
            id: canvas.id(),
            canvas,
            ctx,
        })
    }

    /// Match the backing store width to the displayed width
    fn fit_to_container(&self) {
        let width = self.canvas.client_width();
        if width > 0 && width as u32 != self.canvas.width() {
            self.canvas.set_width(width as u32);
        }
    }
}

impl DrawingSurface for CanvasSurface {
    fn element_id(&self) -> &str {
        &self.id
    }

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, rect: &Rect, color: &Rgba) {
        self.ctx.set_fill_style(&color.css().into());
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_rect(&mut self, rect: &Rect, color: &Rgba, line_width: f64) {
        self.ctx.set_stroke_style(&color.css().into());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &Rgba, line_width: f64) {
        self.ctx.set_stroke_style(&color.css().into());
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }

    fn text(&mut self, text: &str, x: f64, y: f64, align: TextAlign, color: &Rgba) {
        self.ctx.set_fill_style(&color.css().into());
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        let _ = self.ctx.fill_text(text, x, y);
    }
}

/// Bar chart of the current series
#[component]
pub fn Chart() -> impl IntoView {
    let dashboard = use_context::<GlobalState>()
        .expect("GlobalState not found")
        .dashboard;
    let canvas_ref = create_node_ref::<html::Canvas>();
    let renderer = store_value(None::<ChartRenderer<CanvasSurface>>);

    let series = create_memo(move |_| dashboard.with(|d| d.series().clone()));

    // Redraw whenever the series changes
    create_effect(move |_| {
        let series = series.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        renderer.update_value(|slot| {
            if slot.is_none() {
                *slot = CanvasSurface::attach((*canvas).clone())
                    .map(|surface| ChartRenderer::new(surface, ChartOptions::default()));
            }
            if let Some(renderer) = slot.as_mut() {
                renderer.surface().fit_to_container();
                renderer.render(&series);
            }
        });
    });

    let resize = window_event_listener(ev::resize, move |_| {
        renderer.update_value(|slot| {
            if let Some(renderer) = slot.as_mut() {
                renderer.surface().fit_to_container();
                renderer.resize();
            }
        });
    });
    on_cleanup(move || resize.remove());

    view! {
        <div>
            <h2>"Chart"</h2>
            <canvas
                id=CHART_ELEMENT_ID
                node_ref=canvas_ref
                width="800"
                height="400"
                style="display: block; width: 100%; height: 400px;"
            />
        </div>
    }
}
