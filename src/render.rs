//! Stateless map renderer.
//!
//! `render` is a pure pass over the view and the dataset; all drawing goes
//! through a [`Surface`], so the canvas can be swapped for a recorder in tests.

use web_sys::CanvasRenderingContext2d;

use crate::model::{FactionColor, System};
use crate::state::ViewState;

/// Label position relative to the floored screen point.
pub const LABEL_OFFSET: (f64, f64) = (5.0, 6.0);
pub const MARKER_OFFSET: (f64, f64) = (1.0, 1.0);
pub const MARKER_SIZE: f64 = 1.0;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn set_fill_color(&mut self, color: FactionColor);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Canvas 2D context as a drawing surface.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_fill_color(&mut self, color: FactionColor) {
        self.ctx.set_fill_style_str(color.css());
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ctx.fill_text(text, x, y).ok();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    pub labeled: usize,
}

/// Screen position of `system`, or `None` when it falls outside the viewport.
/// Screen y grows downward, map y grows upward, hence the flip.
pub fn screen_position(view: &ViewState, system: &System) -> Option<(f64, f64)> {
    let sx = system.x + view.offset_x;
    let sy = (system.y + view.offset_y) * -1.0;
    let visible = sx > 0.0 && sx < view.width && sy > 0.0 && sy < view.height;
    visible.then_some((sx, sy))
}

pub fn render<S: Surface>(view: &ViewState, systems: &[System], surface: &mut S) -> RenderStats {
    surface.clear(view.width, view.height);
    let mut stats = RenderStats::default();
    for system in systems {
        let Some((sx, sy)) = screen_position(view, system) else {
            continue;
        };
        let (px, py) = (sx.floor(), sy.floor());
        if system.is_capital() {
            surface.set_fill_color(FactionColor::White);
            surface.fill_text(&system.name, px + LABEL_OFFSET.0, py + LABEL_OFFSET.1);
            stats.labeled += 1;
        }
        surface.set_fill_color(FactionColor::for_faction(&system.faction));
        surface.fill_rect(px + MARKER_OFFSET.0, py + MARKER_OFFSET.1, MARKER_SIZE, MARKER_SIZE);
        stats.drawn += 1;
    }
    stats
}
