// View/pan state driven by drag gestures on the map canvas.
use std::rc::Rc;

use yew::Reducible;

pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 500.0;

/// Pointer input in surface-local coordinates (relative to the canvas top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewAction {
    DragStart { x: f64, y: f64 },
    DragEnd { x: f64, y: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Viewport size; fixed once created.
    pub width: f64,
    pub height: f64,
    /// Set on drag start, consumed on drag end. Never cancelled, so a release
    /// outside the canvas leaves it for the next release on the canvas.
    pub drag_anchor: Option<(f64, f64)>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(MAP_WIDTH, MAP_HEIGHT)
    }
}

impl ViewState {
    /// Centers map origin in the viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            offset_x: width / 2.0,
            offset_y: -(height / 2.0),
            width,
            height,
            drag_anchor: None,
        }
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    pub fn apply(&self, action: ViewAction) -> ViewState {
        let mut new = self.clone();
        match action {
            ViewAction::DragStart { x, y } => {
                new.drag_anchor = Some((x, y));
            }
            ViewAction::DragEnd { x, y } => {
                let Some((ax, ay)) = new.drag_anchor.take() else {
                    return new;
                };
                let dx = x - ax;
                let dy = y - ay;
                // pan step counts pixels inclusively, hence +1
                if dx > 0.0 {
                    new.offset_x += dx.abs() + 1.0;
                } else if dx < 0.0 {
                    new.offset_x -= dx.abs() + 1.0;
                }
                // Only upward drags move the view vertically.
                if dy < 0.0 {
                    new.offset_y += dy.abs() + 1.0;
                }
            }
        }
        new
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
