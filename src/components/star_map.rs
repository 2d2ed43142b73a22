use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::model::System;
use crate::render::{CanvasSurface, render};
use crate::state::{MAP_HEIGHT, MAP_WIDTH, ViewAction, ViewState};
use crate::util::{clog, client_to_local};

#[derive(Properties, PartialEq, Clone)]
pub struct StarMapProps {
    pub systems: Rc<Vec<System>>,
}

/// Surface-local pointer position, using the canvas rect at event time.
fn pointer_on_canvas(canvas_ref: &NodeRef, e: &MouseEvent) -> Option<(f64, f64)> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let rect = canvas.get_bounding_client_rect();
    Some(client_to_local(
        e.client_x() as f64,
        e.client_y() as f64,
        rect.left(),
        rect.top(),
    ))
}

#[function_component(StarMap)]
pub fn star_map(props: &StarMapProps) -> Html {
    let canvas_ref = use_node_ref();
    let view = use_reducer(ViewState::default);

    // Redraw whenever the pan offset changes (and once on mount)
    {
        let canvas_ref = canvas_ref.clone();
        let view = view.clone();
        let systems = props.systems.clone();
        use_effect_with((view.offset(), systems.clone()), move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let ctx = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
                match ctx {
                    Some(ctx) => {
                        let mut surface = CanvasSurface::new(ctx);
                        let stats = render(&view, &systems, &mut surface);
                        clog(&format!(
                            "redraw offset=({}, {}) drawn={} labeled={}",
                            view.offset_x, view.offset_y, stats.drawn, stats.labeled
                        ));
                    }
                    None => clog("no 2d context on map canvas"),
                }
            }
            || ()
        });
    }

    let onmousedown = {
        let canvas_ref = canvas_ref.clone();
        let view = view.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((x, y)) = pointer_on_canvas(&canvas_ref, &e) {
                view.dispatch(ViewAction::DragStart { x, y });
            }
        })
    };
    let onmouseup = {
        let canvas_ref = canvas_ref.clone();
        let view = view.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((x, y)) = pointer_on_canvas(&canvas_ref, &e) {
                view.dispatch(ViewAction::DragEnd { x, y });
            }
        })
    };

    html! {
        <canvas
            ref={canvas_ref}
            width={MAP_WIDTH.to_string()}
            height={MAP_HEIGHT.to_string()}
            style="background:#000; display:block; cursor:grab;"
            {onmousedown}
            {onmouseup}
        />
    }
}
