use super::{legend_panel::LegendPanel, star_map::StarMap};
use crate::model::bundled_systems;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Dataset is parsed once and shared read-only with the map
    let systems = use_memo((), |_| bundled_systems());

    html! {
        <div id="root" style="padding:12px;">
            <StarMap {systems} />
            <LegendPanel />
        </div>
    }
}
