use super::legend::LegendRow;
use crate::model::FactionColor;
use yew::prelude::*;

/// Faction prefixes in the order the renderer matches them.
pub const LEGEND_ENTRIES: [(&str, &str); 6] = [
    ("DC", "Draconis Combine"),
    ("FS", "Federated Suns"),
    ("LC", "Lyran Commonwealth"),
    ("CC", "Capellan Confederation"),
    ("FWL", "Free Worlds League"),
    ("", "Other / Independent"),
];

#[function_component]
pub fn LegendPanel() -> Html {
    html! {<div style="margin-top:8px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; width:220px; color:#c9d1d9; font:12px sans-serif;">
        <div style="font-weight:600; margin-bottom:4px;">{"Factions"}</div>
        { for LEGEND_ENTRIES.iter().map(|(prefix, label)| html!{
            <LegendRow color={FactionColor::for_faction(prefix).css()} label={*label} />
        }) }
    </div>}
}
