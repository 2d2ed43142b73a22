pub mod app;
pub mod legend;
pub mod legend_panel;
pub mod star_map;
