pub mod view;

pub use view::{MAP_HEIGHT, MAP_WIDTH, ViewAction, ViewState};
