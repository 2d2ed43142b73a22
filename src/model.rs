//! Core data models for the star map.
//! Systems are loaded once from the bundled dataset and never mutated.

use serde::{Deserialize, Serialize};

use crate::util::clog;

/// Dataset compiled into the binary; parsed once at startup.
const BUNDLED_SYSTEMS: &str = include_str!("../assets/systems.json");

/// Major capitals that get a name label on the map.
pub const CAPITALS: [&str; 6] = ["Terra", "Luthien", "New Avalon", "Tharkad", "Sian", "Atreus"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub name: String,
    /// Map coordinates; `y` grows towards the top of the screen.
    pub x: f64,
    pub y: f64,
    /// Faction code, e.g. `DC` or `FWL-MOM`. Only the prefix matters for display.
    pub faction: String,
}

impl System {
    pub fn is_capital(&self) -> bool {
        CAPITALS.contains(&self.name.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactionColor {
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
    White,
}

impl FactionColor {
    /// Picks a color from the faction code's prefix; the first match wins.
    pub fn for_faction(faction: &str) -> Self {
        if faction.starts_with("DC") {
            FactionColor::Red
        } else if faction.starts_with("FS") {
            FactionColor::Yellow
        } else if faction.starts_with("LC") {
            FactionColor::Blue
        } else if faction.starts_with("CC") {
            FactionColor::Green
        } else if faction.starts_with("FWL") {
            FactionColor::Purple
        } else {
            FactionColor::White
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            FactionColor::Red => "red",
            FactionColor::Yellow => "yellow",
            FactionColor::Blue => "blue",
            FactionColor::Green => "green",
            FactionColor::Purple => "purple",
            FactionColor::White => "white",
        }
    }
}

/// Parses a JSON array of systems. Entries that don't deserialize (missing
/// faction, non-numeric coordinates, ...) are logged and skipped.
pub fn load_systems(raw: &str) -> Result<Vec<System>, serde_json::Error> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let total = entries.len();
    let systems: Vec<System> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<System>(entry) {
            Ok(s) => Some(s),
            Err(e) => {
                clog(&format!("skipping system entry {}: {}", i, e));
                None
            }
        })
        .collect();
    clog(&format!("loaded {}/{} systems", systems.len(), total));
    Ok(systems)
}

pub fn bundled_systems() -> Vec<System> {
    match load_systems(BUNDLED_SYSTEMS) {
        Ok(systems) => systems,
        Err(e) => {
            clog(&format!("bundled system list is malformed: {}", e));
            Vec::new()
        }
    }
}
