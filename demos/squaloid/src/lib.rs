use wasm_bindgen::prelude::*;

pub mod bodies;
pub mod game;
pub mod orbit;
pub mod picker;
pub mod scene;
pub mod stats;

use game::Squaloid;

orrery_web::export_simulation!(Squaloid, "squaloid", panel = "stats-display-area");
