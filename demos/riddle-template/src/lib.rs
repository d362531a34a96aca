use wasm_bindgen::prelude::*;
use riddle_engine::*;

mod game;
use game::HelloRiddle;

riddle_web::export_game!(HelloRiddle, "riddle-template");
