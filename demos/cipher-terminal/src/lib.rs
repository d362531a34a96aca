use wasm_bindgen::prelude::*;
use riddle_engine::*;

mod game;
mod puzzles;
use game::CipherTerminal;

riddle_web::export_game!(CipherTerminal, "cipher-terminal");
