use riddle_engine::{Catalog, Game, GameConfig};

use crate::puzzles;

/// Terminal-styled cipher game: read the intercepted code, type the answer.
pub struct CipherTerminal;

impl CipherTerminal {
    pub fn new() -> Self {
        CipherTerminal
    }
}

impl Game for CipherTerminal {
    fn config(&self) -> GameConfig {
        GameConfig {
            success_feedback: "✓ ACCESS GRANTED. Loading next level...".to_string(),
            failure_feedback: "✗ ACCESS DENIED. Reattempt required...".to_string(),
            ..GameConfig::default()
        }
    }

    fn catalog(&self) -> Catalog {
        puzzles::catalog()
    }
}
