use riddle_engine::*;

/// Minimal one-puzzle game. Copy this template and build your game from here.
pub struct HelloRiddle;

impl HelloRiddle {
    pub fn new() -> Self {
        HelloRiddle
    }
}

impl Game for HelloRiddle {
    fn catalog(&self) -> Catalog {
        Catalog::new(vec![PuzzleRecord {
            level: 1,
            title: "Hello".to_string(),
            description: "Every program greets the same place. Which one?".to_string(),
            answer: "WORLD".to_string(),
        }])
        .expect("template catalog is valid")
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        log::info!("HelloRiddle: {} level(s) loaded", ctx.flow.catalog().len());
    }
}
