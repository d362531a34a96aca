use riddle_engine::{
    commands_to_json, Catalog, EngineContext, FixedTimestep, Game, UiEvent, UiQueue,
    PROTOCOL_VERSION,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `cipher-terminal`) creates a `thread_local!`
/// GameRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    events: UiQueue,
    timestep: FixedTimestep,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let catalog = game.catalog();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let ctx = EngineContext::new(catalog, &config);

        Self {
            game,
            ctx,
            events: UiQueue::new(),
            timestep,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    ///
    /// Paints the initial screen state before the game's own init hook runs,
    /// so the first drain already carries a complete picture.
    pub fn init(&mut self) {
        self.ctx.present();
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Queue a user event for the next tick.
    pub fn push_event(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Run one frame: apply queued events once, then advance timers in
    /// fixed steps.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Events apply exactly once per frame, before any timer step.
        for event in self.events.drain() {
            self.ctx.apply(&event);
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.ctx.tick_flow(self.timestep.dt());
            self.game.update(&mut self.ctx);
        }
    }

    /// Drain buffered display commands as a JSON array for the host.
    pub fn drain_commands_json(&mut self) -> String {
        let commands = self.ctx.take_commands();
        commands_to_json(&commands)
    }

    /// Replace the running catalog from a JSON document.
    /// Returns `false` (and keeps the old catalog) if the document is
    /// invalid.
    pub fn load_catalog(&mut self, json: &str) -> bool {
        match Catalog::from_json(json) {
            Ok(catalog) => {
                self.ctx.replace_catalog(catalog);
                true
            }
            Err(err) => {
                log::error!("catalog rejected: {err}");
                false
            }
        }
    }

    // ---- State accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn screen_name(&self) -> &'static str {
        self.ctx.flow.screen().as_str()
    }

    pub fn level(&self) -> u32 {
        self.ctx.flow.level()
    }

    pub fn level_count(&self) -> u32 {
        self.ctx.flow.catalog().len() as u32
    }

    pub fn protocol_version(&self) -> u32 {
        PROTOCOL_VERSION
    }
}
