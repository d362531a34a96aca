use crate::bridge::display::{DisplayCommand, DisplayList, DEFAULT_MAX_COMMANDS};
use crate::catalog::Catalog;
use crate::core::flow::GameFlow;
use crate::input::queue::UiEvent;
use crate::input::source::InputBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Seconds between a correct answer and the next level (default: 1.5).
    pub advance_delay: f32,
    /// Seconds before answer feedback is cleared again (default: 3.0).
    pub feedback_clear_delay: f32,
    /// Feedback line shown for a correct answer.
    pub success_feedback: String,
    /// Feedback line shown for a wrong answer.
    pub failure_feedback: String,
    /// Maximum number of buffered display commands per drain (default: 256).
    pub max_commands: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            advance_delay: 1.5,
            feedback_clear_delay: 3.0,
            success_feedback: "Correct! Loading next level...".to_string(),
            failure_feedback: "Incorrect. Try again.".to_string(),
            max_commands: DEFAULT_MAX_COMMANDS,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// The puzzle catalog to play through. Called once before init.
    fn catalog(&self) -> Catalog;

    /// Optional setup hook, called once after the initial screen is painted.
    fn init(&mut self, _ctx: &mut EngineContext) {}

    /// Optional per-step hook, called after the flow has ticked.
    fn update(&mut self, _ctx: &mut EngineContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
///
/// Bundles the progression flow with the display command buffer and the
/// engine-side mirror of the answer box, and keeps the two in sync: a
/// clear requested by the flow turns into a [`DisplayCommand::ClearInput`]
/// for the host.
pub struct EngineContext {
    pub flow: GameFlow,
    display: DisplayList,
    input: InputBuffer,
}

impl EngineContext {
    pub fn new(catalog: Catalog, config: &GameConfig) -> Self {
        Self {
            flow: GameFlow::new(catalog, config.clone()),
            display: DisplayList::with_capacity(config.max_commands),
            input: InputBuffer::new(),
        }
    }

    /// Paint the current screen state from scratch.
    pub fn present(&mut self) {
        self.flow.present(&mut self.display);
    }

    /// Apply one user event.
    ///
    /// Text edits only update the engine-side input mirror; everything else
    /// goes to the flow.
    pub fn apply(&mut self, event: &UiEvent) {
        if let UiEvent::InputChanged { text } = event {
            self.input.set_text(text);
            return;
        }
        self.flow
            .handle_event(event, &mut self.display, &mut self.input);
        self.sync_input();
    }

    /// Advance flow timers by one fixed step.
    pub fn tick_flow(&mut self, dt: f32) {
        self.flow.tick(dt, &mut self.display, &mut self.input);
        self.sync_input();
    }

    /// Swap in a new catalog and reset to the welcome screen.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.flow.replace_catalog(catalog, &mut self.display);
        self.input.set_text("");
    }

    /// Drain all buffered display commands, in emission order.
    pub fn take_commands(&mut self) -> Vec<DisplayCommand> {
        self.display.drain()
    }

    fn sync_input(&mut self) {
        if self.input.take_clear_request() {
            self.display.push(DisplayCommand::ClearInput);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Screen;
    use crate::catalog::PuzzleRecord;

    fn one_level_context() -> EngineContext {
        let catalog = Catalog::new(vec![PuzzleRecord {
            level: 1,
            title: "Only".to_string(),
            description: "The only puzzle".to_string(),
            answer: "DONE".to_string(),
        }])
        .unwrap();
        EngineContext::new(catalog, &GameConfig::default())
    }

    #[test]
    fn config_defaults_are_sane() {
        let config = GameConfig::default();
        assert!(config.fixed_dt > 0.0);
        assert!(config.advance_delay > 0.0);
        assert!(config.feedback_clear_delay >= config.advance_delay);
        assert!(!config.success_feedback.is_empty());
        assert!(!config.failure_feedback.is_empty());
    }

    #[test]
    fn input_edits_emit_no_commands() {
        let mut ctx = one_level_context();
        ctx.apply(&UiEvent::InputChanged {
            text: "typing...".to_string(),
        });
        assert!(ctx.take_commands().is_empty());
    }

    #[test]
    fn flow_clear_requests_become_clear_input_commands() {
        let mut ctx = one_level_context();
        ctx.present();
        ctx.apply(&UiEvent::StartClicked);
        let commands = ctx.take_commands();
        assert!(commands.contains(&DisplayCommand::ClearInput));
    }

    #[test]
    fn events_and_ticks_drive_a_full_run() {
        let mut ctx = one_level_context();
        let advance_delay = GameConfig::default().advance_delay;
        ctx.present();
        ctx.apply(&UiEvent::StartClicked);
        ctx.apply(&UiEvent::InputChanged {
            text: "done".to_string(),
        });
        ctx.apply(&UiEvent::SubmitClicked);
        assert!(!ctx.flow.is_complete());

        ctx.tick_flow(advance_delay);
        assert!(ctx.flow.is_complete());
        assert_eq!(ctx.flow.screen(), Screen::Success);
    }

    #[test]
    fn replace_catalog_drops_typed_text() {
        let mut ctx = one_level_context();
        ctx.apply(&UiEvent::StartClicked);
        ctx.apply(&UiEvent::InputChanged {
            text: "half an answer".to_string(),
        });

        let replacement = Catalog::new(vec![PuzzleRecord {
            level: 1,
            title: "Other".to_string(),
            description: "Another puzzle".to_string(),
            answer: "OTHER".to_string(),
        }])
        .unwrap();
        ctx.replace_catalog(replacement);

        assert_eq!(ctx.flow.screen(), Screen::Welcome);
        assert_eq!(ctx.input.text(), "");
        // The stale text must not win the new catalog's first puzzle.
        ctx.apply(&UiEvent::StartClicked);
        ctx.apply(&UiEvent::SubmitClicked);
        assert!(!ctx.flow.is_complete());
    }
}
