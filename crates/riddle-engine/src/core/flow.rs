use crate::api::game::GameConfig;
use crate::api::types::{FeedbackStyle, Screen, TextField};
use crate::bridge::display::DisplaySink;
use crate::catalog::Catalog;
use crate::core::tasks::{FlowTask, TaskQueue};
use crate::input::queue::{UiEvent, KEY_ENTER};
use crate::input::source::InputSource;

/// Screen-by-screen progression through a puzzle catalog.
///
/// The flow is a plain state machine: it consumes [`UiEvent`]s, reads the
/// typed answer through an [`InputSource`], and emits every visible effect
/// through a [`DisplaySink`]. Nothing in here knows what a DOM is, so the
/// whole progression can be driven and observed in unit tests.
///
/// Delayed transitions (advancing after a correct answer, clearing stale
/// feedback) run through a [`TaskQueue`] advanced from [`GameFlow::tick`],
/// so they can be cancelled when the player acts before a timer fires.
#[derive(Debug)]
pub struct GameFlow {
    catalog: Catalog,
    config: GameConfig,
    screen: Screen,
    level_index: usize,
    tasks: TaskQueue,
}

impl GameFlow {
    /// Create a flow sitting on the welcome screen at the first level.
    pub fn new(catalog: Catalog, config: GameConfig) -> Self {
        Self {
            catalog,
            config,
            screen: Screen::Welcome,
            level_index: 0,
            tasks: TaskQueue::new(),
        }
    }

    /// The screen currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Zero-based index of the current puzzle. Equals the catalog length
    /// once every level has been solved.
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// One-based number of the level being played, clamped to the last
    /// level on the success screen.
    pub fn level(&self) -> u32 {
        self.level_index.min(self.catalog.len() - 1) as u32 + 1
    }

    /// Whether every puzzle has been solved.
    pub fn is_complete(&self) -> bool {
        self.screen == Screen::Success
    }

    /// The puzzle catalog driving this flow.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Emit the commands that paint the current screen state from scratch.
    /// The runner calls this once after construction so the host starts from
    /// a known visibility state.
    pub fn present(&self, display: &mut dyn DisplaySink) {
        for screen in [Screen::Welcome, Screen::Playing, Screen::Success] {
            if screen == self.screen {
                display.show_screen(screen);
            } else {
                display.hide_screen(screen);
            }
        }
    }

    /// Swap in a new catalog and reset to the welcome screen.
    /// Pending timers are dropped; progress does not carry over.
    pub fn replace_catalog(&mut self, catalog: Catalog, display: &mut dyn DisplaySink) {
        self.tasks.clear();
        self.catalog = catalog;
        self.level_index = 0;
        self.screen = Screen::Welcome;
        self.present(display);
        log::info!("catalog replaced: {} levels", self.catalog.len());
    }

    /// Apply one user event. Events that do not belong to the current screen
    /// are dropped.
    pub fn handle_event(
        &mut self,
        event: &UiEvent,
        display: &mut dyn DisplaySink,
        input: &mut dyn InputSource,
    ) {
        match (event, self.screen) {
            (UiEvent::StartClicked, Screen::Welcome) => self.start(display, input),
            (UiEvent::SubmitClicked, Screen::Playing) => self.submit(display, input),
            (UiEvent::KeyPressed { key_code }, Screen::Playing) if *key_code == KEY_ENTER => {
                self.submit(display, input)
            }
            (UiEvent::RestartClicked, Screen::Success) => self.restart(display),
            (UiEvent::KeyPressed { .. }, _) | (UiEvent::InputChanged { .. }, _) => {}
            (event, screen) => {
                log::debug!("{event:?} ignored on {screen:?} screen");
            }
        }
    }

    /// Advance pending timers by `dt` seconds and run whatever fires.
    pub fn tick(&mut self, dt: f32, display: &mut dyn DisplaySink, input: &mut dyn InputSource) {
        for task in self.tasks.tick(dt) {
            match task {
                FlowTask::AdvanceLevel => self.advance(display, input),
                FlowTask::ClearFeedback => {
                    display.set_text(TextField::Feedback, "");
                    display.set_feedback_style(FeedbackStyle::Neutral);
                }
            }
        }
    }

    fn start(&mut self, display: &mut dyn DisplaySink, input: &mut dyn InputSource) {
        display.hide_screen(Screen::Welcome);
        display.show_screen(Screen::Playing);
        self.screen = Screen::Playing;
        self.load_puzzle(display, input);
    }

    fn submit(&mut self, display: &mut dyn DisplaySink, input: &mut dyn InputSource) {
        // A correct answer is already on its way to the next level; a second
        // submission before the timer fires must not advance twice.
        if self.tasks.contains_kind(FlowTask::AdvanceLevel) {
            log::debug!("submission ignored: level advance already pending");
            return;
        }

        let answer = input.read_input();
        if self.catalog.record(self.level_index).matches(&answer) {
            let message = self.config.success_feedback.clone();
            self.show_feedback(&message, FeedbackStyle::Success, display);
            self.tasks
                .schedule(FlowTask::AdvanceLevel, self.config.advance_delay);
        } else {
            let message = self.config.failure_feedback.clone();
            self.show_feedback(&message, FeedbackStyle::Error, display);
        }
    }

    fn restart(&mut self, display: &mut dyn DisplaySink) {
        self.tasks.clear();
        self.level_index = 0;
        display.hide_screen(Screen::Success);
        display.show_screen(Screen::Welcome);
        self.screen = Screen::Welcome;
    }

    fn advance(&mut self, display: &mut dyn DisplaySink, input: &mut dyn InputSource) {
        // The next puzzle (or the success screen) resets feedback itself.
        self.tasks.cancel_kind(FlowTask::ClearFeedback);
        self.level_index += 1;
        if self.level_index < self.catalog.len() {
            self.load_puzzle(display, input);
        } else {
            self.complete(display);
        }
    }

    fn complete(&mut self, display: &mut dyn DisplaySink) {
        display.hide_screen(Screen::Playing);
        display.show_screen(Screen::Success);
        self.screen = Screen::Success;
        log::info!("catalog complete: {} levels solved", self.catalog.len());
    }

    fn load_puzzle(&mut self, display: &mut dyn DisplaySink, input: &mut dyn InputSource) {
        let record = self.catalog.record(self.level_index);
        display.set_text(
            TextField::Title,
            &format!("Puzzle #{}: {}", record.level, record.title),
        );
        display.set_text(TextField::Description, &record.description);
        display.set_text(
            TextField::Progress,
            &format!("Level {} of {}", record.level, self.catalog.len()),
        );
        display.set_text(TextField::Feedback, "");
        display.set_feedback_style(FeedbackStyle::Neutral);
        input.clear_input();
    }

    fn show_feedback(&mut self, text: &str, style: FeedbackStyle, display: &mut dyn DisplaySink) {
        display.set_text(TextField::Feedback, text);
        display.set_feedback_style(style);
        // Only the newest feedback owns the clear timer.
        self.tasks.cancel_kind(FlowTask::ClearFeedback);
        self.tasks
            .schedule(FlowTask::ClearFeedback, self.config.feedback_clear_delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::display::{DisplayCommand, DisplayList};
    use crate::catalog::PuzzleRecord;
    use crate::input::source::InputBuffer;

    fn record(level: u32, title: &str, answer: &str) -> PuzzleRecord {
        PuzzleRecord {
            level,
            title: title.to_string(),
            description: format!("Description {level}"),
            answer: answer.to_string(),
        }
    }

    fn two_level_flow() -> (GameFlow, DisplayList, InputBuffer) {
        let catalog = Catalog::new(vec![
            record(1, "The Encrypted Message", "HELLO WORLD"),
            record(2, "The Binary Code", "HI"),
        ])
        .unwrap();
        (
            GameFlow::new(catalog, GameConfig::default()),
            DisplayList::new(),
            InputBuffer::new(),
        )
    }

    fn text_of(commands: &[DisplayCommand], field: TextField) -> Option<String> {
        commands.iter().rev().find_map(|command| match command {
            DisplayCommand::SetText { field: f, value } if *f == field => Some(value.clone()),
            _ => None,
        })
    }

    fn start_playing(flow: &mut GameFlow, display: &mut DisplayList, input: &mut InputBuffer) {
        flow.handle_event(&UiEvent::StartClicked, display, input);
        display.drain();
    }

    fn submit_answer(
        flow: &mut GameFlow,
        display: &mut DisplayList,
        input: &mut InputBuffer,
        answer: &str,
    ) {
        input.set_text(answer);
        flow.handle_event(&UiEvent::SubmitClicked, display, input);
    }

    #[test]
    fn presents_welcome_screen_at_boot() {
        let (flow, mut display, _input) = two_level_flow();
        flow.present(&mut display);

        let commands = display.drain();
        assert!(commands.contains(&DisplayCommand::ShowScreen {
            screen: Screen::Welcome
        }));
        assert!(commands.contains(&DisplayCommand::HideScreen {
            screen: Screen::Playing
        }));
        assert!(commands.contains(&DisplayCommand::HideScreen {
            screen: Screen::Success
        }));
        assert_eq!(flow.screen(), Screen::Welcome);
    }

    #[test]
    fn start_shows_the_first_puzzle() {
        let (mut flow, mut display, mut input) = two_level_flow();
        input.set_text("leftover");
        flow.handle_event(&UiEvent::StartClicked, &mut display, &mut input);

        assert_eq!(flow.screen(), Screen::Playing);
        assert_eq!(flow.level(), 1);

        let commands = display.drain();
        assert!(commands.contains(&DisplayCommand::HideScreen {
            screen: Screen::Welcome
        }));
        assert!(commands.contains(&DisplayCommand::ShowScreen {
            screen: Screen::Playing
        }));
        assert_eq!(
            text_of(&commands, TextField::Title).as_deref(),
            Some("Puzzle #1: The Encrypted Message")
        );
        assert_eq!(
            text_of(&commands, TextField::Progress).as_deref(),
            Some("Level 1 of 2")
        );
        assert_eq!(text_of(&commands, TextField::Feedback).as_deref(), Some(""));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn correct_answer_advances_after_the_delay() {
        let (mut flow, mut display, mut input) = two_level_flow();
        let delay = flow.config.advance_delay;
        start_playing(&mut flow, &mut display, &mut input);

        submit_answer(&mut flow, &mut display, &mut input, "HELLO WORLD");
        let commands = display.drain();
        assert_eq!(
            text_of(&commands, TextField::Feedback),
            Some(GameConfig::default().success_feedback)
        );
        assert!(commands.contains(&DisplayCommand::SetFeedbackStyle {
            style: FeedbackStyle::Success
        }));
        // Not yet: the advance is scheduled, not immediate.
        assert_eq!(flow.level(), 1);

        flow.tick(delay, &mut display, &mut input);
        assert_eq!(flow.level(), 2);
        let commands = display.drain();
        assert_eq!(
            text_of(&commands, TextField::Title).as_deref(),
            Some("Puzzle #2: The Binary Code")
        );
        assert_eq!(
            text_of(&commands, TextField::Progress).as_deref(),
            Some("Level 2 of 2")
        );
        assert_eq!(input.text(), "");
    }

    #[test]
    fn answer_matching_ignores_case_and_padding() {
        let (mut flow, mut display, mut input) = two_level_flow();
        let delay = flow.config.advance_delay;
        start_playing(&mut flow, &mut display, &mut input);

        submit_answer(&mut flow, &mut display, &mut input, "  hello world  ");
        flow.tick(delay, &mut display, &mut input);
        assert_eq!(flow.level(), 2);
    }

    #[test]
    fn wrong_answer_stays_on_the_level() {
        let (mut flow, mut display, mut input) = two_level_flow();
        start_playing(&mut flow, &mut display, &mut input);

        submit_answer(&mut flow, &mut display, &mut input, "GOODBYE");
        let commands = display.drain();
        assert_eq!(
            text_of(&commands, TextField::Feedback),
            Some(GameConfig::default().failure_feedback)
        );
        assert!(commands.contains(&DisplayCommand::SetFeedbackStyle {
            style: FeedbackStyle::Error
        }));
        assert_eq!(flow.level(), 1);
        // The typed answer stays in the box for editing.
        assert_eq!(input.text(), "GOODBYE");

        // Retrying wrong answers never moves the level.
        for _ in 0..3 {
            flow.handle_event(&UiEvent::SubmitClicked, &mut display, &mut input);
        }
        assert_eq!(flow.level(), 1);
        assert_eq!(flow.screen(), Screen::Playing);
    }

    #[test]
    fn empty_submission_counts_as_wrong() {
        let (mut flow, mut display, mut input) = two_level_flow();
        start_playing(&mut flow, &mut display, &mut input);

        submit_answer(&mut flow, &mut display, &mut input, "   ");
        let commands = display.drain();
        assert!(commands.contains(&DisplayCommand::SetFeedbackStyle {
            style: FeedbackStyle::Error
        }));
        assert_eq!(flow.level(), 1);
    }

    #[test]
    fn resubmission_during_pending_advance_is_ignored() {
        let (mut flow, mut display, mut input) = two_level_flow();
        let delay = flow.config.advance_delay;
        start_playing(&mut flow, &mut display, &mut input);

        submit_answer(&mut flow, &mut display, &mut input, "HELLO WORLD");
        display.drain();

        // Clicking again (or pressing enter) while the advance timer runs
        // must not schedule a second advance or emit fresh feedback.
        flow.handle_event(&UiEvent::SubmitClicked, &mut display, &mut input);
        assert!(display.is_empty());

        flow.tick(delay, &mut display, &mut input);
        assert_eq!(flow.level(), 2);
        display.drain();

        // A long stall later still only advances the one step.
        flow.tick(delay * 4.0, &mut display, &mut input);
        assert_eq!(flow.level(), 2);
        assert_eq!(flow.screen(), Screen::Playing);
    }

    #[test]
    fn solving_the_last_level_reaches_success() {
        let (mut flow, mut display, mut input) = two_level_flow();
        let delay = flow.config.advance_delay;
        start_playing(&mut flow, &mut display, &mut input);

        submit_answer(&mut flow, &mut display, &mut input, "HELLO WORLD");
        flow.tick(delay, &mut display, &mut input);
        display.drain();

        submit_answer(&mut flow, &mut display, &mut input, "hi");
        flow.tick(delay, &mut display, &mut input);

        assert!(flow.is_complete());
        assert_eq!(flow.screen(), Screen::Success);
        let commands = display.drain();
        assert!(commands.contains(&DisplayCommand::HideScreen {
            screen: Screen::Playing
        }));
        assert!(commands.contains(&DisplayCommand::ShowScreen {
            screen: Screen::Success
        }));
        // No timers left over once the run is complete.
        assert!(flow.tasks.is_empty());
    }

    #[test]
    fn restart_returns_to_the_welcome_screen() {
        let (mut flow, mut display, mut input) = two_level_flow();
        let delay = flow.config.advance_delay;
        start_playing(&mut flow, &mut display, &mut input);
        submit_answer(&mut flow, &mut display, &mut input, "HELLO WORLD");
        flow.tick(delay, &mut display, &mut input);
        submit_answer(&mut flow, &mut display, &mut input, "HI");
        flow.tick(delay, &mut display, &mut input);
        display.drain();
        assert!(flow.is_complete());

        flow.handle_event(&UiEvent::RestartClicked, &mut display, &mut input);
        assert_eq!(flow.screen(), Screen::Welcome);
        assert_eq!(flow.level_index(), 0);

        let commands = display.drain();
        assert!(commands.contains(&DisplayCommand::HideScreen {
            screen: Screen::Success
        }));
        assert!(commands.contains(&DisplayCommand::ShowScreen {
            screen: Screen::Welcome
        }));

        // Starting again plays the catalog from the top.
        flow.handle_event(&UiEvent::StartClicked, &mut display, &mut input);
        assert_eq!(flow.screen(), Screen::Playing);
        let commands = display.drain();
        assert_eq!(
            text_of(&commands, TextField::Progress).as_deref(),
            Some("Level 1 of 2")
        );
        assert_eq!(input.text(), "");
    }

    #[test]
    fn enter_key_submits_while_playing() {
        let (mut flow, mut display, mut input) = two_level_flow();
        let delay = flow.config.advance_delay;
        start_playing(&mut flow, &mut display, &mut input);

        input.set_text("HELLO WORLD");
        flow.handle_event(
            &UiEvent::KeyPressed {
                key_code: KEY_ENTER,
            },
            &mut display,
            &mut input,
        );
        flow.tick(delay, &mut display, &mut input);
        assert_eq!(flow.level(), 2);
    }

    #[test]
    fn other_keys_do_nothing() {
        let (mut flow, mut display, mut input) = two_level_flow();
        start_playing(&mut flow, &mut display, &mut input);

        input.set_text("HELLO WORLD");
        flow.handle_event(&UiEvent::KeyPressed { key_code: 65 }, &mut display, &mut input);
        assert!(display.is_empty());
        assert_eq!(flow.level(), 1);
    }

    #[test]
    fn events_on_the_wrong_screen_are_dropped() {
        let (mut flow, mut display, mut input) = two_level_flow();

        // Welcome screen: submit and restart mean nothing.
        flow.handle_event(&UiEvent::SubmitClicked, &mut display, &mut input);
        flow.handle_event(&UiEvent::RestartClicked, &mut display, &mut input);
        assert!(display.is_empty());
        assert_eq!(flow.screen(), Screen::Welcome);

        // Playing screen: a second start click must not reload the puzzle.
        flow.handle_event(&UiEvent::StartClicked, &mut display, &mut input);
        display.drain();
        flow.handle_event(&UiEvent::StartClicked, &mut display, &mut input);
        assert!(display.is_empty());
        assert_eq!(flow.screen(), Screen::Playing);
    }

    #[test]
    fn feedback_clears_after_its_delay() {
        let (mut flow, mut display, mut input) = two_level_flow();
        let clear_delay = flow.config.feedback_clear_delay;
        start_playing(&mut flow, &mut display, &mut input);

        submit_answer(&mut flow, &mut display, &mut input, "WRONG");
        display.drain();

        flow.tick(clear_delay / 2.0, &mut display, &mut input);
        assert!(display.is_empty());

        flow.tick(clear_delay / 2.0, &mut display, &mut input);
        let commands = display.drain();
        assert_eq!(text_of(&commands, TextField::Feedback).as_deref(), Some(""));
        assert!(commands.contains(&DisplayCommand::SetFeedbackStyle {
            style: FeedbackStyle::Neutral
        }));
    }

    #[test]
    fn new_submission_restarts_the_feedback_clear_timer() {
        let (mut flow, mut display, mut input) = two_level_flow();
        let clear_delay = flow.config.feedback_clear_delay;
        start_playing(&mut flow, &mut display, &mut input);

        submit_answer(&mut flow, &mut display, &mut input, "WRONG");
        flow.tick(clear_delay / 2.0, &mut display, &mut input);
        submit_answer(&mut flow, &mut display, &mut input, "STILL WRONG");
        display.drain();

        // The first timer would have fired here; the resubmission reset it.
        flow.tick(clear_delay / 2.0, &mut display, &mut input);
        assert!(display.is_empty());

        flow.tick(clear_delay / 2.0, &mut display, &mut input);
        let commands = display.drain();
        assert_eq!(text_of(&commands, TextField::Feedback).as_deref(), Some(""));
    }

    #[test]
    fn advancing_drops_the_stale_feedback_timer() {
        let (mut flow, mut display, mut input) = two_level_flow();
        let advance_delay = flow.config.advance_delay;
        let clear_delay = flow.config.feedback_clear_delay;
        start_playing(&mut flow, &mut display, &mut input);

        submit_answer(&mut flow, &mut display, &mut input, "HELLO WORLD");
        flow.tick(advance_delay, &mut display, &mut input);
        display.drain();

        // The success feedback's clear timer must not fire into level 2.
        flow.tick(clear_delay, &mut display, &mut input);
        assert!(display.is_empty());
    }

    #[test]
    fn replace_catalog_resets_to_welcome() {
        let (mut flow, mut display, mut input) = two_level_flow();
        start_playing(&mut flow, &mut display, &mut input);
        submit_answer(&mut flow, &mut display, &mut input, "HELLO WORLD");
        display.drain();

        let replacement = Catalog::new(vec![record(1, "Solo", "ONE")]).unwrap();
        flow.replace_catalog(replacement, &mut display);

        assert_eq!(flow.screen(), Screen::Welcome);
        assert_eq!(flow.level(), 1);
        assert_eq!(flow.catalog().len(), 1);
        assert!(flow.tasks.is_empty());
        let commands = display.drain();
        assert!(commands.contains(&DisplayCommand::ShowScreen {
            screen: Screen::Welcome
        }));
        assert!(commands.contains(&DisplayCommand::HideScreen {
            screen: Screen::Playing
        }));
    }

    #[test]
    fn ticking_on_the_welcome_screen_emits_nothing() {
        let (mut flow, mut display, mut input) = two_level_flow();
        flow.tick(10.0, &mut display, &mut input);
        assert!(display.is_empty());
        assert_eq!(flow.screen(), Screen::Welcome);
    }
}
