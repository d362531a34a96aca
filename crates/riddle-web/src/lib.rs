pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// This macro eliminates ~100 lines of boilerplate per game by generating:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, event handlers, state
///   accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use riddle_engine::*;
/// use riddle_web::GameRunner;
///
/// mod game;
/// use game::MyGame;
///
/// riddle_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `riddle_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        // ---- Event handlers ----

        #[wasm_bindgen]
        pub fn game_start_clicked() {
            with_runner(|r| r.push_event(UiEvent::StartClicked));
        }

        #[wasm_bindgen]
        pub fn game_submit_clicked() {
            with_runner(|r| r.push_event(UiEvent::SubmitClicked));
        }

        #[wasm_bindgen]
        pub fn game_restart_clicked() {
            with_runner(|r| r.push_event(UiEvent::RestartClicked));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_event(UiEvent::KeyPressed { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_input_changed(text: &str) {
            with_runner(|r| {
                r.push_event(UiEvent::InputChanged {
                    text: text.to_string(),
                })
            });
        }

        #[wasm_bindgen]
        pub fn game_load_catalog(json: &str) -> bool {
            with_runner(|r| r.load_catalog(json))
        }

        // ---- State accessors ----

        #[wasm_bindgen]
        pub fn get_commands() -> String {
            with_runner(|r| r.drain_commands_json())
        }

        #[wasm_bindgen]
        pub fn get_screen() -> String {
            with_runner(|r| r.screen_name().to_string())
        }

        #[wasm_bindgen]
        pub fn get_level() -> u32 {
            with_runner(|r| r.level())
        }

        #[wasm_bindgen]
        pub fn get_level_count() -> u32 {
            with_runner(|r| r.level_count())
        }

        #[wasm_bindgen]
        pub fn get_protocol_version() -> u32 {
            with_runner(|r| r.protocol_version())
        }
    };
}
