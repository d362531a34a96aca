/// Key code for the Enter key, as reported by the browser's `keydown` events.
pub const KEY_ENTER: u32 = 13;

/// UI events the engine understands.
/// Generic: no game-specific semantics, no DOM types.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The start control on the welcome screen was activated.
    StartClicked,
    /// The submit control on the playing screen was activated.
    SubmitClicked,
    /// The restart control on the success screen was activated.
    RestartClicked,
    /// A key was pressed while the answer box had focus.
    KeyPressed { key_code: u32 },
    /// The answer box content changed; `text` is the full current value.
    InputChanged { text: String },
}

/// A queue of UI events.
/// The host writes events into the queue; the runner drains them each frame.
pub struct UiQueue {
    events: Vec<UiEvent>,
}

impl UiQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Push a new event (called from the host via the wasm bridge).
    pub fn push(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &UiEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for UiQueue {
    fn default() -> Self {
        Self::new()
    }
}
