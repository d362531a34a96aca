/// Read access to the player's answer box.
///
/// The flow controller never touches the host input directly; it reads the
/// current text and requests clears through this interface, which keeps the
/// controller testable without any rendering surface.
pub trait InputSource {
    /// Current answer text, trimmed of surrounding whitespace.
    fn read_input(&self) -> String;
    /// Empty the answer box.
    fn clear_input(&mut self);
}

/// Engine-side mirror of the host's answer box.
///
/// The host reports every edit via an input-changed event; clears requested
/// by the controller are recorded here so the runner can forward a matching
/// clear-input display command to the host.
#[derive(Debug, Default)]
pub struct InputBuffer {
    text: String,
    clear_requested: bool,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mirrored text with the host's current value.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Raw mirrored text, untrimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Take the pending clear request, if any.
    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }
}

impl InputSource for InputBuffer {
    fn read_input(&self) -> String {
        self.text.trim().to_string()
    }

    fn clear_input(&mut self) {
        self.text.clear();
        self.clear_requested = true;
    }
}
