/// Host-facing display protocol.
/// Must stay in sync with the TypeScript `protocol.ts` that applies commands
/// to the DOM.
///
/// Commands are buffered during a tick and drained by the host as one JSON
/// array:
/// ```text
/// [{"op":"show_screen","screen":"playing"},
///  {"op":"set_text","field":"progress","value":"Level 1 of 2"}]
/// ```
use serde::{Deserialize, Serialize};

use crate::api::types::{FeedbackStyle, Screen, TextField};

/// Protocol version reported to the host so it can verify compatibility.
pub const PROTOCOL_VERSION: u32 = 1;

/// Default maximum number of buffered commands between drains.
pub const DEFAULT_MAX_COMMANDS: usize = 256;

/// One display operation, in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DisplayCommand {
    /// Make a named screen visible.
    ShowScreen { screen: Screen },
    /// Hide a named screen.
    HideScreen { screen: Screen },
    /// Replace the contents of a text field.
    SetText { field: TextField, value: String },
    /// Restyle the feedback field.
    SetFeedbackStyle { style: FeedbackStyle },
    /// Empty the answer box.
    ClearInput,
}

/// Write access to the display surface.
///
/// The flow controller pushes all of its visible effects through this
/// interface; nothing in the engine knows what a DOM is.
pub trait DisplaySink {
    fn show_screen(&mut self, screen: Screen);
    fn hide_screen(&mut self, screen: Screen);
    fn set_text(&mut self, field: TextField, value: &str);
    fn set_feedback_style(&mut self, style: FeedbackStyle);
}

/// Buffered [`DisplaySink`]: commands accumulate in order until the runner
/// drains them for the host.
#[derive(Debug)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
    max_commands: usize,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_COMMANDS)
    }

    /// Create a display list holding at most `max_commands` between drains.
    /// Commands past the capacity are dropped with a warning; the capacity
    /// bounds the per-frame payload handed to the host.
    pub fn with_capacity(max_commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(max_commands.min(64)),
            max_commands,
        }
    }

    /// Append a command, subject to the capacity limit.
    pub fn push(&mut self, command: DisplayCommand) {
        if self.commands.len() >= self.max_commands {
            log::warn!(
                "display list full ({} commands); dropping {:?}",
                self.max_commands,
                command
            );
            return;
        }
        self.commands.push(command);
    }

    /// Take all buffered commands, leaving the list empty.
    pub fn drain(&mut self) -> Vec<DisplayCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Buffered commands, in push order.
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Number of buffered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are buffered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all buffered commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a drained command batch to the JSON array the host consumes.
/// Serialization of these commands cannot fail in practice; if it ever does,
/// the host gets an empty batch rather than a panic.
pub fn commands_to_json(commands: &[DisplayCommand]) -> String {
    match serde_json::to_string(commands) {
        Ok(json) => json,
        Err(err) => {
            log::error!("display command serialization failed: {err}");
            "[]".to_string()
        }
    }
}

impl DisplaySink for DisplayList {
    fn show_screen(&mut self, screen: Screen) {
        self.push(DisplayCommand::ShowScreen { screen });
    }

    fn hide_screen(&mut self, screen: Screen) {
        self.push(DisplayCommand::HideScreen { screen });
    }

    fn set_text(&mut self, field: TextField, value: &str) {
        self.push(DisplayCommand::SetText {
            field,
            value: value.to_string(),
        });
    }

    fn set_feedback_style(&mut self, style: FeedbackStyle) {
        self.push(DisplayCommand::SetFeedbackStyle { style });
    }
}
