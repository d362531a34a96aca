use serde::{Deserialize, Serialize};

/// A named screen on the host surface.
/// The engine only ever shows one screen at a time; the host decides what a
/// "screen" looks like (in the browser these are sections toggled via CSS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Landing screen with the start control.
    Welcome,
    /// The active puzzle: title, description, progress, input, feedback.
    Playing,
    /// Shown once every puzzle in the catalog has been solved.
    Success,
}

impl Screen {
    /// Wire/display name of the screen.
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Playing => "playing",
            Screen::Success => "success",
        }
    }
}

/// A text field on the playing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    /// Puzzle headline, formatted as `Puzzle #{level}: {title}`.
    Title,
    /// Puzzle body text. Opaque to the engine; may contain simple
    /// line-break markup the host renders as it sees fit.
    Description,
    /// Progress indicator, formatted as `Level {level} of {total}`.
    Progress,
    /// Answer feedback line.
    Feedback,
}

impl TextField {
    /// Wire/display name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Description => "description",
            TextField::Progress => "progress",
            TextField::Feedback => "feedback",
        }
    }
}

/// Visual styling of the feedback field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStyle {
    /// No styling (empty or cleared feedback).
    #[default]
    Neutral,
    /// Correct-answer styling.
    Success,
    /// Wrong-answer styling.
    Error,
}
