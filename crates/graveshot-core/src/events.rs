//! Events emitted by the session for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::MessageDisplay;

/// Audio events for the frontend sound system. Playback is best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// An enemy was hit.
    ShotFired,
    /// Start (or resume) the background track.
    MusicStart,
    /// Stop the background track and rewind it.
    MusicStop,
}

/// Score and status-message updates for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    ScoreChanged { delta: u32, total: u32 },
    ScoreReset,
    Message { text: String, display: MessageDisplay },
}

impl SessionEvent {
    pub fn message(text: impl Into<String>, millis: u32) -> Self {
        SessionEvent::Message {
            text: text.into(),
            display: MessageDisplay::Timed { millis },
        }
    }

    pub fn hide_message() -> Self {
        SessionEvent::Message {
            text: String::new(),
            display: MessageDisplay::Hide,
        }
    }
}
