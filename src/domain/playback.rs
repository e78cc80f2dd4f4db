// SPDX-License-Identifier: MPL-2.0
//! Video playback state machine.
//!
//! The state belongs to the playback engine. The console only issues
//! [`PlaybackCommand`]s and never reads the confirmed state back.

/// Represents the current playback state of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Video is stopped (at beginning or end).
    #[default]
    Stopped,
    /// Video is currently playing.
    Playing,
    /// Video is paused at current position.
    Paused,
}

impl PlaybackState {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the video is stopped.
    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// State reached after applying `command`. Every command is accepted
    /// from every state.
    #[must_use]
    pub fn apply(self, command: PlaybackCommand) -> Self {
        match command {
            PlaybackCommand::Play => Self::Playing,
            PlaybackCommand::Pause => Self::Paused,
            PlaybackCommand::Stop => Self::Stopped,
        }
    }
}

/// Transport intents forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    Stop,
}
