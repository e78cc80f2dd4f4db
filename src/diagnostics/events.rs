// SPDX-License-Identifier: MPL-2.0
//! Trace event types emitted by the console handlers.

use crate::domain::{MoveDirection, PlaybackCommand, SpeedLimit};
use chrono::{DateTime, Local};
use std::fmt;
use std::path::PathBuf;

/// One diagnostic line produced by a UI handler.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A video channel became active.
    ChannelSelected { path: PathBuf },
    /// A transport command was forwarded to the engine.
    Playback(PlaybackCommand),
    /// A movement button was pressed.
    Movement(MoveDirection),
    /// A speed-limit slider moved; `value` is the scaled readout.
    SpeedLimit { limit: SpeedLimit, value: f64 },
    /// Non-fatal problem worth showing to the operator.
    Warning { message: String },
}

impl TraceEvent {
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, TraceEvent::Warning { .. })
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::ChannelSelected { path } => {
                write!(f, "Selected video: {}", path.display())
            }
            TraceEvent::Playback(PlaybackCommand::Play) => write!(f, "Video started"),
            TraceEvent::Playback(PlaybackCommand::Pause) => write!(f, "Video paused"),
            TraceEvent::Playback(PlaybackCommand::Stop) => write!(f, "Video stopped"),
            TraceEvent::Movement(MoveDirection::Forward) => write!(f, "Moving forward"),
            TraceEvent::Movement(MoveDirection::Backward) => write!(f, "Moving backward"),
            TraceEvent::Movement(MoveDirection::Left) => write!(f, "Turning left"),
            TraceEvent::Movement(MoveDirection::Right) => write!(f, "Turning right"),
            // `{:?}` keeps the trailing `.0` on whole numbers ("5.0 m/s").
            TraceEvent::SpeedLimit { limit, value } => match limit {
                SpeedLimit::MaxLinear => write!(f, "Max speed: {value:?} m/s"),
                SpeedLimit::Angular => write!(f, "Max angular speed: {value:?} rad/s"),
                SpeedLimit::MinLinear => write!(f, "Min speed: {value:?} m/s"),
            },
            TraceEvent::Warning { message } => write!(f, "Warning: {message}"),
        }
    }
}

/// A trace event with the wall-clock time it was recorded.
#[derive(Debug, Clone)]
pub struct TraceEntry {
    pub at: DateTime<Local>,
    pub event: TraceEvent,
}

impl TraceEntry {
    #[must_use]
    pub fn new(event: TraceEvent) -> Self {
        Self {
            at: Local::now(),
            event,
        }
    }

    /// `HH:MM:SS message`, as shown in the trace pane.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!("{} {}", self.at.format("%H:%M:%S"), self.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_line_names_path() {
        let event = TraceEvent::ChannelSelected {
            path: PathBuf::from("path/to/trajectory_2d.mp4"),
        };
        assert_eq!(event.to_string(), "Selected video: path/to/trajectory_2d.mp4");
    }

    #[test]
    fn playback_lines() {
        assert_eq!(
            TraceEvent::Playback(PlaybackCommand::Play).to_string(),
            "Video started"
        );
        assert_eq!(
            TraceEvent::Playback(PlaybackCommand::Pause).to_string(),
            "Video paused"
        );
        assert_eq!(
            TraceEvent::Playback(PlaybackCommand::Stop).to_string(),
            "Video stopped"
        );
    }

    #[test]
    fn speed_limit_lines_keep_decimal() {
        let max = TraceEvent::SpeedLimit {
            limit: SpeedLimit::MaxLinear,
            value: 5.0,
        };
        let angular = TraceEvent::SpeedLimit {
            limit: SpeedLimit::Angular,
            value: 1.57,
        };
        assert_eq!(max.to_string(), "Max speed: 5.0 m/s");
        assert_eq!(angular.to_string(), "Max angular speed: 1.57 rad/s");
    }

    #[test]
    fn entry_line_is_prefixed_with_time() {
        let entry = TraceEntry::new(TraceEvent::Movement(MoveDirection::Left));
        let line = entry.display_line();
        assert!(line.ends_with(" Turning left"));
        assert_eq!(line.len(), "HH:MM:SS Turning left".len());
    }
}
