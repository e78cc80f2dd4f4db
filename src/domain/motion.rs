// SPDX-License-Identifier: MPL-2.0
//! Directional movement intents.
//!
//! A movement button does not command the robot. It overwrites one status
//! readout with a fixed value.

use super::telemetry::TelemetryField;

/// Linear speed shown while moving forward (negated for backward), m/s.
pub const LINEAR_INTENT_SPEED: f64 = 2.5;

/// Angular speed shown while turning left (negated for right), rad/s.
pub const ANGULAR_INTENT_SPEED: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// Readout overwritten by this direction and the value written.
    #[must_use]
    pub fn intent(self) -> (TelemetryField, f64) {
        match self {
            MoveDirection::Forward => (TelemetryField::Speed, LINEAR_INTENT_SPEED),
            MoveDirection::Backward => (TelemetryField::Speed, -LINEAR_INTENT_SPEED),
            MoveDirection::Left => (TelemetryField::AngularSpeed, ANGULAR_INTENT_SPEED),
            MoveDirection::Right => (TelemetryField::AngularSpeed, -ANGULAR_INTENT_SPEED),
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            MoveDirection::Forward => "move-forward",
            MoveDirection::Backward => "move-backward",
            MoveDirection::Left => "move-left",
            MoveDirection::Right => "move-right",
        }
    }
}
