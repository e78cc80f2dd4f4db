// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core control-panel types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`channel`]: Video feed selection ([`VideoChannel`](channel::VideoChannel),
//!   [`ChannelSources`](channel::ChannelSources))
//! - [`motion`]: Movement intents ([`MoveDirection`](motion::MoveDirection))
//! - [`playback`]: Transport state ([`PlaybackState`](playback::PlaybackState),
//!   [`PlaybackCommand`](playback::PlaybackCommand))
//! - [`speed`]: Slider-derived limits ([`SpeedLimit`](speed::SpeedLimit),
//!   [`SpeedLimits`](speed::SpeedLimits))
//! - [`telemetry`]: Numeric readouts ([`TelemetryField`](telemetry::TelemetryField),
//!   [`TelemetryDisplay`](telemetry::TelemetryDisplay))

pub mod channel;
pub mod motion;
pub mod playback;
pub mod speed;
pub mod telemetry;

pub use channel::{ChannelSources, VideoChannel};
pub use motion::MoveDirection;
pub use playback::{PlaybackCommand, PlaybackState};
pub use speed::{SpeedLimit, SpeedLimits};
pub use telemetry::{TelemetryDisplay, TelemetryField};
