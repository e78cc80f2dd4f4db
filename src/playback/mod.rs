// SPDX-License-Identifier: MPL-2.0
//! Video source selection and playback forwarding.
//!
//! - [`VideoSourceSelector`] maps the exclusive channel choice to a file path.
//! - [`PlaybackController`] relays play/pause/stop to a [`PlaybackEngine`].

mod controller;
mod engine;
mod selector;

pub use controller::PlaybackController;
pub use engine::{
    EngineCall, EngineCallLog, HeadlessEngine, PlaybackEngine, RecordingEngine, SurfaceId,
};
pub use selector::{SourceLoading, VideoSourceSelector};
