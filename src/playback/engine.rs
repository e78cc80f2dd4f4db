// SPDX-License-Identifier: MPL-2.0
//! Media-playback engine port and the built-in engines.
//!
//! The console talks to the engine through [`PlaybackEngine`] only. It sends
//! transport commands and a source path and never asks for the engine's
//! state in return.

use crate::domain::{PlaybackCommand, PlaybackState};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Identifies the video-output surface frames are rendered onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Port for the external media-playback engine.
///
/// Every method is fire-and-forget: failures (missing file, codec error)
/// stay inside the engine.
pub trait PlaybackEngine: Send {
    /// Replaces the current source with the file at `path`.
    fn set_source(&mut self, path: &Path);

    fn play(&mut self);

    fn pause(&mut self);

    fn stop(&mut self);

    /// Routes rendered frames to `surface`.
    fn set_video_output(&mut self, surface: SurfaceId);
}

/// Engine that tracks transport state without decoding anything.
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    state: PlaybackState,
    source: Option<PathBuf>,
    output: Option<SurfaceId>,
}

impl HeadlessEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn output(&self) -> Option<SurfaceId> {
        self.output
    }

    fn apply(&mut self, command: PlaybackCommand) {
        self.state = self.state.apply(command);
        tracing::debug!(target: "rover_console::engine", state = ?self.state, "transport");
    }
}

impl PlaybackEngine for HeadlessEngine {
    fn set_source(&mut self, path: &Path) {
        tracing::debug!(target: "rover_console::engine", path = %path.display(), "source");
        self.source = Some(path.to_path_buf());
        self.state = PlaybackState::Stopped;
    }

    fn play(&mut self) {
        self.apply(PlaybackCommand::Play);
    }

    fn pause(&mut self) {
        self.apply(PlaybackCommand::Pause);
    }

    fn stop(&mut self) {
        self.apply(PlaybackCommand::Stop);
    }

    fn set_video_output(&mut self, surface: SurfaceId) {
        self.output = Some(surface);
    }
}

/// A call received by a [`RecordingEngine`]. Test support only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    SetSource(PathBuf),
    Command(PlaybackCommand),
    SetVideoOutput(SurfaceId),
}

/// Shared view of the calls a [`RecordingEngine`] received.
pub type EngineCallLog = Arc<Mutex<Vec<EngineCall>>>;

/// Engine double that records every call it receives.
///
/// Intended for unit and integration tests; the application always runs
/// on [`HeadlessEngine`].
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: EngineCallLog,
}

impl RecordingEngine {
    /// Returns the engine and a handle to its call log.
    #[must_use]
    pub fn new() -> (Self, EngineCallLog) {
        let calls = EngineCallLog::default();
        (
            Self {
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }

    fn push(&self, call: EngineCall) {
        // A poisoned log only means a test panicked mid-push; keep recording.
        let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        calls.push(call);
    }
}

impl PlaybackEngine for RecordingEngine {
    fn set_source(&mut self, path: &Path) {
        self.push(EngineCall::SetSource(path.to_path_buf()));
    }

    fn play(&mut self) {
        self.push(EngineCall::Command(PlaybackCommand::Play));
    }

    fn pause(&mut self) {
        self.push(EngineCall::Command(PlaybackCommand::Pause));
    }

    fn stop(&mut self) {
        self.push(EngineCall::Command(PlaybackCommand::Stop));
    }

    fn set_video_output(&mut self, surface: SurfaceId) {
        self.push(EngineCall::SetVideoOutput(surface));
    }
}
