// SPDX-License-Identifier: MPL-2.0
//! Forwards transport intents to the playback engine.

use super::engine::{PlaybackEngine, SurfaceId};
use crate::diagnostics::{TraceEvent, TraceLog};
use crate::domain::PlaybackCommand;
use std::fmt;
use std::path::Path;

/// Owns the engine and relays play/pause/stop to it.
///
/// Each call reaches the engine exactly once and is traced. The engine's
/// confirmed state is never read back.
pub struct PlaybackController {
    engine: Box<dyn PlaybackEngine>,
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController").finish_non_exhaustive()
    }
}

impl PlaybackController {
    #[must_use]
    pub fn new(engine: Box<dyn PlaybackEngine>) -> Self {
        Self { engine }
    }

    pub fn play(&mut self, trace: &mut TraceLog) {
        self.send(PlaybackCommand::Play, trace);
    }

    pub fn pause(&mut self, trace: &mut TraceLog) {
        self.send(PlaybackCommand::Pause, trace);
    }

    pub fn stop(&mut self, trace: &mut TraceLog) {
        self.send(PlaybackCommand::Stop, trace);
    }

    /// Forwards `command` to the engine and traces it.
    pub fn send(&mut self, command: PlaybackCommand, trace: &mut TraceLog) {
        match command {
            PlaybackCommand::Play => self.engine.play(),
            PlaybackCommand::Pause => self.engine.pause(),
            PlaybackCommand::Stop => self.engine.stop(),
        }
        trace.record(TraceEvent::Playback(command));
    }

    /// Asks the engine to switch to a new source file.
    pub fn load_source(&mut self, path: &Path) {
        self.engine.set_source(path);
    }

    /// Connects the engine's rendered output to `surface`.
    pub fn attach_output(&mut self, surface: SurfaceId) {
        self.engine.set_video_output(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::engine::{EngineCall, RecordingEngine};

    #[test]
    fn each_command_forwards_exactly_once() {
        let (engine, calls) = RecordingEngine::new();
        let mut controller = PlaybackController::new(Box::new(engine));
        let mut trace = TraceLog::default();

        controller.play(&mut trace);
        controller.pause(&mut trace);
        controller.stop(&mut trace);

        let calls = calls.lock().expect("log lock");
        assert_eq!(
            *calls,
            vec![
                EngineCall::Command(PlaybackCommand::Play),
                EngineCall::Command(PlaybackCommand::Pause),
                EngineCall::Command(PlaybackCommand::Stop),
            ]
        );
        let lines: Vec<String> = trace.events().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["Video started", "Video paused", "Video stopped"]);
    }

    #[test]
    fn repeated_play_is_forwarded_every_time() {
        let (engine, calls) = RecordingEngine::new();
        let mut controller = PlaybackController::new(Box::new(engine));
        let mut trace = TraceLog::default();

        controller.play(&mut trace);
        controller.play(&mut trace);

        assert_eq!(calls.lock().expect("log lock").len(), 2);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn attach_output_is_not_traced() {
        let (engine, calls) = RecordingEngine::new();
        let mut controller = PlaybackController::new(Box::new(engine));
        controller.attach_output(SurfaceId(1));
        assert_eq!(
            *calls.lock().expect("log lock"),
            vec![EngineCall::SetVideoOutput(SurfaceId(1))]
        );
    }
}
