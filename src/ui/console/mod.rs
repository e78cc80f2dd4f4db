// SPDX-License-Identifier: MPL-2.0
//! Control panel component.
//!
//! Wires every panel control to its effect: the channel radios drive the
//! [`VideoSourceSelector`], the transport buttons the [`PlaybackController`],
//! the movement pad and sliders write straight into the readouts. Each
//! handler also records a line in the [`TraceLog`].

mod view;

pub use view::{view, ViewContext};

use crate::config::Config;
use crate::diagnostics::{TraceCapacity, TraceEvent, TraceLog};
use crate::domain::{
    ChannelSources, MoveDirection, SpeedLimit, SpeedLimits, TelemetryDisplay, VideoChannel,
};
use crate::playback::{PlaybackController, PlaybackEngine, SourceLoading, VideoSourceSelector};
use crate::ui::design_tokens::sizing;
use crate::ui::widgets::SurfaceSlot;
use iced::Size;

/// Messages emitted by the console widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A channel radio was picked.
    ChannelToggled(VideoChannel),
    /// Channel chosen by selector position (keyboard digits).
    ChannelIndex(usize),
    Play,
    Pause,
    Stop,
    Move(MoveDirection),
    /// Slider moved to a new raw position.
    SpeedLimitChanged(SpeedLimit, u16),
}

/// Startup inputs for the console.
#[derive(Debug, Clone, PartialEq)]
pub struct Setup {
    pub sources: ChannelSources,
    pub start_channel: VideoChannel,
    pub loading: SourceLoading,
    pub speed_limits: SpeedLimits,
    pub trace_capacity: TraceCapacity,
}

impl Setup {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            sources: config.video.channel_sources(),
            start_channel: config.video.start_channel(),
            loading: config.video.source_loading(),
            speed_limits: config.controls.speed_limits(),
            trace_capacity: config.diagnostics.capacity(),
        }
    }
}

impl Default for Setup {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Console state.
#[derive(Debug)]
pub struct State {
    selector: VideoSourceSelector,
    controller: PlaybackController,
    speed_limits: SpeedLimits,
    telemetry: TelemetryDisplay,
    trace: TraceLog,
    surface: SurfaceSlot,
}

impl State {
    /// Builds the panel and runs its one-time initialization.
    ///
    /// Slider readouts are written and traced, telemetry takes its literal
    /// defaults, and the video placeholder is replaced by a surface that
    /// becomes the engine's output.
    pub fn new(engine: Box<dyn PlaybackEngine>, setup: Setup) -> Self {
        let mut trace = TraceLog::new(setup.trace_capacity);
        let mut controller = PlaybackController::new(engine);
        let selector = VideoSourceSelector::new(setup.sources, setup.start_channel, setup.loading);

        let speed_limits = setup.speed_limits;
        for limit in SpeedLimit::ALL {
            trace.record(TraceEvent::SpeedLimit {
                limit,
                value: speed_limits.value(limit),
            });
        }

        let mut surface =
            SurfaceSlot::placeholder(Size::new(sizing::VIDEO_WIDTH, sizing::VIDEO_HEIGHT));
        let surface_id = surface.substitute_video_surface();
        controller.attach_output(surface_id);

        if selector.loading() == SourceLoading::Immediate {
            controller.load_source(selector.active_path());
        }

        Self {
            selector,
            controller,
            speed_limits,
            telemetry: TelemetryDisplay::with_defaults(),
            trace,
            surface,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            // Radios report clicks on the checked option too.
            Message::ChannelToggled(channel) if channel == self.selector.active() => {}
            Message::ChannelToggled(channel) => {
                self.selector
                    .select(channel, &mut self.controller, &mut self.trace);
            }
            Message::ChannelIndex(index) => {
                self.selector
                    .select_index(index, &mut self.controller, &mut self.trace);
            }
            Message::Play => self.controller.play(&mut self.trace),
            Message::Pause => self.controller.pause(&mut self.trace),
            Message::Stop => self.controller.stop(&mut self.trace),
            Message::Move(direction) => {
                self.trace.record(TraceEvent::Movement(direction));
                let (field, value) = direction.intent();
                self.telemetry.set(field, value);
            }
            Message::SpeedLimitChanged(limit, raw) => {
                let value = self.speed_limits.set(limit, raw);
                self.trace.record(TraceEvent::SpeedLimit { limit, value });
            }
        }
    }

    /// Adds a warning line to the trace pane.
    pub fn record_warning(&mut self, message: impl Into<String>) {
        self.trace.record(TraceEvent::Warning {
            message: message.into(),
        });
    }

    #[must_use]
    pub fn active_channel(&self) -> VideoChannel {
        self.selector.active()
    }

    #[must_use]
    pub fn selector(&self) -> &VideoSourceSelector {
        &self.selector
    }

    #[must_use]
    pub fn speed_limits(&self) -> &SpeedLimits {
        &self.speed_limits
    }

    #[must_use]
    pub fn telemetry(&self) -> &TelemetryDisplay {
        &self.telemetry
    }

    #[must_use]
    pub fn trace(&self) -> &TraceLog {
        &self.trace
    }

    #[must_use]
    pub fn surface(&self) -> &SurfaceSlot {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlaybackCommand, TelemetryField};
    use crate::playback::{EngineCall, EngineCallLog, RecordingEngine};

    fn console() -> (State, EngineCallLog) {
        let (engine, calls) = RecordingEngine::new();
        (State::new(Box::new(engine), Setup::default()), calls)
    }

    fn trace_lines(state: &State) -> Vec<String> {
        state.trace().events().map(ToString::to_string).collect()
    }

    #[test]
    fn startup_traces_slider_defaults_once() {
        let (state, _calls) = console();
        assert_eq!(
            trace_lines(&state),
            vec![
                "Max speed: 5.0 m/s",
                "Max angular speed: 1.57 rad/s",
                "Min speed: 1.0 m/s",
            ]
        );
    }

    #[test]
    fn startup_applies_telemetry_defaults() {
        let (state, _calls) = console();
        assert_eq!(state.telemetry(), &TelemetryDisplay::with_defaults());
        assert_eq!(state.telemetry().get(TelemetryField::BatteryVoltage), 24.8);
    }

    #[test]
    fn startup_attaches_substituted_surface() {
        let (state, calls) = console();
        let surface = state.surface().surface_id().expect("surface substituted");

        let calls = calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[EngineCall::SetVideoOutput(surface)]);
        assert_eq!(
            state.surface().geometry(),
            Size::new(sizing::VIDEO_WIDTH, sizing::VIDEO_HEIGHT)
        );
    }

    #[test]
    fn immediate_loading_sets_start_source() {
        let (engine, calls) = RecordingEngine::new();
        let setup = Setup {
            loading: SourceLoading::Immediate,
            start_channel: VideoChannel::Lidar,
            ..Setup::default()
        };
        let _state = State::new(Box::new(engine), setup);

        let calls = calls.lock().unwrap();
        assert!(calls.contains(&EngineCall::SetSource(
            "path/to/lidar_visualization.mp4".into()
        )));
    }

    #[test]
    fn playback_buttons_leave_telemetry_untouched() {
        let (mut state, calls) = console();
        let before = state.telemetry().clone();

        state.update(Message::Play);
        state.update(Message::Pause);
        state.update(Message::Stop);

        assert_eq!(state.telemetry(), &before);
        let calls = calls.lock().unwrap();
        assert_eq!(
            &calls[1..],
            &[
                EngineCall::Command(PlaybackCommand::Play),
                EngineCall::Command(PlaybackCommand::Pause),
                EngineCall::Command(PlaybackCommand::Stop),
            ]
        );
    }

    #[test]
    fn movement_overwrites_readouts() {
        let (mut state, _calls) = console();

        state.update(Message::Move(MoveDirection::Forward));
        state.update(Message::Move(MoveDirection::Forward));
        assert_eq!(state.telemetry().get(TelemetryField::Speed), 2.5);

        state.update(Message::Move(MoveDirection::Backward));
        assert_eq!(state.telemetry().get(TelemetryField::Speed), -2.5);

        state.update(Message::Move(MoveDirection::Right));
        assert_eq!(state.telemetry().get(TelemetryField::AngularSpeed), -0.5);
        state.update(Message::Move(MoveDirection::Left));
        assert_eq!(state.telemetry().get(TelemetryField::AngularSpeed), 0.5);

        let lines = trace_lines(&state);
        assert_eq!(
            &lines[3..],
            &[
                "Moving forward",
                "Moving forward",
                "Moving backward",
                "Turning right",
                "Turning left",
            ]
        );
    }

    #[test]
    fn slider_change_updates_readout_and_trace() {
        let (mut state, _calls) = console();

        state.update(Message::SpeedLimitChanged(SpeedLimit::Angular, 314));

        assert_eq!(state.speed_limits().value(SpeedLimit::Angular), 3.14);
        assert_eq!(
            trace_lines(&state).last().map(String::as_str),
            Some("Max angular speed: 3.14 rad/s")
        );
    }

    #[test]
    fn channel_index_out_of_range_is_ignored() {
        let (mut state, calls) = console();
        let traced = state.trace().len();

        state.update(Message::ChannelIndex(4));
        state.update(Message::ChannelIndex(usize::MAX));

        assert_eq!(state.active_channel(), VideoChannel::RgbD);
        assert_eq!(state.trace().len(), traced);
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn channel_toggle_is_exclusive() {
        let (mut state, _calls) = console();

        state.update(Message::ChannelToggled(VideoChannel::Trajectory3D));
        assert_eq!(state.active_channel(), VideoChannel::Trajectory3D);

        state.update(Message::ChannelIndex(1));
        assert_eq!(state.active_channel(), VideoChannel::Lidar);
        assert_eq!(
            trace_lines(&state).last().map(String::as_str),
            Some("Selected video: path/to/lidar_visualization.mp4")
        );
    }

    #[test]
    fn reclicking_active_channel_does_nothing() {
        let (engine, calls) = RecordingEngine::new();
        let setup = Setup {
            loading: SourceLoading::Immediate,
            ..Setup::default()
        };
        let mut state = State::new(Box::new(engine), setup);
        let traced = state.trace().len();
        let engine_calls = calls.lock().unwrap().len();

        state.update(Message::ChannelToggled(VideoChannel::RgbD));
        state.update(Message::ChannelToggled(VideoChannel::RgbD));

        assert_eq!(state.active_channel(), VideoChannel::RgbD);
        assert_eq!(state.trace().len(), traced);
        assert_eq!(calls.lock().unwrap().len(), engine_calls);

        state.update(Message::ChannelToggled(VideoChannel::Lidar));
        assert_eq!(state.trace().len(), traced + 1);
        assert_eq!(calls.lock().unwrap().len(), engine_calls + 1);
    }

    #[test]
    fn warnings_reach_the_trace() {
        let (mut state, _calls) = console();
        state.record_warning("settings not saved");
        assert!(state.trace().events().last().is_some_and(TraceEvent::is_warning));
    }
}
