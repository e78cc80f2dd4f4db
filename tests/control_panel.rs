// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks of the console wiring through the public API.

use iced::keyboard::{key::Named, Key};
use rover_console::app::{shortcut, App, Message};
use rover_console::config::Config;
use rover_console::diagnostics::TraceEvent;
use rover_console::domain::{
    speed, MoveDirection, PlaybackCommand, SpeedLimit, TelemetryField, VideoChannel,
};
use rover_console::i18n::fluent::I18n;
use rover_console::playback::{EngineCall, EngineCallLog, RecordingEngine};
use rover_console::ui::console::{self, Setup};
use tempfile::tempdir;

fn console_with_log() -> (console::State, EngineCallLog) {
    let (engine, calls) = RecordingEngine::new();
    (console::State::new(Box::new(engine), Setup::default()), calls)
}

#[test]
fn slider_scaling_is_plain_division() {
    for v in 0..=100u16 {
        assert_eq!(speed::scale_max_speed(v), f64::from(v) / 10.0);
    }
    for v in 0..=314u16 {
        assert_eq!(speed::scale_angular_speed(v), f64::from(v) / 100.0);
    }
    for v in 0..=50u16 {
        assert_eq!(speed::scale_min_speed(v), f64::from(v) / 10.0);
    }
}

#[test]
fn every_index_selects_its_channel_and_others_are_ignored() {
    let (mut state, _calls) = console_with_log();

    for (index, channel) in VideoChannel::ALL.into_iter().enumerate() {
        state.update(console::Message::ChannelIndex(index));
        assert_eq!(state.active_channel(), channel);
    }

    let traced = state.trace().len();
    for index in [4, 5, 100, usize::MAX] {
        state.update(console::Message::ChannelIndex(index));
        assert_eq!(state.active_channel(), VideoChannel::Trajectory3D);
    }
    assert_eq!(state.trace().len(), traced);
}

#[test]
fn transport_forwards_once_per_press() {
    let (mut state, calls) = console_with_log();
    let telemetry = state.telemetry().clone();
    let startup_calls = calls.lock().unwrap().len();

    state.update(console::Message::Stop);
    state.update(console::Message::Play);

    let calls = calls.lock().unwrap();
    assert_eq!(
        &calls[startup_calls..],
        &[
            EngineCall::Command(PlaybackCommand::Stop),
            EngineCall::Command(PlaybackCommand::Play),
        ]
    );
    assert_eq!(state.telemetry(), &telemetry);
}

#[test]
fn deferred_loading_never_swaps_the_source() {
    let (mut state, calls) = console_with_log();

    for channel in VideoChannel::ALL {
        state.update(console::Message::ChannelToggled(channel));
    }

    let calls = calls.lock().unwrap();
    assert!(!calls
        .iter()
        .any(|call| matches!(call, EngineCall::SetSource(_))));
}

#[test]
fn movement_overwrites_rather_than_accumulates() {
    let (mut state, _calls) = console_with_log();

    for _ in 0..3 {
        state.update(console::Message::Move(MoveDirection::Left));
    }
    assert_eq!(state.telemetry().get(TelemetryField::AngularSpeed), 0.5);
    assert_eq!(state.telemetry().get(TelemetryField::Speed), 0.0);
}

#[test]
fn startup_defaults_are_applied_before_any_interaction() {
    let (state, _calls) = console_with_log();

    let sensors: Vec<f64> = TelemetryField::SENSORS
        .iter()
        .map(|&field| state.telemetry().get(field))
        .collect();
    assert_eq!(
        sensors,
        vec![12.5, 12.3, 12.4, 12.6, 5.2, 5.1, 24.1, 24.8, 30.0]
    );

    let limits: Vec<f64> = SpeedLimit::ALL
        .iter()
        .map(|&limit| state.speed_limits().value(limit))
        .collect();
    assert_eq!(limits, vec![5.0, 1.57, 1.0]);

    let slider_traces = state
        .trace()
        .events()
        .filter(|event| matches!(event, TraceEvent::SpeedLimit { .. }))
        .count();
    assert_eq!(slider_traces, 3);
    assert!(state.surface().is_substituted());
}

#[test]
fn keyboard_shortcuts_drive_the_app() {
    let dir = tempdir().expect("temp dir");
    let mut app = App::with_engine(
        I18n::new(Some("en-US".to_string()), &Config::default()),
        Config::default(),
        Some(dir.path().to_path_buf()),
        Box::new(RecordingEngine::new().0),
    );

    for key in [
        Key::Character("3".into()),
        Key::Named(Named::ArrowDown),
        Key::Character("9".into()),
    ] {
        let message = shortcut(&key).expect("mapped key");
        let _ = app.update(Message::Console(message));
    }

    assert_eq!(app.console().active_channel(), VideoChannel::Trajectory2D);
    assert_eq!(app.console().telemetry().get(TelemetryField::Speed), -2.5);
}
