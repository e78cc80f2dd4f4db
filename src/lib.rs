// SPDX-License-Identifier: MPL-2.0
//! `rover_console` is a desktop control panel for a mobile robot, built with
//! the Iced GUI framework.
//!
//! It shows one of four recorded video feeds, forwards play/pause/stop to a
//! playback engine, and exposes movement buttons, speed-limit sliders and
//! telemetry readouts. Every control reports what it did to a diagnostic
//! trace.
//!
//! # Layers
//!
//! - [`domain`] - Channels, speed limits, telemetry and motion intents
//! - [`playback`] - Source selection, transport forwarding, engine port
//! - [`diagnostics`] - Bounded trace of handler activity
//! - [`ui`] - Console and settings components
//! - [`app`] - Root state, messages, keyboard shortcuts
//! - [`config`], [`i18n`] - Persisted preferences and localization

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod playback;
pub mod ui;
