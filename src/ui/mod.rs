// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`console`] - Robot control panel (video, transport, motion, limits, readouts)
//! - [`settings`] - Language and theme preferences
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Top bar with the settings entry
//! - [`widgets`] - Video surface slot
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod console;
pub mod design_tokens;
pub mod navbar;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod widgets;
