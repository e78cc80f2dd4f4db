// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Slider ranges and telemetry literals live in the domain layer; this module
//! only covers values the user can override in `settings.toml`.

pub use crate::diagnostics::trace_capacity_bounds::{
    DEFAULT as DEFAULT_TRACE_CAPACITY, MAX as MAX_TRACE_CAPACITY, MIN as MIN_TRACE_CAPACITY,
};

// ==========================================================================
// Video Defaults
// ==========================================================================

/// Whether selecting a channel also swaps the engine's source file.
pub const DEFAULT_LOAD_SOURCES: bool = false;

// ==========================================================================
// Trace Pane Defaults
// ==========================================================================

/// Number of trace lines shown under the controls.
pub const TRACE_PANE_LINES: usize = 8;
