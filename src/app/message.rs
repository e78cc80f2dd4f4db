// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{console, navbar, settings};

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Console(console::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `en-US`, `fr`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
