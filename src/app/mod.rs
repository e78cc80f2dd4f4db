// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the console and settings views.
//!
//! The `App` struct wires together the console, localization and persisted
//! preferences, and turns settings changes into config writes.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use subscription::shortcut;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::playback::{HeadlessEngine, PlaybackEngine};
use crate::ui::console::{self, Setup};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    console: console::State,
    theme_mode: ThemeMode,
    /// Preferences as last loaded or saved.
    config: Config,
    /// Directory `settings.toml` is written to; `None` resolves the default.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("active_channel", &self.console.active_channel())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const MIN_WINDOW_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and builds the console around the headless engine.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::with_engine(i18n, config, None, Box::new(HeadlessEngine::new()));
        if let Some(key) = config_warning {
            let message = app.i18n.tr(&key);
            app.console.record_warning(message);
        }

        (app, Task::none())
    }

    /// Builds the application from already-resolved parts.
    pub fn with_engine(
        i18n: I18n,
        config: Config,
        config_dir: Option<PathBuf>,
        engine: Box<dyn PlaybackEngine>,
    ) -> Self {
        let console = console::State::new(engine, Setup::from_config(&config));
        Self {
            i18n,
            screen: Screen::Console,
            console,
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
        }
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Console => self.i18n.tr("window-title"),
            Screen::Settings => format!(
                "{} - {}",
                self.i18n.tr("settings-title"),
                self.i18n.tr("window-title")
            ),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn console(&self) -> &console::State {
        &self.console
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Writes the current preferences, tracing a warning if that fails.
    fn persist_config(&mut self) {
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!("failed to save config: {err}");
            let message = self.i18n.tr("notification-config-save-error");
            self.console.record_warning(message);
        }
    }
}
