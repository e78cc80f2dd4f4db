// SPDX-License-Identifier: MPL-2.0
//! Message routing for the root application.

use super::{App, Message, Screen};
use crate::ui::{navbar, settings};
use iced::Task;

pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Console(message) => {
            app.console.update(message);
        }
        Message::Navbar(message) => match navbar::update(message) {
            navbar::Event::OpenSettings => app.screen = Screen::Settings,
        },
        Message::Settings(message) => handle_settings_event(app, settings::update(message)),
    }
    Task::none()
}

fn handle_settings_event(app: &mut App, event: settings::Event) {
    match event {
        settings::Event::LanguageSelected(locale) => {
            app.i18n.set_locale(locale);
            app.config.general.language = Some(app.i18n.current_locale().to_string());
            app.persist_config();
        }
        settings::Event::ThemeModeSelected(mode) => {
            app.theme_mode = mode;
            app.config.general.theme_mode = mode;
            app.persist_config();
        }
        settings::Event::BackToConsole => app.screen = Screen::Console,
    }
}
