// SPDX-License-Identifier: MPL-2.0
//! Root view: navbar over the active screen.

use super::{App, Message, Screen};
use crate::ui::{console, navbar, settings};
use iced::widget::{column, container, scrollable};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let body: Element<'_, Message> = match app.screen {
        Screen::Console => console::view(console::ViewContext {
            i18n: &app.i18n,
            state: &app.console,
        })
        .map(Message::Console),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: &app.i18n,
            theme_mode: app.theme_mode,
        })
        .map(Message::Settings),
    };

    let navbar = navbar::view(&app.i18n).map(Message::Navbar);

    container(column![navbar, scrollable(body).height(Length::Fill)])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
