// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above the console.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, row, text};
use iced::{Element, Length};

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenSettings,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenSettings,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenSettings => Event::OpenSettings,
    }
}

/// Render the navigation bar.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = text(i18n.tr("window-title"))
        .size(typography::TITLE_SM)
        .width(Length::Fill);

    let settings_button = button(text(i18n.tr("navbar-settings-button")))
        .on_press(Message::OpenSettings)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);

    container(
        row![title, settings_button]
            .spacing(spacing::SM)
            .align_y(Vertical::Center),
    )
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_settings_is_forwarded() {
        assert_eq!(update(Message::OpenSettings), Event::OpenSettings);
    }
}
