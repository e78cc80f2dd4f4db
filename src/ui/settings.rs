// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display language and theme mode.
//!
//! The screen holds no state of its own. It renders the current choices and
//! turns clicks into [`Event`]s; the application applies and persists them.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    BackToConsole,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    BackToConsole,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeSelected(mode),
        Message::BackToConsole => Event::BackToConsole,
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let back = button(text(i18n.tr("settings-back-button")))
        .on_press(Message::BackToConsole)
        .style(styles::button::unselected);

    let title = text(i18n.tr("settings-title")).size(typography::TITLE_LG);

    let languages = i18n
        .available_locales
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, locale| {
            row.push(
                button(text(language_label(i18n, locale)))
                    .on_press(Message::LanguageSelected(locale.clone()))
                    .style(styles::button::toggle(i18n.current_locale() == locale)),
            )
        });

    let themes = ThemeMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &mode| {
            row.push(
                button(text(i18n.tr(mode.label_key())))
                    .on_press(Message::ThemeModeSelected(mode))
                    .style(styles::button::toggle(ctx.theme_mode == mode)),
            )
        });

    let panel = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("select-language-label")).size(typography::TITLE_SM))
        .push(languages)
        .push(text(i18n.tr("select-theme-label")).size(typography::TITLE_SM))
        .push(themes);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(title)
        .push(
            container(panel)
                .padding(spacing::MD)
                .style(styles::container::panel),
        )
        .push(back);

    content.into()
}

/// "Français (fr)", or the raw tag when no name is translated.
fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let tag = locale.to_string();
    let name = i18n.tr(&format!("language-name-{tag}"));
    if name.starts_with("MISSING:") {
        tag
    } else {
        format!("{name} ({tag})")
    }
}
