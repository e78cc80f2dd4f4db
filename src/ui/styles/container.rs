// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the console sections and the settings page.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark box with bright digits, used by the numeric readouts.
pub fn readout(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::READOUT_DIGITS),
        border: Border {
            color: palette::GRAY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Video area. Black regardless of theme.
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::GRAY_200),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder frame shown until the video surface replaces it.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
