// SPDX-License-Identifier: MPL-2.0
//! Console layout: video column on the left, controls and readouts on the right.

use super::{Message, State};
use crate::config::TRACE_PANE_LINES;
use crate::domain::{MoveDirection, SpeedLimit, TelemetryField, VideoChannel};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, column, container, radio, row, slider, text, Column, Row};
use iced::{Element, Length};

/// Contextual data needed to render the console.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let left = column![
        video_section(&ctx),
        playback_section(&ctx),
        trace_section(&ctx),
    ]
    .spacing(spacing::MD)
    .width(Length::Fixed(sizing::VIDEO_WIDTH + 2.0 * spacing::MD));

    let right = column![
        motion_section(&ctx),
        limits_section(&ctx),
        readout_section(&ctx, "section-sensors", &TelemetryField::SENSORS),
        readout_section(&ctx, "section-status", &TelemetryField::STATUS),
    ]
    .spacing(spacing::MD)
    .width(Length::Fill);

    row![left, right]
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .into()
}

fn section<'a>(title: String, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(
        column![text(title).size(typography::TITLE_SM), body.into()].spacing(spacing::SM),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn video_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.state.active_channel();

    let radios = VideoChannel::ALL
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, &channel| {
            row.push(radio(
                ctx.i18n.tr(channel.label_key()),
                channel,
                Some(active),
                Message::ChannelToggled,
            ))
        });

    let surface = ctx.state.surface().view(
        ctx.i18n.tr("video-surface-caption"),
        ctx.i18n.tr(active.label_key()),
    );

    section(
        ctx.i18n.tr("section-video"),
        column![radios, surface].spacing(spacing::SM),
    )
}

fn playback_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let transport = |key: &str, message: Message| {
        button(text(ctx.i18n.tr(key)))
            .on_press(message)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::unselected)
    };

    section(
        ctx.i18n.tr("section-playback"),
        row![
            transport("video-play", Message::Play),
            transport("video-pause", Message::Pause),
            transport("video-stop", Message::Stop),
        ]
        .spacing(spacing::XS),
    )
}

fn trace_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let lines = ctx.state.trace().recent(TRACE_PANE_LINES).into_iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, entry| {
            let line = text(entry.display_line()).size(typography::CAPTION);
            column.push(if entry.event.is_warning() {
                line.color(palette::WARNING_500)
            } else {
                line
            })
        },
    );

    section(ctx.i18n.tr("section-trace"), lines)
}

fn motion_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let pad = |direction: MoveDirection| {
        button(
            text(ctx.i18n.tr(direction.label_key()))
                .width(Length::Fill)
                .center(),
        )
        .on_press(Message::Move(direction))
        .width(Length::Fixed(sizing::PAD_BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::unselected)
    };

    let grid = column![
        row![pad(MoveDirection::Forward)],
        row![pad(MoveDirection::Left), pad(MoveDirection::Right)].spacing(spacing::XS),
        row![pad(MoveDirection::Backward)],
    ]
    .spacing(spacing::XS)
    .align_x(iced::Alignment::Center)
    .width(Length::Fill);

    section(ctx.i18n.tr("section-motion"), grid)
}

fn limits_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let limits = ctx.state.speed_limits();

    let rows = SpeedLimit::ALL
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, &limit| {
            let range = limit.range();
            let control = slider(range.min..=range.max, limits.raw(limit), move |raw| {
                Message::SpeedLimitChanged(limit, raw)
            })
            .width(Length::Fill);

            column.push(
                row![
                    text(ctx.i18n.tr(limit.label_key()))
                        .size(typography::BODY)
                        .width(Length::FillPortion(2)),
                    container(control).width(Length::FillPortion(3)),
                    readout(limits.value(limit), limit.unit()),
                ]
                .spacing(spacing::SM)
                .align_y(Vertical::Center),
            )
        });

    section(ctx.i18n.tr("section-limits"), rows)
}

fn readout_section<'a>(
    ctx: &ViewContext<'a>,
    title_key: &str,
    fields: &[TelemetryField],
) -> Element<'a, Message> {
    let telemetry = ctx.state.telemetry();

    let rows = fields
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, &field| {
            column.push(
                row![
                    text(ctx.i18n.tr(field.label_key()))
                        .size(typography::BODY)
                        .width(Length::Fill),
                    readout(telemetry.get(field), field.unit()),
                ]
                .spacing(spacing::SM)
                .align_y(Vertical::Center),
            )
        });

    section(ctx.i18n.tr(title_key), rows)
}

/// Numeric display with a unit suffix.
fn readout<'a>(value: f64, unit: &str) -> Element<'a, Message> {
    container(text(format_readout(value, unit)).size(typography::READOUT))
        .padding([spacing::XXS, spacing::XS])
        .align_right(Length::Fixed(sizing::READOUT_WIDTH + 2.0 * spacing::XS))
        .style(styles::container::readout)
        .into()
}

fn format_readout(value: f64, unit: &str) -> String {
    format!("{value:.2} {unit}")
}
