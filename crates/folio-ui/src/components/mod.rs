//! Small presentational widgets shared across sections.

use iced::widget::{column, container, text};
use iced::{Background, Border, Element, Length};

use crate::theme::Palette;

/// A rounded technology tag.
pub fn badge<'a, M: 'a>(label: &'a str, palette: Palette) -> Element<'a, M> {
    container(text(label).size(12).color(palette.accent))
        .padding([4.0, 10.0])
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.accent_soft)),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}

/// Centered section title with its lead-in paragraph.
pub fn section_header<'a, M: 'a>(
    title: &'a str,
    subtitle: &'a str,
    palette: Palette,
) -> Element<'a, M> {
    container(
        column![
            text(title).size(32).color(palette.text_primary),
            text(subtitle).size(16).color(palette.text_secondary),
        ]
        .spacing(10)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

/// A big-number statistic tile ("50+ Projects Completed").
pub fn stat_tile<'a, M: 'a>(
    value: &'a str,
    label: &'a str,
    palette: Palette,
) -> Element<'a, M> {
    container(
        column![
            text(value).size(28).color(palette.accent),
            text(label).size(13).color(palette.text_secondary),
        ]
        .spacing(4)
        .align_x(iced::Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(move |_| container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    })
    .into()
}
