//! Fixed navigation bar: logo, section links, theme toggle, and the thin
//! scroll progress bar underneath.

use iced::widget::{button, column, container, horizontal_space, progress_bar, row, text};
use iced::{Background, Border, Color, Element, Length, Theme};

use folio_core::profile::OWNER_INITIALS;
use folio_core::section::{SectionId, SECTIONS};
use folio_core::ThemePreference;

use crate::app::{App, Message};
use crate::style;
use crate::theme::Palette;

impl App {
    pub fn view_navbar(&self, palette: Palette) -> Element<'_, Message> {
        let logo = button(text(OWNER_INITIALS).size(20).color(palette.accent))
            .on_press(Message::NavClicked(SectionId::Home))
            .style(|_, _| button::Style::default())
            .padding([8.0, 12.0]);

        let mut links = row![].spacing(8).align_y(iced::Alignment::Center);
        for section in &SECTIONS {
            links = links.push(self.nav_link(section.id, section.label, palette));
        }

        let theme_icon = match self.theme.preference() {
            ThemePreference::Dark => "☀",
            ThemePreference::Light => "🌙",
        };
        let theme_toggle = button(text(theme_icon).size(16))
            .on_press(Message::ToggleTheme)
            .style(super::ghost_button(palette))
            .padding([8.0, 12.0]);

        let bar = container(
            row![logo, horizontal_space(), links, horizontal_space(), theme_toggle]
                .align_y(iced::Alignment::Center)
                .padding([0.0, 16.0]),
        )
        .width(Length::Fill)
        .height(Length::Fixed(style::NAV_HEIGHT))
        .style(nav_background(self.nav_solid, palette));

        let progress = progress_bar(0.0..=1.0, self.scroll_progress)
            .height(Length::Fixed(style::PROGRESS_BAR_HEIGHT))
            .style(move |_| progress_bar::Style {
                background: Background::Color(Color::TRANSPARENT),
                bar: Background::Color(palette.accent),
                border: Border::default(),
            });

        column![bar, progress].into()
    }

    fn nav_link(
        &self,
        id: SectionId,
        label: &'static str,
        palette: Palette,
    ) -> Element<'_, Message> {
        let active = self.active_section == id;
        button(text(label).size(14))
            .on_press(Message::NavClicked(id))
            .padding([8.0, 12.0])
            .style(move |_: &Theme, status| {
                let highlighted = active || matches!(status, button::Status::Hovered);
                button::Style {
                    background: active.then(|| Background::Color(palette.accent_soft)),
                    text_color: if highlighted {
                        palette.accent
                    } else {
                        palette.text_secondary
                    },
                    border: Border {
                        radius: 6.0.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                }
            })
            .into()
    }

}

/// Transparent until the page scrolls past the threshold, then solid with
/// a hairline border.
fn nav_background(solid: bool, palette: Palette) -> impl Fn(&Theme) -> container::Style {
    move |_| {
        if solid {
            container::Style {
                background: Some(Background::Color(palette.nav_solid)),
                border: Border {
                    color: palette.border,
                    width: 1.0,
                    ..Border::default()
                },
                ..Default::default()
            }
        } else {
            container::Style::default()
        }
    }
}
