//! Footer: branding, quick links, contact details, back-to-top.

use chrono::Datelike;
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Background, Border, Element, Length};

use folio_core::profile::{
    CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL, LOCATION, OWNER_NAME, PHONE_DISPLAY,
};
use folio_core::section::SECTIONS;

use crate::app::{App, Message};
use crate::style;
use crate::theme::Palette;

impl App {
    pub fn view_footer(&self, palette: Palette) -> Element<'_, Message> {
        let branding = column![
            text(OWNER_NAME).size(18).color(palette.accent),
            text(
                "Senior Full-Stack Developer specializing in Laravel, Vue.js, and React. \
                 Building scalable, high-performance web applications that drive results."
            )
            .size(12)
            .color(palette.text_secondary),
            row![
                link_button("GitHub", GITHUB_URL.to_string(), palette),
                link_button("LinkedIn", LINKEDIN_URL.to_string(), palette),
                link_button("Email", format!("mailto:{}", CONTACT_EMAIL), palette),
            ]
            .spacing(8),
        ]
        .spacing(10)
        .width(Length::FillPortion(1));

        // Quick links skip Home; the back-to-top button covers it.
        let mut quick_links = column![text("Quick Links").size(14).color(palette.text_primary)]
            .spacing(6)
            .width(Length::FillPortion(1));
        for section in SECTIONS.iter().skip(1) {
            quick_links = quick_links.push(
                button(text(section.label).size(13))
                    .on_press(Message::NavClicked(section.id))
                    .padding([2.0, 0.0])
                    .style(super::ghost_button(palette)),
            );
        }

        let details = column![
            text("Contact").size(14).color(palette.text_primary),
            text(CONTACT_EMAIL).size(13).color(palette.text_secondary),
            text(PHONE_DISPLAY).size(13).color(palette.text_secondary),
            text(LOCATION).size(13).color(palette.text_secondary),
        ]
        .spacing(6)
        .width(Length::FillPortion(1));

        let year = chrono::Local::now().year();
        let bottom = row![
            text(format!("© {} {}. Built with Rust.", year, OWNER_NAME))
                .size(12)
                .color(palette.text_muted),
            horizontal_space(),
            button(text("↑ Back to top").size(13))
                .on_press(Message::ScrollToTop)
                .padding([6.0, 12.0])
                .style(super::outline_button(palette)),
        ]
        .align_y(iced::Alignment::Center);

        container(
            column![row![branding, quick_links, details].spacing(32), bottom].spacing(24),
        )
        .width(Length::Fill)
        .height(Length::Fixed(style::FOOTER_HEIGHT))
        .padding(style::SECTION_PADDING)
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.surface)),
            border: Border {
                color: palette.border,
                width: 1.0,
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
    }
}

fn link_button(label: &'static str, url: String, palette: Palette) -> Element<'static, Message> {
    button(text(label).size(12))
        .on_press(Message::OpenExternal(url))
        .padding([4.0, 8.0])
        .style(super::ghost_button(palette))
        .into()
}
