//! The landing section.

use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

use folio_core::profile::{
    CONTACT_EMAIL, GITHUB_URL, HERO_INTRO, LINKEDIN_URL, OWNER_NAME, TAGLINE,
};
use folio_core::section::SectionId;

use crate::app::{App, Message};
use crate::theme::Palette;

impl App {
    pub fn view_hero(&self, palette: Palette) -> Element<'_, Message> {
        let greeting = row![
            text("Hi, I'm ").size(44).color(palette.text_primary),
            text(OWNER_NAME).size(44).color(palette.accent),
        ];

        let socials = row![
            social_button("GitHub", GITHUB_URL.to_string(), palette),
            social_button("LinkedIn", LINKEDIN_URL.to_string(), palette),
            social_button("Email", format!("mailto:{}", CONTACT_EMAIL), palette),
        ]
        .spacing(10);

        let actions = row![
            button(text("View My Work").size(15))
                .on_press(Message::NavClicked(SectionId::Projects))
                .padding([12.0, 24.0])
                .style(super::primary_button(palette)),
            button(text("Download Resume").size(15))
                .on_press(Message::RequestResume)
                .padding([12.0, 24.0])
                .style(super::outline_button(palette)),
        ]
        .spacing(12);

        let scroll_cue = button(text("↓").size(22))
            .on_press(Message::NavClicked(SectionId::About))
            .padding([8.0, 14.0])
            .style(super::ghost_button(palette));

        let content = column![
            greeting,
            text(TAGLINE).size(22).color(palette.text_secondary),
            container(text(HERO_INTRO).size(16).color(palette.text_secondary))
                .max_width(560),
            actions,
            socials,
            scroll_cue,
        ]
        .spacing(20)
        .align_x(iced::Alignment::Center);

        super::section_shell(
            SectionId::Home,
            palette,
            false,
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill)
                .into(),
        )
    }
}

fn social_button(label: &'static str, url: String, palette: Palette) -> Element<'static, Message> {
    button(text(label).size(13))
        .on_press(Message::OpenExternal(url))
        .padding([8.0, 14.0])
        .style(super::ghost_button(palette))
        .into()
}
