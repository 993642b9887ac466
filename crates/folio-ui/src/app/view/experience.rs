//! Experience timeline, one card per position.

use iced::widget::{column, container, row, text, Row};
use iced::{Background, Border, Element, Length};

use folio_core::profile::{ExperienceItem, EXPERIENCES};
use folio_core::section::SectionId;

use crate::app::{App, Message};
use crate::components::{badge, section_header};
use crate::theme::Palette;

impl App {
    pub fn view_experience(&self, palette: Palette) -> Element<'_, Message> {
        let mut cards = row![].spacing(16);
        for item in EXPERIENCES {
            cards = cards.push(experience_card(item, palette));
        }

        let content = column![
            section_header(
                "Professional Experience",
                "My professional development journey as a Senior Full-Stack Developer, \
                 building scalable applications and delivering exceptional results for \
                 clients worldwide.",
                palette,
            ),
            cards,
        ]
        .spacing(28);

        super::section_shell(SectionId::Experience, palette, false, content.into())
    }
}

fn experience_card(item: &'static ExperienceItem, palette: Palette) -> Element<'static, Message> {
    let period = format!("{} - {} · {}", item.start, item.end, item.location);

    let mut highlights = column![].spacing(6);
    for highlight in item.highlights.iter().take(3) {
        highlights = highlights.push(
            row![
                text("•").size(13).color(palette.accent),
                text(*highlight).size(12).color(palette.text_secondary),
            ]
            .spacing(6),
        );
    }

    let mut tags: Row<'static, Message> = row![].spacing(6);
    for tech in item.technologies.iter().take(4) {
        tags = tags.push(badge(tech, palette));
    }

    container(
        column![
            text(item.position).size(16).color(palette.text_primary),
            text(item.company).size(14).color(palette.accent),
            text(period).size(12).color(palette.text_muted),
            highlights,
            tags,
        ]
        .spacing(10),
    )
    .padding(18)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    })
    .into()
}
