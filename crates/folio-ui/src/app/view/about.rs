//! About section: the journey paragraphs, value cards, and the
//! author-supplied headline numbers.

use iced::widget::{button, column, container, row, text};
use iced::{Background, Border, Element, Length};

use folio_core::profile::{ABOUT_PARAGRAPHS, PERSONAL_STATS, VALUES};
use folio_core::section::SectionId;

use crate::app::{App, Message};
use crate::components::{section_header, stat_tile};
use crate::theme::Palette;

impl App {
    pub fn view_about(&self, palette: Palette) -> Element<'_, Message> {
        let mut story = column![text("My Journey").size(22).color(palette.text_primary)]
            .spacing(14)
            .width(Length::FillPortion(1));
        for paragraph in ABOUT_PARAGRAPHS {
            story = story.push(text(*paragraph).size(14).color(palette.text_secondary));
        }
        story = story.push(
            button(text("Download Resume").size(14))
                .on_press(Message::RequestResume)
                .padding([10.0, 18.0])
                .style(super::outline_button(palette)),
        );

        let mut values = column![].spacing(12).width(Length::FillPortion(1));
        for pair in VALUES.chunks(2) {
            let mut cards = row![].spacing(12);
            for value in pair {
                cards = cards.push(
                    container(
                        column![
                            text(value.title).size(15).color(palette.accent),
                            text(value.description).size(12).color(palette.text_secondary),
                        ]
                        .spacing(6),
                    )
                    .padding(14)
                    .width(Length::Fill)
                    .style(move |_| container::Style {
                        background: Some(Background::Color(palette.surface)),
                        border: Border {
                            color: palette.border,
                            width: 1.0,
                            radius: 8.0.into(),
                        },
                        ..Default::default()
                    }),
                );
            }
            values = values.push(cards);
        }

        let mut stats = row![].spacing(12);
        for stat in PERSONAL_STATS {
            stats = stats.push(stat_tile(stat.value, stat.label, palette));
        }

        let content = column![
            section_header(
                "About Me",
                "Senior Full-Stack Developer specializing in Laravel, Vue.js, and React \
                 with expertise in building scalable web applications.",
                palette,
            ),
            row![story, values].spacing(32),
            stats,
        ]
        .spacing(28);

        super::section_shell(SectionId::About, palette, true, content.into())
    }
}
