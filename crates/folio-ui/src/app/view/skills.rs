//! Skills section: category filter pills over a grid of proficiency bars.

use iced::widget::{column, container, horizontal_space, progress_bar, row, text};
use iced::{Background, Border, Element, Length};

use folio_core::profile::{filter_skills, Skill, SKILL_FILTERS};
use folio_core::section::SectionId;

use crate::app::{App, Message};
use crate::components::section_header;
use crate::theme::Palette;

impl App {
    pub fn view_skills(&self, palette: Palette) -> Element<'_, Message> {
        let mut pills = row![].spacing(8);
        for category in SKILL_FILTERS {
            pills = pills.push(super::filter_pill(
                *category,
                self.skill_category == category.id,
                Message::SkillCategorySelected(category.id),
                palette,
            ));
        }

        let visible = filter_skills(self.skill_category);
        let mut grid = column![].spacing(14);
        for chunk in visible.chunks(3) {
            let mut cells = row![].spacing(20);
            for skill in chunk {
                cells = cells.push(skill_bar(skill, palette));
            }
            // Pad the last row so earlier cells keep their width.
            for _ in chunk.len()..3 {
                cells = cells.push(horizontal_space().width(Length::Fill));
            }
            grid = grid.push(cells);
        }

        let content = column![
            section_header(
                "Skills & Expertise",
                "Technical expertise and programming skills for building scalable, \
                 high-performance web applications.",
                palette,
            ),
            container(pills).center_x(Length::Fill),
            grid,
        ]
        .spacing(24);

        super::section_shell(SectionId::Skills, palette, true, content.into())
    }
}

fn skill_bar(skill: &'static Skill, palette: Palette) -> Element<'static, Message> {
    let label = row![
        text(skill.name).size(13).color(palette.text_primary),
        horizontal_space(),
        text(format!("{}%", skill.level)).size(12).color(palette.text_muted),
    ];

    let bar = progress_bar(0.0..=100.0, f32::from(skill.level))
        .height(Length::Fixed(8.0))
        .style(move |_| progress_bar::Style {
            background: Background::Color(palette.surface_hover),
            bar: Background::Color(palette.accent),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
        });

    column![label, bar].spacing(4).width(Length::Fill).into()
}
