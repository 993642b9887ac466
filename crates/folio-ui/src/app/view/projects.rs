//! Projects section: filterable cards plus the details overlay.

use iced::widget::{
    button, column, container, horizontal_space, row, scrollable, text, Row,
};
use iced::{Background, Border, Element, Length};

use folio_core::profile::{Project, ALL_CATEGORY, PROJECTS, PROJECT_CATEGORIES};
use folio_core::section::SectionId;

use crate::app::{App, Message};
use crate::components::{badge, section_header};
use crate::theme::Palette;

impl App {
    pub fn view_projects(&self, palette: Palette) -> Element<'_, Message> {
        let mut pills = row![].spacing(8);
        for category in PROJECT_CATEGORIES {
            pills = pills.push(super::filter_pill(
                *category,
                self.project_category == category.id,
                Message::ProjectCategorySelected(category.id),
                palette,
            ));
        }

        let mut cards = row![].spacing(16);
        for (index, project) in PROJECTS.iter().enumerate() {
            if self.project_category != ALL_CATEGORY && project.category != self.project_category
            {
                continue;
            }
            cards = cards.push(project_card(index, project, palette));
        }

        let content = column![
            section_header(
                "Featured Projects",
                "A selection of production systems I have designed, built, and shipped.",
                palette,
            ),
            container(pills).center_x(Length::Fill),
            cards,
        ]
        .spacing(24);

        super::section_shell(SectionId::Projects, palette, false, content.into())
    }

    /// The details modal for `PROJECTS[index]`; rendered above a dimmed
    /// backdrop by the caller.
    pub fn view_project_details(&self, index: usize, palette: Palette) -> Element<'_, Message> {
        let Some(project) = PROJECTS.get(index) else {
            return horizontal_space().into();
        };

        let mut features = column![].spacing(5);
        for feature in project.features {
            features = features.push(
                row![
                    text("✓").size(13).color(palette.success),
                    text(*feature).size(13).color(palette.text_secondary),
                ]
                .spacing(8),
            );
        }

        let mut tags: Row<'_, Message> = row![].spacing(6);
        for tech in project.technologies {
            tags = tags.push(badge(tech, palette));
        }

        let mut actions = row![].spacing(10);
        if let Some(url) = project.live_url {
            actions = actions.push(
                button(text("Live Demo").size(14))
                    .on_press(Message::OpenExternal(url.to_string()))
                    .padding([10.0, 18.0])
                    .style(super::primary_button(palette)),
            );
        }
        actions = actions.push(
            button(text("Code").size(14))
                .on_press(Message::RequestProjectSource(index))
                .padding([10.0, 18.0])
                .style(super::outline_button(palette)),
        );
        actions = actions.push(horizontal_space());
        actions = actions.push(
            button(text("Close").size(14))
                .on_press(Message::CloseProjectDetails)
                .padding([10.0, 18.0])
                .style(super::ghost_button(palette)),
        );

        let body = column![
            row![
                text(project.title).size(24).color(palette.text_primary),
                horizontal_space(),
                text(project.completed).size(13).color(palette.text_muted),
            ],
            text(project.full_description).size(14).color(palette.text_secondary),
            stats_line(project, palette),
            tags,
            text("Key Features").size(16).color(palette.text_primary),
            scrollable(features).height(Length::Fixed(160.0)),
            actions,
        ]
        .spacing(14);

        let card = container(body)
            .padding(28)
            .max_width(680)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.surface)),
                border: Border {
                    color: palette.border,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                ..Default::default()
            });

        container(card).center(Length::Fill).into()
    }
}

fn project_card(index: usize, project: &'static Project, palette: Palette) -> Element<'static, Message> {
    let mut tags: Row<'static, Message> = row![].spacing(6);
    for tech in project.technologies.iter().take(3) {
        tags = tags.push(badge(tech, palette));
    }

    let mut actions = row![].spacing(8);
    actions = actions.push(
        button(text("Details").size(13))
            .on_press(Message::ShowProjectDetails(index))
            .padding([8.0, 14.0])
            .style(super::primary_button(palette)),
    );
    if let Some(url) = project.live_url {
        actions = actions.push(
            button(text("Live Demo").size(13))
                .on_press(Message::OpenExternal(url.to_string()))
                .padding([8.0, 14.0])
                .style(super::outline_button(palette)),
        );
    }
    actions = actions.push(
        button(text("Code").size(13))
            .on_press(Message::RequestProjectSource(index))
            .padding([8.0, 14.0])
            .style(super::outline_button(palette)),
    );

    container(
        column![
            row![
                text(project.title).size(17).color(palette.text_primary),
                horizontal_space(),
                text(project.completed).size(12).color(palette.text_muted),
            ],
            text(project.description).size(13).color(palette.text_secondary),
            stats_line(project, palette),
            tags,
            actions,
        ]
        .spacing(12),
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

fn stats_line(project: &'static Project, palette: Palette) -> Element<'static, Message> {
    text(format!(
        "★ {}   ⑂ {}   {} commits",
        project.stats.stars, project.stats.forks, project.stats.commits
    ))
    .size(12)
    .color(palette.text_muted)
    .into()
}
