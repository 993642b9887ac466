pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;

use iced::widget::{button, column, container, mouse_area, scrollable, stack, text, Space};
use iced::{Background, Border, Color, Element, Length, Theme};

use folio_core::section::SectionId;

use crate::app::{page_scroll_id, App, Message, ToastKind};
use crate::style;
use crate::theme::Palette;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = Palette::of(self.theme.preference());

        let page = scrollable(column![
            self.view_hero(palette),
            self.view_about(palette),
            self.view_experience(palette),
            self.view_skills(palette),
            self.view_projects(palette),
            self.view_contact(palette),
            self.view_footer(palette),
        ])
        .id(page_scroll_id())
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

        let content = column![self.view_navbar(palette), page];

        let base: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.background)),
                ..Default::default()
            })
            .into();

        let with_modal: Element<'_, Message> = if let Some(index) = self.selected_project {
            stack![
                base,
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(|_| container::Style {
                            background: Some(Background::Color(Color::from_rgba(
                                0.0, 0.0, 0.0, 0.5
                            ))),
                            ..Default::default()
                        })
                )
                .on_press(Message::CloseProjectDetails),
                self.view_project_details(index, palette),
            ]
            .into()
        } else {
            base
        };

        match &self.toast {
            Some(toast) => stack![with_modal, self.view_toast(toast, palette)].into(),
            None => with_modal,
        }
    }

    fn view_toast(&self, toast: &super::Toast, palette: Palette) -> Element<'_, Message> {
        let stripe = match toast.kind {
            ToastKind::Success => palette.success,
            ToastKind::Error => palette.destructive,
        };

        let card = container(
            column![
                text(toast.title.clone()).size(15).color(palette.text_primary),
                text(toast.body.clone()).size(13).color(palette.text_secondary),
            ]
            .spacing(4),
        )
        .padding(16)
        .max_width(380)
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.surface)),
            border: Border {
                color: stripe,
                width: 1.5,
                radius: 8.0.into(),
            },
            ..Default::default()
        });

        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Right)
            .align_y(iced::alignment::Vertical::Bottom)
            .padding(24)
            .into()
    }
}

/// Wraps a section's content in its fixed-height slot. `alt` gives the
/// alternating stripe background the page uses for rhythm.
pub(crate) fn section_shell(
    id: SectionId,
    palette: Palette,
    alt: bool,
    content: Element<'_, Message>,
) -> Element<'_, Message> {
    let background = if alt { palette.surface } else { palette.background };
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(style::section_height(id)))
        .padding(style::SECTION_PADDING)
        .style(move |_| container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        })
        .into()
}

/// A category filter pill; filled while active.
pub(crate) fn filter_pill(
    category: folio_core::profile::Category,
    active: bool,
    on_press: Message,
    palette: Palette,
) -> Element<'static, Message> {
    button(text(category.label).size(13))
        .on_press(on_press)
        .padding([8.0, 16.0])
        .style(move |_: &Theme, status| {
            let hovered = matches!(status, button::Status::Hovered);
            button::Style {
                background: Some(Background::Color(if active {
                    palette.accent
                } else if hovered {
                    palette.surface_hover
                } else {
                    palette.surface
                })),
                text_color: if active {
                    Color::WHITE
                } else {
                    palette.text_secondary
                },
                border: Border {
                    color: palette.border,
                    width: if active { 0.0 } else { 1.0 },
                    radius: 16.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

/// Filled accent button.
pub(crate) fn primary_button(
    palette: Palette,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: 0.85,
                ..palette.accent
            },
            button::Status::Disabled => palette.accent_soft,
            _ => palette.accent,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: Color::WHITE,
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Borderless button that lights up on hover.
pub(crate) fn ghost_button(palette: Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => Some(palette.surface_hover),
            _ => None,
        };
        button::Style {
            background: bg.map(Background::Color),
            text_color: palette.text_secondary,
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Outlined button, used where a filled one would shout.
pub(crate) fn outline_button(palette: Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => Some(palette.surface_hover),
            _ => None,
        };
        button::Style {
            background: bg.map(Background::Color),
            text_color: palette.text_primary,
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }
}
