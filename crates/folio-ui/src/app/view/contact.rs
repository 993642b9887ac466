//! Contact section: info card on the left, the form on the right.

use iced::widget::{
    button, column, container, horizontal_space, row, text, text_editor, text_input,
};
use iced::{Background, Border, Element, Length, Theme};

use folio_core::profile::{CONTACT_EMAIL, LOCATION, PHONE_DISPLAY, PHONE_URI};
use folio_core::section::SectionId;
use folio_core::ContactStatus;

use crate::app::{App, Message};
use crate::components::section_header;
use crate::theme::Palette;

impl App {
    pub fn view_contact(&self, palette: Palette) -> Element<'_, Message> {
        let content = column![
            section_header(
                "Get In Touch",
                "Ready to build something amazing? Let's discuss your next project and \
                 turn your vision into a scalable, high-performance solution.",
                palette,
            ),
            row![self.contact_info(palette), self.contact_form(palette)].spacing(24),
        ]
        .spacing(24);

        super::section_shell(SectionId::Contact, palette, true, content.into())
    }

    fn contact_info(&self, palette: Palette) -> Element<'_, Message> {
        let rows = column![
            info_row(
                "Email",
                CONTACT_EMAIL,
                Some(format!("mailto:{}", CONTACT_EMAIL)),
                palette,
            ),
            info_row("Phone", PHONE_DISPLAY, Some(PHONE_URI.to_string()), palette),
            info_row("Location", LOCATION, None, palette),
        ]
        .spacing(10);

        let blurb = column![
            text("Let's Connect").size(16).color(palette.text_primary),
            text(
                "Looking for a skilled full-stack developer to bring your vision to \
                 life? I specialize in Laravel, Vue.js, and React, creating robust \
                 backend systems and stunning, high-performance user interfaces."
            )
            .size(13)
            .color(palette.text_secondary),
            text("💻 Full-stack development expertise").size(13).color(palette.text_muted),
            text("⏰ Quick response within 24 hours").size(13).color(palette.text_muted),
            text("🌍 Available for remote work worldwide").size(13).color(palette.text_muted),
        ]
        .spacing(8);

        card(
            column![
                text("Contact Information").size(18).color(palette.text_primary),
                text("Feel free to reach out through any of these channels.")
                    .size(13)
                    .color(palette.text_secondary),
                rows,
                blurb,
            ]
            .spacing(16)
            .into(),
            palette,
        )
    }

    fn contact_form(&self, palette: Palette) -> Element<'_, Message> {
        if self.contact.status == ContactStatus::Sent {
            return card(
                container(
                    column![
                        text("Message Sent!").size(20).color(palette.success),
                        text("Thank you for reaching out. I'll get back to you soon.")
                            .size(14)
                            .color(palette.text_secondary),
                        button(text("Send Another Message").size(14))
                            .on_press(Message::SendAnother)
                            .padding([10.0, 18.0])
                            .style(super::outline_button(palette)),
                    ]
                    .spacing(14)
                    .align_x(iced::Alignment::Center),
                )
                .center(Length::Fill)
                .into(),
                palette,
            );
        }

        let errors = &self.contact.errors;

        let name_field = labeled_input(
            "Name *",
            text_input("Your full name", &self.contact.form.name)
                .on_input(Message::NameChanged)
                .padding(10)
                .style(input_style(palette, errors.name.is_some()))
                .into(),
            errors.name,
            palette,
        );

        let email_field = labeled_input(
            "Email *",
            text_input("your.email@example.com", &self.contact.form.email)
                .on_input(Message::EmailChanged)
                .padding(10)
                .style(input_style(palette, errors.email.is_some()))
                .into(),
            errors.email,
            palette,
        );

        let subject_field = labeled_input(
            "Subject *",
            text_input("What's this about?", &self.contact.form.subject)
                .on_input(Message::SubjectChanged)
                .padding(10)
                .style(input_style(palette, errors.subject.is_some()))
                .into(),
            errors.subject,
            palette,
        );

        let message_error = errors.message;
        let message_field = column![
            text("Message *").size(13).color(palette.text_secondary),
            text_editor(&self.message_editor)
                .placeholder("Tell me about your project or just say hello...")
                .on_action(Message::MessageEdited)
                .height(Length::Fixed(120.0))
                .style(editor_style(palette, message_error.is_some())),
            row![
                error_text(message_error, palette),
                horizontal_space(),
                text(format!("{} characters", self.contact.form.message.chars().count()))
                    .size(11)
                    .color(palette.text_muted),
            ],
        ]
        .spacing(4);

        let composing = self.contact.status == ContactStatus::Composing;
        let submit = button(
            text(if composing { "Sending..." } else { "Send Message" }).size(15),
        )
        .on_press_maybe((!composing).then_some(Message::SubmitContact))
        .padding([12.0, 0.0])
        .width(Length::Fill)
        .style(super::primary_button(palette));

        card(
            column![
                text("Send a Message").size(18).color(palette.text_primary),
                text("Fill out the form below and I'll get back to you as soon as possible.")
                    .size(13)
                    .color(palette.text_secondary),
                row![name_field, email_field].spacing(12),
                subject_field,
                message_field,
                submit,
                container(
                    text("By sending this message, you agree that I may contact you \
                          regarding your inquiry.")
                        .size(11)
                        .color(palette.text_muted)
                )
                .center_x(Length::Fill),
            ]
            .spacing(14)
            .into(),
            palette,
        )
    }
}

fn card(content: Element<'_, Message>, palette: Palette) -> Element<'_, Message> {
    container(content)
        .padding(22)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.background)),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn info_row(
    label: &'static str,
    value: &'static str,
    link: Option<String>,
    palette: Palette,
) -> Element<'static, Message> {
    let body = column![
        text(label).size(13).color(palette.text_primary),
        text(value).size(13).color(palette.text_secondary),
    ]
    .spacing(2);

    match link {
        Some(url) => button(body)
            .on_press(Message::OpenExternal(url))
            .padding(10)
            .width(Length::Fill)
            .style(super::ghost_button(palette))
            .into(),
        None => container(body).padding(10).width(Length::Fill).into(),
    }
}

fn labeled_input<'a>(
    label: &'static str,
    input: Element<'a, Message>,
    error: Option<&'static str>,
    palette: Palette,
) -> Element<'a, Message> {
    column![
        text(label).size(13).color(palette.text_secondary),
        input,
        error_text(error, palette),
    ]
    .spacing(4)
    .width(Length::Fill)
    .into()
}

fn error_text(error: Option<&'static str>, palette: Palette) -> Element<'static, Message> {
    match error {
        Some(message) => text(message).size(11).color(palette.destructive).into(),
        None => horizontal_space().height(Length::Shrink).into(),
    }
}

fn input_style(
    palette: Palette,
    errored: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_, status| {
        let border_color = if errored {
            palette.destructive
        } else if matches!(status, text_input::Status::Focused) {
            palette.accent
        } else {
            palette.border
        };
        text_input::Style {
            background: Background::Color(palette.surface),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 6.0.into(),
            },
            icon: palette.text_muted,
            placeholder: palette.text_muted,
            value: palette.text_primary,
            selection: palette.accent_soft,
        }
    }
}

fn editor_style(
    palette: Palette,
    errored: bool,
) -> impl Fn(&Theme, text_editor::Status) -> text_editor::Style {
    move |_, status| {
        let border_color = if errored {
            palette.destructive
        } else if matches!(status, text_editor::Status::Focused) {
            palette.accent
        } else {
            palette.border
        };
        text_editor::Style {
            background: Background::Color(palette.surface),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 6.0.into(),
            },
            icon: palette.text_muted,
            placeholder: palette.text_muted,
            value: palette.text_primary,
            selection: palette.accent_soft,
        }
    }
}
