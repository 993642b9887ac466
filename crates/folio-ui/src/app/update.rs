use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::text_editor;
use iced::{keyboard, Task};

use folio_core::profile::{
    self, CONTACT_EMAIL, PROJECTS, RESUME_EMAIL, RESUME_REQUEST_BODY, RESUME_REQUEST_SUBJECT,
};
use folio_core::mailto_uri;

use super::{page_scroll_id, App, Message, ToastKind};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavClicked(section) => {
                // Highlight immediately; the scroll event that follows
                // recomputes the same answer from the offset.
                self.active_section = section;
                if let Some(y) = self.tracker.offset_of(section) {
                    tracing::debug!("Navigating to section {:?}", section);
                    return scrollable::scroll_to(
                        page_scroll_id(),
                        AbsoluteOffset { x: 0.0, y },
                    );
                }
            }

            Message::ScrollToTop => {
                return scrollable::scroll_to(page_scroll_id(), AbsoluteOffset::default());
            }

            Message::Scrolled(viewport) => {
                let offset = viewport.absolute_offset().y;
                self.scroll_offset = offset;
                self.nav_solid = self.tracker.scrolled_past(offset);
                self.active_section = self.tracker.active_section(offset);

                let max_scroll = viewport.content_bounds().height - viewport.bounds().height;
                self.scroll_progress = folio_core::scroll_progress(offset, max_scroll);
            }

            Message::ToggleTheme => {
                self.theme.toggle();
            }

            Message::NameChanged(value) => {
                self.contact.form.name = value;
                self.contact.errors.name = None;
            }

            Message::EmailChanged(value) => {
                self.contact.form.email = value;
                self.contact.errors.email = None;
            }

            Message::SubjectChanged(value) => {
                self.contact.form.subject = value;
                self.contact.errors.subject = None;
            }

            Message::MessageEdited(action) => {
                self.message_editor.perform(action);
                self.contact.form.message = self.message_editor.text();
                self.contact.errors.message = None;
            }

            Message::SubmitContact => {
                if let Some(uri) = self.contact.submit(CONTACT_EMAIL) {
                    tracing::info!("Staging contact email via mail client");
                    return Task::perform(
                        async move { open::that(&uri).map_err(|e| e.to_string()) },
                        Message::ComposeFinished,
                    );
                }
                tracing::debug!(
                    "Contact submission blocked by {} field error(s)",
                    self.contact.errors.count()
                );
            }

            Message::ComposeFinished(Ok(())) => {
                self.contact.compose_succeeded();
                self.message_editor = text_editor::Content::new();
                return self.show_toast(
                    ToastKind::Success,
                    "Email client opened!",
                    "Your message has been prepared in your email client. \
                     Please send it to complete the contact.",
                );
            }

            Message::ComposeFinished(Err(e)) => {
                tracing::warn!("Failed to open mail client: {}", e);
                self.contact.compose_failed();
                return self.show_toast(
                    ToastKind::Error,
                    "Unable to open email client",
                    format!("Please contact me directly at {}", CONTACT_EMAIL),
                );
            }

            Message::SendAnother => {
                self.contact.reset();
                self.message_editor = text_editor::Content::new();
            }

            Message::ProjectCategorySelected(category) => {
                self.project_category = category;
            }

            Message::SkillCategorySelected(category) => {
                self.skill_category = category;
            }

            Message::ShowProjectDetails(index) => {
                if index < PROJECTS.len() {
                    self.selected_project = Some(index);
                }
            }

            Message::CloseProjectDetails => {
                self.selected_project = None;
            }

            Message::RequestProjectSource(index) => {
                if let Some(project) = PROJECTS.get(index) {
                    return self.update(Message::OpenExternal(project.source_link()));
                }
            }

            Message::OpenExternal(url) => {
                tracing::debug!("Opening external link: {}", url);
                return Task::perform(
                    async move { open::that(&url).map_err(|e| e.to_string()) },
                    Message::LinkOpened,
                );
            }

            Message::RequestResume => {
                let uri = mailto_uri(RESUME_EMAIL, RESUME_REQUEST_SUBJECT, RESUME_REQUEST_BODY);
                return self.update(Message::OpenExternal(uri));
            }

            Message::LinkOpened(Ok(())) => {}

            Message::LinkOpened(Err(e)) => {
                tracing::warn!("Failed to open link: {}", e);
                return self.show_toast(
                    ToastKind::Error,
                    "Unable to open link",
                    format!("You can reach me at {}", profile::CONTACT_EMAIL),
                );
            }

            Message::ToastExpired(id) => {
                if self.toast.as_ref().is_some_and(|t| t.id == id) {
                    self.toast = None;
                }
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key(key, modifiers);
            }
        }

        Task::none()
    }

    fn handle_key(&mut self, key: keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        match key.as_ref() {
            keyboard::Key::Character("t") if modifiers.command() => {
                self.update(Message::ToggleTheme)
            }
            keyboard::Key::Named(keyboard::key::Named::Home) if modifiers.is_empty() => {
                self.update(Message::ScrollToTop)
            }
            _ => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use folio_core::section::SectionId;
    use folio_core::{ContactForm, ContactStatus, ThemePreference};

    fn app() -> App {
        let (app, _) = App::new(Flags {
            theme_override: Some(ThemePreference::Light),
        });
        app
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Alice".to_string(),
            email: "a@b.com".to_string(),
            subject: "Hello there".to_string(),
            message: "This is a long enough message.".to_string(),
        }
    }

    #[test]
    fn test_nav_click_highlights_section() {
        let mut app = app();
        let _ = app.update(Message::NavClicked(SectionId::Projects));
        assert_eq!(app.active_section, SectionId::Projects);
    }

    #[test]
    fn test_theme_toggle_flips_preference() {
        let mut app = app();
        let before = app.theme.preference();
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme.preference(), before.toggled());
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme.preference(), before);
    }

    #[test]
    fn test_invalid_submission_is_blocked_with_field_errors() {
        let mut app = app();
        let _ = app.update(Message::NameChanged("A".to_string()));
        let _ = app.update(Message::EmailChanged("bad".to_string()));
        let _ = app.update(Message::SubjectChanged("Hi".to_string()));
        app.contact.form.message = "short".to_string();

        let _ = app.update(Message::SubmitContact);
        assert_eq!(app.contact.status, ContactStatus::Idle);
        assert_eq!(app.contact.errors.count(), 4);
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut app = app();
        let _ = app.update(Message::SubmitContact);
        assert!(app.contact.errors.email.is_some());

        let _ = app.update(Message::EmailChanged("a@b.com".to_string()));
        assert!(app.contact.errors.email.is_none());
        // Untouched fields keep their errors until the next submit.
        assert!(app.contact.errors.name.is_some());
    }

    #[test]
    fn test_valid_submission_reaches_sent_on_compose_success() {
        let mut app = app();
        app.contact.form = valid_form();

        let _ = app.update(Message::SubmitContact);
        assert_eq!(app.contact.status, ContactStatus::Composing);

        let _ = app.update(Message::ComposeFinished(Ok(())));
        assert_eq!(app.contact.status, ContactStatus::Sent);
        assert_eq!(app.contact.form, ContactForm::default());
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_compose_failure_returns_to_idle_with_error_toast() {
        let mut app = app();
        app.contact.form = valid_form();
        let _ = app.update(Message::SubmitContact);

        let _ = app.update(Message::ComposeFinished(Err("no handler".to_string())));
        assert_eq!(app.contact.status, ContactStatus::Idle);
        // Input survives so it can be sent by hand.
        assert_eq!(app.contact.form, valid_form());

        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.body.contains(CONTACT_EMAIL));
    }

    #[test]
    fn test_send_another_resets_the_flow() {
        let mut app = app();
        app.contact.form = valid_form();
        let _ = app.update(Message::SubmitContact);
        let _ = app.update(Message::ComposeFinished(Ok(())));

        let _ = app.update(Message::SendAnother);
        assert_eq!(app.contact.status, ContactStatus::Idle);
        assert!(app.contact.errors.is_empty());
    }

    #[test]
    fn test_category_selection_drives_filtering() {
        let mut app = app();
        assert_eq!(app.project_category, profile::ALL_CATEGORY);

        let _ = app.update(Message::ProjectCategorySelected("fullstack"));
        assert_eq!(app.project_category, "fullstack");

        let _ = app.update(Message::SkillCategorySelected("backend"));
        assert_eq!(
            folio_core::profile::filter_skills(app.skill_category).len(),
            7
        );
    }

    #[test]
    fn test_project_details_index_is_bounds_checked() {
        let mut app = app();
        let _ = app.update(Message::ShowProjectDetails(PROJECTS.len()));
        assert_eq!(app.selected_project, None);

        let _ = app.update(Message::ShowProjectDetails(0));
        assert_eq!(app.selected_project, Some(0));

        let _ = app.update(Message::CloseProjectDetails);
        assert_eq!(app.selected_project, None);
    }

    #[test]
    fn test_out_of_range_source_request_is_a_no_op() {
        let mut app = app();
        let _ = app.update(Message::RequestProjectSource(PROJECTS.len()));
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_stale_toast_expiry_is_ignored() {
        let mut app = app();
        let _ = app.show_toast(ToastKind::Success, "first", "");
        let first_id = app.toast.as_ref().unwrap().id;
        let _ = app.show_toast(ToastKind::Success, "second", "");

        let _ = app.update(Message::ToastExpired(first_id));
        assert!(app.toast.is_some(), "newer toast must survive");

        let second_id = app.toast.as_ref().unwrap().id;
        let _ = app.update(Message::ToastExpired(second_id));
        assert!(app.toast.is_none());
    }
}
