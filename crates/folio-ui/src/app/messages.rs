use iced::keyboard;
use iced::widget::{scrollable, text_editor};

use folio_core::section::SectionId;

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    NavClicked(SectionId),
    ScrollToTop,
    Scrolled(scrollable::Viewport),

    // Theme
    ToggleTheme,

    // Contact form
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    MessageEdited(text_editor::Action),
    SubmitContact,
    SendAnother,

    // Projects / skills filtering
    ProjectCategorySelected(&'static str),
    SkillCategorySelected(&'static str),

    // Project details modal
    ShowProjectDetails(usize),
    CloseProjectDetails,
    RequestProjectSource(usize),

    // External links (mailto:, tel:, https:)
    OpenExternal(String),
    RequestResume,

    // Toasts
    ToastExpired(u64),

    // Keyboard shortcuts
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Async results
    ComposeFinished(Result<(), String>),
    LinkOpened(Result<(), String>),
}
