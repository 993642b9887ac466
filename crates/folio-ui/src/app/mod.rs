use iced::widget::{scrollable, text_editor};
use iced::{keyboard, Subscription, Task};

use folio_core::section::SectionId;
use folio_core::{ContactFlow, ScrollTracker, ThemePreference, ThemeStore};

use crate::style;

pub mod messages;
pub mod update;
pub mod view;

pub use messages::Message;

/// Launch options resolved from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Session-only theme override; not persisted until the user toggles.
    pub theme_override: Option<ThemePreference>,
}

/// Transient notification flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// An auto-expiring notification shown over the page corner.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

pub struct App {
    pub theme: ThemeStore,
    pub tracker: ScrollTracker,

    // Scroll-derived state, single writer: the scroll handler.
    pub scroll_offset: f32,
    pub scroll_progress: f32,
    pub nav_solid: bool,
    pub active_section: SectionId,

    // Contact form
    pub contact: ContactFlow,
    pub message_editor: text_editor::Content,

    // Filters and modal
    pub project_category: &'static str,
    pub skill_category: &'static str,
    pub selected_project: Option<usize>,

    pub toast: Option<Toast>,
    toast_seq: u64,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let theme = match flags.theme_override {
            Some(preference) => ThemeStore::ephemeral(preference),
            None => ThemeStore::load(),
        };

        let app = Self {
            theme,
            tracker: ScrollTracker::new(style::section_offsets()),
            scroll_offset: 0.0,
            scroll_progress: 0.0,
            nav_solid: false,
            active_section: SectionId::Home,
            contact: ContactFlow::default(),
            message_editor: text_editor::Content::new(),
            project_category: folio_core::profile::ALL_CATEGORY,
            skill_category: folio_core::profile::ALL_CATEGORY,
            selected_project: None,
            toast: None,
            toast_seq: 0,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("{} - Portfolio", folio_core::profile::OWNER_NAME)
    }

    /// Built-in widget theme (scrollbars, text selection) follows the
    /// stored preference; everything visible goes through [`Palette`].
    ///
    /// [`Palette`]: crate::theme::Palette
    pub fn iced_theme(&self) -> iced::Theme {
        match self.theme.preference() {
            ThemePreference::Dark => iced::Theme::Dark,
            ThemePreference::Light => iced::Theme::Light,
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }

    /// Allocates a toast and the task that expires it.
    pub(crate) fn show_toast(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Task<Message> {
        self.toast_seq += 1;
        let id = self.toast_seq;
        self.toast = Some(Toast {
            id,
            kind,
            title: title.into(),
            body: body.into(),
        });
        // The sleep must be constructed inside the future; building it
        // eagerly requires an ambient tokio runtime.
        Task::perform(
            async move {
                tokio::time::sleep(std::time::Duration::from_secs(style::TOAST_SECS)).await;
            },
            move |_| Message::ToastExpired(id),
        )
    }
}

/// Id of the one scrollable holding the whole page.
pub fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("portfolio-page")
}

pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::iced_theme)
        .window_size(iced::Size::new(1280.0, 860.0))
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
