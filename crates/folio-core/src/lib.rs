//! # Folio Core
//!
//! Domain logic for the portfolio, free of any UI framework types.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      folio-ui                        │
//! │        (iced model / message / update / view)        │
//! └───────┬──────────┬───────────┬───────────┬──────────┘
//!         │          │           │           │
//!   ┌─────┴────┐ ┌───┴─────┐ ┌───┴─────┐ ┌───┴────────┐
//!   │ sections │ │  theme  │ │ contact │ │  profile   │
//!   │ +tracker │ │ +config │ │  flow   │ │ +filtering │
//!   └──────────┘ └─────────┘ └─────────┘ └────────────┘
//! ```
//!
//! Everything here is a pure function of (static data, current value) or a
//! small single-writer state holder, so it can be tested without spinning
//! up a window.

pub mod config;
pub mod contact;
pub mod profile;
pub mod section;
pub mod theme;

pub use config::Config;
pub use contact::{mailto_uri, ContactFlow, ContactForm, ContactStatus, FieldErrors};
pub use section::{scroll_progress, Section, SectionId, ScrollTracker, SECTIONS};
pub use theme::{ThemePreference, ThemeStore};
