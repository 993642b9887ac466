//! # Folio UI
//!
//! The portfolio page as an iced application.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: Application state
//! - **Message**: Events that can occur
//! - **Update**: Pure function: (state, message) -> new state
//! - **View**: Pure function: state -> UI elements
//!
//! The page itself is one tall `scrollable`; every scroll event reports
//! the absolute offset, which drives the nav bar style, the active
//! section highlight, and the progress bar. All heavier logic (section
//! resolution, validation, mailto assembly) lives in `folio-core`.

pub mod app;
pub mod components;
pub mod style;
pub mod theme;

pub use app::{run, App, Flags};
pub use theme::Palette;
