//! Rich TUI interface using ratatui.
//!
//! This module renders the portfolio as one tall scrollable document
//! with a fixed navigation header, driven by the view state in
//! [`crate::page`].

mod app;
mod document;
mod events;
pub mod theme;
mod ui;
pub(crate) mod views;
pub(crate) mod widgets;

// Theme exports
pub use theme::{ColorScheme, Styles, Theme, colors, current_theme_name, set_theme, toggle_theme};

pub use app::App;
pub use document::Document;
pub use events::Event;
pub use ui::run_tui;
