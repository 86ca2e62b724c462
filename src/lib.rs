//! **A single-page portfolio for the terminal.**
//!
//! `folio` renders a personal portfolio as one tall scrollable document
//! with a fixed navigation header, the way the equivalent web page
//! presents it: full-height sections, a scroll-spy-driven nav highlight,
//! a rotating subtitle in the hero block, and a back-to-top control.
//!
//! ## Core Concepts & Modules
//!
//! - **[`content`]**: The static catalog of everything the page shows —
//!   profile, about, experience, education, and skills.
//! - **[`page`]**: Pure view state. [`page::PageState`] owns the scroll
//!   animator, the scroll-spy, the header/hint chrome flags, and the
//!   rotating subtitle; it knows nothing about terminals.
//! - **[`tui`]**: The ratatui front end. Renders the catalog into a
//!   virtual document, slices it by scroll offset, and overlays the
//!   fixed chrome.
//! - **[`report`]**: Plain-text and JSON renditions of the catalog for
//!   non-interactive use.
//!
//! ## Getting Started
//!
//! ```no_run
//! use folio::content::Catalog;
//! use folio::tui::{run_tui, App};
//!
//! fn main() -> folio::Result<()> {
//!     let mut app = App::new(Catalog::builtin());
//!     run_tui(&mut app)
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize↔f64/i64/u16 casts are pervasive in layout math —
    // all values are bounded by terminal and document sizes in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long — splitting hurts readability
    clippy::too_many_lines
)]

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod page;
pub mod report;
pub mod tui;

// Re-export main types for convenience
pub use config::Preferences;
pub use content::Catalog;
pub use error::{FolioError, Result};
pub use page::{PageLayout, PageState, SectionId};
pub use report::{render_json, render_text, PrintFormat};
pub use tui::{run_tui, App, Theme};
