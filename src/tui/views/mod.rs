//! Section views for the TUI.
//!
//! Each view renders one content section to document lines; the document
//! builder stacks them and measures the result.

mod about;
mod education;
mod experience;
mod home;
mod skills;

pub use about::about_lines;
pub use education::education_lines;
pub use experience::experience_lines;
pub use home::home_lines;
pub use skills::skills_lines;
