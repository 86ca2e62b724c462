//! Event handling for the TUI.
//!
//! Key and mouse events update the page state; everything visual is
//! derived from that state on the next draw.

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tracing::warn;

use super::app::{App, LINE_SCROLL};
use super::theme::toggle_theme;
use super::ui::nav_section_at;
use crate::config::Preferences;
use crate::page::SectionId;

/// Rows moved per mouse-wheel notch.
const WHEEL_SCROLL: i64 = 3;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal tick (for animations)
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Any key dismisses the help overlay.
    if app.show_help {
        app.toggle_help();
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('T') => switch_theme(),

        KeyCode::Char('1') => app.select_section(SectionId::Home),
        KeyCode::Char('2') => app.select_section(SectionId::About),
        KeyCode::Char('3') => app.select_section(SectionId::Experience),
        KeyCode::Char('4') => app.select_section(SectionId::Education),
        KeyCode::Char('5') => app.select_section(SectionId::Skills),
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.prev_section(),

        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(LINE_SCROLL),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-LINE_SCROLL),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Home | KeyCode::Char('g') => app.go_top(),
        KeyCode::End | KeyCode::Char('G') => app.go_bottom(),
        KeyCode::Char('t') => app.back_to_top(),

        _ => {}
    }
}

/// Handle mouse events: wheel scrolling plus clicks on the nav header.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_SCROLL),
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_SCROLL),
        MouseEventKind::Down(MouseButton::Left) if mouse.row == 0 => {
            if let Some(id) = nav_section_at(mouse.column) {
                app.select_section(id);
            }
        }
        _ => {}
    }
}

/// Rotate the theme and persist the choice.
fn switch_theme() {
    let name = toggle_theme();
    let prefs = Preferences {
        theme: name.to_string(),
    };
    if let Err(e) = prefs.save() {
        warn!("failed to save theme preference: {e}");
    }
}
