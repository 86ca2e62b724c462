//! Application state for the TUI.

use std::time::Instant;

use crate::content::Catalog;
use crate::page::{PageLayout, PageState, SectionId};

/// Rows moved per arrow-key press.
pub const LINE_SCROLL: i64 = 2;

/// Top-level TUI state: the content catalog plus the page view state.
pub struct App {
    pub catalog: &'static Catalog,
    pub page: PageState,
    /// Geometry of the last rendered document; `None` before first draw.
    pub layout: Option<PageLayout>,
    /// Viewport height of the last rendered frame, in rows.
    pub viewport_height: usize,
    pub show_help: bool,
    pub should_quit: bool,
    pub tick: u64,
    pub started: Instant,
}

impl App {
    #[must_use]
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            page: PageState::mount(catalog.profile.subtitles.iter().copied()),
            layout: None,
            viewport_height: 0,
            show_help: false,
            should_quit: false,
            tick: 0,
            started: Instant::now(),
        }
    }

    /// Advance animations. Called on every tick event.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if let Some(layout) = self.layout.clone() {
            let now = self.started.elapsed();
            self.page.on_tick(now, &layout, self.viewport_height);
        }
    }

    pub fn select_section(&mut self, id: SectionId) {
        if let Some(layout) = self.layout.clone() {
            self.page.navigate_to(&layout, self.viewport_height, id);
        }
    }

    pub fn next_section(&mut self) {
        let current = self.page.active_section().unwrap_or(SectionId::Home);
        self.select_section(current.next());
    }

    pub fn prev_section(&mut self) {
        let current = self.page.active_section().unwrap_or(SectionId::Home);
        self.select_section(current.prev());
    }

    pub fn scroll_by(&mut self, delta: i64) {
        if let Some(layout) = self.layout.clone() {
            self.page.scroll_by(&layout, self.viewport_height, delta);
        }
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport_height.saturating_sub(2) as i64);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.viewport_height.saturating_sub(2) as i64));
    }

    pub fn go_top(&mut self) {
        self.scroll_by(i64::MIN / 2);
    }

    pub fn go_bottom(&mut self) {
        self.scroll_by(i64::MAX / 2);
    }

    pub fn back_to_top(&mut self) {
        self.page.back_to_top();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
