//! Main UI rendering and terminal lifecycle.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io::{self, stdout, Stdout};

use super::app::App;
use super::document::Document;
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::theme::{
    back_to_top_badge, colors, current_theme_name, footer_hints, render_footer_hints, set_theme,
    Styles, Theme,
};
use super::widgets::{centered_rect, check_terminal_size, render_size_warning, MIN_HEIGHT, MIN_WIDTH};
use crate::config::Preferences;
use crate::error::{FolioError, Result};
use crate::page::{SectionId, SECTIONS};

/// Run the TUI application
pub fn run_tui(app: &mut App) -> Result<()> {
    // Load saved theme preference
    let prefs = Preferences::load();
    set_theme(Theme::from_name(&prefs.theme));

    let mut terminal = setup_terminal()
        .map_err(|e| FolioError::terminal(format!("failed to set up terminal: {e}")))?;

    let result = event_loop(&mut terminal, app);

    // Release observers and timers before the terminal goes away, and
    // restore the terminal even when the loop failed.
    app.page.teardown();
    let restored = restore_terminal(&mut terminal)
        .map_err(|e| FolioError::terminal(format!("failed to restore terminal: {e}")));

    result?;
    restored
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function
fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Check minimum terminal size
    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Last row is the key-hint bar; the rest is the scrolled document.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(area);
    let content = chunks[0];

    let viewport_height = content.height as usize;
    let text_width = content.width.saturating_sub(4) as usize;

    let doc = Document::build(
        app.catalog,
        text_width,
        viewport_height,
        app.page.rotator.label(),
    );

    // Publish the measured geometry back to the app and keep the scroll
    // offset valid if the document shrank (resize, reflow).
    app.viewport_height = viewport_height;
    app.page
        .scroll
        .clamp(doc.layout.max_scroll(viewport_height));
    app.layout = Some(doc.layout.clone());

    let offset = app.page.offset();
    let body = Paragraph::new(doc.visible(offset, viewport_height)).block(
        Block::default()
            .borders(Borders::NONE)
            .padding(ratatui::widgets::Padding::horizontal(2)),
    );
    frame.render_widget(body, content);

    render_nav(frame, Rect { height: 1, ..content }, app);

    if app.page.chrome.scroll_hint_visible {
        render_scroll_hint(frame, content, app.tick);
    }

    if app.page.back_to_top.visible {
        render_back_to_top(frame, content);
    }

    render_hint_bar(frame, chunks[1]);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

/// Fixed navigation header, drawn over the first document row.
fn render_nav(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let background = if app.page.chrome.header_solid {
        Style::default().bg(scheme.background_alt)
    } else {
        Style::default()
    };

    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for (i, section) in SECTIONS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if app.page.active_section() == Some(section.id) {
            Styles::nav_active()
        } else {
            Styles::nav_inactive()
        };
        spans.push(Span::styled(
            format!(" {} ", section.id.as_str().to_uppercase()),
            style.patch(background),
        ));
    }

    let nav = Paragraph::new(Line::from(spans)).style(background);
    frame.render_widget(Clear, area);
    frame.render_widget(nav, area);
}

/// Column ranges of the nav entries, for mouse hit testing. Mirrors the
/// layout produced by `render_nav`.
pub fn nav_section_at(column: u16) -> Option<SectionId> {
    let mut x = 1u16;
    for section in &SECTIONS {
        let entry_width = section.id.as_str().len() as u16 + 2;
        if column >= x && column < x + entry_width {
            return Some(section.id);
        }
        x += entry_width + 1;
    }
    None
}

/// Pulsing scroll-down chevron near the bottom of the viewport.
fn render_scroll_hint(frame: &mut Frame, content: Rect, tick: u64) {
    if content.height < 4 {
        return;
    }
    let style = if tick % 4 < 2 {
        Style::default().fg(colors().text_muted)
    } else {
        Style::default().fg(colors().text_muted).dim()
    };
    let hint = Paragraph::new(Line::styled("▼", style).centered());
    let area = Rect {
        y: content.y + content.height - 2,
        height: 1,
        ..content
    };
    frame.render_widget(hint, area);
}

/// Back-to-top badge in the bottom-right corner.
fn render_back_to_top(frame: &mut Frame, content: Rect) {
    let badge = back_to_top_badge();
    let width = badge.content.chars().count() as u16;
    if content.width < width + 2 || content.height < 3 {
        return;
    }
    let area = Rect {
        x: content.x + content.width - width - 1,
        y: content.y + content.height - 2,
        width,
        height: 1,
    };
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(Line::from(badge)), area);
}

fn render_hint_bar(frame: &mut Frame, area: Rect) {
    let mut spans = render_footer_hints(&footer_hints());
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("theme: {}", current_theme_name()),
        Styles::text_muted(),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        help_line("1-5", "jump to a section"),
        help_line("Tab / Shift-Tab", "next / previous section"),
        help_line("j/k, ↑/↓", "scroll by line"),
        help_line("PgUp/PgDn, Space", "scroll by page"),
        help_line("g/Home, G/End", "top / bottom of page"),
        help_line("t", "back to top (when shown)"),
        help_line("mouse wheel", "scroll"),
        help_line("click nav entry", "jump to section"),
        Line::from(""),
        help_line("T", "cycle theme"),
        help_line("?", "toggle this help"),
        help_line("q / Esc", "quit"),
        Line::from(""),
        Line::styled("Press any key to close", Styles::text_muted()).centered(),
    ];

    let popup_area = centered_rect(50, 60, area);
    frame.render_widget(Clear, popup_area);
    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(" Keys ")
            .title_style(Styles::heading())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(popup, popup_area);
}

fn help_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<18}"), Styles::shortcut_key()),
        Span::styled(desc.to_string(), Styles::shortcut_desc()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_hit_test_matches_rendered_layout() {
        // First entry starts at column 1: " HOME ".
        assert_eq!(nav_section_at(0), None);
        assert_eq!(nav_section_at(1), Some(SectionId::Home));
        assert_eq!(nav_section_at(6), Some(SectionId::Home));
        // Separator column between entries misses.
        assert_eq!(nav_section_at(7), None);
        assert_eq!(nav_section_at(8), Some(SectionId::About));
    }

    #[test]
    fn nav_hit_test_covers_all_sections() {
        let mut seen = Vec::new();
        for column in 0..80 {
            if let Some(id) = nav_section_at(column) {
                if seen.last() != Some(&id) {
                    seen.push(id);
                }
            }
        }
        let expected: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(seen, expected);
    }
}
