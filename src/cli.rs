//! Command handlers.

use std::io::{IsTerminal, Write as _};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Preferences;
use crate::content::Catalog;
use crate::report::{render_json, render_text, PrintFormat};
use crate::tui::{run_tui, set_theme, App, Theme};

/// Run the `show` command: the interactive TUI, or the text report when
/// stdout is not a terminal.
pub fn run_show(theme: Option<String>) -> Result<()> {
    let catalog = Catalog::builtin();

    if !std::io::stdout().is_terminal() {
        info!("stdout is not a terminal, printing text report");
        print!("{}", render_text(catalog));
        return Ok(());
    }

    // An explicit --theme wins over the saved preference.
    if let Some(name) = theme {
        set_theme(Theme::from_name(&name));
        let prefs = Preferences { theme: name };
        prefs.save().context("failed to save theme preference")?;
    }

    let mut app = App::new(catalog);
    run_tui(&mut app).context("terminal session failed")?;
    Ok(())
}

/// Run the `print` command: render the catalog to stdout or a file.
pub fn run_print(format: PrintFormat, output: Option<PathBuf>) -> Result<()> {
    let catalog = Catalog::builtin();
    let rendered = match format {
        PrintFormat::Text => render_text(catalog),
        PrintFormat::Json => render_json(catalog)?,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}
