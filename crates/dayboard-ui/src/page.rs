//! Page composition and the interactive loop.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use dayboard_core::{App, AppError, Config};
use dayboard_greeting::{SharedProfileStore, SqliteProfileStore};

use crate::sections::{GreetingSection, QuoteSection, WeatherSection};

/// Open the durable profile store configured for this page.
pub fn open_profile_store(config: &Config) -> Result<SharedProfileStore> {
    let path = config.profile_db_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create profile store directory")?;
    }

    let store = SqliteProfileStore::open(&path)
        .with_context(|| format!("Failed to open profile store at {}", path.display()))?;

    Ok(SharedProfileStore::new(store))
}

/// Compose the page from the config and run it until no section wants input.
pub async fn run(config: Config) -> Result<(), AppError> {
    let store = open_profile_store(&config)?;

    let mut weather = WeatherSection::new(config.weather.clone());
    if config.ui.show_weather {
        weather.refresh().await;
    }

    let show_quote = config.ui.show_quote;
    let show_weather = config.ui.show_weather;

    let mut app = App::new(config);
    app.register_section(Box::new(GreetingSection::new(store)));
    if show_quote {
        app.register_section(Box::new(QuoteSection::new()));
    }
    if show_weather {
        app.register_section(Box::new(weather));
    }

    app.initialize()?;
    draw(&app)?;

    let stdin = io::stdin();
    while let Some(section) = app.input_section() {
        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line)?;
        if read == 0 {
            // EOF: leave the page as-is
            break;
        }
        section
            .handle_input(strip_newline(&line))
            .map_err(|e| AppError::Section(e.to_string()))?;
        draw(&app)?;
    }

    app.shutdown()?;
    Ok(())
}

/// Print the page to stdout.
fn draw(app: &App) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out)?;
    for line in app.render_page() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Strip the line terminator, leaving the submitted value untouched
/// otherwise (no trimming of user whitespace).
fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
