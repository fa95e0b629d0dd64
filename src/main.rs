use glagol::{
    app::App,
    assets::{ASSET_DIR, GlyphAssets},
    translit::transliterate,
};

use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    prelude::*,
};
use std::{io, path::Path, time::Duration};

const POLLING_RATE_MS: u64 = 16;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let assets = GlyphAssets::probe(Path::new(ASSET_DIR));

    println!("=== Latin to Glagolitic converter ===");
    if assets.enhanced() {
        println!(
            "Glagolitic symbols will be drawn from {} pre-rendered bitmap glyphs.",
            assets.len()
        );
    } else {
        println!("Glagolitic symbols will be drawn as Unicode code points.");
        println!(
            "Check that the terminal font covers them: {}",
            transliterate("glagol")
        );
        println!("Run glyphgen first to pre-render bitmap glyphs into {ASSET_DIR}/.");
    }
    println!("Type letters in the window; Esc quits.");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(assets);

    loop {
        terminal.draw(|frame| app.draw_ui(frame))?;
        terminal.show_cursor()?;

        if event::poll(Duration::from_millis(POLLING_RATE_MS))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => break,
                    _ => app.handle_key(key),
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
