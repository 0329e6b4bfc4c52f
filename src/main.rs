//! Terminal Blockfall runner.
//!
//! Single-threaded event loop: the gravity timer and key events are
//! serialized onto one queue, so each intent fully resolves before the next
//! gravity tick's collision test runs.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameSession;
use blockfall::input::{control_for_key, intent_for_key, should_quit, ControlEvent};
use blockfall::store::{FileScoreStore, ScoreStore};
use blockfall::term::{GameView, TerminalRenderer, Theme, Viewport};
use blockfall::types::TICK_MS;

/// Best score lives next to the binary's working directory.
const SCORE_FILE: &str = "blockfall_score.json";

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);

    let mut session = GameSession::new(seed);
    let mut store = FileScoreStore::new(SCORE_FILE);
    let mut best = store.read();

    let view = GameView::default();
    let mut theme = Theme::Dark;

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session, best, theme, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next gravity tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(control) = control_for_key(key) {
                        match control {
                            ControlEvent::Start => session.start(),
                            ControlEvent::Stop => session.stop(),
                            ControlEvent::ToggleTheme => theme = theme.toggle(),
                        }
                    } else if let Some(intent) = intent_for_key(key) {
                        session.apply(intent);
                    }
                }
            }
        }

        // Gravity tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }

        // Persist the best score as soon as it is beaten.
        if session.score() > best {
            best = session.score();
            store.write(best)?;
        }
    }
}
