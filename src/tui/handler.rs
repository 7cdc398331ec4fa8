//! Async event handler for the terminal editor.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, info};

use gobi::InterpreterLocator;

use super::{
    app::{App, Discovery},
    events::TuiEvent,
    ui::render_ui,
};

/// Run the terminal editor until the user quits.
pub async fn run_editor(locator: InterpreterLocator, source: &str) -> Result<()> {
    if !io::IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!("The editor requires a proper terminal environment"));
    }

    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, locator.candidates().to_vec());
    let (event_tx, event_rx) = mpsc::unbounded_channel::<TuiEvent>();

    // Discovery runs once, off the UI loop.
    let discovery_tx = event_tx.clone();
    tokio::spawn(async move {
        let handle = locator.locate().await;
        let _ = discovery_tx.send(TuiEvent::Discovered(handle));
    });

    let result = run_app(&mut terminal, &mut app, event_tx, event_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableBracketedPaste)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    mut event_rx: mpsc::UnboundedReceiver<TuiEvent>,
) -> Result<()> {
    // Input thread; exits once the loop drops the receiver.
    let input_tx = event_tx.clone();
    tokio::task::spawn_blocking(move || loop {
        let ev = if event::poll(Duration::from_millis(100)).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => TuiEvent::Key(key),
                Ok(Event::Paste(text)) => TuiEvent::Paste(text),
                _ => continue,
            }
        } else {
            TuiEvent::Tick
        };
        if input_tx.send(ev).is_err() {
            break;
        }
    });

    loop {
        terminal.draw(|frame| render_ui(frame, app))?;

        let Some(tui_event) = event_rx.recv().await else {
            break;
        };
        match tui_event {
            TuiEvent::Key(key) => {
                if handle_key_event(app, key, &event_tx) {
                    break;
                }
            }
            TuiEvent::Paste(text) => {
                if app.discovery == Discovery::Ready {
                    app.editor.insert_str(&text);
                }
            }
            TuiEvent::Tick => {
                app.tick = app.tick.wrapping_add(1);
            }
            TuiEvent::Discovered(handle) => {
                info!(found = handle.is_some(), "discovery finished");
                app.finish_discovery(handle);
            }
            TuiEvent::Executed(result) => {
                debug!(exit_code = result.exit_code, "execution finished");
                app.finish_execution(result);
            }
        }
    }

    Ok(())
}

/// Start an execution in the background if the app allows one now.
fn execute(app: &mut App, event_tx: &mpsc::UnboundedSender<TuiEvent>) {
    let Some((service, source)) = app.begin_execution() else {
        return;
    };
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = service.execute(&source).await;
        let _ = tx.send(TuiEvent::Executed(result));
    });
}

/// Handle keyboard events. Returns true when the user asked to quit.
fn handle_key_event(app: &mut App, key: KeyEvent, event_tx: &mpsc::UnboundedSender<TuiEvent>) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return true;
    }
    if key.code == KeyCode::F(1) {
        app.toggle_help();
        return false;
    }
    if app.show_help {
        if key.code == KeyCode::Esc {
            app.toggle_help();
        }
        return false;
    }

    if app.discovery != Discovery::Ready {
        return matches!(key.code, KeyCode::Char('q') | KeyCode::Esc);
    }

    match key.code {
        KeyCode::Char('r') if ctrl => execute(app, event_tx),
        KeyCode::F(5) => execute(app, event_tx),
        KeyCode::Char('l') if ctrl => app.clear_result(),
        KeyCode::Char(c) if !ctrl => app.editor.insert_char(c),
        KeyCode::Enter => app.editor.insert_newline(),
        KeyCode::Tab => app.editor.insert_char('\t'),
        KeyCode::Backspace => app.editor.backspace(),
        KeyCode::Delete => app.editor.delete(),
        KeyCode::Left => app.editor.move_left(),
        KeyCode::Right => app.editor.move_right(),
        KeyCode::Up => app.editor.move_up(),
        KeyCode::Down => app.editor.move_down(),
        KeyCode::Home => app.editor.move_home(),
        KeyCode::End => app.editor.move_end(),
        KeyCode::PageUp => app.scroll_result_up(),
        KeyCode::PageDown => app.scroll_result_down(),
        _ => {}
    }
    false
}
