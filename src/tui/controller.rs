use crate::game::GamePhase;
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Maps a key press to an input action. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    match app.scene {
        Scene::Setup => handle_setup_key(app, code),
        Scene::Board => handle_board_key(app, code),
    }
}

fn handle_setup_key(app: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Esc => return true,
        KeyCode::Enter => {
            // Enter on an empty name field starts the game.
            let action = if app.name_input().trim().is_empty() {
                InputAction::StartGame
            } else {
                InputAction::AddPlayer
            };
            let _ = app.handle_input(action);
        }
        KeyCode::Backspace => {
            let _ = app.handle_input(InputAction::NameBackspace);
        }
        KeyCode::Delete => {
            let _ = app.handle_input(InputAction::RemovePlayer);
        }
        KeyCode::Left => {
            let _ = app.handle_input(InputAction::CharacterPrev);
        }
        KeyCode::Right | KeyCode::Tab => {
            let _ = app.handle_input(InputAction::CharacterNext);
        }
        KeyCode::Up => {
            let _ = app.handle_input(InputAction::RosterPrev);
        }
        KeyCode::Down => {
            let _ = app.handle_input(InputAction::RosterNext);
        }
        KeyCode::Char(c) => {
            let _ = app.handle_input(InputAction::NameChar(c));
        }
        _ => {}
    }
    false
}

fn handle_board_key(app: &mut AppState, code: KeyCode) -> bool {
    let help_toggle = matches!(code, KeyCode::Char('?'));
    let history_toggle = matches!(code, KeyCode::Char('h') | KeyCode::Char('H'));
    if help_toggle {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if history_toggle {
        let _ = app.handle_input(InputAction::ToggleHistory);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if app.history_open() {
        match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::HistoryUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::HistoryDown);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::ToggleHistory);
            }
            _ => {}
        }
        return false;
    }
    if app.state().phase() == GamePhase::Finished {
        match code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                let _ = app.handle_input(InputAction::ResetGame);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        }
        return false;
    }

    match code {
        KeyCode::Up => {
            let _ = app.handle_input(InputAction::CursorUp);
        }
        KeyCode::Down => {
            let _ = app.handle_input(InputAction::CursorDown);
        }
        KeyCode::Left => {
            let _ = app.handle_input(InputAction::CursorLeft);
        }
        KeyCode::Right => {
            let _ = app.handle_input(InputAction::CursorRight);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let _ = app.handle_input(InputAction::MoveHere);
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            let _ = app.handle_input(InputAction::EndTurn);
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            let _ = app.handle_input(InputAction::ResetGame);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}
