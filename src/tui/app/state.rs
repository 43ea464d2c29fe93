use crate::engine::GameEngine;
use crate::game::{Game, GamePhase, GameState};
use crate::grid::Position;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Setup,
    Board,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    NameChar(char),
    NameBackspace,
    CharacterNext,
    CharacterPrev,
    RosterNext,
    RosterPrev,
    AddPlayer,
    RemovePlayer,
    StartGame,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    MoveHere,
    EndTurn,
    ResetGame,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    // Core game engine instance
    pub game: Game,
    // Board cell under the cursor
    pub cursor: Position,
    // Setup form
    pub(crate) name_input: String,
    pub(crate) character_index: usize,
    pub roster_index: usize,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    notice: Option<String>,
    notice_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Game::default())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const NOTICE_TTL: Duration = Duration::from_secs(3);
    pub(crate) const MAX_NAME_LEN: usize = 16;

    pub fn new(game: Game) -> Self {
        Self {
            scene: Scene::Setup,
            started: Instant::now(),
            game,
            cursor: Position::new(0, 0),
            name_input: String::new(),
            character_index: 0,
            roster_index: 0,
            help_open: false,
            history_open: false,
            history_offset: 0,
            notice: None,
            notice_at: None,
        }
    }

    pub(crate) fn engine(&mut self) -> &mut dyn GameEngine {
        &mut self.game
    }

    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub(crate) fn set_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
        self.notice_at = Some(Instant::now());
    }

    pub(crate) fn clear_notice(&mut self) {
        self.notice = None;
        self.notice_at = None;
    }

    /// Expires stale notices; called on every controller tick.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.notice_at {
            if at.elapsed() >= Self::NOTICE_TTL {
                self.clear_notice();
            }
        }
    }

    /// True when the highlighted cell is a one-step move for the acting player.
    pub fn is_hint_cell(&self, pos: Position) -> bool {
        let state = self.game.state();
        if state.has_moved_this_round() {
            return false;
        }
        match state.current_player() {
            Some(p) => self.game.legal_moves(p.id()).contains(&pos),
            None => false,
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                if self.scene == Scene::Board {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Board {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Board && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Board && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::NameChar(c) => {
                if self.scene == Scene::Setup {
                    self.name_push(c);
                }
                false
            }
            InputAction::NameBackspace => {
                if self.scene == Scene::Setup {
                    self.name_backspace();
                }
                false
            }
            InputAction::CharacterNext => {
                if self.scene == Scene::Setup {
                    self.character_next();
                }
                false
            }
            InputAction::CharacterPrev => {
                if self.scene == Scene::Setup {
                    self.character_prev();
                }
                false
            }
            InputAction::RosterNext => {
                if self.scene == Scene::Setup {
                    self.roster_next();
                }
                false
            }
            InputAction::RosterPrev => {
                if self.scene == Scene::Setup {
                    self.roster_prev();
                }
                false
            }
            InputAction::AddPlayer => self.scene == Scene::Setup && self.submit_player(),
            InputAction::RemovePlayer => self.scene == Scene::Setup && self.remove_selected(),
            InputAction::StartGame => self.scene == Scene::Setup && self.start(),
            InputAction::CursorUp => self.nudge_cursor(0, -1),
            InputAction::CursorDown => self.nudge_cursor(0, 1),
            InputAction::CursorLeft => self.nudge_cursor(-1, 0),
            InputAction::CursorRight => self.nudge_cursor(1, 0),
            InputAction::MoveHere => self.move_to_cursor(),
            InputAction::EndTurn => self.end_turn(),
            InputAction::ResetGame => {
                if self.scene == Scene::Board {
                    self.reset();
                }
                false
            }
        }
    }

    fn nudge_cursor(&mut self, dx: isize, dy: isize) -> bool {
        if self.scene != Scene::Board {
            return false;
        }
        let size = self.game.state().grid_size();
        let max = size.saturating_sub(1);
        let x = self.cursor.x.saturating_add_signed(dx).min(max);
        let y = self.cursor.y.saturating_add_signed(dy).min(max);
        self.cursor = Position::new(x, y);
        false
    }

    fn clamp_cursor(&mut self) {
        let max = self.game.state().grid_size().saturating_sub(1);
        self.cursor = Position::new(self.cursor.x.min(max), self.cursor.y.min(max));
    }

    fn focus_current_player(&mut self) {
        if let Some(pos) = self.game.state().current_player().and_then(|p| p.position()) {
            self.cursor = pos;
        }
        self.clamp_cursor();
    }

    fn move_to_cursor(&mut self) -> bool {
        if self.scene != Scene::Board {
            return false;
        }
        let Some(id) = self.game.state().current_player().map(|p| p.id()) else {
            return false;
        };
        let target = self.cursor;
        match self.engine().move_player(id, target) {
            Ok(()) => {
                self.clear_notice();
                true
            }
            Err(err) => {
                self.set_notice(err.to_string());
                false
            }
        }
    }

    fn end_turn(&mut self) -> bool {
        if self.scene != Scene::Board {
            return false;
        }
        if !self.game.state().has_moved_this_round() {
            self.set_notice("Move first, then end the turn");
            return false;
        }
        let grid_before = self.game.state().grid_size();
        self.engine().end_turn();
        let state = self.game.state();
        let grid_after = state.grid_size();
        let phase = state.phase();
        if grid_after < grid_before {
            self.set_notice(format!("The grid shrinks to {grid_after}x{grid_after}!"));
        } else {
            self.clear_notice();
        }
        if phase == GamePhase::Playing {
            self.focus_current_player();
        } else {
            self.clamp_cursor();
        }
        true
    }

    pub fn reset(&mut self) {
        self.engine().reset_game();
        self.scene = Scene::Setup;
        self.cursor = Position::new(0, 0);
        self.name_input.clear();
        self.character_index = 0;
        self.roster_index = 0;
        self.help_open = false;
        self.history_open = false;
        self.history_offset = 0;
        self.clear_notice();
    }

    pub(crate) fn enter_board(&mut self) {
        self.scene = Scene::Board;
        self.help_open = false;
        self.history_open = false;
        self.history_offset = 0;
        self.focus_current_player();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::CharacterId;

    #[test]
    fn end_turn_before_move_sets_notice() {
        let mut app = AppState::new(Game::seeded(4));
        app.game.add_player("a", CharacterId::Fries).unwrap();
        app.game.add_player("b", CharacterId::Taco).unwrap();
        assert!(app.handle_input(InputAction::StartGame));
        assert_eq!(app.scene, Scene::Board);

        let before = app.game.snapshot();
        assert!(!app.handle_input(InputAction::EndTurn));
        assert_eq!(app.game.snapshot(), before);
        assert!(app.notice().is_some());
    }

    #[test]
    fn cursor_is_clamped_to_grid() {
        let mut app = AppState::new(Game::seeded(4));
        app.game.add_player("a", CharacterId::Fries).unwrap();
        app.game.add_player("b", CharacterId::Taco).unwrap();
        app.handle_input(InputAction::StartGame);
        for _ in 0..10 {
            app.handle_input(InputAction::CursorRight);
            app.handle_input(InputAction::CursorDown);
        }
        assert_eq!(app.cursor, Position::new(4, 4));
        for _ in 0..10 {
            app.handle_input(InputAction::CursorLeft);
            app.handle_input(InputAction::CursorUp);
        }
        assert_eq!(app.cursor, Position::new(0, 0));
    }
}
