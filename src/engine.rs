// Command/query boundary for presentation layers. UIs (TUI, web, test
// harnesses) drive the rules through this trait instead of reaching into
// `Game` internals. It is implemented for the core `Game` type.

use crate::characters::{Character, CharacterId};
use crate::game::{Game, GameEvent, GameState, MoveError, PlayerId, SetupError};
use crate::grid::Position;

pub trait GameEngine {
    // Roster
    fn add_player(&mut self, name: &str, character: CharacterId) -> Result<PlayerId, SetupError>;
    fn remove_player(&mut self, id: PlayerId);
    fn available_characters(&self) -> Vec<Character>;

    // Lifecycle
    fn start_game(&mut self) -> Result<(), SetupError>;
    fn reset_game(&mut self);

    // Turn actions
    fn move_player(&mut self, id: PlayerId, target: Position) -> Result<(), MoveError>;
    fn end_turn(&mut self);

    // Queries
    fn state(&self) -> &GameState;
    fn snapshot(&self) -> GameState {
        self.state().clone()
    }
    fn legal_moves(&self, id: PlayerId) -> Vec<Position>;
    fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<GameEvent>;
    fn history_len(&self) -> usize;
}

impl GameEngine for Game {
    fn add_player(&mut self, name: &str, character: CharacterId) -> Result<PlayerId, SetupError> {
        self.add_player(name, character)
    }
    fn remove_player(&mut self, id: PlayerId) {
        self.remove_player(id);
    }
    fn available_characters(&self) -> Vec<Character> {
        self.available_characters()
    }

    fn start_game(&mut self) -> Result<(), SetupError> {
        self.start_game()
    }
    fn reset_game(&mut self) {
        self.reset_game();
    }

    fn move_player(&mut self, id: PlayerId, target: Position) -> Result<(), MoveError> {
        self.move_player(id, target)
    }
    fn end_turn(&mut self) {
        self.end_turn();
    }

    fn state(&self) -> &GameState {
        self.state()
    }
    fn legal_moves(&self, id: PlayerId) -> Vec<Position> {
        self.legal_moves(id)
    }
    fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<GameEvent> {
        self.history_recent_offset(n, offset)
    }
    fn history_len(&self) -> usize {
        self.history_len()
    }
}
