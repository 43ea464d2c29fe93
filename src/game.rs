use crate::characters::{Character, CharacterId, CATALOG};
use crate::config::{ConfigError, GameConfig, MoveRule};
use crate::grid::{CellPool, Position};
use log::{debug, info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Identifier handed out when a player joins. Never reused by the same engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u64);

impl PlayerId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GamePhase {
    Setup,
    Playing,
    Finished,
}

impl GamePhase {
    pub fn label(self) -> &'static str {
        match self {
            GamePhase::Setup => "Setup",
            GamePhase::Playing => "Playing",
            GamePhase::Finished => "Finished",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetupError {
    #[error("the roster is locked once the game has started")]
    GameInProgress,
    #[error("player name must not be empty")]
    EmptyName,
    #[error("roster is full: max {max} players")]
    RosterFull { max: usize },
    #[error("character '{0}' is already taken")]
    CharacterTaken(CharacterId),
    #[error("not enough players: need {min}, got {got}")]
    NotEnoughPlayers { min: usize, got: usize },
    #[error("grid has {cells} cells but {players} players need a spot")]
    GridTooSmall { cells: usize, players: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("moves are only allowed while the game is in progress")]
    NotPlaying,
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: PlayerId, got: PlayerId },
    #[error("already moved this turn")]
    AlreadyMoved,
    #[error("({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("({x}, {y}) is occupied")]
    Occupied { x: usize, y: usize },
    #[error("{to} is not adjacent to {from}")]
    NotAdjacent { from: Position, to: Position },
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameEvent {
    Joined { player: PlayerId, character: CharacterId },
    Left { player: PlayerId },
    Started { grid_size: usize },
    Moved { player: PlayerId, from: Option<Position>, to: Position },
    TurnPassed { from: PlayerId, to: PlayerId, round: u32 },
    GridShrunk { round: u32, grid_size: usize },
    Eliminated { player: PlayerId, at: Position },
    Won { player: PlayerId },
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) character: Character,
    pub(crate) position: Option<Position>,
    pub(crate) eliminated: bool,
}

impl Player {
    /// Returns the player's id
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the character the player claimed
    pub fn character(&self) -> Character {
        self.character
    }

    /// Returns the player's cell, `None` until the game starts
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    pub fn is_active(&self) -> bool {
        !self.eliminated
    }
}

/// Authoritative game state. Only [`Game`] mutates it; everyone else reads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameState {
    pub(crate) players: Vec<Player>,
    pub(crate) current_player_index: usize,
    pub(crate) round: u32,
    pub(crate) grid_size: usize,
    pub(crate) phase: GamePhase,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) has_moved_this_round: bool,
}

impl GameState {
    pub(crate) fn initial(grid_size: usize) -> Self {
        Self {
            players: Vec::new(),
            current_player_index: 0,
            round: 1,
            grid_size,
            phase: GamePhase::Setup,
            winner: None,
            has_moved_this_round: false,
        }
    }

    /// Returns all players in join order, eliminated ones included
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// Returns the acting player while a game is in progress
    pub fn current_player(&self) -> Option<&Player> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        self.players.get(self.current_player_index)
    }

    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    pub fn eliminated_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_eliminated())
    }

    pub fn active_count(&self) -> usize {
        self.active_players().count()
    }

    /// Returns the non-eliminated player standing on `pos`
    pub fn occupant(&self, pos: Position) -> Option<&Player> {
        self.active_players().find(|p| p.position == Some(pos))
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    pub fn has_moved_this_round(&self) -> bool {
        self.has_moved_this_round
    }

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    fn first_active(&self) -> Option<usize> {
        self.players.iter().position(Player::is_active)
    }
}

/// Where the turn goes next, and whether it wrapped past the end of the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub index: usize,
    pub wrapped: bool,
}

/// Next non-eliminated player after `current` in join order.
///
/// Returns `None` when nobody is active. A lone survivor rotates onto itself
/// with `wrapped` set.
///
/// ```
/// use fritanga_royale::game::{next_active_player, Game};
/// use fritanga_royale::characters::CharacterId;
///
/// let mut game = Game::seeded(1);
/// game.add_player("Ana", CharacterId::Fries).unwrap();
/// game.add_player("Beto", CharacterId::Taco).unwrap();
/// let players = game.state().players();
///
/// let r = next_active_player(players, 0).unwrap();
/// assert_eq!((r.index, r.wrapped), (1, false));
/// let r = next_active_player(players, 1).unwrap();
/// assert_eq!((r.index, r.wrapped), (0, true));
/// ```
pub fn next_active_player(players: &[Player], current: usize) -> Option<Rotation> {
    let first = players.iter().position(Player::is_active)?;
    let after = players
        .iter()
        .enumerate()
        .skip(current.saturating_add(1))
        .find(|(_, p)| p.is_active())
        .map(|(i, _)| i);
    Some(match after {
        Some(index) => Rotation { index, wrapped: false },
        None => Rotation { index: first, wrapped: true },
    })
}

/// The rules engine: owns one [`GameState`] and applies commands to it.
///
/// Every command validates fully before writing, so a rejected command leaves
/// the state untouched.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    rng: ChaCha8Rng,
    next_id: u64,
    history: Vec<GameEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_parts(GameConfig::default(), Self::entropy_rng())
    }
}

impl Game {
    /// Oldest events are dropped once the log holds this many.
    pub const HISTORY_LIMIT: usize = 512;

    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, Self::entropy_rng()))
    }

    /// Deterministic placement for a given seed.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, ChaCha8Rng::seed_from_u64(seed)))
    }

    /// Default rules with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(GameConfig::default(), ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_parts(config: GameConfig, rng: ChaCha8Rng) -> Self {
        Self {
            state: GameState::initial(config.initial_grid_size),
            config,
            rng,
            next_id: 1,
            history: Vec::new(),
        }
    }

    fn entropy_rng() -> ChaCha8Rng {
        let seed: u64 = rand::rng().random();
        ChaCha8Rng::seed_from_u64(seed)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state for renderers that outlive the borrow.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn history_recent(&self, n: usize) -> Vec<GameEvent> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        let start = len.saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<GameEvent> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Catalog entries nobody has claimed yet, in catalog order.
    pub fn available_characters(&self) -> Vec<Character> {
        CATALOG
            .iter()
            .copied()
            .filter(|c| !self.state.players.iter().any(|p| p.character.id() == c.id()))
            .collect()
    }

    pub fn add_player(
        &mut self,
        name: &str,
        character: impl Into<CharacterId>,
    ) -> Result<PlayerId, SetupError> {
        let character = character.into();
        if self.state.phase != GamePhase::Setup {
            return Err(SetupError::GameInProgress);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(SetupError::EmptyName);
        }
        if self.state.players.len() >= self.config.max_players {
            return Err(SetupError::RosterFull { max: self.config.max_players });
        }
        if self.state.players.iter().any(|p| p.character.id() == character) {
            return Err(SetupError::CharacterTaken(character));
        }

        let id = PlayerId(self.next_id);
        self.next_id += 1;
        self.state.players.push(Player {
            id,
            name: name.to_string(),
            character: character.character(),
            position: None,
            eliminated: false,
        });
        debug!("{id} '{name}' joined as {character}");
        self.record(GameEvent::Joined { player: id, character });
        Ok(id)
    }

    /// Drops the player from the roster. Unknown ids are ignored.
    pub fn remove_player(&mut self, id: PlayerId) {
        let Some(idx) = self.state.index_of(id) else {
            trace!("remove ignored: {id} not on the roster");
            return;
        };
        self.state.players.remove(idx);
        debug!("{id} left the game");
        self.record(GameEvent::Left { player: id });
        if self.state.phase == GamePhase::Playing {
            self.repair_turn_after_removal(idx);
        }
    }

    fn repair_turn_after_removal(&mut self, removed: usize) {
        let current = self.state.current_player_index;
        if removed < current {
            self.state.current_player_index = current - 1;
        } else if removed == current {
            // Whoever followed the removed player in join order now sits at `removed`.
            let after = self
                .state
                .players
                .iter()
                .enumerate()
                .skip(removed)
                .find(|(_, p)| p.is_active())
                .map(|(i, _)| i);
            self.state.current_player_index =
                after.or_else(|| self.state.first_active()).unwrap_or(0);
            self.state.has_moved_this_round = false;
            self.finish_if_decided();
            // The acting player was last in join order, so the round is over.
            if after.is_none() && self.state.phase == GamePhase::Playing {
                self.start_next_round();
            }
            return;
        }
        self.finish_if_decided();
    }

    pub fn start_game(&mut self) -> Result<(), SetupError> {
        if self.state.phase != GamePhase::Setup {
            return Err(SetupError::GameInProgress);
        }
        let count = self.state.players.len();
        if count < self.config.min_players {
            return Err(SetupError::NotEnoughPlayers { min: self.config.min_players, got: count });
        }
        let size = self.state.grid_size;
        let cells = size.checked_mul(size).unwrap_or(usize::MAX);
        if cells < count {
            return Err(SetupError::GridTooSmall { cells, players: count });
        }

        let mut pool = CellPool::shuffled(size, &mut self.rng);
        for (player, pos) in self.state.players.iter_mut().zip(pool.draw_n(count)) {
            player.position = Some(pos);
        }
        self.state.phase = GamePhase::Playing;
        self.state.current_player_index = 0;
        self.state.has_moved_this_round = false;
        info!("game started: {count} players on a {size}x{size} grid");
        self.record(GameEvent::Started { grid_size: size });
        Ok(())
    }

    pub fn move_player(&mut self, id: PlayerId, target: Position) -> Result<(), MoveError> {
        if let Err(err) = self.check_move(id, target) {
            trace!("move rejected for {id} to {target}: {err}");
            return Err(err);
        }
        let idx = self.state.current_player_index;
        let from = self.state.players[idx].position.replace(target);
        self.state.has_moved_this_round = true;
        debug!("{id} moved to {target}");
        self.record(GameEvent::Moved { player: id, from, to: target });
        Ok(())
    }

    fn check_move(&self, id: PlayerId, target: Position) -> Result<(), MoveError> {
        if self.state.phase != GamePhase::Playing {
            return Err(MoveError::NotPlaying);
        }
        let idx = self.state.index_of(id).ok_or(MoveError::UnknownPlayer(id))?;
        if idx != self.state.current_player_index {
            let expected = self.state.players[self.state.current_player_index].id;
            return Err(MoveError::NotYourTurn { expected, got: id });
        }
        if self.state.has_moved_this_round {
            return Err(MoveError::AlreadyMoved);
        }
        let size = self.state.grid_size;
        if !target.in_bounds(size) {
            return Err(MoveError::OutOfBounds { x: target.x, y: target.y, size });
        }
        if self.state.occupant(target).is_some_and(|p| p.id != id) {
            return Err(MoveError::Occupied { x: target.x, y: target.y });
        }
        if self.config.move_rule == MoveRule::Adjacent {
            if let Some(from) = self.state.players[idx].position {
                if !from.is_adjacent(target) {
                    return Err(MoveError::NotAdjacent { from, to: target });
                }
            }
        }
        Ok(())
    }

    /// Adjacent cells (and the current one) the player could step onto.
    ///
    /// This is a hint for renderers; under [`MoveRule::Anywhere`] the engine
    /// also accepts farther cells.
    pub fn legal_moves(&self, id: PlayerId) -> Vec<Position> {
        let Some(player) = self.state.player(id) else {
            return Vec::new();
        };
        if self.state.phase != GamePhase::Playing || player.eliminated {
            return Vec::new();
        }
        let Some(from) = player.position else {
            return Vec::new();
        };
        from.neighborhood(self.state.grid_size)
            .into_iter()
            .filter(|&pos| self.state.occupant(pos).map_or(true, |p| p.id == id))
            .collect()
    }

    /// Hands the turn to the next active player once the current one has moved.
    pub fn end_turn(&mut self) {
        if self.state.phase != GamePhase::Playing || !self.state.has_moved_this_round {
            trace!("end turn ignored: no move made yet");
            return;
        }
        let Some(rotation) =
            next_active_player(&self.state.players, self.state.current_player_index)
        else {
            return;
        };
        let from = self.state.players[self.state.current_player_index].id;

        if rotation.wrapped && self.start_next_round() {
            return;
        }

        self.state.current_player_index = rotation.index;
        self.state.has_moved_this_round = false;
        let to = self.state.players[rotation.index].id;
        debug!("turn passes from {from} to {to} (round {})", self.state.round);
        self.record(GameEvent::TurnPassed { from, to, round: self.state.round });
    }

    /// Bumps the round counter and shrinks the board when the new round calls for it.
    ///
    /// Returns true when a shrink happened; the shrink already re-points the turn.
    fn start_next_round(&mut self) -> bool {
        self.state.round += 1;
        if self.config.is_shrink_round(self.state.round)
            && self.state.grid_size > self.config.min_grid_size
        {
            self.shrink();
            return true;
        }
        false
    }

    fn shrink(&mut self) {
        let round = self.state.round;
        self.state.grid_size -= 1;
        let size = self.state.grid_size;
        info!("round {round}: grid shrinks to {size}x{size}");
        self.record(GameEvent::GridShrunk { round, grid_size: size });

        let mut out = Vec::new();
        for p in &mut self.state.players {
            let Some(pos) = p.position else { continue };
            if pos.in_bounds(size) {
                continue;
            }
            if !p.eliminated {
                out.push((p.id, pos));
            }
            p.eliminated = true;
        }
        for (player, at) in out {
            info!("{player} eliminated at {at}");
            self.record(GameEvent::Eliminated { player, at });
        }

        self.state.current_player_index = self.state.first_active().unwrap_or(0);
        self.state.has_moved_this_round = false;
        self.finish_if_decided();
    }

    fn finish_if_decided(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        let survivors: Vec<PlayerId> = self.state.active_players().map(|p| p.id).take(2).collect();
        match survivors.as_slice() {
            [winner] => {
                let winner = *winner;
                self.state.phase = GamePhase::Finished;
                self.state.winner = Some(winner);
                info!("{winner} wins after {} rounds", self.state.round);
                self.record(GameEvent::Won { player: winner });
            }
            [] => {
                self.state.phase = GamePhase::Finished;
                self.state.winner = None;
                info!("no survivors after {} rounds", self.state.round);
                self.record(GameEvent::Draw);
            }
            _ => {}
        }
    }

    /// Back to an empty roster in setup; config and RNG stream are kept.
    pub fn reset_game(&mut self) {
        self.state = GameState::initial(self.config.initial_grid_size);
        self.history.clear();
        info!("game reset");
    }

    fn record(&mut self, event: GameEvent) {
        if self.history.len() >= Self::HISTORY_LIMIT {
            let excess = self.history.len() + 1 - Self::HISTORY_LIMIT;
            self.history.drain(..excess);
        }
        self.history.push(event);
    }
}
