//! Tunable rule parameters for a game.

/// Which target cells `move_player` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum MoveRule {
    /// Any in-bounds, unoccupied cell.
    #[default]
    Anywhere,
    /// Only the surrounding eight cells, or staying put.
    Adjacent,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("minimum grid size must be at least 1")]
    MinGridTooSmall,
    #[error("grid size {size} exceeds the maximum {max}")]
    GridTooLarge { size: usize, max: usize },
    #[error("initial grid size {initial} is below the minimum {min}")]
    InitialBelowMin { initial: usize, min: usize },
    #[error("rounds between shrinks must be at least 1")]
    ZeroShrinkInterval,
    #[error("at least 2 players are required to play, got minimum {0}")]
    MinPlayersTooLow(usize),
    #[error("max players {max} is below min players {min}")]
    MaxBelowMin { max: usize, min: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    pub initial_grid_size: usize,
    pub min_grid_size: usize,
    pub rounds_between_shrink: u32,
    pub max_players: usize,
    pub min_players: usize,
    pub move_rule: MoveRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_grid_size: 5,
            min_grid_size: 3,
            rounds_between_shrink: 3,
            max_players: 7,
            min_players: 2,
            move_rule: MoveRule::Anywhere,
        }
    }
}

impl GameConfig {
    /// Largest board side accepted by [`GameConfig::validate`].
    pub const MAX_GRID_SIZE: usize = 26;

    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.initial_grid_size = size;
        self
    }

    pub fn with_move_rule(mut self, rule: MoveRule) -> Self {
        self.move_rule = rule;
        self
    }

    pub fn with_shrink_interval(mut self, rounds: u32) -> Self {
        self.rounds_between_shrink = rounds;
        self
    }

    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_grid_size == 0 {
            return Err(ConfigError::MinGridTooSmall);
        }
        if self.initial_grid_size > Self::MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.initial_grid_size,
                max: Self::MAX_GRID_SIZE,
            });
        }
        if self.initial_grid_size < self.min_grid_size {
            return Err(ConfigError::InitialBelowMin {
                initial: self.initial_grid_size,
                min: self.min_grid_size,
            });
        }
        if self.rounds_between_shrink == 0 {
            return Err(ConfigError::ZeroShrinkInterval);
        }
        if self.min_players < 2 {
            return Err(ConfigError::MinPlayersTooLow(self.min_players));
        }
        if self.max_players < self.min_players {
            return Err(ConfigError::MaxBelowMin { max: self.max_players, min: self.min_players });
        }
        Ok(())
    }

    /// Whether reaching `round` shrinks the board (rounds 4, 7, 10, ... by default).
    pub fn is_shrink_round(&self, round: u32) -> bool {
        round > 1 && (round - 1) % self.rounds_between_shrink.max(1) == 0
    }
}
