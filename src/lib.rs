//! fritanga-royale: a shrinking-grid elimination game engine
//!
//! Goals:
//! - Turn-based rules engine with no I/O, usable from any front-end
//! - Deterministic starting positions for a given seed
//! - No panics for invalid input; use `Result` for rejected actions
//!
//! ## Quick start: two players, one turn
//! ```
//! use fritanga_royale::characters::CharacterId;
//! use fritanga_royale::game::{Game, GamePhase};
//!
//! let mut game = Game::seeded(7);
//! let ana = game.add_player("Ana", CharacterId::Fries).unwrap();
//! let beto = game.add_player("Beto", CharacterId::Taco).unwrap();
//! game.start_game().unwrap();
//! assert_eq!(game.state().phase(), GamePhase::Playing);
//!
//! // Ana moves first; staying on her own cell counts as a move.
//! let here = game.state().player(ana).unwrap().position().unwrap();
//! game.move_player(ana, here).unwrap();
//! game.end_turn();
//! assert_eq!(game.state().current_player().map(|p| p.id()), Some(beto));
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin fritanga -- --seed 42
//! ```

pub mod characters;
pub mod config;
pub mod engine;
pub mod game;
pub mod grid;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
