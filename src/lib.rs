//! Persistence layer for a turn-based tic-tac-toe style board game.
//!
//! The crate exposes a single collaborator, [`GameStore`], which owns all
//! reads and writes against persisted [`Game`] records: creating a draft
//! game, setting its board dimensions and rules, walking it through the
//! draft -> ongoing -> completed lifecycle and toggling whose turn it is.
//! Game logic (win detection, board validation) lives with the caller.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::Config;
pub use db::store::GameStore;
pub use error::{StoreError, StoreResult};
pub use models::{Game, GameStatus, PlayerSymbol};
