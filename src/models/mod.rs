pub mod game;

pub use game::{Game, GameStatus, PlayerSymbol};
