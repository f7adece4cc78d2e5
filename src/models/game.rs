use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle status of a game.
///
/// A game is created as `Draft`, becomes `Ongoing` when play starts and
/// `Completed` when it ends. Status never moves backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Draft,
    Ongoing,
    Completed,
}

/// The symbol of the player whose turn is next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PlayerSymbol {
    X,
    O,
}

impl PlayerSymbol {
    /// The opposite symbol. Applying this twice is a no-op.
    pub fn toggled(self) -> Self {
        match self {
            PlayerSymbol::X => PlayerSymbol::O,
            PlayerSymbol::O => PlayerSymbol::X,
        }
    }
}

/// A persisted game record.
///
/// `width`, `height` and `cells_to_win` are unset on a fresh draft and are
/// filled in during setup: dimensions first, then rules.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub id: i64,
    pub status: GameStatus,
    pub width: Option<i32>,
    pub height: Option<i32>,
    /// Number of aligned selections required to win.
    pub cells_to_win: Option<i32>,
    pub next_symbol: PlayerSymbol,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_the_symbol() {
        assert_eq!(PlayerSymbol::X.toggled(), PlayerSymbol::O);
        assert_eq!(PlayerSymbol::O.toggled(), PlayerSymbol::X);
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        // Toggling is an involution: two toggles restore the original symbol
        for symbol in [PlayerSymbol::X, PlayerSymbol::O] {
            assert_eq!(symbol.toggled().toggled(), symbol);
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        // The serde text must match the stored column text
        assert_eq!(serde_json::to_string(&GameStatus::Draft).unwrap(), r#""draft""#);
        assert_eq!(serde_json::to_string(&GameStatus::Ongoing).unwrap(), r#""ongoing""#);
        assert_eq!(
            serde_json::to_string(&GameStatus::Completed).unwrap(),
            r#""completed""#
        );
    }

    #[test]
    fn test_symbol_round_trips_through_serde() {
        let symbol: PlayerSymbol = serde_json::from_str(r#""x""#).unwrap();
        assert_eq!(symbol, PlayerSymbol::X);
        assert_eq!(serde_json::to_string(&PlayerSymbol::O).unwrap(), r#""o""#);
    }
}
