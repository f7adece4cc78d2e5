use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{StoreError, StoreResult};
use crate::models::{Game, GameStatus, PlayerSymbol};

/// Store for persisted [`Game`] records.
///
/// All writes are write-through: each mutating operation issues a single
/// statement that is committed immediately. There is no batching and no
/// transaction spanning multiple operations. Mutations return the row as
/// stored (`RETURNING *`), so callers always receive the authoritative
/// database copy rather than an updated in-memory reference.
///
/// The schema enforces that at most one draft and at most one ongoing game
/// exist at a time (partial unique index on `status`), which is what makes
/// the "current game" lookups below well-defined.
pub struct GameStore {
    pool: SqlitePool,
}

impl GameStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<Game>> {
        let game = sqlx::query_as::<_, Game>("SELECT * FROM games WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(game)
    }

    /// The unique game with the given status, or `None`.
    ///
    /// Uniqueness is guaranteed by the schema for `Draft` and `Ongoing`.
    /// Several `Completed` games may exist; which one is returned is
    /// unspecified.
    pub async fn find_by_status(&self, status: GameStatus) -> StoreResult<Option<Game>> {
        let game = sqlx::query_as::<_, Game>("SELECT * FROM games WHERE status = ? LIMIT 1")
            .bind(status)
            .fetch_optional(&self.pool)
            .await?;
        Ok(game)
    }

    /// The player's current new ('draft') game, if any.
    pub async fn find_current_draft(&self) -> StoreResult<Option<Game>> {
        self.find_by_status(GameStatus::Draft).await
    }

    /// The player's current 'ongoing' game, if any.
    pub async fn find_current_ongoing(&self) -> StoreResult<Option<Game>> {
        self.find_by_status(GameStatus::Ongoing).await
    }

    /// The current game: the one draft or ongoing record.
    pub async fn find_current(&self) -> StoreResult<Option<Game>> {
        let game = sqlx::query_as::<_, Game>(
            "SELECT * FROM games WHERE status IN (?, ?) LIMIT 1",
        )
        .bind(GameStatus::Draft)
        .bind(GameStatus::Ongoing)
        .fetch_optional(&self.pool)
        .await?;
        Ok(game)
    }

    /// Like [`Self::find_current_draft`], but the draft must exist.
    pub async fn require_current_draft(&self) -> StoreResult<Game> {
        self.find_current_draft()
            .await?
            .ok_or_else(|| StoreError::not_found("no draft game"))
    }

    /// Like [`Self::find_current_ongoing`], but the game must exist.
    pub async fn require_current_ongoing(&self) -> StoreResult<Game> {
        self.find_current_ongoing()
            .await?
            .ok_or_else(|| StoreError::not_found("no ongoing game"))
    }

    /// Return the current draft game, creating one if none exists.
    ///
    /// Concurrent creation is serialized by the unique index on `status`:
    /// a losing insert is a no-op and the winner's row is returned. Fails
    /// with [`StoreError::DraftCreation`] if no draft is obtainable after
    /// the create-or-fetch attempt.
    pub async fn insert_draft_if_absent(&self) -> StoreResult<Game> {
        if let Some(game) = self.find_current_draft().await? {
            return Ok(game);
        }

        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO games (status, next_symbol, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(GameStatus::Draft)
        .bind(PlayerSymbol::X)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;
        tracing::debug!("created draft game");

        self.find_current_draft()
            .await?
            .ok_or(StoreError::DraftCreation)
    }

    /// Set the game board dimensions.
    pub async fn set_board_dimensions(
        &self,
        game: &Game,
        width: i32,
        height: i32,
    ) -> StoreResult<Game> {
        let updated = sqlx::query_as::<_, Game>(
            r#"
            UPDATE games
            SET width = ?, height = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(width)
        .bind(height)
        .bind(Utc::now())
        .bind(game.id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| StoreError::not_found(format!("game {}", game.id)))
    }

    /// Set the game rules: how many aligned cells are required to win.
    /// Board dimensions are required to be set first.
    pub async fn set_rules(&self, game: &Game, cells_to_win: i32) -> StoreResult<Game> {
        let updated = sqlx::query_as::<_, Game>(
            r#"
            UPDATE games
            SET cells_to_win = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(cells_to_win)
        .bind(Utc::now())
        .bind(game.id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| StoreError::not_found(format!("game {}", game.id)))
    }

    /// Mark the game as started ('ongoing').
    pub async fn mark_started(&self, game: &Game) -> StoreResult<Game> {
        let updated = self.set_status(game.id, GameStatus::Ongoing).await?;
        tracing::debug!(game_id = game.id, "game started");
        Ok(updated)
    }

    /// Mark the game as finished ('completed').
    pub async fn mark_completed(&self, game: &Game) -> StoreResult<Game> {
        let updated = self.set_status(game.id, GameStatus::Completed).await?;
        tracing::debug!(game_id = game.id, "game completed");
        Ok(updated)
    }

    async fn set_status(&self, game_id: i64, status: GameStatus) -> StoreResult<Game> {
        let updated = sqlx::query_as::<_, Game>(
            r#"
            UPDATE games
            SET status = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(Utc::now())
        .bind(game_id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| StoreError::not_found(format!("game {}", game_id)))
    }

    /// A move was made: flip which symbol plays next.
    ///
    /// The flip happens in SQL against the stored value, not against the
    /// caller's possibly stale copy of the record.
    pub async fn toggle_next_symbol(&self, game: &Game) -> StoreResult<Game> {
        let updated = sqlx::query_as::<_, Game>(
            r#"
            UPDATE games
            SET next_symbol = CASE next_symbol WHEN 'x' THEN 'o' ELSE 'x' END,
                updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(Utc::now())
        .bind(game.id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| StoreError::not_found(format!("game {}", game.id)))
    }
}
