use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use common::games::SessionRng;
use common::games::tictactoe::{BotType, GameMode, GameSession, GameSnapshot, Position};
use common::{GameError, GameId, log};

type SharedSession = Arc<Mutex<GameSession>>;

/// Process-wide map of live games.
///
/// The map lock is only held to look up, insert or remove an entry; each game
/// has its own lock so concurrent requests against one game are serialized
/// while different games proceed independently.
#[derive(Debug, Clone)]
pub struct GameSessionManager {
    sessions: Arc<Mutex<HashMap<GameId, SharedSession>>>,
    bot_type: BotType,
}

impl GameSessionManager {
    pub fn new(bot_type: BotType) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            bot_type,
        }
    }

    pub async fn create_session(&self) -> GameId {
        let game_id = GameId::generate();
        let rng = SessionRng::from_random();
        let seed = rng.seed();
        let session = GameSession::new(game_id.clone(), self.bot_type, rng);

        let mut sessions = self.sessions.lock().await;
        sessions.insert(game_id.clone(), Arc::new(Mutex::new(session)));
        let active = sessions.len();
        drop(sessions);

        log!("Game session created: {} (seed {}, {} active)", game_id, seed, active);
        game_id
    }

    async fn get_session(&self, game_id: &GameId) -> Result<SharedSession, GameError> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(game_id)
            .cloned()
            .ok_or_else(|| GameError::UnknownGameId(game_id.clone()))
    }

    /// `mode` is the raw wire value; it is parsed only once the game is known
    /// to exist.
    pub async fn set_mode(&self, game_id: &GameId, mode: Option<&str>) -> Result<(), GameError> {
        let session = self.get_session(game_id).await?;
        let mode: GameMode = mode.ok_or(GameError::MissingMode)?.parse()?;
        session.lock().await.set_mode(mode);
        log!("Game {} mode set to {}", game_id, mode);
        Ok(())
    }

    /// Applies the human move (and the bot reply in bot mode) and returns the
    /// resulting state together with the bot's cell, if it moved.
    pub async fn make_move(
        &self,
        game_id: &GameId,
        row: i64,
        col: i64,
    ) -> Result<(GameSnapshot, Option<Position>), GameError> {
        let session = self.get_session(game_id).await?;
        let pos = Position::from_signed(row, col)?;
        let mut session = session.lock().await;

        let result = session.play(pos)?;
        let snapshot = session.snapshot();

        if snapshot.status.is_over() {
            log!("Game {} finished: {:?}", session.id(), snapshot.status);
        }

        Ok((snapshot, result.bot_move))
    }

    pub async fn get_state(&self, game_id: &GameId) -> Result<GameSnapshot, GameError> {
        let session = self.get_session(game_id).await?;
        let mut session = session.lock().await;
        session.touch();
        Ok(session.snapshot())
    }

    pub async fn reset(&self, game_id: &GameId) -> Result<GameSnapshot, GameError> {
        let session = self.get_session(game_id).await?;
        let mut session = session.lock().await;
        session.reset();
        log!("Game {} reset", game_id);
        Ok(session.snapshot())
    }

    pub async fn get_inactive_sessions(&self, timeout: Duration) -> Vec<GameId> {
        let sessions: Vec<(GameId, SharedSession)> = {
            let sessions = self.sessions.lock().await;
            sessions
                .iter()
                .map(|(id, session)| (id.clone(), session.clone()))
                .collect()
        };

        let mut inactive = Vec::new();
        for (game_id, session) in sessions {
            if session.lock().await.idle_for() >= timeout {
                inactive.push(game_id);
            }
        }
        inactive
    }

    /// Removes the game only if it is still idle for at least `timeout`.
    /// A game whose lock is held by a request is in use and is kept.
    pub async fn remove_if_inactive(&self, game_id: &GameId, timeout: Duration) -> bool {
        let mut sessions = self.sessions.lock().await;
        let still_idle = match sessions.get(game_id) {
            Some(session) => session
                .try_lock()
                .is_ok_and(|session| session.idle_for() >= timeout),
            None => false,
        };
        if !still_idle {
            return false;
        }

        sessions.remove(game_id);
        log!("Inactive game session removed: {}", game_id);
        true
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
