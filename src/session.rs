//! Game session management for multi-game hosts.
//!
//! The engine itself is single-threaded and synchronous. Hosts that run
//! several independent games at once give each one its own session: one
//! engine per session, no shared mutable data between sessions, access
//! serialized by the manager's lock.

use crate::games::tictactoe::{Game, JumpError, MoveError, Status};
use derive_more::Display;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Errors from session bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionError {
    /// A session with this ID already exists.
    #[display("Session {} already exists", _0)]
    AlreadyExists(SessionId),

    /// No session with this ID.
    #[display("Session {} not found", _0)]
    NotFound(SessionId),
}

impl std::error::Error for SessionError {}

/// A single isolated game with its own engine.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// The game state.
    pub game: Game,
}

impl GameSession {
    /// Creates a new game session.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            game: Game::new(),
        }
    }

    /// Makes a move at the given board index (0-8).
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn make_move(&mut self, position: usize) -> Result<(), MoveError> {
        self.game.make_move_at(position).map_err(|e| {
            warn!(position, error = %e, "Move rejected");
            e
        })?;

        info!(
            position,
            step = self.game.current_step(),
            status = %self.game.status(),
            "Move completed successfully"
        );

        Ok(())
    }

    /// Jumps to the given step in this session's history.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        self.game.jump_to(step).map_err(|e| {
            warn!(step, error = %e, "Jump rejected");
            e
        })?;

        info!(step, "Jumped to step");
        Ok(())
    }

    /// Returns the status of this session's active snapshot.
    pub fn status(&self) -> Status {
        self.game.status()
    }
}

/// Manages all game sessions.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a new game session.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId) -> Result<SessionId, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        let session = GameSession::new(id.clone());
        sessions.insert(id.clone(), session);

        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Gets a snapshot of a session by ID.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(id).cloned();

        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }

        session
    }

    /// Updates a session.
    #[instrument(skip(self, session), fields(session_id = %session.id))]
    pub fn update_session(&self, session: GameSession) {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(session.id.clone(), session);
        debug!("Session updated");
    }

    /// Lists all active session IDs.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let sessions = self.sessions.lock().unwrap();
        let ids: Vec<_> = sessions.keys().cloned().collect();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }

    /// Runs an operation on a session while holding the lock (thread-safe).
    ///
    /// This is the atomic counterpart of `get_session`/`update_session` for
    /// callers that mutate the game from multiple threads.
    #[instrument(skip(self, op))]
    pub fn with_session<R>(
        &self,
        id: &str,
        op: impl FnOnce(&mut GameSession) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();

        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        Ok(op(session))
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
