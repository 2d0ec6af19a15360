//! History-bearing game engine for tic-tac-toe.
//!
//! Every accepted move appends a snapshot instead of overwriting the board,
//! so play can rewind to any earlier step and continue from there. Moving
//! after a rewind discards the abandoned future.

use super::invariants::assert_invariants;
use super::position::Position;
use super::rules;
use super::types::{Player, Snapshot, Status};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors that can occur when making a move.
///
/// Rejections are expected outcomes of normal play; the engine never
/// mutates state on the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Board index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    InvalidPosition(usize),

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// Error returned when a jump target is outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Step {} is out of range (history has {} steps)", step, len)]
pub struct JumpError {
    /// The rejected step index.
    pub step: usize,
    /// Number of snapshots in history.
    pub len: usize,
}

/// A navigable entry in the move history.
///
/// Pairs a step index with its display label so a frontend can render the
/// history list and feed the index back into [`Game::jump_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    step: usize,
}

impl HistoryEntry {
    /// Returns the step index this entry navigates to.
    pub fn step(&self) -> usize {
        self.step
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.step == 0 {
            write!(f, "Go to game start")
        } else {
            write!(f, "Go to move #{}", self.step)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Engine
// ─────────────────────────────────────────────────────────────

/// Tic-tac-toe game engine with rewindable history.
///
/// The engine owns the full sequence of snapshots reached this session and
/// a pointer to the active one. Snapshots before the pointer are the past;
/// snapshots after it are a provisional future that the next accepted move
/// discards. History is never empty: index 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(super) snapshots: Vec<Snapshot>,
    pub(super) current: usize,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            current: 0,
        }
    }

    /// Returns the active snapshot.
    pub fn current(&self) -> &Snapshot {
        // Index is valid by the never-empty and bounded-step invariants.
        &self.snapshots[self.current]
    }

    /// Returns the index of the active snapshot.
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// Returns the number of snapshots recorded so far (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns all recorded snapshots in move order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Returns the winner on the active board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current().board())
    }

    /// Makes a move at the given position for the player whose turn it is.
    ///
    /// On success the history is truncated to the active step, the new
    /// snapshot is appended, and the pointer advances to it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the active board already has a winner.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(step = self.current, player = ?self.current().to_move()))]
    pub fn make_move(&mut self, position: Position) -> Result<(), MoveError> {
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.current().board().is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let next = self.current().with_move(position);

        // Moving after a rewind erases the abandoned future.
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;

        debug!(step = self.current, "Move accepted");
        assert_invariants(self);
        Ok(())
    }

    /// Makes a move at a raw board index (0-8).
    ///
    /// Index-based boundary for frontends that deal in indices rather than
    /// [`Position`] values: an out-of-range index gets a loud error instead
    /// of a panic.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidPosition`] for indices past 8, otherwise as
    /// [`Game::make_move`].
    #[instrument(skip(self))]
    pub fn make_move_at(&mut self, index: usize) -> Result<(), MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::InvalidPosition(index))?;
        self.make_move(position)
    }

    /// Jumps to the given step without altering history contents.
    ///
    /// A pointer move only: navigation works backward and forward within
    /// the recorded snapshots, and jumping to the current step is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if `step` is past the end of history; the
    /// active step is unchanged.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.snapshots.len() {
            return Err(JumpError {
                step,
                len: self.snapshots.len(),
            });
        }

        self.current = step;
        debug!(step, "Jumped to step");
        Ok(())
    }

    /// Returns the status of the active snapshot.
    ///
    /// A full board with no winner reports the next player; see
    /// [`rules::is_draw`] for callers that want to detect the stall.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(self.current().to_move()),
        }
    }

    /// Returns one navigable entry per recorded snapshot.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        (0..self.snapshots.len())
            .map(|step| HistoryEntry { step })
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_labels() {
        let mut game = Game::new();
        game.make_move(Position::TopLeft).unwrap();
        game.make_move(Position::Center).unwrap();

        let entries = game.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].to_string(), "Go to game start");
        assert_eq!(entries[2].to_string(), "Go to move #2");
        assert_eq!(entries[2].step(), 2);
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidPosition(12).to_string(),
            "Position 12 is out of bounds (must be 0-8)"
        );
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            JumpError { step: 5, len: 3 }.to_string(),
            "Step 5 is out of range (history has 3 steps)"
        );
    }
}
