//! Tic-tac-toe with rewindable move history.
//!
//! The engine in [`game`] owns the full sequence of board snapshots reached
//! this session. [`rules`] holds the pure board queries and [`invariants`]
//! the runtime-checkable statements of the engine's structural guarantees.

mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use game::{Game, HistoryEntry, JumpError, MoveError};
pub use position::Position;
pub use types::{Board, Player, Snapshot, Square, Status};
