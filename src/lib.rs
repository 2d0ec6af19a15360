//! Rewind Games library - tic-tac-toe with rewindable move history
//!
//! The game engine records every board snapshot it reaches instead of
//! overwriting a single board, so play can rewind to any earlier move and
//! continue from there. Moving after a rewind discards the abandoned future.
//!
//! # Architecture
//!
//! - **Games**: pure game state machines (currently tic-tac-toe)
//! - **Session**: isolated per-session game instances for multi-game hosts
//!
//! # Example
//!
//! ```
//! use rewind_games::{Game, Position};
//!
//! let mut game = Game::new();
//! game.make_move(Position::TopLeft)?;
//! game.make_move(Position::Center)?;
//!
//! // Rewind to the empty board and play a different opening.
//! game.jump_to(0)?;
//! game.make_move(Position::Center)?;
//! assert_eq!(game.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod session;

// Crate-level exports - Session management
pub use session::{GameSession, SessionError, SessionId, SessionManager};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, HistoryEntry, JumpError, MoveError, Player, Position, Snapshot, Square, Status,
};

// Crate-level exports - Rules queries
pub use games::tictactoe::rules::{check_winner, is_full};
