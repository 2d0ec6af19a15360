//! Application state and logic.

use rewind_games::{Game, Status};
use tracing::debug;

/// Main application state.
pub struct App {
    game: Game,
    status_message: String,
    selected_entry: usize,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            status_message: "Player X's turn. Press 1-9 to make a move.".to_string(),
            selected_entry: 0,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the history entry the cursor is on.
    pub fn selected_entry(&self) -> usize {
        self.selected_entry
    }

    /// Places a mark at the given board index.
    pub fn place(&mut self, index: usize) {
        debug!(index, "Placing mark");

        match self.game.make_move_at(index) {
            Ok(()) => {
                // Follow the newly recorded step with the cursor.
                self.selected_entry = self.game.current_step();
                self.status_message = match self.game.status() {
                    Status::NextPlayer(player) => format!("Player {:?}'s turn", player),
                    Status::Winner(player) => format!(
                        "Player {:?} wins! Jump into the history to replay, or press 'q' to quit.",
                        player
                    ),
                };
            }
            Err(e) => {
                self.status_message = format!("Invalid move: {}. Try again.", e);
            }
        }
    }

    /// Moves the history cursor one entry up.
    pub fn select_previous(&mut self) {
        self.selected_entry = self.selected_entry.saturating_sub(1);
    }

    /// Moves the history cursor one entry down.
    pub fn select_next(&mut self) {
        self.selected_entry = (self.selected_entry + 1).min(self.game.len() - 1);
    }

    /// Jumps to the step the cursor is on.
    pub fn jump_to_selected(&mut self) {
        debug!(step = self.selected_entry, "Jumping to step");

        match self.game.jump_to(self.selected_entry) {
            Ok(()) => {
                self.status_message = self.game.status().to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot jump: {}", e);
            }
        }
    }
}
