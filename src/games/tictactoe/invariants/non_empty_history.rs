//! Never-empty history invariant: step 0 always exists, the pointer stays in bounds.

use super::super::game::Game;
use super::Invariant;

/// Invariant: history holds at least the initial snapshot and the active
/// step indexes into it.
///
/// Every query on the engine reads through the active step, so this is the
/// invariant that makes `Game::current` total.
pub struct NonEmptyHistoryInvariant;

impl Invariant<Game> for NonEmptyHistoryInvariant {
    fn holds(game: &Game) -> bool {
        !game.snapshots().is_empty() && game.current_step() < game.snapshots().len()
    }

    fn description() -> &'static str {
        "History is never empty and the active step is within it"
    }
}
