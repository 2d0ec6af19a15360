//! Alternating turn invariant: the turn flips at every step, X first.

use super::super::game::Game;
use super::super::Player;
use super::Invariant;

/// Invariant: the initial snapshot has X to move and `to_move` flips
/// between consecutive snapshots.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let snapshots = game.snapshots();

        snapshots
            .first()
            .is_some_and(|first| first.to_move() == Player::X)
            && snapshots
                .windows(2)
                .all(|pair| pair[1].to_move() == pair[0].to_move().opponent())
    }

    fn description() -> &'static str {
        "Turns alternate between snapshots, starting with X"
    }
}
