//! Single-mark delta invariant: each step adds exactly one mark.

use super::super::game::Game;
use super::super::{Position, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, and that
/// square went from empty to the mark of the player who was to move.
///
/// Marks are never removed or overwritten; rewinding moves the pointer and
/// truncation drops whole snapshots, so the recorded boards only ever grow
/// one mark at a time.
pub struct SingleMarkDeltaInvariant;

impl Invariant<Game> for SingleMarkDeltaInvariant {
    fn holds(game: &Game) -> bool {
        game.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let mut placed = 0;

            for pos in Position::ALL {
                match (before.board().get(pos), after.board().get(pos)) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(player)) if player == before.to_move() => {
                        placed += 1;
                    }
                    _ => return false,
                }
            }

            placed == 1
        })
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ by exactly one new mark"
    }
}
