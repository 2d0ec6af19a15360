//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 winning lines, scanned in this fixed order: rows top to bottom,
/// then columns left to right, then the two diagonals.
///
/// In any reachable game state at most one player holds a line (move
/// legality forbids moves after a win), so the scan order only matters
/// for determinism.
pub(crate) const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WINNING_LINES {
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(positions: &[Position], player: Player) -> Board {
        let mut board = Board::new();
        for &pos in positions {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let board = board_with(&line, Player::X);
            assert_eq!(check_winner(&board), Some(Player::X));

            let board = board_with(&line, Player::O);
            assert_eq!(check_winner(&board), Some(Player::O));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[Position::TopLeft, Position::TopCenter], Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_marks_do_not_win() {
        let mut board = board_with(&[Position::TopLeft, Position::TopCenter], Player::X);
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }
}
