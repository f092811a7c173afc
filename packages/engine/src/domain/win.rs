//! Win detection: five-in-a-row through the stone that was just placed.

use crate::domain::board::{Board, Point, Side, BOARD_SIZE};

/// The four line directions that can carry a row of five.
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // horizontal
    (0, 1),  // vertical
    (1, 1),  // diagonal down
    (1, -1), // diagonal up
];

/// Whether `last_move` completes five or more in a row for `side`.
///
/// Counts contiguous same-side stones forward and backward from `last_move`
/// (inclusive), stopping at a board edge or any non-matching cell. Must be
/// called with `board[last_move]` already set to `side`; the result is
/// meaningless otherwise.
pub fn check_win(board: &Board, last_move: Point, side: Side) -> bool {
    for (dx, dy) in DIRECTIONS {
        let count = 1 + ray_length(board, last_move, side, dx, dy)
            + ray_length(board, last_move, side, -dx, -dy);
        if count >= 5 {
            return true;
        }
    }
    false
}

/// Contiguous `side` stones starting one step from `from` along `(dx, dy)`.
fn ray_length(board: &Board, from: Point, side: Side, dx: i32, dy: i32) -> u32 {
    let mut count = 0;
    let mut x = from.x as i32 + dx;
    let mut y = from.y as i32 + dy;
    while Board::in_bounds(x, y) && board.get(x, y) == Some(side) {
        count += 1;
        x += dx;
        y += dy;
    }
    count
}

/// Trial placement: would placing a `side` stone at `at` win immediately?
///
/// Returns false for occupied cells. Works on a private copy; the given
/// board is never mutated.
pub fn wins_if_played(board: &Board, at: Point, side: Side) -> bool {
    if board.cell(at).is_some() {
        return false;
    }
    let mut trial = board.clone();
    trial.set(at, Some(side));
    check_win(&trial, at, side)
}

/// First empty cell in row-major scan order that would win for `side`, if any.
///
/// Used by the heuristic for both its offense check and, with the opponent
/// side, its block check.
pub fn find_winning_move(board: &Board, side: Side) -> Option<Point> {
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let at = Point::new(x as u8, y as u8);
            if board.cell(at).is_none() && wins_if_played(board, at, side) {
                return Some(at);
            }
        }
    }
    None
}
