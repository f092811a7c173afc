use crate::domain::board::{Board, Point, Side};
use crate::domain::win::{check_win, find_winning_move, wins_if_played};

fn board_with(points: &[(u8, u8)], side: Side) -> Board {
    let mut board = Board::new();
    for (x, y) in points {
        board.set(Point::new(*x, *y), Some(side));
    }
    board
}

#[test]
fn five_horizontal_wins() {
    let board = board_with(&[(3, 7), (4, 7), (5, 7), (6, 7), (7, 7)], Side::Black);
    assert!(check_win(&board, Point::new(5, 7), Side::Black));
    // Any stone of the row works as the probe point.
    assert!(check_win(&board, Point::new(3, 7), Side::Black));
    assert!(check_win(&board, Point::new(7, 7), Side::Black));
}

#[test]
fn five_vertical_wins() {
    let board = board_with(&[(2, 4), (2, 5), (2, 6), (2, 7), (2, 8)], Side::White);
    assert!(check_win(&board, Point::new(2, 6), Side::White));
}

#[test]
fn five_diagonal_down_wins() {
    let board = board_with(&[(4, 4), (5, 5), (6, 6), (7, 7), (8, 8)], Side::Black);
    assert!(check_win(&board, Point::new(6, 6), Side::Black));
}

#[test]
fn five_diagonal_up_wins() {
    let board = board_with(&[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)], Side::White);
    assert!(check_win(&board, Point::new(6, 6), Side::White));
}

#[test]
fn four_is_not_a_win() {
    let board = board_with(&[(3, 7), (4, 7), (5, 7), (6, 7)], Side::Black);
    assert!(!check_win(&board, Point::new(5, 7), Side::Black));
}

#[test]
fn six_in_a_row_wins() {
    let board = board_with(&[(3, 7), (4, 7), (5, 7), (6, 7), (7, 7), (8, 7)], Side::Black);
    assert!(check_win(&board, Point::new(5, 7), Side::Black));
}

#[test]
fn opponent_stone_breaks_the_line() {
    let mut board = board_with(&[(3, 7), (4, 7), (6, 7), (7, 7), (8, 7)], Side::Black);
    board.set(Point::new(5, 7), Some(Side::White));
    assert!(!check_win(&board, Point::new(4, 7), Side::Black));
    assert!(!check_win(&board, Point::new(7, 7), Side::Black));
}

#[test]
fn empty_gap_breaks_the_line() {
    let board = board_with(&[(3, 7), (4, 7), (6, 7), (7, 7), (8, 7)], Side::Black);
    assert!(!check_win(&board, Point::new(4, 7), Side::Black));
}

#[test]
fn win_at_board_edge() {
    let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Side::White);
    assert!(check_win(&board, Point::new(0, 0), Side::White));
    assert!(check_win(&board, Point::new(0, 4), Side::White));
}

#[test]
fn wins_if_played_detects_the_gap() {
    let board = board_with(&[(3, 7), (4, 7), (6, 7), (7, 7)], Side::Black);
    assert!(wins_if_played(&board, Point::new(5, 7), Side::Black));
    assert!(!wins_if_played(&board, Point::new(8, 7), Side::White));
}

#[test]
fn wins_if_played_rejects_occupied_cells() {
    let board = board_with(&[(3, 7), (4, 7), (5, 7), (6, 7)], Side::Black);
    assert!(!wins_if_played(&board, Point::new(4, 7), Side::Black));
}

#[test]
fn wins_if_played_leaves_the_board_untouched() {
    let board = board_with(&[(3, 7), (4, 7), (6, 7), (7, 7)], Side::Black);
    let before = board.clone();
    let _ = wins_if_played(&board, Point::new(5, 7), Side::Black);
    assert_eq!(board, before);
}

#[test]
fn find_winning_move_returns_first_in_row_major_order() {
    // Two completable fours: one finishing at (5, 2), one at (5, 9).
    let mut board = board_with(&[(1, 2), (2, 2), (3, 2), (4, 2)], Side::Black);
    for x in 1..5 {
        board.set(Point::new(x, 9), Some(Side::Black));
    }
    // (0, 2) also completes the first four; row-major scan hits it first.
    assert_eq!(find_winning_move(&board, Side::Black), Some(Point::new(0, 2)));
}

#[test]
fn find_winning_move_none_without_a_four() {
    let board = board_with(&[(3, 7), (4, 7), (5, 7)], Side::Black);
    assert_eq!(find_winning_move(&board, Side::Black), None);
}
