use crate::domain::board::{Board, Point, Side, BOARD_SIZE};

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.empty_count(), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(board.stone_count(), 0);
    assert!(!board.is_full());
}

#[test]
fn in_bounds_edges() {
    assert!(Board::in_bounds(0, 0));
    assert!(Board::in_bounds(14, 14));
    assert!(!Board::in_bounds(-1, 0));
    assert!(!Board::in_bounds(0, -1));
    assert!(!Board::in_bounds(15, 0));
    assert!(!Board::in_bounds(0, 15));
}

#[test]
fn set_and_get_round_trip() {
    let mut board = Board::new();
    let at = Point::new(3, 11);
    board.set(at, Some(Side::White));
    assert_eq!(board.cell(at), Some(Side::White));
    assert_eq!(board.get(3, 11), Some(Side::White));
    board.set(at, None);
    assert_eq!(board.cell(at), None);
}

#[test]
fn out_of_bounds_reads_as_none() {
    let board = Board::new();
    assert_eq!(board.get(-1, 7), None);
    assert_eq!(board.get(7, 15), None);
}

#[test]
fn stones_and_empty_points_partition_the_grid() {
    let mut board = Board::new();
    board.set(Point::new(0, 0), Some(Side::Black));
    board.set(Point::new(7, 7), Some(Side::White));
    board.set(Point::new(14, 14), Some(Side::Black));

    assert_eq!(
        board.stones(Side::Black),
        vec![Point::new(0, 0), Point::new(14, 14)]
    );
    assert_eq!(board.stones(Side::White), vec![Point::new(7, 7)]);
    assert_eq!(board.empty_points().len(), BOARD_SIZE * BOARD_SIZE - 3);
}

#[test]
fn neighbor_count_is_side_specific() {
    let mut board = Board::new();
    let center = Point::new(7, 7);
    board.set(Point::new(6, 6), Some(Side::Black));
    board.set(Point::new(8, 8), Some(Side::Black));
    board.set(Point::new(6, 8), Some(Side::White));
    // Two steps away, must not count.
    board.set(Point::new(5, 7), Some(Side::Black));

    assert_eq!(board.neighbor_count(center, Side::Black), 2);
    assert_eq!(board.neighbor_count(center, Side::White), 1);
}

#[test]
fn neighbor_count_at_corner_ignores_outside() {
    let mut board = Board::new();
    board.set(Point::new(1, 0), Some(Side::White));
    board.set(Point::new(1, 1), Some(Side::White));
    assert_eq!(board.neighbor_count(Point::new(0, 0), Side::White), 2);
}

#[test]
fn excerpt_marks_stones_and_empties() {
    let mut board = Board::new();
    board.set(Point::new(7, 7), Some(Side::Black));
    board.set(Point::new(8, 7), Some(Side::White));

    let excerpt = board.excerpt(Point::new(7, 7));
    let rows: Vec<&str> = excerpt.lines().collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2], ". . B W .");
}

#[test]
fn excerpt_marks_out_of_bounds_cells() {
    let board = Board::new();
    let excerpt = board.excerpt(Point::new(0, 0));
    let rows: Vec<&str> = excerpt.lines().collect();
    // Two rows above the corner are entirely outside.
    assert_eq!(rows[0], "X X X X X");
    assert_eq!(rows[1], "X X X X X");
    // Center row: two outside cells, then the corner and its neighbors.
    assert_eq!(rows[2], "X X . . .");
}
