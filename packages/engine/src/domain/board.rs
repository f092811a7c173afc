//! Board model: fixed 15x15 grid with three-valued cells.

use serde::{Deserialize, Serialize};

/// Board dimension. The grid is always square.
pub const BOARD_SIZE: usize = 15;

/// One of the two competing players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Stable index for per-side arrays (Black = 0, White = 1).
    pub fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }
}

/// Board coordinate. `x` is the column, `y` the row, both `0..BOARD_SIZE`
/// once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// The playing grid. Mutation happens on clones that replace the original
/// wholesale, so readers never observe a half-applied update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Side>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// All-empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < BOARD_SIZE && y >= 0 && (y as usize) < BOARD_SIZE
    }

    /// Cell lookup with signed coordinates. Out-of-bounds reads as `None`,
    /// which callers that care about the edge must distinguish via
    /// [`Board::in_bounds`].
    pub fn get(&self, x: i32, y: i32) -> Option<Side> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        self.cells[y as usize][x as usize]
    }

    /// Cell lookup for a validated point.
    pub fn cell(&self, at: Point) -> Option<Side> {
        self.get(at.x as i32, at.y as i32)
    }

    pub fn set(&mut self, at: Point, value: Option<Side>) {
        self.cells[at.y as usize][at.x as usize] = value;
    }

    /// All coordinates currently holding a stone of `side`, row-major.
    pub fn stones(&self, side: Side) -> Vec<Point> {
        self.points_where(|cell| cell == Some(side))
    }

    /// All empty coordinates, row-major.
    pub fn empty_points(&self) -> Vec<Point> {
        self.points_where(|cell| cell.is_none())
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_none())
            .count()
    }

    pub fn stone_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    fn points_where(&self, pred: impl Fn(Option<Side>) -> bool) -> Vec<Point> {
        let mut points = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if pred(self.cells[y][x]) {
                    points.push(Point::new(x as u8, y as u8));
                }
            }
        }
        points
    }

    /// Count of `side` stones among the 8 neighbors of `at`.
    pub fn neighbor_count(&self, at: Point, side: Side) -> u32 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.get(at.x as i32 + dx, at.y as i32 + dy) == Some(side) {
                    count += 1;
                }
            }
        }
        count
    }

    /// 5x5 text window centered on `at`, for the commentary boundary.
    ///
    /// `B` black, `W` white, `.` empty, `X` outside the board. Cells are
    /// space-separated, one row per line.
    pub fn excerpt(&self, at: Point) -> String {
        let mut out = String::new();
        for dy in -2..=2 {
            let mut row = String::new();
            for dx in -2..=2 {
                let x = at.x as i32 + dx;
                let y = at.y as i32 + dy;
                let mark = if Self::in_bounds(x, y) {
                    match self.get(x, y) {
                        Some(Side::Black) => "B",
                        Some(Side::White) => "W",
                        None => ".",
                    }
                } else {
                    "X"
                };
                row.push_str(mark);
                row.push(' ');
            }
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }
}
