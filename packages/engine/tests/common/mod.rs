#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use engine::domain::{Board, Point, Side, BOARD_SIZE};

static INITIALIZED: OnceCell<()> = OnceCell::new();

// Logging is auto-installed for every test binary that declares this module.
#[ctor::ctor]
fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Winless tiling: alternating two-wide stripes with a half-period shift
/// every second row. The longest same-side run in any of the four scan
/// directions is four.
pub fn tiling_side(x: u8, y: u8) -> Side {
    if (u16::from(x) + u16::from(y) / 2) % 4 < 2 {
        Side::Black
    } else {
        Side::White
    }
}

/// A board covered by the winless tiling except for `open` cells.
pub fn tiled_board_except(open: &[Point]) -> Board {
    let mut board = Board::new();
    for y in 0..BOARD_SIZE as u8 {
        for x in 0..BOARD_SIZE as u8 {
            let at = Point::new(x, y);
            if !open.contains(&at) {
                board.set(at, Some(tiling_side(x, y)));
            }
        }
    }
    board
}

pub fn count_stones(board: &Board, side: Side) -> usize {
    board.stones(side).len()
}
