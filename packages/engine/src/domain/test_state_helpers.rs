//! Test-only match state helper for domain unit tests.

use crate::domain::board::{Board, Point, Side};
use crate::domain::skills::{Skill, SkillKind};
use crate::domain::state::{MatchState, MatchStatus};

/// Arguments for [`make_match_state`]; use `..Default::default()` and set
/// only what the test cares about.
pub struct MakeMatchStateArgs {
    pub current: Side,
    pub status: MatchStatus,
    /// Stones to pre-place, in order. Recorded in history unless
    /// `history` overrides it.
    pub stones: Vec<(u8, u8, Side)>,
    /// Explicit history; defaults to the coordinates of `stones`.
    pub history: Option<Vec<Point>>,
    pub black_skills: Vec<Skill>,
    pub white_skills: Vec<Skill>,
    pub frozen: Option<Side>,
    pub double_move_pending: bool,
}

impl Default for MakeMatchStateArgs {
    fn default() -> Self {
        Self {
            current: Side::Black,
            status: MatchStatus::Playing,
            stones: Vec::new(),
            history: None,
            black_skills: Vec::new(),
            white_skills: Vec::new(),
            frozen: None,
            double_move_pending: false,
        }
    }
}

/// Build a `MatchState` for testing without going through dealing.
pub fn make_match_state(args: MakeMatchStateArgs) -> MatchState {
    let mut board = Board::new();
    let mut history = Vec::new();
    for (x, y, side) in &args.stones {
        let at = Point::new(*x, *y);
        board.set(at, Some(*side));
        history.push(at);
    }
    MatchState {
        board,
        current: args.current,
        status: args.status,
        history: args.history.unwrap_or(history),
        black_skills: args.black_skills,
        white_skills: args.white_skills,
        frozen: args.frozen,
        double_move_pending: args.double_move_pending,
    }
}

/// One ready skill of each given kind.
pub fn ready_skills(kinds: &[SkillKind]) -> Vec<Skill> {
    kinds.iter().copied().map(Skill::new).collect()
}
