//! Skill effect resolver for the board-targeting kinds.
//!
//! Undo (history-dependent) and DoubleMove (turn-flag only) are resolved by
//! the activation transition itself; everything else lands here. The
//! resolver never mutates the board it is given: patches carry a clone.

use crate::domain::board::{Board, Point, Side, BOARD_SIZE};
use crate::domain::rng::MixRng;
use crate::domain::skills::SkillKind;

/// Boom gives up after this many attempts to find a stone-bearing area.
const BOOM_ATTEMPTS: u32 = 100;

/// What a skill activation did, for observers and the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillEffect {
    /// Undo removed these placements (most recent first).
    Undone { removed: Vec<Point> },
    /// Boom cleared the 3x3 area around `center`.
    Boomed { center: Point },
    /// Swap converted the opponent stone at `at`.
    Swapped { at: Point },
    /// Randomize dropped a stone at `at`.
    Randomized { at: Point },
    /// Freeze marked `target` to skip its next turn.
    Frozen { target: Side },
    /// The activating side keeps the turn for one extra placement.
    DoubleMovePending,
    /// Cooldown consumed, no effect applied.
    Fizzled,
}

/// Partial state patch produced by a resolution.
#[derive(Debug, Clone, Default)]
pub struct EffectPatch {
    pub board: Option<Board>,
    pub frozen: Option<Side>,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub effect: SkillEffect,
    pub patch: EffectPatch,
}

impl Resolution {
    fn fizzle() -> Self {
        Self {
            effect: SkillEffect::Fizzled,
            patch: EffectPatch::default(),
        }
    }
}

/// Resolve a board-targeting skill for `side`.
///
/// Kinds the caller must special-case (Undo, DoubleMove) fizzle here.
pub fn resolve(board: &Board, side: Side, kind: SkillKind, rng: &mut MixRng) -> Resolution {
    match kind {
        SkillKind::Boom => boom(board, rng),
        SkillKind::Swap => swap_one(board, side, rng),
        SkillKind::Randomize => randomize_one(board, side, rng),
        SkillKind::Freeze => Resolution {
            effect: SkillEffect::Frozen {
                target: side.opponent(),
            },
            patch: EffectPatch {
                board: None,
                frozen: Some(side.opponent()),
            },
        },
        SkillKind::Undo | SkillKind::DoubleMove => Resolution::fizzle(),
    }
}

/// Clear a random 3x3 area containing at least one stone. Center is drawn
/// uniformly from [1, N-2] on both axes so the area stays in bounds.
fn boom(board: &Board, rng: &mut MixRng) -> Resolution {
    let mut center = None;
    for _ in 0..BOOM_ATTEMPTS {
        let cx = rng.next_range(BOARD_SIZE - 2) as u8 + 1;
        let cy = rng.next_range(BOARD_SIZE - 2) as u8 + 1;
        if area_has_stone(board, cx, cy) {
            center = Some(Point::new(cx, cy));
            break;
        }
    }
    let Some(center) = center else {
        return Resolution::fizzle();
    };

    let mut cleared = board.clone();
    for dy in -1..=1 {
        for dx in -1..=1 {
            let at = Point::new(
                (center.x as i32 + dx) as u8,
                (center.y as i32 + dy) as u8,
            );
            cleared.set(at, None);
        }
    }
    Resolution {
        effect: SkillEffect::Boomed { center },
        patch: EffectPatch {
            board: Some(cleared),
            frozen: None,
        },
    }
}

fn area_has_stone(board: &Board, cx: u8, cy: u8) -> bool {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if board.get(cx as i32 + dx, cy as i32 + dy).is_some() {
                return true;
            }
        }
    }
    false
}

/// Convert one random opponent stone into the activator's.
fn swap_one(board: &Board, side: Side, rng: &mut MixRng) -> Resolution {
    let targets = board.stones(side.opponent());
    if targets.is_empty() {
        return Resolution::fizzle();
    }
    let at = targets[rng.next_range(targets.len())];
    let mut patched = board.clone();
    patched.set(at, Some(side));
    Resolution {
        effect: SkillEffect::Swapped { at },
        patch: EffectPatch {
            board: Some(patched),
            frozen: None,
        },
    }
}

/// Drop an activator stone on one random empty cell.
fn randomize_one(board: &Board, side: Side, rng: &mut MixRng) -> Resolution {
    let spots = board.empty_points();
    if spots.is_empty() {
        return Resolution::fizzle();
    }
    let at = spots[rng.next_range(spots.len())];
    let mut patched = board.clone();
    patched.set(at, Some(side));
    Resolution {
        effect: SkillEffect::Randomized { at },
        patch: EffectPatch {
            board: Some(patched),
            frozen: None,
        },
    }
}
