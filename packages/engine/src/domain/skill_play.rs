//! Skill activation transition.

use crate::domain::board::Side;
use crate::domain::effects::{resolve, SkillEffect};
use crate::domain::errors::DomainError;
use crate::domain::rng::MixRng;
use crate::domain::skills::SkillKind;
use crate::domain::state::{require_playing, require_turn, MatchState};

/// Result of a skill activation, describing what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillPlayResult {
    pub kind: SkillKind,
    pub effect: SkillEffect,
}

/// Activate `kind` for `side` after the turn and cooldown checks pass.
///
/// The cooldown is consumed on the attempt: a fizzled effect still pays.
/// Activation never passes the turn by itself and never runs a win check;
/// skill-injected stones wait for the next placement to matter.
pub fn activate_skill(
    state: &mut MatchState,
    side: Side,
    kind: SkillKind,
    rng: &mut MixRng,
) -> Result<SkillPlayResult, DomainError> {
    require_playing(state)?;
    require_turn(state, side)?;

    let skill = state
        .skills_mut(side)
        .iter_mut()
        .find(|s| s.kind == kind)
        .ok_or(DomainError::SkillNotHeld)?;
    if !skill.ready() {
        return Err(DomainError::SkillOnCooldown {
            remaining: skill.cooldown,
        });
    }
    skill.consume();

    let effect = match kind {
        SkillKind::Undo => undo(state, side),
        SkillKind::DoubleMove => {
            state.double_move_pending = true;
            SkillEffect::DoubleMovePending
        }
        _ => {
            let resolution = resolve(&state.board, side, kind, rng);
            if let Some(board) = resolution.patch.board {
                state.board = board;
            }
            if let Some(frozen) = resolution.patch.frozen {
                state.frozen = Some(frozen);
            }
            resolution.effect
        }
    };

    Ok(SkillPlayResult { kind, effect })
}

/// Remove the most recent one or two placements and return the turn to the
/// activator. Empty history fizzles (the cooldown is already spent).
fn undo(state: &mut MatchState, side: Side) -> SkillEffect {
    if state.history.is_empty() {
        return SkillEffect::Fizzled;
    }

    let take = state.history.len().min(2);
    let mut removed = Vec::with_capacity(take);
    let mut board = state.board.clone();
    for _ in 0..take {
        if let Some(at) = state.history.pop() {
            board.set(at, None);
            removed.push(at);
        }
    }
    state.board = board;
    state.current = side;
    SkillEffect::Undone { removed }
}
