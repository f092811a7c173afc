//! Stone placement transition: the core turn step.

use crate::domain::board::{Board, Point, Side};
use crate::domain::errors::DomainError;
use crate::domain::state::{require_playing, require_turn, MatchState, MatchStatus};
use crate::domain::win::check_win;

/// How the turn resolved after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Normal alternation: the opponent moves next.
    Switched,
    /// Double-move flag consumed; the same side moves again.
    KeptDoubleMove,
    /// The opponent was frozen and lost its turn; the same side moves again.
    KeptFrozenSkip,
    /// The placement won the match.
    Won,
    /// The placement filled the board with no winner.
    Draw,
}

/// Result of a placement, describing what state changes occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementResult {
    pub at: Point,
    pub side: Side,
    pub outcome: TurnOutcome,
}

/// Place a stone for `side` at `at`.
///
/// Rejected with no state change when the match is not in progress, it is
/// not `side`'s turn, the coordinate is out of bounds, or the cell is
/// occupied. On success the stone lands on a board clone that replaces the
/// original, the move is appended to history, and win/draw/turn logic runs.
pub fn place_stone(
    state: &mut MatchState,
    side: Side,
    at: Point,
) -> Result<PlacementResult, DomainError> {
    require_playing(state)?;
    require_turn(state, side)?;
    if !Board::in_bounds(at.x as i32, at.y as i32) {
        return Err(DomainError::OutOfBounds { x: at.x, y: at.y });
    }
    if state.board.cell(at).is_some() {
        return Err(DomainError::CellOccupied { x: at.x, y: at.y });
    }

    let mut board = state.board.clone();
    board.set(at, Some(side));
    state.board = board;
    state.history.push(at);

    if check_win(&state.board, at, side) {
        state.status = MatchStatus::Won { winner: side };
        return Ok(PlacementResult {
            at,
            side,
            outcome: TurnOutcome::Won,
        });
    }

    if state.board.is_full() {
        state.status = MatchStatus::Draw;
        return Ok(PlacementResult {
            at,
            side,
            outcome: TurnOutcome::Draw,
        });
    }

    // Turn-modifier precedence: double move beats freeze beats alternation.
    let next = side.opponent();
    let outcome = if state.double_move_pending {
        state.double_move_pending = false;
        TurnOutcome::KeptDoubleMove
    } else if state.frozen == Some(next) {
        state.frozen = None;
        TurnOutcome::KeptFrozenSkip
    } else {
        state.current = next;
        TurnOutcome::Switched
    };

    // Cooldowns count down whenever the turn was not kept via the
    // double-move flag; a frozen skip still counts as a completed turn.
    if outcome != TurnOutcome::KeptDoubleMove {
        state.reduce_cooldowns(side);
    }

    Ok(PlacementResult { at, side, outcome })
}
