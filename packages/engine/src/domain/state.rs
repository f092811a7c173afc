use crate::domain::board::{Board, Point, Side};
use crate::domain::dealing::deal_skills;
use crate::domain::errors::DomainError;
use crate::domain::seed_derivation::derive_deal_seed;
use crate::domain::skills::Skill;

/// Match progression. Won and Draw are terminal until a new game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// Created but not yet started.
    Idle,
    /// A game is in progress.
    Playing,
    /// Five in a row; `winner` placed the finishing stone.
    Won { winner: Side },
    /// Board full with no winner.
    Draw,
}

/// The one mutable aggregate for a match, sufficient for every pure domain
/// transition. Mutated only through `place_stone` / `activate_skill` (plus
/// construction).
#[derive(Debug, Clone)]
pub struct MatchState {
    pub board: Board,
    /// Side expected to place the next stone.
    pub current: Side,
    pub status: MatchStatus,
    /// Stones placed via the placement action, in order. Skill-injected
    /// stones are not recorded here.
    pub history: Vec<Point>,
    pub black_skills: Vec<Skill>,
    pub white_skills: Vec<Skill>,
    /// Side whose next turn will be skipped, if any.
    pub frozen: Option<Side>,
    /// One-shot marker: the current side keeps the turn after its next
    /// placement.
    pub double_move_pending: bool,
}

impl MatchState {
    /// Empty state before any game has started.
    pub fn idle() -> Self {
        Self {
            board: Board::new(),
            current: Side::Black,
            status: MatchStatus::Idle,
            history: Vec::new(),
            black_skills: Vec::new(),
            white_skills: Vec::new(),
            frozen: None,
            double_move_pending: false,
        }
    }

    /// Fresh game: empty board, Black to move, both sides dealt 3 skills
    /// from seeds derived off `match_seed`.
    pub fn start(match_seed: u64) -> Self {
        Self {
            board: Board::new(),
            current: Side::Black,
            status: MatchStatus::Playing,
            history: Vec::new(),
            black_skills: deal_skills(derive_deal_seed(match_seed, Side::Black)),
            white_skills: deal_skills(derive_deal_seed(match_seed, Side::White)),
            frozen: None,
            double_move_pending: false,
        }
    }

    pub fn skills(&self, side: Side) -> &[Skill] {
        match side {
            Side::Black => &self.black_skills,
            Side::White => &self.white_skills,
        }
    }

    pub fn skills_mut(&mut self, side: Side) -> &mut Vec<Skill> {
        match side {
            Side::Black => &mut self.black_skills,
            Side::White => &mut self.white_skills,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, MatchStatus::Won { .. } | MatchStatus::Draw)
    }

    /// End-of-turn cooldown countdown for the side that just moved.
    pub(crate) fn reduce_cooldowns(&mut self, side: Side) {
        for skill in self.skills_mut(side) {
            skill.tick();
        }
    }
}

pub fn require_playing(state: &MatchState) -> Result<(), DomainError> {
    if state.status != MatchStatus::Playing {
        return Err(DomainError::NotPlaying);
    }
    Ok(())
}

pub fn require_turn(state: &MatchState, side: Side) -> Result<(), DomainError> {
    if state.current != side {
        return Err(DomainError::OutOfTurn);
    }
    Ok(())
}
