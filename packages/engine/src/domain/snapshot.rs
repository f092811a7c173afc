//! Public snapshot API for observing match state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, Point, Side};
use crate::domain::skills::Skill;
use crate::domain::state::{MatchState, MatchStatus};

/// Public info about one dealt skill, metadata included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillPublic {
    pub id: String,
    pub kind: crate::domain::skills::SkillKind,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub cooldown: u8,
    pub max_cooldown: u8,
    pub ready: bool,
}

impl SkillPublic {
    fn of(skill: &Skill) -> Self {
        Self {
            id: skill.kind.id().to_string(),
            kind: skill.kind,
            name: skill.kind.display_name().to_string(),
            description: skill.kind.description().to_string(),
            icon: skill.kind.icon().to_string(),
            color: skill.kind.color().to_string(),
            cooldown: skill.cooldown,
            max_cooldown: skill.kind.max_cooldown(),
            ready: skill.ready(),
        }
    }
}

/// Adjacently tagged match status for serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data")]
pub enum StatusSnapshot {
    Idle,
    Playing,
    Won { winner: Side },
    Draw,
}

impl StatusSnapshot {
    fn of(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Idle => StatusSnapshot::Idle,
            MatchStatus::Playing => StatusSnapshot::Playing,
            MatchStatus::Won { winner } => StatusSnapshot::Won { winner },
            MatchStatus::Draw => StatusSnapshot::Draw,
        }
    }
}

/// Read-only view of the whole match for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub board: Board,
    pub current: Side,
    pub status: StatusSnapshot,
    pub history: Vec<Point>,
    /// Most recent placement, for highlighting. Tracks history, so a
    /// successful Undo moves it back as well.
    pub last_move: Option<Point>,
    pub black_skills: Vec<SkillPublic>,
    pub white_skills: Vec<SkillPublic>,
    pub frozen: Option<Side>,
    pub double_move_pending: bool,
    /// Empty cells left; 0 with no winner means draw.
    pub empty_cells: usize,
}

/// Build the read model for the given state.
pub fn snapshot_match(state: &MatchState) -> MatchSnapshot {
    MatchSnapshot {
        board: state.board.clone(),
        current: state.current,
        status: StatusSnapshot::of(state.status),
        history: state.history.clone(),
        last_move: state.history.last().copied(),
        black_skills: state.black_skills.iter().map(SkillPublic::of).collect(),
        white_skills: state.white_skills.iter().map(SkillPublic::of).collect(),
        frozen: state.frozen,
        double_move_pending: state.double_move_pending,
        empty_cells: state.board.empty_count(),
    }
}
