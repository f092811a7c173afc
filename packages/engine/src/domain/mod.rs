//! Domain layer: pure game logic types and transitions.

pub mod board;
pub mod dealing;
pub mod effects;
pub mod errors;
pub mod placement;
pub mod rng;
pub mod seed_derivation;
pub mod skill_play;
pub mod skills;
pub mod snapshot;
pub mod state;
pub mod win;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_board;
#[cfg(test)]
mod tests_placement;
#[cfg(test)]
mod tests_props_placement;
#[cfg(test)]
mod tests_win;

// Re-exports for ergonomics
pub use board::{Board, Point, Side, BOARD_SIZE};
pub use effects::SkillEffect;
pub use errors::DomainError;
pub use placement::{place_stone, PlacementResult, TurnOutcome};
pub use rng::MixRng;
pub use skill_play::{activate_skill, SkillPlayResult};
pub use skills::{Skill, SkillKind};
pub use snapshot::{snapshot_match, MatchSnapshot, SkillPublic, StatusSnapshot};
pub use state::{MatchState, MatchStatus};
pub use win::{check_win, find_winning_move, wins_if_played};
