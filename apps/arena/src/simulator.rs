//! In-memory match runner for policy evaluation.
//!
//! Runs complete matches through the pure domain transitions without a
//! session, commentary, or artificial delays.

use engine::domain::seed_derivation::derive_effect_seed;
use engine::domain::{
    activate_skill, place_stone, MatchState, MatchStatus, MixRng, Point, Side, SkillKind,
};
use engine::{AiError, MovePolicy};

/// Hard stop for degenerate skill loops that keep clearing the board
/// faster than the policies can fill it.
const MAX_PLIES: u32 = 2_000;

/// One logged action: a skill activation or a placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlyRecord {
    pub ply: u32,
    pub side: Side,
    pub skill: Option<SkillKind>,
    pub at: Option<Point>,
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    BlackWin,
    WhiteWin,
    Draw,
}

/// Result of simulating a complete match.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub verdict: Verdict,
    /// Placements made, counting extra double-move and frozen-skip turns.
    pub plies: u32,
    /// Skill activations per seat, indexed by [`Side::index`].
    pub skills_used: [u32; 2],
    pub moves: Vec<PlyRecord>,
}

/// In-memory match simulator. One instance runs one match.
pub struct Simulator {
    state: MatchState,
    rng: MixRng,
    skill_chance: f64,
}

impl Simulator {
    pub fn new(match_seed: u64, skill_chance: f64) -> Self {
        Self {
            state: MatchState::start(match_seed),
            rng: MixRng::new(derive_effect_seed(match_seed)),
            skill_chance,
        }
    }

    /// Run the match to its verdict. `policies` is indexed Black, White.
    pub fn simulate_match(
        mut self,
        policies: &[Box<dyn MovePolicy + Send + Sync>; 2],
    ) -> Result<MatchOutcome, SimulatorError> {
        let mut moves = Vec::new();
        let mut skills_used = [0u32; 2];
        let mut plies = 0u32;

        while self.state.status == MatchStatus::Playing {
            plies += 1;
            if plies > MAX_PLIES {
                return Err(SimulatorError::Stalled(MAX_PLIES));
            }
            let side = self.state.current;

            // Skill phase, same odds the live session gives the computer.
            if self.rng.chance(self.skill_chance) {
                if let Some(kind) = self.pick_ready_skill(side) {
                    activate_skill(&mut self.state, side, kind, &mut self.rng)
                        .map_err(|e| SimulatorError::Domain(format!("skill rejected: {e}")))?;
                    skills_used[side.index()] += 1;
                    moves.push(PlyRecord {
                        ply: plies,
                        side,
                        skill: Some(kind),
                        at: None,
                    });
                }
            }

            let at = policies[side.index()]
                .choose_move(&self.state.board, side)
                .map_err(|e| SimulatorError::Policy(side, e))?;
            place_stone(&mut self.state, side, at)
                .map_err(|e| SimulatorError::Domain(format!("placement rejected: {e}")))?;
            moves.push(PlyRecord {
                ply: plies,
                side,
                skill: None,
                at: Some(at),
            });
        }

        let verdict = match self.state.status {
            MatchStatus::Won {
                winner: Side::Black,
            } => Verdict::BlackWin,
            MatchStatus::Won {
                winner: Side::White,
            } => Verdict::WhiteWin,
            MatchStatus::Draw => Verdict::Draw,
            MatchStatus::Idle | MatchStatus::Playing => {
                return Err(SimulatorError::Domain(
                    "match loop exited without a verdict".into(),
                ))
            }
        };

        Ok(MatchOutcome {
            verdict,
            plies,
            skills_used,
            moves,
        })
    }

    fn pick_ready_skill(&mut self, side: Side) -> Option<SkillKind> {
        let ready: Vec<SkillKind> = self
            .state
            .skills(side)
            .iter()
            .filter(|s| s.ready())
            .map(|s| s.kind)
            .collect();
        if ready.is_empty() {
            None
        } else {
            Some(ready[self.rng.next_range(ready.len())])
        }
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// A policy failed to produce a move.
    Policy(Side, AiError),
    /// A transition the simulator believed legal was rejected.
    Domain(String),
    /// The ply cap was hit without reaching a verdict.
    Stalled(u32),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Policy(side, err) => write!(f, "policy error ({side:?}): {err}"),
            SimulatorError::Domain(msg) => write!(f, "domain error: {msg}"),
            SimulatorError::Stalled(cap) => write!(f, "match stalled after {cap} plies"),
        }
    }
}

impl std::error::Error for SimulatorError {}
