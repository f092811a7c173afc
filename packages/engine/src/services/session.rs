//! Match session: owns one match, serializes its transitions, and drives
//! the computer opponent.
//!
//! All transitions run under one async mutex, so no operation observes a
//! half-applied state. The only long-lived async work is the computer's
//! thinking delay and the commentary requests; both are guarded by a match
//! epoch so a restart discards their effects instead of corrupting the new
//! game.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{sleep, Duration};
use tracing::{debug, info};

use crate::ai::MovePolicy;
use crate::commentary::{Commentator, MoveContext};
use crate::domain::{
    activate_skill, place_stone, snapshot_match, MatchSnapshot, MatchState, MatchStatus, MixRng,
    Point, Side, SkillEffect, SkillKind, TurnOutcome,
};
use crate::error::AppError;
use crate::services::events::SessionEvent;

/// Seat assignment is fixed: the human plays Black and moves first.
pub const HUMAN: Side = Side::Black;
/// The computer always plays White.
pub const COMPUTER: Side = Side::White;

/// Posted as the first event of every game, before the opening resolves.
const CONNECTING_NOTICE: &str = "正在连接赛博解说员...";

/// Tunables for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Artificial thinking delay range in milliseconds, inclusive. Tests
    /// set `(0, 0)` to skip the wait.
    pub think_delay_ms: (u64, u64),
    /// Chance that the computer opens its turn with a skill activation.
    pub skill_chance: f64,
    /// Seed for the session RNG. `None` draws one from system entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: (800, 1800),
            skill_chance: 0.2,
            seed: None,
        }
    }
}

struct SessionInner {
    state: MatchState,
    /// Bumped on every `start_game`; stale async work compares against it
    /// and drops its result on mismatch.
    epoch: u64,
    rng: MixRng,
    events: Vec<SessionEvent>,
}

/// One human-versus-computer match and its observer event log.
pub struct MatchSession {
    inner: Arc<Mutex<SessionInner>>,
    policy: Arc<dyn MovePolicy>,
    commentator: Arc<dyn Commentator>,
    config: SessionConfig,
}

impl MatchSession {
    pub fn new(
        policy: Arc<dyn MovePolicy>,
        commentator: Arc<dyn Commentator>,
        config: SessionConfig,
    ) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                state: MatchState::idle(),
                epoch: 0,
                rng: MixRng::new(seed),
                events: Vec::new(),
            })),
            policy,
            commentator,
            config,
        }
    }

    /// Start a fresh game, invalidating any in-flight computer turn or
    /// commentary from the previous one.
    pub async fn start_game(&self) -> MatchSnapshot {
        let mut guard = self.inner.lock().await;
        guard.epoch += 1;
        let epoch = guard.epoch;
        let match_seed = guard.rng.next_u64();
        guard.state = MatchState::start(match_seed);
        guard.events.clear();
        guard.events.push(SessionEvent::Notice {
            text: CONNECTING_NOTICE.to_string(),
        });
        let snapshot = snapshot_match(&guard.state);
        drop(guard);

        info!(epoch, match_seed, "new game started");
        self.spawn_opening(epoch);
        snapshot
    }

    /// Place a stone for the human seat.
    ///
    /// Illegal placements return a validation error and change nothing.
    /// When the returned snapshot has `current == COMPUTER`, the caller
    /// drives the opponent with [`MatchSession::run_computer_turn`].
    pub async fn place_stone(&self, x: u8, y: u8) -> Result<MatchSnapshot, AppError> {
        let mut guard = self.inner.lock().await;
        let epoch = guard.epoch;
        let inner = &mut *guard;

        let at = Point::new(x, y);
        let result = place_stone(&mut inner.state, HUMAN, at)?;
        if result.outcome == TurnOutcome::KeptFrozenSkip {
            inner.events.push(SessionEvent::TurnSkipped { side: COMPUTER });
        }
        let context = MoveContext {
            at,
            side: HUMAN,
            excerpt: inner.state.board.excerpt(at),
            win: result.outcome == TurnOutcome::Won,
        };
        let snapshot = snapshot_match(&inner.state);
        drop(guard);

        debug!(x, y, outcome = ?result.outcome, "human placement");
        self.spawn_remark(epoch, context);
        Ok(snapshot)
    }

    /// Activate a held skill for `side`.
    ///
    /// The turn does not pass; the activator still places a stone
    /// afterwards. Errors leave the state unchanged.
    pub async fn activate_skill(
        &self,
        side: Side,
        kind: SkillKind,
    ) -> Result<MatchSnapshot, AppError> {
        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;

        let result = activate_skill(&mut inner.state, side, kind, &mut inner.rng)?;
        push_skill_events(&mut inner.events, side, kind, &result.effect);
        let snapshot = snapshot_match(&inner.state);

        debug!(?side, ?kind, effect = ?result.effect, "skill activated");
        Ok(snapshot)
    }

    /// Run one computer turn: thinking delay, optional skill, then a
    /// placement (two placements when a double move is armed).
    ///
    /// Returns `Ok(None)` when the turn no longer applies: the game was
    /// restarted mid-think, is over, or it is not the computer's turn. If
    /// the human is frozen the computer keeps the turn after placing, and
    /// the caller invokes this again.
    pub async fn run_computer_turn(&self) -> Result<Option<MatchSnapshot>, AppError> {
        let (epoch, delay_ms) = {
            let mut guard = self.inner.lock().await;
            let (lo, hi) = self.config.think_delay_ms;
            (guard.epoch, guard.rng.next_between(lo, hi))
        };
        if delay_ms > 0 {
            sleep(Duration::from_millis(delay_ms)).await;
        }

        let mut guard = self.inner.lock().await;
        if guard.epoch != epoch {
            debug!(epoch, "computer turn superseded by a restart");
            return Ok(None);
        }
        if guard.state.status != MatchStatus::Playing || guard.state.current != COMPUTER {
            return Ok(None);
        }
        let inner = &mut *guard;

        // Skill phase. A fizzle still pays; the placement happens anyway.
        if inner.rng.chance(self.config.skill_chance) {
            let ready: Vec<SkillKind> = inner
                .state
                .skills(COMPUTER)
                .iter()
                .filter(|s| s.ready())
                .map(|s| s.kind)
                .collect();
            if !ready.is_empty() {
                let kind = ready[inner.rng.next_range(ready.len())];
                let result = activate_skill(&mut inner.state, COMPUTER, kind, &mut inner.rng)?;
                push_skill_events(&mut inner.events, COMPUTER, kind, &result.effect);
                debug!(?kind, effect = ?result.effect, "computer skill");
            }
        }

        let mut contexts = Vec::with_capacity(2);
        let outcome = self.computer_placement(inner, &mut contexts)?;
        if outcome == TurnOutcome::KeptDoubleMove {
            self.computer_placement(inner, &mut contexts)?;
        }

        let snapshot = snapshot_match(&inner.state);
        drop(guard);

        for context in contexts {
            self.spawn_remark(epoch, context);
        }
        Ok(Some(snapshot))
    }

    /// Read-only view of the current match.
    pub async fn snapshot(&self) -> MatchSnapshot {
        let guard = self.inner.lock().await;
        snapshot_match(&guard.state)
    }

    /// Events appended at or after `cursor`, oldest first.
    pub async fn events_since(&self, cursor: usize) -> Vec<SessionEvent> {
        let guard = self.inner.lock().await;
        guard.events.get(cursor..).map(<[_]>::to_vec).unwrap_or_default()
    }

    /// One policy placement for the computer, with its event and
    /// commentary context.
    fn computer_placement(
        &self,
        inner: &mut SessionInner,
        contexts: &mut Vec<MoveContext>,
    ) -> Result<TurnOutcome, AppError> {
        let at = self.policy.choose_move(&inner.state.board, COMPUTER)?;
        let result = place_stone(&mut inner.state, COMPUTER, at)?;
        if result.outcome == TurnOutcome::KeptFrozenSkip {
            inner.events.push(SessionEvent::TurnSkipped { side: HUMAN });
        }
        contexts.push(MoveContext {
            at,
            side: COMPUTER,
            excerpt: inner.state.board.excerpt(at),
            win: result.outcome == TurnOutcome::Won,
        });
        debug!(x = at.x, y = at.y, outcome = ?result.outcome, "computer placement");
        Ok(result.outcome)
    }

    fn spawn_opening(&self, epoch: u64) {
        let commentator = Arc::clone(&self.commentator);
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let text = commentator.opening().await;
            let mut guard = inner.lock().await;
            if guard.epoch == epoch {
                guard.events.push(SessionEvent::Commentary { text });
            }
        });
    }

    /// Fire-and-forget: the turn never waits for commentary, and text for
    /// a superseded game is dropped.
    fn spawn_remark(&self, epoch: u64, context: MoveContext) {
        let commentator = Arc::clone(&self.commentator);
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let text = commentator.remark(&context).await;
            let mut guard = inner.lock().await;
            if guard.epoch == epoch {
                guard.events.push(SessionEvent::Commentary { text });
            } else {
                debug!("dropping commentary for a superseded game");
            }
        });
    }
}

fn push_skill_events(
    events: &mut Vec<SessionEvent>,
    side: Side,
    kind: SkillKind,
    effect: &SkillEffect,
) {
    events.push(SessionEvent::SkillActivated { side, kind });
    match effect {
        SkillEffect::Undone { removed } => events.push(SessionEvent::UndoApplied {
            side,
            removed: removed.clone(),
        }),
        SkillEffect::Fizzled if kind == SkillKind::Undo => {
            events.push(SessionEvent::UndoRefused { side });
        }
        SkillEffect::Fizzled => events.push(SessionEvent::SkillFizzled { side, kind }),
        SkillEffect::DoubleMovePending => events.push(SessionEvent::DoubleMoveArmed { side }),
        _ => {}
    }
}
