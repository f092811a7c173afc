//! Property tests for the placement and activation transitions.
//!
//! Properties tested:
//! - A successful placement adds exactly one stone and one history entry
//! - A rejected placement leaves the state byte-for-byte unchanged
//! - Random legal walks never break cooldown bounds or terminal status
//! - Skills never finish a game; only placements set Won or Draw

use proptest::prelude::*;

use crate::domain::board::Point;
use crate::domain::placement::place_stone;
use crate::domain::rng::MixRng;
use crate::domain::skill_play::activate_skill;
use crate::domain::state::{MatchState, MatchStatus};
use crate::domain::test_gens::{board_with_focus, side};
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: placement adds one stone and one history entry
    #[test]
    fn prop_placement_adds_one_stone_and_one_history_entry(
        (board, _, _) in board_with_focus(),
        mover in side(),
        pick in any::<u64>(),
    ) {
        let spots = board.empty_points();
        prop_assume!(!spots.is_empty());
        let at = spots[(pick % spots.len() as u64) as usize];

        let mut state = MatchState::start(pick);
        state.board = board;
        state.current = mover;
        let stones_before = state.board.stone_count();
        let history_before = state.history.len();

        let result = place_stone(&mut state, mover, at);
        prop_assert!(result.is_ok(), "empty in-bounds cell must accept a stone");
        prop_assert_eq!(state.board.stone_count(), stones_before + 1);
        prop_assert_eq!(state.history.len(), history_before + 1);
        prop_assert_eq!(state.history.last().copied(), Some(at));
        prop_assert_eq!(state.board.cell(at), Some(mover));
    }

    /// Property: rejected placements change nothing
    #[test]
    fn prop_rejected_placement_is_a_no_op(
        (board, focus, _) in board_with_focus(),
        mover in side(),
        seed in any::<u64>(),
    ) {
        let mut state = MatchState::start(seed);
        state.board = board;
        state.current = mover;
        let before = state.clone();

        let result = place_stone(&mut state, mover, focus);
        prop_assert!(result.is_err(), "focus cell is occupied");
        prop_assert_eq!(state.board, before.board);
        prop_assert_eq!(state.history, before.history);
        prop_assert_eq!(state.current, before.current);
        prop_assert_eq!(state.status, before.status);
        prop_assert_eq!(state.black_skills, before.black_skills);
        prop_assert_eq!(state.white_skills, before.white_skills);
    }

    /// Property: random legal walks keep the state invariants
    #[test]
    fn prop_random_walks_keep_invariants(
        match_seed in any::<u64>(),
        walk_seed in any::<u64>(),
    ) {
        let mut state = MatchState::start(match_seed);
        let mut rng = MixRng::new(walk_seed);

        for _ in 0..80 {
            if state.is_over() {
                break;
            }
            let mover = state.current;

            let ready: Vec<_> = state
                .skills(mover)
                .iter()
                .filter(|s| s.ready())
                .map(|s| s.kind)
                .collect();
            let use_skill = !ready.is_empty() && rng.chance(0.3);

            if use_skill {
                let kind = ready[rng.next_range(ready.len())];
                let result = activate_skill(&mut state, mover, kind, &mut rng);
                prop_assert!(result.is_ok(), "held ready skill must activate");
                prop_assert_eq!(
                    state.status, MatchStatus::Playing,
                    "skills never finish a game"
                );
            } else {
                let spots = state.board.empty_points();
                prop_assert!(!spots.is_empty(), "running game must have room");
                let at = spots[rng.next_range(spots.len())];
                let result = place_stone(&mut state, mover, at);
                prop_assert!(result.is_ok());
            }

            for skill in state.black_skills.iter().chain(&state.white_skills) {
                prop_assert!(
                    skill.cooldown <= skill.kind.max_cooldown(),
                    "{:?} cooldown {} above its maximum",
                    skill.kind,
                    skill.cooldown
                );
            }
        }

        if state.is_over() {
            let mover = state.current;
            let err = place_stone(&mut state, mover, Point::new(0, 0));
            prop_assert!(err.is_err(), "terminal state accepts no placements");
        }
    }
}
