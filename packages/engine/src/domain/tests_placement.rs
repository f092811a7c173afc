use crate::domain::board::{Point, Side, BOARD_SIZE};
use crate::domain::errors::DomainError;
use crate::domain::placement::{place_stone, TurnOutcome};
use crate::domain::skills::SkillKind;
use crate::domain::state::MatchStatus;
use crate::domain::test_state_helpers::{make_match_state, ready_skills, MakeMatchStateArgs};

#[test]
fn placement_switches_sides_and_appends_history() {
    let mut state = make_match_state(MakeMatchStateArgs::default());
    let result = place_stone(&mut state, Side::Black, Point::new(7, 7)).unwrap();

    assert_eq!(result.outcome, TurnOutcome::Switched);
    assert_eq!(state.current, Side::White);
    assert_eq!(state.history, vec![Point::new(7, 7)]);
    assert_eq!(state.board.cell(Point::new(7, 7)), Some(Side::Black));
}

#[test]
fn occupied_cell_is_rejected_without_state_change() {
    let mut state = make_match_state(MakeMatchStateArgs {
        stones: vec![(7, 7, Side::Black)],
        current: Side::White,
        ..Default::default()
    });
    let before = state.clone();

    let err = place_stone(&mut state, Side::White, Point::new(7, 7)).unwrap_err();
    assert_eq!(err, DomainError::CellOccupied { x: 7, y: 7 });
    assert_eq!(state.board, before.board);
    assert_eq!(state.history, before.history);
    assert_eq!(state.current, before.current);
}

#[test]
fn out_of_bounds_is_rejected() {
    let mut state = make_match_state(MakeMatchStateArgs::default());
    let err = place_stone(&mut state, Side::Black, Point::new(15, 3)).unwrap_err();
    assert_eq!(err, DomainError::OutOfBounds { x: 15, y: 3 });
    assert!(state.history.is_empty());
}

#[test]
fn wrong_turn_is_rejected() {
    let mut state = make_match_state(MakeMatchStateArgs::default());
    let err = place_stone(&mut state, Side::White, Point::new(7, 7)).unwrap_err();
    assert_eq!(err, DomainError::OutOfTurn);
}

#[test]
fn terminal_status_rejects_placement() {
    let mut state = make_match_state(MakeMatchStateArgs {
        status: MatchStatus::Won {
            winner: Side::Black,
        },
        ..Default::default()
    });
    let err = place_stone(&mut state, Side::Black, Point::new(0, 0)).unwrap_err();
    assert_eq!(err, DomainError::NotPlaying);
}

#[test]
fn winning_placement_sets_status_and_skips_turn_logic() {
    let mut state = make_match_state(MakeMatchStateArgs {
        stones: vec![
            (3, 7, Side::Black),
            (4, 7, Side::Black),
            (5, 7, Side::Black),
            (6, 7, Side::Black),
        ],
        black_skills: {
            let mut skills = ready_skills(&[SkillKind::Swap]);
            skills[0].cooldown = 3;
            skills
        },
        ..Default::default()
    });

    let result = place_stone(&mut state, Side::Black, Point::new(7, 7)).unwrap();
    assert_eq!(result.outcome, TurnOutcome::Won);
    assert_eq!(
        state.status,
        MatchStatus::Won {
            winner: Side::Black
        }
    );
    // Still Black's turn on record and no cooldown movement: turn logic
    // stops at the win.
    assert_eq!(state.current, Side::Black);
    assert_eq!(state.black_skills[0].cooldown, 3);
}

#[test]
fn double_move_keeps_turn_and_skips_cooldown_reduction() {
    let mut skills = ready_skills(&[SkillKind::Freeze]);
    skills[0].cooldown = 2;
    let mut state = make_match_state(MakeMatchStateArgs {
        double_move_pending: true,
        black_skills: skills,
        ..Default::default()
    });

    let result = place_stone(&mut state, Side::Black, Point::new(7, 7)).unwrap();
    assert_eq!(result.outcome, TurnOutcome::KeptDoubleMove);
    assert_eq!(state.current, Side::Black);
    assert!(!state.double_move_pending, "flag is one-shot");
    assert_eq!(
        state.black_skills[0].cooldown, 2,
        "kept turn must not count as a completed turn"
    );
}

#[test]
fn frozen_opponent_loses_its_turn() {
    let mut skills = ready_skills(&[SkillKind::Boom]);
    skills[0].cooldown = 5;
    let mut state = make_match_state(MakeMatchStateArgs {
        frozen: Some(Side::White),
        black_skills: skills,
        ..Default::default()
    });

    let result = place_stone(&mut state, Side::Black, Point::new(7, 7)).unwrap();
    assert_eq!(result.outcome, TurnOutcome::KeptFrozenSkip);
    assert_eq!(state.current, Side::Black);
    assert_eq!(state.frozen, None, "marker clears after the skip");
    // The skip still ends a turn for the mover, so cooldowns count down.
    assert_eq!(state.black_skills[0].cooldown, 4);
}

#[test]
fn double_move_takes_precedence_over_freeze() {
    let mut state = make_match_state(MakeMatchStateArgs {
        double_move_pending: true,
        frozen: Some(Side::White),
        ..Default::default()
    });

    let result = place_stone(&mut state, Side::Black, Point::new(7, 7)).unwrap();
    assert_eq!(result.outcome, TurnOutcome::KeptDoubleMove);
    // Freeze marker untouched; it applies when the turn would next pass.
    assert_eq!(state.frozen, Some(Side::White));
}

#[test]
fn cooldown_reduction_applies_only_to_the_mover() {
    let mut black = ready_skills(&[SkillKind::Undo]);
    black[0].cooldown = 3;
    let mut white = ready_skills(&[SkillKind::Swap]);
    white[0].cooldown = 6;
    let mut state = make_match_state(MakeMatchStateArgs {
        black_skills: black,
        white_skills: white,
        ..Default::default()
    });

    place_stone(&mut state, Side::Black, Point::new(1, 1)).unwrap();
    assert_eq!(state.black_skills[0].cooldown, 2);
    assert_eq!(state.white_skills[0].cooldown, 6);

    place_stone(&mut state, Side::White, Point::new(2, 2)).unwrap();
    assert_eq!(state.black_skills[0].cooldown, 2);
    assert_eq!(state.white_skills[0].cooldown, 5);
}

#[test]
fn cooldown_never_goes_below_zero() {
    let mut state = make_match_state(MakeMatchStateArgs {
        black_skills: ready_skills(&[SkillKind::Randomize]),
        ..Default::default()
    });
    place_stone(&mut state, Side::Black, Point::new(0, 0)).unwrap();
    assert_eq!(state.black_skills[0].cooldown, 0);
}

#[test]
fn filling_the_last_cell_without_a_win_draws() {
    // Fill everything except (14, 14) with BBWW stripes shifted half a
    // period every two rows; no line of any direction reaches five.
    let mut stones = Vec::new();
    for y in 0..BOARD_SIZE as u8 {
        for x in 0..BOARD_SIZE as u8 {
            if (x, y) == (14, 14) {
                continue;
            }
            let side = if (x + y / 2) % 4 < 2 {
                Side::Black
            } else {
                Side::White
            };
            stones.push((x, y, side));
        }
    }
    let mut state = make_match_state(MakeMatchStateArgs {
        stones,
        history: Some(Vec::new()),
        current: Side::White,
        ..Default::default()
    });

    let result = place_stone(&mut state, Side::White, Point::new(14, 14)).unwrap();
    assert_eq!(result.outcome, TurnOutcome::Draw);
    assert_eq!(state.status, MatchStatus::Draw);
    assert!(state.board.is_full());
}
