//! Session lifecycle tests through the public API
//!
//! Scenarios that need a forced piece kind live next to the session module;
//! these tests rely only on seeding and on properties that hold for all
//! seven kinds.

use blockfall::core::GameSession;
use blockfall::types::{GameIntent, Phase, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X};

#[test]
fn new_session_is_idle_with_no_piece() {
    let session = GameSession::new(1);
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.active().is_none());
    assert_eq!(session.score(), 0);
    assert!(session.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn start_spawns_exactly_one_piece_at_spawn_position() {
    let mut session = GameSession::new(7);
    session.start();

    assert!(session.running());
    let piece = session.active().expect("running session has a piece");
    assert_eq!(piece.x, SPAWN_X);
    assert_eq!(piece.y, 0);
}

#[test]
fn same_seed_replays_the_same_game() {
    let script = [
        GameIntent::MoveLeft,
        GameIntent::Rotate,
        GameIntent::HardDrop,
        GameIntent::MoveRight,
        GameIntent::MoveDown,
    ];

    let mut a = GameSession::new(2024);
    let mut b = GameSession::new(2024);
    a.start();
    b.start();

    for i in 0..600 {
        let intent = script[i % script.len()];
        assert_eq!(a.apply(intent), b.apply(intent));
        a.tick();
        b.tick();
        assert_eq!(a.score(), b.score());
        assert_eq!(
            a.active().map(|p| (p.kind, p.x, p.y)),
            b.active().map(|p| (p.kind, p.x, p.y))
        );
        assert_eq!(a.board().cells(), b.board().cells());
        if a.game_over() {
            assert!(b.game_over());
            break;
        }
    }
}

#[test]
fn gravity_moves_the_piece_down_one_row_per_tick() {
    let mut session = GameSession::new(3);
    session.start();

    for expected_y in 1..=3 {
        session.tick();
        assert_eq!(session.active().map(|p| p.y), Some(expected_y));
    }
}

#[test]
fn hard_drop_lands_lowest_cell_on_the_bottom_row() {
    let mut session = GameSession::new(11);
    session.start();
    session.apply(GameIntent::HardDrop);

    let piece = session.active().expect("drop does not lock by itself");
    let lowest = piece
        .occupied()
        .map(|(_, dy)| piece.y + dy)
        .max()
        .expect("piece has occupied cells");
    assert_eq!(lowest, BOARD_HEIGHT as i8 - 1);
}

#[test]
fn lock_happens_on_the_tick_after_hard_drop() {
    let mut session = GameSession::new(5);
    session.start();
    session.apply(GameIntent::HardDrop);
    assert!(session.board().cells().iter().all(|c| c.is_none()));

    session.tick();
    let locked = session.board().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(locked, 4);
    // A fresh piece respawned at the top.
    assert_eq!(session.active().map(|p| p.y), Some(0));
}

#[test]
fn intents_are_dropped_unless_running() {
    let mut session = GameSession::new(9);
    assert!(!session.apply(GameIntent::MoveLeft));

    session.start();
    session.stop();
    assert_eq!(session.phase(), Phase::Idle);
    let before = session.active().map(|p| (p.x, p.y));
    assert!(!session.apply(GameIntent::MoveRight));
    session.tick();
    assert_eq!(session.active().map(|p| (p.x, p.y)), before);
}

#[test]
fn start_after_stop_resets_board_and_score() {
    let mut session = GameSession::new(13);
    session.start();
    session.apply(GameIntent::HardDrop);
    session.tick();
    assert!(session.board().cells().iter().any(|c| c.is_some()));

    session.stop();
    session.start();
    assert!(session.board().cells().iter().all(|c| c.is_none()));
    assert_eq!(session.score(), 0);
    assert!(session.running());
}

#[test]
fn stacking_hard_drops_tops_out() {
    let mut session = GameSession::new(77);
    session.start();

    // Without clears the middle columns fill in well under 200 locks.
    for _ in 0..200 {
        session.apply(GameIntent::HardDrop);
        session.tick();
        if session.game_over() {
            break;
        }
    }

    assert!(session.game_over());
    assert!(!session.running());
    assert!(session.active().is_none());
    // The board is left as merged, not reset.
    assert!(session.board().cells().iter().any(|c| c.is_some()));
}

#[test]
fn restart_after_top_out_runs_again() {
    let mut session = GameSession::new(77);
    session.start();
    for _ in 0..200 {
        session.apply(GameIntent::HardDrop);
        session.tick();
        if session.game_over() {
            break;
        }
    }
    assert!(session.game_over());

    session.start();
    assert!(session.running());
    assert!(!session.game_over());
    assert_eq!(session.score(), 0);
    assert!(session.board().cells().iter().all(|c| c.is_none()));
    assert!(session.active().is_some());
}

#[test]
fn score_is_monotone_and_a_multiple_of_100() {
    let mut session = GameSession::new(4242);
    session.start();

    let script = [
        GameIntent::MoveLeft,
        GameIntent::MoveLeft,
        GameIntent::Rotate,
        GameIntent::MoveRight,
        GameIntent::HardDrop,
    ];

    let mut last = 0;
    let mut i = 0;
    while session.running() && i < 3000 {
        session.apply(script[i % script.len()]);
        session.tick();
        assert!(session.score() >= last);
        assert_eq!(session.score() % 100, 0);
        last = session.score();
        i += 1;
    }
}

#[test]
fn board_dimensions_never_change_during_play() {
    let mut session = GameSession::new(31);
    session.start();

    for _ in 0..500 {
        session.apply(GameIntent::MoveDown);
        session.tick();
        assert_eq!(
            session.board().cells().len(),
            BOARD_WIDTH as usize * BOARD_HEIGHT as usize
        );
        if session.game_over() {
            break;
        }
    }
}
