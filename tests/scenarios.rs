use glam::Vec2;

use egg_jump::consts::*;
use egg_jump::progress::ProgressLedger;
use egg_jump::sim::{Coin, GameEvent, RunPhase, RunState};
use egg_jump::{EggSkin, GameSession, PlayerProgress, SessionSnapshot};

#[derive(Debug, Default)]
struct MockLedger {
    runs: Vec<(u32, u32, u32)>,
    saved_levels: Vec<u32>,
}

impl ProgressLedger for MockLedger {
    fn record_finished_run(&mut self, coins_earned: u32, height: u32, level: u32) {
        self.runs.push((coins_earned, height, level));
    }

    fn save_level(&mut self, level: u32) {
        self.saved_levels.push(level);
    }
}

/// Level 1 run in progress with an empty field and the egg dropping
fn falling_state() -> RunState {
    let mut state = RunState::new(1, EggSkin::Classic, Vec::new(), Vec::new());
    state.phase = RunPhase::Running;
    state.player.pos = Vec2::new(0.5, 0.8);
    state.player.vertical_velocity = 0.01;
    state
}

#[test]
fn falling_without_platforms_ends_in_game_over_once() {
    let snapshot = SessionSnapshot::with_fresh_rng(falling_state(), 42);
    let mut session = GameSession::restore(snapshot, MockLedger::default());
    assert_eq!(session.state().target_coins, 100);

    let mut events = Vec::new();
    for _ in 0..100 {
        session.tick();
        events.extend(session.drain_events());
    }

    let state = session.state();
    assert!(state.is_game_over());
    assert!(!state.running());
    assert_eq!(events, vec![GameEvent::GameOver]);
    assert_eq!(session.ledger().runs, vec![(0, 0, 1)]);
}

#[test]
fn reaching_target_records_exactly_once() {
    let mut state = falling_state();
    state.player.vertical_velocity = 0.0;
    // A column of coins straight below the egg, collected over several ticks
    state.coins = 96;
    for id in 0..COIN_COUNT as u32 {
        state.coins_on_field.push(Coin {
            id,
            pos: Vec2::new(0.5, 0.85 + id as f32 * 0.05),
        });
    }
    let snapshot = SessionSnapshot::with_fresh_rng(state, 7);
    let mut session = GameSession::restore(snapshot, MockLedger::default());

    let mut events = Vec::new();
    for _ in 0..200 {
        session.tick();
        events.extend(session.drain_events());
    }
    session.stop_and_show_game_over();
    events.extend(session.drain_events());

    assert!(session.state().has_won());
    assert!(session.state().coins >= 100);
    assert_eq!(events.iter().filter(|e| **e == GameEvent::Win).count(), 1);
    assert!(!events.contains(&GameEvent::GameOver));
    assert_eq!(session.ledger().runs.len(), 1);
    assert_eq!(session.ledger().saved_levels, vec![1]);
}

#[test]
fn win_takes_priority_over_fall() {
    let mut state = falling_state();
    state.coins = 99;
    state.player.pos.y = 1.04;
    state.player.vertical_velocity = 0.02;
    state.coins_on_field.push(Coin {
        id: 0,
        pos: Vec2::new(0.5, 1.02),
    });
    let snapshot = SessionSnapshot::with_fresh_rng(state, 3);
    let mut session = GameSession::restore(snapshot, MockLedger::default());

    session.tick();
    let state = session.state();
    assert!(state.player.pos.y > PLAYER_FALL_LIMIT);
    assert!(state.has_won());
    assert!(!state.is_game_over());
    assert_eq!(state.coins, 100);
    assert_eq!(
        session.drain_events(),
        vec![GameEvent::CoinCollected, GameEvent::Win]
    );
}

#[test]
fn move_player_wraps_around() {
    let snapshot = SessionSnapshot::with_fresh_rng(falling_state(), 1);
    let mut session = GameSession::restore(snapshot, MockLedger::default());
    session.move_player(0.97);
    assert!((session.state().player.pos.x - 0.47).abs() < 1e-5);
}

#[test]
fn restoring_finished_run_does_not_record_again() {
    let mut state = falling_state();
    state.phase = RunPhase::GameOver;
    let snapshot = SessionSnapshot::with_fresh_rng(state, 1);
    let mut session = GameSession::restore(snapshot, MockLedger::default());
    session.tick();
    session.stop_and_show_game_over();
    assert!(session.ledger().runs.is_empty());
    assert!(session.drain_events().is_empty());
}

#[test]
fn full_level_cycle_on_player_progress() {
    let mut state = falling_state();
    state.coins = 99;
    state.height = 480;
    state.coins_on_field.push(Coin {
        id: 0,
        pos: Vec2::new(0.5, 0.82),
    });
    let snapshot = SessionSnapshot::with_fresh_rng(state, 11);
    let mut session = GameSession::restore(snapshot, PlayerProgress::new());

    session.tick();
    assert!(session.state().has_won());
    session.advance_to_next_level();
    assert!(session.state().show_intro());
    assert_eq!(session.state().level, 2);
    assert_eq!(session.state().target_coins, 150);

    let progress = session.ledger();
    assert_eq!(progress.coins, 100);
    assert_eq!(progress.best_height, 480);
    assert_eq!(progress.current_level(), 2);
}

#[test]
fn autopilot_climbs() {
    let mut session = GameSession::new(2024, MockLedger::default());
    session.start_run();
    for _ in 0..400 {
        if !session.state().can_tick() {
            break;
        }
        let delta = egg_jump::sim::autopilot::steer(session.state());
        session.move_player(delta);
        session.tick();
    }
    assert!(session.state().height > 0);
}
