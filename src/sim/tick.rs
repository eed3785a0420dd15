//! Fixed-step simulation tick
//!
//! Advances one run by a single step: integrate, land, collect, scroll,
//! recycle, then decide win or loss. The driver owns the cadence.

use rand::Rng;

use super::collision::{coin_in_reach, find_landing_platform};
use super::field::{respawn_coin, respawn_platform};
use super::state::{GameEvent, RunPhase, RunState};
use crate::consts::*;
use crate::wrap_position;

/// Advance the run by one tick
///
/// No-op unless the run is [`RunPhase::Running`]. Events are appended to
/// `events` in the order they happen.
pub fn tick<R: Rng + ?Sized>(state: &mut RunState, rng: &mut R, events: &mut Vec<GameEvent>) {
    if !state.can_tick() {
        return;
    }

    let player = &mut state.player;
    player.pos.x = wrap_position(player.pos.x);
    player.pos.y += player.vertical_velocity;
    player.vertical_velocity += GRAVITY;

    // Bounce only on the way down
    if player.vertical_velocity > 0.0 {
        if let Some(platform) = find_landing_platform(player.pos, &state.platforms) {
            player.vertical_velocity = JUMP_FORCE;
            player.pos.y = platform.pos.y - LANDING_LIFT;
            events.push(GameEvent::Jumped);
        }
    }

    let mut collected = 0;
    for coin in &mut state.coins_on_field {
        if coin_in_reach(player.pos, coin) {
            collected += 1;
            respawn_coin(rng, coin);
        }
    }
    if collected > 0 {
        state.coins += collected;
        events.push(GameEvent::CoinCollected);
    }

    scroll_camera(state);
    recycle_offscreen(state, rng);

    if state.coins >= state.target_coins {
        state.phase = RunPhase::Won;
        log::info!(
            "Level {} won with {} coins at {}m",
            state.level,
            state.coins,
            state.height
        );
        events.push(GameEvent::Win);
    } else if state.player.pos.y > PLAYER_FALL_LIMIT {
        state.phase = RunPhase::GameOver;
        log::info!("Fell at {}m with {} coins", state.height, state.coins);
        events.push(GameEvent::GameOver);
    }
}

/// Keep the egg at the camera anchor while it climbs, moving the world instead
fn scroll_camera(state: &mut RunState) {
    let y = state.player.pos.y;
    if y >= CAMERA_ANCHOR {
        return;
    }

    let shift = CAMERA_ANCHOR - y;
    state.player.pos.y = CAMERA_ANCHOR;
    for platform in &mut state.platforms {
        platform.pos.y += shift;
    }
    for coin in &mut state.coins_on_field {
        coin.pos.y += shift;
    }
    state.height += (shift * HEIGHT_PER_UNIT) as u32;
}

/// Respawn anything that scrolled below the viewport, keeping its id
fn recycle_offscreen<R: Rng + ?Sized>(state: &mut RunState, rng: &mut R) {
    for index in 0..state.platforms.len() {
        if state.platforms[index].pos.y <= RECYCLE_Y {
            continue;
        }
        let id = state.platforms[index].id;
        let others: Vec<_> = state
            .platforms
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, p)| *p)
            .collect();
        state.platforms[index] = respawn_platform(rng, &others, id);
        log::debug!(
            "Recycled platform {} to ({:.3}, {:.3})",
            id,
            state.platforms[index].pos.x,
            state.platforms[index].pos.y
        );
    }

    for coin in &mut state.coins_on_field {
        if coin.pos.y > RECYCLE_Y {
            respawn_coin(rng, coin);
        }
    }
}
