//! Procedural platform and coin placement
//!
//! Platforms form a climbable ladder: each one sits a random gap above the
//! previous, and its x is picked so it does not crowd platforms at a similar
//! height. Coins are scattered with no spacing rules. Both pools have a fixed
//! size and are recycled in place, so ids never change.

use glam::Vec2;
use rand::Rng;

use super::state::{Coin, Platform};
use crate::consts::*;
use crate::wrap_delta;

/// Random x inside the spawn band
pub fn random_x<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(SPAWN_X_MIN..=SPAWN_X_MAX)
}

/// Random vertical gap between consecutive platforms
pub fn random_platform_gap<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(MIN_PLATFORM_VERTICAL_GAP..=MAX_PLATFORM_VERTICAL_GAP)
}

/// Pick an x for a platform at height `y` that keeps clear of `existing`
///
/// Best effort: after [`PLATFORM_RESPAWN_ATTEMPTS`] rejected candidates the
/// last one is used anyway, so placement never stalls.
pub fn find_non_overlapping_x<R: Rng + ?Sized>(rng: &mut R, existing: &[Platform], y: f32) -> f32 {
    let mut candidate = random_x(rng);
    for attempt in 0..PLATFORM_RESPAWN_ATTEMPTS {
        if attempt > 0 {
            candidate = random_x(rng);
        }
        let overlaps = existing.iter().any(|platform| {
            let close_x = wrap_delta(candidate, platform.pos.x) < MIN_PLATFORM_HORIZONTAL_GAP;
            let close_y = (y - platform.pos.y).abs() < MIN_PLATFORM_VERTICAL_GAP;
            close_x && close_y
        });
        if !overlaps {
            return candidate;
        }
    }
    log::debug!("No clear slot at y={y:.3}, accepting x={candidate:.3}");
    candidate
}

/// Build a platform at (roughly) `target_y`, spaced away from `existing`
pub fn create_platform<R: Rng + ?Sized>(
    rng: &mut R,
    id: u32,
    target_y: f32,
    existing: &[Platform],
) -> Platform {
    let y = target_y.min(MAX_PLATFORM_Y);
    let x = find_non_overlapping_x(rng, existing, y);
    Platform {
        id,
        pos: Vec2::new(x, y),
    }
}

/// Initial ladder of [`PLATFORM_COUNT`] platforms, climbing from the bottom
pub fn seed_platforms<R: Rng + ?Sized>(rng: &mut R) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(PLATFORM_COUNT);
    let mut current_y = FIRST_PLATFORM_Y;

    for id in 0..PLATFORM_COUNT as u32 {
        let platform = create_platform(rng, id, current_y, &platforms);
        platforms.push(platform);
        current_y -= random_platform_gap(rng);
    }

    platforms
}

/// Initial scatter of [`COIN_COUNT`] coins over the viewport
pub fn seed_coins<R: Rng + ?Sized>(rng: &mut R) -> Vec<Coin> {
    (0..COIN_COUNT as u32)
        .map(|id| {
            let x = random_x(rng);
            let y = rng.random::<f32>();
            Coin {
                id,
                pos: Vec2::new(x, y),
            }
        })
        .collect()
}

/// Recycle a platform to sit one gap above the highest of `others`
///
/// `others` must not contain the platform being recycled.
pub fn respawn_platform<R: Rng + ?Sized>(rng: &mut R, others: &[Platform], id: u32) -> Platform {
    let highest_y = others
        .iter()
        .map(|p| p.pos.y)
        .reduce(f32::min)
        .unwrap_or(FIRST_PLATFORM_Y);
    let new_y = highest_y - random_platform_gap(rng);
    create_platform(rng, id, new_y, others)
}

/// Recycle a coin to a random spot just above the viewport
pub fn respawn_coin<R: Rng + ?Sized>(rng: &mut R, coin: &mut Coin) {
    coin.pos.x = random_x(rng);
    coin.pos.y = -rng.random::<f32>() * COIN_RESPAWN_DEPTH;
}
