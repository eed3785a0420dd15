//! Egg Jump - an endless vertical jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (field generation, physics, pickups)
//! - `session`: Run lifecycle and the intent surface the UI layer drives
//! - `progress`: Player progress ledger and skin shop
//! - `settings`: Driver configuration

pub mod progress;
pub mod session;
pub mod settings;
pub mod sim;

pub use progress::{EggSkin, PlayerProgress, ProgressLedger};
pub use session::{GameSession, Intent, SessionSnapshot};
pub use settings::Settings;

/// Game configuration constants
///
/// The world is one unit wide (wrapping horizontally) and one unit tall,
/// with `y = 0` at the top of the viewport and `y` growing downward.
pub mod consts {
    /// Default external tick cadence in milliseconds
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 280;

    /// Field population (fixed-size pools, ids recycled)
    pub const PLATFORM_COUNT: usize = 8;
    pub const COIN_COUNT: usize = 6;

    /// Player kinematics (units per tick)
    pub const GRAVITY: f32 = 0.0014;
    pub const JUMP_FORCE: f32 = -0.028;
    pub const PLAYER_START_X: f32 = 0.5;
    pub const PLAYER_START_Y: f32 = 0.8;

    /// Screen-space y the camera keeps the player at while climbing
    pub const CAMERA_ANCHOR: f32 = 0.35;
    /// Player below this y has fallen out of the world
    pub const PLAYER_FALL_LIMIT: f32 = 1.05;
    /// Entities below this y are recycled
    pub const RECYCLE_Y: f32 = 1.05;
    /// Meters of height per world unit scrolled
    pub const HEIGHT_PER_UNIT: f32 = 240.0;

    /// Landing band around a platform
    pub const PLATFORM_HIT_X: f32 = 0.18;
    pub const PLATFORM_HIT_Y: f32 = 0.06;
    /// How far above the platform surface the player is lifted on bounce
    pub const LANDING_LIFT: f32 = 0.08;

    /// Coin pickup reach (both axes)
    pub const COIN_HIT_X: f32 = 0.12;
    pub const COIN_HIT_Y: f32 = 0.12;

    /// Platform ladder spacing
    pub const FIRST_PLATFORM_Y: f32 = 0.86;
    pub const MAX_PLATFORM_Y: f32 = 0.95;
    pub const MIN_PLATFORM_VERTICAL_GAP: f32 = 0.08;
    pub const MAX_PLATFORM_VERTICAL_GAP: f32 = 0.18;
    pub const MIN_PLATFORM_HORIZONTAL_GAP: f32 = 0.22;
    pub const PLATFORM_RESPAWN_ATTEMPTS: usize = 8;

    /// Horizontal spawn band for platforms and coins
    pub const SPAWN_X_MIN: f32 = 0.05;
    pub const SPAWN_X_MAX: f32 = 0.95;
    /// Recycled coins appear up to this far above the viewport
    pub const COIN_RESPAWN_DEPTH: f32 = 0.25;

    /// Win threshold tuning
    pub const BASE_TARGET: u32 = 100;
    pub const TARGET_PER_LEVEL: u32 = 50;
}

/// Wrap a horizontal coordinate into [0, 1)
#[inline]
pub fn wrap_position(x: f32) -> f32 {
    let wrapped = x.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Toroidal distance between two horizontal coordinates
///
/// Symmetric, and never more than half the world width for inputs in [0, 1).
#[inline]
pub fn wrap_delta(a: f32, b: f32) -> f32 {
    let diff = (wrap_position(a) - wrap_position(b)).abs();
    diff.min(1.0 - diff)
}

/// Signed shortest horizontal step from `from` to `to` on the wrapped axis
#[inline]
pub fn wrap_offset(from: f32, to: f32) -> f32 {
    let raw = wrap_position(to) - wrap_position(from);
    if raw > 0.5 {
        raw - 1.0
    } else if raw < -0.5 {
        raw + 1.0
    } else {
        raw
    }
}
