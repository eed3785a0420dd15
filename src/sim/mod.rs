//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only, cadence is the driver's business
//! - Caller-owned seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or storage dependencies

pub mod autopilot;
pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::{coin_in_reach, find_landing_platform, lands_on};
pub use field::{respawn_coin, respawn_platform, seed_coins, seed_platforms};
pub use state::{
    Coin, GameEvent, GameResult, Platform, Player, RunPhase, RunState, target_for_level,
};
pub use tick::tick;
