//! Run state and core simulation types
//!
//! Everything the UI layer reads each frame lives in [`RunState`]. It is a
//! plain snapshot: cloneable, serializable, and free of RNG or I/O handles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::progress::EggSkin;

/// Lifecycle phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunPhase {
    /// Field seeded, waiting for the player to start
    #[default]
    Intro,
    /// Active gameplay, ticks advance the world
    Running,
    /// Run suspended, resumable
    Paused,
    /// Player fell out of the world (terminal)
    GameOver,
    /// Coin target reached (terminal)
    Won,
}

impl RunPhase {
    /// Terminal phases end the run and trigger result recording
    pub fn is_terminal(self) -> bool {
        matches!(self, RunPhase::GameOver | RunPhase::Won)
    }
}

/// One-shot notifications for audio/haptics, distinct from state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player bounced off a platform
    Jumped,
    /// At least one coin was picked up this tick
    CoinCollected,
    /// Run ended by falling (or a forced stop)
    GameOver,
    /// Coin target reached
    Win,
}

/// The egg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// x wraps in [0, 1), y grows downward
    pub pos: Vec2,
    /// Signed vertical speed per tick (negative is up)
    pub vertical_velocity: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vertical_velocity: JUMP_FORCE,
        }
    }
}

/// A platform the player bounces on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Stable across recycles
    pub id: u32,
    pub pos: Vec2,
}

/// A collectible coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Stable across recycles
    pub id: u32,
    pub pos: Vec2,
}

/// Final numbers of a run, handed to the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub height: u32,
    pub coins: u32,
    pub level: u32,
    pub target_coins: u32,
    pub has_won: bool,
    pub finished: bool,
}

/// Coins needed to win a level
pub fn target_for_level(level: u32) -> u32 {
    let extra = (level.max(1) - 1).saturating_mul(TARGET_PER_LEVEL);
    BASE_TARGET.saturating_add(extra)
}

/// Complete run snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    /// Current lifecycle phase
    pub phase: RunPhase,
    /// Meters climbed this run (never decreases)
    pub height: u32,
    /// Coins collected this run
    pub coins: u32,
    /// Difficulty tier (1-based)
    pub level: u32,
    /// Coins needed to win this level
    pub target_coins: u32,
    /// Cosmetic choice, passed through to the renderer
    pub selected_skin: EggSkin,
    pub player: Player,
    /// Platform pool, kept in id order
    pub platforms: Vec<Platform>,
    /// Coin pool, kept in id order
    pub coins_on_field: Vec<Coin>,
}

impl RunState {
    /// Fresh intro state for a level with the given field
    pub fn new(
        level: u32,
        selected_skin: EggSkin,
        platforms: Vec<Platform>,
        coins_on_field: Vec<Coin>,
    ) -> Self {
        let level = level.max(1);
        Self {
            phase: RunPhase::Intro,
            height: 0,
            coins: 0,
            level,
            target_coins: target_for_level(level),
            selected_skin,
            player: Player::default(),
            platforms,
            coins_on_field,
        }
    }

    /// True while a run is in progress, including while paused
    pub fn running(&self) -> bool {
        matches!(self.phase, RunPhase::Running | RunPhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == RunPhase::Paused
    }

    pub fn show_intro(&self) -> bool {
        self.phase == RunPhase::Intro
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == RunPhase::GameOver
    }

    pub fn has_won(&self) -> bool {
        self.phase == RunPhase::Won
    }

    /// Only an unpaused, unfinished run accepts ticks and movement
    pub fn can_tick(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Summary for the results screen
    pub fn result(&self) -> GameResult {
        GameResult {
            height: self.height,
            coins: self.coins,
            level: self.level,
            target_coins: self.target_coins,
            has_won: self.has_won(),
            finished: self.phase.is_terminal(),
        }
    }
}
