//! Player progress ledger and skin shop
//!
//! The simulation reports finished runs through [`ProgressLedger`]. Where the
//! data ends up is the host's concern; [`PlayerProgress`] is the in-memory
//! ledger the host snapshots as JSON.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cosmetic egg skins
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum EggSkin {
    #[default]
    Classic,
    Gold,
    Rainbow,
    Cracked,
}

impl EggSkin {
    /// Every skin, in shop order
    pub const ALL: [EggSkin; 4] = [
        EggSkin::Classic,
        EggSkin::Gold,
        EggSkin::Rainbow,
        EggSkin::Cracked,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            EggSkin::Classic => "Snowy Egg",
            EggSkin::Gold => "Gold Egg",
            EggSkin::Rainbow => "Rainbow Egg",
            EggSkin::Cracked => "Cracked Egg",
        }
    }

    /// Price in coins
    pub fn price(&self) -> u32 {
        match self {
            EggSkin::Classic => 0,
            EggSkin::Gold => 250,
            EggSkin::Rainbow => 850,
            EggSkin::Cracked => 1050,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "snowy" => Some(EggSkin::Classic),
            "gold" => Some(EggSkin::Gold),
            "rainbow" => Some(EggSkin::Rainbow),
            "cracked" => Some(EggSkin::Cracked),
            _ => None,
        }
    }
}

/// Sink for finished-run results, called by the session
pub trait ProgressLedger {
    /// Called exactly once per run that reaches game over or a win
    fn record_finished_run(&mut self, coins_earned: u32, height: u32, level: u32);

    /// Persist the level the player is on
    fn save_level(&mut self, level: u32);

    /// Level a new session starts at
    fn current_level(&self) -> u32 {
        1
    }

    /// Skin a new session starts with
    fn selected_skin(&self) -> EggSkin {
        EggSkin::Classic
    }
}

/// Errors from snapshotting progress
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("progress snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the skin shop
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("{} is already owned", .0.title())]
    AlreadyOwned(EggSkin),
    #[error("{} has not been bought", .0.title())]
    NotOwned(EggSkin),
    #[error("costs {price} coins, only {balance} available")]
    InsufficientCoins { price: u32, balance: u32 },
}

/// Persistent player progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProgress {
    /// Wallet, spent in the shop
    pub coins: u32,
    /// Current level (1-based)
    pub level: u32,
    /// Best height reached in any run
    pub best_height: u32,
    pub selected_skin: EggSkin,
    pub owned_skins: BTreeSet<EggSkin>,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            coins: 0,
            level: 1,
            best_height: 0,
            selected_skin: EggSkin::Classic,
            owned_skins: BTreeSet::from([EggSkin::Classic]),
        }
    }
}

impl PlayerProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owns(&self, skin: EggSkin) -> bool {
        self.owned_skins.contains(&skin)
    }

    /// Buy and equip a skin
    pub fn buy_skin(&mut self, skin: EggSkin) -> Result<(), ShopError> {
        if self.owns(skin) {
            return Err(ShopError::AlreadyOwned(skin));
        }
        let price = skin.price();
        if self.coins < price {
            return Err(ShopError::InsufficientCoins {
                price,
                balance: self.coins,
            });
        }
        self.coins -= price;
        self.owned_skins.insert(skin);
        self.selected_skin = skin;
        log::info!("Bought {} for {} coins", skin.title(), price);
        Ok(())
    }

    /// Equip an owned skin
    pub fn select_skin(&mut self, skin: EggSkin) -> Result<(), ShopError> {
        if !self.owns(skin) {
            return Err(ShopError::NotOwned(skin));
        }
        self.selected_skin = skin;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ProgressError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore from a snapshot; the starter skin is always owned
    pub fn from_json(json: &str) -> Result<Self, ProgressError> {
        let mut progress: PlayerProgress = serde_json::from_str(json)?;
        progress.level = progress.level.max(1);
        progress.owned_skins.insert(EggSkin::Classic);
        if !progress.owns(progress.selected_skin) {
            log::warn!(
                "Selected skin {:?} not owned, falling back to Classic",
                progress.selected_skin
            );
            progress.selected_skin = EggSkin::Classic;
        }
        Ok(progress)
    }
}

impl ProgressLedger for PlayerProgress {
    fn record_finished_run(&mut self, coins_earned: u32, height: u32, level: u32) {
        self.coins = self.coins.saturating_add(coins_earned);
        self.best_height = self.best_height.max(height);
        log::info!(
            "Recorded run on level {}: +{} coins, {}m (best {}m)",
            level,
            coins_earned,
            height,
            self.best_height
        );
    }

    fn save_level(&mut self, level: u32) {
        self.level = level.max(1);
    }

    fn current_level(&self) -> u32 {
        self.level
    }

    fn selected_skin(&self) -> EggSkin {
        self.selected_skin
    }
}
