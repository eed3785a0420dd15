//! Landing and pickup detection
//!
//! All horizontal checks use the wrapped distance, so an egg at x=0.02 can
//! land on a platform at x=0.98.

use glam::Vec2;

use super::state::{Coin, Platform};
use crate::consts::*;
use crate::wrap_delta;

/// True if a falling egg at `player` lands on `platform`
///
/// The landing band spans [`PLATFORM_HIT_Y`] above the platform surface down
/// to the surface itself.
pub fn lands_on(player: Vec2, platform: &Platform) -> bool {
    let close_x = wrap_delta(player.x, platform.pos.x) < PLATFORM_HIT_X;
    let band = (platform.pos.y - PLATFORM_HIT_Y)..=platform.pos.y;
    close_x && band.contains(&player.y)
}

/// First on-screen platform (in pool order) the egg lands on
///
/// Overlapping landing bands resolve to the lowest id.
pub fn find_landing_platform(player: Vec2, platforms: &[Platform]) -> Option<&Platform> {
    platforms
        .iter()
        .filter(|platform| platform.pos.y <= 1.0)
        .find(|platform| lands_on(player, platform))
}

/// True if the egg at `player` is close enough to grab `coin`
pub fn coin_in_reach(player: Vec2, coin: &Coin) -> bool {
    wrap_delta(player.x, coin.pos.x) < COIN_HIT_X && (player.y - coin.pos.y).abs() < COIN_HIT_Y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(id: u32, x: f32, y: f32) -> Platform {
        Platform {
            id,
            pos: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_lands_within_band() {
        let p = platform(0, 0.5, 0.7);
        assert!(lands_on(Vec2::new(0.55, 0.68), &p));
        assert!(lands_on(Vec2::new(0.5, 0.7), &p));
        // Too far above the surface
        assert!(!lands_on(Vec2::new(0.5, 0.6), &p));
        // Already below the surface
        assert!(!lands_on(Vec2::new(0.5, 0.71), &p));
        // Too far sideways
        assert!(!lands_on(Vec2::new(0.7, 0.68), &p));
    }

    #[test]
    fn test_lands_across_wrap_seam() {
        let p = platform(0, 0.95, 0.5);
        assert!(lands_on(Vec2::new(0.05, 0.48), &p));
    }

    #[test]
    fn test_landing_ignores_offscreen_and_picks_first() {
        let platforms = [
            platform(0, 0.5, 1.02),
            platform(1, 0.45, 0.70),
            platform(2, 0.55, 0.71),
        ];
        let hit = find_landing_platform(Vec2::new(0.5, 0.69), &platforms);
        assert_eq!(hit.map(|p| p.id), Some(1));

        let below = find_landing_platform(Vec2::new(0.5, 1.0), &platforms[..1]);
        assert!(below.is_none());
    }

    #[test]
    fn test_coin_reach() {
        let coin = Coin {
            id: 0,
            pos: Vec2::new(0.03, 0.4),
        };
        assert!(coin_in_reach(Vec2::new(0.97, 0.45), &coin));
        assert!(!coin_in_reach(Vec2::new(0.97, 0.55), &coin));
        assert!(!coin_in_reach(Vec2::new(0.2, 0.4), &coin));
    }
}
