//! Idle/demo steering
//!
//! Picks the highest platform the egg can still reach and nudges toward it
//! along the shorter way around the wrapped axis.

use super::state::{Platform, RunState};
use crate::consts::*;
use crate::wrap_offset;

/// Largest horizontal nudge per tick
pub const MAX_STEER: f32 = 0.04;

/// Highest point the egg will reach on its current arc
pub fn apex_y(state: &RunState) -> f32 {
    let v = state.player.vertical_velocity;
    if v >= 0.0 {
        state.player.pos.y
    } else {
        state.player.pos.y - v * v / (2.0 * GRAVITY)
    }
}

/// Platform the autopilot is heading for, if any is on screen and reachable
pub fn target_platform(state: &RunState) -> Option<&Platform> {
    let reference = apex_y(state);
    state
        .platforms
        .iter()
        .filter(|p| p.pos.y >= reference && p.pos.y <= 1.0)
        .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
}

/// Horizontal delta to feed into `move_player` this tick
pub fn steer(state: &RunState) -> f32 {
    match target_platform(state) {
        Some(target) => wrap_offset(state.player.pos.x, target.pos.x).clamp(-MAX_STEER, MAX_STEER),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::EggSkin;
    use glam::Vec2;

    fn state_with(platforms: &[(f32, f32)]) -> RunState {
        let platforms = platforms
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Platform {
                id: id as u32,
                pos: Vec2::new(x, y),
            })
            .collect();
        RunState::new(1, EggSkin::Classic, platforms, Vec::new())
    }

    #[test]
    fn test_apex_while_rising() {
        let mut state = state_with(&[]);
        state.player.pos.y = 0.8;
        state.player.vertical_velocity = JUMP_FORCE;
        let expected = 0.8 - JUMP_FORCE * JUMP_FORCE / (2.0 * GRAVITY);
        assert!((apex_y(&state) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_targets_highest_reachable_platform() {
        // Apex from 0.8 with a fresh jump is 0.52
        let state = state_with(&[(0.2, 0.86), (0.6, 0.6), (0.3, 0.4)]);
        assert_eq!(target_platform(&state).map(|p| p.id), Some(1));
    }

    #[test]
    fn test_steer_wraps_and_clamps() {
        let mut state = state_with(&[(0.9, 0.85)]);
        state.player.pos = Vec2::new(0.1, 0.7);
        state.player.vertical_velocity = 0.01;
        // Shortest route is leftward across the seam
        assert_eq!(steer(&state), -MAX_STEER);

        state.player.pos.x = 0.89;
        assert!((steer(&state) - 0.01).abs() < 1e-5);
    }

    #[test]
    fn test_steer_idle_without_target() {
        let state = state_with(&[(0.5, 0.2)]);
        assert_eq!(steer(&state), 0.0);
    }
}
