//! The player box
//!
//! Movement is instantaneous (no acceleration curve). Jumps are counted and
//! rate-limited by a cooldown; landing or touching a wall restores them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Contacts;
use super::rect::Rect;
use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Jumps used since last landing/wall contact
    pub jump_count: u32,
    /// Visual lean (degrees)
    pub rotation: f32,
    pub target_rotation: f32,
    /// Where a reset puts the player (spawn or last checkpoint)
    pub reset_pos: Vec2,
    /// Clock time of the last accepted jump
    pub last_jump_ms: Option<u64>,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            jump_count: 0,
            rotation: 0.0,
            target_rotation: 0.0,
            reset_pos: spawn,
            last_jump_ms: None,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Set horizontal velocity from held directions (left wins a tie)
    pub fn apply_horizontal_input(&mut self, left: bool, right: bool, move_speed: f32) {
        self.vel.x = if left {
            -move_speed
        } else if right {
            move_speed
        } else {
            0.0
        };
    }

    /// Lean into walls. The step factor is clamped to 1 so the lean never
    /// overshoots its target.
    pub fn update_rotation(&mut self, contacts: &Contacts, rate: f32, dt: f32) {
        self.target_rotation = if contacts.wall_left {
            -90.0
        } else if contacts.wall_right {
            90.0
        } else {
            0.0
        };
        self.rotation += (self.target_rotation - self.rotation) * (rate * dt).min(1.0);
    }

    /// Jump if the cooldown has elapsed and a jump is left. Returns whether
    /// the jump happened.
    pub fn try_jump(&mut self, now_ms: u64, tuning: &Tuning, max_jumps: u32) -> bool {
        let cooled_down = self
            .last_jump_ms
            .is_none_or(|last| now_ms.saturating_sub(last) >= tuning.jump_cooldown_ms);
        if !cooled_down || self.jump_count >= max_jumps {
            return false;
        }

        self.vel.y = -tuning.jump_strength;
        self.jump_count += 1;
        self.last_jump_ms = Some(now_ms);
        true
    }

    /// Put the player back at the reset position, at rest
    pub fn respawn(&mut self) {
        self.vel = Vec2::ZERO;
        self.rotation = 0.0;
        self.target_rotation = 0.0;
        self.pos = self.reset_pos;
        self.jump_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_cooldown() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO);

        assert!(player.try_jump(0, &tuning, 2));
        assert_eq!(player.jump_count, 1);
        assert_eq!(player.vel.y, -800.0);

        assert!(!player.try_jump(50, &tuning, 2));
        assert_eq!(player.jump_count, 1);

        assert!(player.try_jump(310, &tuning, 2));
        assert_eq!(player.jump_count, 2);

        // Out of jumps
        assert!(!player.try_jump(1000, &tuning, 2));
        assert_eq!(player.jump_count, 2);
    }

    #[test]
    fn test_horizontal_input() {
        let mut player = Player::new(Vec2::ZERO);
        player.apply_horizontal_input(false, true, 300.0);
        assert_eq!(player.vel.x, 300.0);
        player.apply_horizontal_input(true, true, 300.0);
        assert_eq!(player.vel.x, -300.0);
        player.apply_horizontal_input(false, false, 300.0);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_rotation_never_overshoots() {
        let mut player = Player::new(Vec2::ZERO);
        let walled = Contacts {
            wall_right: true,
            ..Default::default()
        };

        player.update_rotation(&walled, 10.0, 0.05);
        assert_eq!(player.rotation, 45.0);

        // A huge dt snaps exactly onto the target
        player.update_rotation(&walled, 10.0, 1.0);
        assert_eq!(player.rotation, 90.0);

        player.update_rotation(&Contacts::default(), 10.0, 0.5);
        assert_eq!(player.rotation, 0.0);
    }

    #[test]
    fn test_respawn_restores_reset_position() {
        let mut player = Player::new(Vec2::new(10.0, 20.0));
        player.pos = Vec2::new(500.0, 500.0);
        player.vel = Vec2::new(300.0, -800.0);
        player.jump_count = 2;
        player.rotation = 45.0;
        player.reset_pos = Vec2::new(100.0, 200.0);

        player.respawn();
        assert_eq!(player.pos, Vec2::new(100.0, 200.0));
        assert_eq!(player.vel, Vec2::ZERO);
        assert_eq!(player.jump_count, 0);
        assert_eq!(player.rotation, 0.0);
    }
}
