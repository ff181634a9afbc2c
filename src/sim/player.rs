//! Player physics
//!
//! Two states keyed off the ground line: grounded and airborne. Each update
//! takes the tunables and per-tick motion flags explicitly and returns the
//! new player state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::{PlayerConfig, Tunables};
use crate::consts::GROUND_Y;

/// Per-tick motion inputs for the player
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    /// Jump key went down this tick (edge, not level)
    pub jump: bool,
    /// Current difficulty scale on forward speed
    pub speed_multiplier: f32,
    /// Freeze held: no forward motion, no physics
    pub frozen: bool,
}

/// The runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in world space (y-down)
    pub pos: Vec2,
    /// Vertical velocity, negative is up
    pub velocity: f32,
    pub is_jumping: bool,
    /// Jumps used since leaving the ground
    pub jump_count: u32,
}

impl Player {
    /// A grounded player at the spawn column
    pub fn spawn(config: &PlayerConfig) -> Self {
        Self {
            pos: Vec2::new(config.spawn_x, GROUND_Y),
            velocity: 0.0,
            is_jumping: false,
            jump_count: 0,
        }
    }

    pub fn is_grounded(&self) -> bool {
        !self.is_jumping
    }

    /// Collision rectangle (scaled sprite bounds)
    pub fn collider(&self, config: &PlayerConfig) -> Rect {
        Rect::from_pos_size(
            self.pos,
            Vec2::new(config.collider_width(), config.collider_height()),
        )
    }

    /// Advance one tick
    pub fn update(self, motion: Motion, tunables: &Tunables, config: &PlayerConfig) -> Self {
        if motion.frozen {
            return self;
        }

        let mut next = self;
        next.pos.x += config.base_forward_speed * motion.speed_multiplier;

        if next.is_jumping {
            next.velocity += tunables.gravity_model.effective(tunables.gravity, next.pos.y);
        }

        if motion.jump && next.jump_count < config.max_jumps {
            next.is_jumping = true;
            next.velocity -= tunables.jump_strength;
            next.jump_count += 1;
        }

        // Never rise past the ceiling; stall instead
        let y = next.pos.y + next.velocity;
        if y < config.min_altitude {
            next.velocity = 0.0;
        } else {
            next.pos.y = y;
        }

        if next.is_jumping && next.pos.y >= GROUND_Y {
            next.land();
        }

        next
    }

    fn land(&mut self) {
        self.pos.y = GROUND_Y;
        self.velocity = 0.0;
        self.jump_count = 0;
        self.is_jumping = false;
    }
}
