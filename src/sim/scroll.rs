//! Camera scroll and difficulty escalation
//!
//! The camera offset moves left by the current forward step every tick.
//! Crossing the generation threshold schedules a new terrain frame and raises
//! the speed multiplier; that is the only way difficulty increases.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A terrain frame the scroll controller wants generated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Generation {
    /// World x of the frame's first column
    pub anchor_x: f32,
    /// Difficulty level for the generator
    pub difficulty: u32,
}

/// Camera offset, generation lead and speed scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scroll {
    /// World-to-screen x offset; zero or negative
    pub camera_offset_x: f32,
    /// Camera distance at which the next frame is generated
    pub next_generation_threshold: f32,
    pub speed_multiplier: f32,
    /// Frames generated since the run started (difficulty level)
    pub frames_generated: u32,
}

impl Default for Scroll {
    fn default() -> Self {
        Self {
            camera_offset_x: 0.0,
            next_generation_threshold: FRAME_WIDTH,
            speed_multiplier: INITIAL_SPEED_MULTIPLIER,
            frames_generated: 0,
        }
    }
}

impl Scroll {
    /// Distance moved this tick
    #[inline]
    pub fn step(&self, base_speed: f32) -> f32 {
        base_speed * self.speed_multiplier
    }

    /// Scroll one tick. Returns the frame to generate when the threshold is
    /// crossed, after escalating speed.
    pub fn advance(&mut self, base_speed: f32, speed_increment: f32) -> Option<Generation> {
        self.camera_offset_x -= self.step(base_speed);

        if self.camera_offset_x.abs() < self.next_generation_threshold {
            return None;
        }

        // Generated frames span two frame widths, so the next one starts
        // where this one ends
        let anchor_x = self.next_generation_threshold + FRAME_WIDTH;
        self.next_generation_threshold += 2.0 * FRAME_WIDTH;
        self.frames_generated += 1;
        self.speed_multiplier += speed_increment;

        log::debug!(
            "Scroll crossed {}: frame at x={}, speed x{:.1}",
            anchor_x - FRAME_WIDTH,
            anchor_x,
            self.speed_multiplier
        );

        Some(Generation {
            anchor_x,
            difficulty: self.frames_generated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_moves_left_by_step() {
        let mut scroll = Scroll::default();
        assert_eq!(scroll.advance(FORWARD_SPEED, SPEED_INCREMENT), None);
        assert_eq!(scroll.camera_offset_x, -FORWARD_SPEED);
    }

    #[test]
    fn test_threshold_crossing_generates_and_escalates() {
        let mut scroll = Scroll::default();
        let mut generations = Vec::new();
        let mut multipliers = vec![scroll.speed_multiplier];

        for _ in 0..5000 {
            if let Some(g) = scroll.advance(FORWARD_SPEED, SPEED_INCREMENT) {
                generations.push(g);
                multipliers.push(scroll.speed_multiplier);
            }
            assert!(scroll.camera_offset_x <= 0.0);
        }

        assert!(generations.len() >= 3);
        assert_eq!(generations[0].anchor_x, 2.0 * FRAME_WIDTH);
        assert_eq!(generations[0].difficulty, 1);

        // Consecutive frames tile the world without overlap
        let span = FRAME_COLUMNS as f32 * TILE_WIDTH;
        for pair in generations.windows(2) {
            assert_eq!(pair[1].anchor_x - pair[0].anchor_x, span);
            assert_eq!(pair[1].difficulty, pair[0].difficulty + 1);
        }

        for pair in multipliers.windows(2) {
            assert!((pair[1] - pair[0] - SPEED_INCREMENT).abs() < 1e-6);
        }
    }

    #[test]
    fn test_generation_ahead_of_view() {
        let mut scroll = Scroll::default();
        loop {
            if let Some(g) = scroll.advance(FORWARD_SPEED, SPEED_INCREMENT) {
                // The new frame starts at or beyond the right screen edge
                assert!(g.anchor_x >= -scroll.camera_offset_x + SCREEN_WIDTH);
                break;
            }
        }
    }
}
