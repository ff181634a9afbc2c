//! Collision detection and scoring
//!
//! Each tick the player's collider is tested against every live obstacle.
//! Per obstacle, the hit test runs before the clear test, so a grazing pass
//! that overlaps on the same tick counts as a collision.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::terrain::Obstacle;

/// Current and best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    /// Best score this session; never decreases
    pub high_score: u64,
}

impl Scoreboard {
    /// Count one cleared obstacle
    pub fn award(&mut self) {
        self.score += 1;
        self.high_score = self.high_score.max(self.score);
    }

    /// Start a new run, keeping the high score
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

/// Result of checking the player against the obstacles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Player overlapped an obstacle; the run must reset
    Collided,
    /// No overlap; `newly_cleared` obstacles were passed this tick
    Clear { newly_cleared: u32 },
}

/// Test `collider` against all obstacles, marking and scoring clears.
///
/// An obstacle is cleared once the player's left edge is strictly past its
/// right edge. Each obstacle scores at most once.
pub fn resolve(collider: &Rect, obstacles: &mut [Obstacle], board: &mut Scoreboard) -> CollisionOutcome {
    let mut newly_cleared = 0;
    for obstacle in obstacles.iter_mut() {
        if obstacle.bounds.intersects(collider) {
            return CollisionOutcome::Collided;
        }
        if !obstacle.cleared && collider.x > obstacle.bounds.max_x() {
            obstacle.cleared = true;
            board.award();
            newly_cleared += 1;
            log::trace!("Cleared obstacle at x={}, score {}", obstacle.bounds.x, board.score);
        }
    }
    CollisionOutcome::Clear { newly_cleared }
}
