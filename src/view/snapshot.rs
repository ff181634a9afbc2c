//! Per-tick view of the run for drawing and HUD

use glam::Vec2;
use serde::Serialize;

use crate::config::{PlayerConfig, Tunables};
use crate::sim::{RunState, Tile};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    /// Player top-left in world space
    pub player_pos: Vec2,
    /// Sprite draw scale
    pub player_scale: f32,
    pub collider_size: Vec2,
    /// All live tiles in world space
    pub tiles: &'a [Tile],
    pub score: u64,
    pub high_score: u64,
    /// Add to world x to get screen x
    pub camera_offset_x: f32,
    pub speed_multiplier: f32,
    pub tunables: Tunables,
    pub paused: bool,
}

impl<'a> Snapshot<'a> {
    pub fn capture<R>(state: &'a RunState<R>, player: &PlayerConfig) -> Self {
        Self {
            player_pos: state.player.pos,
            player_scale: player.scale,
            collider_size: Vec2::new(player.collider_width(), player.collider_height()),
            tiles: &state.tiles,
            score: state.board.score,
            high_score: state.board.high_score,
            camera_offset_x: state.scroll.camera_offset_x,
            speed_multiplier: state.scroll.speed_multiplier,
            tunables: state.tunables,
            paused: state.paused,
        }
    }

    /// World position to screen position
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x + self.camera_offset_x, world.y)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
