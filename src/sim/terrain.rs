//! Procedural terrain: ground columns and obstacle stacks
//!
//! Terrain is laid out in frames of fixed-width columns ahead of the camera.
//! The generator knows nothing about the player; it is keyed only by the
//! anchor position, the current difficulty and the injected random source.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::GeneratorConfig;
use crate::consts::*;

/// Top edge of the ground row
pub const GROUND_TOP: f32 = SCREEN_HEIGHT - TILE_HEIGHT;

/// Frames between each extra obstacle per frame
const OBSTACLE_GROWTH_FRAMES: u32 = 4;

/// Give up on column placement after this many draws per obstacle
const PLACEMENT_ATTEMPTS: u32 = 16;

/// A ground or obstacle brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Top-left corner in world space
    pub pos: Vec2,
    /// Sprite index into the renderer's palette
    pub variant: usize,
}

impl Tile {
    /// Tile in world column space, `level` rows above the ground row
    fn at(x: f32, level: u32, variant: usize) -> Self {
        Self {
            pos: Vec2::new(x, GROUND_TOP - level as f32 * TILE_HEIGHT),
            variant,
        }
    }
}

/// A blocking column of stacked tiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub bounds: Rect,
    /// Set once the player has fully passed; gates scoring
    pub cleared: bool,
}

/// Output of one generation pass
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub tiles: Vec<Tile>,
    pub obstacles: Vec<Obstacle>,
}

/// Obstacles placed per frame at a given difficulty
pub fn obstacle_count(config: &GeneratorConfig, difficulty: u32) -> u32 {
    (config.base_obstacles + difficulty / OBSTACLE_GROWTH_FRAMES).min(config.max_obstacles)
}

/// Stack height (in tiles) for the next obstacle
fn obstacle_height<R: Rng>(config: &GeneratorConfig, rng: &mut R, difficulty: u32) -> u32 {
    let base = config.base_obstacle_tiles.max(1);
    if difficulty < config.height_ramp_level {
        base
    } else {
        rng.random_range(base..=config.max_obstacle_tiles.max(base))
    }
}

/// Pick obstacle columns for one frame, sorted ascending.
///
/// Columns are distinct, at least `min_gap_columns` apart, and the last one
/// leaves that same gap to the next frame's first column. The opening frame
/// keeps its first `safe_start_columns` clear.
pub fn pick_columns<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
    difficulty: u32,
) -> Vec<u32> {
    let gap = config.min_gap_columns.max(1);
    let start = if difficulty == 0 {
        config.safe_start_columns
    } else {
        0
    };
    let end = (config.frame_columns + 1).saturating_sub(gap);
    if start >= end {
        return Vec::new();
    }

    let wanted = obstacle_count(config, difficulty);
    let mut columns: Vec<u32> = Vec::with_capacity(wanted as usize);
    for _ in 0..wanted * PLACEMENT_ATTEMPTS {
        if columns.len() as u32 == wanted {
            break;
        }
        let column = rng.random_range(start..end);
        if columns.iter().all(|&c| c.abs_diff(column) >= gap) {
            columns.push(column);
        }
    }
    columns.sort_unstable();
    columns
}

/// Lay one frame of terrain starting at world x `anchor_x`.
pub fn extend<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
    anchor_x: f32,
    difficulty: u32,
) -> Frame {
    let palette = config.palette_size.max(1);
    let columns = pick_columns(config, rng, difficulty);

    let mut frame = Frame {
        tiles: Vec::with_capacity(config.frame_columns as usize + columns.len() * 3),
        obstacles: Vec::with_capacity(columns.len()),
    };

    for i in 0..config.frame_columns {
        let x = anchor_x + i as f32 * TILE_WIDTH;
        frame.tiles.push(Tile::at(x, 0, rng.random_range(0..palette)));

        if columns.contains(&i) {
            let height = obstacle_height(config, rng, difficulty);
            for level in 1..=height {
                frame.tiles.push(Tile::at(x, level, rng.random_range(0..palette)));
            }
            // Spans every stacked tile, bottom edge on the ground row
            let stack_height = height as f32 * TILE_HEIGHT;
            frame.obstacles.push(Obstacle {
                bounds: Rect::new(x, GROUND_TOP - stack_height, TILE_WIDTH, stack_height),
                cleared: false,
            });
        }
    }

    log::debug!(
        "Generated frame at x={} (difficulty {}): {} tiles, {} obstacles",
        anchor_x,
        difficulty,
        frame.tiles.len(),
        frame.obstacles.len()
    );

    frame
}
