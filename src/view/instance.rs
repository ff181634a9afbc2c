//! Sprite instance data for GPU upload

use bytemuck::{Pod, Zeroable};

use super::snapshot::Snapshot;
use crate::consts::{SCREEN_WIDTH, TILE_WIDTH};

/// Sprite kinds understood by the renderer
pub mod kinds {
    pub const PLAYER: u32 = 0;
    pub const TILE: u32 = 1;
}

/// One textured quad, positioned in screen space
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    pub scale: f32,
    pub kind: u32,
    /// Palette index (tiles only)
    pub variant: u32,
}

impl SpriteInstance {
    pub const fn new(x: f32, y: f32, scale: f32, kind: u32, variant: u32) -> Self {
        Self {
            position: [x, y],
            scale,
            kind,
            variant,
        }
    }
}

/// Player sprite plus every tile overlapping the screen
pub fn instances(snapshot: &Snapshot) -> Vec<SpriteInstance> {
    let mut out = Vec::with_capacity(64);

    let player = snapshot.to_screen(snapshot.player_pos);
    out.push(SpriteInstance::new(
        player.x,
        player.y,
        snapshot.player_scale,
        kinds::PLAYER,
        0,
    ));

    out.extend(
        snapshot
            .tiles
            .iter()
            .map(|tile| (snapshot.to_screen(tile.pos), tile.variant))
            .filter(|(pos, _)| pos.x + TILE_WIDTH > 0.0 && pos.x < SCREEN_WIDTH)
            .map(|(pos, variant)| SpriteInstance::new(pos.x, pos.y, 1.0, kinds::TILE, variant as u32)),
    );

    out
}

/// Raw bytes for an instance buffer
pub fn as_bytes(instances: &[SpriteInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::{RunState, TickInput, tick};

    #[test]
    fn test_instances_cull_offscreen_tiles() {
        let config = Config::default();
        let state = RunState::new(&config);
        let snapshot = Snapshot::capture(&state, &config.player);
        let list = instances(&snapshot);

        assert_eq!(list[0].kind, kinds::PLAYER);
        let tiles: Vec<_> = list.iter().filter(|i| i.kind == kinds::TILE).collect();
        assert!(!tiles.is_empty());
        // Opening frame is two screens wide; only the first screen is drawn
        assert!(tiles.len() < state.tiles.len());
        assert!(tiles.iter().all(|i| i.position[0] < SCREEN_WIDTH));
    }

    #[test]
    fn test_instances_follow_camera() {
        let config = Config::default();
        let mut state = RunState::new(&config);
        state.obstacles.clear();
        for _ in 0..16 {
            tick(&mut state, &TickInput::default(), &config);
        }
        let snapshot = Snapshot::capture(&state, &config.player);
        let list = instances(&snapshot);
        // First ground tile scrolled half a tile off the left edge
        let leftmost = list
            .iter()
            .filter(|i| i.kind == kinds::TILE)
            .map(|i| i.position[0])
            .fold(f32::MAX, f32::min);
        assert_eq!(leftmost, -32.0);
    }

    #[test]
    fn test_byte_layout() {
        let list = [SpriteInstance::new(1.0, 2.0, 0.35, kinds::PLAYER, 0); 3];
        assert_eq!(as_bytes(&list).len(), 3 * 20);
    }
}
