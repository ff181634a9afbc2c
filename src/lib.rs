//! Brick Dash - an endless side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, terrain, collisions, scoring)
//! - `config`: Tunables and generator settings, passed by reference
//! - `view`: Read-only bridge for the host renderer

pub mod config;
pub mod sim;
pub mod view;

pub use config::{Config, GeneratorConfig, GravityModel, PlayerConfig, TunableAdjust, Tunables};

/// Game configuration constants (logical pixels, per tick)
pub mod consts {
    /// Logical screen dimensions (13 tiles wide)
    pub const SCREEN_WIDTH: f32 = 832.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ground and obstacle tile size
    pub const TILE_WIDTH: f32 = 64.0;
    pub const TILE_HEIGHT: f32 = 64.0;

    /// Player top edge when standing on the ground
    pub const GROUND_Y: f32 = SCREEN_HEIGHT - 2.0 * TILE_HEIGHT;

    /// One frame of terrain is a screen width
    pub const FRAME_WIDTH: f32 = 13.0 * TILE_WIDTH;
    /// Columns laid per generated frame (two frame widths)
    pub const FRAME_COLUMNS: u32 = 26;

    /// Physics defaults
    pub const GRAVITY: f32 = 0.2;
    pub const JUMP_STRENGTH: f32 = 6.0;
    pub const FORWARD_SPEED: f32 = 2.0;
    pub const MAX_JUMPS: u32 = 3;

    /// Difficulty escalation per generated frame
    pub const SPEED_INCREMENT: f32 = 0.5;
    pub const INITIAL_SPEED_MULTIPLIER: f32 = 1.0;

    /// Player sprite draw scale
    pub const PLAYER_SCALE: f32 = 0.35;
}

/// Logical surface size for the host window, regardless of the outside size
#[inline]
pub fn layout(_outside_width: u32, _outside_height: u32) -> (u32, u32) {
    (consts::SCREEN_WIDTH as u32, consts::SCREEN_HEIGHT as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_fixed() {
        assert_eq!(layout(1920, 1080), (832, 600));
        assert_eq!(layout(0, 0), (832, 600));
    }

    #[test]
    fn test_frame_columns_span_two_frames() {
        use consts::*;
        assert_eq!(FRAME_COLUMNS as f32 * TILE_WIDTH, 2.0 * FRAME_WIDTH);
    }
}
