//! Run configuration and live tunables
//!
//! Constructed once at startup and passed by reference into the simulation
//! and the renderer. Loaded from JSON when a file is given.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gravity step for live adjustment
pub const GRAVITY_STEP: f32 = 0.05;
/// Jump strength step for live adjustment
pub const JUMP_STEP: f32 = 0.5;

/// How gravity is applied while airborne
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GravityModel {
    /// Same pull at every height
    #[default]
    Constant,
    /// Pull weakens with altitude, giving a floatier apex
    HeightScaled,
}

impl GravityModel {
    /// Gravity to apply for a player whose top edge is at `y`
    pub fn effective(&self, gravity: f32, y: f32) -> f32 {
        match self {
            GravityModel::Constant => gravity,
            GravityModel::HeightScaled => {
                let factor = (0.5 + 0.5 * (y / GROUND_Y)).clamp(0.5, 1.0);
                gravity * factor
            }
        }
    }
}

/// Discrete "adjust parameter" inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunableAdjust {
    GravityUp,
    GravityDown,
    JumpUp,
    JumpDown,
}

/// Physics constants that can be nudged while playing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Downward acceleration (px/tick²)
    pub gravity: f32,
    /// Upward impulse per jump (px/tick)
    pub jump_strength: f32,
    pub gravity_model: GravityModel,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            gravity_model: GravityModel::Constant,
        }
    }
}

impl Tunables {
    /// Apply one adjustment step. Values never drop below one step.
    pub fn adjust(&mut self, adjust: TunableAdjust) {
        match adjust {
            TunableAdjust::GravityUp => self.gravity += GRAVITY_STEP,
            TunableAdjust::GravityDown => {
                self.gravity = (self.gravity - GRAVITY_STEP).max(GRAVITY_STEP)
            }
            TunableAdjust::JumpUp => self.jump_strength += JUMP_STEP,
            TunableAdjust::JumpDown => {
                self.jump_strength = (self.jump_strength - JUMP_STEP).max(JUMP_STEP)
            }
        }
        log::debug!(
            "Tunables adjusted ({:?}): gravity={:.2} jump={:.2}",
            adjust,
            self.gravity,
            self.jump_strength
        );
    }
}

/// Terrain generator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Ground columns per generated frame
    pub frame_columns: u32,
    /// Obstacles per frame at difficulty 0
    pub base_obstacles: u32,
    /// Upper bound on obstacles per frame
    pub max_obstacles: u32,
    /// Minimum distance (in columns) between obstacle columns
    pub min_gap_columns: u32,
    /// Leading columns kept clear in the opening frame
    pub safe_start_columns: u32,
    /// Difficulty at which obstacle height becomes random
    pub height_ramp_level: u32,
    /// Stacked tiles per obstacle before the ramp
    pub base_obstacle_tiles: u32,
    /// Tallest obstacle after the ramp
    pub max_obstacle_tiles: u32,
    /// Number of tile sprites the renderer provides
    pub palette_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            frame_columns: FRAME_COLUMNS,
            base_obstacles: 3,
            max_obstacles: 5,
            min_gap_columns: 3,
            safe_start_columns: 4,
            height_ramp_level: 3,
            base_obstacle_tiles: 2,
            max_obstacle_tiles: 3,
            palette_size: 4,
        }
    }
}

/// Player body and motion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub spawn_x: f32,
    /// Unscaled sprite size, as reported by the renderer
    pub sprite_width: f32,
    pub sprite_height: f32,
    /// Visual scale applied to the sprite (and collider)
    pub scale: f32,
    pub max_jumps: u32,
    /// Horizontal advance per tick before the speed multiplier
    pub base_forward_speed: f32,
    /// Highest the player's top edge may go
    pub min_altitude: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn_x: TILE_WIDTH / 2.0,
            sprite_width: 180.0,
            sprite_height: 180.0,
            scale: PLAYER_SCALE,
            max_jumps: MAX_JUMPS,
            base_forward_speed: FORWARD_SPEED,
            min_altitude: 0.0,
        }
    }
}

impl PlayerConfig {
    /// Collider width in world units
    pub fn collider_width(&self) -> f32 {
        self.sprite_width * self.scale
    }

    /// Collider height in world units
    pub fn collider_height(&self) -> f32 {
        self.sprite_height * self.scale
    }
}

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for the run's random source
    pub seed: u64,
    /// Tunables a fresh run starts with
    pub tunables: Tunables,
    pub generator: GeneratorConfig,
    pub player: PlayerConfig,
    /// Speed multiplier gain per generated frame
    pub speed_increment: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            tunables: Tunables::default(),
            generator: GeneratorConfig::default(),
            player: PlayerConfig::default(),
            speed_increment: SPEED_INCREMENT,
        }
    }
}

impl Config {
    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = Config::from_json(r#"{ "seed": 7, "tunables": { "gravity": 0.4 } }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.tunables.gravity, 0.4);
        assert_eq!(config.tunables.jump_strength, JUMP_STRENGTH);
        assert_eq!(config.generator.frame_columns, FRAME_COLUMNS);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Config::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let config = Config::load(Path::new("/nonexistent/brick-dash.json"));
        assert_eq!(config.seed, Config::default().seed);
    }

    #[test]
    fn test_adjust_never_flips_sign() {
        let mut t = Tunables::default();
        for _ in 0..100 {
            t.adjust(TunableAdjust::GravityDown);
            t.adjust(TunableAdjust::JumpDown);
        }
        assert!(t.gravity > 0.0);
        assert!(t.jump_strength > 0.0);

        t.adjust(TunableAdjust::JumpUp);
        assert!((t.jump_strength - 2.0 * JUMP_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_height_scaled_gravity_weaker_up_high() {
        let model = GravityModel::HeightScaled;
        let at_ground = model.effective(GRAVITY, GROUND_Y);
        let at_top = model.effective(GRAVITY, 0.0);
        assert!((at_ground - GRAVITY).abs() < 1e-6);
        assert!(at_top < at_ground);
        assert_eq!(GravityModel::Constant.effective(GRAVITY, 0.0), GRAVITY);
    }

    #[test]
    fn test_default_collider_fits_ground_line() {
        let player = PlayerConfig::default();
        // Standing on the ground, the collider must stay above the ground tiles' top
        assert!(GROUND_Y + player.collider_height() <= SCREEN_HEIGHT - TILE_HEIGHT);
    }
}
