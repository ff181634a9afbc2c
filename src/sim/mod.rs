//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host frame, no wall-clock time
//! - Injected, seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod player;
pub mod scroll;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{CollisionOutcome, Scoreboard, resolve};
pub use geometry::Rect;
pub use player::{Motion, Player};
pub use scroll::{Generation, Scroll};
pub use state::RunState;
pub use terrain::{Frame, Obstacle, Tile, extend};
pub use tick::{TickEvent, TickInput, tick};
