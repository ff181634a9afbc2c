//! Read-only bridge to the host renderer
//!
//! The renderer reads a [`Snapshot`] after each tick and never mutates the run.

pub mod hud;
pub mod instance;
pub mod snapshot;

pub use hud::{high_score_label, score_label, tunables_label};
pub use instance::{SpriteInstance, instances};
pub use snapshot::Snapshot;
