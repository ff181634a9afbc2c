//! Per-frame simulation tick
//!
//! Order within a tick: tunable adjustments, player physics, collision and
//! scoring, then camera scroll and terrain generation. A collision resets the
//! run synchronously and ends the tick.

use rand::Rng;

use super::collision::{self, CollisionOutcome};
use super::player::Motion;
use super::state::RunState;
use crate::config::{Config, TunableAdjust};

/// Ticks of forward travel the autopilot looks ahead for obstacles
const AUTOPILOT_LOOKAHEAD_TICKS: f32 = 12.0;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump key went down this tick
    pub jump: bool,
    /// Freeze key is held
    pub pause_held: bool,
    /// Live tunable nudges (edge events)
    pub gravity_up: bool,
    pub gravity_down: bool,
    pub jump_up: bool,
    pub jump_down: bool,
    /// Idle/demo mode - autopilot jumps
    pub idle_mode: bool,
}

impl TickInput {
    fn adjustments(&self) -> impl Iterator<Item = TunableAdjust> {
        [
            (self.gravity_up, TunableAdjust::GravityUp),
            (self.gravity_down, TunableAdjust::GravityDown),
            (self.jump_up, TunableAdjust::JumpUp),
            (self.jump_down, TunableAdjust::JumpDown),
        ]
        .into_iter()
        .filter_map(|(pressed, adjust)| pressed.then_some(adjust))
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Frozen; nothing advanced
    Paused,
    /// Normal tick; `cleared` obstacles scored
    Advanced { cleared: u32, generated: bool },
    /// Player hit an obstacle; the run was reset
    Reset,
}

/// Advance the run by one tick
pub fn tick<R: Rng>(state: &mut RunState<R>, input: &TickInput, config: &Config) -> TickEvent {
    for adjust in input.adjustments() {
        state.tunables.adjust(adjust);
    }

    state.paused = input.pause_held;

    let jump = input.jump || (input.idle_mode && autopilot_wants_jump(state, config));
    let motion = Motion {
        jump,
        speed_multiplier: state.scroll.speed_multiplier,
        frozen: state.paused,
    };
    state.player = state.player.update(motion, &state.tunables, &config.player);

    if state.paused {
        return TickEvent::Paused;
    }

    state.time_ticks += 1;

    let collider = state.player.collider(&config.player);
    let cleared = match collision::resolve(&collider, &mut state.obstacles, &mut state.board) {
        CollisionOutcome::Collided => {
            state.reset(config);
            return TickEvent::Reset;
        }
        CollisionOutcome::Clear { newly_cleared } => newly_cleared,
    };

    let generation = state
        .scroll
        .advance(config.player.base_forward_speed, config.speed_increment);
    if let Some(generation) = generation {
        state.generate(config, generation);
    }

    TickEvent::Advanced {
        cleared,
        generated: generation.is_some(),
    }
}

/// Demo autopilot: chain jumps when the next obstacle comes within reach
fn autopilot_wants_jump<R: Rng>(state: &RunState<R>, config: &Config) -> bool {
    let player = &state.player;
    if player.jump_count >= config.player.max_jumps {
        return false;
    }
    // Only stack jumps while still rising
    if !player.is_grounded() && player.velocity >= 0.0 {
        return false;
    }

    let Some(obstacle) = state.next_obstacle() else {
        return false;
    };
    let leading_edge = player.collider(&config.player).max_x();
    let distance = obstacle.bounds.x - leading_edge;
    let reach = state.scroll.step(config.player.base_forward_speed) * AUTOPILOT_LOOKAHEAD_TICKS;

    if player.is_grounded() {
        (0.0..=reach).contains(&distance)
    } else {
        distance <= reach
    }
}
