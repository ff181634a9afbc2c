//! Run state: the aggregate root of the simulation
//!
//! One instance per session. Reset rebuilds everything except the high score.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Scoreboard;
use super::player::Player;
use super::scroll::{Generation, Scroll};
use super::terrain::{self, Obstacle, Tile};
use crate::config::{Config, Tunables};

/// Complete mutable state of a session
#[derive(Debug, Clone)]
pub struct RunState<R = Pcg32> {
    /// Shared random source for all terrain decisions
    pub rng: R,
    pub player: Player,
    /// Every tile generated this run, in generation order
    pub tiles: Vec<Tile>,
    /// Every obstacle generated this run, in generation order
    pub obstacles: Vec<Obstacle>,
    pub board: Scoreboard,
    pub scroll: Scroll,
    /// Live physics tunables
    pub tunables: Tunables,
    /// Freeze held on the last tick
    pub paused: bool,
    /// Ticks simulated this session
    pub time_ticks: u64,
    /// Completed runs (resets) this session
    pub runs: u32,
}

impl RunState<Pcg32> {
    /// Fresh session seeded from the config
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(config.seed))
    }
}

impl<R: Rng> RunState<R> {
    /// Fresh session drawing from an injected random source
    pub fn with_rng(config: &Config, rng: R) -> Self {
        let mut state = Self {
            rng,
            player: Player::spawn(&config.player),
            tiles: Vec::new(),
            obstacles: Vec::new(),
            board: Scoreboard::default(),
            scroll: Scroll::default(),
            tunables: config.tunables,
            paused: false,
            time_ticks: 0,
            runs: 0,
        };
        state.generate(
            config,
            Generation {
                anchor_x: 0.0,
                difficulty: 0,
            },
        );
        state
    }

    pub fn score(&self) -> u64 {
        self.board.score
    }

    pub fn high_score(&self) -> u64 {
        self.board.high_score
    }

    /// Start a new run: new player, no terrain but the opening frame,
    /// score/camera/speed/tunables back to their initial values.
    pub fn reset(&mut self, config: &Config) {
        log::info!(
            "Run {} over: score {} (high {})",
            self.runs + 1,
            self.board.score,
            self.board.high_score
        );

        self.player = Player::spawn(&config.player);
        self.tiles.clear();
        self.obstacles.clear();
        self.board.reset();
        self.scroll = Scroll::default();
        self.tunables = config.tunables;
        self.runs += 1;

        self.generate(
            config,
            Generation {
                anchor_x: 0.0,
                difficulty: 0,
            },
        );
    }

    /// Append one terrain frame
    pub fn generate(&mut self, config: &Config, generation: Generation) {
        let frame = terrain::extend(
            &config.generator,
            &mut self.rng,
            generation.anchor_x,
            generation.difficulty,
        );
        self.tiles.extend(frame.tiles);
        self.obstacles.extend(frame.obstacles);
    }

    /// First obstacle whose right edge is still ahead of the player's left edge
    pub fn next_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .filter(|o| !o.cleared && o.bounds.max_x() >= self.player.pos.x)
            .min_by(|a, b| a.bounds.x.total_cmp(&b.bounds.x))
    }
}
