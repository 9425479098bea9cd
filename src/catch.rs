//! Catch-the-ball reflex game engine
//!
//! Positions are percentages of the play area. The shell delivers ticks at
//! its own cadence and feeds catcher positions from pointer input; the
//! engine owns the fall, catch, and respawn rules.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Vertical distance the ball falls per tick
pub const DROP_STEP: f64 = 2.0;

/// Vertical position at which the catch is decided
pub const CATCH_LINE: f64 = 90.0;

/// Maximum horizontal distance between catcher and ball that still catches
pub const CATCH_WINDOW: f64 = 10.0;

/// What a tick did to the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Ball still falling
    Falling,
    /// Ball reached the catch line within the catch window; score increased
    /// and a new ball spawned at the top
    Caught,
    /// Ball reached the catch line outside the window; the game is over
    Missed,
}

/// Reflex game state
#[derive(Debug, Clone)]
pub struct CatchGame {
    ball_x: f64,
    ball_y: f64,
    catcher_x: f64,
    score: u32,
    game_over: bool,
    rng: StdRng,
}

impl CatchGame {
    /// Create a game with an OS-derived random seed
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    /// Create a game with an explicit seed
    pub fn with_seed(seed: u64) -> Self {
        CatchGame {
            ball_x: 50.0,
            ball_y: 0.0,
            catcher_x: 50.0,
            score: 0,
            game_over: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Move the catcher; input is clamped to the play area and ignored once
    /// the game is over
    pub fn set_catcher(&mut self, x: f64) {
        if !self.game_over {
            self.catcher_x = x.clamp(0.0, 100.0);
        }
    }

    /// Advance the ball by one tick.
    ///
    /// When the ball crosses the catch line it is either caught (score
    /// increases, a new ball spawns at a random column) or missed (the game
    /// ends, the ball settles at the bottom). Ticks after the game is over
    /// keep reporting [`TickOutcome::Missed`] without changing state.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Missed;
        }

        let next = self.ball_y + DROP_STEP;
        if next >= CATCH_LINE {
            if (self.catcher_x - self.ball_x).abs() <= CATCH_WINDOW {
                self.score += 1;
                self.ball_y = 0.0;
                self.ball_x = self.rng.random_range(0.0..90.0);
                TickOutcome::Caught
            } else {
                self.game_over = true;
                self.ball_y = next.min(100.0);
                TickOutcome::Missed
            }
        } else {
            self.ball_y = next;
            TickOutcome::Falling
        }
    }

    /// Start over with score 0 and a fresh ball
    pub fn reset(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.ball_y = 0.0;
        self.ball_x = self.rng.random_range(0.0..90.0);
    }

    pub fn ball_position(&self) -> (f64, f64) {
        (self.ball_x, self.ball_y)
    }

    pub fn catcher_position(&self) -> f64 {
        self.catcher_x
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

impl Default for CatchGame {
    fn default() -> Self {
        Self::new()
    }
}
