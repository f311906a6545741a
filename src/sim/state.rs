//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in `GameState`; nothing is global.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::holes::{Hole, HoleLayout};
use crate::consts::*;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Ball rolling, loop running
    #[default]
    Running,
    /// Ball dropped into the target hole
    Won,
    /// Ball dropped into an ordinary hole
    Lost,
}

impl RoundPhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundPhase::Running)
    }
}

/// The ball riding on the bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    pub radius: f64,
    /// Horizontal velocity; recomputed from the slope every step, sign
    /// flipped on a wall hit
    pub dx: f64,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: DVec2::new(CANVAS_WIDTH / 2.0, BALL_START_Y),
            radius: BALL_RADIUS,
            dx: 0.0,
        }
    }
}

/// The tiltable bar; x of each end is fixed, y moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub left_x: f64,
    pub right_x: f64,
    pub left_y: f64,
    pub right_y: f64,
}

impl Default for Bar {
    fn default() -> Self {
        let y = CANVAS_HEIGHT - BAR_START_OFFSET;
        Self {
            left_x: 0.0,
            right_x: CANVAS_WIDTH,
            left_y: y,
            right_y: y,
        }
    }
}

impl Bar {
    /// Rise over run between the endpoints
    pub fn slope(&self) -> f64 {
        (self.right_y - self.left_y) / (self.right_x - self.left_x)
    }

    /// Tilt angle in radians (positive when the right end is lower)
    pub fn angle(&self) -> f64 {
        (self.right_y - self.left_y).atan2(self.right_x - self.left_x)
    }

    /// Height of the bar surface at `x`
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope() * (x - self.left_x) + self.left_y
    }
}

/// Held keys, one flag per endpoint direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub raise_left: bool,
    pub lower_left: bool,
    pub raise_right: bool,
    pub lower_right: bool,
}

/// Runtime-adjustable physics parameters (driven by the settings sliders)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Endpoint movement per step
    pub bar_speed: f64,
    /// Slope-to-velocity factor
    pub gravity: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            bar_speed: BAR_MOVE_SPEED,
            gravity: GRAVITY,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub layout: HoleLayout,
    pub ball: Ball,
    pub bar: Bar,
    pub input: InputState,
    pub tuning: Tuning,
    pub phase: RoundPhase,
    /// Steps taken this round
    pub steps: u64,
}

impl GameState {
    /// Create a new game with the layout for `seed`
    pub fn new(seed: u32, tuning: Tuning) -> Self {
        Self {
            layout: HoleLayout::new(seed),
            ball: Ball::default(),
            bar: Bar::default(),
            input: InputState::default(),
            tuning,
            phase: RoundPhase::Running,
            steps: 0,
        }
    }

    pub fn seed(&self) -> u32 {
        self.layout.seed()
    }

    pub fn holes(&self) -> &[Hole] {
        self.layout.holes()
    }

    /// Back to a fresh round: ball, bar and keys reset, holes kept
    pub fn reset_round(&mut self) {
        self.ball = Ball::default();
        self.bar = Bar::default();
        self.input = InputState::default();
        self.phase = RoundPhase::Running;
        self.steps = 0;
    }

    /// Swap in the layout for a new seed. The round itself carries on.
    pub fn reseed(&mut self, seed: u32) {
        self.layout = HoleLayout::new(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = GameState::new(42, Tuning::default());
        assert_eq!(state.phase, RoundPhase::Running);
        assert_eq!(state.ball.pos, DVec2::new(400.0, 50.0));
        assert_eq!(state.bar.left_y, 550.0);
        assert_eq!(state.bar.right_y, 550.0);
        assert_eq!(state.bar.slope(), 0.0);
        assert_eq!(state.seed(), 42);
    }

    #[test]
    fn test_reset_keeps_holes() {
        let mut state = GameState::new(7, Tuning::default());
        let holes = state.holes().to_vec();
        state.ball.pos.x = 12.0;
        state.bar.left_y = 100.0;
        state.input.raise_left = true;
        state.phase = RoundPhase::Lost;

        state.reset_round();

        assert_eq!(state.phase, RoundPhase::Running);
        assert_eq!(state.ball, Ball::default());
        assert_eq!(state.bar, Bar::default());
        assert_eq!(state.input, InputState::default());
        assert_eq!(state.holes(), holes.as_slice());
    }

    #[test]
    fn test_reseed_replaces_layout_only() {
        let mut state = GameState::new(7, Tuning::default());
        state.ball.pos.x = 123.0;
        state.reseed(8);
        assert_eq!(state.seed(), 8);
        assert_eq!(state.layout, HoleLayout::new(8));
        assert_eq!(state.ball.pos.x, 123.0);
    }

    #[test]
    fn test_bar_geometry() {
        let bar = Bar {
            left_x: 0.0,
            right_x: 100.0,
            left_y: 50.0,
            right_y: 150.0,
        };
        assert_eq!(bar.slope(), 1.0);
        assert!((bar.angle() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert_eq!(bar.y_at(50.0), 100.0);
    }
}
