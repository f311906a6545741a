//! Tilt Hole - roll a ball along a tiltable bar into the target hole
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bar, ball, holes, round state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Keyboard mapping and frame scheduling
//! - `persistence`: Key-value storage (LocalStorage on web)
//! - `settings`: Persisted seed and slider values
//! - `session`: Game state + settings + storage, wired together

pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (physics and rendering share pixel space, y down)
    pub const CANVAS_WIDTH: f64 = 800.0;
    pub const CANVAS_HEIGHT: f64 = 600.0;

    /// Bar defaults
    pub const BAR_THICKNESS: f64 = 10.0;
    /// Both endpoints start this far above the floor
    pub const BAR_START_OFFSET: f64 = 50.0;
    pub const BAR_MOVE_SPEED: f64 = 3.0;
    /// Steepest allowed tilt (30 degrees)
    pub const MAX_BAR_ANGLE: f64 = 30.0 * std::f64::consts::PI / 180.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    pub const BALL_START_Y: f64 = 50.0;
    /// Slope-to-velocity factor
    pub const GRAVITY: f64 = 25.0;

    /// Hole field
    pub const HOLE_COUNT: usize = 50;
    pub const HOLE_RADIUS: f64 = 11.0;
    pub const TARGET_HOLE_Y: f64 = 30.0;
    pub const TARGET_HOLE_RADIUS: f64 = 12.0;

    /// Fresh seeds are drawn from 0..SEED_RANGE
    pub const SEED_RANGE: u32 = 10_000;

    /// Slider ranges (raw values are 0..=max)
    pub const BAR_SPEED_SLIDER_MAX: u32 = 10;
    pub const BALL_ACCELERATION_SLIDER_MAX: u32 = 50;
    /// Raw slider value -> tuning value
    pub const SLIDER_SCALE: f64 = 0.8;

    /// Delay between a win/loss and the automatic round reset
    pub const RESET_DELAY_MS: i32 = 2000;
}
