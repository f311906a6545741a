//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (Mulberry32, bit-exact with the browser build)
//! - Stable iteration order (holes in insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod holes;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{WallHit, check_entry, reflect_at_walls, slope_within_limit};
pub use holes::{Hole, HoleLayout, generate_holes, target_hole};
pub use rng::Mulberry32;
pub use state::{Ball, Bar, GameState, InputState, RoundPhase, Tuning};
pub use tick::{tick, update_ball, update_bar};
