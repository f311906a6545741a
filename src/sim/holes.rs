//! Seeded hole layout
//!
//! A layout is a pure function of its seed: ordinary holes are drawn from the
//! Mulberry32 stream and the target hole is appended last.

use glam::DVec2;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::rng::{Mulberry32, next_unit};
use crate::consts::*;

/// A hole in the playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub pos: DVec2,
    pub radius: f64,
    /// The single winning hole; every other hole ends the round as a loss
    #[serde(default)]
    pub is_target: bool,
}

impl Hole {
    pub fn new(pos: DVec2, radius: f64) -> Self {
        Self {
            pos,
            radius,
            is_target: false,
        }
    }
}

/// The fixed winning hole, centered near the top of the canvas
pub fn target_hole() -> Hole {
    Hole {
        pos: DVec2::new(CANVAS_WIDTH / 2.0, TARGET_HOLE_Y),
        radius: TARGET_HOLE_RADIUS,
        is_target: true,
    }
}

/// Generate `count` non-overlapping ordinary holes inside
/// `[0, width) x [0, height)`.
///
/// Candidates are drawn x-then-y from the seeded stream and kept only if their
/// center is at least `2 * radius` from every hole accepted so far. Output is
/// in acceptance order.
///
/// There is no attempt limit: a region too small for `count` holes never
/// terminates.
pub fn generate_holes(seed: u32, count: usize, width: f64, height: f64, radius: f64) -> Vec<Hole> {
    let mut rng = Mulberry32::from_seed(seed.to_le_bytes());
    let min_distance = 2.0 * radius;
    let mut holes: Vec<Hole> = Vec::with_capacity(count);

    while holes.len() < count {
        let x = next_unit(&mut rng) * width;
        let y = next_unit(&mut rng) * height;
        let candidate = DVec2::new(x, y);

        let overlapping = holes
            .iter()
            .any(|hole| candidate.distance(hole.pos) < min_distance);

        if !overlapping {
            holes.push(Hole::new(candidate, radius));
        }
    }

    holes
}

/// A seed together with the holes it produced
///
/// Seed and holes are only ever replaced together, so a layout never mixes
/// holes from two seeds or loses its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleLayout {
    seed: u32,
    holes: Vec<Hole>,
}

impl HoleLayout {
    /// Build the full playfield layout for a seed (ordinary holes + target)
    pub fn new(seed: u32) -> Self {
        let mut holes = generate_holes(
            seed,
            HOLE_COUNT,
            CANVAS_WIDTH,
            CANVAS_HEIGHT / 2.0,
            HOLE_RADIUS,
        );
        holes.push(target_hole());
        log::debug!("Generated {} holes for seed {}", holes.len(), seed);
        Self { seed, holes }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Holes in scan order, target last
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    pub fn target(&self) -> Option<&Hole> {
        self.holes.iter().find(|h| h.is_target)
    }
}
