//! Turns a `GameState` into a triangle list in canvas pixel space

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{BAR_THICKNESS, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::GameState;

/// Circle tessellation
const BALL_SEGMENTS: u32 = 32;
const HOLE_SEGMENTS: u32 = 24;

/// Build the frame: ball, then bar, then holes on top, then the dim layer if
/// the round is over.
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let holes = state.holes();
    let mut vertices = Vec::with_capacity(
        (BALL_SEGMENTS as usize + holes.len() * HOLE_SEGMENTS as usize) * 3 + 12,
    );

    vertices.extend(shapes::circle(
        state.ball.pos.as_vec2(),
        state.ball.radius as f32,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    let bar = &state.bar;
    vertices.extend(shapes::thick_line(
        Vec2::new(bar.left_x as f32, bar.left_y as f32),
        Vec2::new(bar.right_x as f32, bar.right_y as f32),
        BAR_THICKNESS as f32,
        colors::BAR,
    ));

    for hole in holes {
        let color = if hole.is_target {
            colors::TARGET_HOLE
        } else {
            colors::HOLE
        };
        vertices.extend(shapes::circle(
            hole.pos.as_vec2(),
            hole.radius as f32,
            color,
            HOLE_SEGMENTS,
        ));
    }

    if state.phase.is_terminal() {
        vertices.extend(shapes::rect(
            Vec2::ZERO,
            Vec2::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32),
            colors::ROUND_OVER,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{RoundPhase, Tuning};

    #[test]
    fn test_scene_contents() {
        let state = GameState::new(42, Tuning::default());
        let verts = build_scene(&state);
        let expected = BALL_SEGMENTS as usize * 3 + 6 + state.holes().len() * HOLE_SEGMENTS as usize * 3;
        assert_eq!(verts.len(), expected);

        // Exactly one green hole
        let green = verts.iter().filter(|v| v.color == colors::TARGET_HOLE).count();
        assert_eq!(green, HOLE_SEGMENTS as usize * 3);
    }

    #[test]
    fn test_overlay_when_round_over() {
        let mut state = GameState::new(42, Tuning::default());
        let running = build_scene(&state).len();
        state.phase = RoundPhase::Lost;
        let verts = build_scene(&state);
        assert_eq!(verts.len(), running + 6);
        assert!(verts.last().is_some_and(|v| v.color == colors::ROUND_OVER));
    }
}
