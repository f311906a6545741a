//! Per-frame simulation step
//!
//! Advances the bar from held keys, rolls the ball along it and checks the
//! holes. One call per animation frame; there is no timestep, movement is
//! per frame.

use super::collision::{WallHit, check_entry, reflect_at_walls, slope_within_limit};
use super::state::{Ball, Bar, GameState, InputState, RoundPhase};
use crate::consts::*;

/// Move the bar endpoints for one step.
///
/// Each held direction moves its endpoint by `speed` if the endpoint stays
/// inside `[0, CANVAS_HEIGHT - BAR_THICKNESS]`. If the resulting tilt exceeds
/// `MAX_BAR_ANGLE` the whole move is dropped and neither endpoint changes.
///
/// Returns whether the move was applied.
pub fn update_bar(bar: &mut Bar, input: &InputState, speed: f64) -> bool {
    let mut left_y = bar.left_y;
    let mut right_y = bar.right_y;

    if input.raise_left && left_y - speed >= 0.0 {
        left_y -= speed;
    }
    if input.lower_left && left_y + speed + BAR_THICKNESS <= CANVAS_HEIGHT {
        left_y += speed;
    }
    if input.raise_right && right_y - speed >= 0.0 {
        right_y -= speed;
    }
    if input.lower_right && right_y + speed + BAR_THICKNESS <= CANVAS_HEIGHT {
        right_y += speed;
    }

    if !slope_within_limit(bar, left_y, right_y) {
        log::trace!("Bar move rejected ({}, {})", left_y, right_y);
        return false;
    }

    bar.left_y = left_y;
    bar.right_y = right_y;
    true
}

/// Roll the ball along the bar for one step.
///
/// Horizontal velocity is the bar slope times `gravity`. After the wall clamp
/// the ball is placed back on the bar surface; it never leaves the bar.
pub fn update_ball(ball: &mut Ball, bar: &Bar, gravity: f64) -> Option<WallHit> {
    let slope = bar.slope();
    ball.dx = slope * gravity;
    ball.pos.x += ball.dx;

    let wall = reflect_at_walls(ball);

    ball.pos.y = bar.y_at(ball.pos.x) - ball.radius;

    // Visual clamp only; touching the floor does not end the round
    if ball.pos.y + ball.radius > CANVAS_HEIGHT {
        ball.pos.y = CANVAS_HEIGHT - ball.radius;
    }

    wall
}

/// Advance the round by one step and return the phase afterwards.
///
/// A terminal round is left untouched.
pub fn tick(state: &mut GameState) -> RoundPhase {
    if state.phase.is_terminal() {
        return state.phase;
    }

    state.steps += 1;

    update_bar(&mut state.bar, &state.input, state.tuning.bar_speed);

    if let Some(wall) = update_ball(&mut state.ball, &state.bar, state.tuning.gravity) {
        log::trace!("Ball bounced off {:?} wall", wall);
    }

    if let Some(hole) = check_entry(&state.ball, state.layout.holes()) {
        state.phase = if hole.is_target {
            log::info!("Target hole reached after {} steps", state.steps);
            RoundPhase::Won
        } else {
            log::info!(
                "Ball fell into hole at ({:.1}, {:.1}) after {} steps",
                hole.pos.x,
                hole.pos.y,
                state.steps
            );
            RoundPhase::Lost
        };
    }

    state.phase
}
