//! Collision tests for the bar, the canvas walls and the holes

use super::holes::Hole;
use super::state::{Ball, Bar};
use crate::consts::{CANVAS_WIDTH, MAX_BAR_ANGLE};

/// Would the bar with these endpoint heights stay within the tilt limit?
pub fn slope_within_limit(bar: &Bar, left_y: f64, right_y: f64) -> bool {
    let angle = (right_y - left_y).atan2(bar.right_x - bar.left_x);
    angle.abs() <= MAX_BAR_ANGLE
}

/// Which side wall (if any) the ball was pushed back from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    Left,
    Right,
}

/// Clamp the ball inside `[radius, CANVAS_WIDTH - radius]`.
///
/// On contact the velocity sign is flipped and stored; the flipped velocity is
/// not applied to the position this step.
pub fn reflect_at_walls(ball: &mut Ball) -> Option<WallHit> {
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.dx = -ball.dx;
        Some(WallHit::Left)
    } else if ball.pos.x + ball.radius > CANVAS_WIDTH {
        ball.pos.x = CANVAS_WIDTH - ball.radius;
        ball.dx = -ball.dx;
        Some(WallHit::Right)
    } else {
        None
    }
}

/// Find the hole the ball center fell into.
///
/// A hole is entered when the center distance is strictly below the hole
/// radius. When several holes qualify the last one in scan order wins; the
/// target is scanned last, so it wins any tie.
pub fn check_entry<'a>(ball: &Ball, holes: &'a [Hole]) -> Option<&'a Hole> {
    holes
        .iter()
        .rfind(|hole| ball.pos.distance(hole.pos) < hole.radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::holes::target_hole;
    use glam::DVec2;

    fn ball_at(x: f64, y: f64) -> Ball {
        Ball {
            pos: DVec2::new(x, y),
            ..Default::default()
        }
    }

    #[test]
    fn test_entry_at_center() {
        let target = Hole {
            pos: DVec2::new(100.0, 50.0),
            radius: 12.0,
            is_target: true,
        };
        let holes = [Hole::new(DVec2::new(300.0, 50.0), 11.0), target];
        let ball = ball_at(100.0, 50.0);
        assert_eq!(check_entry(&ball, &holes), Some(&target));
    }

    #[test]
    fn test_entry_boundary_is_exclusive() {
        let holes = [Hole::new(DVec2::new(0.0, 0.0), 11.0)];
        assert!(check_entry(&ball_at(11.0, 0.0), &holes).is_none());
        assert!(check_entry(&ball_at(10.999, 0.0), &holes).is_some());
    }

    #[test]
    fn test_last_overlapping_hole_wins() {
        let first = Hole::new(DVec2::new(100.0, 100.0), 11.0);
        let second = Hole::new(DVec2::new(105.0, 100.0), 11.0);
        let ball = ball_at(102.0, 100.0);
        assert_eq!(check_entry(&ball, &[first, second]), Some(&second));
        assert_eq!(check_entry(&ball, &[second, first]), Some(&first));
    }

    #[test]
    fn test_target_wins_tie_in_layout_order() {
        let target = target_hole();
        let ordinary = Hole::new(target.pos + DVec2::new(3.0, 0.0), 11.0);
        let ball = ball_at(target.pos.x + 1.0, target.pos.y);
        let holes = [ordinary, target];
        let hit = check_entry(&ball, &holes);
        assert!(hit.is_some_and(|h| h.is_target));
    }

    #[test]
    fn test_no_entry() {
        let holes = [target_hole()];
        assert!(check_entry(&ball_at(10.0, 500.0), &holes).is_none());
    }

    #[test]
    fn test_right_wall_reflection() {
        let mut ball = ball_at(CANVAS_WIDTH - 10.0 + 1.0, 0.0);
        ball.dx = 4.0;
        assert_eq!(reflect_at_walls(&mut ball), Some(WallHit::Right));
        assert_eq!(ball.pos.x, CANVAS_WIDTH - ball.radius);
        assert_eq!(ball.dx, -4.0);
    }

    #[test]
    fn test_left_wall_reflection() {
        let mut ball = ball_at(3.0, 0.0);
        ball.dx = -2.5;
        assert_eq!(reflect_at_walls(&mut ball), Some(WallHit::Left));
        assert_eq!(ball.pos.x, ball.radius);
        assert_eq!(ball.dx, 2.5);
    }

    #[test]
    fn test_slope_limit() {
        let bar = Bar::default();
        let run = bar.right_x - bar.left_x;
        let rise_30 = run * MAX_BAR_ANGLE.tan();
        let rise_35 = run * 35f64.to_radians().tan();
        assert!(slope_within_limit(&bar, 550.0, 550.0));
        assert!(slope_within_limit(&bar, 550.0, 550.0 - rise_30 * 0.999));
        assert!(!slope_within_limit(&bar, 550.0, 550.0 - rise_35));
        assert!(!slope_within_limit(&bar, 550.0 - rise_35, 550.0));
    }
}
