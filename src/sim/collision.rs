//! Ball vs paddle collision detection and rebound response
//!
//! Paddles are axis-aligned rectangles and the ball is tested by its bounding
//! box, so corner hits can report an offset slightly beyond ±1. That offset is
//! deliberately left unclamped.

use glam::Vec2;

use super::state::{Ball, Field, Paddle, Side};
use crate::consts::{BALL_SPEED_INCREMENT, MAX_BOUNCE_ANGLE};

/// Flip the vertical velocity if the ball pokes past the top or bottom wall.
/// Position is not corrected. Returns whether a bounce happened.
pub fn bounce_off_walls(ball: &mut Ball, field: &Field) -> bool {
    let hit = ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > field.height;
    if hit {
        ball.vel.y = -ball.vel.y;
    }
    hit
}

/// Bounding-box overlap between the ball and a paddle
pub fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x - ball.radius < paddle.right()
        && ball.pos.x + ball.radius > paddle.left()
        && ball.pos.y - ball.radius < paddle.bottom()
        && ball.pos.y + ball.radius > paddle.top()
}

/// Which paddle, if any, the ball is touching. The left paddle is checked
/// first and short-circuits the right one.
pub fn paddle_contact(ball: &Ball, left: &Paddle, right: &Paddle) -> Option<Side> {
    if ball.pos.x - ball.radius < left.right() && overlaps(ball, left) {
        Some(Side::Left)
    } else if ball.pos.x + ball.radius > right.left() && overlaps(ball, right) {
        Some(Side::Right)
    } else {
        None
    }
}

/// Where on the paddle the ball struck: -1 at the top edge, 0 at the center,
/// +1 at the bottom edge
pub fn contact_offset(ball_y: f32, paddle: &Paddle) -> f32 {
    (ball_y - paddle.center_y()) / (paddle.size.y / 2.0)
}

/// Outgoing velocity for a rebound at `offset` with magnitude `speed`
pub fn rebound_velocity(offset: f32, speed: f32, side: Side) -> Vec2 {
    let angle = offset * MAX_BOUNCE_ANGLE;
    Vec2::new(
        side.rebound_direction() * speed * angle.cos(),
        speed * angle.sin(),
    )
}

/// Redirect the ball off `paddle` and bump the rally speed
pub fn rebound(ball: &mut Ball, paddle: &Paddle, side: Side) {
    let offset = contact_offset(ball.pos.y, paddle);
    ball.vel = rebound_velocity(offset, ball.speed, side);
    ball.speed += BALL_SPEED_INCREMENT;
}
