//! Scripted opponent
//!
//! The AI paddle chases the ball's current height at a fixed speed and holds
//! still inside a small deadzone around its center.

use super::state::{Field, Paddle};
use crate::consts::AI_DEADZONE;

/// Move `paddle` one tick toward `ball_y`, then clamp it into the field
pub fn track(paddle: &mut Paddle, ball_y: f32, field: &Field) {
    let speed = paddle.speed.unwrap_or(0.0);
    let center = paddle.center_y();

    if ball_y < center - AI_DEADZONE {
        paddle.pos.y -= speed;
    } else if ball_y > center + AI_DEADZONE {
        paddle.pos.y += speed;
    }

    paddle.clamp_to(field);
}
