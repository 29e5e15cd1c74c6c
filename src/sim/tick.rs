//! Per-tick simulation step
//!
//! One call advances the game by one tick. Velocities are in field units per
//! tick, so the caller decides how often ticks happen.

use super::ai;
use super::collision::{bounce_off_walls, paddle_contact, rebound};
use super::state::{GameEvent, Side, SimulationState};
use crate::platform::input::paddle_y_for_pointer;

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer height in field coordinates. `None` leaves the human
    /// paddle where it is.
    pub pointer_y: Option<f32>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut SimulationState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    if let Some(pointer_y) = input.pointer_y {
        state.left.pos.y =
            paddle_y_for_pointer(pointer_y, state.left.size.y, state.field.height);
    }

    let field = state.field;
    let ball = &mut state.ball;

    ball.pos += ball.vel;

    if bounce_off_walls(ball, &field) {
        state.events.push(GameEvent::WallBounce);
    }

    if let Some(side) = paddle_contact(ball, &state.left, &state.right) {
        let paddle = match side {
            Side::Left => &state.left,
            Side::Right => &state.right,
        };
        rebound(ball, paddle, side);
        state.events.push(GameEvent::PaddleHit { side });
    }

    let scorer = if ball.pos.x - ball.radius < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x + ball.radius > field.width {
        Some(Side::Left)
    } else {
        None
    };
    if let Some(side) = scorer {
        state.scores.award(side);
        state.reset_ball();
        state.events.push(GameEvent::Scored { side });
    }

    ai::track(&mut state.right, state.ball.pos.y, &field);
}
