//! Simulation state and entity types
//!
//! Everything the tick function reads or writes lives in [`SimulationState`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::color::Color;
use crate::config::{Config, ConfigError};
use crate::consts::*;

/// Which half of the field an entity or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human player
    Left,
    /// Scripted opponent
    Right,
}

impl Side {
    /// Horizontal direction a ball travels after bouncing off this side's paddle
    pub fn rebound_direction(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleHit { side: Side },
    Scored { side: Side },
}

/// Fixed playing field bounds, origin at top-left, y down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle. `pos` is the top-left corner; only `pos.y` changes after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    /// Scripted movement speed (AI paddle only)
    pub speed: Option<f32>,
}

impl Paddle {
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Clamp the paddle vertically into the field
    pub fn clamp_to(&mut self, field: &Field) {
        let max_y = (field.height - self.size.y).max(0.0);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }
}

/// The ball. `speed` is the rally speed used on the next paddle rebound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub color: Color,
}

/// Points per side. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub left: u32,
    pub right: u32,
}

impl Scores {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub field: Field,
    /// Human paddle
    pub left: Paddle,
    /// AI paddle
    pub right: Paddle,
    pub ball: Ball,
    pub scores: Scores,
    /// Ticks simulated so far
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    /// Seed the serve RNG was created from
    pub seed: u64,
    rng: Pcg32,
}

impl SimulationState {
    /// Build the opening layout: paddles centered on each edge, ball at the
    /// center heading right and down at (baseline, baseline / 2).
    ///
    /// The config is validated first, so a field too small for the paddles
    /// is rejected here rather than breaking the paddle bounds later.
    pub fn new(config: &Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let field = Field {
            width: config.field.width,
            height: config.field.height,
        };
        let palette = &config.palette;
        let paddle_size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        let paddle_y = field.height / 2.0 - PADDLE_HEIGHT / 2.0;

        let left = Paddle {
            pos: Vec2::new(0.0, paddle_y),
            size: paddle_size,
            color: palette.left_paddle,
            speed: None,
        };
        let right = Paddle {
            pos: Vec2::new(field.width - PADDLE_WIDTH, paddle_y),
            size: paddle_size,
            color: palette.right_paddle,
            speed: Some(AI_PADDLE_SPEED),
        };
        let ball = Ball {
            pos: field.center(),
            vel: Vec2::new(BALL_BASELINE_SPEED, BALL_BASELINE_SPEED / 2.0),
            radius: BALL_RADIUS,
            speed: BALL_BASELINE_SPEED,
            color: palette.ball,
        };

        Ok(Self {
            field,
            left,
            right,
            ball,
            scores: Scores::default(),
            time_ticks: 0,
            events: Vec::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Serve a new ball from the center: random horizontal direction at
    /// baseline speed, vertical component uniform in ±75% of baseline.
    pub fn reset_ball(&mut self) {
        let dir = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let spread: f32 = self.rng.random_range(-1.0..1.0);

        self.ball.pos = self.field.center();
        self.ball.speed = BALL_BASELINE_SPEED;
        self.ball.vel = Vec2::new(
            dir * BALL_BASELINE_SPEED,
            spread * BALL_BASELINE_SPEED * SERVE_SPREAD,
        );
    }
}
