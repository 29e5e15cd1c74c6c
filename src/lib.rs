//! Paddle Pong - classic two-paddle Pong against a tracking AI
//!
//! Core modules:
//! - `sim`: Per-tick simulation (movement, collisions, scoring, AI)
//! - `driver`: Frame loop glue between input, simulation and rendering
//! - `platform`: Pointer input mapping
//! - `renderer`: Scene building and WebGPU rendering
//! - `config`: Field size, palette and tick policy

pub mod color;
pub mod config;
pub mod driver;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use color::Color;
pub use config::{Config, ConfigError};
pub use driver::{FrameDriver, RenderSink, TickPolicy};

/// Gameplay constants. Velocities are in field units per tick.
pub mod consts {
    /// Reference field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// AI paddle vertical speed
    pub const AI_PADDLE_SPEED: f32 = 4.0;
    /// AI holds still while the ball is within this distance of its center
    pub const AI_DEADZONE: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Speed restored after every point
    pub const BALL_BASELINE_SPEED: f32 = 6.0;
    /// Speed gained on every paddle hit
    pub const BALL_SPEED_INCREMENT: f32 = 0.5;
    /// Vertical serve spread as a fraction of baseline speed
    pub const SERVE_SPREAD: f32 = 0.75;
    /// Maximum rebound deflection (45°)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Fixed-rate driver limits
    pub const MAX_FRAME_DT: f32 = 0.1;
    pub const MAX_SUBSTEPS: u32 = 8;
}
