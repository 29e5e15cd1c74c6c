//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the display
//! or the browser:
//! - Velocities are per tick, the caller owns the clock
//! - Serve directions come from a seeded RNG only
//! - Input arrives as a plain [`TickInput`] value

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_walls, paddle_contact, rebound, rebound_velocity};
pub use state::{Ball, Field, GameEvent, Paddle, Scores, Side, SimulationState};
pub use tick::{TickInput, tick};
