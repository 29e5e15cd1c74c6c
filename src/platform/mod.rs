//! Platform abstraction layer
//!
//! Translates host input into simulation coordinates. Browser event wiring
//! lives in the binary; everything here is plain data and testable natively.

pub mod input;

pub use input::{PointerSlot, client_to_field, paddle_y_for_pointer};
