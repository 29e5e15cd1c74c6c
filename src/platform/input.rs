//! Pointer input
//!
//! Pointer events can arrive at any rate; the simulation samples the most
//! recent one once per tick.

/// Latest pointer height in field coordinates. Last write wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSlot {
    latest: Option<f32>,
}

impl PointerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer sample, replacing any earlier one. Non-finite values
    /// are dropped.
    pub fn set(&mut self, y: f32) {
        if y.is_finite() {
            self.latest = Some(y);
        }
    }

    /// Most recent sample, if the pointer has ever been seen
    pub fn latest(&self) -> Option<f32> {
        self.latest
    }
}

/// Convert a DOM client Y coordinate into field space.
///
/// `rect_top` and `rect_height` are the canvas bounding rect in CSS pixels.
/// When the canvas is displayed at its field size this is just
/// `client_y - rect_top`.
pub fn client_to_field(client_y: f32, rect_top: f32, rect_height: f32, field_height: f32) -> f32 {
    let local = client_y - rect_top;
    if rect_height > 0.0 {
        local * field_height / rect_height
    } else {
        local
    }
}

/// Top edge for a paddle centered on `pointer_y`, clamped into the field
pub fn paddle_y_for_pointer(pointer_y: f32, paddle_height: f32, field_height: f32) -> f32 {
    let max_y = (field_height - paddle_height).max(0.0);
    (pointer_y - paddle_height / 2.0).clamp(0.0, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_last_write_wins() {
        let mut slot = PointerSlot::new();
        assert_eq!(slot.latest(), None);
        slot.set(10.0);
        slot.set(250.0);
        slot.set(42.0);
        assert_eq!(slot.latest(), Some(42.0));
    }

    #[test]
    fn test_slot_ignores_nan() {
        let mut slot = PointerSlot::new();
        slot.set(100.0);
        slot.set(f32::NAN);
        slot.set(f32::INFINITY);
        assert_eq!(slot.latest(), Some(100.0));
    }

    #[test]
    fn test_client_to_field() {
        // Canvas displayed at native size
        assert_eq!(client_to_field(350.0, 50.0, 600.0, 600.0), 300.0);
        // Canvas displayed at half size
        assert_eq!(client_to_field(200.0, 50.0, 300.0, 600.0), 300.0);
        // Degenerate rect falls back to the unscaled offset
        assert_eq!(client_to_field(80.0, 30.0, 0.0, 600.0), 50.0);
    }

    #[test]
    fn test_paddle_mapping_centers_and_clamps() {
        assert_eq!(paddle_y_for_pointer(300.0, 100.0, 600.0), 250.0);
        assert_eq!(paddle_y_for_pointer(20.0, 100.0, 600.0), 0.0);
        assert_eq!(paddle_y_for_pointer(590.0, 100.0, 600.0), 500.0);
    }

    #[test]
    fn test_paddle_mapping_is_idempotent() {
        for pointer in [-100.0, 0.0, 49.0, 333.3, 551.0, 1e6] {
            let once = paddle_y_for_pointer(pointer, 100.0, 600.0);
            let again = paddle_y_for_pointer(once + 50.0, 100.0, 600.0);
            assert_eq!(once, again);
        }
    }
}
