//! Frame driver
//!
//! Owns the simulation state and the pointer slot, runs ticks for each
//! display frame and hands the result to a [`RenderSink`]. The same driver
//! runs in the browser and in the native headless runner.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::platform::PointerSlot;
use crate::sim::{GameEvent, SimulationState, TickInput, tick};

/// Anything that can present a simulation snapshot
pub trait RenderSink {
    type Error;

    /// Draw one frame of `state`
    fn render(&mut self, state: &SimulationState) -> Result<(), Self::Error>;
}

/// How many ticks a display frame is worth
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum TickPolicy {
    /// One tick per display frame. Game speed follows the refresh rate.
    #[default]
    PerFrame,
    /// Ticks at a fixed rate regardless of refresh rate
    Fixed { hz: f32 },
}

/// Drives the simulation one display frame at a time
#[derive(Debug, Clone)]
pub struct FrameDriver {
    state: SimulationState,
    pointer: PointerSlot,
    policy: TickPolicy,
    accumulator: f32,
    frames: u64,
}

impl FrameDriver {
    pub fn new(state: SimulationState, policy: TickPolicy) -> Self {
        Self {
            state,
            pointer: PointerSlot::new(),
            policy,
            accumulator: 0.0,
            frames: 0,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn pointer(&self) -> &PointerSlot {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerSlot {
        &mut self.pointer
    }

    pub fn policy(&self) -> TickPolicy {
        self.policy
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run the ticks owed for a frame that took `dt` seconds. Returns the
    /// number of ticks run.
    pub fn advance(&mut self, dt: f32) -> u32 {
        match self.policy {
            TickPolicy::PerFrame => {
                self.step();
                1
            }
            TickPolicy::Fixed { hz } => {
                let step_dt = 1.0 / hz;
                self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

                let mut substeps = 0;
                while self.accumulator >= step_dt && substeps < MAX_SUBSTEPS {
                    self.step();
                    self.accumulator -= step_dt;
                    substeps += 1;
                }

                if substeps == MAX_SUBSTEPS && self.accumulator >= step_dt {
                    log::debug!(
                        "Dropping {:.1} ms of simulation backlog",
                        self.accumulator * 1000.0
                    );
                    self.accumulator = 0.0;
                }
                substeps
            }
        }
    }

    /// Advance for one display frame, then render it
    pub fn frame<S: RenderSink>(&mut self, dt: f32, sink: &mut S) -> Result<u32, S::Error> {
        let ticks = self.advance(dt);
        self.frames += 1;
        sink.render(&self.state)?;
        Ok(ticks)
    }

    fn step(&mut self) {
        let input = TickInput {
            pointer_y: self.pointer.latest(),
        };
        tick(&mut self.state, &input);
        self.log_events();
    }

    fn log_events(&self) {
        let scores = self.state.scores;
        for event in &self.state.events {
            match event {
                GameEvent::Scored { side } => {
                    log::info!("Point to {:?} ({} - {})", side, scores.left, scores.right);
                }
                GameEvent::PaddleHit { side } => {
                    log::debug!(
                        "{:?} paddle hit, ball speed now {:.1}",
                        side,
                        self.state.ball.speed
                    );
                }
                GameEvent::WallBounce => log::trace!("Wall bounce at tick {}", self.state.time_ticks),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[derive(Default)]
    struct CountingSink {
        frames: u32,
        last_tick: u64,
    }

    impl RenderSink for CountingSink {
        type Error = std::convert::Infallible;

        fn render(&mut self, state: &SimulationState) -> Result<(), Self::Error> {
            self.frames += 1;
            self.last_tick = state.time_ticks;
            Ok(())
        }
    }

    struct FailingSink;

    impl RenderSink for FailingSink {
        type Error = &'static str;

        fn render(&mut self, _state: &SimulationState) -> Result<(), Self::Error> {
            Err("surface lost")
        }
    }

    fn driver(policy: TickPolicy) -> FrameDriver {
        FrameDriver::new(SimulationState::new(&Config::default(), 5).unwrap(), policy)
    }

    #[test]
    fn test_per_frame_ignores_dt() {
        let mut d = driver(TickPolicy::PerFrame);
        let mut sink = CountingSink::default();
        for dt in [0.0, 0.001, 0.016, 0.5] {
            assert_eq!(d.frame(dt, &mut sink), Ok(1));
        }
        assert_eq!(sink.frames, 4);
        assert_eq!(sink.last_tick, 4);
        assert_eq!(d.frames(), 4);
    }

    #[test]
    fn test_fixed_rate_accumulates() {
        let mut d = driver(TickPolicy::Fixed { hz: 100.0 });
        assert_eq!(d.advance(0.025), 2);
        assert_eq!(d.advance(0.0075), 1);
        assert_eq!(d.advance(0.004), 0);
        assert_eq!(d.state().time_ticks, 3);
    }

    #[test]
    fn test_fixed_rate_caps_substeps() {
        let mut d = driver(TickPolicy::Fixed { hz: 1000.0 });
        assert_eq!(d.advance(0.1), MAX_SUBSTEPS);
        // Backlog was dropped, a tiny frame runs nothing
        assert_eq!(d.advance(0.0001), 0);
    }

    #[test]
    fn test_fixed_rate_clamps_long_frames() {
        let mut d = driver(TickPolicy::Fixed { hz: 10.0 });
        assert_eq!(d.advance(5.0), 1);
        assert_eq!(d.advance(-1.0), 0);
    }

    #[test]
    fn test_pointer_sampled_each_tick() {
        let mut d = driver(TickPolicy::PerFrame);
        let mut sink = CountingSink::default();
        d.pointer_mut().set(100.0);
        d.pointer_mut().set(400.0);
        d.frame(0.016, &mut sink).unwrap();
        assert_eq!(d.state().left.pos.y, 350.0);

        // No new sample: paddle stays put
        d.frame(0.016, &mut sink).unwrap();
        assert_eq!(d.state().left.pos.y, 350.0);
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut d = driver(TickPolicy::PerFrame);
        assert_eq!(d.frame(0.016, &mut FailingSink), Err("surface lost"));
        // The tick still happened
        assert_eq!(d.state().time_ticks, 1);
    }
}
