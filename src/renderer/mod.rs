//! Rendering module
//!
//! A [`Scene`] is built from each simulation snapshot and tessellated into
//! flat-colored triangles. [`RenderState`] draws them with WebGPU;
//! [`HeadlessSink`] keeps them in memory for native runs and tests.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use scene::{DrawCommand, Scene, SceneStyle};

use std::convert::Infallible;

use crate::driver::RenderSink;
use crate::sim::SimulationState;

/// Render sink that builds scenes without a GPU
#[derive(Debug, Clone, Default)]
pub struct HeadlessSink {
    style: SceneStyle,
    last: Option<Scene>,
    last_vertex_count: usize,
    frames: u64,
}

impl HeadlessSink {
    pub fn new(style: SceneStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Most recently rendered scene
    pub fn last_scene(&self) -> Option<&Scene> {
        self.last.as_ref()
    }

    /// Triangle vertices produced for the last scene
    pub fn last_vertex_count(&self) -> usize {
        self.last_vertex_count
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for HeadlessSink {
    type Error = Infallible;

    fn render(&mut self, state: &SimulationState) -> Result<(), Self::Error> {
        let scene = Scene::from_state(state, &self.style);
        self.last_vertex_count = shapes::tessellate(&scene).len();
        self.last = Some(scene);
        self.frames += 1;
        Ok(())
    }
}
