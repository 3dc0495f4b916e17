//! Rendering boundary
//!
//! The orchestrator hands a `FrameView` to whatever `Renderer` it was built
//! with. `DrawList` turns a frame into triangles and text for a backend to
//! upload; `NullRenderer` draws nothing.

pub mod draw_list;
pub mod shapes;
pub mod vertex;

use std::fmt;

use glam::Vec2;

use crate::sim::{GameState, Particle};

pub use draw_list::{DrawList, TextAlign, TextItem};
pub use vertex::{Vertex, colors};

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub state: &'a GameState,
    /// Transient shake translation; zero on calm frames
    pub camera_offset: Vec2,
    /// Whether particle effects should be drawn
    pub draw_particles: bool,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            state,
            camera_offset: Vec2::ZERO,
            draw_particles: true,
        }
    }

    pub fn particles(&self) -> &'a [Particle] {
        &self.state.effects.particles
    }
}

/// Why a frame could not be drawn
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Camera offset was NaN or infinite
    InvalidCamera(Vec2),
    /// The drawing surface went away
    SurfaceLost,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidCamera(offset) => {
                write!(f, "non-finite camera offset {offset}")
            }
            RenderError::SurfaceLost => write!(f, "drawing surface lost"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Something that can draw a frame
pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>) -> Result<(), RenderError>;
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &FrameView<'_>) -> Result<(), RenderError> {
        Ok(())
    }
}
