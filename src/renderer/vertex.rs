//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Byte stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of `color` within a vertex
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// View a vertex slice as raw bytes for a GPU or canvas backend
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Scale a color's alpha
#[inline]
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * alpha]
}

/// Colors for game elements
pub mod colors {
    use crate::consts::{OPPONENT_COLOR, PLAYER_COLOR};

    /// Translucent so the previous frame leaves a trail
    pub const BACKGROUND: [f32; 4] = [17.0 / 255.0, 17.0 / 255.0, 17.0 / 255.0, 0.3];
    pub const DIVIDER: [f32; 4] = [0x55 as f32 / 255.0, 0x55 as f32 / 255.0, 0x55 as f32 / 255.0, 1.0];
    pub const PLAYER: [f32; 4] = PLAYER_COLOR;
    pub const OPPONENT: [f32; 4] = OPPONENT_COLOR;
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.7];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 8);
    }

    #[test]
    fn test_as_bytes() {
        let verts = [
            Vertex::new(1.0, 2.0, colors::BALL),
            Vertex::new(3.0, 4.0, colors::PLAYER),
        ];
        let bytes = as_bytes(&verts);
        assert_eq!(bytes.len(), 2 * Vertex::STRIDE);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha(colors::OVERLAY, 0.5), [0.0, 0.0, 0.0, 0.35]);
    }
}
