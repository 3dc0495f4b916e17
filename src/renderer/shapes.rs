//! Shape generation for 2D primitives
//!
//! Everything is emitted as a plain triangle list in surface coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a dashed vertical line
///
/// Dashes start at `top`; the last one is cut off at `bottom`.
pub fn dashed_vline(
    x: f32,
    top: f32,
    bottom: f32,
    dash: f32,
    gap: f32,
    width: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    if dash <= 0.0 || gap < 0.0 || !top.is_finite() || !bottom.is_finite() || bottom <= top {
        return vertices;
    }

    let half = width / 2.0;
    let mut y = top;
    while y < bottom {
        let end = (y + dash).min(bottom);
        vertices.extend(rect(
            Vec2::new(x - half, y),
            Vec2::new(width, end - y),
            color,
        ));
        y += dash + gap;
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(20.0, 200.0), Vec2::new(15.0, 100.0), WHITE);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 35.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 200.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 300.0);
    }

    #[test]
    fn test_circle_triangle_count() {
        let verts = circle(Vec2::new(10.0, 10.0), 5.0, WHITE, 16);
        assert_eq!(verts.len(), 48);
        assert_eq!(verts[0].position, [10.0, 10.0]);
    }

    #[test]
    fn test_dashed_line_counts() {
        // 500 tall, 10 on / 10 off -> 25 dashes
        let verts = dashed_vline(400.0, 0.0, 500.0, 10.0, 10.0, 2.0, WHITE);
        assert_eq!(verts.len(), 25 * 6);
    }

    #[test]
    fn test_dashed_line_degenerate() {
        assert!(dashed_vline(0.0, 0.0, 100.0, 0.0, 10.0, 1.0, WHITE).is_empty());
        assert!(dashed_vline(0.0, 100.0, 0.0, 10.0, 10.0, 1.0, WHITE).is_empty());
        assert!(dashed_vline(0.0, 0.0, f32::NAN, 10.0, 10.0, 1.0, WHITE).is_empty());
        assert!(dashed_vline(0.0, 0.0, f32::INFINITY, 10.0, 10.0, 1.0, WHITE).is_empty());
    }
}
