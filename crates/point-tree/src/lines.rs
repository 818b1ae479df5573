//! Line lists handed to a renderer.
//!
//! A line list is a flat sequence of `(point, color)` pairs where every two
//! consecutive entries form one segment.

use crate::{BoundingCube, Point};

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    /// Creates an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// One endpoint of a segment in a line list.
pub type LineVertex = (Point, Color);

/// Appends the segment `a`-`b` to `out`.
#[inline]
pub fn push_segment(out: &mut Vec<LineVertex>, a: Point, b: Point, color: Color) {
    out.push((a, color));
    out.push((b, color));
}

/// Appends the 12 edges of `cube` to `out` (24 entries).
pub fn push_cube_edges(out: &mut Vec<LineVertex>, cube: &BoundingCube, color: Color) {
    out.reserve(24);
    for (a, b) in cube.edges() {
        push_segment(out, a, b, color);
    }
}

/// Iterates a line list as segments.
pub fn segments(lines: &[LineVertex]) -> impl Iterator<Item = (&LineVertex, &LineVertex)> {
    lines.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_segment_adds_two_entries() {
        let mut out = Vec::new();
        push_segment(&mut out, Point::origin(), Point::new(1.0, 0.0, 0.0), Color::RED);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], (Point::origin(), Color::RED));
        assert_eq!(out[1].0, Point::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn cube_edges_emit_24_entries() {
        let cube = BoundingCube::from_corner(Point::origin(), 2.0);
        let mut out = Vec::new();
        push_cube_edges(&mut out, &cube, Color::GREEN);

        assert_eq!(out.len(), 24);
        assert!(out.iter().all(|(_, c)| *c == Color::GREEN));
        assert_eq!(segments(&out).count(), 12);
    }

    #[test]
    fn cube_edges_are_axis_aligned() {
        let cube = BoundingCube::from_corner(Point::new(-1.0, -1.0, -1.0), 2.0);
        let mut out = Vec::new();
        push_cube_edges(&mut out, &cube, Color::WHITE);

        for ((a, _), (b, _)) in segments(&out) {
            let d = b - a;
            let changed = [d.x, d.y, d.z].iter().filter(|c| **c != 0.0).count();
            assert_eq!(changed, 1);
        }
    }
}
