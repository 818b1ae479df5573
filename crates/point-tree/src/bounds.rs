//! Axis-aligned extent of a point cloud.

use nalgebra::Vector3;

use crate::{Axis, BoundingCube, Point};

/// Minimum and maximum corner of a set of points.
///
/// This is what a point-cloud loader hands over alongside the points
/// themselves. The partition tree uses it to size its separating lines and
/// the octree can derive a root cube from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Creates bounds from two corners. The corners are taken as given.
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Computes the extrema of `points`. Returns `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for p in rest {
            bounds.grow(p);
        }
        Some(bounds)
    }

    /// Enlarges the bounds so they include `point`.
    pub fn grow(&mut self, point: &Point) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Returns the size of the bounds along `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        axis.coord(&self.max) - axis.coord(&self.min)
    }

    /// Returns the size along each axis.
    #[inline]
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Returns the midpoint of the bounds.
    pub fn center(&self) -> Point {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns `true` if `point` lies inside or on the bounds.
    pub fn contains(&self, point: &Point) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let c = axis.coord(point);
            c >= axis.coord(&self.min) && c <= axis.coord(&self.max)
        })
    }

    /// Returns the smallest cube anchored at `min` that covers the bounds.
    ///
    /// A flat or single-point cloud gets a unit cube so the octree root
    /// always has a positive edge length.
    pub fn enclosing_cube(&self) -> BoundingCube {
        let size = self.size();
        let edge = size.x.max(size.y).max(size.z);
        let mut edge = if edge > 0.0 { edge } else { 1.0 };
        // min + (max - min) can round below max.
        while Axis::ALL
            .iter()
            .any(|&axis| axis.coord(&self.min) + edge < axis.coord(&self.max))
        {
            edge += edge * f32::EPSILON;
        }
        BoundingCube::from_corner(self.min, edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_empty_is_none() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn from_points_tracks_extrema() {
        let points = [
            Point::new(1.0, -2.0, 3.0),
            Point::new(-4.0, 5.0, 0.5),
            Point::new(0.0, 0.0, -6.0),
        ];
        let bounds = Bounds::from_points(&points).unwrap();

        assert_eq!(bounds.min, Point::new(-4.0, -2.0, -6.0));
        assert_eq!(bounds.max, Point::new(1.0, 5.0, 3.0));
        assert_eq!(bounds.extent(Axis::X), 5.0);
        assert_eq!(bounds.extent(Axis::Y), 7.0);
        assert_eq!(bounds.extent(Axis::Z), 9.0);
        for p in &points {
            assert!(bounds.contains(p));
        }
    }

    #[test]
    fn enclosing_cube_uses_largest_extent() {
        let bounds = Bounds::new(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 8.0, 4.0));
        let cube = bounds.enclosing_cube();

        assert_eq!(cube.edge_length(), 8.0);
        assert_eq!(cube.near_bottom_left(), Point::new(0.0, 0.0, 0.0));
        assert_eq!(cube.far_top_right(), Point::new(8.0, 8.0, 8.0));
        assert!(cube.contains(&bounds.max));
    }

    #[test]
    fn enclosing_cube_of_single_point_is_unit() {
        let p = Point::new(3.0, 3.0, 3.0);
        let bounds = Bounds::from_points(&[p]).unwrap();
        let cube = bounds.enclosing_cube();

        assert_eq!(cube.edge_length(), 1.0);
        assert!(cube.contains(&p));
    }
}
