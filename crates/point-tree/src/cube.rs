//! Axis-aligned cube regions used by the octree.

use nalgebra::Vector3;

use crate::{Axis, Point};

/// Which half of the parent each octant occupies, as `[x, y, z]` with
/// `true` meaning the upper half.
///
/// Octants 0-3 sit in the near (lower z) half, 4-7 in the far half. Within
/// each half the quadrants go +x+y, -x+y, -x-y, +x-y.
const OCTANT_UPPER: [[bool; 3]; 8] = [
    [true, true, false],
    [false, true, false],
    [false, false, false],
    [true, false, false],
    [true, true, true],
    [false, true, true],
    [false, false, true],
    [true, false, true],
];

/// Corner pairs forming the 12 cube edges, indexing into [`BoundingCube::corners`].
const EDGES: [(usize, usize); 12] = [
    // near face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    // far face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    // connecting edges
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// An axis-aligned cube given by two opposite corners and its edge length.
///
/// The region is always a cube: `far_top_right = near_bottom_left + edge_length`
/// on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCube {
    near_bottom_left: Point,
    far_top_right: Point,
    edge_length: f32,
}

impl BoundingCube {
    /// Creates a cube from both corners and the edge length.
    ///
    /// The caller must pass corners that are exactly `edge_length` apart on
    /// every axis. This is only checked in debug builds.
    pub fn new(near_bottom_left: Point, far_top_right: Point, edge_length: f32) -> Self {
        debug_assert!(
            Axis::ALL.iter().all(|&axis| {
                let span = axis.coord(&far_top_right) - axis.coord(&near_bottom_left);
                (span - edge_length).abs() <= edge_length.abs() * 1e-4 + f32::EPSILON
            }),
            "BoundingCube corners must be edge_length apart on every axis"
        );
        Self {
            near_bottom_left,
            far_top_right,
            edge_length,
        }
    }

    /// Creates a cube from its lowest corner and edge length.
    pub fn from_corner(near_bottom_left: Point, edge_length: f32) -> Self {
        Self {
            near_bottom_left,
            far_top_right: near_bottom_left + Vector3::repeat(edge_length),
            edge_length,
        }
    }

    #[inline]
    pub fn near_bottom_left(&self) -> Point {
        self.near_bottom_left
    }

    #[inline]
    pub fn far_top_right(&self) -> Point {
        self.far_top_right
    }

    #[inline]
    pub fn edge_length(&self) -> f32 {
        self.edge_length
    }

    /// Returns the midpoint of the cube.
    pub fn center(&self) -> Point {
        self.near_bottom_left + Vector3::repeat(self.edge_length / 2.0)
    }

    /// Returns `true` if `point` lies inside the cube or on its boundary.
    pub fn contains(&self, point: &Point) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let c = axis.coord(point);
            c >= axis.coord(&self.near_bottom_left) && c <= axis.coord(&self.far_top_right)
        })
    }

    /// Splits the cube into its 8 octants of half the edge length.
    ///
    /// Lower-half octants end exactly at the midpoint and upper-half octants
    /// end exactly at this cube's far corner, so the octants tile the parent
    /// without gaps from rounding.
    pub fn octants(&self) -> [BoundingCube; 8] {
        let half = self.edge_length / 2.0;
        let mid = self.near_bottom_left + Vector3::repeat(half);

        OCTANT_UPPER.map(|upper| {
            let mut near = self.near_bottom_left;
            let mut far = mid;
            for axis in Axis::ALL {
                let i = axis.index();
                if upper[i] {
                    near[i] = mid[i];
                    far[i] = self.far_top_right[i];
                }
            }
            BoundingCube {
                near_bottom_left: near,
                far_top_right: far,
                edge_length: half,
            }
        })
    }

    /// Returns the index of the octant that holds `point`.
    ///
    /// A coordinate equal to the midpoint belongs to the upper half, so every
    /// point inside the cube maps to exactly one octant. Returns `None` when
    /// the point lies outside the cube.
    pub fn octant_index(&self, point: &Point) -> Option<usize> {
        if !self.contains(point) {
            return None;
        }
        let mid = self.center();
        let upper = [point.x >= mid.x, point.y >= mid.y, point.z >= mid.z];
        OCTANT_UPPER.iter().position(|o| *o == upper)
    }

    /// Returns the 8 corners. The first four lie on the near face, the last
    /// four on the far face, both walked in the same order.
    pub fn corners(&self) -> [Point; 8] {
        let n = self.near_bottom_left;
        let f = self.far_top_right;
        [
            n,
            Point::new(f.x, n.y, n.z),
            Point::new(f.x, f.y, n.z),
            Point::new(n.x, f.y, n.z),
            Point::new(n.x, n.y, f.z),
            Point::new(f.x, n.y, f.z),
            f,
            Point::new(n.x, f.y, f.z),
        ]
    }

    /// Returns the 12 edges as corner pairs.
    pub fn edges(&self) -> [(Point, Point); 12] {
        let corners = self.corners();
        EDGES.map(|(a, b)| (corners[a], corners[b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> BoundingCube {
        BoundingCube::new(Point::new(-6.0, -5.0, -6.0), Point::new(4.0, 5.0, 4.0), 10.0)
    }

    fn interiors_overlap(a: &BoundingCube, b: &BoundingCube) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let lo = axis.coord(&a.near_bottom_left()).max(axis.coord(&b.near_bottom_left()));
            let hi = axis.coord(&a.far_top_right()).min(axis.coord(&b.far_top_right()));
            lo < hi
        })
    }

    #[test]
    fn from_corner_matches_new() {
        let a = BoundingCube::from_corner(Point::new(1.0, 2.0, 3.0), 2.0);
        let b = BoundingCube::new(Point::new(1.0, 2.0, 3.0), Point::new(3.0, 4.0, 5.0), 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn contains_is_inclusive() {
        let cube = unit_cube();
        assert!(cube.contains(&cube.near_bottom_left()));
        assert!(cube.contains(&cube.far_top_right()));
        assert!(cube.contains(&Point::new(0.0, 0.0, 0.0)));
        assert!(!cube.contains(&Point::new(4.001, 0.0, 0.0)));
        assert!(!cube.contains(&Point::new(0.0, -5.5, 0.0)));
    }

    #[test]
    fn octants_halve_edge_length() {
        for octant in unit_cube().octants() {
            assert_eq!(octant.edge_length(), 5.0);
        }
    }

    #[test]
    fn octants_are_pairwise_disjoint() {
        let octants = unit_cube().octants();
        for i in 0..8 {
            for j in (i + 1)..8 {
                assert!(
                    !interiors_overlap(&octants[i], &octants[j]),
                    "octants {} and {} overlap",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn octants_reconstruct_parent() {
        let parent = unit_cube();
        let octants = parent.octants();

        let volume: f32 = octants.iter().map(|o| o.edge_length().powi(3)).sum();
        assert_eq!(volume, parent.edge_length().powi(3));

        for axis in Axis::ALL {
            let min = octants
                .iter()
                .map(|o| axis.coord(&o.near_bottom_left()))
                .fold(f32::INFINITY, f32::min);
            let max = octants
                .iter()
                .map(|o| axis.coord(&o.far_top_right()))
                .fold(f32::NEG_INFINITY, f32::max);
            assert_eq!(min, axis.coord(&parent.near_bottom_left()));
            assert_eq!(max, axis.coord(&parent.far_top_right()));
        }
    }

    #[test]
    fn octant_layout_near_half_first() {
        let parent = unit_cube();
        let mid = parent.center();
        for (i, octant) in parent.octants().iter().enumerate() {
            let near_half = octant.far_top_right().z <= mid.z;
            assert_eq!(near_half, i < 4, "octant {} is in the wrong z half", i);
        }
    }

    #[test]
    fn every_contained_point_fits_exactly_one_octant() {
        let parent = unit_cube();
        let octants = parent.octants();
        let samples = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(-1.0, 0.0, -1.0), // the midpoint itself
            Point::new(-6.0, -5.0, -6.0),
            Point::new(4.0, 5.0, 4.0),
            Point::new(3.0, 3.0, 3.0),
            Point::new(-5.0, -4.0, -5.0),
            Point::new(-1.0, 2.5, 3.9),
        ];

        // Half-open ownership: a boundary point belongs to the upper octant
        // unless it sits on the parent's far face.
        let owns = |o: &BoundingCube, p: &Point| {
            Axis::ALL.iter().all(|&axis| {
                let c = axis.coord(p);
                let far = axis.coord(&o.far_top_right());
                c >= axis.coord(&o.near_bottom_left())
                    && (c < far || far == axis.coord(&parent.far_top_right()))
            })
        };

        for p in &samples {
            let index = parent.octant_index(p).expect("point is inside parent");
            assert!(octants[index].contains(p));

            let owners: Vec<usize> = (0..8).filter(|&i| owns(&octants[i], p)).collect();
            assert_eq!(owners, vec![index], "point {:?}", p);
        }
    }

    #[test]
    fn octant_index_outside_is_none() {
        assert_eq!(unit_cube().octant_index(&Point::new(10.0, 0.0, 0.0)), None);
    }

    #[test]
    fn edges_have_cube_length() {
        let cube = unit_cube();
        for (a, b) in cube.edges() {
            assert_eq!((b - a).norm(), cube.edge_length());
        }
    }
}
