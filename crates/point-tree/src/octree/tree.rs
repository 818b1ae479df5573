//! Octree container and insertion API.

use log::debug;

use crate::lines::LineVertex;
use crate::{Bounds, BoundingCube, Color, Point};

use super::node::{InsertError, Insertion, OctreeNode};

/// An adaptive octree over 3D points.
///
/// The tree starts as a single empty root covering a fixed cube and splits
/// nodes lazily as points arrive. Points outside the root cube are rejected;
/// the caller is responsible for picking a cube large enough for its data
/// (see [`Octree::from_bounds`]).
///
/// # Wireframe output
///
/// [`Octree::get_lines`] walks the tree to a given depth and emits the 12
/// edges of every visited node's cube, empty octants included. Drawing the
/// box of every visited node is a visualization choice; it does not affect
/// which points are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Octree {
    root: OctreeNode,
}

impl Octree {
    /// Creates an empty octree covering the given cube.
    pub fn new(near_bottom_left: Point, far_top_right: Point, edge_length: f32) -> Self {
        Self::from_cube(BoundingCube::new(near_bottom_left, far_top_right, edge_length))
    }

    /// Creates an empty octree covering `cube`.
    pub fn from_cube(cube: BoundingCube) -> Self {
        Self {
            root: OctreeNode::new(cube),
        }
    }

    /// Creates an empty octree whose root cube encloses `bounds`.
    pub fn from_bounds(bounds: &Bounds) -> Self {
        Self::from_cube(bounds.enclosing_cube())
    }

    #[inline]
    pub fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// Returns the root cube.
    #[inline]
    pub fn cube(&self) -> &BoundingCube {
        self.root.cube()
    }

    /// Inserts a point. Returns `false` if the point was not stored.
    ///
    /// Inserting a point that is already present returns `true` and leaves
    /// the tree unchanged.
    pub fn insert(&mut self, point: Point) -> bool {
        self.try_insert(point).is_ok()
    }

    /// Inserts a point, reporting whether it was new or a duplicate.
    pub fn try_insert(&mut self, point: Point) -> Result<Insertion, InsertError> {
        let result = self.root.insert(point);
        if let Err(InsertError::OutOfBounds(p)) = result {
            debug!("rejected point {} outside root cube", p);
        }
        result
    }

    /// Inserts every point, returning how many were accepted.
    ///
    /// Duplicates count as accepted.
    pub fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) -> usize {
        let mut accepted = 0;
        let mut rejected = 0;
        for p in points {
            if self.insert(p) {
                accepted += 1;
            } else {
                rejected += 1;
            }
        }
        debug!(
            "octree insert: {} accepted, {} rejected, {} nodes, depth {}",
            accepted,
            rejected,
            self.node_count(),
            self.depth()
        );
        accepted
    }

    /// Returns the wireframe of the tree down to `max_depth` levels below
    /// the root, two entries per segment.
    pub fn get_lines(&self, color: Color, max_depth: usize) -> Vec<LineVertex> {
        let mut out = Vec::new();
        self.append_lines(&mut out, color, max_depth);
        out
    }

    /// Like [`get_lines`](Self::get_lines), appending to an existing list.
    pub fn append_lines(&self, out: &mut Vec<LineVertex>, color: Color, max_depth: usize) {
        self.root.append_lines(out, color, max_depth);
    }

    /// Returns the leaf storing `point`, found by descending through the
    /// octants that contain it.
    pub fn locate(&self, point: &Point) -> Option<&OctreeNode> {
        self.root.locate(point)
    }

    /// Returns `true` if `point` is stored in the tree.
    pub fn contains_point(&self, point: &Point) -> bool {
        self.locate(point).is_some()
    }

    /// Returns the number of stored points.
    pub fn len(&self) -> usize {
        self.root.leaf_count()
    }

    /// Returns `true` if no point is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the total number of nodes, empty octants included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Returns the number of levels (1 for a root without children).
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Collects all stored points. The order is not guaranteed.
    pub fn points(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.len());
        self.root.collect_points(&mut out);
        out
    }
}
