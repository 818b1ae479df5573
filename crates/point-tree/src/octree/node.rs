//! Octree node implementation.

use log::{error, trace};
use thiserror::Error;

use crate::lines::{push_cube_edges, LineVertex};
use crate::{BoundingCube, Color, Point};

/// What a node currently holds.
///
/// A node is never both a leaf and internal: once split it only routes
/// points to its children.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeState {
    /// No point and no children.
    Empty,
    /// Exactly one point, no children.
    Leaf(Point),
    /// 8 children, one per octant. Holds no point directly.
    Internal(Box<[OctreeNode; 8]>),
}

/// Successful outcome of an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The point was stored in a new leaf.
    Inserted,
    /// An identical point was already stored. Nothing changed.
    Duplicate,
}

/// Reasons an insertion did not store a point.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InsertError {
    /// The point lies outside the node's cube.
    #[error("point {0} lies outside the octree cube")]
    OutOfBounds(Point),

    /// A contained point matched no child octant, or the cube became too
    /// small to split. Indicates broken subdivision geometry.
    #[error("point {0} matched no child octant")]
    StructuralInconsistency(Point),
}

/// A node of the [`Octree`](super::Octree).
///
/// Each node exclusively owns its children. There are no parent links.
#[derive(Debug, Clone, PartialEq)]
pub struct OctreeNode {
    cube: BoundingCube,
    state: NodeState,
}

impl OctreeNode {
    /// Creates an empty node covering `cube`.
    pub fn new(cube: BoundingCube) -> Self {
        Self {
            cube,
            state: NodeState::Empty,
        }
    }

    /// Returns the region this node covers.
    #[inline]
    pub fn cube(&self) -> &BoundingCube {
        &self.cube
    }

    #[inline]
    pub fn state(&self) -> &NodeState {
        &self.state
    }

    /// Returns `true` if the node holds no point and has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.state, NodeState::Empty)
    }

    /// Returns `true` if the node holds exactly one point.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.state, NodeState::Leaf(_))
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self.state, NodeState::Internal(_))
    }

    /// Returns the stored point of a leaf.
    #[inline]
    pub fn point(&self) -> Option<Point> {
        match self.state {
            NodeState::Leaf(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the 8 children of an internal node.
    #[inline]
    pub fn children(&self) -> Option<&[OctreeNode; 8]> {
        match &self.state {
            NodeState::Internal(children) => Some(children),
            _ => None,
        }
    }

    /// Inserts `point` into this subtree.
    ///
    /// - An empty node becomes a leaf holding the point.
    /// - A leaf holding the same point reports [`Insertion::Duplicate`].
    /// - A leaf holding another point splits into 8 children, pushes its
    ///   point down, then routes the new point.
    /// - An internal node routes the point to the octant containing it.
    ///
    /// Points outside the cube are rejected without touching the tree.
    pub fn insert(&mut self, point: Point) -> Result<Insertion, InsertError> {
        if !self.cube.contains(&point) {
            return Err(InsertError::OutOfBounds(point));
        }

        match self.state {
            NodeState::Empty => {
                self.state = NodeState::Leaf(point);
                return Ok(Insertion::Inserted);
            }
            NodeState::Leaf(stored) if stored == point => return Ok(Insertion::Duplicate),
            NodeState::Leaf(stored) => self.split(stored)?,
            NodeState::Internal(_) => {}
        }

        self.insert_into_child(point)
    }

    /// Turns a leaf holding `stored` into an internal node.
    fn split(&mut self, stored: Point) -> Result<(), InsertError> {
        let half = self.cube.edge_length() / 2.0;
        if half.is_nan() || half <= 0.0 || self.cube.center() == self.cube.near_bottom_left() {
            error!(
                "cannot split cube at {} with edge length {}",
                self.cube.near_bottom_left(),
                self.cube.edge_length()
            );
            return Err(InsertError::StructuralInconsistency(stored));
        }

        trace!(
            "splitting node at {} (edge {}) holding {}",
            self.cube.near_bottom_left(),
            self.cube.edge_length(),
            stored
        );
        let children = self.cube.octants().map(OctreeNode::new);
        self.state = NodeState::Internal(Box::new(children));

        self.insert_into_child(stored).map(|_| ())
    }

    /// Routes a contained point to the child octant that holds it.
    fn insert_into_child(&mut self, point: Point) -> Result<Insertion, InsertError> {
        let index = self.cube.octant_index(&point);
        match (&mut self.state, index) {
            (NodeState::Internal(children), Some(i)) => {
                children[i].insert(point).map_err(|err| match err {
                    InsertError::OutOfBounds(p) => {
                        error!("point {} fits the parent cube but not octant {}", p, i);
                        InsertError::StructuralInconsistency(p)
                    }
                    other => other,
                })
            }
            _ => {
                error!("point {} matched no octant", point);
                Err(InsertError::StructuralInconsistency(point))
            }
        }
    }

    /// Follows the octants containing `point` down to the leaf storing it.
    pub fn locate(&self, point: &Point) -> Option<&OctreeNode> {
        match &self.state {
            NodeState::Leaf(stored) if stored == point => Some(self),
            NodeState::Internal(children) => {
                let i = self.cube.octant_index(point)?;
                children[i].locate(point)
            }
            _ => None,
        }
    }

    /// Appends this node's cube edges and, up to `max_depth` more levels,
    /// those of its descendants.
    ///
    /// Every visited node draws its box, including empty octants of a split
    /// node. Recursion stops at depth 0, at empty nodes and at leaves.
    pub fn append_lines(&self, out: &mut Vec<LineVertex>, color: Color, max_depth: usize) {
        push_cube_edges(out, &self.cube, color);

        if max_depth == 0 {
            return;
        }
        if let NodeState::Internal(children) = &self.state {
            for child in children.iter() {
                child.append_lines(out, color, max_depth - 1);
            }
        }
    }

    /// Returns the number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        match &self.state {
            NodeState::Internal(children) => {
                1 + children.iter().map(|c| c.node_count()).sum::<usize>()
            }
            _ => 1,
        }
    }

    /// Returns the number of leaves (stored points) in this subtree.
    pub fn leaf_count(&self) -> usize {
        match &self.state {
            NodeState::Empty => 0,
            NodeState::Leaf(_) => 1,
            NodeState::Internal(children) => children.iter().map(|c| c.leaf_count()).sum(),
        }
    }

    /// Returns the depth of this subtree (1 for a node without children).
    pub fn depth(&self) -> usize {
        match &self.state {
            NodeState::Internal(children) => {
                1 + children.iter().map(|c| c.depth()).max().unwrap_or(0)
            }
            _ => 1,
        }
    }

    /// Appends every stored point of this subtree to `out`.
    pub fn collect_points(&self, out: &mut Vec<Point>) {
        match &self.state {
            NodeState::Empty => {}
            NodeState::Leaf(p) => out.push(*p),
            NodeState::Internal(children) => {
                for child in children.iter() {
                    child.collect_points(out);
                }
            }
        }
    }
}
