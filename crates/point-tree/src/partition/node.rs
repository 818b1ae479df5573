//! Partition tree node implementation.

use crate::{Axis, Point};

/// A node of the [`PartitionTree`](super::PartitionTree).
///
/// Stores the median point chosen when the node was built and the axis it
/// split on. Points below the median on that axis live in the left subtree,
/// points above it in the right subtree. Nodes are immutable once the tree
/// is built.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionNode {
    point: Point,
    split_axis: Axis,
    left: Option<Box<PartitionNode>>,
    right: Option<Box<PartitionNode>>,
    /// Recursion depth, 0 for the root.
    depth: usize,
}

impl PartitionNode {
    /// Creates a childless node.
    pub(crate) fn new(point: Point, split_axis: Axis, depth: usize) -> Self {
        Self {
            point,
            split_axis,
            left: None,
            right: None,
            depth,
        }
    }

    /// Returns the median point stored at this node.
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    #[inline]
    pub fn split_axis(&self) -> Axis {
        self.split_axis
    }

    /// Returns the recursion depth of this node (0 for the root).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the subtree of points below the median.
    #[inline]
    pub fn left(&self) -> Option<&PartitionNode> {
        self.left.as_deref()
    }

    /// Returns the subtree of points above the median.
    #[inline]
    pub fn right(&self) -> Option<&PartitionNode> {
        self.right.as_deref()
    }

    #[inline]
    pub(crate) fn set_left(&mut self, node: Option<PartitionNode>) {
        self.left = node.map(Box::new);
    }

    #[inline]
    pub(crate) fn set_right(&mut self, node: Option<PartitionNode>) {
        self.right = node.map(Box::new);
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.node_count())
            + self.right.as_ref().map_or(0, |n| n.node_count())
    }

    /// Returns the number of levels in this subtree (1 for a leaf).
    pub fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height());
        let right = self.right.as_ref().map_or(0, |n| n.height());
        1 + left.max(right)
    }

    /// Returns the largest node depth in this subtree.
    pub fn max_depth(&self) -> usize {
        let left = self.left.as_ref().map_or(self.depth, |n| n.max_depth());
        let right = self.right.as_ref().map_or(self.depth, |n| n.max_depth());
        left.max(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_leaf() {
        let node = PartitionNode::new(Point::new(1.0, 2.0, 3.0), Axis::X, 0);
        assert!(node.is_leaf());
        assert_eq!(node.node_count(), 1);
        assert_eq!(node.height(), 1);
        assert_eq!(node.max_depth(), 0);
        assert_eq!(node.split_axis(), Axis::X);
    }

    #[test]
    fn children_update_counts() {
        let mut root = PartitionNode::new(Point::new(2.0, 0.0, 0.0), Axis::X, 0);
        let mut left = PartitionNode::new(Point::new(1.0, 0.0, 0.0), Axis::Y, 1);
        left.set_left(Some(PartitionNode::new(Point::new(0.0, 0.0, 0.0), Axis::Z, 2)));
        root.set_left(Some(left));
        root.set_right(Some(PartitionNode::new(Point::new(3.0, 0.0, 0.0), Axis::Y, 1)));

        assert!(!root.is_leaf());
        assert_eq!(root.node_count(), 4);
        assert_eq!(root.height(), 3);
        assert_eq!(root.max_depth(), 2);
        assert_eq!(root.left().unwrap().split_axis(), Axis::Y);
        assert_eq!(root.right().unwrap().point(), Point::new(3.0, 0.0, 0.0));
    }
}
