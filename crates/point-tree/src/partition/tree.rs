//! Partition tree container and construction.

use log::debug;

use crate::{Axis, Bounds, Point};

use super::node::PartitionNode;
use super::sorted::{partition_around, split_ranges, AxisSorted};
use super::visitor::{PartitionLines, SplitLineCollector, SplitVisitor};

/// A balanced binary tree over a static point set.
///
/// Each level splits on the median of one axis, cycling x → y → z → x. The
/// tree is built once and never modified; rebuilding means constructing a
/// new tree.
///
/// # Ties
///
/// Points that share the median's coordinate on the split axis go to
/// neither subtree. Clouds with many equal coordinates therefore lose
/// points as the tree is built.
///
/// # Depth limit
///
/// `max_depth` is the number of levels the build may create. A tree built
/// with `max_depth = k` has no node at depth `k` or below (the root is at
/// depth 0), and `max_depth = 0` yields an empty tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionTree {
    root: Option<PartitionNode>,
}

impl PartitionTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree over `points` and collects its visualization output.
    ///
    /// The separating segments span the bounds of `points`. An empty slice
    /// or `max_depth = 0` gives an empty tree and no output.
    pub fn build(points: &[Point], max_depth: usize) -> (Self, PartitionLines) {
        let Some(bounds) = Bounds::from_points(points) else {
            return (Self::new(), PartitionLines::default());
        };
        let mut collector = SplitLineCollector::new(bounds);
        let tree = Self::from_sorted(AxisSorted::from_points(points), max_depth, &mut collector);
        (tree, collector.into_lines())
    }

    /// Builds a tree from pre-sorted arrays, calling `visitor` once per node
    /// in pre-order. The arrays are consumed.
    pub fn from_sorted<V: SplitVisitor>(
        mut sorted: AxisSorted,
        max_depth: usize,
        visitor: &mut V,
    ) -> Self {
        let len = sorted.len();
        let root = build_node(sorted.slices_mut(), Axis::X, 0, max_depth, visitor);
        let tree = Self { root };
        debug!(
            "partition tree: {} points, {} nodes, depth {}",
            len,
            tree.node_count(),
            tree.depth()
        );
        tree
    }

    /// Builds a tree from pre-sorted arrays, constructing sibling subtrees
    /// in parallel.
    ///
    /// Sibling subtrees work on disjoint ranges of the arrays. Use
    /// [`visit_splits`](Self::visit_splits) afterwards to produce the same
    /// output a sequential build would.
    #[cfg(feature = "rayon")]
    pub fn from_sorted_par(mut sorted: AxisSorted, max_depth: usize) -> Self {
        let root = build_node_par(sorted.slices_mut(), Axis::X, 0, max_depth);
        Self { root }
    }

    /// Returns `true` if the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn root(&self) -> Option<&PartitionNode> {
        self.root.as_ref()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.node_count())
    }

    /// Returns the number of levels (0 for an empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }

    /// Visits every node in pre-order, the same order the build used.
    pub fn visit_splits<V: SplitVisitor>(&self, visitor: &mut V) {
        visit_node(self.root.as_ref(), visitor);
    }

    /// Collects the median points of all nodes in pre-order.
    pub fn points(&self) -> Vec<Point> {
        let mut result = Vec::with_capacity(self.node_count());
        collect_points_recursive(self.root.as_ref(), &mut result);
        result
    }
}

/// Recursively builds a node over the same range of the three sorted arrays.
fn build_node<V: SplitVisitor>(
    mut slices: [&mut [Point]; 3],
    axis: Axis,
    depth: usize,
    remaining: usize,
    visitor: &mut V,
) -> Option<PartitionNode> {
    let len = slices[0].len();
    if remaining == 0 || len == 0 {
        return None;
    }

    let median = (len - 1) / 2;
    let point = slices[axis.index()][median];
    visitor.visit_split(&point, axis, depth);

    let (less, greater) = partition_around(&mut slices, axis, median);
    let (left, right) = split_ranges(slices, median, less, greater);

    let next = axis.next();
    let mut node = PartitionNode::new(point, axis, depth);
    node.set_left(build_node(left, next, depth + 1, remaining - 1, visitor));
    node.set_right(build_node(right, next, depth + 1, remaining - 1, visitor));

    Some(node)
}

#[cfg(feature = "rayon")]
fn build_node_par(
    mut slices: [&mut [Point]; 3],
    axis: Axis,
    depth: usize,
    remaining: usize,
) -> Option<PartitionNode> {
    let len = slices[0].len();
    if remaining == 0 || len == 0 {
        return None;
    }

    let median = (len - 1) / 2;
    let point = slices[axis.index()][median];

    let (less, greater) = partition_around(&mut slices, axis, median);
    let (left, right) = split_ranges(slices, median, less, greater);

    let next = axis.next();
    let (left, right) = rayon::join(
        || build_node_par(left, next, depth + 1, remaining - 1),
        || build_node_par(right, next, depth + 1, remaining - 1),
    );

    let mut node = PartitionNode::new(point, axis, depth);
    node.set_left(left);
    node.set_right(right);
    Some(node)
}

fn visit_node<V: SplitVisitor>(node: Option<&PartitionNode>, visitor: &mut V) {
    if let Some(n) = node {
        visitor.visit_split(&n.point(), n.split_axis(), n.depth());
        visit_node(n.left(), visitor);
        visit_node(n.right(), visitor);
    }
}

fn collect_points_recursive(node: Option<&PartitionNode>, result: &mut Vec<Point>) {
    if let Some(n) = node {
        result.push(n.point());
        collect_points_recursive(n.left(), result);
        collect_points_recursive(n.right(), result);
    }
}
