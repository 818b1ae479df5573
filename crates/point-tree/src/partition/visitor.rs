//! Visitors receiving each split as the partition tree is built.
//!
//! Building a tree calls the visitor once per created node, in pre-order
//! (node, then its left subtree, then its right subtree). The same order is
//! replayed by [`PartitionTree::visit_splits`](super::PartitionTree::visit_splits).

use crate::lines::{push_segment, LineVertex};
use crate::{Axis, Bounds, Color, Point};

/// Visitor for processing splits of a partition tree.
pub trait SplitVisitor {
    /// Called for every node with its median point, split axis and depth.
    fn visit_split(&mut self, median: &Point, axis: Axis, depth: usize);
}

/// Renderer-ready output of a partition tree build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionLines {
    /// One entry per node: the median point, to be drawn as a point.
    pub markers: Vec<LineVertex>,
    /// Two entries per node: the separating segment through the median.
    pub lines: Vec<LineVertex>,
}

impl PartitionLines {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.lines.is_empty()
    }
}

/// Collects a median marker and a separating segment for every split.
///
/// The segment passes through the median, lies in the plane orthogonal to
/// the split axis and runs along the next axis across the full cloud
/// bounds. Its color encodes the split axis.
#[derive(Debug, Clone)]
pub struct SplitLineCollector {
    bounds: Bounds,
    axis_colors: [Color; 3],
    marker_color: Color,
    output: PartitionLines,
}

impl SplitLineCollector {
    /// Creates a collector with red/green/blue for x/y/z splits and yellow
    /// markers.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            axis_colors: [Color::RED, Color::GREEN, Color::BLUE],
            marker_color: Color::YELLOW,
            output: PartitionLines::default(),
        }
    }

    /// Sets the segment colors, indexed by split axis.
    pub fn with_axis_colors(mut self, colors: [Color; 3]) -> Self {
        self.axis_colors = colors;
        self
    }

    pub fn with_marker_color(mut self, color: Color) -> Self {
        self.marker_color = color;
        self
    }

    /// Returns the collected output.
    pub fn into_lines(self) -> PartitionLines {
        self.output
    }

    pub fn lines(&self) -> &PartitionLines {
        &self.output
    }
}

impl SplitVisitor for SplitLineCollector {
    fn visit_split(&mut self, median: &Point, axis: Axis, _depth: usize) {
        self.output.markers.push((*median, self.marker_color));

        let along = axis.next().index();
        let mut start = *median;
        let mut end = *median;
        start[along] = self.bounds.min[along];
        end[along] = self.bounds.max[along];
        push_segment(&mut self.output.lines, start, end, self.axis_colors[axis.index()]);
    }
}

/// A visitor that calls a closure for each split.
pub struct FnSplitVisitor<F>
where
    F: FnMut(&Point, Axis, usize),
{
    func: F,
}

impl<F> FnSplitVisitor<F>
where
    F: FnMut(&Point, Axis, usize),
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> SplitVisitor for FnSplitVisitor<F>
where
    F: FnMut(&Point, Axis, usize),
{
    fn visit_split(&mut self, median: &Point, axis: Axis, depth: usize) {
        (self.func)(median, axis, depth);
    }
}
