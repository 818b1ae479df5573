//! Spatial partitioning over 3D point clouds.
//!
//! Two independent structures share the same [`Point`] representation:
//!
//! - [`Octree`]: an adaptive, insertion-driven index whose internal nodes
//!   split their cube into 8 equal octants. Leaves hold at most one point.
//! - [`PartitionTree`]: a balanced binary tree built once over three
//!   axis-sorted copies of a point set, splitting on the median of a
//!   rotating axis (x, then y, then z).
//!
//! Both produce flat line lists (see [`lines`]) that a renderer can draw
//! directly.

mod axis;
mod bounds;
mod cube;
pub mod lines;
pub mod octree;
pub mod partition;

pub use axis::{Axis, Point};
pub use bounds::Bounds;
pub use cube::BoundingCube;
pub use lines::{Color, LineVertex};
pub use octree::{InsertError, Insertion, NodeState, Octree, OctreeNode};
pub use partition::{
    AxisSorted, PartitionLines, PartitionNode, PartitionTree, PresortedError, SplitLineCollector,
    SplitVisitor,
};
