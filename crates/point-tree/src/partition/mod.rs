//! Balanced median tree with a rotating split axis.
//!
//! The tree is built once from three copies of the same point set, each
//! sorted by one coordinate. Every level takes the median of the current
//! axis, partitions the remaining points into a lower and an upper half, and
//! hands both halves to the next axis (x, then y, then z, then x again).
//!
//! # Example
//!
//! ```
//! use point_tree::{PartitionTree, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 4.0, 1.0),
//!     Point::new(1.0, 3.0, 0.0),
//!     Point::new(2.0, 2.0, 4.0),
//!     Point::new(3.0, 1.0, 3.0),
//!     Point::new(4.0, 0.0, 2.0),
//! ];
//!
//! let (tree, lines) = PartitionTree::build(&points, 2);
//! assert_eq!(tree.root().unwrap().point(), Point::new(2.0, 2.0, 4.0));
//! assert_eq!(tree.depth(), 2);
//! assert_eq!(lines.markers.len(), tree.node_count());
//! ```
//!
//! # Architecture
//!
//! - [`AxisSorted`]: the three axis-sorted working arrays
//! - [`PartitionTree`]: the container holding the root node
//! - [`PartitionNode`]: a median point, its split axis and two subtrees
//! - [`SplitVisitor`]: called once per created node, in pre-order

mod node;
mod sorted;
mod tree;
mod visitor;

pub use node::PartitionNode;
pub use sorted::{AxisSorted, PresortedError};
pub use tree::PartitionTree;
pub use visitor::{FnSplitVisitor, PartitionLines, SplitLineCollector, SplitVisitor};
