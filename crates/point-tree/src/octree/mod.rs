//! Adaptive octree over 3D points.
//!
//! Every internal node splits its cube into exactly 8 equal octants and every
//! leaf holds at most one point. The tree grows on insertion and never
//! shrinks.
//!
//! # Example
//!
//! ```
//! use point_tree::{Color, Octree, Point};
//!
//! let mut octree = Octree::new(Point::new(-6.0, -5.0, -6.0), Point::new(4.0, 5.0, 4.0), 10.0);
//! assert!(octree.insert(Point::new(0.0, 0.0, 0.0)));
//! assert!(octree.insert(Point::new(3.0, 3.0, 3.0)));
//! assert!(!octree.insert(Point::new(50.0, 0.0, 0.0)));
//!
//! let lines = octree.get_lines(Color::WHITE, 1);
//! assert_eq!(lines.len(), 24 + 8 * 24);
//! ```
//!
//! # Architecture
//!
//! - [`Octree`]: owns the root node and exposes the `bool` insertion API
//! - [`OctreeNode`]: a cube plus a [`NodeState`] (empty, leaf or internal)
//! - [`InsertError`]: why a point was not stored

mod node;
mod tree;

pub use node::{InsertError, Insertion, NodeState, OctreeNode};
pub use tree::Octree;
