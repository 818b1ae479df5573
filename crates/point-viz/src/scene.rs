//! Spatial structures built over a loaded cloud, ready to draw.

use log::{info, warn};
use point_tree::{
    AxisSorted, Color, LineVertex, Octree, PartitionLines, PartitionTree, SplitLineCollector,
};

use crate::cloud::PointCloud;
use crate::config::ViewerConfig;

/// Upper bound for the interactive octree depth.
pub const MAX_OCTREE_DEPTH: usize = 12;

/// The cloud, both structures and their cached line lists.
pub struct Scene {
    cloud: PointCloud,
    octree: Octree,
    octree_color: Color,
    octree_depth: usize,
    octree_lines: Vec<LineVertex>,
    partition: PartitionTree,
    partition_lines: PartitionLines,
}

impl Scene {
    /// Builds the octree and the partition tree over `cloud`.
    pub fn build(cloud: PointCloud, config: &ViewerConfig) -> Self {
        let mut octree = Octree::from_bounds(&cloud.bounds);
        let accepted = octree.extend(cloud.points.iter().copied());
        if accepted < cloud.len() {
            warn!("{} points fell outside the octree root", cloud.len() - accepted);
        }

        let mut collector = SplitLineCollector::new(cloud.bounds)
            .with_axis_colors(config.split_colors.map(color_from))
            .with_marker_color(color_from(config.marker_color));
        let partition = PartitionTree::from_sorted(
            AxisSorted::from_points(&cloud.points),
            config.partition_depth,
            &mut collector,
        );

        info!(
            "scene: {} points, octree {} nodes (depth {}), partition tree {} nodes (depth {})",
            cloud.len(),
            octree.node_count(),
            octree.depth(),
            partition.node_count(),
            partition.depth()
        );

        let octree_color = color_from(config.octree_color);
        let octree_depth = config.octree_depth.min(MAX_OCTREE_DEPTH);
        let octree_lines = octree.get_lines(octree_color, octree_depth);

        Self {
            cloud,
            octree,
            octree_color,
            octree_depth,
            octree_lines,
            partition,
            partition_lines: collector.into_lines(),
        }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn octree(&self) -> &Octree {
        &self.octree
    }

    pub fn partition(&self) -> &PartitionTree {
        &self.partition
    }

    pub fn octree_depth(&self) -> usize {
        self.octree_depth
    }

    pub fn octree_lines(&self) -> &[LineVertex] {
        &self.octree_lines
    }

    pub fn partition_lines(&self) -> &PartitionLines {
        &self.partition_lines
    }

    /// Changes how many octree levels are drawn and regenerates the lines.
    /// Returns `true` if the depth changed.
    pub fn set_octree_depth(&mut self, depth: usize) -> bool {
        let depth = depth.min(MAX_OCTREE_DEPTH);
        if depth == self.octree_depth {
            return false;
        }
        self.octree_depth = depth;
        self.octree_lines = self.octree.get_lines(self.octree_color, depth);
        true
    }
}

/// Converts an RGBA array from the config.
pub fn color_from(rgba: [f32; 4]) -> Color {
    Color::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
}
