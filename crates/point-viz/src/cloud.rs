//! Point cloud loading.
//!
//! Files hold one point per line as whitespace-separated `x y z`. Blank lines
//! and lines starting with `#` are skipped, columns after the third are
//! ignored.

use std::path::Path;

use log::debug;
use point_tree::{Bounds, Point};
use thiserror::Error;

/// Errors while reading a points file.
#[derive(Error, Debug)]
pub enum PointCloudError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("points file contains no points")]
    Empty,
}

/// Points plus their bounding extrema.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    pub points: Vec<Point>,
    pub bounds: Bounds,
}

impl PointCloud {
    /// Wraps `points`, computing their bounds. Fails on an empty set.
    pub fn new(points: Vec<Point>) -> Result<Self, PointCloudError> {
        let bounds = Bounds::from_points(&points).ok_or(PointCloudError::Empty)?;
        Ok(Self { points, bounds })
    }

    /// Parses points from text.
    pub fn parse(text: &str) -> Result<Self, PointCloudError> {
        let mut points = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            points.push(parse_point(line).map_err(|message| PointCloudError::Parse {
                line: i + 1,
                message,
            })?);
        }
        Self::new(points)
    }

    /// Reads and parses a points file.
    pub fn load(path: &Path) -> Result<Self, PointCloudError> {
        let text = std::fs::read_to_string(path)?;
        let cloud = Self::parse(&text)?;
        debug!(
            "loaded {} points from {} (bounds {} .. {})",
            cloud.points.len(),
            path.display(),
            cloud.bounds.min,
            cloud.bounds.max
        );
        Ok(cloud)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn parse_point(line: &str) -> Result<Point, String> {
    let mut coords = [0.0f32; 3];
    let mut fields = line.split_whitespace();
    for (axis, coord) in coords.iter_mut().enumerate() {
        let field = fields
            .next()
            .ok_or_else(|| format!("expected 3 coordinates, found {}", axis))?;
        *coord = field
            .parse()
            .map_err(|e| format!("invalid coordinate {:?}: {}", field, e))?;
    }
    Ok(Point::new(coords[0], coords[1], coords[2]))
}
