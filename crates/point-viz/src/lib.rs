//! Rendering shell for the point cloud viewer.
//!
//! Turns the line lists produced by `point-tree` into macroquad draw calls
//! and provides a simple orbit camera.

use macroquad::prelude::*;
use point_tree::lines::segments;
use point_tree::{Bounds, LineVertex, Point};
use thiserror::Error;

pub mod cloud;
pub mod config;
pub mod controls;
pub mod scene;

pub use cloud::{PointCloud, PointCloudError};
pub use config::{ConfigError, ViewerConfig};
pub use controls::LayerControls;
pub use scene::Scene;

/// Anything that stops the viewer from starting.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("point cloud: {0}")]
    PointCloud(#[from] PointCloudError),

    #[error("no points file given (pass a path or set points_file in the config)")]
    NoPointsFile,
}

#[inline]
pub fn to_vec3(p: &Point) -> Vec3 {
    vec3(p.x, p.y, p.z)
}

#[inline]
pub fn to_color(c: point_tree::Color) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

/// Draws a line list (two entries per segment). The color of the first
/// endpoint is used for the whole segment.
pub fn draw_line_list(lines: &[LineVertex]) {
    for ((a, color), (b, _)) in segments(lines) {
        draw_line_3d(to_vec3(a), to_vec3(b), to_color(*color));
    }
}

/// Draws each point as a small solid cube.
pub fn draw_points(points: &[Point], size: f32, color: Color) {
    let extent = vec3(size, size, size);
    for p in points {
        draw_cube(to_vec3(p), extent, None, color);
    }
}

/// Draws colored markers as small solid cubes.
pub fn draw_markers(markers: &[LineVertex], size: f32) {
    let extent = vec3(size, size, size);
    for (p, color) in markers {
        draw_cube(to_vec3(p), extent, None, to_color(*color));
    }
}

/// Draws the world axes at the origin.
pub fn draw_axes(length: f32) {
    draw_line_3d(Vec3::ZERO, vec3(length, 0.0, 0.0), RED);
    draw_line_3d(Vec3::ZERO, vec3(0.0, length, 0.0), GREEN);
    draw_line_3d(Vec3::ZERO, vec3(0.0, 0.0, length), BLUE);
}

/// Orbit camera circling a target point.
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub target: Vec3,
    /// Multiplier for scroll wheel zoom
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            distance,
            yaw,
            pitch,
            target: Vec3::ZERO,
            zoom_speed: 1.0,
            min_distance: 0.1,
            max_distance: 1000.0,
        }
    }

    /// Creates a camera looking at the center of `bounds` from far enough
    /// away to see all of it.
    pub fn framing(bounds: &Bounds) -> Self {
        let radius = (bounds.size().norm() / 2.0).max(0.5);
        let mut camera = Self::new(radius * 2.5, 0.6, 0.4);
        camera.target = to_vec3(&bounds.center());
        camera.zoom_speed = radius * 0.1;
        camera.min_distance = radius * 0.1;
        camera.max_distance = radius * 20.0;
        camera
    }

    /// Updates camera state from mouse drag, scroll wheel and arrow keys.
    pub fn update(&mut self) {
        if is_mouse_button_down(MouseButton::Left) {
            let delta = mouse_delta_position();
            self.yaw -= delta.x * 2.0;
            self.pitch -= delta.y * 2.0;
        }

        if is_key_down(KeyCode::Left) {
            self.yaw += 0.02;
        }
        if is_key_down(KeyCode::Right) {
            self.yaw -= 0.02;
        }
        if is_key_down(KeyCode::Up) {
            self.pitch += 0.02;
        }
        if is_key_down(KeyCode::Down) {
            self.pitch -= 0.02;
        }
        self.pitch = self.pitch.clamp(-1.5, 1.5);

        let scroll = mouse_wheel().1;
        self.distance = (self.distance - scroll * self.zoom_speed)
            .clamp(self.min_distance, self.max_distance);
    }

    /// Returns the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + vec3(x, y, z)
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: vec3(0.0, 1.0, 0.0),
            target: self.target,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framing_targets_bounds_center() {
        let bounds = Bounds::new(Point::new(-2.0, 0.0, 0.0), Point::new(2.0, 4.0, 8.0));
        let camera = OrbitCamera::framing(&bounds);

        assert_eq!(camera.target, vec3(0.0, 2.0, 4.0));
        assert!(camera.distance > bounds.size().norm() / 2.0);
        assert!(camera.min_distance < camera.distance);
        assert!(camera.distance < camera.max_distance);
    }

    #[test]
    fn position_is_distance_from_target() {
        let camera = OrbitCamera::new(10.0, 0.3, 0.2);
        let offset = camera.position() - camera.target;
        assert!((offset.length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn color_conversion_keeps_components() {
        let c = to_color(point_tree::Color::rgba(0.1, 0.2, 0.3, 0.4));
        assert_eq!((c.r, c.g, c.b, c.a), (0.1, 0.2, 0.3, 0.4));
    }
}
