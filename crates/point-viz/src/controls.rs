//! Keyboard toggles for the viewer layers.

use macroquad::prelude::*;

use crate::scene::Scene;

/// Which layers are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerControls {
    pub points: bool,
    pub octree: bool,
    pub partition: bool,
    pub axes: bool,
}

impl Default for LayerControls {
    fn default() -> Self {
        Self {
            points: true,
            octree: true,
            partition: false,
            axes: true,
        }
    }
}

impl LayerControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles keyboard input. Returns true if anything changed.
    ///
    /// `1`-`4` toggle points, octree, partition tree and axes; `+`/`-`
    /// change the drawn octree depth.
    pub fn update(&mut self, scene: &mut Scene) -> bool {
        let mut changed = false;

        if is_key_pressed(KeyCode::Key1) {
            self.points = !self.points;
            changed = true;
        }
        if is_key_pressed(KeyCode::Key2) {
            self.octree = !self.octree;
            changed = true;
        }
        if is_key_pressed(KeyCode::Key3) {
            self.partition = !self.partition;
            changed = true;
        }
        if is_key_pressed(KeyCode::Key4) {
            self.axes = !self.axes;
            changed = true;
        }
        if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
            changed |= scene.set_octree_depth(scene.octree_depth() + 1);
        }
        if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
            changed |= scene.set_octree_depth(scene.octree_depth().saturating_sub(1));
        }

        changed
    }

    /// Draws the status overlay.
    pub fn draw_ui(&self, scene: &Scene, y_offset: f32) {
        let on_off = |flag: bool| if flag { "on" } else { "off" };

        draw_text(
            &format!(
                "Points: {} | octree: {} nodes, depth {} | partition tree: {} nodes, depth {}",
                scene.cloud().len(),
                scene.octree().node_count(),
                scene.octree().depth(),
                scene.partition().node_count(),
                scene.partition().depth()
            ),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(
            &format!("Octree levels drawn: {}", scene.octree_depth()),
            10.0,
            y_offset + 20.0,
            18.0,
            YELLOW,
        );
        draw_text(
            &format!(
                "[1] points {} | [2] octree {} | [3] partition {} | [4] axes {}",
                on_off(self.points),
                on_off(self.octree),
                on_off(self.partition),
                on_off(self.axes)
            ),
            10.0,
            y_offset + 40.0,
            18.0,
            GREEN,
        );
        draw_text(
            "[+]/[-] octree depth | drag mouse to rotate, scroll to zoom",
            10.0,
            y_offset + 60.0,
            16.0,
            DARKGRAY,
        );
    }
}
