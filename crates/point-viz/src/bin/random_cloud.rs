use log::info;
use macroquad::prelude::*;
use point_tree::Point;
use point_viz::{
    draw_axes, draw_line_list, draw_markers, draw_points, LayerControls, OrbitCamera, PointCloud,
    Scene, ViewerConfig,
};

const NUM_POINTS: usize = 400;
const WORLD_SIZE: f32 = 30.0;

/// Simple seeded random number generator (LCG).
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_f32(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.state >> 40) as f32) / ((1u64 << 24) as f32)
    }
}

/// Generates a lumpy cloud: a few gaussian-ish blobs inside the world cube.
fn generate_cloud(seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    let centers: Vec<Point> = (0..4)
        .map(|_| {
            Point::new(
                (rng.next_f32() - 0.5) * WORLD_SIZE,
                (rng.next_f32() - 0.5) * WORLD_SIZE,
                (rng.next_f32() - 0.5) * WORLD_SIZE,
            )
        })
        .collect();

    (0..NUM_POINTS)
        .map(|i| {
            let c = centers[i % centers.len()];
            // Sum of three uniforms approximates a bell curve.
            let mut offset = || (rng.next_f32() + rng.next_f32() + rng.next_f32() - 1.5) * 4.0;
            Point::new(c.x + offset(), c.y + offset(), c.z + offset())
        })
        .collect()
}

#[macroquad::main("Random Point Cloud")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let points = generate_cloud(42);
    info!("generated {} points", points.len());

    let config = ViewerConfig {
        octree_depth: 2,
        point_size: 0.2,
        ..ViewerConfig::default()
    };
    let cloud = match PointCloud::new(points) {
        Ok(cloud) => cloud,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };
    let mut scene = Scene::build(cloud, &config);

    let mut camera = OrbitCamera::framing(&scene.cloud().bounds);
    let mut controls = LayerControls {
        partition: true,
        ..LayerControls::default()
    };

    loop {
        camera.update();
        controls.update(&mut scene);

        clear_background(Color::from_rgba(15, 15, 25, 255));
        set_camera(&camera.to_camera3d());

        if controls.points {
            draw_points(&scene.cloud().points, config.point_size, LIGHTGRAY);
        }
        if controls.octree {
            draw_line_list(scene.octree_lines());
        }
        if controls.partition {
            draw_line_list(&scene.partition_lines().lines);
            draw_markers(&scene.partition_lines().markers, config.point_size * 2.0);
        }
        if controls.axes {
            draw_axes(8.0);
        }

        set_default_camera();

        controls.draw_ui(&scene, 25.0);
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 110.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
