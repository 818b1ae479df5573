use std::path::{Path, PathBuf};

use log::{error, info};
use macroquad::prelude::*;
use point_viz::{
    draw_axes, draw_line_list, draw_markers, draw_points, to_color, LayerControls, OrbitCamera,
    PointCloud, Scene, ViewerConfig, ViewerError,
};

const CONFIG_PATH: &str = "point-viz.toml";

/// Loads the config and the points file, then builds the scene.
fn setup() -> Result<(Scene, ViewerConfig), ViewerError> {
    let config = ViewerConfig::load_or_default(Path::new(CONFIG_PATH))?;
    let path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.points_file.clone())
        .ok_or(ViewerError::NoPointsFile)?;

    info!("loading points from {}", path.display());
    let cloud = PointCloud::load(&path)?;
    let scene = Scene::build(cloud, &config);
    Ok((scene, config))
}

#[macroquad::main("Point Cloud Viewer")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (mut scene, config) = match setup() {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let mut camera = OrbitCamera::framing(&scene.cloud().bounds);
    let mut controls = LayerControls::new();
    let point_color = to_color(point_viz::scene::color_from(config.point_color));
    let background = to_color(point_viz::scene::color_from(config.background));
    let axes_length = scene.octree().cube().edge_length() * 0.25;

    loop {
        camera.update();
        controls.update(&mut scene);

        clear_background(background);
        set_camera(&camera.to_camera3d());

        if controls.points {
            draw_points(&scene.cloud().points, config.point_size, point_color);
        }
        if controls.octree {
            draw_line_list(scene.octree_lines());
        }
        if controls.partition {
            draw_line_list(&scene.partition_lines().lines);
            draw_markers(&scene.partition_lines().markers, config.point_size * 2.0);
        }
        if controls.axes {
            draw_axes(axes_length);
        }

        set_default_camera();

        controls.draw_ui(&scene, 25.0);
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 110.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
