//! Rocket launch demo
//!
//! Builds the scene geometry, then drives the launch and its exhaust at a
//! fixed time step without a window, logging what a renderer would upload
//! each frame.
//!
//! ```text
//! rocket_launch [CONFIG.toml|CONFIG.ron] [--obj PATH] [--texture PATH]
//!               [--frames N] [--split] [--seed N]
//! ```

use rocket_scene::prelude::*;
use rocket_scene::foundation::logging;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Fixed simulation step
const FRAME_DT: f32 = 1.0 / 60.0;

/// Framebuffer size used for viewport layout
const FRAMEBUFFER: (u32, u32) = (1280, 720);

/// Frames between progress reports
const REPORT_INTERVAL: usize = 60;

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Drive the rocket launch scene without a window
#[derive(Parser, Debug)]
#[command(name = "rocket_launch")]
struct Options {
    /// Scene config file (.toml or .ron)
    config: Option<PathBuf>,

    /// Extra OBJ model to add to the scenery
    #[arg(long, value_name = "PATH")]
    obj: Option<PathBuf>,

    /// Texture to load and report on
    #[arg(long, value_name = "PATH")]
    texture: Option<PathBuf>,

    /// Number of fixed-step frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: usize,

    /// Lay out two viewports side by side
    #[arg(long)]
    split: bool,

    /// Seed for a reproducible particle stream
    #[arg(long)]
    seed: Option<u64>,
}

struct LaunchApp {
    options: Options,
    scene: SceneState,
    rocket: Mesh,
    landing_pads: Vec<Vec3>,
    particle_buffer: Vec<ParticleVertex>,
}

impl LaunchApp {
    fn new(options: Options) -> Result<Self, AppError> {
        log::info!("Creating rocket launch demo...");

        let config = match &options.config {
            Some(path) => {
                log::info!("Loading scene config from {}", path.display());
                SceneConfig::load_from_file(path)?
            }
            None => SceneConfig::default(),
        };

        let mut scene = match options.seed {
            Some(seed) => SceneState::with_seed(&config, seed)?,
            None => SceneState::new(&config)?,
        };
        scene.split_screen = options.split;

        let rocket = assemble_rocket()?;
        let landing_pads = config.launch.landing_pads.iter().copied().map(Vec3::from).collect();
        let particle_buffer = Vec::with_capacity(config.particles.capacity);

        Ok(Self {
            options,
            scene,
            rocket,
            landing_pads,
            particle_buffer,
        })
    }

    fn initialize(&mut self) -> Result<(), AppError> {
        log::info!("Initializing scene geometry...");

        let mut scenery = Mesh::new();
        for pad in &self.landing_pads {
            let slab = generate_cube(
                Vec3::new(0.4, 0.4, 0.45),
                &Transform::from_position(*pad)
                    .with_scale(Vec3::new(4.0, 0.1, 4.0))
                    .to_matrix(),
            )?;
            let tower = generate_cylinder(
                true,
                12,
                Vec3::new(0.6, 0.2, 0.2),
                &(Mat4::new_translation(&(pad + Vec3::new(3.0, 0.0, 0.0)))
                    * Mat4::rotation_z(std::f32::consts::FRAC_PI_2)
                    * Mat4::new_nonuniform_scaling(&Vec3::new(6.0, 0.2, 0.2))),
            )?;
            scenery = concatenate(concatenate(scenery, &slab), &tower);
        }
        if let Some(path) = &self.options.obj {
            let model = ObjLoader::load_obj(path)?;
            scenery = concatenate(scenery, &model);
        }

        log::info!(
            "Rocket: {} triangles ({} bytes interleaved)",
            self.rocket.triangle_count(),
            std::mem::size_of_val(self.rocket.interleaved()?.as_slice())
        );
        log::info!("Scenery: {} triangles", scenery.triangle_count());

        if let Some(path) = &self.options.texture {
            let image = ImageData::from_file(path)?;
            log::info!("Texture {}: {}x{} ({} bytes)", path.display(), image.width, image.height, image.size_bytes());
        }

        Ok(())
    }

    fn run(&mut self) {
        let frames = self.options.frames;
        let pause_at = frames / 2;
        let resume_at = pause_at + REPORT_INTERVAL / 2;

        self.scene.toggle_launch();
        self.scene.toggle_point_light(0);

        for frame in 0..frames {
            if frame == pause_at || frame == resume_at {
                self.scene.toggle_launch();
            }
            if frame > 0 && frame % (REPORT_INTERVAL * 3) == 0 {
                self.scene.cycle_primary_camera();
                self.scene.toggle_point_light(frame / (REPORT_INTERVAL * 3) % self.scene.lights().len().max(1));
            }

            self.scene.update(FRAME_DT);
            let uploaded = self.scene.particles().write_gpu_buffer(&mut self.particle_buffer);

            if frame % REPORT_INTERVAL == 0 {
                self.report(frame, uploaded);
            }
        }

        self.scene.reset_launch();
        self.scene.update(FRAME_DT);
        log::info!(
            "Launch reset, {} particles alive",
            self.scene.particles().alive_count()
        );
    }

    fn report(&self, frame: usize, uploaded: usize) {
        let launch = self.scene.launch();
        let position = launch.position();
        log::info!(
            "frame {:>4} t={:.2}s rocket=({:.2}, {:.2}, {:.2}) particles={} ({} bytes){}",
            frame,
            launch.time(),
            position.x,
            position.y,
            position.z,
            uploaded,
            std::mem::size_of_val(self.particle_buffer.as_slice()),
            if launch.is_paused() { " [paused]" } else { "" }
        );

        for light in self.scene.point_lights().filter(|light| light.enabled) {
            log::debug!(
                "  light ({:.1}, {:.1}, {:.1}) color ({:.1}, {:.1}, {:.1})",
                light.position.x,
                light.position.y,
                light.position.z,
                light.color.x,
                light.color.y,
                light.color.z
            );
        }

        let (width, height) = FRAMEBUFFER;
        for viewport in self.scene.viewports(width, height) {
            let camera = self.scene.camera_for(&viewport);
            log::debug!(
                "  {:?} viewport at x={} ({}x{}): eye=({:.1}, {:.1}, {:.1})",
                viewport.mode,
                viewport.x,
                viewport.width,
                viewport.height,
                camera.position.x,
                camera.position.y,
                camera.position.z
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let options = Options::parse();
    let mut app = LaunchApp::new(options)?;
    app.initialize()?;
    app.run();

    log::info!("Rocket launch demo finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        let options =
            Options::try_parse_from(["rocket_launch", "scene.toml", "--frames", "10", "--split", "--seed", "3"]).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("scene.toml")));
        assert_eq!(options.frames, 10);
        assert!(options.split);
        assert_eq!(options.seed, Some(3));
    }

    #[test]
    fn test_parse_defaults() {
        let options = Options::try_parse_from(["rocket_launch"]).unwrap();
        assert_eq!(options.config, None);
        assert_eq!(options.frames, 600);
        assert!(!options.split);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Options::try_parse_from(["rocket_launch", "--frames"]).is_err());
        assert!(Options::try_parse_from(["rocket_launch", "--frames", "many"]).is_err());
        assert!(Options::try_parse_from(["rocket_launch", "--wat"]).is_err());
    }

    #[test]
    fn test_headless_run() {
        let options = Options::try_parse_from(["rocket_launch", "--frames", "120", "--seed", "1"]).unwrap();
        let mut app = LaunchApp::new(options).unwrap();
        app.initialize().unwrap();
        app.run();
        assert_eq!(app.scene.particles().alive_count(), 0);
    }
}
