use glam::Vec3;
use ik_raymarch::creature::{Creature, CreatureConfig, MoveInput};
use ik_raymarch::frame::Simulation;
use ik_raymarch::render::{Camera, Renderer, ShadingConfig};
use ik_raymarch::scene::Environment;
use ik_raymarch::{FrameImage, MarchConfig, RenderConfig};
use std::error::Error;
use std::f32::consts::TAU;
use std::path::Path;
use std::time::Instant;

/// Walks a slow circle, pausing every few seconds.
fn scripted_input(time: f32) -> MoveInput {
    if time % 6.0 > 4.5 {
        return MoveInput::IDLE;
    }
    let angle = time * TAU / 12.0;
    MoveInput::new(angle.sin(), angle.cos())
}

fn follow_camera(focus: Vec3, time: f32, width: u32, height: u32) -> Camera {
    let target = focus + Vec3::Y * 1.8;
    Camera::orbit(target, 10.0, 0.9 + time * 0.05, 1.2).with_aspect_of(width, height)
}

fn save_png(image: FrameImage, path: &Path) -> Result<(), Box<dyn Error>> {
    let (width, height) = (image.width, image.height);
    let buffer = image::RgbaImage::from_raw(width, height, image.rgba)
        .ok_or("frame buffer does not match its dimensions")?;
    buffer.save(path)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = RenderConfig::from_env();
    log::info!(
        "rendering {} frames at {}x{} ({} quality)",
        config.frames,
        config.width,
        config.height,
        config.quality
    );

    let creature = Creature::new(CreatureConfig::default())?;
    let mut sim = Simulation::new(creature, Environment::default());

    let mut shading = ShadingConfig::for_tier(config.quality);
    if config.track_nearest {
        shading = shading.with_outline(0.04, Vec3::new(0.05, 0.05, 0.08));
    }
    let renderer = Renderer::new(MarchConfig::for_tier(config.quality), shading)
        .with_nearest(config.track_nearest);

    std::fs::create_dir_all(&config.output_dir)?;

    let dt = 1.0 / config.fps;
    for i in 0..config.frames {
        let input = scripted_input(sim.time());
        let frame = sim.step(dt, input);
        let camera = follow_camera(frame.focus, frame.time, config.width, config.height);

        let started = Instant::now();
        let image = renderer.render(&sim.scene(&frame), &camera, &frame, config.width, config.height);
        log::info!(
            "frame {i}: t={:.2}s, creature at ({:.2}, {:.2}), {:?}",
            frame.time,
            frame.focus.x,
            frame.focus.z,
            started.elapsed()
        );

        let path = config.output_dir.join(format!("frame_{i:04}.png"));
        save_png(image, &path)?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}
