mod cli;
mod configuration;
mod geometry;
mod rendering;
mod scene;

use crate::cli::{Action, App};
use crate::configuration::SceneConfig;
use crate::rendering::camera::Camera;
use crate::rendering::renderer::PreviewRenderer;
use crate::scene::controller::{Controller, SliderAxis, SphericalAngles};
use crate::scene::scene::SceneBuilder;
use clap::Parser;
use indicatif::ProgressBar;
use log::{error, info};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
enum ZenithrayError {
    #[error(transparent)]
    Config(#[from] configuration::ConfigError),
    #[error(transparent)]
    Geometry(#[from] geometry::GeometryError),
    #[error(transparent)]
    Render(#[from] rendering::renderer::RenderError),
}

fn main() {
    let app = App::parse();
    env_logger::Builder::from_default_env()
        .filter_level(app.global_opts.log_level.clone().into())
        .init();

    if let Err(e) = run(app) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(app: App) -> Result<(), ZenithrayError> {
    let config = match &app.global_opts.config_file {
        Some(path) => SceneConfig::load(Path::new(path))?,
        None => SceneConfig::default(),
    };
    let builder = SceneBuilder::from_config(&config)?;
    let camera = Camera::new(
        app.global_opts.width,
        app.global_opts.height,
        builder.box_spec().center(),
        builder.box_spec().size() / 2.0,
    );
    let initial = SphericalAngles::from_raw(config.initial_theta_raw, config.initial_phi_raw);

    match app.action {
        Action::Render {
            theta_raw,
            phi_raw,
            filename,
        } => {
            let renderer = PreviewRenderer::new(camera, filename);
            let mut controller = Controller::with_initial(builder, renderer, initial);
            // Deliver both positions as events, like two slider drags.
            controller.parameter_changed(SliderAxis::Theta, theta_raw)?;
            controller.parameter_changed(SliderAxis::Phi, phi_raw)?;
        }
        Action::Sweep {
            axis,
            frames,
            prefix,
        } => {
            let axis = SliderAxis::from(axis);
            let renderer = PreviewRenderer::new(camera, format!("{prefix}-000.png"));
            let mut controller = Controller::with_initial(builder, renderer, initial);

            let frames = frames.max(2);
            let progress = ProgressBar::new(frames as u64);
            for i in 0..frames {
                let raw = axis.raw_max() * i as i64 / (frames as i64 - 1);
                controller
                    .renderer_mut()
                    .set_filename(format!("{prefix}-{i:03}.png"));
                controller.parameter_changed(axis, raw)?;
                progress.inc(1);
            }
            progress.finish();
            info!("wrote {} frames with prefix {}", frames, prefix);
        }
        Action::Probe { theta_raw, phi_raw } => {
            let angles = SphericalAngles::from_raw(theta_raw, phi_raw);
            let scene = builder.build(angles);
            let visible = scene.mesh.iter().filter(|p| p.visible).count();

            println!("angles: theta={} phi={}", angles.theta, angles.phi);
            println!(
                "ray origin: ({}, {}, {})",
                scene.ray.origin.x, scene.ray.origin.y, scene.ray.origin.z
            );
            println!(
                "ray endpoint: ({:.6}, {:.6}, {:.6})",
                scene.ray.endpoint.x, scene.ray.endpoint.y, scene.ray.endpoint.z
            );
            println!("hemisphere radius: {}", builder.hemisphere().radius());
            println!("edges: {}", scene.edges.len());
            println!(
                "mesh: {}x{} samples, {} visible",
                scene.mesh.lat_samples(),
                scene.mesh.lon_samples(),
                visible
            );
        }
    }
    Ok(())
}
