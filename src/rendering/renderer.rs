use crate::rendering::camera::Camera;
use crate::scene::scene::Scene;
use image::{Rgb, RgbImage};
use log::info;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const EDGE_COLOR: Rgb<u8> = Rgb([110, 110, 110]);
const MESH_COLOR: Rgb<u8> = Rgb([120, 150, 230]);
const RAY_COLOR: Rgb<u8> = Rgb([220, 40, 40]);

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("could not write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The controller's view of the outside world: something that accepts a
/// finished scene and puts it on screen, on disk, or nowhere at all.
pub trait SceneRenderer {
    fn draw(&mut self, scene: &Scene) -> Result<(), RenderError>;
}

/// Offscreen renderer that projects the scene and writes a PNG.
pub struct PreviewRenderer {
    camera: Camera,
    filename: String,
}

impl PreviewRenderer {
    pub fn new(camera: Camera, filename: String) -> PreviewRenderer {
        PreviewRenderer { camera, filename }
    }

    pub fn set_filename(&mut self, filename: String) {
        self.filename = filename;
    }

    /// Rasterize the scene into a pixel buffer. Mesh points flagged
    /// invisible are skipped, edges are drawn as thin lines and the ray as
    /// a highlighted line from origin to endpoint.
    pub fn render(&self, scene: &Scene) -> RgbImage {
        let mut image =
            RgbImage::from_pixel(self.camera.width(), self.camera.height(), BACKGROUND);

        for point in scene.mesh.iter().filter(|p| p.visible) {
            let (x, y) = self.camera.project(&point.position);
            put_pixel_clipped(&mut image, x, y, MESH_COLOR);
        }

        for edge in &scene.edges {
            draw_line(
                &mut image,
                self.camera.project(&edge.start),
                self.camera.project(&edge.end),
                EDGE_COLOR,
            );
        }

        draw_line(
            &mut image,
            self.camera.project(&scene.ray.origin),
            self.camera.project(&scene.ray.endpoint),
            RAY_COLOR,
        );

        image
    }
}

impl SceneRenderer for PreviewRenderer {
    fn draw(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let image = self.render(scene);
        image.save(&self.filename)?;
        info!("saved preview to {}", self.filename);
        Ok(())
    }
}

fn put_pixel_clipped(image: &mut RgbImage, x: f64, y: f64, color: Rgb<u8>) {
    if x >= 0.0 && y >= 0.0 {
        let (px, py) = (x as u32, y as u32);
        if px < image.width() && py < image.height() {
            image.put_pixel(px, py, color);
        }
    }
}

fn draw_line(image: &mut RgbImage, from: (f64, f64), to: (f64, f64), color: Rgb<u8>) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0);
    for i in 0..=steps as u32 {
        let t = i as f64 / steps;
        put_pixel_clipped(image, from.0 + t * dx, from.1 + t * dy, color);
    }
}

#[cfg(test)]
mod tests {
    use crate::configuration::SceneConfig;
    use crate::rendering::camera::Camera;
    use crate::rendering::renderer::{PreviewRenderer, BACKGROUND, MESH_COLOR, RAY_COLOR};
    use crate::scene::controller::SphericalAngles;
    use crate::scene::scene::SceneBuilder;
    use nalgebra::Vector3;

    #[test]
    fn test_rendered_frame_contains_the_ray() {
        let config = SceneConfig {
            lat_steps: 20,
            lon_steps: 20,
            ..SceneConfig::default()
        };
        let builder = SceneBuilder::from_config(&config).unwrap();
        let scene = builder.build(SphericalAngles::default());

        let camera = Camera::new(200, 200, Vector3::zeros(), 0.5);
        let renderer = PreviewRenderer::new(camera, "unused.png".to_string());
        let image = renderer.render(&scene);

        assert_eq!(image.dimensions(), (200, 200));
        assert!(image.pixels().any(|p| *p == RAY_COLOR));
        assert!(image.pixels().any(|p| *p == BACKGROUND));
    }

    #[test]
    fn test_clipped_mesh_points_are_not_drawn() {
        let config = SceneConfig {
            lat_steps: 20,
            lon_steps: 20,
            ..SceneConfig::default()
        };
        let builder = SceneBuilder::from_config(&config).unwrap();
        let scene = builder.build(SphericalAngles::default());

        let camera = Camera::new(200, 200, Vector3::zeros(), 0.5);
        let renderer = PreviewRenderer::new(camera.clone(), "unused.png".to_string());
        let image = renderer.render(&scene);

        // Each visible point paints at most one pixel; invisible ones none.
        let visible = scene.mesh.iter().filter(|p| p.visible).count();
        let mesh_pixels = image.pixels().filter(|p| **p == MESH_COLOR).count();
        assert!(mesh_pixels <= visible);

        // The south pole of the sphere is clipped, so nothing of the mesh
        // lands at its projection. No edge or ray passes there either.
        let (x, y) = camera.project(&Vector3::new(0.0, 0.0, -0.2));
        assert_eq!(*image.get_pixel(x as u32, y as u32), BACKGROUND);
    }
}
