use nalgebra::Vector3;

/// Default viewing direction, matching the familiar 3d-plot perspective.
pub const DEFAULT_ELEVATION_DEG: f64 = 30.0;
pub const DEFAULT_AZIMUTH_DEG: f64 = -60.0;

const MARGIN: f64 = 0.9;

/// Orthographic camera for the offscreen preview.
///
/// Looks at `center` from the given elevation and azimuth and maps world
/// coordinates to pixel coordinates so that a sphere of `half_extent`
/// around the center fits the image with a small margin.
#[derive(Debug, Clone)]
pub struct Camera {
    width: u32,
    height: u32,
    center: Vector3<f64>,
    right: Vector3<f64>,
    up: Vector3<f64>,
    scale: f64,
}

impl Camera {
    pub fn new(width: u32, height: u32, center: Vector3<f64>, half_extent: f64) -> Camera {
        Camera::with_view(
            width,
            height,
            center,
            half_extent,
            DEFAULT_ELEVATION_DEG,
            DEFAULT_AZIMUTH_DEG,
        )
    }

    pub fn with_view(
        width: u32,
        height: u32,
        center: Vector3<f64>,
        half_extent: f64,
        elevation_deg: f64,
        azimuth_deg: f64,
    ) -> Camera {
        let elevation = elevation_deg.to_radians();
        let azimuth = azimuth_deg.to_radians();

        let right = Vector3::new(-azimuth.sin(), azimuth.cos(), 0.0);
        let up = Vector3::new(
            -elevation.sin() * azimuth.cos(),
            -elevation.sin() * azimuth.sin(),
            elevation.cos(),
        );

        // The furthest corner of the bounding volume sits at sqrt(3) times
        // the half extent from the center.
        let world_radius = half_extent * 3.0_f64.sqrt();
        let scale = MARGIN * 0.5 * width.min(height) as f64 / world_radius;

        Camera {
            width,
            height,
            center,
            right,
            up,
            scale,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// World point to pixel coordinates. May land outside the image; the
    /// rasterizer clips per pixel.
    pub fn project(&self, point: &Vector3<f64>) -> (f64, f64) {
        let offset = point - self.center;
        let x = self.width as f64 / 2.0 + self.scale * offset.dot(&self.right);
        let y = self.height as f64 / 2.0 - self.scale * offset.dot(&self.up);
        (x, y)
    }
}
