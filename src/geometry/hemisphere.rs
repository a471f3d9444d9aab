use crate::geometry::GeometryError;
use log::debug;
use nalgebra::Vector3;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphereSpec {
    radius: f64,
    center: Vector3<f64>,
}

impl HemisphereSpec {
    pub fn new(radius: f64, center: Vector3<f64>) -> Result<HemisphereSpec, GeometryError> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(HemisphereSpec { radius, center })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Vector3<f64> {
        self.center
    }
}

/// Sample counts per grid axis, inclusive of both interval ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshResolution {
    pub lat_samples: usize,
    pub lon_samples: usize,
}

impl Default for MeshResolution {
    fn default() -> Self {
        MeshResolution {
            lat_samples: 100,
            lon_samples: 100,
        }
    }
}

/// One sample of the sphere surface. Clipped points stay in the grid so the
/// renderer can triangulate by index; they are only flagged, never removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshPoint {
    pub position: Vector3<f64>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HemisphereMesh {
    points: Vec<MeshPoint>,
    lat_samples: usize,
    lon_samples: usize,
}

impl HemisphereMesh {
    pub fn lat_samples(&self) -> usize {
        self.lat_samples
    }

    pub fn lon_samples(&self) -> usize {
        self.lon_samples
    }

    /// Point at (latitude row, longitude column).
    #[allow(dead_code)] // For testing
    pub fn point(&self, lat: usize, lon: usize) -> &MeshPoint {
        &self.points[lat * self.lon_samples + lon]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MeshPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a HemisphereMesh {
    type Item = &'a MeshPoint;
    type IntoIter = std::slice::Iter<'a, MeshPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Generate the clipped hemisphere mesh.
///
/// The grid covers latitude [0, pi] times longitude [0, 2*pi]. Points whose
/// z lies strictly below the center's z belong to the lower half of the
/// sphere and are flagged invisible, leaving the upper cap.
pub fn generate_mesh(spec: &HemisphereSpec, resolution: MeshResolution) -> HemisphereMesh {
    let lat_samples = resolution.lat_samples.max(2);
    let lon_samples = resolution.lon_samples.max(2);

    let lat_step = PI / (lat_samples - 1) as f64;
    let lon_step = 2.0 * PI / (lon_samples - 1) as f64;
    let center = spec.center();
    let radius = spec.radius();

    let rows: Vec<Vec<MeshPoint>> = (0..lat_samples)
        .into_par_iter()
        .map(|i| {
            let lat = i as f64 * lat_step;
            (0..lon_samples)
                .map(|j| {
                    let lon = j as f64 * lon_step;
                    let position = center
                        + radius
                            * Vector3::new(
                                lat.sin() * lon.cos(),
                                lat.sin() * lon.sin(),
                                lat.cos(),
                            );
                    MeshPoint {
                        position,
                        visible: position.z >= center.z,
                    }
                })
                .collect()
        })
        .collect();

    let points: Vec<MeshPoint> = rows.into_iter().flatten().collect();
    debug!(
        "generated {}x{} hemisphere mesh, {} visible points",
        lat_samples,
        lon_samples,
        points.iter().filter(|p| p.visible).count()
    );

    HemisphereMesh {
        points,
        lat_samples,
        lon_samples,
    }
}
