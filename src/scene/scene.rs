use crate::configuration::{RayLength, SceneConfig};
use crate::geometry::box_edges::{enumerate_edges, BoxSpec, Edge};
use crate::geometry::hemisphere::{
    generate_mesh, HemisphereMesh, HemisphereSpec, MeshResolution,
};
use crate::geometry::GeometryError;
use crate::scene::controller::SphericalAngles;
use crate::scene::ray::RaySegment;
use nalgebra::Vector3;

/// Everything the renderer needs for one frame. Rebuilt on every update,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub edges: Vec<Edge>,
    pub mesh: HemisphereMesh,
    pub ray: RaySegment,
}

/// Assembles box edges, hemisphere mesh and the current ray into a Scene.
///
/// Edges and mesh depend only on the validated specs, so they are computed
/// once at construction; only the ray varies with the angles.
pub struct SceneBuilder {
    box_spec: BoxSpec,
    hemisphere: HemisphereSpec,
    ray_length: f64,
    edges: Vec<Edge>,
    mesh: HemisphereMesh,
}

impl SceneBuilder {
    pub fn new(
        box_spec: BoxSpec,
        hemisphere: HemisphereSpec,
        resolution: MeshResolution,
        ray_length: RayLength,
    ) -> SceneBuilder {
        let ray_length = match ray_length {
            RayLength::HemisphereRadius => hemisphere.radius(),
            RayLength::BoxSize => box_spec.size(),
        };

        SceneBuilder {
            edges: enumerate_edges(&box_spec),
            mesh: generate_mesh(&hemisphere, resolution),
            box_spec,
            hemisphere,
            ray_length,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Result<SceneBuilder, GeometryError> {
        let center = Vector3::zeros();
        let box_spec = BoxSpec::new(config.box_size, center)?;
        let hemisphere = HemisphereSpec::new(config.hemisphere_radius(), center)?;
        let resolution = MeshResolution {
            lat_samples: config.lat_steps,
            lon_samples: config.lon_steps,
        };
        Ok(SceneBuilder::new(
            box_spec,
            hemisphere,
            resolution,
            config.ray_length,
        ))
    }

    pub fn box_spec(&self) -> &BoxSpec {
        &self.box_spec
    }

    pub fn hemisphere(&self) -> &HemisphereSpec {
        &self.hemisphere
    }

    pub fn build(&self, angles: SphericalAngles) -> Scene {
        Scene {
            edges: self.edges.clone(),
            mesh: self.mesh.clone(),
            ray: RaySegment::from_angles(
                self.hemisphere.center(),
                self.ray_length,
                angles.theta,
                angles.phi,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::configuration::{RayLength, SceneConfig};
    use crate::scene::controller::SphericalAngles;
    use crate::scene::scene::SceneBuilder;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn default_builder() -> SceneBuilder {
        SceneBuilder::from_config(&SceneConfig::default()).unwrap()
    }

    #[test]
    fn test_scene_aggregates_all_three_structures() {
        let builder = default_builder();
        let scene = builder.build(SphericalAngles::default());

        assert_eq!(scene.edges.len(), 12);
        assert_eq!(scene.mesh.lat_samples(), 100);
        assert_eq!(scene.mesh.lon_samples(), 100);
        // Default ray length is the hemisphere radius.
        assert_abs_diff_eq!(scene.ray.length(), 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_build_is_idempotent() {
        let builder = default_builder();
        let angles = SphericalAngles {
            theta: 1.0,
            phi: 2.0,
        };

        let first = builder.build(angles);
        let second = builder.build(angles);
        assert_eq!(first, second);
    }

    #[test]
    fn test_box_size_ray_length_variant() {
        let config = SceneConfig {
            radius_fraction: 0.125,
            ray_length: RayLength::BoxSize,
            ..SceneConfig::default()
        };
        let builder = SceneBuilder::from_config(&config).unwrap();
        let scene = builder.build(SphericalAngles::default());

        assert_abs_diff_eq!(scene.ray.length(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ray_tracks_the_angles() {
        let builder = default_builder();
        let scene = builder.build(SphericalAngles {
            theta: PI / 2.0,
            phi: 0.0,
        });

        assert_abs_diff_eq!(scene.ray.endpoint.x, 0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(scene.ray.endpoint.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = SceneConfig {
            box_size: -1.0,
            ..SceneConfig::default()
        };
        assert!(SceneBuilder::from_config(&config).is_err());
    }
}
