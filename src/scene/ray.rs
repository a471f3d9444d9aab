use crate::geometry::spherical::spherical_direction;
use nalgebra::Vector3;

/// The cast ray, recomputed from the current angles on every update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    pub origin: Vector3<f64>,
    pub endpoint: Vector3<f64>,
}

impl RaySegment {
    /// Cast a ray of the given length from `origin` along the direction
    /// described by the spherical angles. Out-of-range angles wrap
    /// periodically and still yield a valid direction.
    pub fn from_angles(origin: Vector3<f64>, length: f64, theta: f64, phi: f64) -> RaySegment {
        let direction = spherical_direction(theta, phi);
        RaySegment {
            origin,
            endpoint: origin + length * direction,
        }
    }

    #[allow(dead_code)] // For testing
    pub fn length(&self) -> f64 {
        (self.endpoint - self.origin).norm()
    }
}
