use nalgebra::Vector3;

// Physics convention: theta is measured from the positive z-axis,
// phi in the xy-plane from the positive x-axis.
pub fn spherical_direction(theta: f64, phi: f64) -> Vector3<f64> {
    Vector3::new(
        theta.sin() * phi.cos(),
        theta.sin() * phi.sin(),
        theta.cos(),
    )
}
