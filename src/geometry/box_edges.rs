use crate::geometry::GeometryError;
use nalgebra::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpec {
    size: f64,
    center: Vector3<f64>,
}

impl BoxSpec {
    pub fn new(size: f64, center: Vector3<f64>) -> Result<BoxSpec, GeometryError> {
        if size <= 0.0 {
            return Err(GeometryError::NonPositiveBoxSize(size));
        }
        Ok(BoxSpec { size, center })
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn center(&self) -> Vector3<f64> {
        self.center
    }

    /// All combinations of center +- size/2 along each axis.
    pub fn corners(&self) -> [Vector3<f64>; 8] {
        let h = self.size / 2.0;
        let mut corners = [self.center; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            corner.x += if i & 1 == 0 { -h } else { h };
            corner.y += if i & 2 == 0 { -h } else { h };
            corner.z += if i & 4 == 0 { -h } else { h };
        }
        corners
    }
}

/// One wireframe line of the box. The endpoint order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Vector3<f64>,
    pub end: Vector3<f64>,
}

/// Enumerate the 12 wireframe edges of the box.
///
/// A pair of corners forms an edge exactly when its L1 distance equals one
/// edge length; face diagonals measure 2*size and space diagonals 3*size,
/// so the test singles out the true edges among the 28 corner pairs.
pub fn enumerate_edges(spec: &BoxSpec) -> Vec<Edge> {
    let corners = spec.corners();
    let tolerance = 1e-9 * spec.size();

    let mut edges = Vec::with_capacity(12);
    for i in 0..corners.len() {
        for j in (i + 1)..corners.len() {
            let d = corners[i] - corners[j];
            let l1 = d.x.abs() + d.y.abs() + d.z.abs();
            if (l1 - spec.size()).abs() < tolerance {
                edges.push(Edge {
                    start: corners[i],
                    end: corners[j],
                });
            }
        }
    }
    edges
}
