pub mod box_edges;
pub mod hemisphere;
pub mod spherical;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("box size must be positive, got {0}")]
    NonPositiveBoxSize(f64),
    #[error("hemisphere radius must be positive, got {0}")]
    NonPositiveRadius(f64),
}
