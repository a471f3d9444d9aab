use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How long the cast ray is. The two session variants of the original
/// visualization differ here: one keeps the ray inside the hemisphere, the
/// other stretches it across the whole box.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayLength {
    HemisphereRadius,
    BoxSize,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Edge length of the bounding box.
    pub box_size: f64,
    /// Hemisphere radius as a fraction of the box size.
    pub radius_fraction: f64,
    /// Mesh samples along the latitude axis.
    pub lat_steps: usize,
    /// Mesh samples along the longitude axis.
    pub lon_steps: usize,
    /// Initial polar-angle slider position, raw range [0, 314].
    pub initial_theta_raw: i64,
    /// Initial azimuth slider position, raw range [0, 628].
    pub initial_phi_raw: i64,
    pub ray_length: RayLength,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            box_size: 1.0,
            radius_fraction: 1.0 / 5.0,
            lat_steps: 100,
            lon_steps: 100,
            initial_theta_raw: 157,
            initial_phi_raw: 314,
            ray_length: RayLength::HemisphereRadius,
        }
    }
}

impl SceneConfig {
    pub fn load(path: &Path) -> Result<SceneConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn hemisphere_radius(&self) -> f64 {
        self.box_size * self.radius_fraction
    }
}
