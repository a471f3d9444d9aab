use crate::rendering::renderer::{RenderError, SceneRenderer};
use crate::scene::scene::SceneBuilder;
use log::debug;

/// Raw slider ranges of the original controls: [0, 314] for theta and
/// [0, 628] for phi, both scaled by 1/100. The division is always by
/// exactly 100.0, not by the range maximum, so the angular ranges are the
/// slightly imprecise [0, 3.14] and [0, 6.28].
pub const THETA_RAW_MAX: i64 = 314;
pub const PHI_RAW_MAX: i64 = 628;
pub const RAW_SCALE: f64 = 100.0;

pub const DEFAULT_THETA_RAW: i64 = 157;
pub const DEFAULT_PHI_RAW: i64 = 314;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderAxis {
    Theta,
    Phi,
}

impl SliderAxis {
    pub fn raw_max(&self) -> i64 {
        match self {
            SliderAxis::Theta => THETA_RAW_MAX,
            SliderAxis::Phi => PHI_RAW_MAX,
        }
    }
}

/// The controller's mutable state, always updated as a pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalAngles {
    pub theta: f64,
    pub phi: f64,
}

impl Default for SphericalAngles {
    fn default() -> Self {
        SphericalAngles::from_raw(DEFAULT_THETA_RAW, DEFAULT_PHI_RAW)
    }
}

impl SphericalAngles {
    pub fn from_raw(theta_raw: i64, phi_raw: i64) -> SphericalAngles {
        let mut angles = SphericalAngles {
            theta: 0.0,
            phi: 0.0,
        };
        angles.set_raw(SliderAxis::Theta, theta_raw);
        angles.set_raw(SliderAxis::Phi, phi_raw);
        angles
    }

    /// Apply one raw slider value. Out-of-range values are clamped into the
    /// raw range rather than rejected.
    pub fn set_raw(&mut self, axis: SliderAxis, raw: i64) {
        let value = raw.clamp(0, axis.raw_max()) as f64 / RAW_SCALE;
        match axis {
            SliderAxis::Theta => self.theta = value,
            SliderAxis::Phi => self.phi = value,
        }
    }
}

/// Owns the session's angle state and drives the renderer.
///
/// Every parameter event updates one angle, rebuilds the scene and hands it
/// to the renderer synchronously, on the caller's thread.
pub struct Controller<R: SceneRenderer> {
    angles: SphericalAngles,
    builder: SceneBuilder,
    renderer: R,
}

impl<R: SceneRenderer> Controller<R> {
    #[allow(dead_code)] // For testing
    pub fn new(builder: SceneBuilder, renderer: R) -> Controller<R> {
        Controller::with_initial(builder, renderer, SphericalAngles::default())
    }

    pub fn with_initial(
        builder: SceneBuilder,
        renderer: R,
        angles: SphericalAngles,
    ) -> Controller<R> {
        Controller {
            angles,
            builder,
            renderer,
        }
    }

    #[allow(dead_code)] // For testing
    pub fn angles(&self) -> SphericalAngles {
        self.angles
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn parameter_changed(&mut self, axis: SliderAxis, raw: i64) -> Result<(), RenderError> {
        self.angles.set_raw(axis, raw);
        debug!(
            "{:?} slider moved to {}, angles now ({}, {})",
            axis, raw, self.angles.theta, self.angles.phi
        );
        self.redraw()
    }

    /// Rebuild and draw with the current angles, without changing them.
    pub fn redraw(&mut self) -> Result<(), RenderError> {
        let scene = self.builder.build(self.angles);
        self.renderer.draw(&scene)
    }
}

#[cfg(test)]
mod tests {
    use crate::configuration::SceneConfig;
    use crate::rendering::renderer::{RenderError, SceneRenderer};
    use crate::scene::controller::{Controller, SliderAxis, SphericalAngles};
    use crate::scene::scene::{Scene, SceneBuilder};
    use approx::assert_abs_diff_eq;

    /// Captures every scene the controller publishes.
    struct RecordingRenderer {
        frames: Vec<Scene>,
    }

    impl RecordingRenderer {
        fn new() -> Self {
            RecordingRenderer { frames: Vec::new() }
        }
    }

    impl SceneRenderer for RecordingRenderer {
        fn draw(&mut self, scene: &Scene) -> Result<(), RenderError> {
            self.frames.push(scene.clone());
            Ok(())
        }
    }

    fn small_controller() -> Controller<RecordingRenderer> {
        let config = SceneConfig {
            lat_steps: 10,
            lon_steps: 10,
            ..SceneConfig::default()
        };
        let builder = SceneBuilder::from_config(&config).unwrap();
        Controller::new(builder, RecordingRenderer::new())
    }

    #[test]
    fn test_default_angles_match_initial_slider_positions() {
        let angles = SphericalAngles::default();
        assert_abs_diff_eq!(angles.theta, 1.57);
        assert_abs_diff_eq!(angles.phi, 3.14);
    }

    #[test]
    fn test_raw_values_scale_by_one_hundred() {
        let mut angles = SphericalAngles::default();
        angles.set_raw(SliderAxis::Theta, 157);
        assert_abs_diff_eq!(angles.theta, 1.57);
        angles.set_raw(SliderAxis::Phi, 628);
        assert_abs_diff_eq!(angles.phi, 6.28);
    }

    #[test]
    fn test_out_of_range_raw_values_are_clamped() {
        let mut angles = SphericalAngles::default();
        angles.set_raw(SliderAxis::Theta, -5);
        assert_abs_diff_eq!(angles.theta, 0.0);
        angles.set_raw(SliderAxis::Theta, 999);
        assert_abs_diff_eq!(angles.theta, 3.14);
        angles.set_raw(SliderAxis::Phi, 700);
        assert_abs_diff_eq!(angles.phi, 6.28);
    }

    #[test]
    fn test_each_event_publishes_exactly_one_scene() {
        let mut controller = small_controller();
        controller.parameter_changed(SliderAxis::Theta, 100).unwrap();
        controller.parameter_changed(SliderAxis::Phi, 200).unwrap();
        assert_eq!(controller.renderer_mut().frames.len(), 2);
    }

    #[test]
    fn test_repeated_events_yield_identical_geometry() {
        let mut controller = small_controller();
        controller.parameter_changed(SliderAxis::Phi, 300).unwrap();
        controller.parameter_changed(SliderAxis::Phi, 300).unwrap();

        let frames = &controller.renderer_mut().frames;
        assert_eq!(frames[0], frames[1]);
    }

    #[test]
    fn test_redraw_publishes_without_changing_angles() {
        let mut controller = small_controller();
        let before = controller.angles();
        controller.redraw().unwrap();
        assert_eq!(controller.angles(), before);
        assert_eq!(controller.renderer_mut().frames.len(), 1);
    }

    #[test]
    fn test_changing_one_axis_keeps_the_other() {
        let mut controller = small_controller();
        controller.parameter_changed(SliderAxis::Theta, 50).unwrap();

        let angles = controller.angles();
        assert_abs_diff_eq!(angles.theta, 0.5);
        assert_abs_diff_eq!(angles.phi, 3.14);
    }
}
