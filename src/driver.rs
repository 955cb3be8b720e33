use crate::camera::Camera;
use crate::context::SceneContext;
use crate::scene::Scene;

/// Radians added to the cube's X and Y rotation every frame
pub const ROTATION_STEP: f32 = 0.01;

/// Anything a frame can be drawn onto.
///
/// The on-screen implementation is [`crate::renderer::CubeRenderer`];
/// tests substitute a recorder so the loop runs without a display.
pub trait RenderTarget {
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// Owns the scene context and advances it once per display refresh.
///
/// The driver never schedules itself; whoever owns the event loop calls
/// [`FrameDriver::step`] once per frame. Before [`FrameDriver::start`] a
/// step is a no-op.
#[derive(Debug)]
pub struct FrameDriver {
    context: SceneContext,
    state: DriverState,
    frames: u64,
}

impl FrameDriver {
    pub fn new(context: SceneContext) -> Self {
        Self {
            context,
            state: DriverState::Idle,
            frames: 0,
        }
    }

    /// Idle -> Running; repeated calls are harmless
    pub fn start(&mut self) {
        self.state = DriverState::Running;
    }

    /// Halts stepping; nothing in the demo calls this, tests do
    pub fn stop(&mut self) {
        self.state = DriverState::Idle;
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Frames submitted since construction
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn context(&self) -> &SceneContext {
        &self.context
    }

    /// Advance the animation one frame and draw it.
    ///
    /// Rotates the cube by [`ROTATION_STEP`] about X and Y, then submits
    /// the scene and camera to the target.
    pub fn step(&mut self, target: &mut impl RenderTarget) -> Result<(), wgpu::SurfaceError> {
        if self.state != DriverState::Running {
            return Ok(());
        }

        let cube = self.context.cube_mut();
        cube.rotation.x += ROTATION_STEP;
        cube.rotation.y += ROTATION_STEP;

        target.render(&self.context.scene, &self.context.camera)?;
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;

    /// Counts render calls instead of drawing
    struct NullTarget {
        renders: usize,
    }

    impl NullTarget {
        fn new() -> Self {
            Self { renders: 0 }
        }
    }

    impl RenderTarget for NullTarget {
        fn render(&mut self, _scene: &Scene, _camera: &Camera) -> Result<(), wgpu::SurfaceError> {
            self.renders += 1;
            Ok(())
        }
    }

    fn running_driver() -> FrameDriver {
        let mut driver = FrameDriver::new(SceneContext::new(Viewport::new(800, 600)));
        driver.start();
        driver
    }

    #[test]
    fn test_driver_starts_idle() {
        let driver = FrameDriver::new(SceneContext::new(Viewport::new(800, 600)));
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn test_idle_step_does_nothing() {
        let mut driver = FrameDriver::new(SceneContext::new(Viewport::new(800, 600)));
        let mut target = NullTarget::new();

        driver.step(&mut target).unwrap();

        assert_eq!(target.renders, 0);
        assert_eq!(driver.frames(), 0);
        assert_eq!(driver.context().cube().rotation.x, 0.0);
    }

    #[test]
    fn test_single_step_rotates_by_fixed_increment() {
        let mut driver = running_driver();
        let mut target = NullTarget::new();

        driver.step(&mut target).unwrap();

        let rotation = driver.context().cube().rotation;
        assert_eq!(rotation.x, 0.01);
        assert_eq!(rotation.y, 0.01);
        assert_eq!(rotation.z, 0.0);
        assert_eq!(target.renders, 1);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut driver = running_driver();
        driver.start();
        assert_eq!(driver.state(), DriverState::Running);

        let mut target = NullTarget::new();
        driver.step(&mut target).unwrap();
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn test_stop_halts_animation() {
        let mut driver = running_driver();
        let mut target = NullTarget::new();

        driver.step(&mut target).unwrap();
        driver.stop();
        driver.step(&mut target).unwrap();

        assert_eq!(driver.frames(), 1);
        assert_eq!(target.renders, 1);
        assert_eq!(driver.context().cube().rotation.x, 0.01);
    }
}
