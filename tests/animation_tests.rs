use spincube::camera::Camera;
use spincube::driver::{DriverState, ROTATION_STEP};
use spincube::scene::Scene;
use spincube::{FrameDriver, RenderTarget, SceneContext, Viewport};

/// Render target that records what it was asked to draw
struct RecordingTarget {
    renders: usize,
    last_mesh_count: usize,
    last_rotation: Option<glam::Vec3>,
}

impl RecordingTarget {
    fn new() -> Self {
        Self {
            renders: 0,
            last_mesh_count: 0,
            last_rotation: None,
        }
    }
}

impl RenderTarget for RecordingTarget {
    fn render(&mut self, scene: &Scene, _camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        self.renders += 1;
        self.last_mesh_count = scene.len();
        self.last_rotation = scene.meshes().next().map(|m| m.rotation);
        Ok(())
    }
}

fn started_driver() -> FrameDriver {
    let mut driver = FrameDriver::new(SceneContext::new(Viewport::new(800, 600)));
    driver.start();
    driver
}

#[test]
fn test_one_step_yields_exact_rotation() {
    let mut driver = started_driver();
    let mut target = RecordingTarget::new();

    driver.step(&mut target).unwrap();

    let rotation = driver.context().cube().rotation;
    assert_eq!(rotation.x, 0.01);
    assert_eq!(rotation.y, 0.01);
}

#[test]
fn test_hundred_steps_accumulate_linearly() {
    let mut driver = started_driver();
    let mut target = RecordingTarget::new();

    for _ in 0..100 {
        driver.step(&mut target).unwrap();
    }

    let rotation = driver.context().cube().rotation;
    assert!((rotation.x - 1.0).abs() < 1e-4);
    assert!((rotation.y - 1.0).abs() < 1e-4);
    assert_eq!(driver.frames(), 100);
    assert_eq!(target.renders, 100);
}

#[test]
fn test_step_count_matches_rotation_for_small_n() {
    for n in [1_u32, 2, 5, 10] {
        let mut driver = started_driver();
        let mut target = RecordingTarget::new();

        for _ in 0..n {
            driver.step(&mut target).unwrap();
        }

        let expected = n as f32 * ROTATION_STEP;
        let rotation = driver.context().cube().rotation;
        assert!((rotation.x - expected).abs() < 1e-6);
        assert!((rotation.y - expected).abs() < 1e-6);
    }
}

#[test]
fn test_every_step_submits_the_same_single_mesh() {
    let mut driver = started_driver();
    let mut target = RecordingTarget::new();

    for i in 1..=10 {
        driver.step(&mut target).unwrap();
        assert_eq!(target.last_mesh_count, 1, "no meshes appear or vanish");
        // The rendered mesh carries the accumulated rotation, so it is
        // the same object mutated each frame, not a fresh one.
        let rotation = target.last_rotation.unwrap();
        assert!((rotation.x - i as f32 * ROTATION_STEP).abs() < 1e-5);
    }
}

#[test]
fn test_driver_lifecycle() {
    let mut driver = FrameDriver::new(SceneContext::new(Viewport::new(800, 600)));
    let mut target = RecordingTarget::new();

    assert_eq!(driver.state(), DriverState::Idle);
    driver.step(&mut target).unwrap();
    assert_eq!(target.renders, 0, "idle driver must not render");

    driver.start();
    assert_eq!(driver.state(), DriverState::Running);
    driver.step(&mut target).unwrap();
    assert_eq!(target.renders, 1);

    driver.stop();
    driver.step(&mut target).unwrap();
    assert_eq!(target.renders, 1, "stopped driver must not render");
    assert_eq!(driver.frames(), 1);
}

#[test]
fn test_render_failure_does_not_advance_frame_count() {
    struct FailingTarget;

    impl RenderTarget for FailingTarget {
        fn render(&mut self, _: &Scene, _: &Camera) -> Result<(), wgpu::SurfaceError> {
            Err(wgpu::SurfaceError::Lost)
        }
    }

    let mut driver = started_driver();
    let result = driver.step(&mut FailingTarget);

    assert!(result.is_err());
    assert_eq!(driver.frames(), 0);
    // The rotation step happened before the failed submit, mirroring the
    // original loop where the mutation precedes the render call.
    assert_eq!(driver.context().cube().rotation.x, 0.01);
}
