use glam::{Mat4, Vec3};

pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Perspective camera: a fixed projection plus a position in world space.
///
/// The aspect ratio is captured at construction and never updated
/// afterwards, so resizing the window stretches the image.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera at (0, 0, 5) looking down -Z with the demo's fixed projection
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            fov_y_degrees: FOV_Y_DEGREES,
            aspect,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position - Vec3::Z, Vec3::Y)
    }

    /// Combined matrix handed to the renderer each frame
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
