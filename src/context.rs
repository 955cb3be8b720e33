use crate::camera::Camera;
use crate::mesh::{Geometry, Material, Mesh};
use crate::scene::{MeshHandle, Scene};
use crate::viewport::Viewport;

/// Packed color of the demo cube, 0xRRGGBB
pub const CUBE_COLOR: u32 = 0x777777;

/// Everything the animation loop touches, bundled into one owned value.
///
/// Construction performs the full one-time setup: empty scene, fixed
/// camera, and the single gray unit cube already inserted. Two contexts
/// never share state; each call builds a fresh scene.
#[derive(Debug)]
pub struct SceneContext {
    pub scene: Scene,
    pub camera: Camera,
    pub viewport: Viewport,
    cube: MeshHandle,
}

impl SceneContext {
    pub fn new(viewport: Viewport) -> Self {
        let mut scene = Scene::new();
        let camera = Camera::new(viewport.aspect());

        let cube = scene.add(Mesh::new(
            Geometry::unit_cube(),
            Material::from_hex(CUBE_COLOR),
        ));

        Self {
            scene,
            camera,
            viewport,
            cube,
        }
    }

    /// The one mesh this demo animates
    pub fn cube(&self) -> &Mesh {
        self.scene.mesh(self.cube)
    }

    pub fn cube_mut(&mut self) -> &mut Mesh {
        self.scene.mesh_mut(self.cube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_init_inserts_exactly_one_mesh() {
        let context = SceneContext::new(Viewport::new(800, 600));
        assert_eq!(context.scene.len(), 1);
    }

    #[test]
    fn test_cube_is_gray_and_unrotated() {
        let context = SceneContext::new(Viewport::new(800, 600));
        assert_eq!(context.cube().material, Material::from_hex(0x777777));
        assert_eq!(context.cube().rotation, Vec3::ZERO);
    }

    #[test]
    fn test_camera_matches_viewport_aspect() {
        let viewport = Viewport::new(1024, 768);
        let context = SceneContext::new(viewport);
        assert_eq!(context.camera.aspect, viewport.aspect());
        assert_eq!(context.viewport, viewport);
    }

    #[test]
    fn test_contexts_are_independent() {
        let mut first = SceneContext::new(Viewport::new(800, 600));
        let second = SceneContext::new(Viewport::new(800, 600));

        first.cube_mut().rotation.x = 3.0;

        assert_eq!(second.cube().rotation, Vec3::ZERO);
        assert_eq!(second.scene.len(), 1);
    }
}
