use crate::mesh::Mesh;

/// Opaque handle to a mesh inside a [`Scene`].
///
/// Handles are only meaningful for the scene that issued them; meshes are
/// never removed, so a handle stays valid for the scene's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshHandle(usize);

/// Unordered container of renderable objects plus ambient configuration
#[derive(Debug)]
pub struct Scene {
    pub background: [f32; 3],
    meshes: Vec<Mesh>,
}

impl Scene {
    /// Empty scene with a black background
    pub fn new() -> Self {
        Self {
            background: [0.0, 0.0, 0.0],
            meshes: Vec::new(),
        }
    }

    /// Insert a mesh; the scene owns it from here on
    pub fn add(&mut self, mesh: Mesh) -> MeshHandle {
        self.meshes.push(mesh);
        MeshHandle(self.meshes.len() - 1)
    }

    pub fn mesh(&self, handle: MeshHandle) -> &Mesh {
        &self.meshes[handle.0]
    }

    pub fn mesh_mut(&mut self, handle: MeshHandle) -> &mut Mesh {
        &mut self.meshes[handle.0]
    }

    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.meshes.iter()
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
