use glam::{EulerRot, Mat4, Vec3};

/// Vertex data uploaded to the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 1] =
        wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Shape description: vertex positions plus a triangle index list
#[derive(Debug, Clone)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Geometry {
    /// Axis-aligned box centered on the origin.
    ///
    /// Eight corners and twelve triangles, wound counter-clockwise when
    /// seen from outside so back-face culling keeps the visible faces.
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);

        let vertices = vec![
            Vertex { position: [-hw, -hh, -hd] }, // 0: left  bottom back
            Vertex { position: [hw, -hh, -hd] },  // 1: right bottom back
            Vertex { position: [hw, hh, -hd] },   // 2: right top    back
            Vertex { position: [-hw, hh, -hd] },  // 3: left  top    back
            Vertex { position: [-hw, -hh, hd] },  // 4: left  bottom front
            Vertex { position: [hw, -hh, hd] },   // 5: right bottom front
            Vertex { position: [hw, hh, hd] },    // 6: right top    front
            Vertex { position: [-hw, hh, hd] },   // 7: left  top    front
        ];

        #[rustfmt::skip]
        let indices = vec![
            4, 5, 6, 4, 6, 7, // front  (+z)
            1, 0, 3, 1, 3, 2, // back   (-z)
            5, 1, 2, 5, 2, 6, // right  (+x)
            0, 4, 7, 0, 7, 3, // left   (-x)
            7, 6, 2, 7, 2, 3, // top    (+y)
            0, 1, 5, 0, 5, 4, // bottom (-y)
        ];

        Self { vertices, indices }
    }

    pub fn unit_cube() -> Self {
        Self::cuboid(1.0, 1.0, 1.0)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Flat unlit surface color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
}

impl Material {
    pub fn flat(color: [f32; 3]) -> Self {
        Self { color }
    }

    /// 0xRRGGBB, matching the usual packed hex notation for colors
    pub fn from_hex(rgb: u32) -> Self {
        let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
        let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
        let b = (rgb & 0xff) as f32 / 255.0;
        Self { color: [r, g, b] }
    }
}

/// A renderable object: geometry, material, and a per-frame orientation.
///
/// Rotation is stored as Euler angles in radians so the animation step can
/// increment individual axes directly.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
    pub rotation: Vec3,
}

impl Mesh {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            rotation: Vec3::ZERO,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}
