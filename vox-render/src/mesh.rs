use glam::Vec3;
use vox_core::voxel::VoxelVertex;

/// Interleaved position + color, laid out as the point shader expects it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl From<VoxelVertex> for GpuVertex {
    fn from(vertex: VoxelVertex) -> Self {
        Self {
            position: vertex.position,
            color: vertex.color,
        }
    }
}

/// A vertex attribute inside one [`GpuVertex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: &'static str,
    pub offset: usize,
    pub components: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Radius of the bounding sphere around [`Bounds::center`].
    pub fn radius(&self) -> f32 {
        self.size().length() * 0.5
    }
}

/// Point-primitive mesh built once from the voxelizer output.
#[derive(Debug, Clone, Default)]
pub struct PointMesh {
    vertices: Vec<GpuVertex>,
    bounds: Option<Bounds>,
}

impl PointMesh {
    pub const STRIDE: usize = std::mem::size_of::<GpuVertex>();

    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            name: "position",
            offset: 0,
            components: 3,
        },
        VertexAttribute {
            name: "color",
            offset: 4 * 3,
            components: 3,
        },
    ];

    pub fn new(vertices: Vec<VoxelVertex>) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);

        let vertices: Vec<GpuVertex> = vertices
            .into_iter()
            .map(|vertex| {
                let position = Vec3::from_array(vertex.position);
                min = min.min(position);
                max = max.max(position);
                GpuVertex::from(vertex)
            })
            .collect();

        let bounds = (!vertices.is_empty()).then_some(Bounds { min, max });
        log::debug!(
            "built point mesh: {} vertices, {} bytes, bounds {:?}",
            vertices.len(),
            vertices.len() * Self::STRIDE,
            bounds
        );

        Self { vertices, bounds }
    }

    pub fn vertices(&self) -> &[GpuVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
