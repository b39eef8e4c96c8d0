use anyhow::Result;
use wgpu::util::DeviceExt;

use crate::geometry::{MeshData, TriMesh};

/// GPU-resident mesh: vertex buffer, `u32` index buffer and index count.
pub struct Geometry {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    num_indices: u32,
}

impl Geometry {
    pub fn new(device: &wgpu::Device, data: &MeshData) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("facet mesh vbo"),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("facet mesh ibo"),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded mesh: {} vertices, {} indices",
            data.vertices.len(),
            data.num_indices()
        );

        Self {
            vertices,
            indices,
            num_indices: data.num_indices(),
        }
    }

    /// Flattens and uploads `mesh`.
    pub fn from_tri_mesh(device: &wgpu::Device, mesh: &TriMesh) -> Result<Self> {
        let data = MeshData::from_tri_mesh(mesh)?;
        Ok(Self::new(device, &data))
    }

    #[inline]
    pub fn vertices(&self) -> &wgpu::Buffer {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &wgpu::Buffer {
        &self.indices
    }

    #[inline]
    pub fn num_indices(&self) -> u32 {
        self.num_indices
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_indices == 0
    }
}
