//! Mesh generation for Pong
//!
//! Everything on screen is a rectangle, so the only mesh is a unit quad that
//! the instance data scales and moves.

use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

/// Unit quad spanning (0,0) to (1,1)
pub fn create_unit_quad() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex {
            position: [0.0, 0.0],
        },
        Vertex {
            position: [1.0, 0.0],
        },
        Vertex {
            position: [1.0, 1.0],
        },
        Vertex {
            position: [0.0, 1.0],
        },
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];

    (vertices, indices)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, queue: &Queue, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer(&BufferDescriptor {
            label: Some("Vertex Buffer"),
            size: std::mem::size_of_val(vertices) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(vertices));

        let index_buffer = device.create_buffer(&BufferDescriptor {
            label: Some("Index Buffer"),
            size: std::mem::size_of_val(indices) as u64,
            usage: BufferUsages::INDEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&index_buffer, 0, bytemuck::cast_slice(indices));

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}
