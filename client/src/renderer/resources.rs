use crate::camera::{Camera, CameraUniform};
use game_core::{Color, Rect};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Initial room in the instance buffer: two paddles and a ball, with headroom
pub const INITIAL_INSTANCE_CAPACITY: usize = 8;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub rect: [f32; 4], // x, y, width, height
    pub tint: [f32; 4], // rgba
}

impl InstanceData {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self {
            rect: [rect.pos.x, rect.pos.y, rect.size.x, rect.size.y],
            tint: color.to_array(),
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub instance_capacity: usize,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        instances: create_instance_buffer(device, INITIAL_INSTANCE_CAPACITY),
        instance_capacity: INITIAL_INSTANCE_CAPACITY,
    }
}

pub fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Rect Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl GameBuffers {
    /// Grow the instance buffer so it holds at least `count` rectangles
    pub fn ensure_instance_capacity(&mut self, device: &Device, count: usize) {
        if count <= self.instance_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        self.instances = create_instance_buffer(device, capacity);
        self.instance_capacity = capacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_instance_from_rect() {
        let rect = Rect::new(Vec2::new(20.0, 30.0), Vec2::new(10.0, 50.0));
        let instance = InstanceData::new(rect, Color::WHITE);
        assert_eq!(instance.rect, [20.0, 30.0, 10.0, 50.0]);
        assert_eq!(instance.tint, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_instance_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 32);
    }
}
