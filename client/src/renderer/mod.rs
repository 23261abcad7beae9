pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::camera::Camera;
use crate::error::ClientError;
use crate::mesh::{create_unit_quad, Mesh};
use game_core::{Color, Config};
use resources::{GameBuffers, InstanceData};
use tracing::debug;
use wgpu::*;
use winit::window::Window;

/// wgpu-backed [`game_core::Canvas`]; rectangles are batched between
/// `clear` and `present` and drawn as one instanced call.
pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    // Pipelines
    pub rect_pipeline: RenderPipeline,

    // Bind Groups
    pub camera_bind_group: BindGroup,

    // Resources
    pub buffers: GameBuffers,
    pub quad: Mesh,

    // Frame being built
    pub clear_color: Color,
    pub instances: Vec<InstanceData>,

    // Set when the device can no longer present
    pub lost: bool,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, config: &Config) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(config.window_width, config.window_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let (vertices, indices) = create_unit_quad();
        let quad = Mesh::new(&ctx.device, &ctx.queue, &vertices, &indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            rect_pipeline: pipes.rect_pipeline,
            camera_bind_group,
            buffers,
            quad,
            clear_color: Color::BLACK,
            instances: Vec::new(),
            lost: false,
        })
    }

    /// Reconfigure the surface for a new window size.
    /// The camera keeps the logical playfield, so the picture stretches.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        debug!(width, height, "Surface resized");
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }
}
