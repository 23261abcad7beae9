use game_core::{Canvas, Color, Rect};
use tracing::{error, warn};
use wgpu::*;

use super::resources::InstanceData;
use super::Renderer;

impl Canvas for Renderer {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.instances.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.instances.push(InstanceData::new(rect, color));
    }

    fn present(&mut self) {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                warn!("Surface lost or outdated, reconfiguring");
                self.reconfigure();
                return;
            }
            Err(SurfaceError::Timeout) => {
                warn!("Timed out acquiring surface texture, skipping frame");
                return;
            }
            Err(SurfaceError::OutOfMemory) => {
                error!("Out of memory acquiring surface texture");
                self.lost = true;
                return;
            }
            Err(e) => {
                warn!("Failed to get current texture: {:?}", e);
                return;
            }
        };
        let view = output.texture.create_view(&TextureViewDescriptor::default());

        update_buffers(self);

        let mut encoder = self.device.create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });
        render_rects(self, &mut encoder, &view);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

fn update_buffers(renderer: &mut Renderer) {
    if renderer.instances.is_empty() {
        return;
    }
    renderer
        .buffers
        .ensure_instance_capacity(&renderer.device, renderer.instances.len());
    renderer.queue.write_buffer(
        &renderer.buffers.instances,
        0,
        bytemuck::cast_slice(&renderer.instances),
    );
}

fn render_rects(renderer: &Renderer, encoder: &mut CommandEncoder, view: &TextureView) {
    let clear = renderer.clear_color;
    let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
        label: Some("Main Pass"),
        color_attachments: &[Some(RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: Operations {
                load: LoadOp::Clear(wgpu::Color {
                    r: clear.r as f64,
                    g: clear.g as f64,
                    b: clear.b as f64,
                    a: clear.a as f64,
                }),
                store: StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });

    if renderer.instances.is_empty() {
        return;
    }

    pass.set_pipeline(&renderer.rect_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(
        0..renderer.quad.index_count,
        0,
        0..renderer.instances.len() as u32,
    );
}
