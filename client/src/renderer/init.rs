use std::sync::Arc;

use tracing::info;
use wgpu::*;
use winit::window::Window;

use crate::error::ClientError;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
}

pub async fn init_wgpu(window: Arc<Window>) -> Result<WgpuContext, ClientError> {
    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::PRIMARY,
        ..Default::default()
    });

    let inner = window.inner_size();
    let surface = instance.create_surface(window)?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or(ClientError::NoAdapter)?;

    let adapter_info = adapter.get_info();
    info!(
        adapter = %adapter_info.name,
        backend = ?adapter_info.backend,
        "Graphics adapter selected"
    );

    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: MemoryHints::default(),
            },
            None,
        )
        .await?;

    let width = inner.width.max(1);
    let height = inner.height.max(1);

    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| surface_caps.formats.first().copied())
        .ok_or(ClientError::NoSurfaceFormat)?;

    // Frame pacing is done by the game loop, not by vsync
    let config = SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width,
        height,
        present_mode: PresentMode::AutoNoVsync,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);
    info!(?surface_format, width, height, "Surface configured");

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
    })
}
