use web_sys::HtmlCanvasElement;
use wgpu::*;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

/// Tints are authored as sRGB bytes; prefer a format that stores them as-is.
fn pick_format(formats: &[TextureFormat]) -> Option<TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}

pub async fn init_wgpu(canvas: HtmlCanvasElement) -> Result<WgpuContext, String> {
    let size = (canvas.width().max(1), canvas.height().max(1));

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Failed to create surface: {:?}", e))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| "Failed to find adapter".to_string())?;

    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Platformer Device"),
                required_limits: Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            },
            None,
        )
        .await
        .map_err(|e| format!("Failed to create device: {:?}", e))?;

    let mut config = surface
        .get_default_config(&adapter, size.0, size.1)
        .ok_or_else(|| "Surface is not supported by the adapter".to_string())?;
    if let Some(format) = pick_format(&surface.get_capabilities(&adapter).formats) {
        config.format = format;
    }
    config.present_mode = PresentMode::Fifo;
    surface.configure(&device, &config);

    log::info!("surface {}x{} using {:?}", size.0, size.1, config.format);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size,
    })
}
