pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_unit_rect, Mesh};
use crate::scene::InstanceData;
use game_core::Simulation;
use glam::Vec2;
use resources::GameBuffers;
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub rect_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: GameBuffers,
    pub rect_mesh: Mesh,

    /// Scratch list rebuilt every frame
    pub instances: Vec<InstanceData>,
}

impl Renderer {
    /// `viewport` is the visible playfield in world units; it stays fixed
    /// whatever the canvas size.
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        viewport: Vec2,
        max_instances: usize,
    ) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(viewport.x, viewport.y);

        let buffers = resources::create_buffers(&ctx.device, &camera, max_instances);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let (vertices, indices) = create_unit_rect();
        let rect_mesh = Mesh::new(&ctx.device, &vertices, &indices);

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
            size: ctx.size,
            camera,
            rect_pipeline: pipes.rect_pipeline,
            camera_bind_group,
            instances: Vec::with_capacity(buffers.instance_capacity),
            buffers,
            rect_mesh,
        })
    }

    /// Reconfigure the surface for a new canvas size in pixels
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == self.size {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, sim: &Simulation) -> Result<(), String> {
        draw::draw_frame(self, sim)
    }
}
