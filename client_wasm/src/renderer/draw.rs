use super::Renderer;
use crate::camera::CameraUniform;
use crate::scene::{build_instances, BACKGROUND};
use game_core::Simulation;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, sim: &Simulation) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one draws to the fresh surface
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let instance_count = update_buffers(renderer, sim);

    {
        let [r, g, b, a] = BACKGROUND;
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color { r, g, b, a }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.rect_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
        pass.set_vertex_buffer(0, renderer.rect_mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(renderer.rect_mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
        pass.draw_indexed(0..renderer.rect_mesh.index_count, 0, 0..instance_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Upload the camera and this frame's rectangles; returns the instance count.
fn update_buffers(renderer: &mut Renderer, sim: &Simulation) -> u32 {
    renderer.camera.set_offset(sim.camera_x());
    let camera_uniform = CameraUniform::from_camera(&renderer.camera);
    renderer.queue.write_buffer(
        &renderer.buffers.camera,
        0,
        bytemuck::cast_slice(&[camera_uniform]),
    );

    build_instances(sim, &mut renderer.instances);
    if renderer.instances.len() > renderer.buffers.instance_capacity {
        log::warn!(
            "dropping {} instances over capacity",
            renderer.instances.len() - renderer.buffers.instance_capacity
        );
        renderer.instances.truncate(renderer.buffers.instance_capacity);
    }
    if !renderer.instances.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.instances,
            0,
            bytemuck::cast_slice(&renderer.instances),
        );
    }

    renderer.instances.len() as u32
}
