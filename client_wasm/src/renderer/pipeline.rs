use super::shaders::RECT_SHADER;
use crate::mesh::Vertex;
use crate::scene::InstanceData;
use wgpu::*;

const VERTEX_ATTRIBUTES: [VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
// transform (x, y, width, height), then tint
const INSTANCE_ATTRIBUTES: [VertexAttribute; 2] =
    wgpu::vertex_attr_array![1 => Float32x4, 2 => Float32x4];

pub struct PipelineState {
    pub rect_pipeline: RenderPipeline,
    pub camera_layout: BindGroupLayout,
}

fn camera_layout(device: &Device) -> BindGroupLayout {
    device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Camera Bind Group Layout"),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility: ShaderStages::VERTEX,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// Build the single instanced-rectangle pipeline drawing into `format`
pub fn create_pipelines(device: &Device, format: TextureFormat) -> PipelineState {
    let camera_layout = camera_layout(device);

    let shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("Rect Shader"),
        source: ShaderSource::Wgsl(RECT_SHADER.into()),
    });

    let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Rect Pipeline Layout"),
        bind_group_layouts: &[&camera_layout],
        push_constant_ranges: &[],
    });

    let buffers = [
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRIBUTES,
        },
        VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as BufferAddress,
            step_mode: VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRIBUTES,
        },
    ];

    let rect_pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some("Rect Pipeline"),
        layout: Some(&layout),
        vertex: VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &buffers,
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            // Everything is opaque; later instances simply overwrite
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::REPLACE),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState::default(),
        depth_stencil: None,
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    PipelineState {
        rect_pipeline,
        camera_layout,
    }
}
