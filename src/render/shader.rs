//! The single pipeline every visual element shares: one vertex shader applying
//! a per-rect affine transform to a unit square, one fragment shader emitting
//! a flat color. Per-rect data arrives as a small uniform block selected with
//! a dynamic offset.

/// Per-rect uniform block: padded column-major mat3x3 plus RGBA color.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RectUniform {
    pub transform: [[f32; 4]; 3],
    pub color: [f32; 4],
}

/// Vertex of the shared unit-square buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RectVertex {
    pub position: [f32; 2],
}

/// Two triangles covering the unit square.
pub const UNIT_QUAD: [RectVertex; 6] = [
    RectVertex { position: [0.0, 0.0] },
    RectVertex { position: [1.0, 0.0] },
    RectVertex { position: [0.0, 1.0] },
    RectVertex { position: [0.0, 1.0] },
    RectVertex { position: [1.0, 0.0] },
    RectVertex { position: [1.0, 1.0] },
];

pub const RECT_SHADER: &str = r#"
struct RectUniform {
    transform: mat3x3<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0) var<uniform> rect: RectUniform;

@vertex
fn vs_main(@location(0) position: vec2<f32>) -> @builtin(position) vec4<f32> {
    let transformed = rect.transform * vec3<f32>(position, 1.0);
    return vec4<f32>(transformed.xy, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return rect.color;
}
"#;

impl RectVertex {
    /// Vertex buffer layout for the rect pipeline.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Bind group layout for the per-rect uniform block, bound with a dynamic
/// offset so one buffer serves every draw in a frame.
pub fn create_rect_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("rect_uniform_layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: wgpu::BufferSize::new(
                    std::mem::size_of::<RectUniform>() as u64
                ),
            },
            count: None,
        }],
    })
}

/// Build the shared alpha-blended rect pipeline for the given surface format.
pub fn create_rect_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    uniform_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("rect_shader"),
        source: wgpu::ShaderSource::Wgsl(RECT_SHADER.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("rect_pipeline_layout"),
        bind_group_layouts: &[uniform_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("rect_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[RectVertex::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_uniform_matches_wgsl_block_size() {
        // mat3x3<f32> occupies 48 bytes under std140-style column padding,
        // followed by a 16-byte vec4 color.
        assert_eq!(std::mem::size_of::<RectUniform>(), 64);
    }

    #[test]
    fn unit_quad_covers_the_unit_square() {
        for v in UNIT_QUAD {
            assert!((0.0..=1.0).contains(&v.position[0]));
            assert!((0.0..=1.0).contains(&v.position[1]));
        }
        assert_eq!(UNIT_QUAD.len(), 6);
    }
}
