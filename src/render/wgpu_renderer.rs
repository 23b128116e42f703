use std::sync::Arc;

use anyhow::{Result, anyhow};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::render::shader::{self, RectUniform, UNIT_QUAD};
use crate::render::{color_to_array, color_to_wgpu, rect_transform};
use crate::traits::render::{Color, RectBackend};

/// GPU-backed rect renderer using wgpu.
///
/// Every rect in a frame goes through one pipeline and one shared unit-square
/// vertex buffer; rects differ only by their 64-byte uniform block, stored at
/// aligned slots of a single uniform buffer and selected per draw with a
/// dynamic offset. Draws execute in submission order within the frame's one
/// render pass.
pub struct WgpuRectRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,

    pipeline: wgpu::RenderPipeline,
    uniform_bind_group_layout: wgpu::BindGroupLayout,
    vertex_buffer: wgpu::Buffer,
    uniform_stride: u64,

    pending: Vec<RectUniform>,
    current_frame: Option<wgpu::SurfaceTexture>,

    clear_color: Color,
    screen_width: u32,
    screen_height: u32,
}

impl WgpuRectRenderer {
    /// Create a renderer for the given window. Absence of a suitable adapter
    /// or device is a fatal startup error.
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| anyhow!("failed to create surface: {e}"))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("failed to find a suitable GPU adapter"))?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("fretfall_device"),
                    ..Default::default()
                },
                None,
            )
            .await
            .map_err(|e| anyhow!("failed to create device: {e}"))?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &surface_config);

        let uniform_bind_group_layout = shader::create_rect_bind_group_layout(&device);
        let pipeline = shader::create_rect_pipeline(&device, format, &uniform_bind_group_layout);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("unit_quad"),
            contents: bytemuck::cast_slice(&UNIT_QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let align = u64::from(device.limits().min_uniform_buffer_offset_alignment);
        let uniform_size = std::mem::size_of::<RectUniform>() as u64;
        let uniform_stride = uniform_size.div_ceil(align) * align;

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            pipeline,
            uniform_bind_group_layout,
            vertex_buffer,
            uniform_stride,
            pending: Vec::new(),
            current_frame: None,
            clear_color: Color::BLACK,
            screen_width: size.width,
            screen_height: size.height,
        })
    }

    /// Pack pending uniform blocks into one buffer at aligned slots.
    fn pack_uniforms(&self) -> Vec<u8> {
        let stride = self.uniform_stride as usize;
        let mut bytes = vec![0u8; self.pending.len() * stride];
        for (i, uniform) in self.pending.iter().enumerate() {
            let start = i * stride;
            let data = bytemuck::bytes_of(uniform);
            bytes[start..start + data.len()].copy_from_slice(data);
        }
        bytes
    }
}

impl RectBackend for WgpuRectRenderer {
    fn begin_frame(&mut self) -> Result<()> {
        let frame = self
            .surface
            .get_current_texture()
            .map_err(|e| anyhow!("failed to get surface texture: {e}"))?;
        self.current_frame = Some(frame);
        self.pending.clear();
        Ok(())
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) -> Result<()> {
        if self.current_frame.is_none() {
            return Err(anyhow!("draw_rect called outside a frame"));
        }
        self.pending.push(RectUniform {
            transform: rect_transform(
                x,
                y,
                width,
                height,
                self.screen_width as f32,
                self.screen_height as f32,
            ),
            color: color_to_array(color),
        });
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        let Some(frame) = self.current_frame.take() else {
            return Err(anyhow!("end_frame called outside a frame"));
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniform_size = std::mem::size_of::<RectUniform>() as u64;
        let bind_group = if self.pending.is_empty() {
            None
        } else {
            let uniform_buffer =
                self.device
                    .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("rect_uniforms"),
                        contents: &self.pack_uniforms(),
                        usage: wgpu::BufferUsages::UNIFORM,
                    });
            let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("rect_uniform_bind_group"),
                layout: &self.uniform_bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: &uniform_buffer,
                        offset: 0,
                        size: wgpu::BufferSize::new(uniform_size),
                    }),
                }],
            });
            Some((uniform_buffer, bind_group))
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("rect_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rect_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(color_to_wgpu(self.clear_color)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            if let Some((_, ref bind_group)) = bind_group {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                for i in 0..self.pending.len() {
                    let offset = (i as u64 * self.uniform_stride) as wgpu::DynamicOffset;
                    render_pass.set_bind_group(0, bind_group, &[offset]);
                    render_pass.draw(0..UNIT_QUAD.len() as u32, 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        self.pending.clear();
        Ok(())
    }

    fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.screen_width = width;
        self.screen_height = height;
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }
}
