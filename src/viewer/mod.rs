//! Viewer — the desktop window host.
//!
//! Opens a fixed-size window and drives the paint loop: every redraw request
//! draws the scene onto a fresh `Canvas`, rasterizes the recorded commands,
//! and blits the resulting pixmap to the window surface through a textured
//! quad. All toolkit and GPU plumbing lives here; the viewer makes no drawing
//! decisions of its own and treats the rasterized frame as authoritative.
//!
//! The loop is purely event-driven: no background work, no animation, no
//! repaint unless the toolkit asks for one.

use std::sync::Arc;

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use crate::canvas::Canvas;
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::types::{Pixmap, SurfaceContract};

/// Quad vertex: clip-space position plus texture coordinate.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    pos: [f32; 2],
    uv: [f32; 2],
}

/// Two triangles covering the whole surface, frame texture mapped 1:1.
fn vertex_data() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex {
            pos: [-1.0, -1.0],
            uv: [0.0, 1.0],
        },
        Vertex {
            pos: [1.0, -1.0],
            uv: [1.0, 1.0],
        },
        Vertex {
            pos: [1.0, 1.0],
            uv: [1.0, 0.0],
        },
        Vertex {
            pos: [-1.0, 1.0],
            uv: [0.0, 0.0],
        },
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];
    (vertices, indices)
}

/// GPU-side home of the rasterized frame, re-uploaded on every paint.
struct FrameTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl FrameTexture {
    fn new(device: &wgpu::Device, contract: SurfaceContract) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("frame-texture"),
            size: wgpu::Extent3d {
                width: contract.width,
                height: contract.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        FrameTexture {
            texture,
            view,
            width: contract.width,
            height: contract.height,
        }
    }

    fn upload(&self, queue: &wgpu::Queue, pixmap: &Pixmap) {
        debug_assert_eq!((pixmap.width(), pixmap.height()), (self.width, self.height));

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixmap.as_bytes(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(self.width * 4),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
    }

    fn bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame-texture-bind-group-layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        })
    }

    fn bind_group(&self, device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> wgpu::BindGroup {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("frame-texture-sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame-texture-bind-group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&self.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        })
    }
}

pub struct Viewer {
    scene: Scene,
    contract: SurfaceContract,
    title: String,
}

impl Viewer {
    pub fn new(scene: Scene, contract: SurfaceContract, title: &str) -> Self {
        Viewer {
            scene,
            contract,
            title: title.to_string(),
        }
    }

    /// Open the window and run the event loop until the user closes it
    /// (window close button, `Esc`, or `q`).
    pub fn run(self) -> Result<()> {
        let Viewer {
            scene,
            contract,
            title,
        } = self;

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let window = WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(LogicalSize::new(
                f64::from(contract.width),
                f64::from(contract.height),
            ))
            .with_resizable(false)
            .build(&event_loop)
            .context("failed to create window")?;
        let window = Arc::new(window);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(&*window)
            .context("failed to create window surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .context("no suitable GPU adapter found")?;
        log::info!("using adapter: {}", adapter.get_info().name);

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("viewer-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            },
            None,
        ))
        .context("failed to create GPU device")?;

        let size = window.inner_size();
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let mut config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: caps.present_modes[0],
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 1,
        };
        surface.configure(&device, &config);

        // Pipeline for the textured quad.
        let texture_bgl = FrameTexture::bind_group_layout(&device);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("blit-shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("blit.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("blit-pipeline-layout"),
            bind_group_layouts: &[&texture_bgl],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("blit-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x2,
                        },
                        wgpu::VertexAttribute {
                            offset: 8,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32x2,
                        },
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let (vertices, indices) = vertex_data();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("blit-vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("blit-indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let index_count = indices.len() as u32;

        let frame_texture = FrameTexture::new(&device, contract);
        let bind_group = frame_texture.bind_group(&device, &texture_bgl);

        // First paint; later ones arrive from the toolkit (expose, DPI).
        window.request_redraw();

        let window_handle = window.clone();
        event_loop
            .run(move |event, elwt| {
                elwt.set_control_flow(ControlFlow::Wait);

                let Event::WindowEvent { event, .. } = event else {
                    return;
                };
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::KeyboardInput { event: key, .. }
                        if key.state == ElementState::Pressed =>
                    {
                        match key.logical_key.as_ref() {
                            Key::Named(NamedKey::Escape) | Key::Character("q") => elwt.exit(),
                            _ => {}
                        }
                    }
                    WindowEvent::Resized(new_size) => {
                        // The window is non-resizable, but initial-size and
                        // DPI events still arrive here.
                        config.width = new_size.width.max(1);
                        config.height = new_size.height.max(1);
                        surface.configure(&device, &config);
                        window_handle.request_redraw();
                    }
                    WindowEvent::RedrawRequested => {
                        // The paint sequence. The canvas lives for exactly
                        // one event.
                        let mut canvas = Canvas::new();
                        scene.draw_all(&mut canvas);
                        let pixmap = Renderer::render(canvas.commands(), contract);
                        log::debug!("painted {} commands", canvas.commands().len());
                        frame_texture.upload(&queue, &pixmap);

                        let frame = match surface.get_current_texture() {
                            Ok(frame) => frame,
                            Err(_) => {
                                // Lost or outdated surface: reconfigure and
                                // repaint on the next pass.
                                surface.configure(&device, &config);
                                window_handle.request_redraw();
                                return;
                            }
                        };
                        let view = frame
                            .texture
                            .create_view(&wgpu::TextureViewDescriptor::default());

                        let mut encoder =
                            device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("blit-encoder"),
                            });
                        {
                            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("blit-pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                occlusion_query_set: None,
                                timestamp_writes: None,
                            });
                            rpass.set_pipeline(&pipeline);
                            rpass.set_bind_group(0, &bind_group, &[]);
                            rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
                            rpass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                            rpass.draw_indexed(0..index_count, 0, 0..1);
                        }

                        queue.submit(Some(encoder.finish()));
                        frame.present();
                    }
                    _ => {}
                }
            })
            .context("event loop failed")?;

        Ok(())
    }
}
