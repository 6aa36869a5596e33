use std::cell::{OnceCell, RefCell};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use glam::Vec2;
use log::{debug, info, trace, warn};
use wgpu::util::DeviceExt;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window as WinitWindow, WindowId},
};

use super::gpu_context::GpuContext;
use super::tessellate::{tessellate, LineVertex};
use crate::core::LineSegment;
use crate::error::{PlotError, Result};
use crate::math::Color;
use crate::traits::Backend;

/// Close requests collected while pumping the event loop
#[derive(Default)]
struct EventState {
    closed: HashSet<WindowId>,
    exited: bool,
}

impl ApplicationHandler for EventState {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                debug!("close requested for {:?}", window_id);
                self.closed.insert(window_id);
            }
            _ => {}
        }
    }
}

/// winit windows rendered with wgpu
///
/// Events are pumped on demand from [`Backend::poll_events`] instead of
/// handing control to the event loop, so the caller keeps its own draw loop.
pub struct WgpuBackend {
    event_loop: RefCell<EventLoop<()>>,
    events: RefCell<EventState>,
    instance: wgpu::Instance,
    gpu: OnceCell<GpuContext>,
}

/// A winit window with its configured wgpu surface
pub struct WgpuSurface {
    // Declared before `window` so the surface is dropped first
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    gpu: GpuContext,
    window: Arc<WinitWindow>,
}

impl WgpuBackend {
    pub fn new() -> Result<Self> {
        let event_loop = EventLoop::new().map_err(PlotError::backend)?;
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        Ok(Self {
            event_loop: RefCell::new(event_loop),
            events: RefCell::new(EventState::default()),
            instance,
            gpu: OnceCell::new(),
        })
    }

    /// Device shared by all windows, picked for the first surface
    fn gpu_for(&self, surface: &wgpu::Surface<'_>) -> Result<&GpuContext> {
        if let Some(gpu) = self.gpu.get() {
            return Ok(gpu);
        }

        let gpu = pollster::block_on(GpuContext::new_with_surface(&self.instance, surface))?;
        let info = gpu.adapter().get_info();
        info!("using {} ({:?})", info.name, info.backend);
        Ok(self.gpu.get_or_init(|| gpu))
    }
}

impl Backend for WgpuBackend {
    type Surface = WgpuSurface;

    fn create_surface(&self, width: u32, height: u32, title: &str) -> Result<WgpuSurface> {
        let attributes = WinitWindow::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        // The draw loop is driven by pumping, so windows are created outside a
        // running event loop.
        #[allow(deprecated)]
        let window = self
            .event_loop
            .borrow()
            .create_window(attributes)
            .map_err(PlotError::backend)?;
        let window = Arc::new(window);

        let surface = self
            .instance
            .create_surface(window.clone())
            .map_err(PlotError::backend)?;
        let gpu = self.gpu_for(&surface)?.clone();

        let caps = surface.get_capabilities(gpu.adapter());
        // Colors are given in display space, as with a default GL framebuffer
        let format = caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .ok_or_else(|| PlotError::Backend(format!("surface of '{}' is not supported by the adapter", title)))?;

        let size = window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(gpu.device(), &config);

        let pipeline = create_line_pipeline(gpu.device(), format);
        debug!("configured {:?} surface {}x{} for '{}'", format, config.width, config.height, title);

        Ok(WgpuSurface {
            surface,
            config,
            pipeline,
            gpu,
            window,
        })
    }

    fn make_current(&self, surface: &WgpuSurface) {
        // wgpu has no current context; each submission names its surface
        trace!("current window {:?}", surface.window.id());
    }

    fn close_requested(&self, surface: &WgpuSurface) -> bool {
        let events = self.events.borrow();
        events.exited || events.closed.contains(&surface.window.id())
    }

    fn present(
        &self,
        surface: &WgpuSurface,
        clear: Option<Color>,
        segments: &[LineSegment],
    ) -> Result<()> {
        surface.render(clear, segments)
    }

    fn poll_events(&self) -> Result<()> {
        let mut event_loop = self.event_loop.borrow_mut();
        let mut events = self.events.borrow_mut();

        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut *events) {
            debug!("event loop exited with code {}", code);
            events.exited = true;
        }

        Ok(())
    }
}

impl WgpuSurface {
    fn acquire(&self) -> Result<wgpu::SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("surface of {:?} lost, reconfiguring", self.window.id());
                self.surface.configure(self.gpu.device(), &self.config);
                self.surface.get_current_texture().map_err(PlotError::backend)
            }
            Err(e) => Err(PlotError::backend(e)),
        }
    }

    fn render(&self, clear: Option<Color>, segments: &[LineSegment]) -> Result<()> {
        let frame = self.acquire()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Line widths are in logical pixels
        let viewport = Vec2::new(self.config.width as f32, self.config.height as f32)
            / self.window.scale_factor() as f32;
        let vertices = tessellate(segments, viewport);

        let device = self.gpu.device();
        let vertex_buffer = (!vertices.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Line Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Plot Render Encoder"),
        });

        {
            let load = match clear {
                Some(color) => wgpu::LoadOp::Clear(color.into()),
                None => wgpu::LoadOp::Load,
            };

            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Plot Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(buffer) = &vertex_buffer {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        self.gpu.queue().submit(Some(encoder.finish()));
        self.window.pre_present_notify();
        frame.present();

        Ok(())
    }
}

/// Pipeline drawing tessellated lines with per-vertex colors
fn create_line_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Line Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("lines.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Line Pipeline Layout"),
        bind_group_layouts: &[],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Line Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[LineVertex::layout()],
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
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
