use crate::constants::{
    AMBIENT_LIGHT, LIGHT_INTENSITY, LIGHT_POSITION, SCENE_POINT_COUNT, SCENE_POINT_EXTENT,
    SCENE_POINT_OPACITY, SOLID_OPACITY, SOLID_RADIUS,
};
use crate::core::scene::{scatter_points, wireframe_lines, Camera, SceneMotion};
use crate::core::Theme;
use glam::{Mat4, Vec2};
use web_sys as web;

mod helpers;
use helpers::{create_batch, create_uniform_layout, make_scene_pipeline, DrawBatch, SceneUniforms};

// ===================== WebGPU backdrop scene =====================

/// GPU state for the decorative background: a wireframe icosahedron and a
/// slowly spinning point cloud, drawn over a transparent clear.
pub struct SceneRenderer<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    solid: DrawBatch,
    points: DrawBatch,

    camera: Camera,
    motion: SceneMotion,
    accent: [f32; 3],

    width: u32,
    height: u32,
}

impl<'a> SceneRenderer<'a> {
    pub async fn new(canvas: &web::HtmlCanvasElement, theme: Theme) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Page content sits behind the canvas, so keep the clear transparent.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let bgl = create_uniform_layout(&device);
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let solid_pipeline =
            make_scene_pipeline(&device, &pl, &shader, wgpu::PrimitiveTopology::LineList, format);
        let solid = create_batch(
            &device,
            "solid",
            &bgl,
            solid_pipeline,
            &wireframe_lines(SOLID_RADIUS),
        );

        let points_pipeline =
            make_scene_pipeline(&device, &pl, &shader, wgpu::PrimitiveTopology::PointList, format);
        let cloud = scatter_points(SCENE_POINT_COUNT, SCENE_POINT_EXTENT, &mut rand::thread_rng());
        let points = create_batch(&device, "points", &bgl, points_pipeline, &cloud);

        log::info!(
            "[scene] {}x{} format={:?} alpha={:?} edges={} points={}",
            width,
            height,
            format,
            alpha_mode,
            solid.vertex_count / 2,
            points.vertex_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            solid,
            points,
            camera: Camera::for_viewport(width, height),
            motion: SceneMotion::default(),
            accent: theme.accent_rgb(),
            width,
            height,
        })
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.accent = theme.accent_rgb();
    }

    pub fn set_pointer_ndc(&mut self, ndc: Vec2) {
        self.motion.set_pointer_ndc(ndc);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.camera.set_viewport(width, height);
        }
    }

    fn uniforms(&self, model: Mat4, alpha: f32, ambient: f32) -> SceneUniforms {
        SceneUniforms {
            view_proj: self.camera.view_proj().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            color: [self.accent[0], self.accent[1], self.accent[2], alpha],
            light: [
                LIGHT_POSITION[0],
                LIGHT_POSITION[1],
                LIGHT_POSITION[2],
                LIGHT_INTENSITY,
            ],
            params: [ambient, 0.0, 0.0, 0.0],
        }
    }

    /// Advance the motion by one frame and draw it.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.motion.step();
        self.solid.write(
            &self.queue,
            &self.uniforms(self.motion.solid_model(), SOLID_OPACITY, AMBIENT_LIGHT),
        );
        // Points are unlit: full ambient, light contribution clamped away in the shader.
        self.points.write(
            &self.queue,
            &self.uniforms(self.motion.field_model(), SCENE_POINT_OPACITY, 1.0),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.points.draw(&mut rpass);
            self.solid.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
