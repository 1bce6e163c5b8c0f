use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::camera::Camera;
use crate::cube_pass::{CubePass, CubeUniforms};
use crate::error::{Error, Result};
use crate::gpu::GpuContext;
use crate::input::{Input, KeyBindings};
use crate::rainbow::Rainbow;
use crate::shader::ShaderSource;
use crate::transform::{CubeState, TransformSteps};

/// Configuration for the demo window and its controls.
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// WGSL file to load (and hot-reload) instead of the built-in shader.
    pub shader_path: Option<PathBuf>,
    pub steps: TransformSteps,
    pub bindings: KeyBindings,
    /// Degrees each rainbow phase advances per frame.
    pub rainbow_step: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Spincube".to_string(),
            width: 800,
            height: 600,
            shader_path: None,
            steps: TransformSteps::default(),
            bindings: KeyBindings::default(),
            rainbow_step: Rainbow::default().step,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn shader_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.shader_path = Some(path.into());
        self
    }

    pub fn steps(mut self, steps: TransformSteps) -> Self {
        self.steps = steps;
        self
    }

    pub fn bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn rainbow_step(mut self, degrees: f32) -> Self {
        self.rainbow_step = degrees;
        self
    }
}

/// Open the window and run the cube until it is closed.
///
/// Escape or closing the window exits; R puts the cube back where it started.
///
/// # Example
/// ```no_run
/// spincube::run(spincube::AppConfig::new().title("Cube").size(1280, 720))?;
/// # Ok::<(), spincube::Error>(())
/// ```
pub fn run(config: AppConfig) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = SpincubeApp::Pending(config);
    event_loop.run_app(&mut app)?;

    match app {
        SpincubeApp::Failed(e) => Err(e),
        _ => Ok(()),
    }
}

struct Running {
    window: Arc<Window>,
    gpu: GpuContext,
    pass: CubePass,
    shader: ShaderSource,
    camera: Camera,
    input: Input,
    bindings: KeyBindings,
    cube: CubeState,
    rainbow: Rainbow,
    frames: u64,
    last_report: Instant,
}

enum SpincubeApp {
    Pending(AppConfig),
    Running(Box<Running>),
    Failed(Error),
    Finished,
}

impl SpincubeApp {
    fn start(config: AppConfig, event_loop: &ActiveEventLoop) -> Result<Running> {
        let window_attrs = WindowAttributes::default()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu = GpuContext::new(window.clone())?;

        let shader = ShaderSource::load_or_embedded(config.shader_path.as_deref());
        let cube = CubeState::new(config.steps);
        let pass = CubePass::new(&gpu, shader.source(), &cube.vertices)?;

        tracing::info!(
            width = gpu.width(),
            height = gpu.height(),
            shader = ?shader.path(),
            "cube ready"
        );

        Ok(Running {
            window,
            gpu,
            pass,
            shader,
            camera: Camera::new(),
            input: Input::new(),
            bindings: config.bindings,
            cube,
            rainbow: Rainbow::new(config.rainbow_step),
            frames: 0,
            last_report: Instant::now(),
        })
    }
}

impl Running {
    /// One frame: controls, transforms, upload, draw. Strictly in that order.
    fn frame(&mut self) {
        if self.shader.check_reload() {
            match self.pass.rebuild(&self.gpu, self.shader.source()) {
                Ok(()) => tracing::info!("shader compiled successfully"),
                Err(e) => tracing::warn!("{e}; keeping previous version"),
            }
        }

        if self.input.key_pressed(KeyCode::KeyR) {
            tracing::info!("resetting cube");
            self.cube.reset();
        }

        let controls = self.bindings.sample(&self.input);
        self.cube.apply(&controls);

        let uniforms = CubeUniforms {
            view_proj: self.camera.projection(self.gpu.aspect()).to_cols_array_2d(),
            model: self.camera.model(self.cube.offset).to_cols_array_2d(),
            rainbow: {
                let [r, g, b] = self.rainbow.color();
                [r, g, b, 1.0]
            },
        };
        self.rainbow.advance();

        self.pass.upload(&self.gpu, &self.cube.vertices);
        self.pass.ensure_depth_size(&self.gpu);
        self.render(&uniforms);

        self.frames += 1;
        let elapsed = self.last_report.elapsed().as_secs_f32();
        if elapsed >= 5.0 {
            tracing::debug!(fps = self.frames as f32 / elapsed, "frame rate");
            self.frames = 0;
            self.last_report = Instant::now();
        }
    }

    fn render(&self, uniforms: &CubeUniforms) {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost, reconfiguring");
                self.gpu.reconfigure();
                return;
            }
            Err(e) => {
                tracing::warn!("failed to get surface texture: {e}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Cube Encoder"),
            });

        self.pass.draw(&self.gpu, &mut encoder, &view, uniforms);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for SpincubeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        *self = match std::mem::replace(self, SpincubeApp::Finished) {
            SpincubeApp::Pending(config) => match SpincubeApp::start(config, event_loop) {
                Ok(running) => {
                    running.window.request_redraw();
                    SpincubeApp::Running(Box::new(running))
                }
                Err(e) => {
                    tracing::error!("startup failed: {e}");
                    event_loop.exit();
                    SpincubeApp::Failed(e)
                }
            },
            other => other,
        };
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let SpincubeApp::Running(app) = self else {
            return;
        };

        app.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app.gpu.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                if app.input.key_pressed(KeyCode::Escape) {
                    event_loop.exit();
                    return;
                }

                app.frame();
                app.input.begin_frame();
                app.window.request_redraw();
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let SpincubeApp::Running(_) = self {
            tracing::info!("shutting down");
            *self = SpincubeApp::Finished;
        }
    }
}
