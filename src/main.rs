//! Tidewater - a stylized ocean plane.
//!
//! A subdivided plane whose vertices rise and fall with 3D simplex noise,
//! colored from deep to shallow blue by wave height.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use tidewater::camera::CameraSystem;
use tidewater::cli::Args;
use tidewater::ocean::OceanPlane;
use tidewater::params::RenderConfig;
use tidewater::preview::save_preview;
use tidewater::rendering::RenderSystem;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Scene
    plane: OceanPlane,
    camera: CameraSystem,

    // Configuration
    render_config: RenderConfig,

    // Time tracking
    start_time: Instant,
}

impl App {
    fn new(plane: OceanPlane, camera: CameraSystem, render_config: RenderConfig) -> Self {
        Self {
            window: None,
            render_system: None,
            plane,
            camera,
            render_config,
            start_time: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Tidewater")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.plane,
            &self.render_config,
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = render_system.size();
        self.render_config.window_width = width;
        self.render_config.window_height = height;

        log::info!("Tidewater is running, press ESC to quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.start_time = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                    let (width, height) = render_system.size();
                    self.render_config.window_width = width;
                    self.render_config.window_height = height;
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

impl App {
    /// Render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = &mut self.render_system else {
            return;
        };

        let time_s = self.start_time.elapsed().as_secs_f32();

        // The only per-frame change to the plane
        self.plane.update(time_s);

        let (view_proj, _eye) = self
            .camera
            .create_view_proj_matrix(time_s, &self.render_config);
        self.plane.set_view_proj(view_proj);

        render_system.update_uniforms(self.plane.uniforms());

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                render_system.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

fn run(args: Args) -> tidewater::Result<()> {
    let config = args.ocean_config()?;
    let plane = OceanPlane::new(config)?;
    let render_config = RenderConfig::default();

    if let Some(path) = &args.preview {
        return save_preview(
            &plane,
            args.time,
            args.preview_size,
            render_config.clear_color,
            path,
        );
    }

    let camera = CameraSystem::new(args.parse_camera_preset(), plane.position());
    let mut app = App::new(plane, camera, render_config);

    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Tidewater - simplex-noise ocean plane");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
