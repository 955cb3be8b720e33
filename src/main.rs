use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use spincube::renderer::CubeRenderer;
use spincube::{FrameDriver, SceneContext, Viewport};

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const FPS_LOG_INTERVAL: f32 = 1.0;

/// winit application shell: owns the window, the renderer, and the frame
/// driver, and forwards display refreshes into `FrameDriver::step`.
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<CubeRenderer>,
    driver: Option<FrameDriver>,
    last_frame_time: Instant,
    frame_count: u32,
    fps_timer: f32,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            driver: None,
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_timer += delta;

        if self.fps_timer >= FPS_LOG_INTERVAL {
            log::info!("fps: {:.1}", self.frame_count as f32 / self.fps_timer);
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("spincube")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let context = SceneContext::new(Viewport::from(window.inner_size()));

        let renderer =
            match pollster::block_on(CubeRenderer::new(window.clone(), &context.cube().geometry)) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e:#}");
                    event_loop.exit();
                    return;
                }
            };

        let mut driver = FrameDriver::new(context);
        driver.start();

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.driver = Some(driver);
        self.last_frame_time = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
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
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                // Swapchain only. The camera keeps its startup aspect, so
                // the cube stretches with the window.
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;
                self.update_fps(delta);

                if let (Some(driver), Some(renderer)) = (&mut self.driver, &mut self.renderer) {
                    match driver.step(renderer) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("surface out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => log::error!("render error: {e}"),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("spincube - Escape to quit");

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
