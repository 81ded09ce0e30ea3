use std::sync::Arc;
use std::time::Instant;

use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scene_viewer::camera::Camera;
use scene_viewer::core::input_adapter::WinitController;
use scene_viewer::frame::FrameDriver;
use scene_viewer::renderer::SceneRenderer;
use scene_viewer::scene::build_scene;

const WINDOW_TITLE: &str = "Scene Viewer";
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const FPS_UPDATE_INTERVAL: f32 = 1.0;

const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 5.0, 15.0);

/// Top-level application context: window, renderer, input adapter and the
/// camera/frame core live here as owned fields, so input callbacks mutate
/// explicit state instead of process-wide globals.
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    driver: FrameDriver,
    controller: WinitController,
    last_frame_time: Instant,
    frame_count: u32,
    fps_timer: f32,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            driver: FrameDriver::new(Camera::new(INITIAL_CAMERA_POSITION)),
            controller: WinitController::new(),
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_timer += delta;

        if self.fps_timer >= FPS_UPDATE_INTERVAL {
            log::info!("fps: {:.1}", self.frame_count as f32 / self.fps_timer);
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }
    }

    fn redraw(&mut self) {
        // Apply everything received since the last frame before the
        // matrices are read, so no frame sees partially-applied input
        for (x, y) in self.controller.drain_cursor_samples() {
            self.driver.on_cursor_moved(x, y);
        }
        let scroll = self.controller.take_scroll_delta();
        if scroll != 0.0 {
            self.driver.on_scroll(scroll);
        }

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        let frame = self.driver.tick(&self.controller, renderer.aspect_ratio());

        match renderer.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(window) = &self.window {
                    renderer.resize(window.inner_size());
                }
            }
            Err(e) => log::error!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
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

            let scene = build_scene();
            let renderer = match pollster::block_on(SceneRenderer::new(window.clone(), &scene)) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e}");
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
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
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                self.update_fps(delta);
                self.redraw();
            }
            other => self.controller.process_event(&other),
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

    log::info!("controls: WASD move, E/Q up/down, mouse look, scroll zoom, O/P view presets");

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
