//! Shoreline - procedural ocean and cyclone animations
//!
//! Layered waves roll across open water, steepen and slow over a shoaling
//! shore, or a log-spiral storm crawls along a wrapped track. Every frame
//! is rebuilt from parameters; nothing is keyframed.

mod cli;
mod clock;
mod cyclone;
mod geometry;
mod params;
mod pointer;
mod rendering;
mod scene;
mod wave;

use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use clap::Parser;

use cli::Args;
use clock::FrameClock;
use geometry::ShapeBatch;
use params::{RecordingConfig, RenderConfig};
use rendering::RenderSystem;
use scene::Scene;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    scene: Scene,
    clock: FrameClock,
    batch: ShapeBatch,
    paused: bool,
    minimized: bool,

    // Input, in logical px
    cursor: Option<(f32, f32)>,
    touch_last_y: Option<f32>,

    // Configuration
    render_config: RenderConfig,
    recording_config: Option<RecordingConfig>,

    // Time tracking
    last_frame: Option<Instant>,
    frame_num: usize,
}

impl App {
    fn new(scene: Scene, recording_config: Option<RecordingConfig>) -> Self {
        Self {
            window: None,
            render_system: None,
            scene,
            clock: FrameClock::new(),
            batch: ShapeBatch::new(),
            paused: false,
            minimized: false,
            cursor: None,
            touch_last_y: None,
            render_config: RenderConfig::default(),
            recording_config,
            last_frame: None,
            frame_num: 0,
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        // Create window
        let window_attributes = Window::default_attributes()
            .with_title("Shoreline")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        // Initialize rendering system
        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            self.recording_config.clone(),
        ))
        .unwrap();

        let (width, height) = render_system.logical_size();
        self.scene.resize(width, height);

        println!("\nShoreline is running!");
        println!("Press ESC to quit, SPACE to pause\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::Space => self.toggle_pause(),
                _ => {}
            },
            WindowEvent::Resized(size) => self.handle_resize(size),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.set_scale_factor(scale_factor);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = position.to_logical::<f32>(self.logical_scale());
                self.cursor = Some((pos.x, pos.y));
                self.scene.pointer_moved(pos.x, pos.y);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.scene.pointer_left();
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some((x, y)) = self.cursor {
                    self.scene.tap(x, y);
                }
            }
            WindowEvent::Touch(touch) => self.handle_touch(touch),
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    fn logical_scale(&self) -> f64 {
        self.render_system
            .as_ref()
            .map_or(1.0, |render_system| render_system.scale_factor())
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        println!("{}", if self.paused { "Paused" } else { "Resumed" });
    }

    fn handle_resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.minimized = size.width == 0 || size.height == 0;
        if let Some(render_system) = &mut self.render_system {
            render_system.resize(size.width, size.height);
            let (width, height) = render_system.logical_size();
            self.scene.resize(width, height);
        }
    }

    fn handle_touch(&mut self, touch: Touch) {
        let pos = touch.location.to_logical::<f32>(self.logical_scale());
        match touch.phase {
            TouchPhase::Started => {
                self.scene.tap(pos.x, pos.y);
                self.scene.pointer_moved(pos.x, pos.y);
                self.touch_last_y = Some(pos.y);
            }
            TouchPhase::Moved => {
                if let Some(last_y) = self.touch_last_y.replace(pos.y) {
                    self.scene.drag(pos.y - last_y);
                }
                self.scene.pointer_moved(pos.x, pos.y);
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touch_last_y = None;
                self.scene.pointer_left();
            }
        }
    }

    /// Advance the simulation and render a single frame
    fn render_frame(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let Some(ref mut render_system) = self.render_system else {
            return;
        };
        if self.minimized {
            return;
        }

        if self.recording_config.is_some() {
            // Offline pacing: exactly one tick per captured frame, real
            // time ignored.
            let t = self.clock.tick();
            self.scene.step(t, self.clock.step_dt_s());
        } else {
            let now = Instant::now();
            let real_dt = match self.last_frame.replace(now) {
                Some(prev) => now.duration_since(prev).as_secs_f64(),
                None => 0.0,
            };
            if !self.paused {
                let steps = self.clock.advance(real_dt);
                for _ in 0..steps {
                    let t = self.clock.tick();
                    self.scene.step(t, self.clock.step_dt_s());
                }
            }
        }

        self.batch.clear();
        self.scene.paint(&mut self.batch);

        if let Err(e) = render_system.render(&self.batch, self.scene.clear_color(), self.frame_num)
        {
            eprintln!("Render error: {:?}", e);
        }
        self.frame_num += 1;

        if let Some(recording) = &self.recording_config {
            if self.frame_num >= recording.total_frames() {
                println!(
                    "\nRecording complete: {} frames in {}/",
                    self.frame_num,
                    recording.frames_dir()
                );
                event_loop.exit();
            }
        }
    }
}

fn main() {
    println!("Shoreline - procedural ocean and cyclone animations");

    let args = Args::parse();
    let scene = args.build_scene();
    let recording_config = args.create_recording_config();

    let mut app = App::new(scene, recording_config);
    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
