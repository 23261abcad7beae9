//! Desktop shell: owns the window, the renderer and the frame loop

use std::io::Stdout;
use std::sync::Arc;

use game_core::{
    apply_input, draw_frame, update, Config, FramePacer, GameRng, GameState, ScoreReporter,
    SystemClock,
};
use tracing::{info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::error::ClientError;
use crate::input::KeyState;
use crate::renderer::Renderer;

pub struct PongApp {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    state: GameState,
    pacer: FramePacer<SystemClock>,
    rng: GameRng,
    keys: KeyState,
    reporter: ScoreReporter<Stdout>,
    init_error: Option<ClientError>,
}

impl PongApp {
    pub fn new(config: Config, seed: u64, reporter: ScoreReporter<Stdout>) -> Self {
        let pacer = FramePacer::new(SystemClock::new(), config.frame_target_ms(), config.max_dt);
        Self {
            window: None,
            renderer: None,
            state: GameState::new(config),
            pacer,
            rng: GameRng::new(seed),
            keys: KeyState::new(),
            reporter,
            init_error: None,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ClientError> {
        let config = &self.state.config;
        let attributes = Window::default_attributes()
            .with_title("Pong")
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .with_resizable(true);
        let window = Arc::new(event_loop.create_window(attributes)?);
        info!("Window created");

        let renderer = pollster::block_on(Renderer::new(window.clone(), config))?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    /// One iteration of the loop: input, update, render
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let input = self.keys.snapshot();
        apply_input(&mut self.state, &input, &mut self.rng);
        update(&mut self.state, &mut self.pacer);
        draw_frame(&self.state, renderer);

        if self.state.events.scored() {
            if let Err(e) = self.reporter.report(&self.state.score) {
                warn!("Failed to print score: {}", e);
            }
        }

        if renderer.is_lost() {
            self.state.running = false;
        }
        if !self.state.running {
            event_loop.exit();
        }
    }

    /// Startup error raised inside the event loop, if any
    pub fn take_init_error(&mut self) -> Option<ClientError> {
        self.init_error.take()
    }

    /// Hand the score line back once the loop is over
    pub fn into_reporter(self) -> ScoreReporter<Stdout> {
        self.reporter
    }
}

impl ApplicationHandler for PongApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.initialize(event_loop) {
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.keys.request_close();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.keys.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.keys.process_key_down(key_code),
                        ElementState::Released => self.keys.process_key_up(key_code),
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.running {
            self.frame(event_loop);
        }
    }
}
