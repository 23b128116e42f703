use std::sync::Arc;

use anyhow::{Result, anyhow};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

/// Configuration for window creation.
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "fretfall".to_string(),
            width: 800,
            height: 600,
            resizable: false,
        }
    }
}

/// Per-frame driver contract for the run loop. Each display refresh ticks
/// `update` then `render`; the loop keeps re-requesting redraws until the
/// host asks to close and `should_close` agrees.
pub trait GameLoop {
    /// Called once when the window exists and the GPU can be initialized.
    fn init(&mut self, window: Arc<Window>) -> Result<()>;
    /// Called each frame to advance playback state.
    fn update(&mut self);
    /// Called each frame to render.
    fn render(&mut self) -> Result<()>;
    /// Called when the window should close. Return true to allow closing.
    fn should_close(&self) -> bool;
    /// Called on window resize.
    fn on_resize(&mut self, width: u32, height: u32);
}

/// Run the application with a winit event loop.
pub fn run_app<G: GameLoop + 'static>(config: WindowConfig, game: G) -> Result<()> {
    let event_loop = EventLoop::new().map_err(|e| anyhow!("failed to create event loop: {e}"))?;

    struct App<G: GameLoop> {
        game: G,
        config: WindowConfig,
        window: Option<Arc<Window>>,
    }

    impl<G: GameLoop> ApplicationHandler for App<G> {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_none() {
                let attrs = Window::default_attributes()
                    .with_title(&self.config.title)
                    .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
                    .with_resizable(self.config.resizable);

                match event_loop.create_window(attrs) {
                    Ok(window) => {
                        let window = Arc::new(window);
                        if let Err(e) = self.game.init(window.clone()) {
                            tracing::error!("failed to initialize game: {e:#}");
                            event_loop.exit();
                            return;
                        }
                        window.request_redraw();
                        self.window = Some(window);
                    }
                    Err(e) => {
                        tracing::error!("failed to create window: {e}");
                        event_loop.exit();
                    }
                }
            }
        }

        fn window_event(
            &mut self,
            event_loop: &ActiveEventLoop,
            _window_id: WindowId,
            event: WindowEvent,
        ) {
            match event {
                WindowEvent::CloseRequested => {
                    if self.game.should_close() {
                        event_loop.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    self.game.on_resize(size.width, size.height);
                }
                WindowEvent::RedrawRequested => {
                    self.game.update();
                    if let Err(e) = self.game.render() {
                        tracing::error!("render error: {e:#}");
                    }
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        }
    }

    let mut app = App {
        game,
        config,
        window: None,
    };

    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("event loop error: {e}"))?;

    Ok(())
}
