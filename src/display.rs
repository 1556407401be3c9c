/*!
Live window showing the generator output (feature `display`).

Each redraw advances the board by one whole frame and uploads the visible
area to a `pixels` surface. Keys:
- `T` toggles the tile-mode configuration bit.
- `R` holds reset for one tick.
- `Escape` or closing the window exits.
*/

use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, info};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use crate::board::Board;
use crate::error::DisplayError;
use crate::frame::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::pins::PinInputs;

struct App {
    board: Board,
    inputs: PinInputs,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    error: Option<DisplayError>,
}

impl App {
    fn new(board: Board, inputs: PinInputs) -> Self {
        Self {
            board,
            inputs,
            window: None,
            pixels: None,
            error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), DisplayError> {
        let attributes = Window::default_attributes()
            .with_title(format!("spinlogo: {}", self.board.pattern().name()))
            .with_inner_size(LogicalSize::new(FRAME_WIDTH, FRAME_HEIGHT))
            .with_min_inner_size(LogicalSize::new(FRAME_WIDTH / 2, FRAME_HEIGHT / 2));
        let window = Arc::new(event_loop.create_window(attributes)?);
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        self.pixels = Some(Pixels::new(FRAME_WIDTH, FRAME_HEIGHT, surface)?);
        window.request_redraw();
        self.window = Some(window);
        info!("display window ready");
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), DisplayError> {
        let Some(pixels) = self.pixels.as_mut() else {
            return Ok(());
        };
        let frame = self.board.capture_frame(self.inputs);
        pixels.frame_mut().copy_from_slice(frame.pixels());
        pixels.render()?;
        if let Some(window) = &self.window {
            window.request_redraw();
        }
        Ok(())
    }

    fn on_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match event.logical_key.as_ref() {
            Key::Character("t") | Key::Character("T") => {
                let mut config = self.inputs.config();
                config.tile_mode = !config.tile_mode;
                self.inputs = PinInputs::running(config);
            }
            Key::Character("r") | Key::Character("R") => {
                self.board.tick(PinInputs::RESET);
            }
            _ => {}
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: DisplayError) {
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    event_loop.exit();
                } else {
                    self.on_key(&event);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    debug!(width = size.width, height = size.height, "resize");
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        self.fail(event_loop, err.into());
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }
}

/// Open a window and run `board` until it is closed.
pub fn run(board: Board, inputs: PinInputs) -> Result<(), DisplayError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(board, inputs);
    event_loop.run_app(&mut app)?;
    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
