//! Window management
//!
//! Overlay window creation and the winit-backed frame scheduler

use std::sync::Arc;

use winit::{
    error::EventLoopError,
    event_loop::EventLoop,
    window::Window,
};

use crate::scheduler::{FrameRequest, FrameScheduler};

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Clear to a see-through background so bursts float over the desktop
    pub transparent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Spark".to_string(),
            width: 1280,
            height: 720,
            transparent: true,
        }
    }
}

/// Create window attributes from config
pub fn window_attributes(config: &WindowConfig) -> winit::window::WindowAttributes {
    Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
        .with_transparent(config.transparent)
}

pub fn create_event_loop() -> Result<EventLoop<()>, EventLoopError> {
    EventLoop::new()
}

/// Schedules frames through `Window::request_redraw`.
///
/// winit delivers the frame as `WindowEvent::RedrawRequested`, paced by the
/// display. A redraw cannot be withdrawn once requested, so cancelling only
/// forgets the request; the overlay ignores frames it no longer expects.
#[derive(Debug)]
pub struct WindowScheduler {
    window: Arc<Window>,
    last_id: u64,
}

impl WindowScheduler {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window, last_id: 0 }
    }
}

impl FrameScheduler for WindowScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        self.window.request_redraw();
        self.last_id += 1;
        FrameRequest::new(self.last_id)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        tracing::trace!(request = request.id(), "redraw request withdrawn");
    }
}
