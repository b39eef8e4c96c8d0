//! Contract between the runtime loop and the application driving it.
//!
//! The runtime owns the window, GPU and input state; an [`App`] only sees
//! them through the per-frame [`FrameCtx`].

mod ctx;

pub use ctx::{FrameCtx, WindowCtx};

use winit::event::WindowEvent;
use winit::window::WindowId;

/// Returned from every [`App`] callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

pub trait App {
    /// Raw window event, delivered after input translation. Most apps only
    /// need `on_frame` and the translated input it carries.
    fn on_window_event(&mut self, _window_id: WindowId, _event: &WindowEvent) -> AppControl {
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
