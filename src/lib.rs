//! CPU renderer for animated zooms into the Mandelbrot set.
//!
//! A [`frame::FrameProducer`] renders the current [`view::ViewState`] on a worker pool and
//! then zooms in for the next frame. Frames are dense RGB byte buffers that a display shell
//! can blit directly.

pub mod buffer;
pub mod colour;
pub mod compute;
pub mod config;
pub mod error;
pub mod escape;
pub mod frame;
pub mod grid;
pub mod pixel;
pub mod screen;
pub mod session;
pub mod view;

pub use buffer::PixelBuffer;
pub use config::Config;
pub use error::{Error, Result};
pub use frame::FrameProducer;
pub use pixel::{Complex, Pixel};
pub use view::ViewState;
