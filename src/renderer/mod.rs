//! CPU rendering module
//!
//! The compositor rasterizes the scene into a `Framebuffer` with the
//! pixel algorithms from `raster`; the host presents the finished buffer.

pub mod compositor;
pub mod framebuffer;
pub mod palette;

pub use compositor::{Compositor, Layers};
pub use framebuffer::Framebuffer;
