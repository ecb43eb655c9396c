//! CPU pixel target
//!
//! Addressed with the playfield's coordinates (origin bottom-left, Y up) but
//! stored top row first, so `as_bytes` is an ordinary RGBA8 image.

use glam::IVec2;

use crate::sim::state::Rgb;

/// An RGBA8 framebuffer
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill every pixel with `color`
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_rgba8());
    }

    #[inline]
    fn index(&self, p: IVec2) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width as i32 || p.y >= self.height as i32 {
            return None;
        }
        let row = self.height - 1 - p.y as u32;
        Some((row * self.width + p.x as u32) as usize)
    }

    /// Write one pixel; off-surface points are clipped silently
    #[inline]
    pub fn put(&mut self, p: IVec2, rgba: [u8; 4]) {
        if let Some(i) = self.index(p) {
            self.pixels[i] = rgba;
        }
    }

    /// Color at `p`, or None off-surface
    pub fn get(&self, p: IVec2) -> Option<[u8; 4]> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// A plot callback that paints in `color`, for the raster functions
    pub fn pen(&mut self, color: Rgb) -> impl FnMut(IVec2) + '_ {
        let rgba = color.to_rgba8();
        move |p| self.put(p, rgba)
    }

    /// Raw RGBA8 bytes, top row first
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels that differ from `background`
    pub fn count_not(&self, background: Rgb) -> usize {
        let bg = background.to_rgba8();
        self.pixels.iter().filter(|&&p| p != bg).count()
    }
}
