//! RGBA frame buffer assembled from the output byte stream.
//!
//! Only the visible 640x480 area is stored; porches and sync intervals are
//! dropped. Each 2-bit channel is expanded to 8 bits and alpha is opaque, which
//! is the layout both the PNG writer and the `pixels` surface expect.

use crate::pins::PinOut;
use crate::timing::{H_DISPLAY, ScanPosition, V_DISPLAY};

pub const FRAME_WIDTH: u32 = H_DISPLAY as u32;
pub const FRAME_HEIGHT: u32 = V_DISPLAY as u32;
pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<u8>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Opaque black frame.
    pub fn new() -> Self {
        let mut pixels = vec![0u8; FRAME_WIDTH as usize * FRAME_HEIGHT as usize * BYTES_PER_PIXEL];
        for px in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[3] = 0xFF;
        }
        Self { pixels }
    }

    /// Store the color part of `pins` at `pos`; positions outside the visible
    /// area are ignored.
    #[inline]
    pub fn put(&mut self, pos: ScanPosition, pins: PinOut) {
        if pos.hpos >= H_DISPLAY || pos.vpos >= V_DISPLAY {
            return;
        }
        let i = Self::offset(pos.hpos as u32, pos.vpos as u32);
        let [r, g, b] = pins.rgb().to_rgb888();
        self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&[r, g, b, 0xFF]);
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= FRAME_WIDTH || y >= FRAME_HEIGHT {
            return None;
        }
        let i = Self::offset(x, y);
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[i..i + BYTES_PER_PIXEL]);
        Some(px)
    }

    #[inline]
    fn offset(x: u32, y: u32) -> usize {
        (y as usize * FRAME_WIDTH as usize + x as usize) * BYTES_PER_PIXEL
    }
}
