//! Error types for the construction-time and host-side edges of the crate.
//!
//! Nothing on the per-tick path returns an error; these only surface while
//! building bitmaps and palettes, or while writing frames out of the process.

use thiserror::Error;

/// Rejected bitmap or palette data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitmapError {
    #[error("bitmap data is {actual} bytes, expected {expected}")]
    DataLength { expected: usize, actual: usize },

    #[error("{0} bit planes requested; supported range is 1..=4")]
    PlaneCount(usize),

    #[error("pixel ({x}, {y}) has index {index}, which does not fit in {bits} bits")]
    IndexRange { x: u8, y: u8, index: u8, bits: u8 },

    #[error("palette has {0} entries; at most 16 are addressable")]
    PaletteSize(usize),
}

/// Failure writing a captured frame to disk.
#[cfg(feature = "screenshot")]
#[derive(Error, Debug)]
pub enum ScreenshotError {
    #[error("frame buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Failure bringing up or driving the display window.
#[cfg(feature = "display")]
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("failed to resize surface: {0}")]
    Texture(#[from] pixels::TextureError),
}
