//! PNG export of captured frames (feature `screenshot`).

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::ScreenshotError;
use crate::frame::{BYTES_PER_PIXEL, FRAME_HEIGHT, FRAME_WIDTH, Frame};

/// Write `frame` to `path` as a 640x480 RGBA PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<(), ScreenshotError> {
    let actual = frame.pixels().len();
    let img = RgbaImage::from_raw(FRAME_WIDTH, FRAME_HEIGHT, frame.pixels().to_vec()).ok_or(
        ScreenshotError::BufferSize {
            expected: FRAME_WIDTH as usize * FRAME_HEIGHT as usize * BYTES_PER_PIXEL,
            actual,
        },
    )?;
    img.save_with_format(path, ImageFormat::Png)?;
    info!(path = %path.display(), "frame saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{checker_board, released};

    #[test]
    fn png_round_trips_pixels() {
        let mut board = checker_board();
        let frame = board.capture_frame(released(false));
        let path = std::env::temp_dir().join(format!("spinlogo-{}.png", std::process::id()));
        save_png(&frame, &path).unwrap();
        let back = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).ok();
        assert_eq!(back.dimensions(), (640, 480));
        assert_eq!(back.as_raw().as_slice(), frame.pixels());
    }
}
