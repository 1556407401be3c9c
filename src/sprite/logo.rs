//! Built-in logo: a ringed disc with a bright pointer toward its top-left corner
//! and a red corner marker, so both position and rotation are visible.
//!
//! The picture is generated rather than stored; `builtin_logo` encodes the same
//! indices in either layout.

use super::bitmap::{BitPlanes, LogoEncoding, PackedNibbles, Palette, Rgb, SpriteBitmap};
use super::LOGO_SIZE;
use crate::error::BitmapError;

const SIDE: i32 = LOGO_SIZE as i32;

pub const INDEX_BACKGROUND: u8 = 0;
pub const INDEX_MARKER: u8 = 14;
pub const INDEX_POINTER: u8 = 15;

/// Ring colors from the center outwards, then marker and pointer.
pub const LOGO_PALETTE: [Rgb; 16] = [
    Rgb::BLACK,
    Rgb::new(0xF, 0xE, 0x4),
    Rgb::new(0xF, 0xC, 0x2),
    Rgb::new(0xF, 0x9, 0x1),
    Rgb::new(0xE, 0x6, 0x2),
    Rgb::new(0xB, 0x4, 0x6),
    Rgb::new(0x8, 0x3, 0xA),
    Rgb::new(0x5, 0x4, 0xD),
    Rgb::new(0x3, 0x6, 0xF),
    Rgb::new(0x2, 0x9, 0xF),
    Rgb::new(0x2, 0xC, 0xC),
    Rgb::new(0x3, 0xE, 0x8),
    Rgb::new(0x6, 0xF, 0x4),
    Rgb::new(0xA, 0xF, 0x2),
    Rgb::new(0xF, 0x0, 0x0),
    Rgb::WHITE,
];

/// Palette index of the built-in picture at tile coordinate `(x, y)`.
pub fn logo_index(x: u8, y: u8) -> u8 {
    let (x, y) = (x as i32 & (SIDE - 1), y as i32 & (SIDE - 1));
    if x < 8 && y < 8 {
        return INDEX_MARKER;
    }
    // Doubled coordinates so the center (31.5, 31.5) is an integer.
    let dx = 2 * x - (SIDE - 1);
    let dy = 2 * y - (SIDE - 1);
    let d2 = dx * dx + dy * dy;
    if d2 > 62 * 62 {
        return INDEX_BACKGROUND;
    }
    // Pointer: a thick diagonal from the center toward the top-left.
    if dx < 0 && dy < 0 && (dx - dy).abs() <= 6 {
        return INDEX_POINTER;
    }
    1 + (d2 / 512) as u8
}

/// Row-major index grid of the built-in picture.
pub fn logo_indices() -> Vec<u8> {
    (0..LOGO_SIZE as u8)
        .flat_map(|y| (0..LOGO_SIZE as u8).map(move |x| logo_index(x, y)))
        .collect()
}

/// The built-in logo in the requested storage layout.
pub fn builtin_logo(encoding: LogoEncoding) -> Result<SpriteBitmap, BitmapError> {
    let indices = logo_indices();
    let palette = Palette::from_colors(&LOGO_PALETTE)?;
    Ok(match encoding {
        LogoEncoding::Packed => SpriteBitmap::new(PackedNibbles::from_indices(&indices)?, palette),
        LogoEncoding::Planar => SpriteBitmap::new(BitPlanes::from_indices(&indices, 4)?, palette),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_fit_four_bits() {
        let idx = logo_indices();
        assert_eq!(idx.len(), 64 * 64);
        assert!(idx.iter().all(|&i| i < 16));
    }

    #[test]
    fn picture_landmarks() {
        assert_eq!(logo_index(0, 0), INDEX_MARKER);
        assert_eq!(logo_index(63, 0), INDEX_BACKGROUND);
        assert_eq!(logo_index(32, 32), 1);
        assert_eq!(logo_index(20, 20), INDEX_POINTER);
        // The pointer only runs toward the top-left.
        assert_ne!(logo_index(43, 43), INDEX_POINTER);
    }

    #[test]
    fn both_encodings_render_identically() {
        let packed = builtin_logo(LogoEncoding::Packed).unwrap();
        let planar = builtin_logo(LogoEncoding::Planar).unwrap();
        for y in 0..64u8 {
            for x in 0..64u8 {
                assert_eq!(packed.lookup(x, y), planar.lookup(x, y), "({x}, {y})");
            }
        }
        assert_eq!(packed.lookup(0, 0), LOGO_PALETTE[INDEX_MARKER as usize]);
    }
}
