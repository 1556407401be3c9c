/*!
Sprite pipeline: the bouncing, rotating logo.

STRUCTURE:
- `SpriteState` (this module) is the only long-lived state of the sprite: its
  top-left corner on screen, its travel direction per axis and its angle.
- `bounce.rs`: `BounceController`, the once-per-frame state machine that owns
  `SpriteState`.
- `transform.rs`: screen position → sprite-local → rotated tile coordinate.
- `bitmap.rs`: indexed-color logo storage behind `IndexedBitmapSource`, plus
  the `Palette` and the `SpriteBitmap` lookup used by the compositor.
- `logo.rs`: the built-in logo picture.

The logo is a fixed `LOGO_SIZE` x `LOGO_SIZE` tile; all tile addressing uses the
low `LOGO_BITS` bits of a coordinate.
*/

use crate::timing::{H_DISPLAY, V_DISPLAY};

pub mod bitmap;
pub mod bounce;
pub mod logo;
pub mod transform;

pub use bitmap::{
    BitPlanes, IndexedBitmapSource, LogoEncoding, PackedNibbles, Palette, Rgb, SpriteBitmap,
};
pub use bounce::BounceController;
pub use transform::{LocalCoordinate, RotatedCoordinate, RotationScale, rotate};

/// Edge length of the logo tile in pixels.
pub const LOGO_SIZE: u16 = 64;
/// Address bits per tile axis.
pub const LOGO_BITS: u32 = 6;
pub const LOGO_MASK: u16 = LOGO_SIZE - 1;

/// Rightmost `left` that keeps the tile fully on screen.
pub const LEFT_LIMIT: u16 = H_DISPLAY - LOGO_SIZE;
/// Lowest `top` that keeps the tile fully on screen.
pub const TOP_LIMIT: u16 = V_DISPLAY - LOGO_SIZE;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpriteState {
    // Screen position of the tile's top-left corner (10-bit, wraps).
    pub left: u16,
    pub top: u16,
    // true = moving right / down.
    pub dir_x: bool,
    pub dir_y: bool,
    // 256 steps per turn.
    pub angle: u8,
}

impl SpriteState {
    /// Power-on / reset state.
    pub const RESET: SpriteState = SpriteState {
        left: 200,
        top: 200,
        dir_x: true,
        dir_y: false,
        angle: 0,
    };
}

impl Default for SpriteState {
    fn default() -> Self {
        Self::RESET
    }
}
