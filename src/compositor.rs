/*!
Compositor: picks the color for the beam position and registers the output.

Sprite compositing (`sprite_color`):
- Tile mode: every pixel samples the bitmap at the low 6 bits of its local
  coordinate, unrotated and without a bounding-box test, so the logo repeats
  every 64 pixels in both directions.
- Normal mode: inside the 64x64 box at `(left, top)` the pixel samples the
  bitmap through the inverse rotation; rotated samples outside the tile and
  everything outside the box are background (black).

Output register (`Compositor::latch`):
- Blanked to black whenever `display_on` is false.
- Each 4-bit palette channel is truncated to the 2-bit output depth.
- The packed byte is held until the next tick.
*/

use crate::pins::PinOut;
use crate::sprite::{LocalCoordinate, Rgb, RotationScale, SpriteBitmap, SpriteState, rotate};
use crate::timing::{ScanPosition, SyncState};

/// Color shown where the sprite is absent.
pub const BACKGROUND: Rgb = Rgb::BLACK;

/// Output color depth: 2 bits per channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb222 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb222 {
    pub const BLACK: Rgb222 = Rgb222 { r: 0, g: 0, b: 0 };

    /// Expand to 8 bits per channel (0, 0x55, 0xAA, 0xFF).
    pub const fn to_rgb888(self) -> [u8; 3] {
        [self.r * 0x55, self.g * 0x55, self.b * 0x55]
    }
}

impl Rgb {
    /// Keep the two most significant bits of each channel.
    #[inline]
    pub const fn to_rgb222(self) -> Rgb222 {
        Rgb222 {
            r: (self.r >> 2) & 0b11,
            g: (self.g >> 2) & 0b11,
            b: (self.b >> 2) & 0b11,
        }
    }
}

/// Sprite color for `pos`, before blanking.
#[inline]
pub fn sprite_color(
    pos: ScanPosition,
    sprite: &SpriteState,
    bitmap: &SpriteBitmap,
    tile_mode: bool,
    scale: RotationScale,
) -> Rgb {
    let local = LocalCoordinate::between(pos, sprite);
    if tile_mode {
        let (x, y) = local.tile_xy();
        return bitmap.lookup(x, y);
    }
    if !local.in_tile() {
        return BACKGROUND;
    }
    match rotate(local, sprite.angle, scale).tile_xy() {
        Some((x, y)) => bitmap.lookup(x, y),
        None => BACKGROUND,
    }
}

/// Registered output stage.
#[derive(Clone, Debug, Default)]
pub struct Compositor {
    out: PinOut,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.out = PinOut::BLANK;
    }

    /// Blank, truncate and register one sample; returns the new register value.
    #[inline]
    pub fn latch(&mut self, sync: SyncState, color: Rgb) -> PinOut {
        let rgb = if sync.display_on {
            color.to_rgb222()
        } else {
            Rgb222::BLACK
        };
        self.out = PinOut::pack(sync.hsync, sync.vsync, rgb);
        self.out
    }

    #[inline]
    pub fn output(&self) -> PinOut {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::logo::builtin_logo;
    use crate::sprite::LogoEncoding;

    fn logo() -> SpriteBitmap {
        builtin_logo(LogoEncoding::Packed).unwrap()
    }

    #[test]
    fn truncation_keeps_top_bits() {
        assert_eq!(Rgb::new(0xF, 0x8, 0x3).to_rgb222(), Rgb222 { r: 3, g: 2, b: 0 });
        assert_eq!(Rgb222 { r: 3, g: 1, b: 0 }.to_rgb888(), [0xFF, 0x55, 0x00]);
    }

    #[test]
    fn blanking_zeroes_color_but_keeps_sync() {
        let mut c = Compositor::new();
        let sync = SyncState {
            hsync: true,
            vsync: false,
            display_on: false,
        };
        let out = c.latch(sync, Rgb::WHITE);
        assert!(out.hsync());
        assert_eq!(out.rgb(), Rgb222::BLACK);
        assert_eq!(c.output(), out);
        c.reset();
        assert_eq!(c.output(), PinOut::BLANK);
    }

    #[test]
    fn visible_white_is_full_scale() {
        let mut c = Compositor::new();
        let out = c.latch(SyncState::at(ScanPosition::new(10, 10)), Rgb::WHITE);
        assert_eq!(out.bits(), 0b0111_0111);
    }

    #[test]
    fn outside_box_is_background() {
        let bmp = logo();
        let s = SpriteState::RESET;
        for pos in [
            ScanPosition::new(199, 200),
            ScanPosition::new(264, 200),
            ScanPosition::new(230, 199),
            ScanPosition::new(230, 264),
        ] {
            assert_eq!(
                sprite_color(pos, &s, &bmp, false, RotationScale::Shift6),
                BACKGROUND
            );
        }
    }

    #[test]
    fn box_center_samples_tile_center() {
        let bmp = logo();
        let s = SpriteState::RESET;
        for angle in [0u8, 17, 64, 200] {
            let s = SpriteState { angle, ..s };
            let c = sprite_color(ScanPosition::new(232, 232), &s, &bmp, false, RotationScale::Shift6);
            assert_eq!(c, bmp.lookup(32, 32));
        }
    }

    #[test]
    fn unit_scale_origin_samples_tile_origin() {
        let bmp = logo();
        let c = sprite_color(
            ScanPosition::new(200, 200),
            &SpriteState::RESET,
            &bmp,
            false,
            RotationScale::UnitExact,
        );
        assert_eq!(c, bmp.lookup(0, 0));
        assert_ne!(c, BACKGROUND);
    }

    #[test]
    fn shift6_origin_is_background() {
        let bmp = logo();
        let c = sprite_color(
            ScanPosition::new(200, 200),
            &SpriteState::RESET,
            &bmp,
            false,
            RotationScale::Shift6,
        );
        assert_eq!(c, BACKGROUND);
    }

    #[test]
    fn tile_mode_ignores_box_and_rotation() {
        let bmp = logo();
        let s = SpriteState {
            angle: 99,
            ..SpriteState::RESET
        };
        // Far from the sprite box: local = (0 - 200, 0 - 200) mod 1024 = (824, 824).
        let c = sprite_color(ScanPosition::new(0, 0), &s, &bmp, true, RotationScale::Shift6);
        assert_eq!(c, bmp.lookup((824 & 63) as u8, (824 & 63) as u8));
        // At the sprite origin the unrotated tile origin shows.
        let c = sprite_color(ScanPosition::new(200, 200), &s, &bmp, true, RotationScale::Shift6);
        assert_eq!(c, bmp.lookup(0, 0));
    }
}
