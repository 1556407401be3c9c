/*!
Pattern strategies behind the shared timing/compositing path.

A `Pattern` supplies the color for each beam position and receives the
frame-boundary pulse. The `Board` owns exactly one pattern and drives it; the
timing generator, blanking and output register are the same for every pattern.

Implementations:
- `RotatingLogo`: the bouncing, rotating logo (`BounceController` + transform +
  `SpriteBitmap`, composited by `compositor::sprite_color`).
- `Checkerboard`: static two-color squares; ignores the configuration bits.
*/

use crate::compositor::sprite_color;
use crate::error::BitmapError;
use crate::pins::Config;
use crate::sprite::logo::builtin_logo;
use crate::sprite::{
    BounceController, LogoEncoding, Rgb, RotationScale, SpriteBitmap, SpriteState,
};
use crate::timing::ScanPosition;

pub trait Pattern {
    fn name(&self) -> &'static str;

    /// Color for `pos` before blanking. Must be total and allocation-free.
    fn color_at(&self, pos: ScanPosition, config: Config) -> Rgb;

    /// One-tick pulse at the start of each frame.
    fn on_frame_boundary(&mut self) {}

    fn reset(&mut self) {}

    /// Current sprite state, for patterns that have one.
    fn sprite(&self) -> Option<SpriteState> {
        None
    }
}

pub struct RotatingLogo {
    bounce: BounceController,
    bitmap: SpriteBitmap,
    scale: RotationScale,
}

impl std::fmt::Debug for RotatingLogo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingLogo")
            .field("sprite", self.bounce.state())
            .field("bitmap", &self.bitmap)
            .field("scale", &self.scale)
            .finish()
    }
}

impl RotatingLogo {
    pub fn new(bitmap: SpriteBitmap, scale: RotationScale) -> Self {
        Self {
            bounce: BounceController::new(),
            bitmap,
            scale,
        }
    }

    /// The built-in logo with the default (bit-compatible) rotation scale.
    pub fn builtin(encoding: LogoEncoding) -> Result<Self, BitmapError> {
        Ok(Self::new(builtin_logo(encoding)?, RotationScale::default()))
    }

    pub fn bounce(&self) -> &BounceController {
        &self.bounce
    }

    pub fn bitmap(&self) -> &SpriteBitmap {
        &self.bitmap
    }

    pub fn scale(&self) -> RotationScale {
        self.scale
    }
}

impl Pattern for RotatingLogo {
    fn name(&self) -> &'static str {
        "logo"
    }

    #[inline]
    fn color_at(&self, pos: ScanPosition, config: Config) -> Rgb {
        sprite_color(
            pos,
            self.bounce.state(),
            &self.bitmap,
            config.tile_mode,
            self.scale,
        )
    }

    fn on_frame_boundary(&mut self) {
        self.bounce.on_frame_boundary();
    }

    fn reset(&mut self) {
        self.bounce.reset();
    }

    fn sprite(&self) -> Option<SpriteState> {
        Some(*self.bounce.state())
    }
}

/// Two-color squares of `1 << cell_bits` pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkerboard {
    cell_bits: u32,
    colors: [Rgb; 2],
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            cell_bits: 5,
            colors: [Rgb::BLACK, Rgb::WHITE],
        }
    }
}

impl Checkerboard {
    pub fn new(cell_bits: u32, colors: [Rgb; 2]) -> Self {
        Self {
            cell_bits: cell_bits.min(9),
            colors,
        }
    }
}

impl Pattern for Checkerboard {
    fn name(&self) -> &'static str {
        "checkerboard"
    }

    #[inline]
    fn color_at(&self, pos: ScanPosition, _config: Config) -> Rgb {
        let parity = ((pos.hpos >> self.cell_bits) ^ (pos.vpos >> self.cell_bits)) & 1;
        self.colors[parity as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_cells() {
        let c = Checkerboard::default();
        let cfg = Config::default();
        assert_eq!(c.color_at(ScanPosition::new(0, 0), cfg), Rgb::BLACK);
        assert_eq!(c.color_at(ScanPosition::new(31, 31), cfg), Rgb::BLACK);
        assert_eq!(c.color_at(ScanPosition::new(32, 0), cfg), Rgb::WHITE);
        assert_eq!(c.color_at(ScanPosition::new(0, 32), cfg), Rgb::WHITE);
        assert_eq!(c.color_at(ScanPosition::new(32, 32), cfg), Rgb::BLACK);
        assert_eq!(c.sprite(), None);
    }

    #[test]
    fn checkerboard_clamps_cell_size() {
        let c = Checkerboard::new(40, [Rgb::WHITE, Rgb::BLACK]);
        // Clamped to 512-pixel cells: (799, 524) sits in cell (1, 1).
        assert_eq!(
            c.color_at(ScanPosition::new(799, 524), Config::default()),
            Rgb::WHITE
        );
    }

    #[test]
    fn logo_forwards_frame_pulses_and_reset() {
        let mut logo = RotatingLogo::builtin(LogoEncoding::Planar).unwrap();
        assert_eq!(logo.name(), "logo");
        assert_eq!(logo.sprite(), Some(SpriteState::RESET));
        logo.on_frame_boundary();
        logo.on_frame_boundary();
        let s = logo.sprite().unwrap();
        assert_eq!((s.angle, s.left, s.top), (2, 202, 198));
        logo.reset();
        assert_eq!(logo.sprite(), Some(SpriteState::RESET));
    }

    #[test]
    fn logo_tile_mode_comes_from_config() {
        let logo = RotatingLogo::builtin(LogoEncoding::Packed).unwrap();
        let far = ScanPosition::new(8, 8);
        let tiled = logo.color_at(far, Config { tile_mode: true });
        let normal = logo.color_at(far, Config { tile_mode: false });
        assert_eq!(normal, Rgb::BLACK);
        // local = (8 - 200) mod 1024 = 832 → low 6 bits = 0: the marker corner.
        assert_eq!(tiled, logo.bitmap().lookup(0, 0));
        assert_ne!(tiled, Rgb::BLACK);
    }
}
