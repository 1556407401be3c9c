/*!
Screen → tile coordinate transform.

Steps for a beam position `pos` and sprite state `s`:
1. Local coordinate: `(pos.hpos - s.left, pos.vpos - s.top)`, wrapping at the
   10-bit counter width. The pixel belongs to the sprite box iff both are below
   `LOGO_SIZE`.
2. Center: take the low 6 bits and subtract 32, giving `(cx, cy)` in `[-32, 31]`.
3. Inverse rotation with the 8-bit trig table:
   ```text
   rx_raw = cx*cos + cy*sin
   ry_raw = cy*cos - cx*sin
   ```
4. Scale back and re-offset: `rx = (rx_raw >> 6) + 32`, same for `ry`.
   The result addresses the bitmap only if both lie in `[0, 63]`.

The shift divides by 64 while the table's unit is 127, so the bitmap appears at
roughly half size around the tile center. `RotationScale::Shift6` keeps that
behavior and is the default; `RotationScale::UnitExact` divides by 127 instead.
*/

use super::{LOGO_MASK, LOGO_SIZE, SpriteState};
use crate::timing::{POSITION_MASK, ScanPosition};
use crate::trig::{self, TRIG_ONE};

/// Offset from tile corner to tile center.
const HALF_TILE: i32 = (LOGO_SIZE / 2) as i32;

/// Fixed-point shift after the matrix multiply.
const ROTATION_SHIFT: u32 = 6;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RotationScale {
    /// Arithmetic shift by 6 (divide by 64, rounding toward negative infinity).
    #[default]
    Shift6,
    /// Floor division by the table's unit (127).
    UnitExact,
}

impl RotationScale {
    #[inline]
    const fn apply(self, raw: i32) -> i32 {
        match self {
            RotationScale::Shift6 => raw >> ROTATION_SHIFT,
            RotationScale::UnitExact => raw.div_euclid(TRIG_ONE as i32),
        }
    }
}

/// Beam position relative to the sprite's top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalCoordinate {
    pub x: u16,
    pub y: u16,
}

impl LocalCoordinate {
    #[inline]
    pub const fn between(pos: ScanPosition, sprite: &SpriteState) -> Self {
        Self {
            x: pos.hpos.wrapping_sub(sprite.left) & POSITION_MASK,
            y: pos.vpos.wrapping_sub(sprite.top) & POSITION_MASK,
        }
    }

    /// Inside the `LOGO_SIZE` x `LOGO_SIZE` box.
    #[inline]
    pub const fn in_tile(self) -> bool {
        self.x < LOGO_SIZE && self.y < LOGO_SIZE
    }

    /// Low 6 bits of each axis: the unrotated tile address.
    #[inline]
    pub const fn tile_xy(self) -> (u8, u8) {
        ((self.x & LOGO_MASK) as u8, (self.y & LOGO_MASK) as u8)
    }

    /// Tile address relative to the tile center, in `[-32, 31]`.
    #[inline]
    pub const fn centered(self) -> (i32, i32) {
        (
            (self.x & LOGO_MASK) as i32 - HALF_TILE,
            (self.y & LOGO_MASK) as i32 - HALF_TILE,
        )
    }
}

/// Tile-space coordinate after inverse rotation; may fall outside the tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RotatedCoordinate {
    pub rx: i16,
    pub ry: i16,
}

impl RotatedCoordinate {
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.rx >= 0 && self.rx < LOGO_SIZE as i16 && self.ry >= 0 && self.ry < LOGO_SIZE as i16
    }

    /// Bitmap address, or `None` for background.
    #[inline]
    pub const fn tile_xy(self) -> Option<(u8, u8)> {
        if self.in_bounds() {
            Some((self.rx as u8, self.ry as u8))
        } else {
            None
        }
    }
}

/// Rotate a local coordinate about the tile center by `angle`.
#[inline]
pub const fn rotate(local: LocalCoordinate, angle: u8, scale: RotationScale) -> RotatedCoordinate {
    let (cx, cy) = local.centered();
    let (cos, sin) = trig::cos_sin(angle);
    let (cos, sin) = (cos as i32, sin as i32);

    let rx_raw = cx * cos + cy * sin;
    let ry_raw = cy * cos - cx * sin;

    // |raw| <= 2 * 32 * 127, so the scaled value always fits in i16.
    RotatedCoordinate {
        rx: (scale.apply(rx_raw) + HALF_TILE) as i16,
        ry: (scale.apply(ry_raw) + HALF_TILE) as i16,
    }
}
