/*!
Fixed-point trigonometry for the sprite rotation.

Behavior:
- Angles are 8-bit: 256 steps per full turn, so angle arithmetic wraps for free.
- Values are signed 8-bit fixed point where 127 stands for 1.0.
- Only a cosine table is stored. The sine lookup is the same table shifted by a
  quarter period: `sin(a) = COS_TABLE[(a + 64) mod 256]`.

Notes:
- The quarter-period offset is +64, which makes the stored "sine" the negated
  mathematical sine. The rotation in `sprite::transform` consumes it as-is, so
  this only fixes the spin direction; it must not be "corrected".
*/

/// Table entry for 1.0.
pub const TRIG_ONE: i8 = 127;

/// Angle steps per quarter turn.
pub const QUARTER_TURN: u8 = 64;

/// `round(127 * cos(2*pi*i / 256))` for `i` in `0..256`.
const COS_TABLE: [i8; 256] = [
    127, 127, 127, 127, 126, 126, 126, 125, 125, 124, 123, 122, 122, 121, 120, 118,
    117, 116, 115, 113, 112, 111, 109, 107, 106, 104, 102, 100, 98, 96, 94, 92,
    90, 88, 85, 83, 81, 78, 76, 73, 71, 68, 65, 63, 60, 57, 54, 51,
    49, 46, 43, 40, 37, 34, 31, 28, 25, 22, 19, 16, 12, 9, 6, 3,
    0, -3, -6, -9, -12, -16, -19, -22, -25, -28, -31, -34, -37, -40, -43, -46,
    -49, -51, -54, -57, -60, -63, -65, -68, -71, -73, -76, -78, -81, -83, -85, -88,
    -90, -92, -94, -96, -98, -100, -102, -104, -106, -107, -109, -111, -112, -113, -115, -116,
    -117, -118, -120, -121, -122, -122, -123, -124, -125, -125, -126, -126, -126, -127, -127, -127,
    -127, -127, -127, -127, -126, -126, -126, -125, -125, -124, -123, -122, -122, -121, -120, -118,
    -117, -116, -115, -113, -112, -111, -109, -107, -106, -104, -102, -100, -98, -96, -94, -92,
    -90, -88, -85, -83, -81, -78, -76, -73, -71, -68, -65, -63, -60, -57, -54, -51,
    -49, -46, -43, -40, -37, -34, -31, -28, -25, -22, -19, -16, -12, -9, -6, -3,
    0, 3, 6, 9, 12, 16, 19, 22, 25, 28, 31, 34, 37, 40, 43, 46,
    49, 51, 54, 57, 60, 63, 65, 68, 71, 73, 76, 78, 81, 83, 85, 88,
    90, 92, 94, 96, 98, 100, 102, 104, 106, 107, 109, 111, 112, 113, 115, 116,
    117, 118, 120, 121, 122, 122, 123, 124, 125, 125, 126, 126, 126, 127, 127, 127,
];

/// Cosine of an 8-bit angle.
#[inline]
pub const fn cos(angle: u8) -> i8 {
    COS_TABLE[angle as usize]
}

/// Sine of an 8-bit angle, read from the cosine table a quarter turn ahead.
#[inline]
pub const fn sin(angle: u8) -> i8 {
    COS_TABLE[angle.wrapping_add(QUARTER_TURN) as usize]
}

/// Both factors of the rotation matrix for `angle`.
#[inline]
pub const fn cos_sin(angle: u8) -> (i8, i8) {
    (cos(angle), sin(angle))
}
