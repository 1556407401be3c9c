/*!
Indexed-color logo storage.

Contract:
- An `IndexedBitmapSource` answers `index_at(x, y)` for `x, y` in `[0, 63]` with a
  palette index of at most `bits_per_pixel()` bits. It never fails.
- A `Palette` maps indices to `Rgb` colors quantized to 4 bits per channel.
  Indices past the end of the palette read as black.
- `SpriteBitmap` joins the two: `lookup(x, y) -> Rgb`.

Encodings:
- `PackedNibbles`: 4 bpp, row-major, two pixels per byte with the even column in
  the high nibble (32 bytes per row, 2048 bytes total).
- `BitPlanes`: 1..=4 planes of 64 rows x `u64`; column `x` is bit `x` of a row,
  plane `p` supplies bit `p` of the index.

Both are chosen once at construction (`LogoEncoding`); the tick path only sees
the trait object.
*/

use super::{LOGO_MASK, LOGO_SIZE};
use crate::error::BitmapError;

const SIDE: usize = LOGO_SIZE as usize;
const PIXELS: usize = SIDE * SIDE;
const MAX_PLANES: usize = 4;
const PALETTE_LEN: usize = 16;

/// Packed-nibble payload size.
pub const PACKED_LEN: usize = PIXELS / 2;

/// Palette color, 4 bits per channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 0xF,
        g: 0xF,
        b: 0xF,
    };

    /// Channels are masked to 4 bits.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r & 0xF,
            g: g & 0xF,
            b: b & 0xF,
        }
    }

    /// Quantize an 8-bit-per-channel color.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r >> 4,
            g: g >> 4,
            b: b >> 4,
        }
    }
}

/// Which palette index sits at a tile coordinate.
pub trait IndexedBitmapSource {
    /// `x` and `y` are tile coordinates in `[0, 63]`.
    fn index_at(&self, x: u8, y: u8) -> u8;

    fn bits_per_pixel(&self) -> u8;
}

/// Storage layout for the logo, picked at configuration time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LogoEncoding {
    #[default]
    Packed,
    Planar,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedNibbles {
    data: Vec<u8>,
}

impl PackedNibbles {
    /// Wrap an existing 2048-byte packed image.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        if data.len() != PACKED_LEN {
            return Err(BitmapError::DataLength {
                expected: PACKED_LEN,
                actual: data.len(),
            });
        }
        Ok(Self {
            data: data.to_vec(),
        })
    }

    /// Build from one index per pixel (row-major, 4096 entries, each < 16).
    pub fn from_indices(indices: &[u8]) -> Result<Self, BitmapError> {
        check_indices(indices, 4)?;
        let data = indices
            .chunks_exact(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect();
        Ok(Self { data })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl IndexedBitmapSource for PackedNibbles {
    #[inline]
    fn index_at(&self, x: u8, y: u8) -> u8 {
        let (x, y) = (x as usize & (SIDE - 1), y as usize & (SIDE - 1));
        let byte = self.data[y * (SIDE / 2) + x / 2];
        if x & 1 == 0 { byte >> 4 } else { byte & 0x0F }
    }

    fn bits_per_pixel(&self) -> u8 {
        4
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitPlanes {
    planes: Vec<[u64; SIDE]>,
}

impl BitPlanes {
    /// Wrap precomputed planes (plane 0 is the index LSB).
    pub fn from_planes(planes: Vec<[u64; SIDE]>) -> Result<Self, BitmapError> {
        if planes.is_empty() || planes.len() > MAX_PLANES {
            return Err(BitmapError::PlaneCount(planes.len()));
        }
        Ok(Self { planes })
    }

    /// Split one index per pixel (row-major, 4096 entries) into `bits` planes.
    pub fn from_indices(indices: &[u8], bits: u8) -> Result<Self, BitmapError> {
        if bits == 0 || bits as usize > MAX_PLANES {
            return Err(BitmapError::PlaneCount(bits as usize));
        }
        check_indices(indices, bits)?;
        let mut planes = vec![[0u64; SIDE]; bits as usize];
        for (i, &index) in indices.iter().enumerate() {
            let (x, y) = (i % SIDE, i / SIDE);
            for (p, plane) in planes.iter_mut().enumerate() {
                if (index >> p) & 1 != 0 {
                    plane[y] |= 1 << x;
                }
            }
        }
        Ok(Self { planes })
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }
}

impl IndexedBitmapSource for BitPlanes {
    #[inline]
    fn index_at(&self, x: u8, y: u8) -> u8 {
        let (x, y) = (x as u32 & (SIDE as u32 - 1), y as usize & (SIDE - 1));
        self.planes
            .iter()
            .enumerate()
            .fold(0, |acc, (p, plane)| acc | ((((plane[y] >> x) & 1) as u8) << p))
    }

    fn bits_per_pixel(&self) -> u8 {
        self.planes.len() as u8
    }
}

fn check_indices(indices: &[u8], bits: u8) -> Result<(), BitmapError> {
    if indices.len() != PIXELS {
        return Err(BitmapError::DataLength {
            expected: PIXELS,
            actual: indices.len(),
        });
    }
    let limit = 1u16 << bits;
    match indices.iter().position(|&i| i as u16 >= limit) {
        Some(i) => Err(BitmapError::IndexRange {
            x: (i % SIDE) as u8,
            y: (i / SIDE) as u8,
            index: indices[i],
            bits,
        }),
        None => Ok(()),
    }
}

/// Up to 16 colors; unused entries are black.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb; PALETTE_LEN],
    len: usize,
}

impl Palette {
    pub fn from_colors(colors: &[Rgb]) -> Result<Self, BitmapError> {
        if colors.len() > PALETTE_LEN {
            return Err(BitmapError::PaletteSize(colors.len()));
        }
        let mut entries = [Rgb::BLACK; PALETTE_LEN];
        entries[..colors.len()].copy_from_slice(colors);
        Ok(Self {
            entries,
            len: colors.len(),
        })
    }

    #[inline]
    pub fn color(&self, index: u8) -> Rgb {
        // Entries past `len` are kept black.
        self.entries[index as usize & (PALETTE_LEN - 1)]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Index grid plus palette.
pub struct SpriteBitmap {
    source: Box<dyn IndexedBitmapSource>,
    palette: Palette,
}

impl std::fmt::Debug for SpriteBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpriteBitmap")
            .field("bits_per_pixel", &self.source.bits_per_pixel())
            .field("palette", &self.palette)
            .finish()
    }
}

impl SpriteBitmap {
    pub fn new(source: impl IndexedBitmapSource + 'static, palette: Palette) -> Self {
        Self {
            source: Box::new(source),
            palette,
        }
    }

    #[inline]
    pub fn index_at(&self, x: u8, y: u8) -> u8 {
        self.source
            .index_at(x & LOGO_MASK as u8, y & LOGO_MASK as u8)
    }

    /// Color at tile coordinate `(x, y)`; only the low 6 bits are used.
    #[inline]
    pub fn lookup(&self, x: u8, y: u8) -> Rgb {
        self.palette.color(self.index_at(x, y))
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn bits_per_pixel(&self) -> u8 {
        self.source.bits_per_pixel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn xor_indices() -> Vec<u8> {
        (0..PIXELS).map(|i| ((i % SIDE) ^ (i / SIDE)) as u8 & 0x0F).collect()
    }

    #[test]
    fn packed_nibble_addressing() {
        let mut data = vec![0u8; PACKED_LEN];
        data[0] = 0xA5; // (0,0) = A, (1,0) = 5
        data[32 + 3] = 0x7C; // (6,1) = 7, (7,1) = C
        let p = PackedNibbles::from_bytes(&data).unwrap();
        assert_eq!(p.index_at(0, 0), 0xA);
        assert_eq!(p.index_at(1, 0), 0x5);
        assert_eq!(p.index_at(6, 1), 0x7);
        assert_eq!(p.index_at(7, 1), 0xC);
        assert_eq!(p.index_at(2, 0), 0);
    }

    #[test]
    fn packed_rejects_wrong_length() {
        assert_eq!(
            PackedNibbles::from_bytes(&[0; 100]),
            Err(BitmapError::DataLength {
                expected: 2048,
                actual: 100
            })
        );
    }

    #[test]
    fn encodings_agree_on_the_same_picture() {
        let indices = xor_indices();
        let packed = PackedNibbles::from_indices(&indices).unwrap();
        let planar = BitPlanes::from_indices(&indices, 4).unwrap();
        for y in 0..64u8 {
            for x in 0..64u8 {
                let want = indices[y as usize * SIDE + x as usize];
                assert_eq!(packed.index_at(x, y), want);
                assert_eq!(planar.index_at(x, y), want);
            }
        }
    }

    #[test]
    fn bit_planes_column_63_is_top_bit() {
        let mut plane = [0u64; SIDE];
        plane[5] = 1 << 63;
        let p = BitPlanes::from_planes(vec![plane]).unwrap();
        assert_eq!(p.bits_per_pixel(), 1);
        assert_eq!(p.index_at(63, 5), 1);
        assert_eq!(p.index_at(62, 5), 0);
        assert_eq!(p.index_at(63, 4), 0);
    }

    #[test]
    fn plane_count_is_validated() {
        assert_eq!(
            BitPlanes::from_planes(Vec::new()),
            Err(BitmapError::PlaneCount(0))
        );
        assert_eq!(
            BitPlanes::from_planes(vec![[0; SIDE]; 5]),
            Err(BitmapError::PlaneCount(5))
        );
        assert!(BitPlanes::from_indices(&xor_indices(), 0).is_err());
    }

    #[test]
    fn index_out_of_depth_is_reported_with_position() {
        let mut indices = vec![0u8; PIXELS];
        indices[2 * SIDE + 9] = 4;
        assert_eq!(
            BitPlanes::from_indices(&indices, 2),
            Err(BitmapError::IndexRange {
                x: 9,
                y: 2,
                index: 4,
                bits: 2
            })
        );
    }

    #[test]
    fn palette_pads_with_black() {
        let pal = Palette::from_colors(&[Rgb::WHITE, Rgb::new(3, 2, 1)]).unwrap();
        assert_eq!(pal.len(), 2);
        assert_eq!(pal.color(0), Rgb::WHITE);
        assert_eq!(pal.color(1), Rgb { r: 3, g: 2, b: 1 });
        assert_eq!(pal.color(7), Rgb::BLACK);
        assert_eq!(
            Palette::from_colors(&[Rgb::BLACK; 17]),
            Err(BitmapError::PaletteSize(17))
        );
    }

    #[test]
    fn rgb_quantization() {
        assert_eq!(Rgb::from_rgb888(0xFF, 0x80, 0x0F), Rgb { r: 15, g: 8, b: 0 });
        assert_eq!(Rgb::new(0x1F, 0x10, 0xFF), Rgb { r: 15, g: 0, b: 15 });
    }

    #[test]
    fn sprite_bitmap_lookup_masks_coordinates() {
        let indices = xor_indices();
        let colors: Vec<Rgb> = (0..16).map(|i| Rgb::new(i, 15 - i, 0)).collect();
        let bmp = SpriteBitmap::new(
            PackedNibbles::from_indices(&indices).unwrap(),
            Palette::from_colors(&colors).unwrap(),
        );
        assert_eq!(bmp.lookup(3, 5), colors[3 ^ 5]);
        assert_eq!(bmp.lookup(64 + 3, 128 + 5), colors[3 ^ 5]);
        assert_eq!(bmp.bits_per_pixel(), 4);
    }
}
