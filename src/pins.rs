/*!
Pin-level interface of the generator.

Inputs (sampled every tick):
- `rst_n`: active-low synchronous reset.
- `ui_in`: configuration byte. Bit 0 selects tile mode; bits 1..=7 are reserved
  and ignored.

Output (one byte per tick), bit 7 down to bit 0:

```text
  7      6    5    4    3      2    1    0
  hsync  B0   G0   R0   vsync  B1   G1   R1
```

Each color channel is two bits (`R1:R0`, ...). Sync bits are 1 while the pulse
is asserted.
*/

use crate::compositor::Rgb222;

/// Input port state for one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinInputs {
    pub rst_n: bool,
    pub ui_in: u8,
}

impl PinInputs {
    /// Reset released, all configuration bits clear.
    pub const RUN: PinInputs = PinInputs {
        rst_n: true,
        ui_in: 0,
    };
    /// Reset asserted.
    pub const RESET: PinInputs = PinInputs {
        rst_n: false,
        ui_in: 0,
    };

    pub const fn running(config: Config) -> Self {
        Self {
            rst_n: true,
            ui_in: config.to_ui_in(),
        }
    }

    #[inline]
    pub const fn config(self) -> Config {
        Config::from_ui_in(self.ui_in)
    }
}

impl Default for PinInputs {
    fn default() -> Self {
        Self::RUN
    }
}

const TILE_MODE_BIT: u8 = 1 << 0;

/// Decoded configuration bits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config {
    /// Repeat the logo over the whole visible area.
    pub tile_mode: bool,
}

impl Config {
    #[inline]
    pub const fn from_ui_in(ui_in: u8) -> Self {
        Self {
            tile_mode: ui_in & TILE_MODE_BIT != 0,
        }
    }

    pub const fn to_ui_in(self) -> u8 {
        if self.tile_mode { TILE_MODE_BIT } else { 0 }
    }
}

const HSYNC: u8 = 1 << 7;
const B0: u8 = 1 << 6;
const G0: u8 = 1 << 5;
const R0: u8 = 1 << 4;
const VSYNC: u8 = 1 << 3;
const B1: u8 = 1 << 2;
const G1: u8 = 1 << 1;
const R1: u8 = 1 << 0;

/// Packed output byte.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PinOut(pub u8);

impl PinOut {
    /// Syncs deasserted, black.
    pub const BLANK: PinOut = PinOut(0);

    pub const fn pack(hsync: bool, vsync: bool, rgb: Rgb222) -> Self {
        let mut v = 0u8;
        if hsync {
            v |= HSYNC;
        }
        if vsync {
            v |= VSYNC;
        }
        v |= lane(rgb.r, R0, R1);
        v |= lane(rgb.g, G0, G1);
        v |= lane(rgb.b, B0, B1);
        PinOut(v)
    }

    #[inline]
    pub const fn hsync(self) -> bool {
        self.0 & HSYNC != 0
    }

    #[inline]
    pub const fn vsync(self) -> bool {
        self.0 & VSYNC != 0
    }

    pub const fn rgb(self) -> Rgb222 {
        Rgb222 {
            r: unlane(self.0, R0, R1),
            g: unlane(self.0, G0, G1),
            b: unlane(self.0, B0, B1),
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

#[inline]
const fn lane(channel: u8, lo: u8, hi: u8) -> u8 {
    let mut v = 0;
    if channel & 0b01 != 0 {
        v |= lo;
    }
    if channel & 0b10 != 0 {
        v |= hi;
    }
    v
}

#[inline]
const fn unlane(bits: u8, lo: u8, hi: u8) -> u8 {
    let mut c = 0;
    if bits & lo != 0 {
        c |= 0b01;
    }
    if bits & hi != 0 {
        c |= 0b10;
    }
    c
}
