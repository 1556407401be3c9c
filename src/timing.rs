/*!
Scan timing for 640x480@60 VGA.

Behavior:
- Two free-running counters: `hpos` counts pixel clocks within a line, `vpos`
  counts lines within a frame. `hpos` wraps to 0 after `H_MAX` and carries into
  `vpos`, which wraps to 0 after `V_MAX`. Every `(hpos, vpos)` pair is visited
  exactly once per frame, row-major.
- Sync and visibility are pure functions of the position:
  * hsync while `hpos` is in `[H_SYNC_START, H_SYNC_END]`
  * vsync while `vpos` is in `[V_SYNC_START, V_SYNC_END]`
  * display_on while `hpos < H_DISPLAY && vpos < V_DISPLAY`
- `FrameEdgeDetector` turns the `vpos` stream into a one-tick pulse on the first
  tick of each frame by comparing against a one-tick-delayed copy.

Line layout (pixel clocks):   | display 640 | front 16 | sync 96 | back 48 |
Frame layout (lines):         | display 480 | bottom 10 | sync 2 | top 33 |
*/

/// Visible pixels per line.
pub const H_DISPLAY: u16 = 640;
/// Front porch (right border) in pixel clocks.
pub const H_FRONT: u16 = 16;
/// Horizontal sync width.
pub const H_SYNC: u16 = 96;
/// Back porch (left border).
pub const H_BACK: u16 = 48;

pub const H_SYNC_START: u16 = H_DISPLAY + H_FRONT;
pub const H_SYNC_END: u16 = H_DISPLAY + H_FRONT + H_SYNC - 1;
/// Last `hpos` value of a line.
pub const H_MAX: u16 = H_DISPLAY + H_BACK + H_FRONT + H_SYNC - 1;

/// Visible lines per frame.
pub const V_DISPLAY: u16 = 480;
/// Lines between the picture and vsync.
pub const V_BOTTOM: u16 = 10;
/// Vertical sync height.
pub const V_SYNC: u16 = 2;
/// Lines between vsync and the picture.
pub const V_TOP: u16 = 33;

pub const V_SYNC_START: u16 = V_DISPLAY + V_BOTTOM;
pub const V_SYNC_END: u16 = V_DISPLAY + V_BOTTOM + V_SYNC - 1;
/// Last `vpos` value of a frame.
pub const V_MAX: u16 = V_DISPLAY + V_TOP + V_BOTTOM + V_SYNC - 1;

pub const TICKS_PER_LINE: u32 = H_MAX as u32 + 1;
pub const LINES_PER_FRAME: u32 = V_MAX as u32 + 1;
pub const TICKS_PER_FRAME: u32 = TICKS_PER_LINE * LINES_PER_FRAME;

/// Counter width; positions and sprite offsets subtract modulo this.
pub const POSITION_BITS: u32 = 10;
pub const POSITION_MASK: u16 = (1 << POSITION_BITS) - 1;

/// Beam position within the frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanPosition {
    pub hpos: u16,
    pub vpos: u16,
}

impl ScanPosition {
    pub const ORIGIN: ScanPosition = ScanPosition { hpos: 0, vpos: 0 };

    pub const fn new(hpos: u16, vpos: u16) -> Self {
        Self { hpos, vpos }
    }

    /// Position one pixel clock later.
    #[inline]
    pub const fn next(self) -> Self {
        if self.hpos >= H_MAX {
            let vpos = if self.vpos >= V_MAX { 0 } else { self.vpos + 1 };
            Self { hpos: 0, vpos }
        } else {
            Self {
                hpos: self.hpos + 1,
                vpos: self.vpos,
            }
        }
    }

    /// Row-major index within the frame (`0..TICKS_PER_FRAME`).
    #[inline]
    pub const fn frame_index(self) -> u32 {
        self.vpos as u32 * TICKS_PER_LINE + self.hpos as u32
    }
}

/// Sync pulses and visibility for one position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncState {
    pub hsync: bool,
    pub vsync: bool,
    pub display_on: bool,
}

impl SyncState {
    #[inline]
    pub const fn at(pos: ScanPosition) -> Self {
        Self {
            hsync: pos.hpos >= H_SYNC_START && pos.hpos <= H_SYNC_END,
            vsync: pos.vpos >= V_SYNC_START && pos.vpos <= V_SYNC_END,
            display_on: pos.hpos < H_DISPLAY && pos.vpos < V_DISPLAY,
        }
    }
}

/// Free-running horizontal/vertical counters.
#[derive(Clone, Debug, Default)]
pub struct TimingGenerator {
    pos: ScanPosition,
}

impl TimingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.pos = ScanPosition::ORIGIN;
    }

    #[inline]
    pub fn position(&self) -> ScanPosition {
        self.pos
    }

    #[inline]
    pub fn sync(&self) -> SyncState {
        SyncState::at(self.pos)
    }

    /// Advance one pixel clock and return the new position.
    #[inline]
    pub fn advance(&mut self) -> ScanPosition {
        self.pos = self.pos.next();
        self.pos
    }
}

/// Rising-edge detector for "vpos just became 0".
///
/// `prev_vpos` is refreshed on every update regardless of the result, so the
/// pulse lasts exactly one tick per frame.
#[derive(Clone, Debug, Default)]
pub struct FrameEdgeDetector {
    prev_vpos: u16,
}

impl FrameEdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.prev_vpos = 0;
    }

    /// Feed the current `vpos`; true on the first tick of a new frame.
    #[inline]
    pub fn update(&mut self, vpos: u16) -> bool {
        let edge = vpos == 0 && self.prev_vpos != 0;
        self.prev_vpos = vpos;
        edge
    }

    pub fn prev_vpos(&self) -> u16 {
        self.prev_vpos
    }
}
