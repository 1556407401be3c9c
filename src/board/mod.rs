/*!
Board: the whole generator advanced one pixel clock at a time.

Order of operations for one tick with reset released:
1. Decode the configuration byte.
2. Derive sync/blanking and the pattern color from the current beam position.
3. Feed `vpos` to the frame-edge detector; on the edge the pattern receives its
   frame-boundary pulse (after the color for this tick was taken).
4. Advance the counters.
5. Register the output byte.

With reset asserted the tick does nothing but clear state: counters go to
(0, 0), the edge detector to `vpos = 0`, the pattern to its initial state and
the output register to `PinOut::BLANK`. Reset dominates every other input.

Notes:
- The first frame-boundary pulse after reset arrives on tick
  `TICKS_PER_FRAME + 1`, when the counters wrap back to (0, 0) for the first
  time.
- Nothing here allocates or fails per tick; `capture_frame` allocates the
  frame buffer once.
*/

use tracing::{debug, trace};

use crate::compositor::Compositor;
use crate::frame::Frame;
use crate::pattern::Pattern;
use crate::pins::{Config, PinInputs, PinOut};
use crate::sprite::SpriteState;
use crate::timing::{FrameEdgeDetector, ScanPosition, SyncState, TICKS_PER_FRAME, TimingGenerator};

pub struct Board {
    // Beam counters and the registered "previous vpos"
    timing: TimingGenerator,
    frame_edge: FrameEdgeDetector,

    // Content source and output register
    pattern: Box<dyn Pattern>,
    compositor: Compositor,

    // Bookkeeping since the last reset
    ticks: u64,
    frames: u64,
    last_config: Config,
    in_reset: bool,
}

impl Board {
    pub fn new(pattern: Box<dyn Pattern>) -> Self {
        debug!(pattern = pattern.name(), "board created");
        Self {
            timing: TimingGenerator::new(),
            frame_edge: FrameEdgeDetector::new(),
            pattern,
            compositor: Compositor::new(),
            ticks: 0,
            frames: 0,
            last_config: Config::default(),
            in_reset: false,
        }
    }

    pub fn with_pattern(pattern: impl Pattern + 'static) -> Self {
        Self::new(Box::new(pattern))
    }

    /// Put every register in its reset state.
    pub fn reset(&mut self) {
        self.timing.reset();
        self.frame_edge.reset();
        self.pattern.reset();
        self.compositor.reset();
        self.ticks = 0;
        self.frames = 0;
    }

    /// Advance one pixel clock and return the registered output byte.
    #[inline]
    pub fn tick(&mut self, inputs: PinInputs) -> PinOut {
        self.step(inputs).1
    }

    /// One tick; also returns the beam position the output byte belongs to.
    pub(crate) fn step(&mut self, inputs: PinInputs) -> (ScanPosition, PinOut) {
        if !inputs.rst_n {
            if !self.in_reset {
                debug!(ticks = self.ticks, frames = self.frames, "reset asserted");
                self.in_reset = true;
            }
            self.reset();
            return (ScanPosition::ORIGIN, PinOut::BLANK);
        }
        if self.in_reset {
            debug!("reset released");
            self.in_reset = false;
        }

        let config = inputs.config();
        if config != self.last_config {
            debug!(tile_mode = config.tile_mode, "configuration changed");
            self.last_config = config;
        }

        let pos = self.timing.position();
        let sync = SyncState::at(pos);
        let color = self.pattern.color_at(pos, config);

        if self.frame_edge.update(pos.vpos) {
            self.pattern.on_frame_boundary();
            self.frames += 1;
            trace!(frame = self.frames, "frame boundary");
        }

        self.timing.advance();
        let out = self.compositor.latch(sync, color);
        self.ticks += 1;
        (pos, out)
    }

    /// Run `n` ticks with constant inputs; returns the last output byte.
    pub fn run(&mut self, inputs: PinInputs, n: u64) -> PinOut {
        for _ in 0..n {
            self.tick(inputs);
        }
        self.compositor.output()
    }

    /// Run until the counters sit at (0, 0), then render one full frame.
    pub fn capture_frame(&mut self, inputs: PinInputs) -> Frame {
        while self.timing.position() != ScanPosition::ORIGIN {
            self.step(inputs);
        }
        let mut frame = Frame::new();
        for _ in 0..TICKS_PER_FRAME {
            let (pos, pins) = self.step(inputs);
            frame.put(pos, pins);
        }
        frame
    }

    #[inline]
    pub fn position(&self) -> ScanPosition {
        self.timing.position()
    }

    pub fn sprite(&self) -> Option<SpriteState> {
        self.pattern.sprite()
    }

    #[inline]
    pub fn output(&self) -> PinOut {
        self.compositor.output()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Frame-boundary pulses since the last reset.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pattern(&self) -> &dyn Pattern {
        self.pattern.as_ref()
    }
}
