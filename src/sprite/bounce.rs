/*!
Bounce/animation state machine.

Behavior (one update per frame boundary, computed from the current state and
committed as a whole):
1. `angle` advances by one step (wrapping mod 256).
2. `left` moves one pixel right if `dir_x`, else left; `top` moves one pixel down
   if `dir_y`, else up. Both wrap at the 10-bit position width.
3. Direction checks run against the already-moved position and the directions
   the sprite was moving with, each axis and edge independently:
   * `left - 1 == 0` while moving left   → start moving right
   * `left + 1 == LEFT_LIMIT` while moving right → start moving left
   * the same for `top` against `TOP_LIMIT`

The checks flip one step before the tile would touch the edge, so `left` stays
in `[1, LEFT_LIMIT - 1]` and `top` in `[1, TOP_LIMIT - 1]` once it is inside.
*/

use tracing::trace;

use super::{LEFT_LIMIT, SpriteState, TOP_LIMIT};
use crate::timing::POSITION_MASK;

impl SpriteState {
    /// State after one frame boundary.
    pub const fn bounced(self) -> Self {
        let left = step_axis(self.left, self.dir_x);
        let top = step_axis(self.top, self.dir_y);

        let mut dir_x = self.dir_x;
        if left.wrapping_sub(1) & POSITION_MASK == 0 && !self.dir_x {
            dir_x = true;
        }
        if (left + 1) & POSITION_MASK == LEFT_LIMIT && self.dir_x {
            dir_x = false;
        }

        let mut dir_y = self.dir_y;
        if top.wrapping_sub(1) & POSITION_MASK == 0 && !self.dir_y {
            dir_y = true;
        }
        if (top + 1) & POSITION_MASK == TOP_LIMIT && self.dir_y {
            dir_y = false;
        }

        SpriteState {
            left,
            top,
            dir_x,
            dir_y,
            angle: self.angle.wrapping_add(1),
        }
    }
}

#[inline]
const fn step_axis(value: u16, forward: bool) -> u16 {
    if forward {
        value.wrapping_add(1) & POSITION_MASK
    } else {
        value.wrapping_sub(1) & POSITION_MASK
    }
}

/// Single writer of `SpriteState`.
#[derive(Clone, Debug, Default)]
pub struct BounceController {
    state: SpriteState,
    // Frame boundaries seen since reset.
    updates: u64,
}

impl BounceController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary state (tests and demos).
    pub fn with_state(state: SpriteState) -> Self {
        Self { state, updates: 0 }
    }

    pub fn reset(&mut self) {
        self.state = SpriteState::RESET;
        self.updates = 0;
    }

    #[inline]
    pub fn state(&self) -> &SpriteState {
        &self.state
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Apply one frame-boundary update and return the committed state.
    pub fn on_frame_boundary(&mut self) -> SpriteState {
        let next = self.state.bounced();
        if next.dir_x != self.state.dir_x || next.dir_y != self.state.dir_y {
            trace!(
                left = next.left,
                top = next.top,
                dir_x = next.dir_x,
                dir_y = next.dir_y,
                "sprite bounced"
            );
        }
        self.state = next;
        self.updates += 1;
        trace!(angle = next.angle, left = next.left, top = next.top, "frame boundary");
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(left: u16, top: u16, dir_x: bool, dir_y: bool, angle: u8) -> SpriteState {
        SpriteState {
            left,
            top,
            dir_x,
            dir_y,
            angle,
        }
    }

    #[test]
    fn first_update_from_reset() {
        let mut b = BounceController::new();
        assert_eq!(*b.state(), state(200, 200, true, false, 0));
        let s = b.on_frame_boundary();
        assert_eq!(s, state(201, 199, true, false, 1));
        assert_eq!(b.updates(), 1);
    }

    #[test]
    fn left_edge_flips_one_step_early() {
        let mut b = BounceController::with_state(state(2, 100, false, true, 0));
        assert_eq!(b.on_frame_boundary(), state(1, 101, true, true, 1));
        assert_eq!(b.on_frame_boundary(), state(2, 102, true, true, 2));
    }

    #[test]
    fn right_edge_flips_one_step_early() {
        let mut b = BounceController::with_state(state(574, 100, true, true, 9));
        assert_eq!(b.on_frame_boundary(), state(575, 101, false, true, 10));
        assert_eq!(b.on_frame_boundary(), state(574, 102, false, true, 11));
    }

    #[test]
    fn top_and_bottom_edges() {
        let mut b = BounceController::with_state(state(300, 2, true, false, 0));
        assert_eq!(b.on_frame_boundary(), state(301, 1, true, true, 1));

        let mut b = BounceController::with_state(state(300, 414, true, true, 0));
        assert_eq!(b.on_frame_boundary(), state(301, 415, true, false, 1));
        assert_eq!(b.on_frame_boundary(), state(302, 414, true, false, 2));
    }

    #[test]
    fn flip_requires_matching_direction() {
        // Already moving right when reaching left == 1 from 0: no flip.
        let s = state(0, 50, true, true, 0).bounced();
        assert_eq!((s.left, s.dir_x), (1, true));
        // Moving left onto 575 does not trip the right-edge check.
        let s = state(576, 50, false, true, 0).bounced();
        assert_eq!((s.left, s.dir_x), (575, false));
    }

    #[test]
    fn angle_wraps() {
        let s = state(100, 100, true, true, 255).bounced();
        assert_eq!(s.angle, 0);
    }

    #[test]
    fn stays_on_screen_after_reset() {
        let mut b = BounceController::new();
        let (mut min_l, mut max_l, mut min_t, mut max_t) = (u16::MAX, 0, u16::MAX, 0);
        for _ in 0..5_000 {
            let s = b.on_frame_boundary();
            assert!(s.left <= LEFT_LIMIT, "left {}", s.left);
            assert!(s.top <= TOP_LIMIT, "top {}", s.top);
            min_l = min_l.min(s.left);
            max_l = max_l.max(s.left);
            min_t = min_t.min(s.top);
            max_t = max_t.max(s.top);
        }
        // Both edges of both axes were reached, one pixel short of the limits.
        assert_eq!((min_l, max_l), (1, LEFT_LIMIT - 1));
        assert_eq!((min_t, max_t), (1, TOP_LIMIT - 1));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut b = BounceController::new();
        for _ in 0..77 {
            b.on_frame_boundary();
        }
        b.reset();
        assert_eq!(*b.state(), SpriteState::RESET);
        assert_eq!(b.updates(), 0);
    }
}
