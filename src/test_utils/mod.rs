//! Shared builders for board-level tests.
//!
//! Boards built here start in the reset state; `released` is the input used
//! for the ticks that follow.

#![allow(dead_code)]

use crate::board::Board;
use crate::pattern::{Checkerboard, RotatingLogo};
use crate::pins::{Config, PinInputs, PinOut};
use crate::sprite::logo::builtin_logo;
use crate::sprite::{LogoEncoding, RotationScale};

/// Board driving the built-in logo.
pub fn logo_board(encoding: LogoEncoding, scale: RotationScale) -> Board {
    let bitmap = builtin_logo(encoding).expect("built-in logo is valid");
    Board::with_pattern(RotatingLogo::new(bitmap, scale))
}

pub fn default_logo_board() -> Board {
    logo_board(LogoEncoding::default(), RotationScale::default())
}

pub fn checker_board() -> Board {
    Board::with_pattern(Checkerboard::default())
}

/// Reset released with the given tile-mode bit.
pub fn released(tile_mode: bool) -> PinInputs {
    PinInputs::running(Config { tile_mode })
}

/// Assert reset for one tick.
pub fn hold_reset(board: &mut Board) {
    board.tick(PinInputs::RESET);
}

/// Collect `n` output bytes.
pub fn run_ticks(board: &mut Board, inputs: PinInputs, n: usize) -> Vec<PinOut> {
    (0..n).map(|_| board.tick(inputs)).collect()
}
