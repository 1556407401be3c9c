#![doc = r#"
spinlogo library crate.

A cycle-stepped model of a 640x480 VGA signal generator that draws a 64x64
indexed-color logo bouncing around the screen and rotating one step per frame.
One call to `Board::tick` is one pixel clock; the result is the packed output
byte (sync pulses plus 2 bits per color channel).

Modules:
- timing: beam counters, sync/blanking windows, frame-edge detection
- trig: 256-step cosine/sine table in 1.7 fixed point
- sprite: sprite state, bounce controller, rotation transform, bitmap storage and the built-in logo
- compositor: sprite compositing, blanking, color truncation, output register
- pattern: the `Pattern` seam with the rotating logo and a checkerboard
- pins: input/output pin encoding
- board: the per-tick update tying everything together
- frame: RGBA frame buffer assembled from the output stream
- error: error types for bitmap construction and host-side output
- screenshot (feature `screenshot`): PNG export
- display (feature `display`): live window

In tests, shared board builders are available under `crate::test_utils`.
"#]

pub mod board;
pub mod compositor;
pub mod error;
pub mod frame;
pub mod pattern;
pub mod pins;
pub mod sprite;
pub mod timing;
pub mod trig;

#[cfg(feature = "display")]
pub mod display;
#[cfg(feature = "screenshot")]
pub mod screenshot;

// Re-export commonly used types at the crate root for convenience.
pub use board::Board;
pub use compositor::Rgb222;
pub use error::BitmapError;
pub use frame::Frame;
pub use pattern::{Checkerboard, Pattern, RotatingLogo};
pub use pins::{Config, PinInputs, PinOut};
pub use sprite::{LogoEncoding, Rgb, RotationScale, SpriteBitmap, SpriteState};
pub use timing::ScanPosition;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
