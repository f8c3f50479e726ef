//! Platform abstraction layer
//!
//! Handles the host side of the loop:
//! - Time/ticks (frame clock, dt measurement, FPS)
//! - Input (key snapshots mapped to gameplay intents)

pub mod clock;
pub mod input;

pub use clock::{FrameClock, FrameTiming, MonotonicClock};
pub use input::{InputMapper, InputSnapshot, Intents, Key};
