//! Calendar and clock engines behind the booking form pickers.

pub mod clock;
mod date;
mod grid;
mod picker;

pub use clock::{ClockMode, Meridiem, Preset, TimePicker};
pub use date::*;
pub use grid::*;
pub use picker::*;
