//! Embassy async tasks
//!
//! Each button task owns one input pin and writes straight to the shared
//! player; the mutex inside keeps their frames apart on the wire.

pub mod buttons;

pub use buttons::{button_task, Player};
