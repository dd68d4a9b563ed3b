//! DY-SV17F MP3 module driver
//!
//! This crate drives the DY-SV17F serial MP3 playback module over any
//! transmitter implementing [`dysv17f_hal::UartTx`]:
//!
//! - [`Dysv17f`] - one-owner driver, one frame per command
//! - [`SharedDysv17f`] - mutex-guarded driver for use from several tasks
//! - [`PlayerConfig`] - optional volume/EQ/play mode applied at startup

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod driver;
pub mod error;
pub mod shared;

#[cfg(test)]
mod mock;

pub use config::PlayerConfig;
pub use driver::Dysv17f;
pub use error::Error;
pub use shared::SharedDysv17f;

pub use dysv17f_protocol::{Command, Equalizer, PlayMode, Track, DEFAULT_VOLUME, VOLUME_MAX};
