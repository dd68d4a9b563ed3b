//! DY-SV17F Serial Protocol
//!
//! This crate defines the command frames understood by the DY-SV17F MP3
//! playback module. The module listens on a 9600 baud 8N1 UART and never
//! answers, so the protocol is one-way: the host builds a frame and writes it.
//!
//! # Protocol Overview
//!
//! All commands use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬─────────────┬──────────┐
//! │ START │ OPCODE │ DATA        │ CHECKSUM │
//! │ 1B    │ 1B     │ 0–4B        │ 1B       │
//! └───────┴────────┴─────────────┴──────────┘
//! ```
//!
//! START is always 0xAA and CHECKSUM is the low byte of the sum of every
//! preceding byte.

#![no_std]
#![deny(unsafe_code)]

pub mod commands;
pub mod frame;
pub mod settings;

pub use commands::{opcode, subcode, Command};
pub use frame::{checksum, Frame, FrameError, FRAME_START, MAX_DATA_SIZE, MAX_FRAME_SIZE};
pub use settings::{
    Equalizer, InvalidCode, PlayMode, Track, DEFAULT_VOLUME, VOLUME_MAX, VOLUME_MUTE,
};
