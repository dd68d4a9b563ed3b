//! Command table for the DY-SV17F
//!
//! Every command the driver can issue, with its opcode and data bytes.
//! Multi-purpose opcodes carry a sub-code as their first data byte.

use crate::frame::{Frame, MAX_DATA_SIZE};
use crate::settings::{Equalizer, PlayMode, Track};
use heapless::Vec;

/// Command opcodes
pub mod opcode {
    /// Play from the current position
    pub const PLAY: u8 = 0x02;
    /// Pause playback
    pub const PAUSE: u8 = 0x03;
    /// Stop playback
    pub const STOP: u8 = 0x04;
    /// Previous track
    pub const PREVIOUS: u8 = 0x05;
    /// Next track
    pub const NEXT: u8 = 0x06;
    /// Play a specific track
    pub const PLAY_TRACK: u8 = 0x07;
    /// Set volume level
    pub const SET_VOLUME: u8 = 0x13;
    /// Volume one step up
    pub const VOLUME_UP: u8 = 0x14;
    /// Volume one step down
    pub const VOLUME_DOWN: u8 = 0x15;
    /// Set play mode
    pub const SET_PLAY_MODE: u8 = 0x18;
    /// Set equalizer preset
    pub const SET_EQ: u8 = 0x1A;
}

/// Sub-codes for multi-purpose opcodes
pub mod subcode {
    /// Data byte for commands without arguments
    pub const NONE: u8 = 0x00;
    /// Set-value sub-code for volume, play mode and EQ
    pub const SET: u8 = 0x01;
    /// Track selection sub-code for [`super::opcode::PLAY_TRACK`]
    pub const TRACK: u8 = 0x02;
}

/// Commands accepted by the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Play,
    PlayTrack(Track),
    Pause,
    Stop,
    Previous,
    Next,
    VolumeUp,
    VolumeDown,
    /// Volume level, sent verbatim (the module tops out at 30)
    SetVolume(u8),
    SetPlayMode(PlayMode),
    SetEq(Equalizer),
}

impl Command {
    /// Play a track if one is given, otherwise resume generic playback
    pub fn play(track: Option<Track>) -> Self {
        match track {
            Some(track) => Command::PlayTrack(track),
            None => Command::Play,
        }
    }

    /// Opcode of this command
    pub fn opcode(&self) -> u8 {
        match self {
            Command::Play => opcode::PLAY,
            Command::PlayTrack(_) => opcode::PLAY_TRACK,
            Command::Pause => opcode::PAUSE,
            Command::Stop => opcode::STOP,
            Command::Previous => opcode::PREVIOUS,
            Command::Next => opcode::NEXT,
            Command::VolumeUp => opcode::VOLUME_UP,
            Command::VolumeDown => opcode::VOLUME_DOWN,
            Command::SetVolume(_) => opcode::SET_VOLUME,
            Command::SetPlayMode(_) => opcode::SET_PLAY_MODE,
            Command::SetEq(_) => opcode::SET_EQ,
        }
    }

    /// Data bytes of this command
    pub fn data(&self) -> Vec<u8, MAX_DATA_SIZE> {
        let mut data = Vec::new();
        // At most three bytes, always within MAX_DATA_SIZE
        let _ = match self {
            Command::PlayTrack(track) => {
                let [high, low] = track.to_bytes();
                data.extend_from_slice(&[subcode::TRACK, high, low])
            }
            Command::SetVolume(level) => data.extend_from_slice(&[subcode::SET, *level]),
            Command::SetPlayMode(mode) => data.extend_from_slice(&[subcode::SET, mode.code()]),
            Command::SetEq(eq) => data.extend_from_slice(&[subcode::SET, eq.code()]),
            Command::Play
            | Command::Pause
            | Command::Stop
            | Command::Previous
            | Command::Next
            | Command::VolumeUp
            | Command::VolumeDown => data.extend_from_slice(&[subcode::NONE]),
        };
        data
    }

    /// Encode this command into a frame
    pub fn to_frame(&self) -> Frame {
        Frame {
            opcode: self.opcode(),
            data: self.data(),
        }
    }
}
