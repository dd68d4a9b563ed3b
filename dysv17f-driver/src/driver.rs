//! DY-SV17F MP3 module driver
//!
//! The DY-SV17F plays MP3 files from its onboard flash or SD card and is
//! controlled over a one-way UART link.
//!
//! # UART Protocol
//!
//! The module listens at 9600 baud (8N1, no flow control):
//! - Start byte: 0xAA
//! - Opcode
//! - Data (0-4 bytes, first byte is the sub-code for setter commands)
//! - Checksum (low 8 bits of the sum of all preceding bytes)
//!
//! The module's replies are not read. Every command is a single frame
//! written in one call, and the driver keeps no record of device state.

use dysv17f_hal::UartTx;
use dysv17f_protocol::{
    Command, Equalizer, Frame, PlayMode, Track, DEFAULT_VOLUME, MAX_FRAME_SIZE, VOLUME_MUTE,
};

use crate::config::PlayerConfig;
use crate::error::Error;

/// DY-SV17F driver
///
/// Owns the UART transmitter for one module. Commands are independent of
/// each other: the driver never waits for the module and tracks no
/// playback state.
pub struct Dysv17f<T> {
    tx: T,
}

impl<T: UartTx> Dysv17f<T> {
    /// Bind to an open transmitter, optionally setting the volume
    ///
    /// `tx` must already run at [`dysv17f_hal::LINK_CONFIG`]. With
    /// `Some(level)` a set-volume frame is sent immediately, `Some(0)`
    /// included. With `None` nothing is sent and the module keeps its
    /// power-on volume of 30.
    pub fn new(tx: T, initial_volume: Option<u8>) -> Result<Self, Error<T::Error>> {
        let mut driver = Self { tx };
        if let Some(level) = initial_volume {
            driver.set_volume(level)?;
        }
        Ok(driver)
    }

    /// Bind to an open transmitter and apply startup settings
    ///
    /// Sends volume, then EQ, then play mode, skipping each one left unset.
    pub fn with_config(tx: T, config: &PlayerConfig) -> Result<Self, Error<T::Error>> {
        let mut driver = Self::new(tx, config.initial_volume)?;
        if let Some(eq) = config.eq {
            driver.set_eq(eq)?;
        }
        if let Some(mode) = config.play_mode {
            driver.set_playmode(mode)?;
        }
        Ok(driver)
    }

    /// Give the transmitter back
    pub fn release(self) -> T {
        self.tx
    }

    /// Build a frame from a raw opcode and data, then write it
    ///
    /// The whole frame goes out in one `write_blocking` call. A failed or
    /// short write is returned as [`Error::Transport`] without retrying.
    pub fn build_and_send(&mut self, opcode: u8, data: &[u8]) -> Result<(), Error<T::Error>> {
        let frame = Frame::new(opcode, data)?;
        self.send_frame(&frame)
    }

    /// Encode and write a typed command
    pub fn send(&mut self, command: Command) -> Result<(), Error<T::Error>> {
        self.send_frame(&command.to_frame())
    }

    fn send_frame(&mut self, frame: &Frame) -> Result<(), Error<T::Error>> {
        let mut buf = [0u8; MAX_FRAME_SIZE];
        let len = frame.encode(&mut buf)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("DY-SV17F TX: {=[u8]:x}", &buf[..len]);

        self.tx.write_blocking(&buf[..len]).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("DY-SV17F write failed (opcode {=u8:#x})", frame.opcode);
            Error::Transport(e)
        })
    }

    /// Start or resume playback
    pub fn play(&mut self) -> Result<(), Error<T::Error>> {
        self.send(Command::Play)
    }

    /// Play a specific track
    pub fn play_track(&mut self, track: Track) -> Result<(), Error<T::Error>> {
        self.send(Command::PlayTrack(track))
    }

    /// Play `track` if given, otherwise start or resume playback
    pub fn play_selection(&mut self, track: Option<Track>) -> Result<(), Error<T::Error>> {
        self.send(Command::play(track))
    }

    /// Pause playback
    pub fn pause(&mut self) -> Result<(), Error<T::Error>> {
        self.send(Command::Pause)
    }

    /// Stop playback
    pub fn stop(&mut self) -> Result<(), Error<T::Error>> {
        self.send(Command::Stop)
    }

    /// Skip to the previous track
    pub fn previous(&mut self) -> Result<(), Error<T::Error>> {
        self.send(Command::Previous)
    }

    /// Skip to the next track
    pub fn next_track(&mut self) -> Result<(), Error<T::Error>> {
        self.send(Command::Next)
    }

    /// Raise the volume one step
    pub fn volume_up(&mut self) -> Result<(), Error<T::Error>> {
        self.send(Command::VolumeUp)
    }

    /// Lower the volume one step
    pub fn volume_down(&mut self) -> Result<(), Error<T::Error>> {
        self.send(Command::VolumeDown)
    }

    /// Set the volume level
    ///
    /// The module accepts 0-30. Levels above 30 are sent as-is; how the
    /// module reacts to them is undefined.
    pub fn set_volume(&mut self, volume: u8) -> Result<(), Error<T::Error>> {
        self.send(Command::SetVolume(volume))
    }

    /// Set the volume to [`DEFAULT_VOLUME`] (30)
    pub fn set_default_volume(&mut self) -> Result<(), Error<T::Error>> {
        self.set_volume(DEFAULT_VOLUME)
    }

    /// Set the volume to 0
    pub fn mute(&mut self) -> Result<(), Error<T::Error>> {
        self.set_volume(VOLUME_MUTE)
    }

    /// Set the play mode
    pub fn set_playmode(&mut self, mode: PlayMode) -> Result<(), Error<T::Error>> {
        self.send(Command::SetPlayMode(mode))
    }

    /// Set the equalizer preset
    pub fn set_eq(&mut self, eq: Equalizer) -> Result<(), Error<T::Error>> {
        self.send(Command::SetEq(eq))
    }
}
