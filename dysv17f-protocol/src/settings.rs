//! Typed command arguments
//!
//! Equalizer presets, play modes, track numbers and volume levels as the
//! module understands them. The numeric codes go on the wire verbatim.

use core::num::NonZeroU16;

/// Highest volume level the module supports
pub const VOLUME_MAX: u8 = 30;

/// Volume applied when none is given (the module's power-on level)
pub const DEFAULT_VOLUME: u8 = VOLUME_MAX;

/// Volume level that silences output
pub const VOLUME_MUTE: u8 = 0;

/// Raw code outside the range of a setting enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidCode(pub u8);

/// Equalizer preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Equalizer {
    #[default]
    Normal = 0,
    Pop = 1,
    Rock = 2,
    Jazz = 3,
    Classic = 4,
}

impl Equalizer {
    /// Wire code of this preset
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Equalizer {
    type Error = InvalidCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Equalizer::Normal),
            1 => Ok(Equalizer::Pop),
            2 => Ok(Equalizer::Rock),
            3 => Ok(Equalizer::Jazz),
            4 => Ok(Equalizer::Classic),
            _ => Err(InvalidCode(code)),
        }
    }
}

/// Play mode (loop/shuffle behaviour kept by the module)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PlayMode {
    /// Play all tracks, then start over
    #[default]
    FullCycle = 0,
    /// Repeat the current track
    SingleCycle = 1,
    /// Play the current track once, then stop
    SingleStop = 2,
    /// Shuffle across all tracks
    RandomBroadcast = 3,
    /// Repeat the current folder
    RepeatFolder = 4,
    /// Shuffle within the current folder
    RandomBroadcastFolder = 5,
    /// Play the current folder in order, then stop
    OrderPlayFolder = 6,
    /// Play all tracks in order, then stop
    OrderPlay = 7,
}

impl PlayMode {
    /// Wire code of this mode
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PlayMode {
    type Error = InvalidCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PlayMode::FullCycle),
            1 => Ok(PlayMode::SingleCycle),
            2 => Ok(PlayMode::SingleStop),
            3 => Ok(PlayMode::RandomBroadcast),
            4 => Ok(PlayMode::RepeatFolder),
            5 => Ok(PlayMode::RandomBroadcastFolder),
            6 => Ok(PlayMode::OrderPlayFolder),
            7 => Ok(PlayMode::OrderPlay),
            _ => Err(InvalidCode(code)),
        }
    }
}

/// Track number on the module's storage, starting at 1
///
/// Track 0 has no meaning to the play-track command, so it cannot be
/// constructed. "No particular track" is expressed as `Option<Track>::None`
/// and maps to the generic play command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track(NonZeroU16);

#[cfg(feature = "defmt")]
impl defmt::Format for Track {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Track({=u16})", self.get())
    }
}

impl Track {
    /// Create a track number, `None` for 0
    pub const fn new(number: u16) -> Option<Self> {
        match NonZeroU16::new(number) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Track number
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Big-endian split: `[number / 256, number % 256]`
    pub const fn to_bytes(self) -> [u8; 2] {
        let number = self.0.get();
        [(number / 256) as u8, (number % 256) as u8]
    }
}

impl From<NonZeroU16> for Track {
    fn from(number: NonZeroU16) -> Self {
        Self(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Equalizer::default(), Equalizer::Normal);
        assert_eq!(PlayMode::default(), PlayMode::FullCycle);
        assert_eq!(DEFAULT_VOLUME, 30);
    }

    #[test]
    fn test_equalizer_codes() {
        let presets = [
            Equalizer::Normal,
            Equalizer::Pop,
            Equalizer::Rock,
            Equalizer::Jazz,
            Equalizer::Classic,
        ];
        for (code, eq) in presets.iter().enumerate() {
            assert_eq!(eq.code(), code as u8);
            assert_eq!(Equalizer::try_from(code as u8), Ok(*eq));
        }
        assert_eq!(Equalizer::try_from(5), Err(InvalidCode(5)));
    }

    #[test]
    fn test_play_mode_codes() {
        for code in 0..=7u8 {
            let mode = PlayMode::try_from(code).unwrap();
            assert_eq!(mode.code(), code);
        }
        assert_eq!(PlayMode::OrderPlay.code(), 7);
        assert_eq!(PlayMode::try_from(8), Err(InvalidCode(8)));
    }

    #[test]
    fn test_track_zero_rejected() {
        assert!(Track::new(0).is_none());
        assert_eq!(Track::new(1).map(Track::get), Some(1));
    }

    #[test]
    fn test_track_byte_split() {
        assert_eq!(Track::new(8).unwrap().to_bytes(), [0x00, 0x08]);
        assert_eq!(Track::new(255).unwrap().to_bytes(), [0x00, 0xFF]);
        assert_eq!(Track::new(256).unwrap().to_bytes(), [0x01, 0x00]);
        assert_eq!(Track::new(0x1234).unwrap().to_bytes(), [0x12, 0x34]);
        assert_eq!(Track::new(u16::MAX).unwrap().to_bytes(), [0xFF, 0xFF]);
    }
}
