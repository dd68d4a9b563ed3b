//! Startup settings for the module

use dysv17f_protocol::{Equalizer, PlayMode};

/// Settings sent once when the driver binds to the UART
///
/// Every field is optional. `None` leaves the module at its power-on
/// setting and sends nothing; in particular `initial_volume: None` is not
/// the same as `Some(0)`, which mutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerConfig {
    /// Volume level (0-30, sent verbatim)
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_volume: Option<u8>,
    /// Equalizer preset
    #[cfg_attr(feature = "serde", serde(default))]
    pub eq: Option<Equalizer>,
    /// Play mode
    #[cfg_attr(feature = "serde", serde(default))]
    pub play_mode: Option<PlayMode>,
}

impl PlayerConfig {
    /// Config that only sets the volume
    pub const fn with_volume(volume: u8) -> Self {
        Self {
            initial_volume: Some(volume),
            eq: None,
            play_mode: None,
        }
    }

    /// Number of frames applying this config sends
    pub fn command_count(&self) -> usize {
        self.initial_volume.is_some() as usize
            + self.eq.is_some() as usize
            + self.play_mode.is_some() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sets_nothing() {
        let config = PlayerConfig::default();
        assert_eq!(config.initial_volume, None);
        assert_eq!(config.eq, None);
        assert_eq!(config.play_mode, None);
        assert_eq!(config.command_count(), 0);
    }

    #[test]
    fn test_with_volume_zero_is_set() {
        let config = PlayerConfig::with_volume(0);
        assert_eq!(config.initial_volume, Some(0));
        assert_eq!(config.command_count(), 1);
    }

    #[test]
    fn test_command_count() {
        let config = PlayerConfig {
            initial_volume: None,
            eq: Some(Equalizer::Classic),
            play_mode: Some(PlayMode::SingleStop),
        };
        assert_eq!(config.command_count(), 2);
    }
}
