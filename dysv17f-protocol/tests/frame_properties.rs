//! Property tests for frame encoding

use dysv17f_protocol::{
    checksum, Command, Equalizer, Frame, PlayMode, Track, FRAME_START, MAX_DATA_SIZE,
    MAX_FRAME_SIZE,
};
use proptest::prelude::*;

fn reference_checksum(opcode: u8, data: &[u8]) -> u8 {
    let sum: u32 = FRAME_START as u32 + opcode as u32 + data.iter().map(|&b| b as u32).sum::<u32>();
    (sum % 256) as u8
}

proptest! {
    #[test]
    fn checksum_is_sum_mod_256(opcode in any::<u8>(), data in proptest::collection::vec(any::<u8>(), 0..=MAX_DATA_SIZE)) {
        prop_assert_eq!(checksum(opcode, &data), reference_checksum(opcode, &data));
    }

    #[test]
    fn encoded_frame_layout(opcode in any::<u8>(), data in proptest::collection::vec(any::<u8>(), 0..=MAX_DATA_SIZE)) {
        let frame = Frame::new(opcode, &data).unwrap();
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = frame.encode(&mut buffer).unwrap();

        prop_assert_eq!(len, 3 + data.len());
        prop_assert_eq!(buffer[0], FRAME_START);
        prop_assert_eq!(buffer[1], opcode);
        prop_assert_eq!(&buffer[2..2 + data.len()], &data[..]);
        prop_assert_eq!(buffer[len - 1], reference_checksum(opcode, &data));
    }

    #[test]
    fn oversize_data_rejected(opcode in any::<u8>(), data in proptest::collection::vec(any::<u8>(), MAX_DATA_SIZE + 1..16)) {
        prop_assert!(Frame::new(opcode, &data).is_err());
    }

    #[test]
    fn play_track_splits_number(number in 1..=u16::MAX) {
        let track = Track::new(number).unwrap();
        let frame = Command::PlayTrack(track).to_frame();

        prop_assert_eq!(frame.opcode, 0x07);
        prop_assert_eq!(frame.data[0], 0x02);
        prop_assert_eq!(frame.data[1] as u16 * 256 + frame.data[2] as u16, number);
    }

    #[test]
    fn set_volume_passes_level_through(level in any::<u8>()) {
        let frame = Command::SetVolume(level).to_frame();
        prop_assert_eq!(&frame.data[..], &[0x01, level][..]);
    }

    #[test]
    fn setting_codes_round_trip(code in 0u8..16) {
        if let Ok(mode) = PlayMode::try_from(code) {
            prop_assert_eq!(mode.code(), code);
        } else {
            prop_assert!(code > 7);
        }
        if let Ok(eq) = Equalizer::try_from(code) {
            prop_assert_eq!(eq.code(), code);
        } else {
            prop_assert!(code > 4);
        }
    }
}
