//! Frame encoding for the DY-SV17F serial protocol.
//!
//! Frame format:
//! - START (1 byte): 0xAA synchronization byte
//! - OPCODE (1 byte): command identifier
//! - DATA (0-4 bytes): command-specific data
//! - CHECKSUM (1 byte): low 8 bits of START + OPCODE + all DATA bytes
//!
//! The module never answers, so there is no parser.

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xAA;

/// Maximum data size in bytes
pub const MAX_DATA_SIZE: usize = 4;

/// Maximum complete frame size (START + OPCODE + MAX_DATA + CHECKSUM)
pub const MAX_FRAME_SIZE: usize = 1 + 1 + MAX_DATA_SIZE + 1;

/// Errors that can occur during frame encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Data exceeds [`MAX_DATA_SIZE`]
    DataTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::DataTooLarge => write!(f, "frame data exceeds {} bytes", MAX_DATA_SIZE),
            FrameError::BufferTooSmall => write!(f, "buffer too small for frame"),
        }
    }
}

/// Checksum of a frame: `(0xAA + opcode + Σdata) mod 256`
pub fn checksum(opcode: u8, data: &[u8]) -> u8 {
    data.iter()
        .fold(FRAME_START.wrapping_add(opcode), |sum, &byte| {
            sum.wrapping_add(byte)
        })
}

/// A constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Command opcode
    pub opcode: u8,
    /// Data bytes
    pub data: Vec<u8, MAX_DATA_SIZE>,
}

impl Frame {
    /// Create a new frame with the given opcode and data
    pub fn new(opcode: u8, data: &[u8]) -> Result<Self, FrameError> {
        let mut data_vec = Vec::new();
        data_vec
            .extend_from_slice(data)
            .map_err(|_| FrameError::DataTooLarge)?;

        Ok(Self {
            opcode,
            data: data_vec,
        })
    }

    /// Number of bytes this frame occupies on the wire
    pub fn wire_len(&self) -> usize {
        3 + self.data.len()
    }

    /// Checksum byte of this frame
    pub fn checksum(&self) -> u8 {
        checksum(self.opcode, &self.data)
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.wire_len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[0] = FRAME_START;
        buffer[1] = self.opcode;
        buffer[2..2 + self.data.len()].copy_from_slice(&self.data);
        buffer[2 + self.data.len()] = self.checksum();

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Vec<u8, MAX_FRAME_SIZE> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        // MAX_FRAME_SIZE always fits a frame
        let len = self.encode(&mut buffer).unwrap_or(0);
        let mut vec = Vec::new();
        let _ = vec.extend_from_slice(&buffer[..len]);
        vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_encode_play_track_8() {
        let frame = Frame::new(0x07, &[0x02, 0x00, 0x08]).unwrap();
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 6);
        assert_eq!(&buffer[..len], &[0xAA, 0x07, 0x02, 0x00, 0x08, 0xBB]);
    }

    #[test]
    fn test_frame_encode_set_volume_30() {
        let frame = Frame::new(0x13, &[0x01, 0x1E]).unwrap();
        assert_eq!(&frame.encode_to_vec()[..], &[0xAA, 0x13, 0x01, 0x1E, 0xDC]);
    }

    #[test]
    fn test_frame_encode_no_data() {
        let frame = Frame::new(0x02, &[]).unwrap();
        let encoded = frame.encode_to_vec();

        assert_eq!(encoded.len(), 3);
        assert_eq!(&encoded[..], &[0xAA, 0x02, 0xAC]);
    }

    #[test]
    fn test_checksum_table() {
        let cases: &[(u8, &[u8], u8)] = &[
            (0x02, &[0x00], 0xAC),
            (0x03, &[0x00], 0xAD),
            (0x04, &[0x00], 0xAE),
            (0x05, &[0x00], 0xAF),
            (0x06, &[0x00], 0xB0),
            (0x14, &[0x00], 0xBE),
            (0x15, &[0x00], 0xBF),
            (0x13, &[0x01, 0x00], 0xBE),
            (0x18, &[0x01, 0x07], 0xCA),
            (0x1A, &[0x01, 0x04], 0xC9),
            (0x07, &[0x02, 0x01, 0x00], 0xB4),
            // Wraparound: 0xAA + 0x56 = 0x100
            (0x56, &[], 0x00),
            // 0xAA + 0xFF + 0xFF * 4 = 0x5A5 -> 0xA5
            (0xFF, &[0xFF, 0xFF, 0xFF, 0xFF], 0xA5),
            (0xFF, &[0x01], 0xAA),
        ];

        for &(opcode, data, expected) in cases {
            assert_eq!(checksum(opcode, data), expected, "opcode {:#04x}", opcode);
            let frame = Frame::new(opcode, data).unwrap();
            let encoded = frame.encode_to_vec();
            assert_eq!(encoded[encoded.len() - 1], expected);
        }
    }

    #[test]
    fn test_data_too_large() {
        let result = Frame::new(0x07, &[0u8; MAX_DATA_SIZE + 1]);
        assert_eq!(result, Err(FrameError::DataTooLarge));
    }

    #[test]
    fn test_buffer_too_small() {
        let frame = Frame::new(0x13, &[0x01, 0x1E]).unwrap();
        let mut buffer = [0u8; 4];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_frame_length() {
        for len in 0..=MAX_DATA_SIZE {
            let data = [0x11u8; MAX_DATA_SIZE];
            let frame = Frame::new(0x01, &data[..len]).unwrap();
            assert_eq!(frame.wire_len(), 3 + len);
            assert_eq!(frame.encode_to_vec().len(), 3 + len);
        }
    }
}
