//! Error types for the DY-SV17F driver.

use dysv17f_protocol::FrameError;

/// Errors returned by driver commands.
///
/// Generic over the transport error so the caller gets the UART failure
/// back unchanged. Nothing is retried before the error is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// The serial write failed, was partial, or the transport is closed.
    Transport(E),
    /// A raw frame could not be built (data longer than four bytes).
    ///
    /// Typed commands never produce this.
    Frame(FrameError),
}

impl<E> From<FrameError> for Error<E> {
    fn from(e: FrameError) -> Self {
        Error::Frame(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport error: {:?}", e),
            Error::Frame(e) => write!(f, "frame error: {}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Transport(_e) => defmt::write!(f, "Transport error"),
            Error::Frame(e) => defmt::write!(f, "Frame error: {}", e),
        }
    }
}
