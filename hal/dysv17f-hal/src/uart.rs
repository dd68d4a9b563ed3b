//! UART serial communication abstractions
//!
//! Provides the transmit trait the DY-SV17F driver writes frames through,
//! the fixed link configuration of the module, and an adapter for any
//! [`embedded_io::Write`] implementation.

/// UART transmitter
///
/// Blocking trait for sending data over a UART interface.
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs. A write
    /// that cannot place every byte must report an error rather than
    /// returning `Ok` after a short write.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<T: UartTx + ?Sized> UartTx for &mut T {
    type Error = T::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write_blocking(self, data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        T::flush(self)
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

/// Link parameters of the DY-SV17F: 9600 baud, 8N1, no flow control
///
/// These are protocol constants. The module does not negotiate or accept
/// any other setting.
pub const LINK_CONFIG: UartConfig = UartConfig {
    baudrate: 9600,
    data_bits: DataBits::Eight,
    parity: Parity::None,
    stop_bits: StopBits::One,
};

impl Default for UartConfig {
    fn default() -> Self {
        LINK_CONFIG
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

/// Errors reported by [`IoUart`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoUartError<E> {
    /// The underlying writer failed
    Io(E),
    /// The writer accepted fewer bytes than the frame holds
    Partial {
        /// Bytes accepted by the writer
        written: usize,
        /// Bytes in the frame
        expected: usize,
    },
}

impl<E: core::fmt::Debug> core::fmt::Display for IoUartError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IoUartError::Io(e) => write!(f, "serial write failed: {:?}", e),
            IoUartError::Partial { written, expected } => {
                write!(f, "partial serial write: {} of {} bytes", written, expected)
            }
        }
    }
}

/// [`UartTx`] over an already-open [`embedded_io::Write`] sink
///
/// Each call to [`UartTx::write_blocking`] maps to exactly one
/// [`embedded_io::Write::write`] call. Short writes are reported as
/// [`IoUartError::Partial`] and the remaining bytes are never sent.
pub struct IoUart<W> {
    writer: W,
}

impl<W: embedded_io::Write> IoUart<W> {
    /// Wrap an open writer
    ///
    /// The writer must already be configured for [`LINK_CONFIG`].
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrow the wrapped writer
    pub fn inner(&self) -> &W {
        &self.writer
    }

    /// Give the wrapped writer back
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W: embedded_io::Write> UartTx for IoUart<W> {
    type Error = IoUartError<W::Error>;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }
        let written = self.writer.write(data).map_err(IoUartError::Io)?;
        if written != data.len() {
            return Err(IoUartError::Partial {
                written,
                expected: data.len(),
            });
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.flush().map_err(IoUartError::Io)
    }
}
