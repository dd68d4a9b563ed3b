//! RP2040 UART transmitter for the DY-SV17F
//!
//! Wraps the embassy-rp blocking transmitter in the [`dysv17f_hal::UartTx`]
//! trait and converts the fixed link parameters into an embassy config.

use embassy_rp::peripherals::UART1;
use embassy_rp::uart::{self, Blocking};

use dysv17f_hal::uart::{DataBits, Parity, StopBits, UartConfig};

/// Blocking UART1 transmitter wired to the module's RX pin
pub struct RpUartTx {
    tx: uart::UartTx<'static, UART1, Blocking>,
}

impl RpUartTx {
    pub fn new(tx: uart::UartTx<'static, UART1, Blocking>) -> Self {
        Self { tx }
    }
}

impl dysv17f_hal::UartTx for RpUartTx {
    type Error = uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush()
    }
}

/// Build an embassy-rp UART config from link parameters
pub fn rp_config(link: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = link.baudrate;
    cfg.data_bits = match link.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        // RP2040 UART tops out at 8 data bits
        DataBits::Eight | DataBits::Nine => uart::DataBits::DataBits8,
    };
    cfg.parity = match link.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match link.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}
