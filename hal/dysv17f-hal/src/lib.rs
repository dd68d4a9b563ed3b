//! DY-SV17F serial transport abstractions
//!
//! The DY-SV17F only ever receives bytes from the host, so this crate keeps
//! the transport seam as small as the driver needs: a blocking transmitter
//! and the fixed link parameters the module expects.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dysv17f-driver (Dysv17f, SharedDysv17f) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dysv17f-hal (this crate - UartTx)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  IoUart over  │       │ chip HAL UART │
//! │  embedded-io  │       │ (firmware)    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`] - Blocking serial transmit

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

pub use uart::{IoUart, IoUartError, UartConfig, UartTx, LINK_CONFIG};
