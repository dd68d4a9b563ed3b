//! Recording UART used by the driver tests

use dysv17f_hal::UartTx;
use heapless::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    Closed,
    Partial { written: usize },
}

#[derive(Debug, Clone, Copy)]
enum Behavior {
    Accept,
    Closed,
    /// Accept this many bytes per write, then fail
    Partial(usize),
}

/// Mock UART transmitter
pub struct MockUart {
    sent: Vec<u8, 256>,
    writes: usize,
    behavior: Behavior,
}

impl MockUart {
    pub fn new() -> Self {
        Self::with_behavior(Behavior::Accept)
    }

    /// Transport that rejects every write
    pub fn closed() -> Self {
        Self::with_behavior(Behavior::Closed)
    }

    /// Transport that accepts only `limit` bytes of each write
    pub fn partial(limit: usize) -> Self {
        Self::with_behavior(Behavior::Partial(limit))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            sent: Vec::new(),
            writes: 0,
            behavior,
        }
    }

    pub fn sent(&self) -> &[u8] {
        &self.sent
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl UartTx for MockUart {
    type Error = MockError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        match self.behavior {
            Behavior::Accept => {
                self.writes += 1;
                self.sent.extend_from_slice(data).unwrap();
                Ok(())
            }
            Behavior::Closed => Err(MockError::Closed),
            Behavior::Partial(limit) => {
                self.writes += 1;
                let written = limit.min(data.len());
                self.sent.extend_from_slice(&data[..written]).unwrap();
                if written == data.len() {
                    Ok(())
                } else {
                    Err(MockError::Partial { written })
                }
            }
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        match self.behavior {
            Behavior::Closed => Err(MockError::Closed),
            _ => Ok(()),
        }
    }
}
