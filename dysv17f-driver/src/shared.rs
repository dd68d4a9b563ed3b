//! Driver shared between tasks
//!
//! Two callers writing to the same UART at once would interleave their
//! bytes and corrupt both frames. [`SharedDysv17f`] holds the driver behind
//! a blocking mutex so each frame is written while the lock is held.

use core::cell::RefCell;

use dysv17f_hal::UartTx;
use dysv17f_protocol::{Command, Equalizer, PlayMode, Track, VOLUME_MUTE};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::driver::Dysv17f;
use crate::error::Error;

/// Mutex-guarded DY-SV17F driver
///
/// `M` picks the locking strategy: `CriticalSectionRawMutex` when callers
/// run on different executors or interrupt priorities, `NoopRawMutex` when
/// they all share one executor.
///
/// Closures passed to [`SharedDysv17f::lock`] must not call back into the
/// same `SharedDysv17f`.
pub struct SharedDysv17f<M: RawMutex, T> {
    inner: Mutex<M, RefCell<Dysv17f<T>>>,
}

impl<M: RawMutex, T: UartTx> SharedDysv17f<M, T> {
    /// Wrap a bound driver
    pub fn new(driver: Dysv17f<T>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(driver)),
        }
    }

    /// Run several commands without frames from other callers in between
    pub fn lock<R>(&self, f: impl FnOnce(&mut Dysv17f<T>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Unwrap the driver
    pub fn into_inner(self) -> Dysv17f<T> {
        self.inner.into_inner().into_inner()
    }

    /// See [`Dysv17f::build_and_send`]
    pub fn build_and_send(&self, opcode: u8, data: &[u8]) -> Result<(), Error<T::Error>> {
        self.lock(|driver| driver.build_and_send(opcode, data))
    }

    /// See [`Dysv17f::send`]
    pub fn send(&self, command: Command) -> Result<(), Error<T::Error>> {
        self.lock(|driver| driver.send(command))
    }

    pub fn play(&self) -> Result<(), Error<T::Error>> {
        self.send(Command::Play)
    }

    pub fn play_track(&self, track: Track) -> Result<(), Error<T::Error>> {
        self.send(Command::PlayTrack(track))
    }

    pub fn play_selection(&self, track: Option<Track>) -> Result<(), Error<T::Error>> {
        self.send(Command::play(track))
    }

    pub fn pause(&self) -> Result<(), Error<T::Error>> {
        self.send(Command::Pause)
    }

    pub fn stop(&self) -> Result<(), Error<T::Error>> {
        self.send(Command::Stop)
    }

    pub fn previous(&self) -> Result<(), Error<T::Error>> {
        self.send(Command::Previous)
    }

    pub fn next_track(&self) -> Result<(), Error<T::Error>> {
        self.send(Command::Next)
    }

    pub fn volume_up(&self) -> Result<(), Error<T::Error>> {
        self.send(Command::VolumeUp)
    }

    pub fn volume_down(&self) -> Result<(), Error<T::Error>> {
        self.send(Command::VolumeDown)
    }

    pub fn set_volume(&self, volume: u8) -> Result<(), Error<T::Error>> {
        self.send(Command::SetVolume(volume))
    }

    pub fn mute(&self) -> Result<(), Error<T::Error>> {
        self.set_volume(VOLUME_MUTE)
    }

    pub fn set_playmode(&self, mode: PlayMode) -> Result<(), Error<T::Error>> {
        self.send(Command::SetPlayMode(mode))
    }

    pub fn set_eq(&self, eq: Equalizer) -> Result<(), Error<T::Error>> {
        self.send(Command::SetEq(eq))
    }
}
