use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::RawMutex, Mutex};
use float_frame::{error, FrameReceiver, Ingested, PacketStore, Payload, State, Status};

/// A [`FrameReceiver`] shareable between the byte-arrival path and its
/// consumers.
///
/// Every access runs inside `M`'s lock. With a critical-section mutex this
/// masks interrupts for the few instructions a byte or a read takes, so it
/// is sound to feed it from an interrupt handler while a task reads.
pub struct SharedReceiver<M: RawMutex, const N: usize> {
    inner: Mutex<M, RefCell<FrameReceiver<N>>>,
}

impl<M: RawMutex, const N: usize> Default for SharedReceiver<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> SharedReceiver<M, N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(FrameReceiver::new())),
        }
    }

    #[inline]
    fn with<R>(&self, f: impl FnOnce(&mut FrameReceiver<N>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Consume one byte. See [`FrameReceiver::parse_byte`].
    pub fn parse_byte(&self, byte: u8) -> Result<Status, error::TrailerMismatch> {
        self.with(|receiver| receiver.parse_byte(byte))
    }

    /// Consume a chunk of bytes under a single lock.
    pub fn ingest(&self, bytes: &[u8]) -> Ingested {
        self.with(|receiver| receiver.ingest(bytes))
    }

    pub fn read(&self, index: usize) -> Option<Payload> {
        self.with(|receiver| receiver.read(index))
    }

    pub fn latest(&self) -> Option<Payload> {
        self.with(|receiver| receiver.store().latest())
    }

    /// Inspect the store without letting a write interleave.
    pub fn with_store<R>(&self, f: impl FnOnce(&PacketStore<N>) -> R) -> R {
        self.with(|receiver| f(receiver.store()))
    }

    pub fn state(&self) -> State {
        self.with(|receiver| receiver.state())
    }

    /// Abandon any frame in flight.
    pub fn reset(&self) {
        self.with(|receiver| receiver.reset())
    }
}
