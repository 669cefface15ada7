use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_io_async::Read;
use float_frame::Ingested;

use crate::SharedReceiver;

/// Largest number of bytes pulled from the port per read.
pub const RX_CHUNK: usize = 16;

/// Running totals for the receive side. Counters wrap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxStats {
    pub bytes: usize,
    pub frames: usize,
    pub errors: usize,
}

/// Feeds bytes from a port into a [`SharedReceiver`].
pub struct Ingress<'a, M, Rx, const N: usize>
where
    M: RawMutex,
    Rx: Read,
{
    rx: Rx,
    shared: &'a SharedReceiver<M, N>,
    stats: RxStats,
}

impl<'a, M, Rx, const N: usize> Ingress<'a, M, Rx, N>
where
    M: RawMutex,
    Rx: Read,
{
    pub const fn new(rx: Rx, shared: &'a SharedReceiver<M, N>) -> Self {
        Self {
            rx,
            shared,
            stats: RxStats {
                bytes: 0,
                frames: 0,
                errors: 0,
            },
        }
    }

    /// Wait for at least one byte and parse everything that was read.
    ///
    /// Returns `None` once the port reports end of stream.
    pub async fn poll(&mut self) -> Result<Option<Ingested>, Rx::Error> {
        let mut buf = [0u8; RX_CHUNK];

        let read = self.rx.read(&mut buf).await?;

        if read == 0 {
            return Ok(None);
        }

        let tally = self.shared.ingest(&buf[..read]);

        self.stats.bytes = self.stats.bytes.wrapping_add(read);
        self.stats.frames = self.stats.frames.wrapping_add(tally.complete);
        self.stats.errors = self.stats.errors.wrapping_add(tally.errors);

        trace!("ingested {} bytes, {} frames", read, tally.complete);

        if tally.errors > 0 {
            warn!("{} corrupted frames ({} total)", tally.errors, self.stats.errors);
        }

        Ok(Some(tally))
    }

    /// Ingest until the port closes or fails.
    pub async fn run(&mut self) -> Result<(), Rx::Error> {
        while self.poll().await?.is_some() {}

        Ok(())
    }

    #[inline]
    pub fn stats(&self) -> RxStats {
        self.stats
    }

    /// Give back the port.
    pub fn release(self) -> Rx {
        self.rx
    }
}
