use crate::{error, PacketStore, Parser, Payload, State};

/// Outcome of a successfully consumed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Searching for a header or assembling a frame.
    InProgress,
    /// The byte completed a frame and its payload is in the store.
    Complete,
}

/// Tally of a bulk ingestion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ingested {
    pub complete: usize,
    pub errors: usize,
}

/// One link's receive side: a [`Parser`] feeding a [`PacketStore`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReceiver<const N: usize> {
    parser: Parser,
    store: PacketStore<N>,
}

impl<const N: usize> Default for FrameReceiver<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameReceiver<N> {
    pub const fn new() -> Self {
        Self {
            parser: Parser::new(),
            store: PacketStore::new(),
        }
    }

    /// Consume one byte from the transport.
    ///
    /// On [`Status::Complete`] the payload has already been pushed.
    /// An `Err` means a trailer check failed; the partial frame is
    /// discarded and the next byte is treated as a header candidate.
    pub fn parse_byte(&mut self, byte: u8) -> Result<Status, error::TrailerMismatch> {
        match self.parser.step(byte) {
            Ok(Some(payload)) => {
                trace!("frame complete at slot {}", self.store.cursor());
                self.store.push(payload);

                Ok(Status::Complete)
            }
            Ok(None) => Ok(Status::InProgress),
            Err(e) => {
                warn!(
                    "trailer mismatch: expected {=u8:#x}, found {=u8:#x}",
                    e.expected,
                    e.found
                );

                Err(e)
            }
        }
    }

    /// Ingest incoming bytes, counting completed frames and trailer errors.
    pub fn ingest<'a>(&mut self, src: impl IntoIterator<Item = &'a u8>) -> Ingested {
        src.into_iter()
            .fold(Ingested::default(), |mut tally, &byte| {
                match self.parse_byte(byte) {
                    Ok(Status::Complete) => tally.complete += 1,
                    Ok(Status::InProgress) => {}
                    Err(_) => tally.errors += 1,
                }

                tally
            })
    }

    #[inline]
    pub fn state(&self) -> State {
        self.parser.state()
    }

    #[inline]
    pub fn read(&self, index: usize) -> Option<Payload> {
        self.store.read(index)
    }

    #[inline]
    pub fn store(&self) -> &PacketStore<N> {
        &self.store
    }

    #[inline]
    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Abandon any frame in flight. Stored payloads are kept.
    #[inline]
    pub fn reset(&mut self) {
        self.parser.reset();
    }
}
