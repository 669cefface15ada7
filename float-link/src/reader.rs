use float_frame::{PacketStore, Payload};
use heapless::Vec;

/// Payloads that arrived since the previous fetch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fresh<const N: usize> {
    /// Oldest first.
    pub payloads: Vec<Payload, N>,
    /// Payloads overwritten before they could be fetched.
    pub missed: usize,
}

/// Consumer-side cursor over a [`PacketStore`].
///
/// The store itself never tracks reads; a reader remembers how many
/// writes it has observed and hands back only the newer ones.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoreReader<const N: usize> {
    seen: usize,
}

impl<const N: usize> StoreReader<N> {
    pub const fn new() -> Self {
        Self { seen: 0 }
    }

    /// Writes not yet fetched, including ones already overwritten.
    #[inline]
    pub fn pending(&self, store: &PacketStore<N>) -> usize {
        store.written().wrapping_sub(self.seen)
    }

    pub fn fetch(&mut self, store: &PacketStore<N>) -> Fresh<N> {
        let pending = self.pending(store);
        let missed = pending.saturating_sub(N);
        let fresh = pending - missed;

        let start = (store.cursor() + N - fresh) % N;

        let payloads = (0..fresh)
            .filter_map(|offset| store.read((start + offset) % N))
            .collect();

        self.seen = store.written();

        Fresh { payloads, missed }
    }
}
