use crate::Payload;

/// Fixed-capacity ring of received payloads.
///
/// Pushing never fails and never blocks: once every slot holds a
/// payload, the next push overwrites the oldest one. The store keeps no
/// read cursor, consumers decide how to track what they have seen
/// (see [`written`](Self::written)).
///
/// `N` must be non-zero; `PacketStore<0>` fails to build.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacketStore<const N: usize> {
    slots: [Payload; N],
    cursor: usize,
    written: usize,
}

impl<const N: usize> Default for PacketStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PacketStore<N> {
    const NONZERO: () = assert!(N > 0, "a packet store needs at least one slot");

    pub const fn new() -> Self {
        let () = Self::NONZERO;

        Self {
            slots: [Payload::ZERO; N],
            cursor: 0,
            written: 0,
        }
    }

    /// Overwrite the slot under the cursor and advance it.
    pub fn push(&mut self, payload: Payload) {
        self.slots[self.cursor] = payload;
        self.cursor = Self::wrap(self.cursor + 1);
        self.written = self.written.wrapping_add(1);
    }

    /// Read the payload last written at `index`.
    ///
    /// Slots that were never written read as [`Payload::ZERO`].
    /// Returns `None` if `index` is out of range.
    #[inline]
    pub fn read(&self, index: usize) -> Option<Payload> {
        self.slots.get(index).copied()
    }

    /// The most recently pushed payload, if any.
    pub fn latest(&self) -> Option<Payload> {
        if self.written == 0 {
            return None;
        }

        self.read(Self::wrap(self.cursor + N - 1))
    }

    /// Wrap a provided cursor to adhere
    /// to the store capacity.
    #[inline]
    fn wrap(cursor: usize) -> usize {
        cursor % N
    }

    /// Index of the slot the next push will overwrite.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of pushes so far (wrapping).
    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        N
    }

    /// Number of slots that have been written at least once.
    #[inline]
    pub fn len(&self) -> usize {
        if self.written >= N {
            N
        } else {
            self.written
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.written == 0
    }

    /// All slots in index order, written or not.
    #[inline]
    pub fn slots(&self) -> &[Payload; N] {
        &self.slots
    }
}
