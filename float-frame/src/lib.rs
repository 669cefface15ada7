//! Fixed-shape framing for exchanging single `f32` values over a byte stream.
//!
//! Every frame is exactly eight bytes:
//!
//! ```text
//! 0xAA 0xAF P0 P1 P2 P3 0xFA 0xFF
//! ```
//!
//! Incoming bytes are consumed one at a time by a [`FrameReceiver`], which
//! recovers synchronization on its own and deposits completed payloads into
//! a fixed-capacity [`PacketStore`]. Outgoing payloads are framed with
//! [`encode`].

#![no_std]

mod fmt;

pub mod clamp;
pub mod encode;
pub mod parser;
pub mod receiver;
pub mod store;

pub use clamp::{clamp, DUTY_MAX};
pub use encode::{decode, encode, encode_into};
pub use parser::{Parser, State};
pub use receiver::{FrameReceiver, Ingested, Status};
pub use store::PacketStore;

/// First header marker.
pub const HEAD1: u8 = 0xAA;
/// Second header marker.
pub const HEAD2: u8 = 0xAF;
/// First trailer marker.
pub const TAIL1: u8 = 0xFA;
/// Second trailer marker.
pub const TAIL2: u8 = 0xFF;

pub const PAYLOAD_LEN: usize = 4;
pub const FRAME_LEN: usize = 2 + PAYLOAD_LEN + 2;

/// Number of payload slots in the reference design.
pub const STORE_CAPACITY: usize = 10;

pub mod error {
    /// The destination ran out before the whole frame was written.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct EndOfInput;

    /// A trailer byte did not match after a full header and payload.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct TrailerMismatch {
        pub expected: u8,
        pub found: u8,
    }

    /// A complete frame buffer that does not carry the framing markers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum Malformed {
        Header,
        Trailer(TrailerMismatch),
    }

    impl From<TrailerMismatch> for Malformed {
        fn from(value: TrailerMismatch) -> Self {
            Self::Trailer(value)
        }
    }
}

/// The four raw bytes carried by one frame.
///
/// The framing layer treats them as opaque; by convention they hold
/// a little-endian `f32`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Payload(pub [u8; PAYLOAD_LEN]);

impl Payload {
    pub const ZERO: Self = Self([0; PAYLOAD_LEN]);

    #[inline]
    pub const fn new(bytes: [u8; PAYLOAD_LEN]) -> Self {
        Self(bytes)
    }

    // le_bytes because the targets on both ends of the link are LE native
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self(value.to_le_bytes())
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        f32::from_le_bytes(self.0)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; PAYLOAD_LEN] {
        &self.0
    }
}

impl From<[u8; PAYLOAD_LEN]> for Payload {
    fn from(value: [u8; PAYLOAD_LEN]) -> Self {
        Self(value)
    }
}

impl From<f32> for Payload {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<Payload> for f32 {
    fn from(value: Payload) -> Self {
        value.to_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_bytes() {
        let payload = Payload::from(1.2f32);

        assert_eq!(payload.0, [0x9a, 0x99, 0x99, 0x3f]);
        assert_eq!(1.2f32, payload.to_f32());
    }

    #[test]
    fn frame_len() {
        assert_eq!(8, FRAME_LEN);
    }
}
