//! Async runtime for a serial link exchanging framed `f32` values.
//!
//! Received bytes are parsed into a [`SharedReceiver`] that any task or
//! interrupt may read from. A periodic tick samples a value, frames it
//! for the host and drives the actuator with a clamped command.

#![no_std]

mod fmt;

pub mod config;
pub mod egress;
pub mod ingress;
pub mod link;
pub mod peripheral;
pub mod reader;
pub mod schedule;
pub mod shared;

pub use config::LinkConfig;
pub use egress::{Egress, TxStats};
pub use ingress::{Ingress, RxStats};
pub use link::{run, LinkError};
pub use peripheral::{Actuator, Sampler};
pub use reader::{Fresh, StoreReader};
pub use schedule::TickDivider;
pub use shared::SharedReceiver;

pub use float_frame as frame;
