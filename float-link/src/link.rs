use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;
use embedded_io_async::{Read, Write};
use float_frame::PacketStore;

use crate::{Actuator, Egress, Ingress, LinkConfig, Sampler, SharedReceiver};

/// Why [`run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError<RxError, TxError> {
    Rx(RxError),
    Tx(TxError),
    /// The receive port reported end of stream.
    Closed,
}

/// Drive both directions of a link until one of them fails.
///
/// Bytes from `rx` are parsed into `shared` as they arrive. Every
/// `config.tick_ms` the tick loop asks `command` for an actuator command
/// (with the store locked), applies it clamped, and periodically sends a
/// fresh sample on `tx`.
#[allow(clippy::too_many_arguments)]
pub async fn run<M, Rx, Tx, D, S, A, F, const N: usize>(
    shared: &SharedReceiver<M, N>,
    rx: Rx,
    tx: Tx,
    mut delay: D,
    mut sampler: S,
    mut actuator: A,
    mut command: F,
    config: LinkConfig,
) -> LinkError<Rx::Error, Tx::Error>
where
    M: RawMutex,
    Rx: Read,
    Tx: Write,
    D: DelayNs,
    S: Sampler,
    A: Actuator,
    F: FnMut(&PacketStore<N>) -> u16,
{
    let mut ingress = Ingress::new(rx, shared);
    let mut egress = Egress::new(tx, &config);

    let receive = async {
        match ingress.run().await {
            Ok(()) => LinkError::Closed,
            Err(e) => LinkError::Rx(e),
        }
    };

    let transmit = async {
        loop {
            delay.delay_ms(config.tick_ms).await;

            let duty = shared.with_store(&mut command);

            if let Err(e) = egress.tick(&mut sampler, &mut actuator, duty).await {
                break LinkError::Tx(e);
            }
        }
    };

    let reason = match select(receive, transmit).await {
        Either::First(reason) | Either::Second(reason) => reason,
    };

    warn!(
        "link stopped: rx {}, tx {}",
        ingress.stats().frames,
        egress.stats().frames
    );

    reason
}
