use embedded_io_async::Write;
use float_frame::{clamp, encode, Payload};

use crate::{Actuator, LinkConfig, Sampler, TickDivider};

/// Running totals for the transmit side. Counters wrap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxStats {
    pub ticks: usize,
    pub frames: usize,
}

/// The periodic side of the link: frames samples for the host and
/// drives the actuator.
pub struct Egress<Tx>
where
    Tx: Write,
{
    tx: Tx,
    divider: TickDivider,
    duty_max: u16,
    stats: TxStats,
}

impl<Tx> Egress<Tx>
where
    Tx: Write,
{
    pub const fn new(tx: Tx, config: &LinkConfig) -> Self {
        Self {
            tx,
            divider: TickDivider::new(config.send_every),
            duty_max: config.duty_max,
            stats: TxStats {
                ticks: 0,
                frames: 0,
            },
        }
    }

    /// Frame and transmit one value.
    pub async fn send(&mut self, value: f32) -> Result<(), Tx::Error> {
        let frame = encode(Payload::from(value));

        self.tx.write_all(&frame).await?;
        self.tx.flush().await?;

        self.stats.frames = self.stats.frames.wrapping_add(1);
        debug!("sent {}", value);

        Ok(())
    }

    /// Run one control tick.
    ///
    /// The actuator receives `duty` bounded by the configured maximum on
    /// every tick. A fresh sample goes out whenever the divider fires.
    pub async fn tick<S, A>(
        &mut self,
        sampler: &mut S,
        actuator: &mut A,
        duty: u16,
    ) -> Result<(), Tx::Error>
    where
        S: Sampler,
        A: Actuator,
    {
        self.stats.ticks = self.stats.ticks.wrapping_add(1);

        actuator.apply(clamp(duty, self.duty_max));

        if self.divider.tick() {
            self.send(sampler.sample()).await?;
        }

        Ok(())
    }

    #[inline]
    pub fn stats(&self) -> TxStats {
        self.stats
    }

    /// Give back the port.
    pub fn release(self) -> Tx {
        self.tx
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use embedded_io_async::{ErrorKind, ErrorType};
    use float_frame::{decode, DUTY_MAX, FRAME_LEN};
    use heapless::Vec;

    use super::*;

    #[derive(Default)]
    struct Sink {
        sent: Vec<u8, 64>,
        broken: bool,
    }

    impl ErrorType for Sink {
        type Error = ErrorKind;
    }

    impl Write for Sink {
        async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            if self.broken {
                Err(ErrorKind::BrokenPipe)?;
            }

            self.sent
                .extend_from_slice(buf)
                .map_err(|_| ErrorKind::OutOfMemory)?;

            Ok(buf.len())
        }

        async fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn frames(sink: &Sink) -> impl Iterator<Item = f32> + '_ {
        sink.sent.chunks(FRAME_LEN).map(|chunk| {
            let frame: &[u8; FRAME_LEN] = chunk.try_into().unwrap();

            decode(frame).unwrap().to_f32()
        })
    }

    #[test]
    fn send() {
        let mut egress = Egress::new(Sink::default(), &LinkConfig::default());

        block_on(egress.send(1.2)).unwrap();

        assert_eq!(
            &[0xaa, 0xaf, 0x9a, 0x99, 0x99, 0x3f, 0xfa, 0xff],
            egress.release().sent.as_slice()
        );
    }

    #[test]
    fn divided() {
        let config = LinkConfig::default().with_send_every(3);
        let mut egress = Egress::new(Sink::default(), &config);

        let mut next = 0.0f32;
        let mut sampler = || {
            next += 1.0;
            next
        };
        let mut actuator = |_: u16| {};

        for _ in 0..7 {
            block_on(egress.tick(&mut sampler, &mut actuator, 0)).unwrap();
        }

        assert_eq!(TxStats { ticks: 7, frames: 2 }, egress.stats());

        let sink = egress.release();
        let mut sent = frames(&sink);

        // only the samples taken when the divider fired go out
        assert_eq!(Some(1.0), sent.next());
        assert_eq!(Some(2.0), sent.next());
        assert_eq!(None, sent.next());
    }

    #[test]
    fn clamped() {
        let mut egress = Egress::new(Sink::default(), &LinkConfig::default());

        let mut applied: Vec<u16, 4> = Vec::new();

        for duty in [0, 1000, DUTY_MAX + 1, u16::MAX] {
            block_on(egress.tick(
                &mut || 0.0f32,
                &mut |d: u16| applied.push(d).unwrap(),
                duty,
            ))
            .unwrap();
        }

        assert_eq!(&[0, 1000, DUTY_MAX, DUTY_MAX], applied.as_slice());
    }

    #[test]
    fn counters_wrap() {
        let config = LinkConfig::default().with_send_every(1);
        let mut egress = Egress::new(Sink::default(), &config);

        egress.stats.ticks = usize::MAX;
        egress.stats.frames = usize::MAX;

        block_on(egress.tick(&mut || 0.0f32, &mut |_: u16| {}, 0)).unwrap();

        assert_eq!(TxStats { ticks: 0, frames: 0 }, egress.stats());
    }

    #[test]
    fn broken_port() {
        let config = LinkConfig::default().with_send_every(1);
        let mut egress = Egress::new(
            Sink {
                broken: true,
                ..Default::default()
            },
            &config,
        );

        let mut applied = None;

        assert_eq!(
            Err(ErrorKind::BrokenPipe),
            block_on(egress.tick(&mut || 0.0f32, &mut |d: u16| { applied = Some(d) }, 42))
        );

        // the actuator is driven before transmitting
        assert_eq!(Some(42), applied);
        assert_eq!(0, egress.stats().frames);
    }
}
