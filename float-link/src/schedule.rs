/// Divides the control tick down to the transmit rate.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickDivider {
    every: u16,
    count: u16,
}

impl TickDivider {
    /// A divider that fires on every `every`-th tick.
    ///
    /// Zero behaves like one.
    pub const fn new(every: u16) -> Self {
        Self {
            every: if every == 0 { 1 } else { every },
            count: 0,
        }
    }

    /// Advance by one tick, returning whether the divider fired.
    pub fn tick(&mut self) -> bool {
        self.count += 1;

        if self.count < self.every {
            return false;
        }

        self.count = 0;
        true
    }

    #[inline]
    pub fn every(&self) -> u16 {
        self.every
    }
}
