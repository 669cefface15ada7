use float_frame::DUTY_MAX;

/// Timing and limits for one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Period of the control tick.
    pub tick_ms: u32,
    /// Send a sampled value once every this many ticks.
    pub send_every: u16,
    /// Upper bound applied to every actuator command.
    pub duty_max: u16,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkConfig {
    pub const fn new() -> Self {
        Self {
            tick_ms: 1,
            send_every: 11,
            duty_max: DUTY_MAX,
        }
    }

    pub const fn with_tick_ms(mut self, tick_ms: u32) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    pub const fn with_send_every(mut self, send_every: u16) -> Self {
        self.send_every = send_every;
        self
    }

    pub const fn with_duty_max(mut self, duty_max: u16) -> Self {
        self.duty_max = duty_max;
        self
    }
}
