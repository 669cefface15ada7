//! Hardware collaborators driven on each control tick.

/// Produces the value sent to the host.
pub trait Sampler {
    fn sample(&mut self) -> f32;
}

/// Applies a pulse-width command. The command is already clamped.
pub trait Actuator {
    fn apply(&mut self, duty: u16);
}

impl<F: FnMut() -> f32> Sampler for F {
    fn sample(&mut self) -> f32 {
        self()
    }
}

impl<F: FnMut(u16)> Actuator for F {
    fn apply(&mut self, duty: u16) {
        self(duty)
    }
}
