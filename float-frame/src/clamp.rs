/// Largest pulse-width compare value the actuator timer accepts.
pub const DUTY_MAX: u16 = 14_400 - 1;

/// Bound `value` from above by `max`.
#[inline]
pub fn clamp<T: Ord>(value: T, max: T) -> T {
    core::cmp::min(value, max)
}
