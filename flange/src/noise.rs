/// Pseudo-random noise source.

/// Tap polynomial for a maximal-length sequence over the full 32-bit space.
const TAPS: u32 = 0x8020_0003;

/// 32-bit linear-feedback shift register.
///
/// A 16-bit register would be twice as fast to step, but its period at
/// audio rates is only a few seconds, which is audible as a loop. The
/// 32-bit period is over a day long.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Lfsr32 {
    state: u32,
}

impl Lfsr32 {
    /// Seed must be non-zero: zero is a fixed point of `step`.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed,
        }
    }

    /// Advance the register one step.
    pub fn step(&mut self) {
        let mut next = self.state >> 1;
        if self.state & 1 != 0 {
            next ^= TAPS;
        }
        self.state = next;
    }

    /// Current output level: the low byte of the register, used directly
    /// as a PWM duty value.
    pub fn level(&self) -> u8 {
        self.state as u8
    }
}
