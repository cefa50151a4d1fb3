/// Device constants.

/// Core clock: internal oscillator at 9.6 MHz.
pub const CLOCK_RATE: usize = 9_600_000;

/// Ticks per second. One tick per 8-bit timer overflow, prescaler 1.
pub const TICK_RATE: usize = CLOCK_RATE / 256;

/// Noise generator seeds. Must be non-zero.
pub const SEED_A: u32 = 1;
pub const SEED_B: u32 = 1;

/// Default phase increment (effect speed). The higher the increment,
/// the slower the sweep.
pub const DEFAULT_PHASE_INC: u16 = 0xFFC0;

/// Default flange depth: maximum samples one generator falls behind
/// the other before the sweep reverses.
pub const DEFAULT_DEPTH: u16 = 80;

/// Frames generated per lock of the shared state.
pub(crate) const SAMPLE_PACKET_SIZE: usize = 64;

/// ADC conversions summed per potentiometer reading.
pub const ADC_OVERSAMPLE: usize = 32;
