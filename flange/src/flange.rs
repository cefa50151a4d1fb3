/// The flange scheduler.
///
/// Two noise generators run from the same tick source. One of them is
/// "held back": it only advances when the phase accumulator wraps, so on
/// every tick where the accumulator does not wrap it drops one sample and
/// slips further out of phase with the free-running one. Once the slip
/// reaches the target depth the roles swap and the held channel catches
/// back up. The ear hears the two drifting copies as a flange sweep.

use crate::constants::*;
use crate::noise::Lfsr32;

/// Which channel is currently being held back.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum HeldBack {
    ChannelA,
    ChannelB,
}

pub struct Flange {
    gen_a:      Lfsr32,
    gen_b:      Lfsr32,

    /// Wrapping accumulator. A wrap is the event that lets the held
    /// channel advance.
    phase:      u16,
    phase_inc:  u16,

    /// How many samples the held channel has dropped relative to the
    /// free-running one. Always in `0..=target_dropped_samples`.
    dropped_samples:        u16,
    target_dropped_samples: u16,

    held:       HeldBack,
}

impl Flange {
    pub fn new() -> Self {
        Self {
            gen_a:      Lfsr32::new(SEED_A),
            gen_b:      Lfsr32::new(SEED_B),

            phase:      0,
            phase_inc:  DEFAULT_PHASE_INC,

            dropped_samples:        0,
            target_dropped_samples: DEFAULT_DEPTH,

            held:       HeldBack::ChannelA,
        }
    }

    /// One timer tick. Returns the two PWM duty values.
    ///
    /// Runs in the tick handler only: no allocation, no branches of
    /// unbounded cost.
    pub fn clock(&mut self) -> (u8, u8) {
        let old_phase = self.phase;
        self.phase = self.phase.wrapping_add(self.phase_inc);
        let wrapped = self.phase < old_phase;

        match self.held {
            HeldBack::ChannelA => {
                if wrapped {
                    self.gen_a.step();
                } else {
                    // A missed a sample: it is now one further behind B.
                    self.dropped_samples += 1;
                    if self.dropped_samples >= self.target_dropped_samples {
                        self.held = HeldBack::ChannelB;
                    }
                }
                self.gen_b.step();
            },
            HeldBack::ChannelB => {
                if wrapped {
                    self.gen_b.step();
                } else {
                    self.dropped_samples -= 1;
                    if self.dropped_samples == 0 {
                        // Both generators are back in phase here.
                        self.held = HeldBack::ChannelA;
                    }
                }
                self.gen_a.step();
            },
        }

        (self.gen_a.level(), self.gen_b.level())
    }

    /// Set the effect speed. Called from the foreground under the shared
    /// lock only.
    pub fn set_phase_increment(&mut self, inc: u16) {
        self.phase_inc = inc;
    }

    pub(crate) fn set_depth(&mut self, target: u16) {
        self.target_dropped_samples = target;
    }

    /// Snap both generators back into phase and restart the sweep.
    /// Called from the foreground under the shared lock only.
    pub fn resync(&mut self) {
        self.gen_a = self.gen_b;
        self.dropped_samples = 0;
        self.held = HeldBack::ChannelA;
    }
}

#[cfg(test)]
impl Flange {
    pub(crate) fn phase_inc(&self) -> u16 {
        self.phase_inc
    }

    pub(crate) fn in_sync(&self) -> bool {
        self.gen_a == self.gen_b
    }
}
