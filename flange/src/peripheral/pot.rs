use super::AdcPin;
use crate::constants::ADC_OVERSAMPLE;

/// The flange speed pot.
///
/// Readings are 32x oversampled for stability and inverted into a phase
/// increment: turning the pot up lowers the increment, which makes the
/// accumulator miss a wrap more often and so speeds the sweep up.
pub struct SpeedControl<P: AdcPin> {
    pin: P,
}

impl<P: AdcPin> SpeedControl<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin: pin,
        }
    }

    /// One oversampled pot reading, mapped to a phase increment.
    pub fn read_increment(&mut self) -> u16 {
        let mut sum: u16 = 0;
        for _ in 0..ADC_OVERSAMPLE {
            sum = sum.wrapping_add(self.pin.convert());
        }
        0xFFFF - (sum >> 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RampAdc {
        next: u16,
    }

    impl AdcPin for RampAdc {
        fn convert(&mut self) -> u16 {
            let out = self.next;
            self.next = (self.next + 1) & 0x3FF;
            out
        }
    }

    #[test]
    fn reading_is_inverted() {
        struct Fixed(u16);
        impl AdcPin for Fixed {
            fn convert(&mut self) -> u16 {
                self.0
            }
        }

        // Pot at zero: slowest increment.
        assert_eq!(SpeedControl::new(Fixed(0)).read_increment(), 0xFFFF);
        // Pot at full scale: 32 * 1023 = 0x7FE0.
        assert_eq!(SpeedControl::new(Fixed(1023)).read_increment(), 0xFFFF - 0x7F);
    }

    #[test]
    fn oversampling_averages_the_conversions() {
        // 32 conversions of 100..132 sum to 3696.
        let mut speed = SpeedControl::new(RampAdc { next: 100 });
        assert_eq!(speed.read_increment(), 0xFFFF - (3696 >> 8));
    }
}
