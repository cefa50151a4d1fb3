use super::DigitalPin;

/// Consecutive polls a changed level must hold before it is accepted.
const STABLE_POLLS: u8 = 2;

/// Poll-based debouncer for the sync button.
///
/// `poll` returns true exactly once per accepted press; the release must
/// debounce too before another press can register.
pub struct Debouncer<B: DigitalPin> {
    pin:        B,
    pressed:    bool,
    stable:     u8,
}

impl<B: DigitalPin> Debouncer<B> {
    pub fn new(pin: B) -> Self {
        Self {
            pin:        pin,
            pressed:    false,
            stable:     0,
        }
    }

    pub fn poll(&mut self) -> bool {
        let raw = self.pin.is_low();
        if raw == self.pressed {
            self.stable = 0;
            return false;
        }
        self.stable += 1;
        if self.stable < STABLE_POLLS {
            return false;
        }
        self.stable = 0;
        self.pressed = raw;
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Script {
        levels: Vec<bool>,
        n:      usize,
    }

    impl DigitalPin for Script {
        fn is_low(&mut self) -> bool {
            let level = self.levels[self.n.min(self.levels.len() - 1)];
            self.n += 1;
            level
        }
    }

    fn events(levels: Vec<bool>) -> Vec<bool> {
        let count = levels.len();
        let mut debouncer = Debouncer::new(Script { levels: levels, n: 0 });
        (0..count).map(|_| debouncer.poll()).collect()
    }

    #[test]
    fn one_event_per_press() {
        let polls = events(vec![
            false, true, true, true, true, false, false, true, true,
        ]);
        assert_eq!(polls.iter().filter(|&&e| e).count(), 2);
        assert!(polls[2]);
        assert!(polls[8]);
    }

    #[test]
    fn a_single_bounce_is_ignored() {
        assert!(events(vec![false, true, false, false, true, false, false])
            .iter()
            .all(|&e| !e));
    }

    #[test]
    fn release_bounce_does_not_retrigger() {
        let polls = events(vec![true, true, false, true, true, false]);
        // One press, and the glitchy release never reads as a second one.
        assert_eq!(polls.iter().filter(|&&e| e).count(), 1);
    }
}
