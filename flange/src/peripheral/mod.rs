/// Front panel peripherals.
///
/// The pot and button are supplied as capability traits so the loop can
/// run against real pins on a device build or fakes in tests.

mod pot;
mod button;

pub use pot::SpeedControl;
pub use button::Debouncer;

use std::time::Duration;

use crate::Controls;

/// A single ADC conversion. Result is 10-bit, right-aligned.
pub trait AdcPin {
    fn convert(&mut self) -> u16;
}

/// A digital input. The sync button shorts to ground through a pull-up,
/// so pressed reads low.
pub trait DigitalPin {
    fn is_low(&mut self) -> bool;
}

/// The foreground loop: polls the sync button and the speed pot and
/// applies them to the shared flange state. Audio generation carries on
/// in the tick handler regardless.
pub struct FrontPanel<P: AdcPin, B: DigitalPin> {
    speed:      SpeedControl<P>,
    button:     Debouncer<B>,
    controls:   Controls,

    last_inc:   u16,
}

impl<P: AdcPin, B: DigitalPin> FrontPanel<P, B> {
    pub fn new(pot: P, button: B, controls: Controls) -> Self {
        Self {
            speed:      SpeedControl::new(pot),
            button:     Debouncer::new(button),
            controls:   controls,

            last_inc:   0,
        }
    }

    /// One service pass: debounce the button, read the pot.
    pub fn service(&mut self) {
        if self.button.poll() {
            log::info!("sync pressed: realigning noise generators");
            self.controls.resync();
        }

        let inc = self.speed.read_increment();
        if inc != self.last_inc {
            log::debug!("phase increment set to {:#06X}", inc);
            self.last_inc = inc;
        }
        self.controls.set_phase_increment(inc);
    }

    /// Service forever at the given poll interval.
    pub fn run(mut self, poll_interval: Duration) {
        loop {
            self.service();
            std::thread::sleep(poll_interval);
        }
    }
}
