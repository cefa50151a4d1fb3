/// Hosted audio output path.
///
/// The tick thread fills packets of frames at the device tick rate; the
/// resampler converts them to the host rate on the audio thread.

mod resampler;

pub use resampler::{Resampler, SamplePacket};

use dasp::frame::Stereo;

/// Model of the output network: both PWM pins feed one node through
/// equal resistors, so the listener hears the even mix of the channels.
pub fn mix_frame(duty_a: u8, duty_b: u8) -> Stereo<f32> {
    let mixed = (duty_to_level(duty_a) + duty_to_level(duty_b)) * 0.5;
    [mixed, mixed]
}

/// A PWM duty as a centred sample in [-1, 1].
fn duty_to_level(duty: u8) -> f32 {
    (duty as f32) / 127.5 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_spans_full_scale() {
        assert_eq!(mix_frame(0, 0), [-1.0, -1.0]);
        assert_eq!(mix_frame(255, 255), [1.0, 1.0]);
    }

    #[test]
    fn opposite_duties_cancel() {
        let [l, r] = mix_frame(0, 255);
        assert!(l.abs() < 1e-6);
        assert!(r.abs() < 1e-6);
    }
}
