mod constants;
mod noise;
mod flange;
mod audio;
pub mod peripheral;

use crossbeam_channel::{Receiver, bounded};
use parking_lot::Mutex;
use std::sync::Arc;

use audio::{Resampler, SamplePacket};
use flange::Flange;

pub use constants::{
    TICK_RATE, DEFAULT_PHASE_INC, DEFAULT_DEPTH, ADC_OVERSAMPLE
};

/// Build-time effect parameters.
#[derive(Clone, Copy, Debug)]
pub struct FlangeConfig {
    /// Initial phase increment (effect speed).
    pub phase_inc: u16,
    /// Effect depth: samples of drift before the sweep reverses.
    pub depth: u16,
}

impl Default for FlangeConfig {
    fn default() -> Self {
        Self {
            phase_inc: DEFAULT_PHASE_INC,
            depth: DEFAULT_DEPTH,
        }
    }
}

/// The flanged noise device.
///
/// Construction starts the tick thread, the hosted stand-in for the
/// timer interrupt: it owns the flange state between foreground writes
/// and generates frames at the device tick rate, paced by the bounded
/// sample channel.
pub struct FlangedNoise {
    shared:         Arc<Mutex<Flange>>,
    sample_recv:    Option<Receiver<SamplePacket>>,
}

impl FlangedNoise {
    pub fn new(config: FlangeConfig) -> Self {
        let mut flange = Flange::new();
        flange.set_phase_increment(config.phase_inc);
        flange.set_depth(config.depth);
        let shared = Arc::new(Mutex::new(flange));

        let (sample_send, sample_recv) = bounded(4);
        let core = shared.clone();
        std::thread::Builder::new().name("tick".to_string()).spawn(move || {
            loop {
                let mut packet = vec![[0.0; 2]; constants::SAMPLE_PACKET_SIZE].into_boxed_slice();
                {
                    // One lock per packet: the foreground's analog of an
                    // interrupts-disabled window.
                    let mut flange = core.lock();
                    for frame in packet.iter_mut() {
                        let (duty_a, duty_b) = flange.clock();
                        *frame = audio::mix_frame(duty_a, duty_b);
                    }
                }
                if sample_send.send(packet).is_err() {
                    // Receiver gone: device dropped.
                    break;
                }
            }
        }).unwrap();

        Self {
            shared:         shared,
            sample_recv:    Some(sample_recv),
        }
    }

    /// Foreground handle for the pot and button paths.
    pub fn controls(&self) -> Controls {
        Controls {
            shared: self.shared.clone(),
        }
    }

    /// Take the audio output. Returns None after the first call.
    pub fn enable_audio(&mut self, sample_rate: f64) -> Option<AudioHandler> {
        self.sample_recv.take().map(|sample_recv| AudioHandler {
            resampler: Resampler::new(sample_recv, TICK_RATE as f64, sample_rate),
        })
    }
}

/// Handle for foreground writes to the shared flange state.
///
/// Each call holds the lock for the duration of one write, so the tick
/// thread never observes a half-applied update.
#[derive(Clone)]
pub struct Controls {
    pub(crate) shared: Arc<Mutex<Flange>>,
}

impl Controls {
    pub fn set_phase_increment(&self, inc: u16) {
        self.shared.lock().set_phase_increment(inc);
    }

    pub fn resync(&self) {
        self.shared.lock().resync();
    }
}

pub struct AudioHandler {
    resampler: Resampler,
}

impl AudioHandler {
    /// Fill an interleaved stereo buffer with output at the host rate.
    pub fn get_audio_packet(&mut self, buffer: &mut [f32]) {
        for frame in buffer.chunks_exact_mut(2) {
            if let Some([left, right]) = self.resampler.next() {
                frame[0] = left;
                frame[1] = right;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_produces_audio() {
        let mut device = FlangedNoise::new(FlangeConfig::default());
        let mut handler = device.enable_audio(48_000.0).unwrap();

        let mut buffer = vec![0.0_f32; 8192];
        handler.get_audio_packet(&mut buffer);

        let peak = buffer.iter().fold(0.0_f32, |acc, s| acc.max(s.abs()));
        assert!(peak > 0.1, "expected noise, got peak {}", peak);
        // Interleaved mono mix: both channels of a frame are equal.
        for frame in buffer.chunks_exact(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }

    #[test]
    fn audio_can_only_be_enabled_once() {
        let mut device = FlangedNoise::new(FlangeConfig::default());
        assert!(device.enable_audio(44_100.0).is_some());
        assert!(device.enable_audio(44_100.0).is_none());
    }

    #[test]
    fn controls_apply_while_ticking() {
        let device = FlangedNoise::new(FlangeConfig::default());
        let controls = device.controls();
        for _ in 0..100 {
            controls.set_phase_increment(0x8000);
            controls.resync();
        }
    }
}
