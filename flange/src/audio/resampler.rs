use crossbeam_channel::Receiver;
use dasp::{
    frame::{Frame, Stereo},
    interpolate::sinc::Sinc,
    ring_buffer::Fixed,
    signal::{
        interpolate::Converter,
        Signal,
    }
};

pub type SamplePacket = Box<[Stereo<f32>]>;

/// Resample from the device tick rate to the host output rate.
pub struct Resampler {
    converter: Converter<Source, Sinc<[Stereo<f32>; 2]>>,
}

impl Resampler {
    pub fn new(sample_recv: Receiver<SamplePacket>, source_rate: f64, target_rate: f64) -> Self {
        let sinc = Sinc::new(Fixed::from([Stereo::EQUILIBRIUM; 2]));
        Resampler {
            converter: Source::new(sample_recv).from_hz_to_hz(sinc, source_rate, target_rate),
        }
    }
}

impl Iterator for Resampler {
    type Item = Stereo<f32>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.converter.next())
    }
}

struct Source {
    receiver:   Receiver<SamplePacket>,

    current:    SamplePacket,
    n:          usize,
}

impl Source {
    fn new(receiver: Receiver<SamplePacket>) -> Self {
        Source {
            receiver:   receiver,

            current:    Box::new([]),
            n:          0,
        }
    }
}

impl Signal for Source {
    type Frame = Stereo<f32>;

    fn next(&mut self) -> Self::Frame {
        if self.n >= self.current.len() {
            // The tick thread paces itself against this channel, so a
            // packet is normally already waiting.
            match self.receiver.recv() {
                Ok(packet) => {
                    self.current = packet;
                    self.n = 0;
                },
                // Device gone: flatline.
                Err(_) => return [0.0, 0.0],
            }
        }
        let out = self.current[self.n];
        self.n += 1;
        out
    }
}
