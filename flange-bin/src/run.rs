use flange::{FlangedNoise, FlangeConfig};
use flange::peripheral::{AdcPin, DigitalPin, FrontPanel};

use cpal::traits::StreamTrait;

use std::io::BufRead;
use std::sync::Arc;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Polls the button holds for: 8 polls at 5 ms reads as a solid press
/// with a clean release.
const PRESS_POLLS: u16 = 8;

/// Pot position shared with the console reader.
struct VirtualPot {
    position: Arc<AtomicU16>,
}

impl AdcPin for VirtualPot {
    fn convert(&mut self) -> u16 {
        self.position.load(Ordering::Relaxed) & 0x3FF
    }
}

/// Button that reads pressed for a set number of polls after `sync`.
struct VirtualButton {
    held: Arc<AtomicU16>,
}

impl DigitalPin for VirtualButton {
    fn is_low(&mut self) -> bool {
        self.held
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |polls| polls.checked_sub(1))
            .is_ok()
    }
}

pub fn run(speed: u16, depth: u16, mute: bool) {
    let mut device = FlangedNoise::new(FlangeConfig {
        depth: depth,
        ..Default::default()
    });

    let position = Arc::new(AtomicU16::new(speed));
    let held = Arc::new(AtomicU16::new(0));

    let panel = FrontPanel::new(
        VirtualPot { position: position.clone() },
        VirtualButton { held: held.clone() },
        device.controls(),
    );
    std::thread::Builder::new().name("panel".to_string()).spawn(move || {
        panel.run(POLL_INTERVAL);
    }).unwrap();

    let stream = make_audio_stream(&mut device, mute);
    stream.play().expect("couldn't play audio stream.");

    println!("commands: speed <0-1023> | sync | quit");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.expect("couldn't read stdin.");
        let mut words = line.split_whitespace();
        match words.next() {
            Some("speed") => match words.next().and_then(|w| w.parse::<u16>().ok()) {
                Some(v) if v < 1024 => position.store(v, Ordering::Relaxed),
                _ => println!("usage: speed <0-1023>"),
            },
            Some("sync") => held.store(PRESS_POLLS, Ordering::Relaxed),
            Some("quit") | Some("q") => break,
            Some(cmd) => println!("unknown command {}", cmd),
            None => {},
        }
    }
}

fn make_audio_stream(device: &mut FlangedNoise, mute: bool) -> cpal::Stream {
    use cpal::traits::{
        DeviceTrait,
        HostTrait
    };

    let host = cpal::default_host();
    let out_device = host.default_output_device().expect("no output device available.");

    let config = pick_output_config(&out_device).with_max_sample_rate();
    let sample_rate = config.sample_rate().0 as f64;
    println!("Audio sample rate {}", sample_rate);
    let mut audio_handler = device.enable_audio(sample_rate).unwrap();

    out_device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            audio_handler.get_audio_packet(data);
            if mute {
                for d in data.iter_mut() {
                    *d = 0.0;
                }
            }
        },
        move |err| {
            println!("Error occurred: {}", err);
        }
    ).unwrap()
}

fn pick_output_config(device: &cpal::Device) -> cpal::SupportedStreamConfigRange {
    use cpal::traits::DeviceTrait;

    const MIN: u32 = 32_000;

    let supported_configs_range = device.supported_output_configs()
        .expect("error while querying configs");

    for config in supported_configs_range {
        let cpal::SampleRate(v) = config.max_sample_rate();
        if v >= MIN {
            return config;
        }
    }

    device.supported_output_configs()
        .expect("error while querying formats")
        .next()
        .expect("No supported config")
}
