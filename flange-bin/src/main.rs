mod run;

use clap::{clap_app, crate_version};

fn main() {
    env_logger::init();

    let app = clap_app!(flange =>
        (version: crate_version!())
        (about: "Flanged noise generator.")
        (@arg speed: -s +takes_value "Initial pot position (0-1023). Higher is faster.")
        (@arg depth: -d +takes_value "Flange depth in dropped samples.")
        (@arg mute: -m "Mute all audio.")
    );

    let cmd_args = app.get_matches();

    let speed = match cmd_args.value_of("speed") {
        Some(s) => match s.parse::<u16>() {
            Ok(v) if v < 1024 => v,
            _ => panic!("speed must be 0-1023."),
        },
        None => 512,
    };

    let depth = match cmd_args.value_of("depth") {
        Some(s) => s.parse::<u16>().expect("depth must be a number."),
        None => flange::DEFAULT_DEPTH,
    };

    run::run(speed, depth, cmd_args.is_present("mute"));
}
