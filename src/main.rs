//! Headless SpaceTruck flight demo
//!
//! Replays a scripted pilot (thrust, turn, thrust again, coast) through the
//! navigation engine at 60 Hz and prints the HUD once every few frames.
//!
//! Usage: `spacetruck-nav [config.json] [--burst time_gated|cancel_on_release]
//!         [--rotation self_terminating|sustained]`

use spacetruck_nav::{
    BurstPolicy, HudReadout, NavState, Navigation, NavigationConfig, Pose, RotationPolicy,
};

/// Frame length in ms (60 Hz)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Print every Nth frame
const HUD_EVERY: u32 = 15;

/// Pilot input held during a span of frames
struct Segment {
    frames: u32,
    input: Option<NavState>,
    label: &'static str,
}

const FLIGHT_PLAN: &[Segment] = &[
    Segment { frames: 75, input: Some(NavState::Burst), label: "main engine" },
    Segment { frames: 30, input: None, label: "coast" },
    Segment { frames: 90, input: Some(NavState::RotatingLeft), label: "turn left" },
    Segment { frames: 60, input: Some(NavState::Burst), label: "correction burn" },
    Segment { frames: 45, input: Some(NavState::RotatingRight), label: "turn right" },
    Segment { frames: 60, input: None, label: "coast" },
];

fn exit_with(msg: String) -> ! {
    log::error!("{}", msg);
    eprintln!("{}", msg);
    std::process::exit(1);
}

/// Config file (optional) plus `--burst <policy>` / `--rotation <policy>` overrides
fn load_config() -> NavigationConfig {
    let mut path = None;
    let mut burst = None;
    let mut rotation = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--burst" => {
                let name = args.next().unwrap_or_default();
                burst = Some(
                    BurstPolicy::from_str(&name)
                        .unwrap_or_else(|| exit_with(format!("Unknown burst policy: {}", name))),
                );
            }
            "--rotation" => {
                let name = args.next().unwrap_or_default();
                rotation = Some(
                    RotationPolicy::from_str(&name)
                        .unwrap_or_else(|| exit_with(format!("Unknown rotation policy: {}", name))),
                );
            }
            _ => path = Some(arg),
        }
    }

    let mut config = match path {
        Some(path) => NavigationConfig::load(&path)
            .unwrap_or_else(|e| exit_with(format!("Failed to load config {}: {}", path, e))),
        None => {
            log::info!("Using default navigation config");
            NavigationConfig::default()
        }
    };
    if let Some(policy) = burst {
        config.burst_policy = policy;
    }
    if let Some(policy) = rotation {
        config.rotation_policy = policy;
    }
    log::info!(
        "Burst policy: {}, rotation policy: {}",
        config.burst_policy.as_str(),
        config.rotation_policy.as_str()
    );
    config
}

fn main() {
    env_logger::init();
    log::info!("SpaceTruck navigation demo starting...");

    let config = load_config();
    let mut nav = Navigation::new(Pose::default(), config)
        .unwrap_or_else(|e| exit_with(format!("Invalid navigation config: {}", e)));

    let mut frame: u32 = 0;
    for segment in FLIGHT_PLAN {
        log::info!("{} ({} frames)", segment.label, segment.frames);
        for _ in 0..segment.frames {
            let now = frame as f64 * FRAME_MS;
            if let Some(input) = segment.input {
                nav.set_state(input);
            }
            nav.update(now);

            if frame % HUD_EVERY == 0 {
                let pos = nav.position();
                println!(
                    "t={:>7.0}ms  pos=({:>8.2}, {:>8.2})  {}",
                    now,
                    pos.x,
                    pos.y,
                    HudReadout::poll(&nav)
                );
            }
            frame += 1;
        }
        if segment.input == Some(NavState::Burst) {
            nav.release_burst();
        }
        // Key up
        nav.set_state(NavState::Idle);
    }

    match serde_json::to_string_pretty(&nav.telemetry()) {
        Ok(json) => println!("\nFinal telemetry:\n{}", json),
        Err(e) => log::warn!("Could not serialize telemetry: {:?}", e),
    }
    log::info!("Demo finished after {} frames", frame);
}
