//! fPrime headless runner
//!
//! Plays one autoplayed session in the reference arena and logs the score.
//!
//! Usage: `fprime [settings.json] [seed] [seconds]`

use fprime::Settings;
use fprime::session::Session;

/// Rendered frame rate of the headless loop
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next().filter(|a| a != "-") {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Settings {
            debug_mode: true,
            ..Default::default()
        },
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(20.0);

    let mut session = match Session::new(settings, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };

    let frames = (seconds / FRAME_DT).ceil() as u32;
    for _ in 0..frames {
        let report = session.advance(FRAME_DT);

        for bounce in &report.bounces {
            log::debug!("{} bounce -> {:?}", bounce.surface, bounce.velocity);
        }
        if let Some(tap) = &report.tap {
            log::info!(
                "t={:.2}s {}",
                session.time,
                session.controller.hud().earned_points.replace('\n', " ")
            );
            if let Some(debug) = &session.controller.hud().debug {
                log::debug!("{} | {} | {}", debug.position, debug.velocity, debug.timing);
            }
            log::debug!("tier {} for {}", tap.tier, tap.points);
        }
    }

    log::info!(
        "Session over after {:.1}s: {} points",
        session.time,
        session.controller.state().total_points
    );
}
