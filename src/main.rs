//! Headless run-through of the standard performance.
//!
//! Simulates a 60 fps frame clock far faster than real time, logging phase
//! transitions and periodic parameter snapshots. Pass an optional options
//! TOML path as the first argument.

use oration::engine::PerformanceEngine;
use oration::options::Options;
use oration::phase::Phase;
use oration::rig::{HeadRig, RigAdapter};
use web_time::{Duration, Instant};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(std::path::Path::new(&path)) {
            Ok(opts) => {
                log::info!("Loaded options from {path}");
                opts
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let start = Instant::now();
    let mut engine = PerformanceEngine::with_standard_script(options, start);
    let mut rig = HeadRig::new();

    let dt = 1.0 / 60.0;
    let mut t = 0.0f64;
    let mut next_report = 0.0f64;

    loop {
        t += dt;
        let now = start + Duration::from_secs_f64(t);
        let snapshot = engine.tick(now);
        rig.apply(&snapshot);

        while let Some(event) = engine.poll_event() {
            log::info!("{event:?} at simulated {t:.2}s");
        }

        if engine.phase() == Phase::Main
            && snapshot.elapsed_seconds >= next_report
        {
            log::info!(
                "t={:6.2}s jaw={:.3} angry={:.2} grin={:.2} zoom={:.2} \
                 camera_z={:.2}",
                snapshot.elapsed_seconds,
                snapshot.jaw_open,
                snapshot.angry_blend,
                snapshot.grin_blend,
                snapshot.camera_zoom,
                rig.pose().camera_position.z,
            );
            next_report += 10.0;
        }

        if snapshot.phase_state.is_terminal() {
            log::info!("presentation complete after {t:.2} simulated seconds");
            break;
        }
        if t > 600.0 {
            log::error!("presentation failed to terminate");
            std::process::exit(1);
        }
    }
}
