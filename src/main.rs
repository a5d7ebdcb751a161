//! Headless aquarium run.
//!
//! `aquaria [options.toml] [--frames N] [--seed S] [--realtime]`
//!
//! Builds the tank from a procedural model source, scripts a feed press and
//! a walk back toward the wall, and logs camera, feeding and frame
//! statistics. With `--realtime` frames are paced to 60 FPS and advanced by
//! the measured wall-clock delta. Set `RUST_LOG=debug` to see feeding
//! transitions.

use std::path::PathBuf;
use std::time::Duration;

use aquaria::animation::FeedingEvent;
use aquaria::engine::{AquariumEngine, DrawCounter};
use aquaria::input::InputEvent;
use aquaria::options::Options;
use aquaria::scene::ProceduralModels;
use aquaria::util::frame_timing::FramePacer;
use web_time::Instant;

const DT: f32 = 1.0 / 60.0;
const ROOM_HALF_EXTENT: f32 = 10.0;
const FEED_FRAME: u64 = 60;
const WALK_START: u64 = 120;
const WALK_END: u64 = 600;
const REPORT_EVERY: u64 = 600;
const REALTIME_FPS: u32 = 60;

struct Args {
    options: Option<PathBuf>,
    frames: u64,
    seed: Option<u64>,
    realtime: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        options: None,
        frames: 3600,
        seed: None,
        realtime: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.frames = value
                    .parse()
                    .map_err(|e| format!("bad --frames {value}: {e}"))?;
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = Some(
                    value
                        .parse()
                        .map_err(|e| format!("bad --seed {value}: {e}"))?,
                );
            }
            "--realtime" => args.realtime = true,
            path if args.options.is_none() && !path.starts_with("--") => {
                args.options = Some(PathBuf::from(path));
            }
            other => return Err(format!("unexpected argument: {other}")),
        }
    }
    Ok(args)
}

fn scripted_events(frame: u64) -> Vec<InputEvent> {
    let key = |k: &str| k.to_owned();
    match frame {
        FEED_FRAME => vec![InputEvent::KeyPressed { key: key("KeyF") }],
        WALK_START => vec![
            InputEvent::KeyReleased { key: key("KeyF") },
            InputEvent::KeyPressed { key: key("KeyS") },
        ],
        WALK_END => vec![InputEvent::KeyReleased { key: key("KeyS") }],
        _ => Vec::new(),
    }
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!(
                "Usage: aquaria [options.toml] [--frames N] [--seed S] [--realtime]"
            );
            std::process::exit(1);
        }
    };

    let mut options = match &args.options {
        Some(path) => match Options::load(path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };
    if args.seed.is_some() {
        options.population.seed = args.seed;
    }

    let models = ProceduralModels::new(ROOM_HALF_EXTENT);
    let mut engine = match AquariumEngine::from_options(options, &models) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let started = Instant::now();
    let mut counter = DrawCounter::default();
    let mut sessions = 0u32;
    let mut pacer = args.realtime.then(|| FramePacer::new(REALTIME_FPS));

    for frame in 1..=args.frames {
        let dt = match pacer.as_mut() {
            Some(pacer) => {
                while !pacer.should_render() {
                    std::thread::sleep(Duration::from_millis(1));
                }
                pacer.tick()
            }
            None => DT,
        };
        let output = engine.frame(dt, &scripted_events(frame));
        output.submit(&mut counter);

        if let Some(event) = engine.scene().last_feeding_step().event {
            if matches!(
                event,
                FeedingEvent::Consumed | FeedingEvent::ReachedFloor
            ) {
                sessions += 1;
            }
            log::info!(
                "frame {frame}: feeding {event:?} (t={:.2}s)",
                engine.timing().elapsed()
            );
        }

        if frame % REPORT_EVERY == 0 {
            let eye = engine.camera().position();
            log::info!(
                "frame {frame}: eye ({:.2}, {:.2}, {:.2}) yaw {:.1} pitch {:.1}, \
                 feeding {:?}, {} draws",
                eye.x,
                eye.y,
                eye.z,
                engine.camera().yaw(),
                engine.camera().pitch(),
                engine.scene().feeding().phase(),
                output.draws.len()
            );
        }
    }

    let wall = started.elapsed().as_secs_f64();
    log::info!(
        "{} frames ({:.1}s simulated) in {wall:.3}s wall, {:.0} frames/s",
        engine.timing().frame_count(),
        engine.timing().elapsed(),
        engine.timing().frame_count() as f64 / wall.max(f64::EPSILON)
    );
    log::info!(
        "{} draw calls over {} models, {sessions} feeding sessions completed",
        counter.draws,
        counter.models.len()
    );
}
