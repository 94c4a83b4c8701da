//! Tilt Maze demo entry point
//!
//! Runs the autopilot through a level headlessly and reports how the round
//! ended. Usage: `tilt-maze [settings.json] [level-name]`.

use std::path::Path;

use tilt_maze::consts::*;
use tilt_maze::maze::{MazeError, builtin};
use tilt_maze::sim::{Autopilot, BallSimulator, RoundTimer, StepEvent};
use tilt_maze::Settings;

/// Host frame rate; samples are consumed in fixed steps inside each frame
const FRAME_DT: f32 = 1.0 / 30.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    if let Some(level) = args.next() {
        settings.level = level;
    }

    if let Err(e) = run(&settings) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> Result<(), MazeError> {
    let level = builtin(&settings.level)?;
    let maze = level.graph()?;
    let mut sim = BallSimulator::new(&maze, settings.tuning, settings.viewport())?;
    let mut pilot = Autopilot::from_settings(&sim, maze.longest_path(), settings);
    let mut timer = RoundTimer::default();
    let gain = sim.tuning().accel_gain;

    log::info!(
        "Level {:?}: {}x{}, path of {} cells",
        level.name,
        maze.grid().cols(),
        maze.grid().rows(),
        maze.longest_path().len()
    );

    let mut accumulator = 0.0;
    let mut samples = 0u32;
    let mut last = StepEvent::None;

    'frames: while samples < settings.max_samples {
        accumulator += FRAME_DT;

        let mut substeps = 0;
        while accumulator >= SAMPLE_DT && substeps < MAX_SUBSTEPS {
            let input = pilot.steer(sim.current_position(), gain);
            let out = sim.advance_input(&input);
            timer.observe(out.event);
            timer.tick(SAMPLE_DT);
            accumulator -= SAMPLE_DT;
            substeps += 1;
            samples += 1;

            if out.event.is_terminal() {
                last = out.event;
                break 'frames;
            }
            if samples >= settings.max_samples {
                break 'frames;
            }
        }
    }

    let pos = sim.current_position();
    match last {
        StepEvent::GoalReached => println!(
            "{}: goal reached in {:.1}s ({} samples)",
            level.name,
            timer.elapsed(),
            samples
        ),
        StepEvent::HitWall => println!(
            "{}: hit a wall at ({:.1}, {:.1}) after {:.1}s",
            level.name,
            pos.x,
            pos.y,
            timer.elapsed()
        ),
        _ => println!(
            "{}: gave up after {} samples at ({:.1}, {:.1})",
            level.name, samples, pos.x, pos.y
        ),
    }

    Ok(())
}
